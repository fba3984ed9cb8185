//! Directory-scoped literal names for specific files.
//!
//! A scope is the exact chain of directories between the source root and the
//! file. Each scope element matches a directory if it equals either the
//! original name or its translation, so scopes can be written in whichever
//! language is more convenient.
mod builtin;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Literal names for files directly inside one directory chain.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OverrideScope {
    pub scope: Vec<String>,
    pub files: BTreeMap<String, String>,
}

impl OverrideScope {
    fn matches(&self, dirs: &[String], translated_dirs: &[String]) -> bool {
        self.scope.len() == dirs.len()
            && self
                .scope
                .iter()
                .zip(dirs.iter().zip(translated_dirs))
                .all(|(expected, (original, translated))| {
                    expected == original || expected == translated
                })
    }
}

/// Override scopes checked in order; the first scope listing the file wins.
#[derive(Debug, Clone, Default)]
pub struct OverrideSet {
    scopes: Vec<OverrideScope>,
}

impl OverrideSet {
    pub fn new(scopes: Vec<OverrideScope>) -> Self {
        Self { scopes }
    }

    pub fn builtin() -> Self {
        Self::new(
            builtin::BUILTIN_SCOPES
                .iter()
                .map(|entry| OverrideScope {
                    scope: entry.scope.iter().map(|dir| dir.to_string()).collect(),
                    files: entry
                        .files
                        .iter()
                        .map(|(from, to)| (from.to_string(), to.to_string()))
                        .collect(),
                })
                .collect(),
        )
    }

    /// Put `scopes` ahead of the current ones so they take precedence.
    pub fn prepend(&mut self, scopes: &[OverrideScope]) {
        let mut merged = scopes.to_vec();
        merged.append(&mut self.scopes);
        self.scopes = merged;
    }

    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }

    /// Literal replacement for `file_name` under `dirs`, if one is registered.
    ///
    /// `translated_dirs` holds the translation of each entry in `dirs`.
    pub fn resolve(
        &self,
        dirs: &[String],
        translated_dirs: &[String],
        file_name: &str,
    ) -> Option<&str> {
        self.scopes
            .iter()
            .filter(|scope| scope.matches(dirs, translated_dirs))
            .find_map(|scope| scope.files.get(file_name))
            .map(String::as_str)
    }
}
