//! Optional JSON configuration extending the built-in tables.
//!
//! Everything in the file is additive: phrase rules run before the built-in
//! ones, override scopes are consulted before the built-in scopes, and the
//! extension and excluded-directory lists are merged.
use crate::overrides::OverrideScope;
use crate::translate::PhraseRule;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Current schema version for the config file.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

const RESERVED_NAME_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct EnlinkConfig {
    pub schema_version: u32,
    #[serde(default)]
    pub rules: Vec<PhraseRule>,
    #[serde(default)]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub exclude_dirs: Vec<String>,
    #[serde(default)]
    pub overrides: Vec<OverrideScope>,
}

/// Config used when no file is given: built-in tables only.
pub fn default_config() -> EnlinkConfig {
    EnlinkConfig {
        schema_version: CONFIG_SCHEMA_VERSION,
        rules: Vec::new(),
        extensions: Vec::new(),
        exclude_dirs: Vec::new(),
        overrides: Vec::new(),
    }
}

pub fn load_config(path: &Path) -> Result<EnlinkConfig> {
    let bytes = fs::read(path).with_context(|| format!("read config {}", path.display()))?;
    let config: EnlinkConfig = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse config JSON {}", path.display()))?;
    Ok(config)
}

/// Reject configs that would break translation guarantees.
pub fn validate_config(config: &EnlinkConfig) -> Result<()> {
    if config.schema_version != CONFIG_SCHEMA_VERSION {
        return Err(anyhow!(
            "unsupported config schema_version {} (expected {CONFIG_SCHEMA_VERSION})",
            config.schema_version
        ));
    }
    for (idx, rule) in config.rules.iter().enumerate() {
        if rule.pattern.is_empty() {
            return Err(anyhow!("rules[{idx}] has an empty pattern"));
        }
    }
    for (idx, ext) in config.extensions.iter().enumerate() {
        let trimmed = ext.trim_start_matches('.');
        if trimmed.is_empty() || trimmed.contains('.') || trimmed.contains(RESERVED_NAME_CHARS) {
            return Err(anyhow!("extensions[{idx}] {ext:?} is not a file extension"));
        }
    }
    for (idx, dir) in config.exclude_dirs.iter().enumerate() {
        if dir.is_empty() || dir.contains(['/', '\\']) {
            return Err(anyhow!(
                "exclude_dirs[{idx}] {dir:?} must be a single directory name"
            ));
        }
    }
    for (idx, scope) in config.overrides.iter().enumerate() {
        if scope.scope.iter().any(|dir| dir.is_empty()) {
            return Err(anyhow!("overrides[{idx}] has an empty scope entry"));
        }
        for (from, to) in &scope.files {
            validate_literal_name(to)
                .with_context(|| format!("overrides[{idx}] entry for {from:?}"))?;
        }
    }
    Ok(())
}

fn validate_literal_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(anyhow!("replacement name is empty"));
    }
    if name == "." || name == ".." {
        return Err(anyhow!("replacement name {name:?} is not a file name"));
    }
    if let Some(ch) = name.chars().find(|ch| RESERVED_NAME_CHARS.contains(ch)) {
        return Err(anyhow!(
            "replacement name {name:?} contains reserved character {ch:?}"
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
