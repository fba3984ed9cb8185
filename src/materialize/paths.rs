//! Root resolution and relative link targets.
use anyhow::{anyhow, Context, Result};
use std::env;
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

/// Canonical path of an existing directory.
pub(crate) fn canonical_dir(path: &Path) -> Result<PathBuf> {
    let resolved = path
        .canonicalize()
        .with_context(|| format!("resolve source root {}", path.display()))?;
    if !resolved.is_dir() {
        return Err(anyhow!("source root {} is not a directory", path.display()));
    }
    Ok(resolved)
}

/// Absolute form of `path`, which need not exist yet.
///
/// The deepest existing ancestor is canonicalized and the missing tail is
/// appended, so the result is comparable with canonical source paths.
pub(crate) fn resolve_root(path: &Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .context("resolve current directory")?
            .join(path)
    };
    let absolute = normalize_lexically(&absolute);

    let mut existing = absolute.as_path();
    let mut tail: Vec<OsString> = Vec::new();
    loop {
        if existing.exists() {
            let mut resolved = existing
                .canonicalize()
                .with_context(|| format!("resolve {}", existing.display()))?;
            for name in tail.iter().rev() {
                resolved.push(name);
            }
            return Ok(resolved);
        }
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                tail.push(name.to_os_string());
                existing = parent;
            }
            _ => break,
        }
    }
    Ok(absolute)
}

/// Drop `.` components and fold `..` into the preceding component.
pub(crate) fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let can_pop = matches!(out.components().next_back(), Some(Component::Normal(_)));
                if can_pop {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Path from directory `base` to `target`; both absolute and normalized.
pub(crate) fn relative_path(target: &Path, base: &Path) -> PathBuf {
    let target_parts: Vec<Component> = target.components().collect();
    let base_parts: Vec<Component> = base.components().collect();
    let common = target_parts
        .iter()
        .zip(&base_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut rel = PathBuf::new();
    for _ in common..base_parts.len() {
        rel.push("..");
    }
    for part in &target_parts[common..] {
        rel.push(part.as_os_str());
    }
    if rel.as_os_str().is_empty() {
        rel.push(".");
    }
    rel
}
