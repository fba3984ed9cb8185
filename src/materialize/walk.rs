use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Tooling directories never worth mirroring.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[".git", ".svn", ".hg", ".venv", "__pycache__"];

/// Files found by one walk, plus entries that could not be read.
#[derive(Debug, Default)]
pub(crate) struct SourceFiles {
    pub files: Vec<PathBuf>,
    pub unreadable: usize,
}

/// Regular files under `root`, sorted by name within each directory.
///
/// Excluded directories and `skip_dir` are pruned before descent. Symlinks are
/// neither followed nor returned. With `keep_going`, unreadable entries are
/// logged and counted instead of failing the walk.
pub(crate) fn collect_source_files(
    root: &Path,
    excluded: &BTreeSet<String>,
    skip_dir: Option<&Path>,
    keep_going: bool,
) -> Result<SourceFiles> {
    let mut found = SourceFiles::default();
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_pruned(entry, excluded, skip_dir));
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if keep_going => {
                let path = err.path().unwrap_or(root).display().to_string();
                tracing::warn!(path = %path, "skipping unreadable entry: {err}");
                found.unreadable += 1;
                continue;
            }
            Err(err) => return Err(err).with_context(|| format!("walk {}", root.display())),
        };
        if entry.file_type().is_file() {
            found.files.push(entry.into_path());
        }
    }
    Ok(found)
}

fn is_pruned(entry: &DirEntry, excluded: &BTreeSet<String>, skip_dir: Option<&Path>) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    if skip_dir.is_some_and(|dir| entry.path() == dir) {
        tracing::debug!(dir = %entry.path().display(), "skipping destination root inside source");
        return true;
    }
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| excluded.contains(name))
}
