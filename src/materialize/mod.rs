//! Mirror a source tree as English-named relative symlinks.
//!
//! The walk is a single sorted pass. Every regular file yields one planned
//! link; a dry run stops at printing the plan.
mod link;
mod paths;
mod walk;

pub use walk::DEFAULT_EXCLUDED_DIRS;

use crate::mapper::PathMapper;
use anyhow::{anyhow, Context, Result};
use link::LinkOutcome;
use serde::Serialize;
use std::collections::BTreeSet;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct MaterializeOptions {
    pub source: PathBuf,
    pub dest: PathBuf,
    /// Relative path inserted between `dest` and the translated components.
    pub prefix: PathBuf,
    pub dry_run: bool,
    /// Log and count per-file filesystem errors instead of aborting.
    pub keep_going: bool,
    /// Directory names pruned in addition to `DEFAULT_EXCLUDED_DIRS`.
    pub exclude_dirs: Vec<String>,
}

/// Counts for one run. `planned` is every file seen.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct MaterializeReport {
    pub planned: usize,
    pub created: usize,
    pub satisfied: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// One source file and where its link goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedLink {
    pub source: PathBuf,
    /// Link path relative to the destination root, prefix included.
    pub link_rel: PathBuf,
    pub link_path: PathBuf,
    /// Link contents: the source file relative to the link's directory.
    pub target: PathBuf,
}

/// Plan (and unless `dry_run`, create) one link per source file.
///
/// Dry runs write one `LINK:` line per file to `out`.
pub fn materialize<W: Write>(
    options: &MaterializeOptions,
    mapper: &PathMapper,
    out: &mut W,
) -> Result<MaterializeReport> {
    if options.prefix.is_absolute() {
        return Err(anyhow!(
            "prefix {} must be a relative path",
            options.prefix.display()
        ));
    }
    let source_root = paths::canonical_dir(&options.source)?;
    let dest_root = paths::resolve_root(&options.dest)?;
    let excluded: BTreeSet<String> = DEFAULT_EXCLUDED_DIRS
        .iter()
        .map(|dir| dir.to_string())
        .chain(options.exclude_dirs.iter().cloned())
        .collect();
    let found = walk::collect_source_files(
        &source_root,
        &excluded,
        Some(&dest_root),
        options.keep_going,
    )?;
    let files = found.files;
    tracing::debug!(
        source = %source_root.display(),
        dest = %dest_root.display(),
        files = files.len(),
        dry_run = options.dry_run,
        "collected source files"
    );

    let mut report = MaterializeReport {
        failed: found.unreadable,
        ..MaterializeReport::default()
    };
    for file in files {
        report.planned += 1;
        let planned = plan_link(&source_root, &dest_root, &options.prefix, &file, mapper)?;
        if options.dry_run {
            writeln!(
                out,
                "LINK: {} -> {}",
                planned.link_rel.display(),
                planned.target.display()
            )
            .context("write plan line")?;
            continue;
        }
        match link::place_link(
            &planned.link_path,
            &planned.target,
            mapper.translator().extensions(),
        ) {
            Ok(LinkOutcome::Created(path)) => {
                tracing::debug!(link = %path.display(), target = %planned.target.display(), "created link");
                report.created += 1;
            }
            Ok(LinkOutcome::Satisfied(path)) => {
                tracing::debug!(link = %path.display(), "link already in place");
                report.satisfied += 1;
            }
            Ok(LinkOutcome::LostRace(path)) => {
                tracing::debug!(link = %path.display(), "link appeared concurrently; skipped");
                report.skipped += 1;
            }
            Err(err) if options.keep_going => {
                tracing::warn!(source = %planned.source.display(), "{err:#}");
                report.failed += 1;
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("link {}", planned.source.display()));
            }
        }
    }

    tracing::info!(
        planned = report.planned,
        created = report.created,
        satisfied = report.satisfied,
        skipped = report.skipped,
        failed = report.failed,
        "materialize complete"
    );
    Ok(report)
}

/// Compute the destination of `file` without touching the filesystem.
pub fn plan_link(
    source_root: &Path,
    dest_root: &Path,
    prefix: &Path,
    file: &Path,
    mapper: &PathMapper,
) -> Result<PlannedLink> {
    let rel = file.strip_prefix(source_root).with_context(|| {
        format!(
            "{} is outside source root {}",
            file.display(),
            source_root.display()
        )
    })?;
    let parts: Vec<String> = rel
        .components()
        .map(|part| part.as_os_str().to_string_lossy().into_owned())
        .collect();

    let mut link_rel = prefix.to_path_buf();
    for part in mapper.map_components(&parts) {
        link_rel.push(part);
    }
    let link_path = paths::normalize_lexically(&dest_root.join(&link_rel));
    let link_dir = link_path
        .parent()
        .ok_or_else(|| anyhow!("link path {} has no parent", link_path.display()))?;
    let target = paths::relative_path(file, link_dir);

    Ok(PlannedLink {
        source: file.to_path_buf(),
        link_rel,
        link_path,
        target,
    })
}

#[cfg(test)]
mod tests;
