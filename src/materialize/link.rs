//! Link placement with collision handling.
use crate::translate::KnownExtensions;
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LinkOutcome {
    /// A new link was written at this path.
    Created(PathBuf),
    /// A link with the same target already exists at this path.
    Satisfied(PathBuf),
    /// Another writer created this path between the check and the write.
    LostRace(PathBuf),
}

enum Slot {
    Free(PathBuf),
    Satisfied(PathBuf),
}

/// Create a relative symlink at `link_path` pointing at `target`.
///
/// An occupied path that already links to `target` is left alone. Any other
/// occupant pushes the link to `<stem>_1<ext>`, `<stem>_2<ext>`, ...
pub(crate) fn place_link(
    link_path: &Path,
    target: &Path,
    extensions: &KnownExtensions,
) -> Result<LinkOutcome> {
    let parent = link_path
        .parent()
        .ok_or_else(|| anyhow!("link path {} has no parent", link_path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;

    let mut final_path = link_path.to_path_buf();
    if entry_exists(&final_path) {
        if links_to(&final_path, target)? {
            return Ok(LinkOutcome::Satisfied(final_path));
        }
        match next_free_slot(link_path, target, extensions)? {
            Slot::Satisfied(path) => return Ok(LinkOutcome::Satisfied(path)),
            Slot::Free(path) => final_path = path,
        }
    }

    if entry_exists(&final_path) {
        fs::remove_file(&final_path)
            .with_context(|| format!("remove {}", final_path.display()))?;
    }
    match create_symlink(target, &final_path) {
        Ok(()) => Ok(LinkOutcome::Created(final_path)),
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
            Ok(LinkOutcome::LostRace(final_path))
        }
        Err(err) => {
            Err(err).with_context(|| format!("create symlink {}", final_path.display()))
        }
    }
}

fn next_free_slot(link_path: &Path, target: &Path, extensions: &KnownExtensions) -> Result<Slot> {
    let parent = link_path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = link_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let (stem, ext) = extensions.split(&file_name);
    for suffix in 1usize.. {
        let candidate = parent.join(format!("{stem}_{suffix}{ext}"));
        if !entry_exists(&candidate) {
            return Ok(Slot::Free(candidate));
        }
        if links_to(&candidate, target)? {
            return Ok(Slot::Satisfied(candidate));
        }
    }
    Err(anyhow!("no free name for {}", link_path.display()))
}

/// True for anything at `path`, including dangling symlinks.
fn entry_exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

fn links_to(path: &Path, target: &Path) -> Result<bool> {
    let meta = fs::symlink_metadata(path).with_context(|| format!("inspect {}", path.display()))?;
    if !meta.file_type().is_symlink() {
        return Ok(false);
    }
    let current = fs::read_link(path).with_context(|| format!("read link {}", path.display()))?;
    Ok(current == target)
}

fn create_symlink(target: &Path, path: &Path) -> io::Result<()> {
    #[cfg(unix)]
    {
        std::os::unix::fs::symlink(target, path)
    }
    #[cfg(windows)]
    {
        std::os::windows::fs::symlink_file(target, path)
    }
    #[cfg(not(any(unix, windows)))]
    {
        let _ = target;
        let _ = path;
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "symlinks are unsupported on this platform",
        ))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn creates_link_and_parent_directories() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let link = dir.path().join("en/Guide.pdf");
        let target = Path::new("../src/指南.pdf");

        let outcome = place_link(&link, target, &KnownExtensions::builtin()).expect("place");
        assert_eq!(outcome, LinkOutcome::Created(link.clone()));
        assert_eq!(fs::read_link(&link).expect("read link"), target);
    }

    #[test]
    fn matching_link_is_satisfied() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let link = dir.path().join("Guide.pdf");
        let target = Path::new("src/a.pdf");
        std::os::unix::fs::symlink(target, &link).expect("symlink");

        let outcome = place_link(&link, target, &KnownExtensions::builtin()).expect("place");
        assert_eq!(outcome, LinkOutcome::Satisfied(link));
    }

    #[test]
    fn collision_appends_suffix_before_known_extension() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let exts = KnownExtensions::builtin();
        let link = dir.path().join("Guide.pdf");
        std::os::unix::fs::symlink("src/a.pdf", &link).expect("symlink");

        let outcome = place_link(&link, Path::new("src/b.pdf"), &exts).expect("place");
        let expected = dir.path().join("Guide_1.pdf");
        assert_eq!(outcome, LinkOutcome::Created(expected.clone()));

        let outcome = place_link(&link, Path::new("src/c.pdf"), &exts).expect("place");
        assert_eq!(outcome, LinkOutcome::Created(dir.path().join("Guide_2.pdf")));

        let outcome = place_link(&link, Path::new("src/b.pdf"), &exts).expect("place");
        assert_eq!(outcome, LinkOutcome::Satisfied(expected));
    }

    #[test]
    fn regular_file_in_the_way_is_not_replaced() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let link = dir.path().join("00.Basic Documentation");
        fs::write(&link, b"x").expect("write file");

        let outcome =
            place_link(&link, Path::new("src/a"), &KnownExtensions::builtin()).expect("place");
        assert_eq!(
            outcome,
            LinkOutcome::Created(dir.path().join("00.Basic Documentation_1"))
        );
        assert_eq!(fs::read(&link).expect("read file"), b"x");
    }
}
