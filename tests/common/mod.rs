//! Shared test infrastructure for integration tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Temporary workspace holding a `src/` tree and an `out/` destination.
pub struct TreeFixture {
    _dir: TempDir,
    pub root: PathBuf,
}

impl TreeFixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let root = dir.path().canonicalize().expect("canonicalize temp dir");
        Self { _dir: dir, root }
    }

    pub fn src(&self) -> PathBuf {
        self.root.join("src")
    }

    pub fn dest(&self) -> PathBuf {
        self.root.join("out")
    }

    /// Create a source file whose content is its own relative path.
    pub fn touch(&self, rel: &str) {
        let path = self.src().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent directory");
        }
        fs::write(&path, rel.as_bytes()).expect("write source file");
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.root.join(name);
        fs::write(&path, contents).expect("write fixture file");
        path
    }

    /// Run `enlink --src <src> --dest <out>` plus `extra` with logging off.
    pub fn run(&self, extra: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_enlink"))
            .arg("--src")
            .arg(self.src())
            .arg("--dest")
            .arg(self.dest())
            .args(extra)
            .env("ENLINK_LOG", "off")
            .current_dir(&self.root)
            .output()
            .expect("run enlink")
    }
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf-8 stdout")
}

pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "enlink failed with {}: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Follow a symlink and return the file content it reaches.
pub fn read_through(link: &Path) -> String {
    let meta = fs::symlink_metadata(link)
        .unwrap_or_else(|err| panic!("stat {}: {err}", link.display()));
    assert!(meta.file_type().is_symlink(), "{} is not a symlink", link.display());
    fs::read_to_string(link).unwrap_or_else(|err| panic!("follow {}: {err}", link.display()))
}
