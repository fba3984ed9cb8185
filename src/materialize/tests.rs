use super::*;
use crate::config::default_config;
use crate::translate::select_romanizer;
use std::fs;
use tempfile::TempDir;

struct Fixture {
    _dir: TempDir,
    root: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let root = dir.path().canonicalize().expect("canonicalize temp dir");
        Self { _dir: dir, root }
    }

    fn src(&self) -> PathBuf {
        self.root.join("src")
    }

    fn dest(&self) -> PathBuf {
        self.root.join("out")
    }

    fn touch(&self, rel: &str) {
        let path = self.src().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent directory");
        }
        fs::write(&path, rel.as_bytes()).expect("write file");
    }

    fn options(&self, dry_run: bool) -> MaterializeOptions {
        MaterializeOptions {
            source: self.src(),
            dest: self.dest(),
            prefix: PathBuf::new(),
            dry_run,
            keep_going: false,
            exclude_dirs: Vec::new(),
        }
    }
}

fn mapper() -> PathMapper {
    PathMapper::from_config(&default_config(), select_romanizer(false))
}

fn run(options: &MaterializeOptions) -> (MaterializeReport, String) {
    let mut out = Vec::new();
    let report = materialize(options, &mapper(), &mut out).expect("materialize");
    (report, String::from_utf8(out).expect("utf-8 output"))
}

#[test]
fn dry_run_prints_plan_without_touching_disk() {
    let fx = Fixture::new();
    fx.touch("00.基础文档/说明.txt");
    fx.touch(".git/HEAD");
    let mut options = fx.options(true);
    options.prefix = PathBuf::from("en");

    let (report, out) = run(&options);

    assert_eq!(report.planned, 1);
    assert_eq!(report.created, 0);
    assert_eq!(
        out,
        "LINK: en/00.Basic Documentation/Guide.txt -> ../../../src/00.基础文档/说明.txt\n"
    );
    assert!(!fx.dest().exists());
}

#[test]
fn absolute_prefix_is_rejected() {
    let fx = Fixture::new();
    fx.touch("a.txt");
    let mut options = fx.options(true);
    options.prefix = fx.root.join("abs");
    let err = materialize(&options, &mapper(), &mut Vec::new()).expect_err("absolute prefix");
    assert!(err.to_string().contains("relative"));
}

#[test]
fn missing_source_is_an_error() {
    let fx = Fixture::new();
    let err = materialize(&fx.options(true), &mapper(), &mut Vec::new()).expect_err("no source");
    assert!(err.to_string().contains("source root"));
}

#[test]
fn plan_link_uses_overrides_for_scoped_files() {
    let fx = Fixture::new();
    let source_root = fx.src();
    let file = source_root.join("00.基础文档/软件相关/tools/相机标定说明.pdf");
    let planned = plan_link(
        &source_root,
        &fx.dest(),
        Path::new("docs"),
        &file,
        &mapper(),
    )
    .expect("plan link");
    assert_eq!(
        planned.link_rel,
        PathBuf::from("docs/00.Basic Documentation/Software/tools/Camera Calibration Instructions.pdf")
    );
    assert_eq!(
        planned.target,
        PathBuf::from("../../../../../src/00.基础文档/软件相关/tools/相机标定说明.pdf")
    );
}

#[cfg(unix)]
#[test]
fn links_resolve_back_to_sources() {
    let fx = Fixture::new();
    fx.touch("00.基础文档/硬件相关/芯片/SA62105X芯片简介v1.2.pdf");
    fx.touch("测试报告.pdf");

    let (report, out) = run(&fx.options(false));
    assert_eq!(report.planned, 2);
    assert_eq!(report.created, 2);
    assert!(out.is_empty());

    let chip = fx
        .dest()
        .join("00.Basic Documentation/Hardware/Chip/SA62105X Chip Overview v1.2.pdf");
    let report_link = fx.dest().join("Test Reports.pdf");
    for (link, source) in [
        (&chip, "00.基础文档/硬件相关/芯片/SA62105X芯片简介v1.2.pdf"),
        (&report_link, "测试报告.pdf"),
    ] {
        let meta = fs::symlink_metadata(link).expect("link exists");
        assert!(meta.file_type().is_symlink());
        assert!(fs::read_link(link).expect("read link").is_relative());
        assert_eq!(
            fs::read_to_string(link).expect("follow link"),
            source,
            "{} should resolve to {source}",
            link.display()
        );
    }
}

#[cfg(unix)]
#[test]
fn colliding_names_get_numeric_suffixes() {
    let fx = Fixture::new();
    fx.touch("Report.pdf");
    fx.touch("报告.pdf");

    let (report, _) = run(&fx.options(false));
    assert_eq!(report.created, 2);

    let first = fx.dest().join("Report.pdf");
    let second = fx.dest().join("Report_1.pdf");
    assert_eq!(fs::read_to_string(&first).expect("follow first"), "Report.pdf");
    assert_eq!(fs::read_to_string(&second).expect("follow second"), "报告.pdf");
}

#[cfg(unix)]
#[test]
fn rerun_creates_nothing_new() {
    let fx = Fixture::new();
    fx.touch("Report.pdf");
    fx.touch("报告.pdf");
    fx.touch("00.基础文档/开发指南.pdf");

    let (first, _) = run(&fx.options(false));
    assert_eq!(first.created, 3);

    let (second, _) = run(&fx.options(false));
    assert_eq!(second.planned, 3);
    assert_eq!(second.created, 0);
    assert_eq!(second.satisfied, 3);
    assert!(!fx.dest().join("Report_2.pdf").exists());
}

#[cfg(unix)]
#[test]
fn destination_inside_source_is_not_walked() {
    let fx = Fixture::new();
    fx.touch("报告.pdf");
    let mut options = fx.options(false);
    options.dest = fx.src().join("en");

    let (first, _) = run(&options);
    assert_eq!(first.created, 1);
    let (second, _) = run(&options);
    assert_eq!(second.planned, 1);
    assert_eq!(second.created, 0);
}

#[cfg(unix)]
#[test]
fn keep_going_counts_failures() {
    let fx = Fixture::new();
    fx.touch("硬件相关/a.txt");
    fx.touch("b.txt");
    fs::create_dir_all(fx.dest()).expect("create dest");
    fs::write(fx.dest().join("Hardware"), b"not a directory").expect("write blocker");

    let mut options = fx.options(false);
    assert!(materialize(&options, &mapper(), &mut Vec::new()).is_err());

    options.keep_going = true;
    let (report, _) = run(&options);
    assert_eq!(report.planned, 2);
    assert_eq!(report.failed, 1);
    assert_eq!(report.created + report.satisfied, 1);
}

#[cfg(unix)]
#[test]
fn configured_exclusions_are_pruned() {
    let fx = Fixture::new();
    fx.touch("node_modules/x.js");
    fx.touch("keep.txt");
    let mut options = fx.options(true);
    options.exclude_dirs = vec!["node_modules".to_string()];

    let (report, out) = run(&options);
    assert_eq!(report.planned, 1);
    assert_eq!(out, "LINK: keep.txt -> ../src/keep.txt\n");
}

#[cfg(unix)]
#[test]
fn keep_going_counts_unreadable_directories() {
    use std::os::unix::fs::PermissionsExt;

    let fx = Fixture::new();
    fx.touch("b.txt");
    fx.touch("锁定/a.txt");
    let locked = fx.src().join("锁定");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).expect("lock dir");
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("unlock dir");
        return;
    }

    let mut options = fx.options(true);
    assert!(materialize(&options, &mapper(), &mut Vec::new()).is_err());

    options.keep_going = true;
    let (report, out) = run(&options);
    assert_eq!(report.planned, 1);
    assert_eq!(report.failed, 1);
    assert_eq!(out, "LINK: b.txt -> ../src/b.txt\n");

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("unlock dir");
}
