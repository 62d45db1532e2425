/// End-to-end scan tests over a temporary directory tree.
///
/// Discovery is relative to the working directory, so these tests pin the
/// cwd and run serially.
use std::fs;

use rand::SeedableRng;
use rand::rngs::StdRng;
use regex::Regex;
use serial_test::serial;
use tempfile::TempDir;

use crate::scan;

struct CwdGuard {
    original: std::path::PathBuf,
}

impl CwdGuard {
    fn enter(path: &std::path::Path) -> Self {
        let original = std::env::current_dir().expect("current dir");
        std::env::set_current_dir(path).expect("set cwd");
        Self { original }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

#[test]
#[serial]
fn scan_reports_relative_paths_and_positions() {
    let dir = TempDir::new().expect("tempdir");
    fs::create_dir(dir.path().join("screens")).expect("mkdir");
    fs::write(
        dir.path().join("screens/form.tsx"),
        "function Form() {\n    return <TextInput value={state.name} />;\n}\n",
    )
    .expect("write fixture");
    fs::write(dir.path().join("notes.txt"), "not a tsx file").expect("write fixture");

    let _cwd = CwdGuard::enter(dir.path());
    let mut rng = StdRng::seed_from_u64(1);
    let mut out = Vec::new();
    let total = scan::scan_current_dir(&mut rng, &mut out).expect("scan");
    assert_eq!(total, 1);

    let report = String::from_utf8(out).expect("utf8");
    let re = Regex::new(
        r"^screens/form\.tsx \(2,12\): Form/TextInput\|value=state-name--[0-9a-f]{1,8}\n$",
    )
    .unwrap();
    assert!(re.is_match(&report), "unexpected report: {report:?}");
}

#[test]
#[serial]
fn scan_processes_files_in_discovery_order() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("alpha.tsx"),
        "function Alpha() {\n    return <TextInput value={a} />;\n}\n",
    )
    .expect("write fixture");
    fs::write(
        dir.path().join("beta.tsx"),
        "function Beta() {\n    return <TextInput value={b} />;\n}\n",
    )
    .expect("write fixture");

    let _cwd = CwdGuard::enter(dir.path());
    let mut rng = StdRng::seed_from_u64(2);
    let mut out = Vec::new();
    let total = scan::scan_current_dir(&mut rng, &mut out).expect("scan");
    assert_eq!(total, 2);

    let report = String::from_utf8(out).expect("utf8");
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("alpha.tsx "));
    assert!(lines[1].starts_with("beta.tsx "));
}

#[test]
#[serial]
fn scan_without_tsx_files_emits_nothing() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("readme.md"), "# nothing to see").expect("write fixture");

    let _cwd = CwdGuard::enter(dir.path());
    let mut rng = StdRng::seed_from_u64(3);
    let mut out = Vec::new();
    let total = scan::scan_current_dir(&mut rng, &mut out).expect("scan");
    assert_eq!(total, 0);
    assert!(out.is_empty());
}

#[test]
#[serial]
fn scan_suffixes_differ_across_files_in_one_run() {
    // The generator is shared across the run and never reset between files,
    // so two structurally identical files get different suffixes.
    let source = "function Form() {\n    return <TextInput value={x} />;\n}\n";
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("one.tsx"), source).expect("write fixture");
    fs::write(dir.path().join("two.tsx"), source).expect("write fixture");

    let _cwd = CwdGuard::enter(dir.path());
    let mut rng = StdRng::seed_from_u64(4);
    let mut out = Vec::new();
    scan::scan_current_dir(&mut rng, &mut out).expect("scan");

    let report = String::from_utf8(out).expect("utf8");
    let suffixes: Vec<&str> = report
        .lines()
        .map(|line| line.rsplit_once("--").expect("suffix").1)
        .collect();
    assert_eq!(suffixes.len(), 2);
    assert_ne!(suffixes[0], suffixes[1]);
}
