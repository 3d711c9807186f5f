//! Integration tests that run the CLI binary.

use std::fs;
use std::path::Path;

fn bin() -> std::process::Command {
    let bin = env!("CARGO_BIN_EXE_dirtree");
    let mut cmd = std::process::Command::new(bin);
    cmd.env_remove("RUST_LOG");
    cmd
}

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent");
    }
    fs::write(path, "").expect("write file");
}

#[test]
fn cli_help_succeeds_and_outputs_usage() {
    let output = bin()
        .arg("--help")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("PATH"), "expected usage text in output");
}

#[test]
fn cli_version_succeeds() {
    let output = bin()
        .arg("--version")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("dirtree"));
}

#[test]
fn cli_prints_current_directory_by_default() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    touch(&tmp.path().join("b.txt"));
    touch(&tmp.path().join("a.txt"));
    touch(&tmp.path().join("sub/c.txt"));
    touch(&tmp.path().join("node_modules/dep/index.js"));

    let output = bin()
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        ".\n├── a.txt\n├── b.txt\n└── sub\n    └── c.txt\n"
    );
    assert!(output.stderr.is_empty(), "nothing logged at default level");
}

#[test]
fn cli_accepts_root_path_argument() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    touch(&tmp.path().join("project/src/lib.rs"));

    let output = bin()
        .arg(tmp.path().join("project"))
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        ".\n└── src\n    └── lib.rs\n"
    );
}

#[test]
fn cli_missing_root_exits_with_error() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .arg(tmp.path().join("missing"))
        .output()
        .expect("binary not found - run cargo build first");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("path does not exist"),
        "expected config error, got: {}",
        stderr
    );
}

#[test]
fn cli_file_root_exits_with_error() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let file = tmp.path().join("plain.txt");
    touch(&file);

    let output = bin()
        .arg(&file)
        .output()
        .expect("binary not found - run cargo build first");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not a directory"), "got: {}", stderr);
}

#[test]
fn cli_verbose_logs_summary_to_stderr_only() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    touch(&tmp.path().join("one.txt"));

    let output = bin()
        .arg("-v")
        .arg(tmp.path())
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), ".\n└── one.txt\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("0 directories, 1 files"), "got: {}", stderr);
}

#[test]
fn cli_completions_succeeds() {
    let output = bin()
        .args(["completions", "bash"])
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("dirtree"));
}
