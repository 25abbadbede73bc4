//! Integration tests for the framezgen binary.
//!
//! Each test runs the real binary in a fresh temporary directory and checks
//! the filesystem output contract and the console output contract.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

use framezgen_adapters::framez_manifest;

fn framezgen(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("framezgen").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn full_run_creates_the_skeleton() {
    let temp = TempDir::new().unwrap();
    framezgen(&temp).assert().success();

    for dir in [
        "src/components",
        "src/contexts",
        "src/screens",
        "src/navigation",
        "src/lib",
        "src/types",
        "src/utils",
        "assets/images",
    ] {
        assert!(temp.path().join(dir).is_dir(), "missing directory {dir}");
    }

    let app = fs::read_to_string(temp.path().join("App.tsx")).unwrap();
    assert!(app.contains("<AuthProvider>"));

    let gitkeep = temp.path().join("src/components/.gitkeep");
    assert_eq!(fs::metadata(&gitkeep).unwrap().len(), 0);
}

#[test]
fn written_files_match_the_builtin_manifest() {
    let temp = TempDir::new().unwrap();
    framezgen(&temp).assert().success();

    for spec in framez_manifest().files() {
        let on_disk = fs::read_to_string(temp.path().join(&spec.path))
            .unwrap_or_else(|e| panic!("cannot read {}: {e}", spec.path.display()));
        assert_eq!(
            on_disk,
            spec.content,
            "content mismatch for {}",
            spec.path.display()
        );
    }
}

#[test]
fn stdout_reports_each_action_and_the_banner() {
    let temp = TempDir::new().unwrap();
    framezgen(&temp)
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("Creating directories..."))
        .stdout(predicate::str::contains(
            "\u{2713} Created directory: src/components",
        ))
        .stdout(predicate::str::contains(
            "\u{2713} Created directory: assets/images",
        ))
        .stdout(predicate::str::contains("Creating files..."))
        .stdout(predicate::str::contains("\u{2713} Created: .gitignore"))
        .stdout(predicate::str::contains("\u{2713} Created: App.tsx"))
        .stdout(predicate::str::contains(
            "\u{2713} Created: src/utils/.gitkeep",
        ))
        .stdout(predicate::str::contains(
            "\u{2705} Framez project structure created successfully!",
        ))
        .stdout(predicate::str::contains("Next steps:"))
        .stdout(predicate::str::contains("1. Run: npm install"))
        .stdout(predicate::str::contains("4. Run: npm start"));
}

#[test]
fn second_run_is_idempotent() {
    let temp = TempDir::new().unwrap();
    framezgen(&temp).assert().success();

    // Scribble over a generated file; the re-run must restore it.
    fs::write(temp.path().join("package.json"), "{}").unwrap();

    framezgen(&temp).assert().success();

    let pkg = fs::read_to_string(temp.path().join("package.json")).unwrap();
    assert!(pkg.contains("\"name\": \"framez\""));
}

#[test]
fn quiet_flag_silences_stdout_but_still_writes() {
    let temp = TempDir::new().unwrap();
    framezgen(&temp)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(temp.path().join("README.md").is_file());
}

#[test]
fn filesystem_failure_aborts_without_banner() {
    let temp = TempDir::new().unwrap();
    // A plain file where the first directory must go makes create_dir_all
    // fail regardless of the user the tests run as.
    fs::write(temp.path().join("src"), "not a directory").unwrap();

    framezgen(&temp)
        .arg("--no-color")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("\u{2705}").not())
        .stderr(predicate::str::contains("Generation failed"));
}

#[test]
fn explicit_missing_config_is_a_config_error() {
    let temp = TempDir::new().unwrap();
    framezgen(&temp)
        .args(["--config", "does-not-exist.toml"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));

    // Nothing may be generated when startup fails.
    assert!(!temp.path().join("package.json").exists());
}

#[test]
fn help_flag_documents_the_tool() {
    let temp = TempDir::new().unwrap();
    framezgen(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("framezgen"))
        .stdout(predicate::str::contains("--quiet"));
}

#[test]
fn version_flag_matches_cargo() {
    let temp = TempDir::new().unwrap();
    framezgen(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
