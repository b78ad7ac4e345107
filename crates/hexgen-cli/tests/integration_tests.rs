//! Black-box tests for the `hexgen` binary.
//!
//! Only the `feature` generator and `--dry-run` paths touch the real
//! filesystem here; a real `init` run would shell out to go/cargo/bun.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn hexgen() -> Command {
    let mut cmd = Command::cargo_bin("hexgen").unwrap();
    cmd.arg("--no-color");
    cmd
}

// ── help / version ────────────────────────────────────────────────────────────

#[test]
fn help_lists_both_generators() {
    // Help goes to stdout with exit 0, never to stderr.
    hexgen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("feature"))
        .stdout(predicate::str::contains("init"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn version_matches_cargo() {
    hexgen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")))
        .stderr(predicate::str::is_empty());
}

#[test]
fn init_help_shows_prefill_flags() {
    hexgen()
        .args(["init", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--name"))
        .stdout(predicate::str::contains("--lang"))
        .stdout(predicate::str::contains("--entrypoint"))
        .stdout(predicate::str::contains("--dry-run"));
}

// ── feature ───────────────────────────────────────────────────────────────────

#[test]
fn feature_creates_the_seven_folders() {
    let temp = TempDir::new().unwrap();

    hexgen()
        .current_dir(temp.path())
        .args(["feature", "--name", "payments"])
        .assert()
        .success()
        .stdout(predicate::str::contains("payments"));

    let base = temp.path().join("payments");
    for folder in [
        "adapter/primary",
        "adapter/secondary",
        "application/usecase",
        "application/service",
        "domain/port",
        "domain/error",
        "domain/model",
    ] {
        assert!(base.join(folder).is_dir(), "missing folder: {folder}");
    }
}

#[test]
fn feature_rerun_is_idempotent() {
    let temp = TempDir::new().unwrap();

    for _ in 0..2 {
        hexgen()
            .current_dir(temp.path())
            .args(["feature", "--name", "billing"])
            .assert()
            .success();
    }
    assert!(temp.path().join("billing/domain/model").is_dir());
}

#[test]
fn feature_quiet_run_prints_nothing() {
    let temp = TempDir::new().unwrap();

    hexgen()
        .current_dir(temp.path())
        .args(["-q", "feature", "--name", "ledger"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(temp.path().join("ledger/adapter/primary").is_dir());
}

#[test]
fn feature_dry_run_creates_nothing() {
    let temp = TempDir::new().unwrap();

    hexgen()
        .current_dir(temp.path())
        .args(["feature", "--name", "payments", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert!(!temp.path().join("payments").exists());
}

#[test]
fn feature_empty_name_is_a_user_error() {
    hexgen()
        .args(["feature", "--name", ""])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid name"));
}

// ── init (dry-run only; a real run shells out) ────────────────────────────────

#[test]
fn init_dry_run_shows_the_go_plan() {
    let temp = TempDir::new().unwrap();

    hexgen()
        .current_dir(temp.path())
        .args([
            "init",
            "--name",
            "demo",
            "--lang",
            "go",
            "--entrypoint",
            "api",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("go mod init demo"))
        .stdout(predicate::str::contains("Skipping cargo initialization"))
        .stdout(predicate::str::contains("Skipping python venv initialization"))
        .stdout(predicate::str::contains("Skipping bun install"));

    // A dry run never touches the filesystem.
    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn init_dry_run_skips_git_inside_a_repository() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir(temp.path().join(".git")).unwrap();

    hexgen()
        .current_dir(temp.path())
        .args(["init", "--name", "demo", "--lang", "rust", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipping git initialization"))
        .stdout(predicate::str::contains("cargo init --bin"));
}

#[test]
fn init_entrypoint_defaults_to_main_without_the_flag() {
    // No --entrypoint and no terminal attached: the config default applies
    // instead of a prompt.
    let temp = TempDir::new().unwrap();

    hexgen()
        .current_dir(temp.path())
        .args(["init", "--name", "demo", "--lang", "go", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("entrypoint/main"));
}

#[test]
fn init_language_alias_is_accepted() {
    let temp = TempDir::new().unwrap();

    hexgen()
        .current_dir(temp.path())
        .args(["init", "--name", "demo", "--lang", "ts", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("main.ts"))
        .stdout(predicate::str::contains("bun install"));
}

#[test]
fn init_unknown_language_is_rejected_by_clap() {
    hexgen()
        .args(["init", "--name", "demo", "--lang", "java", "--dry-run"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn missing_config_file_is_a_configuration_error() {
    hexgen()
        .args([
            "--config",
            "/nonexistent/hexgen.toml",
            "feature",
            "--name",
            "payments",
            "--dry-run",
        ])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}
