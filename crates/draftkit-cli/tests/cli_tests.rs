//! End-to-end tests for the `draftkit` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

const PINNED: &str = "\
apiVersion: v1
kind: Pod
metadata:
  name: web
spec:
  containers:
    - name: app
      image: nginx:1.27
      resources:
        limits: {cpu: 100m, memory: 64Mi}
";

const LATEST: &str = "\
apiVersion: v1
kind: Pod
metadata:
  name: web
spec:
  containers:
    - name: app
      image: nginx:latest
      resources:
        limits: {cpu: 100m, memory: 64Mi}
";

/// A command running inside `home`, isolated from the user's config.
fn draftkit(home: &Path) -> Command {
    let mut cmd = cargo::cargo_bin_cmd!("draftkit");
    cmd.current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("DRAFTKIT__DETECT__LANGUAGE")
        .env_remove("DRAFTKIT__DETECT__SIGNALS");
    cmd
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn go_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "main.go", "package main\n\nfunc main() {}\n");
    write(dir.path(), "go.mod", "module example.com/svc\n\ngo 1.22\n");
    dir
}

// ── basics ───────────────────────────────────────────────────────────────────

#[test]
fn help_flag() {
    let home = TempDir::new().unwrap();
    draftkit(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("draftkit"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn version_flag() {
    let home = TempDir::new().unwrap();
    draftkit(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_subcommand_is_usage_error() {
    let home = TempDir::new().unwrap();
    draftkit(home.path()).arg("frobnicate").assert().code(2);
}

// ── validate ─────────────────────────────────────────────────────────────────

#[test]
fn validate_clean_directory_is_silent() {
    let home = TempDir::new().unwrap();
    write(home.path(), "deploy/pod.yaml", PINNED);

    draftkit(home.path())
        .args(["validate", "-m", "deploy"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn validate_latest_tag_is_rejected() {
    let home = TempDir::new().unwrap();
    write(home.path(), "deploy/ok.yaml", PINNED);
    write(home.path(), "deploy/bad.yaml", LATEST);

    draftkit(home.path())
        .args(["validate", "--manifest", "deploy"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("no-latest-tag"))
        .stderr(predicate::str::contains("bad.yaml"));
}

#[test]
fn validate_json_reports_failure_on_stdout() {
    let home = TempDir::new().unwrap();
    write(home.path(), "pod.yaml", LATEST);

    draftkit(home.path())
        .args(["--output-format", "json", "validate", "-m", "pod.yaml"])
        .assert()
        .code(5)
        .stdout(predicate::str::contains("\"valid\": false"));
}

#[test]
fn validate_empty_path_is_user_error() {
    let home = TempDir::new().unwrap();
    draftkit(home.path())
        .args(["validate", "-m", ""])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot be empty"));
}

#[test]
fn validate_missing_path_is_user_error() {
    let home = TempDir::new().unwrap();
    draftkit(home.path())
        .args(["validate", "-m", "nope"])
        .assert()
        .code(2);
}

// ── detect ───────────────────────────────────────────────────────────────────

#[test]
fn detect_go_project_prints_identifier() {
    let proj = go_project();
    draftkit(proj.path())
        .arg("detect")
        .assert()
        .success()
        .stdout(predicate::str::diff("go\n"));
}

#[test]
fn detect_honours_declared_variant_signal() {
    let proj = go_project();
    write(
        proj.path(),
        "ci.toml",
        "[detect]\nsignals = [\"go-module-variant\"]\n",
    );

    draftkit(proj.path())
        .args(["--config", "ci.toml", "detect"])
        .assert()
        .success()
        .stdout(predicate::str::diff("gomodule\n"));
}

#[test]
fn detect_language_flag_skips_detection() {
    let proj = go_project();
    draftkit(proj.path())
        .args(["detect", "--language", "Python"])
        .assert()
        .success()
        .stdout(predicate::str::diff("python\n"));
}

#[test]
fn detect_unknown_language_is_not_found() {
    let proj = go_project();
    draftkit(proj.path())
        .args(["detect", "--language", "cobol"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No supported language detected"));
}

#[test]
fn detect_empty_project_is_not_found() {
    let home = TempDir::new().unwrap();
    write(home.path(), "notes.txt", "nothing here\n");
    draftkit(home.path()).arg("detect").assert().code(3);
}

#[test]
fn detect_json_includes_candidates() {
    let proj = go_project();
    draftkit(proj.path())
        .args(["--output-format", "json", "detect", "--candidates"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"identifier\": \"go\""))
        .stdout(predicate::str::contains("\"candidates\""));
}

#[test]
fn detect_candidates_plain_lists_ranking_after_identifier() {
    let proj = go_project();
    draftkit(proj.path())
        .args(["--output-format", "plain", "detect", "--candidates"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("go\n"))
        .stdout(predicate::str::contains("Detected languages:"))
        .stdout(predicate::str::contains("Go"));
}

#[test]
fn invalid_variant_config_exits_with_config_error() {
    let proj = go_project();
    write(
        proj.path(),
        ".draftkit.toml",
        "[[detect.variants]]\nbase = \"go\"\nvariant = \"go\"\nrequires = [\"x\"]\n",
    );

    draftkit(proj.path()).arg("detect").assert().code(4);
}

// ── list ─────────────────────────────────────────────────────────────────────

#[test]
fn list_json_contains_builtin_profiles() {
    let home = TempDir::new().unwrap();
    draftkit(home.path())
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"gomodule\""))
        .stdout(predicate::str::contains("\"javascript\""));
}

#[test]
fn list_includes_local_profiles() {
    let home = TempDir::new().unwrap();
    write(
        home.path(),
        ".draftkit/profiles/zig/profile.toml",
        "[profile]\nname = \"Zig\"\n",
    );

    draftkit(home.path())
        .args(["ls", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("zig\n"))
        .stdout(predicate::str::contains("python\n"));
}

// ── config / init / completions ──────────────────────────────────────────────

#[test]
fn config_get_prints_value() {
    let home = TempDir::new().unwrap();
    draftkit(home.path())
        .args(["config", "get", "output.format"])
        .assert()
        .success()
        .stdout(predicate::str::diff("auto\n"));
}

#[test]
fn config_get_unknown_key_is_config_error() {
    let home = TempDir::new().unwrap();
    draftkit(home.path())
        .args(["config", "get", "nope.nothing"])
        .assert()
        .code(4);
}

#[test]
fn missing_explicit_config_is_config_error() {
    let home = TempDir::new().unwrap();
    draftkit(home.path())
        .args(["--config", "missing.toml", "list"])
        .assert()
        .code(4);
}

#[test]
fn init_local_writes_project_config() {
    let home = TempDir::new().unwrap();
    draftkit(home.path())
        .args(["init", "--local"])
        .assert()
        .success();

    let written = fs::read_to_string(home.path().join(".draftkit.toml")).unwrap();
    assert!(written.contains("gomodule"));

    // The written file loads back cleanly.
    draftkit(home.path())
        .args(["config", "get", "profiles.local_dir"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".draftkit/profiles"));
}

#[test]
fn completions_bash() {
    let home = TempDir::new().unwrap();
    draftkit(home.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("draftkit"));
}
