//! CLI integration tests driving the compiled binary with stub tools.
//!
//! External tools are replaced by shell-script stubs passed through the
//! `--*-command` overrides, so no real ctest/cmake/svn/git is needed.

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

#[cfg(unix)]
use std::path::{Path, PathBuf};

#[cfg(unix)]
fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("failed to write script");
    let mut perms = std::fs::metadata(&path)
        .expect("failed to stat script")
        .permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).expect("failed to chmod script");
    path
}

#[test]
fn missing_runner_exits_one_with_diagnostic() {
    let build = TempDir::new().expect("failed to create temp dir");

    Command::cargo_bin("testdrive")
        .unwrap()
        .arg("--ctest-command")
        .arg("definitely-not-a-real-tool-xyz")
        .arg(build.path())
        .assert()
        .code(1)
        .stderr(contains("definitely-not-a-real-tool-xyz"))
        .stderr(contains("not found"));
}

#[test]
fn missing_build_directory_exits_one() {
    Command::cargo_bin("testdrive")
        .unwrap()
        .arg("/definitely/not/a/build/dir")
        .assert()
        .code(1)
        .stderr(contains("build directory"));
}

#[cfg(unix)]
#[test]
fn present_fixtures_run_tests_without_reconfiguring() {
    let build = TempDir::new().expect("failed to create temp dir");
    let tests = TempDir::new().expect("failed to create temp dir");
    let tools = TempDir::new().expect("failed to create temp dir");

    let ctest = write_script(tools.path(), "ctest", "exit 0");
    let cmake = write_script(tools.path(), "cmake", "touch cmake-ran");

    Command::cargo_bin("testdrive")
        .unwrap()
        .arg("--ctest-command")
        .arg(&ctest)
        .arg("--cmake-command")
        .arg(&cmake)
        .arg("--tests-dir")
        .arg(tests.path())
        .arg(build.path())
        .assert()
        .success();

    assert!(!build.path().join("cmake-ran").exists());
}

#[cfg(unix)]
#[test]
fn absent_fixtures_fetch_reconfigure_and_propagate_exit_code() {
    let build = TempDir::new().expect("failed to create temp dir");
    let root = TempDir::new().expect("failed to create temp dir");
    let tools = TempDir::new().expect("failed to create temp dir");

    let tests_dir = root.path().join("lib").join("tests");
    let url_log = tools.path().join("url.txt");

    let ctest = write_script(tools.path(), "ctest", "exit 9");
    let cmake = write_script(tools.path(), "cmake", "echo ran >> cmake-count");
    let git = write_script(tools.path(), "git", "echo v4.0-release");
    let svn = write_script(
        tools.path(),
        "svn",
        &format!(
            "printf '%s\\n' \"$2\" > {}\nmkdir -p \"$3\"",
            url_log.display()
        ),
    );

    Command::cargo_bin("testdrive")
        .unwrap()
        .arg("--ctest-command")
        .arg(&ctest)
        .arg("--cmake-command")
        .arg(&cmake)
        .arg("--git-command")
        .arg(&git)
        .arg("--svn-command")
        .arg(&svn)
        .arg("--tests-dir")
        .arg(&tests_dir)
        .arg("--fixtures-url")
        .arg("https://svn.example.org/svnroot/libraries")
        .arg(build.path())
        .assert()
        .code(9);

    assert!(tests_dir.is_dir());

    let url = std::fs::read_to_string(&url_log).unwrap();
    assert_eq!(
        url.trim(),
        "https://svn.example.org/svnroot/libraries/tags/v4.0-release/lib/tests"
    );

    let count = std::fs::read_to_string(build.path().join("cmake-count")).unwrap();
    assert_eq!(count.lines().count(), 1);
}

#[cfg(unix)]
#[test]
fn missing_fetch_client_exits_one_before_checkout() {
    let build = TempDir::new().expect("failed to create temp dir");
    let root = TempDir::new().expect("failed to create temp dir");
    let tools = TempDir::new().expect("failed to create temp dir");

    let ctest = write_script(tools.path(), "ctest", "exit 0");

    Command::cargo_bin("testdrive")
        .unwrap()
        .arg("--ctest-command")
        .arg(&ctest)
        .arg("--svn-command")
        .arg("definitely-not-a-real-tool-xyz")
        .arg("--tests-dir")
        .arg(root.path().join("lib").join("tests"))
        .arg(build.path())
        .assert()
        .code(1)
        .stderr(contains("not found"));

    assert!(!root.path().join("lib").exists());
}

#[cfg(unix)]
#[test]
fn json_flag_prints_run_summary() {
    let build = TempDir::new().expect("failed to create temp dir");
    let tests = TempDir::new().expect("failed to create temp dir");
    let tools = TempDir::new().expect("failed to create temp dir");

    let ctest = write_script(tools.path(), "ctest", "exit 0");

    Command::cargo_bin("testdrive")
        .unwrap()
        .arg("--json")
        .arg("--ctest-command")
        .arg(&ctest)
        .arg("--tests-dir")
        .arg(tests.path())
        .arg(build.path())
        .assert()
        .success()
        .stdout(contains("\"test_exit_code\": 0"))
        .stdout(contains("\"fixtures_fetched\": false"));
}

#[cfg(unix)]
#[test]
fn config_file_supplies_tool_defaults() {
    let build = TempDir::new().expect("failed to create temp dir");
    let tests = TempDir::new().expect("failed to create temp dir");
    let tools = TempDir::new().expect("failed to create temp dir");

    let ctest = write_script(tools.path(), "ctest", "exit 4");
    let config = tools.path().join("testdrive.toml");
    std::fs::write(
        &config,
        format!("[tools]\nctest = \"{}\"\n", ctest.display()),
    )
    .unwrap();

    Command::cargo_bin("testdrive")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .arg("--tests-dir")
        .arg(tests.path())
        .arg(build.path())
        .assert()
        .code(4);
}
