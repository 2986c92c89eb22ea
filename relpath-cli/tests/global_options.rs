//! Integration tests for global CLI options.
//!
//! These tests verify global flags and environment variables that affect
//! all commands, including:
//! - --verbose and --quiet flags, and RELPATH_LOG_MODE
//! - --format and RELPATH_OUTPUT_FORMAT
//! - --config and RELPATH_CONFIG
//! - Configuration file discovery and tilde expansion
//! - Precedence rules (CLI flags > env vars > config files > defaults)

mod common;

use common::TestEnv;
use predicates::prelude::*;

fn parse_json(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout).expect("stdout is not JSON")
}

// ============================================================================
// Verbosity
// ============================================================================

/// Test --verbose surfaces the relativizer's probe decisions.
#[test]
fn test_verbose_flag_shows_debug_records() {
    let env = TestEnv::new();
    let start = env.create_dir("start");

    env.command()
        .arg("--verbose")
        .args(["relative", "missing/file.txt", "--start"])
        .arg(&start)
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG:"));
}

/// Test the default level prints no debug records.
#[test]
fn test_default_level_hides_debug_records() {
    let env = TestEnv::new();
    let start = env.create_dir("start");

    env.command()
        .args(["relative", "missing/file.txt", "--start"])
        .arg(&start)
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG:").not());
}

/// Test --quiet suppresses the "no relative path" warning.
#[test]
fn test_quiet_flag_suppresses_warnings() {
    let env = TestEnv::new();

    env.command()
        .args(["--quiet", "lexical", "a/b", "/a"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

/// Test RELPATH_LOG_MODE=quiet behaves like --quiet.
#[test]
fn test_log_mode_env_quiet() {
    let env = TestEnv::new();

    env.command()
        .env("RELPATH_LOG_MODE", "quiet")
        .args(["lexical", "a/b", "/a"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

/// Test --verbose wins over RELPATH_LOG_MODE.
#[test]
fn test_verbose_flag_overrides_log_mode_env() {
    let env = TestEnv::new();

    env.command()
        .env("RELPATH_LOG_MODE", "quiet")
        .args(["--verbose", "lexical", "a/b", "/a"])
        .assert()
        .success()
        .stderr(predicate::str::contains("no relative path"));
}

// ============================================================================
// Output format
// ============================================================================

#[test]
fn test_format_json_flag() {
    let env = TestEnv::new();
    let stdout = env.stdout_of(&["--format", "json", "lexical", "/a/d", "/a/b/c"]);

    let json = parse_json(&stdout);
    assert_eq!(json["operation"], "lexically_relative");
    assert_eq!(json["path"], "/a/d");
    assert_eq!(json["start"], "/a/b/c");
    assert_eq!(json["result"], "../../d");
    assert_eq!(json["is_empty"], false);
}

#[test]
fn test_format_json_reports_no_relation() {
    let env = TestEnv::new();
    let stdout = env.stdout_of(&["--quiet", "--format", "json", "lexical", "a", "/b"]);

    let json = parse_json(&stdout);
    assert_eq!(json["result"], "");
    assert_eq!(json["is_empty"], true);
}

#[test]
fn test_format_json_several_paths_is_array() {
    let env = TestEnv::new();
    let stdout = env.stdout_of(&["--format", "json", "normalize", "a/../b", "/x/./y"]);

    let json = parse_json(&stdout);
    let reports = json.as_array().expect("expected an array");
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["result"], "b");
    assert_eq!(reports[1]["result"], "/x/y");
}

#[test]
fn test_format_json_common_prefix_remainders() {
    let env = TestEnv::new();
    let stdout = env.stdout_of(&[
        "--format",
        "json",
        "common-prefix",
        "--remove",
        "/a/b/c",
        "/a/d",
    ]);

    let json = parse_json(&stdout);
    assert_eq!(json["result"], "/a");
    assert_eq!(json["inputs"], serde_json::json!(["/a/b/c", "/a/d"]));
    assert_eq!(json["remainders"], serde_json::json!(["b/c", "d"]));
}

#[test]
fn test_output_format_env_var() {
    let env = TestEnv::new();
    let stdout = env
        .command()
        .env("RELPATH_OUTPUT_FORMAT", "json")
        .args(["normalize", "/a/b/.."])
        .output()
        .unwrap()
        .stdout;

    let json = parse_json(&String::from_utf8(stdout).unwrap());
    assert_eq!(json["result"], "/a");
}

#[test]
fn test_format_flag_overrides_env_var() {
    let env = TestEnv::new();

    env.command()
        .env("RELPATH_OUTPUT_FORMAT", "json")
        .args(["--format", "text", "normalize", "/a/b/.."])
        .assert()
        .success()
        .stdout("/a\n");
}

// ============================================================================
// Configuration files
// ============================================================================

#[test]
fn test_project_config_discovered_from_subdirectory() {
    let env = TestEnv::new();
    env.create_file("relpath.yaml", "output_format: json\n");
    let nested = env.create_dir("nested/deeper");

    let output = env
        .command()
        .current_dir(&nested)
        .args(["normalize", "/a/./b"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = parse_json(&String::from_utf8(output.stdout).unwrap());
    assert_eq!(json["result"], "/a/b");
}

#[test]
fn test_explicit_config_flag() {
    let env = TestEnv::new();
    let config = env.create_file("settings/custom.yaml", "output_format: json\n");

    let stdout = env.stdout_of(&["--config", config.to_str().unwrap(), "normalize", "/a"]);
    assert_eq!(parse_json(&stdout)["result"], "/a");
}

#[test]
fn test_config_env_var() {
    let env = TestEnv::new();
    let config = env.create_file("settings/custom.yaml", "output_format: json\n");

    let output = env
        .command()
        .env("RELPATH_CONFIG", &config)
        .args(["normalize", "/a"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        parse_json(&String::from_utf8(output.stdout).unwrap())["result"],
        "/a"
    );
}

#[test]
fn test_explicit_config_overrides_project_config() {
    let env = TestEnv::new();
    env.create_file("relpath.yaml", "output_format: json\n");
    let config = env.create_file("settings/custom.yaml", "output_format: text\n");

    env.command()
        .arg("--config")
        .arg(&config)
        .args(["normalize", "/a/b/.."])
        .assert()
        .success()
        .stdout("/a\n");
}

#[cfg(unix)]
#[test]
fn test_user_config_applies() {
    let env = TestEnv::new();
    env.write_user_config("output_format: json\n");

    let stdout = env.stdout_of(&["normalize", "/a"]);
    assert_eq!(parse_json(&stdout)["result"], "/a");
}

#[cfg(unix)]
#[test]
fn test_project_config_overrides_user_config() {
    let env = TestEnv::new();
    env.write_user_config("output_format: json\n");
    env.create_file("relpath.yaml", "output_format: text\n");

    env.command()
        .args(["normalize", "/a"])
        .assert()
        .success()
        .stdout("/a\n");
}

// ============================================================================
// Tilde expansion
// ============================================================================

#[cfg(unix)]
#[test]
fn test_tilde_expanded_by_default() {
    let env = TestEnv::new();
    let stdout = env.stdout_of(&["normalize", "~/notes/../todo.txt"]);
    assert_eq!(
        stdout.trim_end(),
        env.home.join("todo.txt").to_str().unwrap()
    );
}

#[test]
fn test_tilde_expansion_disabled_by_env() {
    let env = TestEnv::new();

    env.command()
        .env("RELPATH_EXPAND_TILDE", "false")
        .args(["normalize", "~/notes/../todo.txt"])
        .assert()
        .success()
        .stdout("~/todo.txt\n");
}

#[test]
fn test_tilde_expansion_disabled_by_config() {
    let env = TestEnv::new();
    env.create_file("relpath.yaml", "expand_tilde: false\n");

    env.command()
        .args(["common-prefix", "~/a/b", "~/a/c"])
        .assert()
        .success()
        .stdout("~/a\n");
}
