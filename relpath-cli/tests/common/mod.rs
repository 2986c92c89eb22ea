//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers isolated from the user's own configuration
//! - Helpers for writing configuration files

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak the caller's settings into a test.
const ISOLATED_VARS: [&str; 5] = [
    "RELPATH_CONFIG",
    "RELPATH_ON_CANONICALIZE_ERROR",
    "RELPATH_OUTPUT_FORMAT",
    "RELPATH_EXPAND_TILDE",
    "RELPATH_LOG_MODE",
];

/// Test environment with an isolated home and working directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Home directory used by the binary under test
    pub home: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// This creates:
    /// - A temporary directory for test files
    /// - A `home` directory inside it, so no user config is picked up
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let home = temp_path.join("home");
        std::fs::create_dir_all(&home).expect("Failed to create home directory");

        Self {
            temp_dir,
            temp_path,
            home,
        }
    }

    /// Get a bare command builder without any isolation.
    pub fn command_bare(&self) -> Command {
        Command::cargo_bin("relpath").expect("Failed to find relpath binary")
    }

    /// Get a command builder running in the temporary directory, with
    /// `HOME` pointed at the test home and `RELPATH_*` variables cleared.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.current_dir(&self.temp_path).env("HOME", &self.home);
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory in the test environment.
    ///
    /// This creates a directory under the temporary directory and returns its path.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Create a file with `contents` in the test environment.
    pub fn create_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write the user configuration file, `~/.relpath/config.yaml`.
    pub fn write_user_config(&self, contents: &str) -> PathBuf {
        let dir = self.home.join(".relpath");
        std::fs::create_dir_all(&dir).expect("Failed to create user config directory");
        let path = dir.join("config.yaml");
        std::fs::write(&path, contents).expect("Failed to write user config");
        path
    }

    /// Run a command and return its stdout, asserting success.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self.command().args(args).output().expect("Failed to run relpath");
        assert!(
            output.status.success(),
            "relpath {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}
