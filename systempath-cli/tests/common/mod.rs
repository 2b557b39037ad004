//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers isolated from the user's configuration
//! - File fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak the caller's settings into a test.
const ISOLATED_VARS: [&str; 8] = [
    "SYSTEMPATH_STRICT",
    "SYSTEMPATH_AUTOABS",
    "SYSTEMPATH_FOLLOW_SYMLINKS",
    "SYSTEMPATH_TREE_MAX_DEPTH",
    "SYSTEMPATH_TREE_BOTTOM_UP",
    "SYSTEMPATH_TREE_OMIT_DIRS",
    "SYSTEMPATH_CONFIG",
    "SYSTEMPATH_OUTPUT_FORMAT",
];

/// Test environment with an isolated working directory and home.
///
/// The working directory is `<temp>/work`; `HOME` points at `<temp>/home`
/// so no user configuration file is picked up.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Working directory for every command
    pub work: PathBuf,
    /// Fake home directory
    pub home: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let work = temp_dir.path().join("work");
        let home = temp_dir.path().join("home");
        std::fs::create_dir_all(&work).expect("Failed to create work dir");
        std::fs::create_dir_all(&home).expect("Failed to create home dir");

        Self {
            temp_dir,
            work,
            home,
        }
    }

    /// Get a command builder running `sp` inside the environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("sp").expect("Failed to find sp binary");
        cmd.current_dir(&self.work).env("HOME", &self.home);
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get the working directory.
    pub fn path(&self) -> &Path {
        &self.work
    }

    /// Absolute path of `rel` under the working directory.
    pub fn join(&self, rel: &str) -> PathBuf {
        self.work.join(rel)
    }

    /// Create a subdirectory (and parents) in the working directory.
    pub fn create_dir(&self, rel: &str) -> PathBuf {
        let path = self.join(rel);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write a file (creating parents) in the working directory.
    pub fn create_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Read a file in the working directory as UTF-8.
    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.join(rel)).expect("Failed to read test file")
    }

    /// Run a command that must succeed and return its stdout.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run sp");

        assert!(
            output.status.success(),
            "sp {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
