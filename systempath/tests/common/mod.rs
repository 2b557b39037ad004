//! Common test utilities for integration tests.
//!
//! This module provides a scratch directory fixture for exercising the
//! systempath library against a real filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use systempath::{Directory, PathOptions};
use tempfile::TempDir;

/// A temporary directory populated on demand.
///
/// The directory is removed when the fixture is dropped.
#[allow(dead_code)]
pub struct Scratch {
    temp: TempDir,
}

#[allow(dead_code)]
impl Scratch {
    /// Creates an empty scratch directory.
    pub fn new() -> Self {
        Self {
            temp: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Root path of the scratch directory.
    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Absolute path of `rel` under the root.
    pub fn join(&self, rel: &str) -> PathBuf {
        self.temp.path().join(rel)
    }

    /// Writes a file, creating parent directories.
    pub fn file(&self, rel: &str, contents: &[u8]) -> PathBuf {
        let path = self.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parents");
        }
        fs::write(&path, contents).expect("write file");
        path
    }

    /// Creates a directory and its parents.
    pub fn dir(&self, rel: &str) -> PathBuf {
        let path = self.join(rel);
        fs::create_dir_all(&path).expect("create dir");
        path
    }

    /// The root as a `Directory` with default options.
    pub fn root(&self) -> Directory {
        Directory::new(self.path())
    }

    /// The root as a strict `Directory`.
    pub fn strict_root(&self) -> Directory {
        Directory::with_options(self.path(), PathOptions::new().strict(true))
            .expect("scratch root exists")
    }
}
