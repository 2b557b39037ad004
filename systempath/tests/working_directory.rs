//! Tests that change the process working directory.
//!
//! Kept in their own binary so no other test observes the change.

mod common;

use std::env;

use common::Scratch;
use serial_test::serial;
use systempath::{Directory, PathBase, PathOptions};

#[test]
#[serial]
fn test_chdir_and_current() {
    let saved = env::current_dir().unwrap();
    let scratch = Scratch::new();

    scratch.root().chdir().unwrap();
    let current = Directory::current(PathOptions::new()).unwrap();
    assert_eq!(
        current.realpath().unwrap(),
        scratch.root().realpath().unwrap()
    );

    env::set_current_dir(saved).unwrap();
}

#[test]
#[serial]
fn test_autoabs_uses_working_directory() {
    let saved = env::current_dir().unwrap();
    let scratch = Scratch::new();
    env::set_current_dir(scratch.path()).unwrap();

    let base = PathBase::with_options("child", PathOptions::new().autoabs(true)).unwrap();
    let cwd = env::current_dir().unwrap();
    env::set_current_dir(saved).unwrap();

    assert_eq!(base.as_path(), cwd.join("child"));
}
