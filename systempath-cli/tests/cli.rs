//! Basic CLI surface tests: help, version and argument errors.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let env = TestEnv::new();
    let assert = env.command().arg("--help").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    for command in ["ls", "tree", "cat", "write", "rm", "cp", "mv", "mkdir", "stat", "md5"] {
        assert!(stdout.contains(command), "help is missing {command}");
    }
}

#[test]
fn test_version() {
    let env = TestEnv::new();
    env.command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("sp "));
}

#[test]
fn test_missing_subcommand_is_usage_error() {
    let env = TestEnv::new();
    env.command().assert().failure().code(2);
}

#[test]
fn test_unknown_format_rejected() {
    let env = TestEnv::new();
    env.command()
        .args(["ls", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
