//! Build script for systempath-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

fn flag(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .help(help)
        .global(true)
        .action(clap::ArgAction::SetTrue)
}

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("sp")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect and manipulate files and directories")
        .long_about("Command-line front end for object-oriented filesystem paths")
        .arg(flag("verbose", "Enable verbose output"))
        .arg(flag("quiet", "Suppress non-essential output"))
        .arg(flag("strict", "Require every path argument to exist"))
        .arg(flag("autoabs", "Make every path argument absolute"))
        .arg(flag("no-follow-symlinks", "Do not follow symbolic links"))
        .arg(
            Arg::new("config")
                .long("config")
                .help("Additional configuration file")
                .value_name("PATH")
                .global(true)
                .env("SYSTEMPATH_CONFIG"),
        )
        .subcommands(vec![
            Command::new("ls")
                .about("List the children of a directory")
                .long_about("List a directory's children as a table, JSON, CSV or TSV"),
            Command::new("tree")
                .about("Recursively list a directory")
                .long_about("Print every descendant of a directory, one relative path per line"),
            Command::new("cat").about("Print file contents"),
            Command::new("write")
                .about("Write text or stdin to a file")
                .long_about("Replace or append to a file's content from an argument or stdin"),
            Command::new("rm").about("Delete files and directories"),
            Command::new("cp").about("Copy a file or directory tree"),
            Command::new("mv")
                .about("Move a file or directory")
                .long_about("Move a path, into the destination when it is an existing directory"),
            Command::new("mkdir").about("Create directories"),
            Command::new("stat").about("Show metadata for a path"),
            Command::new("md5").about("Print MD5 digests of files"),
            Command::new("show-path")
                .about("Show a transformed form of a path")
                .long_about("Expand, absolutize, normalize or resolve a path and print it"),
            Command::new("show-config")
                .about("Show the effective configuration")
                .long_about("Print the configuration merged from files, environment and flags"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("sp.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
