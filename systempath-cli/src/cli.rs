//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CatCommand, CompletionsCommand, CpCommand, LsCommand, Md5Command, MkdirCommand, MvCommand,
    RmCommand, ShowConfigCommand, ShowPathCommand, StatCommand, TreeCommand, WriteCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line front end for object-oriented filesystem paths.
#[derive(Parser)]
#[command(name = "sp")]
#[command(version, about = "Inspect and manipulate files and directories", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Require every path argument to exist
    #[arg(long, global = true)]
    pub strict: bool,

    /// Make every path argument absolute
    #[arg(long, global = true)]
    pub autoabs: bool,

    /// Do not follow symbolic links
    #[arg(long, global = true)]
    pub no_follow_symlinks: bool,

    /// Additional configuration file
    #[arg(long, value_name = "PATH", global = true, env = "SYSTEMPATH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// List the children of a directory
    Ls(LsCommand),

    /// Recursively list a directory
    Tree(TreeCommand),

    /// Print file contents
    Cat(CatCommand),

    /// Write text or stdin to a file
    Write(WriteCommand),

    /// Delete files and directories
    Rm(RmCommand),

    /// Copy a file or directory tree
    Cp(CpCommand),

    /// Move a file or directory
    Mv(MvCommand),

    /// Create directories
    Mkdir(MkdirCommand),

    /// Show metadata for a path
    Stat(StatCommand),

    /// Print MD5 digests of files
    Md5(Md5Command),

    /// Show a transformed form of a path
    ShowPath(ShowPathCommand),

    /// Show the effective configuration
    ShowConfig(ShowConfigCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
