//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `ls`: List the children of a directory
//! - `tree`: Recursively list a directory
//! - `cat`: Print file contents
//! - `write`: Write text or stdin to a file
//! - `rm`: Delete files and directories
//! - `cp`: Copy a file or directory tree
//! - `mv`: Move a file or directory
//! - `mkdir`: Create directories
//! - `stat`: Show metadata for a path
//! - `md5`: Print MD5 digests of files
//! - `show_path`: Show a transformed form of a path
//! - `show_config`: Show the effective configuration
//! - `completions`: Generate shell completion scripts

pub mod cat;
pub mod completions;
pub mod cp;
pub mod ls;
pub mod md5;
pub mod mkdir;
pub mod mv;
pub mod rm;
pub mod show_config;
pub mod show_path;
pub mod stat;
pub mod tree;
pub mod write;

pub use cat::CatCommand;
pub use completions::CompletionsCommand;
pub use cp::CpCommand;
pub use ls::LsCommand;
pub use md5::Md5Command;
pub use mkdir::MkdirCommand;
pub use mv::MvCommand;
pub use rm::RmCommand;
pub use show_config::ShowConfigCommand;
pub use show_path::ShowPathCommand;
pub use stat::StatCommand;
pub use tree::TreeCommand;
pub use write::WriteCommand;
