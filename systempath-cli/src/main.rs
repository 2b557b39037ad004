//! Main entry point for the sp CLI.
//!
//! This is the command-line interface for the systempath library.
//! It exposes file and directory operations as subcommands:
//! - `ls` / `tree`: list directories
//! - `cat` / `write`: read and write file contents
//! - `rm` / `cp` / `mv` / `mkdir`: manage paths
//! - `stat` / `md5`: inspect paths

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Route library logging to stderr
    systempath::install_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        strict: cli.strict,
        autoabs: cli.autoabs,
        no_follow_symlinks: cli.no_follow_symlinks,
        config: cli.config,
    };

    let result = match cli.command {
        cli::Command::Ls(cmd) => cmd.execute(&global),
        cli::Command::Tree(cmd) => cmd.execute(&global),
        cli::Command::Cat(cmd) => cmd.execute(&global),
        cli::Command::Write(cmd) => cmd.execute(&global),
        cli::Command::Rm(cmd) => cmd.execute(&global),
        cli::Command::Cp(cmd) => cmd.execute(&global),
        cli::Command::Mv(cmd) => cmd.execute(&global),
        cli::Command::Mkdir(cmd) => cmd.execute(&global),
        cli::Command::Stat(cmd) => cmd.execute(&global),
        cli::Command::Md5(cmd) => cmd.execute(&global),
        cli::Command::ShowPath(cmd) => cmd.execute(&global),
        cli::Command::ShowConfig(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
