//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

/// Installed binary name
const BIN_NAME: &str = "sp";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, _global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        eprintln!("# Generating {} completion script", self.shell);
        eprintln!("# Run the following command to enable completions:");

        match self.shell {
            Shell::Bash => {
                eprintln!("#   sp completions bash > ~/.local/share/bash-completion/completions/sp");
                eprintln!("# Or source it directly in ~/.bashrc:");
                eprintln!("#   eval \"$(sp completions bash)\"");
            }
            Shell::Zsh => {
                eprintln!("#   sp completions zsh > ~/.zsh/completions/_sp");
                eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
            }
            Shell::Fish => {
                eprintln!("#   sp completions fish > ~/.config/fish/completions/sp.fish");
                eprintln!("# Or add to config.fish:");
                eprintln!("#   sp completions fish | source");
            }
            Shell::PowerShell => {
                eprintln!("#   sp completions powershell > $PROFILE");
            }
            _ => {}
        }

        eprintln!();

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}
