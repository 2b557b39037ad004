//! Tree command implementation.

use crate::error::CliError;
use crate::utils::{resolve_options, GlobalOptions};
use clap::Args;
use std::io::Write;
use std::path::PathBuf;
use systempath::Directory;

/// Recursively list a directory, one relative path per line.
#[derive(Args)]
pub struct TreeCommand {
    /// Directory to traverse (defaults to the current directory)
    #[arg(value_name = "DIR", default_value = ".")]
    pub path: PathBuf,

    /// Levels to descend below the directory
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Print directories after their contents
    #[arg(long)]
    pub bottom_up: bool,

    /// Leave directories out of the output
    #[arg(long)]
    pub omit_dirs: bool,

    /// Mark directories with a trailing slash
    #[arg(long, short = 'F')]
    pub classify: bool,
}

impl TreeCommand {
    /// Execute the tree command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.max_depth == Some(0) {
            return Err(CliError::InvalidArguments(
                "--max-depth must be at least 1".to_string(),
            ));
        }

        let (options, mut tree_options) = resolve_options(global)?;
        if self.max_depth.is_some() {
            tree_options = tree_options.max_depth(self.max_depth);
        }
        if self.bottom_up {
            tree_options = tree_options.bottom_up(true);
        }
        if self.omit_dirs {
            tree_options = tree_options.omit_dirs(true);
        }

        let dir = Directory::with_options(&self.path, options)?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        for entry in dir.tree(tree_options) {
            let entry = entry?;
            let relative = entry
                .path()
                .strip_prefix(dir.as_path())
                .unwrap_or_else(|_| entry.path());
            if self.classify && entry.is_dir() {
                writeln!(handle, "{}/", relative.display())?;
            } else {
                writeln!(handle, "{}", relative.display())?;
            }
        }

        Ok(())
    }
}
