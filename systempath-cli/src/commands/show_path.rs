//! Command to show a transformed form of a path.

use crate::error::CliError;
use crate::utils::{path_options, GlobalOptions};
use clap::Args;
use std::path::PathBuf;
use systempath::SystemPath;

/// Show a path after expansion, normalization or resolution.
///
/// Transformations run in the order: expand, abs, normalize, real, relative.
#[derive(Args)]
pub struct ShowPathCommand {
    /// Path to transform
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Expand `~` and environment variables
    #[arg(long)]
    pub expand: bool,

    /// Make the path absolute
    #[arg(long)]
    pub abs: bool,

    /// Collapse `.` and `..` lexically
    #[arg(long)]
    pub normalize: bool,

    /// Resolve symlinks (the path must exist)
    #[arg(long)]
    pub real: bool,

    /// Show the path relative to this directory
    #[arg(long, value_name = "DIR")]
    pub relative_to: Option<PathBuf>,
}

impl ShowPathCommand {
    /// Execute the show-path command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let options = path_options(global)?;
        let mut path = SystemPath::with_options(&self.path, options)?;

        if self.expand {
            path = path.expanduser()?.expandvars();
        }
        if self.abs {
            path = path.abspath()?;
        }
        if self.normalize {
            path = path.normpath();
        }
        if self.real {
            path = path.realpath()?;
        }
        if let Some(ref start) = self.relative_to {
            path = path.relpath(start)?;
        }

        println!("{path}");
        Ok(())
    }
}
