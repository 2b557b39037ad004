//! Rm command implementation.

use crate::error::CliError;
use crate::utils::{path_options, GlobalOptions};
use clap::Args;
use std::path::PathBuf;
use systempath::SystemPath;

/// Delete files and directories.
#[derive(Args)]
pub struct RmCommand {
    /// Paths to delete
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Remove directories and their contents
    #[arg(long, short = 'r')]
    pub recursive: bool,

    /// Ignore missing paths
    #[arg(long, short = 'f')]
    pub force: bool,
}

impl RmCommand {
    /// Execute the rm command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let options = path_options(global)?;

        for path in &self.paths {
            let target = SystemPath::new(path);
            // Symlinks to directories are removed as links, never recursed into
            if !self.recursive && !target.is_symlink() && target.is_dir() {
                return Err(CliError::InvalidArguments(format!(
                    "{} is a directory (use --recursive)",
                    path.display()
                )));
            }
            let target = match SystemPath::with_options(path, options) {
                Ok(target) => target,
                Err(e) if self.force && e.is_not_found() => continue,
                Err(e) => return Err(e.into()),
            };
            target.delete(self.force)?;
            log::info!("removed {target}");
        }

        Ok(())
    }
}
