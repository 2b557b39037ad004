//! Mkdir command implementation.

use crate::error::CliError;
use crate::utils::{path_options, GlobalOptions};
use clap::Args;
use std::path::PathBuf;
use systempath::Directory;

/// Create directories.
#[derive(Args)]
pub struct MkdirCommand {
    /// Directories to create
    #[arg(value_name = "DIR", required = true)]
    pub paths: Vec<PathBuf>,

    /// Create parents as needed and accept existing directories
    #[arg(long, short = 'p')]
    pub parents: bool,
}

impl MkdirCommand {
    /// Execute the mkdir command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // The directories do not exist yet, so strict mode cannot apply here
        let options = path_options(global)?.strict(false);

        for path in &self.paths {
            let dir = Directory::with_options(path, options)?;
            if self.parents {
                dir.make_dirs(true)?;
            } else {
                dir.mkdir(false)?;
            }
            log::info!("created {dir}");
        }

        Ok(())
    }
}
