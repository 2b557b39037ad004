//! Mv command implementation.

use crate::error::CliError;
use crate::utils::{path_options, GlobalOptions};
use clap::Args;
use std::path::PathBuf;
use systempath::SystemPath;

/// Move a file or directory.
///
/// When the destination is an existing directory the source is moved into it.
#[derive(Args)]
pub struct MvCommand {
    /// Source path
    #[arg(value_name = "SRC")]
    pub source: PathBuf,

    /// Destination path
    #[arg(value_name = "DST")]
    pub destination: PathBuf,

    /// Create missing parents of the destination and prune emptied source parents
    #[arg(long)]
    pub parents: bool,
}

impl MvCommand {
    /// Execute the mv command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let options = path_options(global)?;
        let source = SystemPath::with_options(&self.source, options)?;
        if !source.lexists() {
            return Err(systempath::Error::NotFound {
                path: self.source.clone(),
            }
            .into());
        }

        let moved = if self.parents {
            source.renames(&self.destination)?
        } else {
            source.move_to(&self.destination)?
        };
        log::info!("moved {source} to {moved}");

        Ok(())
    }
}
