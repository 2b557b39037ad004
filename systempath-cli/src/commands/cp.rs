//! Cp command implementation.

use crate::error::CliError;
use crate::utils::{path_options, GlobalOptions};
use clap::Args;
use std::path::PathBuf;
use systempath::{CopyTreeOptions, Entry, SystemPath};

/// Copy a file, or a directory tree.
#[derive(Args)]
pub struct CpCommand {
    /// Source path
    #[arg(value_name = "SRC")]
    pub source: PathBuf,

    /// Destination path
    #[arg(value_name = "DST")]
    pub destination: PathBuf,

    /// Copy directories recursively
    #[arg(long, short = 'r')]
    pub recursive: bool,

    /// Merge into an existing destination directory
    #[arg(long)]
    pub dirs_exist_ok: bool,

    /// Recreate symbolic links instead of copying their targets
    #[arg(long, short = 'P')]
    pub preserve_symlinks: bool,
}

impl CpCommand {
    /// Execute the cp command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let options = path_options(global)?;
        let source = SystemPath::with_options(&self.source, options)?;

        let copied = match source.resolve()? {
            Entry::File(file) => file.copy_to(&self.destination)?.to_string(),
            Entry::Directory(dir) if self.recursive => {
                let tree_options = CopyTreeOptions::new()
                    .dirs_exist_ok(self.dirs_exist_ok)
                    .preserve_symlinks(self.preserve_symlinks);
                dir.copy_tree(&self.destination, tree_options)?.to_string()
            }
            Entry::Directory(_) => {
                return Err(CliError::InvalidArguments(format!(
                    "{} is a directory (use --recursive)",
                    self.source.display()
                )));
            }
            Entry::Other(other) => {
                return Err(systempath::Error::NotFound {
                    path: other.into_path_buf(),
                }
                .into());
            }
        };
        log::info!("copied {source} to {copied}");

        Ok(())
    }
}
