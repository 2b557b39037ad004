//! Cat command implementation.

use crate::error::CliError;
use crate::utils::{path_options, GlobalOptions};
use clap::Args;
use std::io::Write;
use std::path::PathBuf;
use systempath::SystemPath;

/// Print file contents to stdout.
#[derive(Args)]
pub struct CatCommand {
    /// Files to print, in order
    #[arg(value_name = "FILE", required = true)]
    pub paths: Vec<PathBuf>,
}

impl CatCommand {
    /// Execute the cat command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let options = path_options(global)?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        for path in &self.paths {
            let file = SystemPath::with_options(path, options)?.as_file()?;
            file.contents().copy_into(&mut handle)?;
        }
        handle.flush()?;

        Ok(())
    }
}
