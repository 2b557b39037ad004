//! Write command implementation.

use crate::error::CliError;
use crate::utils::{path_options, GlobalOptions};
use clap::Args;
use std::io::Read;
use std::path::PathBuf;
use systempath::SystemPath;

/// Write text or stdin to a file, replacing its content.
#[derive(Args)]
pub struct WriteCommand {
    /// File to write
    #[arg(value_name = "FILE")]
    pub path: PathBuf,

    /// Text to write (reads stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Append instead of replacing
    #[arg(long, short = 'a')]
    pub append: bool,

    /// Create missing parent directories
    #[arg(long, short = 'p')]
    pub parents: bool,
}

impl WriteCommand {
    /// Execute the write command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let options = path_options(global)?;
        let file = SystemPath::with_options(&self.path, options)?.as_file()?;

        let data = match self.text {
            Some(text) => text.into_bytes(),
            None => {
                let mut buffer = Vec::new();
                std::io::stdin().lock().read_to_end(&mut buffer)?;
                buffer
            }
        };

        if self.parents {
            file.create_all(true)?;
        }

        if self.append {
            file.append(&data)?;
        } else {
            file.write(&data)?;
        }
        log::info!("wrote {} bytes to {file}", data.len());

        Ok(())
    }
}
