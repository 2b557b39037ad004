//! Md5 command implementation.

use crate::error::CliError;
use crate::utils::{path_options, GlobalOptions};
use clap::Args;
use std::path::PathBuf;
use systempath::SystemPath;

/// Print MD5 digests of files in `md5sum` layout.
#[derive(Args)]
pub struct Md5Command {
    /// Files to hash
    #[arg(value_name = "FILE", required = true)]
    pub paths: Vec<PathBuf>,

    /// Bytes hashed before each file's content
    #[arg(long, value_name = "TEXT")]
    pub salt: Option<String>,
}

impl Md5Command {
    /// Execute the md5 command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let options = path_options(global)?;
        let salt = self.salt.as_deref().map(str::as_bytes);

        for path in &self.paths {
            let digest = SystemPath::with_options(path, options)?.md5(salt)?;
            println!("{digest}  {}", path.display());
        }

        Ok(())
    }
}
