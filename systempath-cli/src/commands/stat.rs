//! Stat command implementation.

use crate::error::CliError;
use crate::utils::{format_timestamp, path_options, GlobalOptions};
use clap::{Args, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use systempath::{PathKind, SystemPath};

/// Show metadata for a path.
#[derive(Args)]
pub struct StatCommand {
    /// Path to inspect
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: StatFormat,
}

/// Output format for the stat command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum StatFormat {
    /// `key: value` lines
    Text,
    /// JSON object
    Json,
}

impl StatCommand {
    /// Execute the stat command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let options = path_options(global)?;
        let path = SystemPath::with_options(&self.path, options)?;
        if !path.lexists() {
            return Err(systempath::Error::NotFound {
                path: self.path.clone(),
            }
            .into());
        }

        let kind = path.kind()?;
        let size = if kind == PathKind::File {
            Some(path.size()?)
        } else {
            None
        };
        let readonly = path.permissions()?.readonly();
        let modified = path.modified().ok().map(format_timestamp);
        let accessed = path.accessed().ok().map(format_timestamp);
        let absolute = path.abspath()?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        match self.format {
            StatFormat::Text => {
                writeln!(handle, "path: {absolute}")?;
                writeln!(handle, "kind: {kind}")?;
                writeln!(handle, "symlink: {}", path.is_symlink())?;
                if let Some(size) = size {
                    writeln!(handle, "size: {size}")?;
                }
                writeln!(handle, "readonly: {readonly}")?;
                writeln!(handle, "modified: {}", modified.as_deref().unwrap_or("-"))?;
                writeln!(handle, "accessed: {}", accessed.as_deref().unwrap_or("-"))?;
                #[cfg(unix)]
                writeln!(handle, "mode: {:o}", unix_mode(&path)?)?;
            }
            StatFormat::Json => {
                #[allow(unused_mut)]
                let mut value = serde_json::json!({
                    "path": absolute.to_string(),
                    "kind": kind.to_string(),
                    "symlink": path.is_symlink(),
                    "size": size,
                    "readonly": readonly,
                    "modified": modified,
                    "accessed": accessed,
                });
                #[cfg(unix)]
                {
                    value["mode"] = serde_json::json!(format!("{:o}", unix_mode(&path)?));
                }
                serde_json::to_writer_pretty(&mut handle, &value)
                    .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
                writeln!(handle)?;
            }
        }

        Ok(())
    }
}

#[cfg(unix)]
fn unix_mode(path: &SystemPath) -> Result<u32, CliError> {
    use std::os::unix::fs::PermissionsExt;
    Ok(path.permissions()?.mode() & 0o7777)
}
