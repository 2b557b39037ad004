//! List command implementation.
//!
//! This module implements the `ls` command, which displays the children of
//! a directory in various formats (table, JSON, CSV, TSV).

use crate::error::CliError;
use crate::utils::{format_timestamp, path_options, shorten_path, GlobalOptions};
use clap::{Args, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use systempath::{Directory, Entry};

/// Column headers for CSV/TSV output.
const COLUMN_HEADERS: [&str; 4] = ["kind", "size", "modified", "path"];

/// List the children of a directory.
#[derive(Args)]
pub struct LsCommand {
    /// Directory to list (defaults to the current directory)
    #[arg(value_name = "DIR", default_value = ".")]
    pub path: PathBuf,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "SYSTEMPATH_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,

    /// Show full paths instead of names
    #[arg(long)]
    pub show_full_paths: bool,
}

/// Output format for listing commands.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// TSV format (tab-separated values)
    Tsv,
}

/// One listed child with its metadata resolved.
struct Row {
    kind: String,
    size: Option<u64>,
    modified: Option<String>,
    path: PathBuf,
    name: String,
}

impl Row {
    fn from_entry(entry: &Entry) -> Self {
        let base = entry.base();
        let path = base.as_path().to_path_buf();
        let name = base
            .basename()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        Self {
            kind: entry.kind().to_string(),
            size: entry.as_file().and_then(|f| f.size().ok()),
            modified: base.modified().ok().map(format_timestamp),
            path,
            name,
        }
    }

    fn display_path(&self, show_full: bool) -> String {
        if show_full {
            shorten_path(&self.path)
        } else {
            self.name.clone()
        }
    }
}

impl LsCommand {
    /// Execute the ls command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let options = path_options(global)?;
        let dir = Directory::with_options(&self.path, options)?;

        let mut rows: Vec<Row> = dir.list()?.iter().map(Row::from_entry).collect();
        rows.sort_by(|a, b| a.path.cmp(&b.path));
        log::debug!("listed {} entries in {dir}", rows.len());

        match self.format {
            OutputFormat::Table => format_as_table(&rows, self.show_full_paths)?,
            OutputFormat::Json => format_as_json(&rows)?,
            OutputFormat::Csv => format_as_delimited(&rows, b',')?,
            OutputFormat::Tsv => format_as_delimited(&rows, b'\t')?,
        }

        Ok(())
    }
}

/// Format rows as a human-readable table.
fn format_as_table(rows: &[Row], show_full: bool) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    for row in rows {
        writeln!(
            handle,
            "{}\t{}\t{}\t{}",
            row.kind,
            row.size.map_or_else(|| "-".to_string(), |s| s.to_string()),
            row.modified.as_deref().unwrap_or("-"),
            row.display_path(show_full),
        )?;
    }

    Ok(())
}

/// Format rows as JSON.
fn format_as_json(rows: &[Row]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let json_data: Vec<serde_json::Value> = rows
        .iter()
        .map(|r| {
            serde_json::json!({
                "kind": r.kind,
                "size": r.size,
                "modified": r.modified,
                "path": r.path.display().to_string(),
                "name": r.name,
            })
        })
        .collect();

    serde_json::to_writer_pretty(&mut handle, &json_data)
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;

    writeln!(handle)?;

    Ok(())
}

/// Convert `csv::Error` to `CliError`.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::other(e))
}

/// Format rows as delimited output (CSV or TSV).
fn format_as_delimited(rows: &[Row], delimiter: u8) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(handle);

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;

    for row in rows {
        writer
            .write_record([
                row.kind.clone(),
                row.size.map(|s| s.to_string()).unwrap_or_default(),
                row.modified.clone().unwrap_or_default(),
                row.path.display().to_string(),
            ])
            .map_err(csv_error)?;
    }

    writer.flush()?;

    Ok(())
}
