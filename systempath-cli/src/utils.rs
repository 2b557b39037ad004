//! Utility functions for CLI operations.
//!
//! This module provides common helpers used across CLI commands:
//! configuration loading, option resolution and output formatting.

use crate::error::CliError;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use systempath::{Config, ConfigBuilder, PathOptions, TreeOptions};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)] // verbose/quiet are consumed by the logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Require every path to exist.
    pub strict: bool,

    /// Make every path absolute.
    pub autoabs: bool,

    /// Do not follow symbolic links.
    pub no_follow_symlinks: bool,

    /// Extra configuration file layered above the discovered ones.
    pub config: Option<PathBuf>,
}

impl GlobalOptions {
    /// Flags expressed as a configuration overlay. Unset flags leave the
    /// lower layers in charge.
    fn overrides(&self) -> Config {
        Config {
            strict: self.strict.then_some(true),
            autoabs: self.autoabs.then_some(true),
            follow_symlinks: self.no_follow_symlinks.then_some(false),
            tree: None,
        }
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. `--config` file
/// 4. Project and user configuration files
/// 5. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref file) = global.config {
        builder = builder.with_file(file);
    }

    builder
        .with_config(global.overrides())
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Path options after layering configuration and flags.
pub fn path_options(global: &GlobalOptions) -> Result<PathOptions, CliError> {
    Ok(load_configuration(global)?.path_options())
}

/// Path and traversal options after layering configuration and flags.
pub fn resolve_options(global: &GlobalOptions) -> Result<(PathOptions, TreeOptions), CliError> {
    let config = load_configuration(global)?;
    Ok((config.path_options(), config.tree_options()))
}

/// Format a timestamp for display.
pub fn format_timestamp(ts: SystemTime) -> String {
    use chrono::{DateTime, Utc};
    let dt: DateTime<Utc> = ts.into();
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Shorten a path for display.
///
/// If the path is within the home directory, show it as ~/...
/// Otherwise, show the full path.
pub fn shorten_path(path: &Path) -> String {
    if let Some(home) = home::home_dir() {
        if let Ok(relative) = path.strip_prefix(&home) {
            return format!("~/{}", relative.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        use std::time::{Duration, UNIX_EPOCH};
        let st = UNIX_EPOCH + Duration::from_secs(1_705_323_045);
        assert_eq!(format_timestamp(st), "2024-01-15 12:50:45");
    }

    #[test]
    fn test_shorten_path_outside_home() {
        let path = PathBuf::from("/usr/local/bin");
        assert_eq!(shorten_path(&path), "/usr/local/bin");
    }

    #[test]
    fn test_overrides_only_set_flags() {
        let global = GlobalOptions {
            strict: true,
            ..GlobalOptions::default()
        };
        let overlay = global.overrides();
        assert_eq!(overlay.strict, Some(true));
        assert_eq!(overlay.autoabs, None);
        assert_eq!(overlay.follow_symlinks, None);

        let no_follow = GlobalOptions {
            no_follow_symlinks: true,
            ..GlobalOptions::default()
        };
        assert_eq!(no_follow.overrides().follow_symlinks, Some(false));
    }
}
