//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `SYSTEMPATH_*` environment variables
//! that override configuration file values.

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// `strict` override.
pub const ENV_STRICT: &str = "SYSTEMPATH_STRICT";
/// `autoabs` override.
pub const ENV_AUTOABS: &str = "SYSTEMPATH_AUTOABS";
/// `follow_symlinks` override.
pub const ENV_FOLLOW_SYMLINKS: &str = "SYSTEMPATH_FOLLOW_SYMLINKS";
/// `tree.max_depth` override.
pub const ENV_TREE_MAX_DEPTH: &str = "SYSTEMPATH_TREE_MAX_DEPTH";
/// `tree.bottom_up` override.
pub const ENV_TREE_BOTTOM_UP: &str = "SYSTEMPATH_TREE_BOTTOM_UP";
/// `tree.omit_dirs` override.
pub const ENV_TREE_OMIT_DIRS: &str = "SYSTEMPATH_TREE_OMIT_DIRS";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use systempath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., a non-numeric depth or an unrecognized boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var(ENV_STRICT) {
            config.strict = Some(Self::parse_bool(ENV_STRICT, &val)?);
        }

        if let Ok(val) = env::var(ENV_AUTOABS) {
            config.autoabs = Some(Self::parse_bool(ENV_AUTOABS, &val)?);
        }

        if let Ok(val) = env::var(ENV_FOLLOW_SYMLINKS) {
            config.follow_symlinks = Some(Self::parse_bool(ENV_FOLLOW_SYMLINKS, &val)?);
        }

        Self::apply_tree_overrides(config)
    }

    /// Apply traversal-related environment variable overrides.
    fn apply_tree_overrides(config: &mut Config) -> Result<()> {
        let mut tree = config.tree.clone().unwrap_or_default();
        let mut modified = false;

        if let Ok(depth) = env::var(ENV_TREE_MAX_DEPTH) {
            tree.max_depth = Some(depth.parse().map_err(|_| Error::Validation {
                field: ENV_TREE_MAX_DEPTH.into(),
                message: "Must be a positive integer".into(),
            })?);
            modified = true;
        }

        if let Ok(val) = env::var(ENV_TREE_BOTTOM_UP) {
            tree.bottom_up = Some(Self::parse_bool(ENV_TREE_BOTTOM_UP, &val)?);
            modified = true;
        }

        if let Ok(val) = env::var(ENV_TREE_OMIT_DIRS) {
            tree.omit_dirs = Some(Self::parse_bool(ENV_TREE_OMIT_DIRS, &val)?);
            modified = true;
        }

        if modified {
            config.tree = Some(tree);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
