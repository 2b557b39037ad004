//! Configuration validation.

use crate::config::schema::{Config, TreeConfig};
use crate::error::{Error, Result};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use systempath::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(tree) = &config.tree {
            Self::validate_tree(tree)?;
        }
        Ok(())
    }

    fn validate_tree(tree: &TreeConfig) -> Result<()> {
        if tree.max_depth == Some(0) {
            return Err(Error::Validation {
                field: "tree.max_depth".into(),
                message: "must be at least 1 (omit it for unlimited depth)".into(),
            });
        }
        Ok(())
    }
}
