//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, TreeConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use systempath::config::{Config, ConfigMerger};
///
/// let low = Config { strict: Some(false), autoabs: Some(true), ..Default::default() };
/// let high = Config { strict: Some(true), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.strict, Some(true));
/// assert_eq!(result.autoabs, Some(true));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources given from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge `source` into `target`; set fields in `source` win.
    ///
    /// The `tree` section is merged field by field.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.strict.is_some() {
            target.strict = source.strict;
        }
        if source.autoabs.is_some() {
            target.autoabs = source.autoabs;
        }
        if source.follow_symlinks.is_some() {
            target.follow_symlinks = source.follow_symlinks;
        }
        if let Some(source_tree) = &source.tree {
            let tree = target.tree.get_or_insert_with(TreeConfig::default);
            Self::merge_tree(tree, source_tree);
        }
    }

    fn merge_tree(target: &mut TreeConfig, source: &TreeConfig) {
        if source.max_depth.is_some() {
            target.max_depth = source.max_depth;
        }
        if source.bottom_up.is_some() {
            target.bottom_up = source.bottom_up;
        }
        if source.omit_dirs.is_some() {
            target.omit_dirs = source.omit_dirs;
        }
    }
}
