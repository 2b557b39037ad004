//! Configuration schema definitions.
//!
//! Every field is optional so that partial files can be layered; unset
//! fields fall back to the built-in defaults in [`Config::path_options`] and
//! [`Config::tree_options`].

use serde::{Deserialize, Serialize};

use crate::path::{PathOptions, TreeOptions};

/// Default for `strict` when no source sets it.
pub const DEFAULT_STRICT: bool = false;
/// Default for `autoabs` when no source sets it.
pub const DEFAULT_AUTOABS: bool = false;
/// Default for `follow_symlinks` when no source sets it.
pub const DEFAULT_FOLLOW_SYMLINKS: bool = true;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use systempath::config::{Config, TreeConfig};
///
/// let config = Config {
///     strict: Some(true),
///     tree: Some(TreeConfig {
///         max_depth: Some(3),
///         ..Default::default()
///     }),
///     ..Default::default()
/// };
/// assert!(config.path_options().is_strict());
/// assert_eq!(config.tree_options().depth_limit(), Some(3));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Require paths to exist when constructed.
    pub strict: Option<bool>,

    /// Make paths absolute when constructed.
    pub autoabs: Option<bool>,

    /// Follow symbolic links for metadata and traversal.
    pub follow_symlinks: Option<bool>,

    /// Defaults for recursive traversal.
    pub tree: Option<TreeConfig>,
}

/// Traversal defaults.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TreeConfig {
    /// Levels below the root to descend; unset means unlimited.
    pub max_depth: Option<usize>,

    /// Yield directories after their contents.
    pub bottom_up: Option<bool>,

    /// Leave directories out of the output.
    pub omit_dirs: Option<bool>,
}

impl Config {
    /// Path options with defaults filled in.
    #[must_use]
    pub fn path_options(&self) -> PathOptions {
        PathOptions::new()
            .strict(self.strict.unwrap_or(DEFAULT_STRICT))
            .autoabs(self.autoabs.unwrap_or(DEFAULT_AUTOABS))
            .follow_symlinks(self.follow_symlinks.unwrap_or(DEFAULT_FOLLOW_SYMLINKS))
    }

    /// Tree options with defaults filled in.
    #[must_use]
    pub fn tree_options(&self) -> TreeOptions {
        let tree = self.tree.clone().unwrap_or_default();
        TreeOptions::new()
            .max_depth(tree.max_depth)
            .bottom_up(tree.bottom_up.unwrap_or(false))
            .omit_dirs(tree.omit_dirs.unwrap_or(false))
    }
}
