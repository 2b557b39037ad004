//! Construction options shared by every path type.

/// Options fixed at construction time and inherited by child paths.
///
/// # Examples
///
/// ```
/// use systempath::PathOptions;
///
/// let options = PathOptions::new().strict(true).autoabs(true);
/// assert!(options.is_strict());
/// assert!(options.is_autoabs());
/// assert!(options.follows_symlinks());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathOptions {
    autoabs: bool,
    strict: bool,
    follow_symlinks: bool,
}

impl PathOptions {
    /// Non-strict, relative paths kept as given, symlinks followed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            autoabs: false,
            strict: false,
            follow_symlinks: true,
        }
    }

    /// Normalize the path to absolute form at construction.
    #[must_use]
    pub const fn autoabs(mut self, autoabs: bool) -> Self {
        self.autoabs = autoabs;
        self
    }

    /// Require the path to exist at construction.
    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Whether `metadata` and traversal follow symbolic links.
    #[must_use]
    pub const fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Returns whether paths are made absolute at construction.
    #[must_use]
    pub const fn is_autoabs(&self) -> bool {
        self.autoabs
    }

    /// Returns whether strict mode is enabled.
    #[must_use]
    pub const fn is_strict(&self) -> bool {
        self.strict
    }

    /// Returns whether symbolic links are followed.
    #[must_use]
    pub const fn follows_symlinks(&self) -> bool {
        self.follow_symlinks
    }
}

impl Default for PathOptions {
    fn default() -> Self {
        Self::new()
    }
}
