//! Operators and the shared plumbing of the typed wrappers.
//!
//! `/` and `+` join lexically and never fail. They perform no validation and
//! ignore strict mode; use [`PathBase::join`] for a checked join.
//!
//! ```
//! use systempath::{Directory, PathBase};
//!
//! let root = Directory::new("/srv");
//! let child = &root / "www" / "index.html";
//! assert_eq!(child.as_path(), std::path::Path::new("/srv/www/index.html"));
//! assert_eq!(&root + "www/index.html", child);
//! ```

use std::ops::{Add, Div};
use std::path::Path;

use crate::path::segment::join_lexical;
use crate::path::{Directory, File, PathBase, SystemPath};

/// Shared surface of `File`, `Directory` and `SystemPath`.
///
/// Each wrapper derefs to [`PathBase`] and re-exposes the lexical
/// transformations so they keep the wrapper's type.
macro_rules! path_wrapper {
    ($name:ident) => {
        impl $name {
            pub(crate) fn from_base(base: $crate::path::PathBase) -> Self {
                Self(base)
            }

            /// Borrow the untyped path object.
            #[must_use]
            pub fn as_base(&self) -> &$crate::path::PathBase {
                &self.0
            }

            /// Drop the type, keeping path and options.
            #[must_use]
            pub fn into_base(self) -> $crate::path::PathBase {
                self.0
            }

            /// Absolute, lexically normalized form.
            ///
            /// # Errors
            ///
            /// Returns an error if the current directory cannot be read.
            pub fn abspath(&self) -> $crate::Result<Self> {
                self.0.abspath().map(Self)
            }

            /// Canonical form with every symlink resolved.
            ///
            /// # Errors
            ///
            /// Fails when the path does not exist.
            pub fn realpath(&self) -> $crate::Result<Self> {
                self.0.realpath().map(Self)
            }

            /// This path relative to `start`.
            ///
            /// # Errors
            ///
            /// Returns an error if either side cannot be made absolute.
            pub fn relpath(&self, start: impl AsRef<std::path::Path>) -> $crate::Result<Self> {
                self.0.relpath(start).map(Self)
            }

            /// Collapse `.` and `..` lexically.
            #[must_use]
            pub fn normpath(&self) -> Self {
                Self(self.0.normpath())
            }

            /// Expand a leading `~`.
            ///
            /// # Errors
            ///
            /// Returns an error if the home directory is unknown.
            pub fn expanduser(&self) -> $crate::Result<Self> {
                self.0.expanduser().map(Self)
            }

            /// Substitute environment variable references.
            #[must_use]
            pub fn expandvars(&self) -> Self {
                Self(self.0.expandvars())
            }
        }

        impl std::ops::Deref for $name {
            type Target = $crate::path::PathBase;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl AsRef<std::path::Path> for $name {
            fn as_ref(&self) -> &std::path::Path {
                self.0.as_path()
            }
        }

        impl AsRef<$crate::path::PathBase> for $name {
            fn as_ref(&self) -> &$crate::path::PathBase {
                &self.0
            }
        }

        impl From<$name> for $crate::path::PathBase {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl From<$name> for std::path::PathBuf {
            fn from(value: $name) -> Self {
                value.0.into_path_buf()
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }

        impl Eq for $name {}

        impl std::hash::Hash for $name {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                self.0.hash(state);
            }
        }

        impl PartialEq<std::path::Path> for $name {
            fn eq(&self, other: &std::path::Path) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<std::path::PathBuf> for $name {
            fn eq(&self, other: &std::path::PathBuf) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$crate::path::PathBase> for $name {
            fn eq(&self, other: &$crate::path::PathBase) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$name> for $crate::path::PathBase {
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }
    };
}

/// A generic path compares equal to a file or directory at the same place.
macro_rules! system_path_eq {
    ($name:ident) => {
        impl PartialEq<$name> for SystemPath {
            fn eq(&self, other: &$name) -> bool {
                self.as_base() == other.as_base()
            }
        }

        impl PartialEq<SystemPath> for $name {
            fn eq(&self, other: &SystemPath) -> bool {
                self.as_base() == other.as_base()
            }
        }
    };
}

system_path_eq!(File);
system_path_eq!(Directory);

fn lexical_child(base: &PathBase, segment: &Path) -> SystemPath {
    SystemPath::from_base(base.derive(join_lexical(base.as_path(), segment)))
}

/// `Div` and `Add` for both owned and borrowed left-hand sides.
macro_rules! join_operators {
    ($name:ty) => {
        impl<P: AsRef<Path>> Div<P> for &$name {
            type Output = SystemPath;

            fn div(self, rhs: P) -> SystemPath {
                let base: &PathBase = self.as_ref();
                lexical_child(base, rhs.as_ref())
            }
        }

        impl<P: AsRef<Path>> Div<P> for $name {
            type Output = SystemPath;

            fn div(self, rhs: P) -> SystemPath {
                &self / rhs
            }
        }

        impl<P: AsRef<Path>> Add<P> for &$name {
            type Output = SystemPath;

            fn add(self, rhs: P) -> SystemPath {
                self / rhs
            }
        }

        impl<P: AsRef<Path>> Add<P> for $name {
            type Output = SystemPath;

            fn add(self, rhs: P) -> SystemPath {
                &self / rhs
            }
        }
    };
}

join_operators!(PathBase);
join_operators!(Directory);
join_operators!(SystemPath);
