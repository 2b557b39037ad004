//! Error types for the systempath library.
//!
//! The error taxonomy mirrors the operating system's filesystem errors. Each
//! variant carries the path the failing operation was applied to, so callers
//! get the OS meaning plus the context in a single value.

use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for operations that may fail with a systempath error.
///
/// # Examples
///
/// ```
/// use systempath::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(5)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the systempath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A path does not exist.
    #[error("path not found: {}", path.display())]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// The target of a create operation already exists.
    #[error("path already exists: {}", path.display())]
    AlreadyExists {
        /// The path that already exists.
        path: PathBuf,
    },

    /// A directory operation was applied to something that is not a directory.
    #[error("not a directory: {}", path.display())]
    NotADirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// A file operation was applied to a directory.
    #[error("is a directory: {}", path.display())]
    IsADirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// A file operation was applied to something that is not a regular file.
    #[error("not a regular file: {}", path.display())]
    NotAFile {
        /// The offending path.
        path: PathBuf,
    },

    /// Strict-mode construction was requested for a path that does not exist.
    #[error("system path {} does not exist (strict mode)", path.display())]
    StrictPathNotFound {
        /// The path that was required to exist.
        path: PathBuf,
    },

    /// A join segment was rejected before any filesystem access.
    #[error("invalid path segment {segment:?}: {reason}")]
    InvalidSegment {
        /// The rejected segment, lossily converted for display.
        segment: String,
        /// The reason the segment is invalid.
        reason: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// Source and destination of a content copy are the same file.
    #[error("source and destination are the same file: {}", path.display())]
    SameFile {
        /// The shared path.
        path: PathBuf,
    },

    /// A symlink loop was detected during traversal.
    #[error("symlink loop detected: {}", path.display())]
    SymlinkLoop {
        /// The path where the loop was detected.
        path: PathBuf,
    },

    /// Any other I/O failure, with the path it happened on.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The path the operation was applied to.
        path: PathBuf,
        /// The underlying OS error.
        #[source]
        source: io::Error,
    },

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),
}

impl Error {
    /// Map an OS error onto the taxonomy, attaching `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use systempath::Error;
    /// use std::io::{self, ErrorKind};
    ///
    /// let err = Error::from_io(io::Error::from(ErrorKind::NotFound), "/missing");
    /// assert!(err.is_not_found());
    /// ```
    pub fn from_io(err: io::Error, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        match err.kind() {
            ErrorKind::NotFound => Self::NotFound { path },
            ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            ErrorKind::AlreadyExists => Self::AlreadyExists { path },
            ErrorKind::NotADirectory => Self::NotADirectory { path },
            ErrorKind::IsADirectory => Self::IsADirectory { path },
            _ => Self::Io { path, source: err },
        }
    }

    /// Check if error indicates a path does not exist.
    ///
    /// Strict-mode failures count as not-found.
    ///
    /// # Examples
    ///
    /// ```
    /// use systempath::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::NotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::StrictPathNotFound { .. }
        )
    }

    /// Check if error is permission-related.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }

    /// The path this error refers to, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::NotFound { path }
            | Self::PermissionDenied { path }
            | Self::AlreadyExists { path }
            | Self::NotADirectory { path }
            | Self::IsADirectory { path }
            | Self::NotAFile { path }
            | Self::StrictPathNotFound { path }
            | Self::InvalidPath { path, .. }
            | Self::SameFile { path }
            | Self::SymlinkLoop { path }
            | Self::Io { path, .. } => Some(path),
            Self::InvalidSegment { .. } | Self::Validation { .. } | Self::Configuration(_) => {
                None
            }
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        if let Some(ancestor) = err.loop_ancestor() {
            return Self::SymlinkLoop {
                path: ancestor.to_path_buf(),
            };
        }
        let path = err.path().map(Path::to_path_buf).unwrap_or_default();
        match err.into_io_error() {
            Some(io_err) => Self::from_io(io_err, path),
            None => Self::InvalidPath {
                path,
                reason: "directory traversal failed".to_string(),
            },
        }
    }
}

/// Attach a path to `io::Result` values.
pub(crate) trait IoContext<T> {
    fn at(self, path: &Path) -> Result<T>;
}

impl<T> IoContext<T> for io::Result<T> {
    fn at(self, path: &Path) -> Result<T> {
        self.map_err(|e| Error::from_io(e, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_io_maps_kinds() {
        let cases = [
            (ErrorKind::NotFound, "not found"),
            (ErrorKind::PermissionDenied, "permission denied"),
            (ErrorKind::AlreadyExists, "already exists"),
            (ErrorKind::NotADirectory, "not a directory"),
            (ErrorKind::IsADirectory, "is a directory"),
        ];
        for (kind, needle) in cases {
            let err = Error::from_io(io::Error::from(kind), "/some/path");
            let display = format!("{err}");
            assert!(display.contains(needle), "{display} should mention {needle}");
            assert_eq!(err.path(), Some(Path::new("/some/path")));
        }
    }

    #[test]
    fn test_from_io_other_keeps_source() {
        let err = Error::from_io(io::Error::other("disk on fire"), "/dev/sda");
        match err {
            Error::Io { path, source } => {
                assert_eq!(path, PathBuf::from("/dev/sda"));
                assert!(source.to_string().contains("disk on fire"));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_strict_not_found_is_not_found() {
        let err = Error::StrictPathNotFound {
            path: PathBuf::from("/missing"),
        };
        assert!(err.is_not_found());
        assert!(format!("{err}").contains("strict mode"));
    }

    #[test]
    fn test_permission_denied_predicate() {
        let err = Error::PermissionDenied {
            path: PathBuf::from("/restricted"),
        };
        assert!(err.is_permission_denied());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_invalid_segment_display() {
        let err = Error::InvalidSegment {
            segment: "/etc".to_string(),
            reason: "segment must be relative".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("\"/etc\""));
        assert!(display.contains("relative"));
        assert!(err.path().is_none());
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "tree.max_depth".to_string(),
            message: "must be at least 1".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("tree.max_depth"));
        assert!(display.contains("at least 1"));
    }

    #[test]
    fn test_io_context_attaches_path() {
        let res: io::Result<()> = Err(io::Error::from(ErrorKind::NotFound));
        let err = res.at(Path::new("/a/b")).unwrap_err();
        assert!(matches!(err, Error::NotFound { ref path } if path == Path::new("/a/b")));
    }
}
