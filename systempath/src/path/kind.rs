//! Runtime type resolution.

use std::fmt;
use std::fs::{self, FileType};
use std::path::Path;

use crate::error::{Error, Result};
use crate::path::{Directory, File, PathBase, PathOptions, SystemPath};

/// What a path currently is on disk.
///
/// Missing paths, dangling links and special files (fifos, sockets,
/// devices) are all `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathKind {
    /// Missing, or neither a regular file nor a directory.
    Unknown,
    /// A regular file.
    File,
    /// A directory.
    Directory,
}

impl PathKind {
    pub(crate) fn probe(base: &PathBase) -> Result<Self> {
        match base.metadata() {
            Ok(meta) => Ok(Self::from_file_type(meta.file_type())),
            Err(Error::NotFound { .. } | Error::NotADirectory { .. }) => Ok(Self::Unknown),
            Err(e) => Err(e),
        }
    }

    pub(crate) fn from_file_type(file_type: FileType) -> Self {
        if file_type.is_dir() {
            Self::Directory
        } else if file_type.is_file() {
            Self::File
        } else {
            Self::Unknown
        }
    }
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::File => write!(f, "file"),
            Self::Directory => write!(f, "directory"),
        }
    }
}

/// A path resolved to its concrete type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Entry {
    /// A regular file.
    File(File),
    /// A directory.
    Directory(Directory),
    /// Anything else: special files, dangling links, missing paths.
    Other(PathBase),
}

impl Entry {
    /// Wrap `base` according to `kind`.
    pub(crate) fn with_kind(base: PathBase, kind: PathKind) -> Self {
        match kind {
            PathKind::File => Self::File(File::from_base(base)),
            PathKind::Directory => Self::Directory(Directory::from_base(base)),
            PathKind::Unknown => Self::Other(base),
        }
    }

    /// Resolve `base` by querying the filesystem.
    pub(crate) fn classify(base: PathBase) -> Result<Self> {
        let kind = PathKind::probe(&base)?;
        Ok(Self::with_kind(base, kind))
    }

    /// Type a listing result without an extra `stat` unless it is a link
    /// that must be followed.
    pub(crate) fn from_listing(path: &Path, file_type: FileType, options: PathOptions) -> Self {
        let base = PathBase::from_parts(path.to_path_buf(), options);
        let kind = if file_type.is_symlink() && options.follows_symlinks() {
            fs::metadata(path).map_or(PathKind::Unknown, |m| PathKind::from_file_type(m.file_type()))
        } else {
            PathKind::from_file_type(file_type)
        };
        Self::with_kind(base, kind)
    }

    /// The underlying path object.
    #[must_use]
    pub fn base(&self) -> &PathBase {
        match self {
            Self::File(file) => file.as_base(),
            Self::Directory(dir) => dir.as_base(),
            Self::Other(base) => base,
        }
    }

    /// The wrapped path.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.base().as_path()
    }

    /// The kind this entry was resolved to.
    #[must_use]
    pub fn kind(&self) -> PathKind {
        match self {
            Self::File(_) => PathKind::File,
            Self::Directory(_) => PathKind::Directory,
            Self::Other(_) => PathKind::Unknown,
        }
    }

    /// Returns `true` for [`Entry::File`].
    #[must_use]
    pub fn is_file(&self) -> bool {
        matches!(self, Self::File(_))
    }

    /// Returns `true` for [`Entry::Directory`].
    #[must_use]
    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Directory(_))
    }

    /// Borrow as a file, if it is one.
    #[must_use]
    pub fn as_file(&self) -> Option<&File> {
        match self {
            Self::File(file) => Some(file),
            _ => None,
        }
    }

    /// Borrow as a directory, if it is one.
    #[must_use]
    pub fn as_directory(&self) -> Option<&Directory> {
        match self {
            Self::Directory(dir) => Some(dir),
            _ => None,
        }
    }

    /// Erase the concrete type.
    #[must_use]
    pub fn into_system_path(self) -> SystemPath {
        match self {
            Self::File(file) => SystemPath::from_base(file.into_base()),
            Self::Directory(dir) => SystemPath::from_base(dir.into_base()),
            Self::Other(base) => SystemPath::from_base(base),
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.base().fmt(f)
    }
}

impl AsRef<Path> for Entry {
    fn as_ref(&self) -> &Path {
        self.path()
    }
}
