//! Generic paths resolved to a file or directory on use.

use std::ffi::OsString;
use std::path::Path;

use crate::error::{Error, Result};
use crate::path::{
    Content, Directory, Entry, File, PathBase, PathKind, PathOptions, Tree, TreeOptions, Walk,
};

/// A path whose type is decided by the filesystem each time it is used.
///
/// Joining any path object yields a `SystemPath`. Nothing is cached: every
/// operation re-queries what the path currently is, so a path that changes
/// from file to directory between calls is handled correctly.
///
/// ```no_run
/// use systempath::{Entry, SystemPath};
///
/// let path = SystemPath::new("/tmp/maybe");
/// match path.resolve()? {
///     Entry::File(file) => println!("file of {} bytes", file.size()?),
///     Entry::Directory(dir) => println!("{} children", dir.list()?.len()),
///     Entry::Other(_) => println!("nothing usable there"),
/// }
/// # Ok::<(), systempath::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct SystemPath(PathBase);

path_wrapper!(SystemPath);

impl SystemPath {
    /// Wrap `path` with default options. An empty path means `.`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self(PathBase::new(non_empty(path.as_ref())))
    }

    /// Wrap `path` with explicit options.
    ///
    /// # Errors
    ///
    /// `StrictPathNotFound` when strict and missing.
    pub fn with_options(path: impl AsRef<Path>, options: PathOptions) -> Result<Self> {
        PathBase::with_options(non_empty(path.as_ref()), options).map(Self)
    }

    /// What the path currently is.
    ///
    /// # Errors
    ///
    /// Propagates unexpected OS failures.
    pub fn kind(&self) -> Result<PathKind> {
        self.0.kind()
    }

    /// The concrete type right now.
    ///
    /// # Errors
    ///
    /// Propagates unexpected OS failures.
    pub fn resolve(&self) -> Result<Entry> {
        Entry::classify(self.0.clone())
    }

    /// View as a file. A missing path is accepted so it can be created.
    ///
    /// # Errors
    ///
    /// `IsADirectory` for a directory, `NotAFile` for a special file.
    pub fn as_file(&self) -> Result<File> {
        match self.kind()? {
            PathKind::File => Ok(File::from_base(self.0.clone())),
            PathKind::Directory => Err(Error::IsADirectory {
                path: self.as_path().to_path_buf(),
            }),
            PathKind::Unknown if self.lexists() => Err(Error::NotAFile {
                path: self.as_path().to_path_buf(),
            }),
            PathKind::Unknown => Ok(File::from_base(self.0.clone())),
        }
    }

    /// View as a directory. A missing path is accepted so it can be created.
    ///
    /// # Errors
    ///
    /// `NotADirectory` for anything that exists and is not a directory.
    pub fn as_directory(&self) -> Result<Directory> {
        match self.kind()? {
            PathKind::Directory => Ok(Directory::from_base(self.0.clone())),
            PathKind::Unknown if !self.lexists() => Ok(Directory::from_base(self.0.clone())),
            _ => Err(Error::NotADirectory {
                path: self.as_path().to_path_buf(),
            }),
        }
    }

    /// Read the file's bytes.
    ///
    /// # Errors
    ///
    /// `NotFound` when missing, `IsADirectory` for a directory.
    pub fn read(&self) -> Result<Vec<u8>> {
        self.as_file()?.read()
    }

    /// Read the file as UTF-8.
    ///
    /// # Errors
    ///
    /// As [`SystemPath::read`].
    pub fn read_to_string(&self) -> Result<String> {
        self.as_file()?.read_to_string()
    }

    /// Replace the file's content, creating it if needed.
    ///
    /// # Errors
    ///
    /// `IsADirectory` for a directory, and OS errors.
    pub fn write(&self, data: impl AsRef<[u8]>) -> Result<()> {
        self.as_file()?.write(data)
    }

    /// Append to the file, creating it if needed.
    ///
    /// # Errors
    ///
    /// `IsADirectory` for a directory, and OS errors.
    pub fn append(&self, data: impl AsRef<[u8]>) -> Result<()> {
        self.as_file()?.append(data)
    }

    /// Empty a file, or delete every child of a directory.
    ///
    /// # Errors
    ///
    /// `NotFound` when missing.
    pub fn clear(&self) -> Result<()> {
        match self.resolve()? {
            Entry::File(file) => file.clear(),
            Entry::Directory(dir) => dir.clear(),
            Entry::Other(base) if base.lexists() => Err(Error::NotAFile {
                path: base.into_path_buf(),
            }),
            Entry::Other(base) => Err(Error::NotFound {
                path: base.into_path_buf(),
            }),
        }
    }

    /// Content view of the file.
    ///
    /// # Errors
    ///
    /// `IsADirectory` for a directory.
    pub fn contents(&self) -> Result<Content> {
        Ok(self.as_file()?.contents())
    }

    /// MD5 of the file's content.
    ///
    /// # Errors
    ///
    /// As [`SystemPath::read`].
    pub fn md5(&self, salt: Option<&[u8]>) -> Result<String> {
        self.as_file()?.md5(salt)
    }

    /// Create an empty file.
    ///
    /// # Errors
    ///
    /// `AlreadyExists` unless `ignore_exists`.
    pub fn create(&self, ignore_exists: bool) -> Result<()> {
        self.as_file()?.create(ignore_exists)
    }

    /// Typed children of the directory.
    ///
    /// # Errors
    ///
    /// `NotADirectory` for a file, `NotFound` when missing.
    pub fn list(&self) -> Result<Vec<Entry>> {
        self.as_directory()?.list()
    }

    /// Names of the directory's children.
    ///
    /// # Errors
    ///
    /// As [`SystemPath::list`].
    pub fn subpath_names(&self) -> Result<Vec<OsString>> {
        self.as_directory()?.subpath_names()
    }

    /// Recursive traversal of the directory.
    ///
    /// # Errors
    ///
    /// `NotADirectory` for a file.
    pub fn tree(&self, options: TreeOptions) -> Result<Tree> {
        Ok(self.as_directory()?.tree(options))
    }

    /// Directory-by-directory traversal.
    ///
    /// # Errors
    ///
    /// `NotADirectory` for a file.
    pub fn walk(&self, topdown: bool) -> Result<Walk> {
        Ok(self.as_directory()?.walk(topdown))
    }

    /// Child resolved to its concrete type.
    ///
    /// # Errors
    ///
    /// `NotADirectory`, `InvalidSegment`, or `NotFound`.
    pub fn lookup(&self, name: impl AsRef<Path>) -> Result<Entry> {
        self.as_directory()?.lookup(name)
    }

    /// Create the directory.
    ///
    /// # Errors
    ///
    /// `AlreadyExists` unless `ignore_exists`, and OS errors.
    pub fn mkdir(&self, ignore_exists: bool) -> Result<()> {
        self.as_directory()?.mkdir(ignore_exists)
    }

    /// Create the directory and its parents.
    ///
    /// # Errors
    ///
    /// `NotADirectory` when a file is in the way, and OS errors.
    pub fn make_dirs(&self, exist_ok: bool) -> Result<()> {
        self.as_directory()?.make_dirs(exist_ok)
    }

    /// Remove the empty directory.
    ///
    /// # Errors
    ///
    /// OS errors.
    pub fn rmdir(&self) -> Result<()> {
        self.as_directory()?.rmdir()
    }

    /// Remove the directory tree.
    ///
    /// # Errors
    ///
    /// OS errors unless `ignore_errors`.
    pub fn rmtree(&self, ignore_errors: bool) -> Result<()> {
        self.as_directory()?.rmtree(ignore_errors)
    }

    /// Copy a file, or a whole directory tree, to `dst`.
    ///
    /// # Errors
    ///
    /// `NotFound` when missing, and OS errors.
    pub fn copy_to(&self, dst: impl AsRef<Path>) -> Result<Self> {
        match self.resolve()? {
            Entry::File(file) => file.copy_to(dst).map(|f| Self(f.into_base())),
            Entry::Directory(dir) => dir
                .copy_tree(dst, crate::path::CopyTreeOptions::new())
                .map(|d| Self(d.into_base())),
            Entry::Other(base) => Err(Error::NotFound {
                path: base.into_path_buf(),
            }),
        }
    }
}

fn non_empty(path: &Path) -> &Path {
    if path.as_os_str().is_empty() {
        Path::new(".")
    } else {
        path
    }
}
