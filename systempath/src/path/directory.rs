//! Directories.

use std::env;
use std::ffi::OsString;
use std::fs::{self, ReadDir};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, IoContext, Result};
use crate::path::{Entry, PathBase, PathKind, PathOptions, SystemPath, Tree, TreeOptions, Walk};

/// A path expected to be a directory.
///
/// # Examples
///
/// ```no_run
/// use systempath::{Directory, Entry};
///
/// let dir = Directory::new("/tmp/project");
/// dir.make_dirs(true)?;
/// (&dir / "notes.txt").as_file()?.write(b"todo")?;
///
/// for entry in dir.list()? {
///     if let Entry::File(file) = entry {
///         println!("{} ({} bytes)", file, file.size()?);
///     }
/// }
/// # Ok::<(), systempath::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Directory(PathBase);

path_wrapper!(Directory);

/// Options for [`Directory::copy_tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CopyTreeOptions {
    dirs_exist_ok: bool,
    preserve_symlinks: bool,
}

impl CopyTreeOptions {
    /// Fail on an existing destination; copy symlink targets.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            dirs_exist_ok: false,
            preserve_symlinks: false,
        }
    }

    /// Merge into an existing destination instead of failing.
    #[must_use]
    pub const fn dirs_exist_ok(mut self, ok: bool) -> Self {
        self.dirs_exist_ok = ok;
        self
    }

    /// Recreate symlinks as links instead of copying what they point to.
    #[must_use]
    pub const fn preserve_symlinks(mut self, preserve: bool) -> Self {
        self.preserve_symlinks = preserve;
        self
    }
}

impl Directory {
    /// Wrap `path` with default options.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self(PathBase::new(path))
    }

    /// Wrap `path` with explicit options.
    ///
    /// # Errors
    ///
    /// In strict mode, fails with `StrictPathNotFound` when the path is
    /// missing and `NotADirectory` when it is not a directory.
    pub fn with_options(path: impl AsRef<Path>, options: PathOptions) -> Result<Self> {
        Self::from_checked_base(PathBase::with_options(path, options)?)
    }

    pub(crate) fn from_checked_base(base: PathBase) -> Result<Self> {
        if base.options().is_strict() {
            base.check_strict()?;
            if base.kind()? != PathKind::Directory {
                return Err(Error::NotADirectory {
                    path: base.into_path_buf(),
                });
            }
        }
        Ok(Self(base))
    }

    /// The current user's home directory.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPath` when no home directory is known.
    pub fn home(options: PathOptions) -> Result<Self> {
        let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
            path: PathBuf::from("~"),
            reason: "Cannot determine home directory".to_string(),
        })?;
        Self::with_options(home, options)
    }

    /// The current working directory.
    ///
    /// # Errors
    ///
    /// Propagates the OS error.
    pub fn current(options: PathOptions) -> Result<Self> {
        let cwd = env::current_dir().at(Path::new("."))?;
        Self::with_options(cwd, options)
    }

    /// Checked child path; same as [`PathBase::join`].
    ///
    /// # Errors
    ///
    /// `InvalidSegment`, or `StrictPathNotFound` in strict mode.
    pub fn child(&self, name: impl AsRef<Path>) -> Result<SystemPath> {
        self.join(name)
    }

    /// Child resolved to its concrete type.
    ///
    /// # Errors
    ///
    /// `InvalidSegment` for a bad name and `NotFound` when nothing exists
    /// there.
    pub fn lookup(&self, name: impl AsRef<Path>) -> Result<Entry> {
        let child = self.join(name)?;
        if !child.lexists() {
            return Err(Error::NotFound {
                path: child.into_base().into_path_buf(),
            });
        }
        child.resolve()
    }

    /// Delete the named child, whatever it is.
    ///
    /// # Errors
    ///
    /// `InvalidSegment`, `NotFound`, and other OS errors.
    pub fn remove_child(&self, name: impl AsRef<Path>) -> Result<()> {
        self.join(name)?.delete(false)
    }

    fn read_dir(&self) -> Result<ReadDir> {
        fs::read_dir(self.as_path()).at(self.as_path())
    }

    /// Lazily iterate direct children, typed from the directory listing.
    ///
    /// # Errors
    ///
    /// Fails if the directory cannot be opened; per-entry errors are yielded.
    pub fn iter(&self) -> Result<Children> {
        Ok(Children {
            inner: self.read_dir()?,
            dir: self.as_path().to_path_buf(),
            options: self.options(),
        })
    }

    /// Direct children, typed.
    ///
    /// # Errors
    ///
    /// Propagates the first OS error.
    pub fn list(&self) -> Result<Vec<Entry>> {
        self.iter()?.collect()
    }

    /// Names of the direct children.
    ///
    /// # Errors
    ///
    /// Propagates the first OS error.
    pub fn subpath_names(&self) -> Result<Vec<OsString>> {
        self.read_dir()?
            .map(|entry| entry.map(|e| e.file_name()).at(self.as_path()))
            .collect()
    }

    /// Recursive traversal of every descendant.
    #[must_use]
    pub fn tree(&self, options: TreeOptions) -> Tree {
        Tree::new(self.as_path(), options, self.options())
    }

    /// `(dirpath, dirnames, filenames)` per directory, parents first when
    /// `topdown`.
    #[must_use]
    pub fn walk(&self, topdown: bool) -> Walk {
        Walk::new(self.as_path(), topdown, self.options().follows_symlinks())
    }

    /// Copy the whole tree to `dst`.
    ///
    /// # Errors
    ///
    /// `AlreadyExists` when `dst` exists and `dirs_exist_ok` is off, and any
    /// OS error met on the way.
    pub fn copy_tree(&self, dst: impl AsRef<Path>, options: CopyTreeOptions) -> Result<Self> {
        let dst = dst.as_ref();
        if dst.exists() && !options.dirs_exist_ok {
            return Err(Error::AlreadyExists {
                path: dst.to_path_buf(),
            });
        }
        log::debug!("copying tree {} -> {}", self.as_path().display(), dst.display());
        fs::create_dir_all(dst).at(dst)?;

        let walker = WalkDir::new(self.as_path())
            .min_depth(1)
            .follow_links(!options.preserve_symlinks);
        for entry in walker {
            let entry = entry?;
            let rel = entry
                .path()
                .strip_prefix(self.as_path())
                .map_err(|_| Error::InvalidPath {
                    path: entry.path().to_path_buf(),
                    reason: "entry escaped the source tree".to_string(),
                })?;
            let target = dst.join(rel);
            let file_type = entry.file_type();
            if file_type.is_dir() {
                fs::create_dir_all(&target).at(&target)?;
            } else if file_type.is_symlink() {
                copy_symlink(entry.path(), &target)?;
            } else {
                fs::copy(entry.path(), &target).at(entry.path())?;
            }
        }
        Ok(Self(self.derive(dst.to_path_buf())))
    }

    /// Delete every child, keeping the directory itself.
    ///
    /// # Errors
    ///
    /// Propagates the first OS error.
    pub fn clear(&self) -> Result<()> {
        log::debug!("clearing {}", self.as_path().display());
        for entry in self.read_dir()? {
            let entry = entry.at(self.as_path())?;
            PathBase::new(entry.path()).delete(true)?;
        }
        Ok(())
    }

    /// Create this directory. The parent must exist.
    ///
    /// # Errors
    ///
    /// `AlreadyExists` unless `ignore_exists`, and other OS errors.
    pub fn mkdir(&self, ignore_exists: bool) -> Result<()> {
        log::debug!("mkdir {}", self.as_path().display());
        match fs::create_dir(self.as_path()) {
            Err(e) if ignore_exists && e.kind() == std::io::ErrorKind::AlreadyExists => Ok(()),
            other => other.at(self.as_path()),
        }
    }

    /// Create this directory and any missing parents.
    ///
    /// # Errors
    ///
    /// `AlreadyExists` when the directory exists and `exist_ok` is off, and
    /// other OS errors.
    pub fn make_dirs(&self, exist_ok: bool) -> Result<()> {
        if !exist_ok && self.lexists() {
            return Err(Error::AlreadyExists {
                path: self.as_path().to_path_buf(),
            });
        }
        log::debug!("make_dirs {}", self.as_path().display());
        fs::create_dir_all(self.as_path()).at(self.as_path())
    }

    /// Remove this directory, which must be empty.
    ///
    /// # Errors
    ///
    /// Propagates the OS error.
    pub fn rmdir(&self) -> Result<()> {
        log::debug!("rmdir {}", self.as_path().display());
        fs::remove_dir(self.as_path()).at(self.as_path())
    }

    /// Remove this empty directory, then each parent left empty.
    ///
    /// # Errors
    ///
    /// Only a failure to remove this directory is reported.
    pub fn remove_dirs(&self) -> Result<()> {
        self.rmdir()?;
        crate::path::base::prune_empty_parents(self.as_path());
        Ok(())
    }

    /// Remove this directory and everything below it.
    ///
    /// # Errors
    ///
    /// Propagates the OS error unless `ignore_errors`.
    pub fn rmtree(&self, ignore_errors: bool) -> Result<()> {
        log::debug!("rmtree {}", self.as_path().display());
        match fs::remove_dir_all(self.as_path()).at(self.as_path()) {
            Err(e) if ignore_errors => {
                log::debug!("ignoring rmtree failure: {e}");
                Ok(())
            }
            other => other,
        }
    }

    /// Make this the process working directory.
    ///
    /// # Errors
    ///
    /// Propagates the OS error.
    pub fn chdir(&self) -> Result<()> {
        log::debug!("chdir {}", self.as_path().display());
        env::set_current_dir(self.as_path()).at(self.as_path())
    }
}

pub(crate) fn copy_symlink(src: &Path, dst: &Path) -> Result<()> {
    let target = fs::read_link(src).at(src)?;
    #[cfg(unix)]
    std::os::unix::fs::symlink(&target, dst).at(dst)?;
    #[cfg(windows)]
    {
        if fs::metadata(src).is_ok_and(|m| m.is_dir()) {
            std::os::windows::fs::symlink_dir(&target, dst).at(dst)?;
        } else {
            std::os::windows::fs::symlink_file(&target, dst).at(dst)?;
        }
    }
    Ok(())
}

/// Lazy listing of a directory's direct children.
#[derive(Debug)]
pub struct Children {
    inner: ReadDir,
    dir: PathBuf,
    options: PathOptions,
}

impl Iterator for Children {
    type Item = Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = match self.inner.next()? {
            Ok(entry) => entry,
            Err(e) => return Some(Err(Error::from_io(e, &self.dir))),
        };
        let path = entry.path();
        Some(
            entry
                .file_type()
                .at(&path)
                .map(|file_type| Entry::from_listing(&path, file_type, self.options)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use tempfile::TempDir;

    #[test]
    fn test_list_types_children() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("f1"), b"").unwrap();
        fs::write(temp.path().join("f2"), b"").unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();

        let entries = Directory::new(temp.path()).list().unwrap();
        assert_eq!(entries.len(), 3);
        for entry in &entries {
            let expect_dir = entry.path().ends_with("sub");
            assert_eq!(entry.is_dir(), expect_dir, "{}", entry);
            assert_eq!(entry.is_file(), !expect_dir, "{}", entry);
        }
    }

    #[test]
    fn test_children_inherit_options() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("f"), b"").unwrap();
        let options = PathOptions::new().follow_symlinks(false);
        let dir = Directory::with_options(temp.path(), options).unwrap();
        let entries = dir.list().unwrap();
        assert_eq!(entries[0].base().options(), options);
    }

    #[test]
    fn test_subpath_names() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a"), b"").unwrap();
        fs::write(temp.path().join("b"), b"").unwrap();
        let names: BTreeSet<OsString> = Directory::new(temp.path())
            .subpath_names()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(names, BTreeSet::from([OsString::from("a"), OsString::from("b")]));
    }

    #[test]
    fn test_list_missing_dir() {
        let temp = TempDir::new().unwrap();
        let err = Directory::new(temp.path().join("missing")).list().unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_list_on_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("f");
        fs::write(&file, b"").unwrap();
        let err = Directory::new(&file).list().unwrap_err();
        assert!(matches!(err, Error::NotADirectory { .. }), "{err:?}");
    }

    #[test]
    fn test_strict_requires_directory() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("f");
        fs::write(&file, b"").unwrap();
        let strict = PathOptions::new().strict(true);

        assert!(matches!(
            Directory::with_options(&file, strict),
            Err(Error::NotADirectory { .. })
        ));
        assert!(Directory::with_options(temp.path(), strict).is_ok());
    }

    #[test]
    fn test_lookup() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("f"), b"").unwrap();
        fs::create_dir(temp.path().join("d")).unwrap();
        let dir = Directory::new(temp.path());

        assert!(dir.lookup("f").unwrap().is_file());
        assert!(dir.lookup("d").unwrap().is_dir());
        assert!(dir.lookup("nothing").unwrap_err().is_not_found());
        assert!(matches!(dir.lookup(""), Err(Error::InvalidSegment { .. })));
    }

    #[test]
    fn test_remove_child() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("d/e")).unwrap();
        let dir = Directory::new(temp.path());
        dir.remove_child("d").unwrap();
        assert!(!temp.path().join("d").exists());
    }

    #[test]
    fn test_mkdir_and_make_dirs() {
        let temp = TempDir::new().unwrap();
        let single = Directory::new(temp.path().join("one"));
        single.mkdir(false).unwrap();
        assert!(matches!(single.mkdir(false), Err(Error::AlreadyExists { .. })));
        single.mkdir(true).unwrap();

        let nested = Directory::new(temp.path().join("x/y/z"));
        assert!(nested.mkdir(false).unwrap_err().is_not_found());
        nested.make_dirs(false).unwrap();
        assert!(nested.is_dir());
        assert!(matches!(nested.make_dirs(false), Err(Error::AlreadyExists { .. })));
        nested.make_dirs(true).unwrap();
    }

    #[test]
    fn test_rmdir_and_remove_dirs() {
        let temp = TempDir::new().unwrap();
        let nested = Directory::new(temp.path().join("p/q/r"));
        nested.make_dirs(false).unwrap();
        fs::write(temp.path().join("p/keep"), b"").unwrap();

        nested.remove_dirs().unwrap();
        assert!(!temp.path().join("p/q").exists());
        assert!(temp.path().join("p").exists());

        let full = Directory::new(temp.path().join("p"));
        assert!(full.rmdir().is_err());
    }

    #[test]
    fn test_rmtree() {
        let temp = TempDir::new().unwrap();
        let root = Directory::new(temp.path().join("r"));
        Directory::new(temp.path().join("r/s/t")).make_dirs(false).unwrap();
        fs::write(temp.path().join("r/s/file"), b"x").unwrap();
        root.rmtree(false).unwrap();
        assert!(!root.exists());
        assert!(root.rmtree(false).is_err());
        root.rmtree(true).unwrap();
    }

    #[test]
    fn test_clear_keeps_dir() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("sub/f"), b"").unwrap();
        fs::write(temp.path().join("g"), b"").unwrap();

        let dir = Directory::new(temp.path());
        dir.clear().unwrap();
        assert!(dir.is_dir());
        assert!(dir.list().unwrap().is_empty());
    }

    #[test]
    fn test_copy_tree() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        fs::create_dir_all(src.join("inner")).unwrap();
        fs::write(src.join("inner/f"), b"data").unwrap();
        fs::write(src.join("top"), b"t").unwrap();

        let dst = temp.path().join("dst");
        let copied = Directory::new(&src)
            .copy_tree(&dst, CopyTreeOptions::new())
            .unwrap();
        assert_eq!(copied.as_path(), dst.as_path());
        assert_eq!(fs::read(dst.join("inner/f")).unwrap(), b"data");
        assert_eq!(fs::read(dst.join("top")).unwrap(), b"t");

        let again = Directory::new(&src).copy_tree(&dst, CopyTreeOptions::new());
        assert!(matches!(again, Err(Error::AlreadyExists { .. })));
        Directory::new(&src)
            .copy_tree(&dst, CopyTreeOptions::new().dirs_exist_ok(true))
            .unwrap();
    }

    #[test]
    #[cfg(unix)]
    fn test_copy_tree_preserves_symlinks() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        fs::create_dir(&src).unwrap();
        fs::write(src.join("real"), b"r").unwrap();
        std::os::unix::fs::symlink("real", src.join("link")).unwrap();

        let dst = temp.path().join("dst");
        Directory::new(&src)
            .copy_tree(&dst, CopyTreeOptions::new().preserve_symlinks(true))
            .unwrap();
        assert!(dst.join("link").is_symlink());
        assert_eq!(fs::read_link(dst.join("link")).unwrap(), PathBuf::from("real"));

        let flat = temp.path().join("flat");
        Directory::new(&src)
            .copy_tree(&flat, CopyTreeOptions::new())
            .unwrap();
        assert!(!flat.join("link").is_symlink());
        assert_eq!(fs::read(flat.join("link")).unwrap(), b"r");
    }

    #[test]
    fn test_tree_and_walk_entry_points() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("a/b")).unwrap();
        fs::write(temp.path().join("a/b/f"), b"").unwrap();
        let dir = Directory::new(temp.path());

        let count = dir.tree(TreeOptions::new()).filter_map(std::result::Result::ok).count();
        assert_eq!(count, 3);
        assert_eq!(dir.walk(true).count(), 3);
    }

    #[test]
    fn test_home() {
        let home = Directory::home(PathOptions::new()).unwrap();
        assert!(home.is_absolute());
    }
}
