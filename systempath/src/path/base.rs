//! The type-independent path object.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::fs::{self, Metadata, Permissions};
use std::hash::{Hash, Hasher};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::{Error, IoContext, Result};
use crate::path::normalize;
use crate::path::segment;
use crate::path::{Directory, PathKind, PathOptions, SystemPath};

/// A filesystem path plus the options it was constructed with.
///
/// `PathBase` carries every operation that does not depend on whether the
/// target is a file or a directory. [`File`](crate::File),
/// [`Directory`](crate::Directory) and [`SystemPath`] dereference to it.
///
/// Construction performs no I/O unless strict mode is enabled. Operations
/// never mutate the object: renames and moves return a new value.
///
/// # Examples
///
/// ```
/// use systempath::PathBase;
///
/// let base = PathBase::new("/tmp");
/// let child = base.join("a.txt").unwrap();
/// assert_eq!(child.as_path(), std::path::Path::new("/tmp/a.txt"));
/// ```
#[derive(Debug, Clone)]
pub struct PathBase {
    path: PathBuf,
    options: PathOptions,
}

impl PathBase {
    /// Wrap `path` with default options. Never touches the filesystem.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::from_parts(path.as_ref().to_path_buf(), PathOptions::default())
    }

    /// Wrap `path` with explicit options.
    ///
    /// # Errors
    ///
    /// - `autoabs` is set and the current directory cannot be read
    /// - `strict` is set and the path does not exist (`StrictPathNotFound`)
    pub fn with_options(path: impl AsRef<Path>, options: PathOptions) -> Result<Self> {
        let path = if options.is_autoabs() {
            normalize::absolutize(path.as_ref())?
        } else {
            path.as_ref().to_path_buf()
        };
        let base = Self::from_parts(path, options);
        base.check_strict()?;
        Ok(base)
    }

    pub(crate) fn from_parts(path: PathBuf, options: PathOptions) -> Self {
        Self { path, options }
    }

    pub(crate) fn check_strict(&self) -> Result<()> {
        if self.options.is_strict() && !self.try_exists()? {
            return Err(Error::StrictPathNotFound {
                path: self.path.clone(),
            });
        }
        Ok(())
    }

    /// Derive a sibling value with the same options and no checks.
    pub(crate) fn derive(&self, path: PathBuf) -> Self {
        Self::from_parts(path, self.options)
    }

    /// Borrow the wrapped path.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// The options this path was constructed with.
    #[must_use]
    pub fn options(&self) -> PathOptions {
        self.options
    }

    /// Consume into the wrapped `PathBuf`.
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.path
    }

    /// Join a relative segment, producing a generic child path.
    ///
    /// The segment must be non-empty, relative, and free of NUL bytes. In
    /// strict mode the child must exist.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSegment` for a rejected segment and
    /// `StrictPathNotFound` for a missing child in strict mode.
    pub fn join(&self, segment: impl AsRef<Path>) -> Result<SystemPath> {
        let segment = segment.as_ref();
        segment::validate(segment)?;
        let child = self.derive(segment::join_lexical(&self.path, segment));
        child.check_strict()?;
        Ok(SystemPath::from_base(child))
    }

    /// Final component of the path, if any.
    #[must_use]
    pub fn basename(&self) -> Option<&OsStr> {
        self.path.file_name()
    }

    /// The parent directory. A bare name yields `.`.
    ///
    /// # Errors
    ///
    /// Fails only in strict mode, when the parent is not an existing directory.
    pub fn dirname(&self) -> Result<Directory> {
        self.dirname_level(1)
    }

    /// The ancestor `level` steps up. Level 0 is the path itself.
    ///
    /// Climbing stops at the root: `/` is its own parent. A relative path
    /// that runs out of components yields `.`.
    ///
    /// # Errors
    ///
    /// Fails only in strict mode, when the ancestor is not an existing
    /// directory.
    pub fn dirname_level(&self, level: usize) -> Result<Directory> {
        let mut current = self.path.as_path();
        for _ in 0..level {
            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }
        let dir = if current.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            current.to_path_buf()
        };
        Directory::from_checked_base(self.derive(dir))
    }

    /// Absolute, lexically normalized form.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be read.
    pub fn abspath(&self) -> Result<Self> {
        Ok(self.derive(normalize::absolutize(&self.path)?))
    }

    /// Canonical form with every symlink resolved. The path must exist.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` and friends from the OS.
    pub fn realpath(&self) -> Result<Self> {
        Ok(self.derive(fs::canonicalize(&self.path).at(&self.path)?))
    }

    /// This path expressed relative to `start`.
    ///
    /// # Errors
    ///
    /// Returns an error if either side cannot be made absolute.
    pub fn relpath(&self, start: impl AsRef<Path>) -> Result<Self> {
        Ok(self.derive(normalize::relative_to(&self.path, start.as_ref())?))
    }

    /// Collapse `.` and `..` lexically.
    #[must_use]
    pub fn normpath(&self) -> Self {
        self.derive(normalize::normpath(&self.path))
    }

    /// Expand a leading `~`.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory is unknown or `~user` is used.
    pub fn expanduser(&self) -> Result<Self> {
        Ok(self.derive(normalize::expand_tilde(&self.path)?))
    }

    /// Substitute `$VAR` / `${VAR}` references.
    #[must_use]
    pub fn expandvars(&self) -> Self {
        self.derive(normalize::expand_vars(&self.path))
    }

    /// Split into parent and final component.
    #[must_use]
    pub fn split(&self) -> (PathBuf, Option<OsString>) {
        let parent = self
            .path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        (parent, self.path.file_name().map(OsStr::to_os_string))
    }

    /// Whether the wrapped path is absolute.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.path.is_absolute()
    }

    /// Query metadata, following symlinks unless the options say otherwise.
    ///
    /// # Errors
    ///
    /// Propagates the OS error with this path attached.
    pub fn metadata(&self) -> Result<Metadata> {
        if self.options.follows_symlinks() {
            fs::metadata(&self.path).at(&self.path)
        } else {
            fs::symlink_metadata(&self.path).at(&self.path)
        }
    }

    /// Query metadata of the link itself.
    ///
    /// # Errors
    ///
    /// Propagates the OS error with this path attached.
    pub fn symlink_metadata(&self) -> Result<Metadata> {
        fs::symlink_metadata(&self.path).at(&self.path)
    }

    /// Whether the path exists. Any error counts as "no".
    #[must_use]
    pub fn exists(&self) -> bool {
        self.try_exists().unwrap_or(false)
    }

    /// Whether the path exists, propagating errors other than a missing
    /// entry or a non-directory in the middle of the path.
    ///
    /// # Errors
    ///
    /// Returns `PermissionDenied` and other unexpected OS failures.
    pub fn try_exists(&self) -> Result<bool> {
        match self.metadata() {
            Ok(_) => Ok(true),
            Err(Error::NotFound { .. } | Error::NotADirectory { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Whether the path exists without following a final symlink.
    #[must_use]
    pub fn lexists(&self) -> bool {
        fs::symlink_metadata(&self.path).is_ok()
    }

    /// Whether the path is a directory.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.metadata().is_ok_and(|m| m.is_dir())
    }

    /// Whether the path is a regular file.
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.metadata().is_ok_and(|m| m.is_file())
    }

    /// Whether the path itself is a symbolic link.
    #[must_use]
    pub fn is_symlink(&self) -> bool {
        self.path.is_symlink()
    }

    /// What the path currently is on disk.
    ///
    /// # Errors
    ///
    /// Propagates unexpected OS failures; a missing path is `Unknown`.
    pub fn kind(&self) -> Result<PathKind> {
        PathKind::probe(self)
    }

    /// Size in bytes.
    ///
    /// # Errors
    ///
    /// Propagates the OS error.
    pub fn size(&self) -> Result<u64> {
        Ok(self.metadata()?.len())
    }

    /// Last modification time.
    ///
    /// # Errors
    ///
    /// Propagates the OS error.
    pub fn modified(&self) -> Result<SystemTime> {
        self.metadata()?.modified().at(&self.path)
    }

    /// Last access time.
    ///
    /// # Errors
    ///
    /// Propagates the OS error.
    pub fn accessed(&self) -> Result<SystemTime> {
        self.metadata()?.accessed().at(&self.path)
    }

    /// Creation time, where the platform records it.
    ///
    /// # Errors
    ///
    /// Propagates the OS error, including "unsupported".
    pub fn created(&self) -> Result<SystemTime> {
        self.metadata()?.created().at(&self.path)
    }

    /// Current permission bits.
    ///
    /// # Errors
    ///
    /// Propagates the OS error.
    pub fn permissions(&self) -> Result<Permissions> {
        Ok(self.metadata()?.permissions())
    }

    /// Toggle the read-only flag.
    ///
    /// # Errors
    ///
    /// Propagates the OS error.
    pub fn set_readonly(&self, readonly: bool) -> Result<()> {
        let mut perms = self.permissions()?;
        perms.set_readonly(readonly);
        log::debug!("set readonly={readonly} on {}", self.path.display());
        fs::set_permissions(&self.path, perms).at(&self.path)
    }

    /// Copy this path's permission bits onto `dst`.
    ///
    /// # Errors
    ///
    /// Propagates the OS error for either side.
    pub fn copy_mode(&self, dst: impl AsRef<Path>) -> Result<()> {
        let dst = dst.as_ref();
        let perms = self.permissions()?;
        fs::set_permissions(dst, perms).at(dst)
    }

    /// Remove the path: a whole tree for a directory, the entry otherwise.
    ///
    /// A symlink is removed itself, never its target. With `ignore_missing`
    /// a path that is already gone is not an error.
    ///
    /// # Errors
    ///
    /// Propagates the OS error.
    pub fn delete(&self, ignore_missing: bool) -> Result<()> {
        let meta = match self.symlink_metadata() {
            Ok(meta) => meta,
            Err(Error::NotFound { .. }) if ignore_missing => return Ok(()),
            Err(e) => return Err(e),
        };
        log::debug!("deleting {}", self.path.display());
        let result = if meta.is_dir() {
            fs::remove_dir_all(&self.path)
        } else {
            fs::remove_file(&self.path)
        };
        match result {
            Err(e) if ignore_missing && e.kind() == ErrorKind::NotFound => Ok(()),
            other => other.at(&self.path),
        }
    }

    /// Resolve a rename destination: a bare name stays in this path's parent.
    pub(crate) fn sibling_destination(&self, dst: &Path) -> PathBuf {
        let single_name = dst.components().count() == 1 && dst.file_name() == Some(dst.as_os_str());
        if single_name {
            match self.path.parent() {
                Some(parent) => parent.join(dst),
                None => dst.to_path_buf(),
            }
        } else {
            dst.to_path_buf()
        }
    }

    /// Rename to `dst`, returning the renamed path.
    ///
    /// A bare name such as `"b.txt"` renames within the current parent
    /// directory rather than the working directory.
    ///
    /// # Errors
    ///
    /// Propagates the OS error.
    pub fn rename(&self, dst: impl AsRef<Path>) -> Result<Self> {
        let target = self.sibling_destination(dst.as_ref());
        log::debug!("renaming {} -> {}", self.path.display(), target.display());
        fs::rename(&self.path, &target).at(&self.path)?;
        Ok(self.derive(target))
    }

    /// Rename, creating missing destination parents and pruning source
    /// parents left empty.
    ///
    /// # Errors
    ///
    /// Propagates the OS error from creating the parents or the rename.
    pub fn renames(&self, dst: impl AsRef<Path>) -> Result<Self> {
        let target = self.sibling_destination(dst.as_ref());
        if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).at(parent)?;
        }
        let renamed = self.rename(&target)?;
        prune_empty_parents(&self.path);
        Ok(renamed)
    }

    /// Move to `dst`.
    ///
    /// When `dst` is an existing directory the path is moved inside it. A
    /// failed plain rename, for example across filesystems, falls back to
    /// copy then delete; symlinks are recreated rather than followed, and a
    /// partial copy is removed when the fallback fails.
    ///
    /// # Errors
    ///
    /// `InvalidPath` when a directory would move into its own subtree.
    /// Otherwise propagates the OS error of the rename or of the fallback.
    pub fn move_to(&self, dst: impl AsRef<Path>) -> Result<Self> {
        let dst = dst.as_ref();
        let target = match self.path.file_name() {
            Some(name) if dst.is_dir() => dst.join(name),
            _ => dst.to_path_buf(),
        };
        if fs::symlink_metadata(&self.path).is_ok_and(|m| m.is_dir())
            && normalize::absolutize(&target)?.starts_with(normalize::absolutize(&self.path)?)
        {
            return Err(Error::InvalidPath {
                path: target,
                reason: format!(
                    "cannot move directory {} into itself",
                    self.path.display()
                ),
            });
        }
        log::debug!("moving {} -> {}", self.path.display(), target.display());

        match fs::rename(&self.path, &target) {
            Ok(()) => return Ok(self.derive(target)),
            Err(e)
                if matches!(
                    e.kind(),
                    ErrorKind::NotFound | ErrorKind::PermissionDenied | ErrorKind::AlreadyExists
                ) =>
            {
                return Err(Error::from_io(e, &self.path));
            }
            Err(e) => log::debug!("rename failed ({e}), copying instead"),
        }

        let meta = self.symlink_metadata()?;
        let target_existed = fs::symlink_metadata(&target).is_ok();
        if let Err(e) = self.copy_for_move(&meta, &target) {
            if !target_existed {
                log::debug!("removing partial copy {}", target.display());
                let _ = PathBase::new(&target).delete(true);
            }
            return Err(e);
        }
        if meta.is_dir() {
            fs::remove_dir_all(&self.path).at(&self.path)?;
        } else {
            fs::remove_file(&self.path).at(&self.path)?;
        }
        Ok(self.derive(target))
    }

    fn copy_for_move(&self, meta: &Metadata, target: &Path) -> Result<()> {
        let file_type = meta.file_type();
        if file_type.is_dir() {
            let options = crate::path::CopyTreeOptions::new().preserve_symlinks(true);
            Directory::from_base(self.clone()).copy_tree(target, options)?;
        } else if file_type.is_symlink() {
            crate::path::directory::copy_symlink(&self.path, target)?;
        } else {
            fs::copy(&self.path, target).at(&self.path)?;
        }
        Ok(())
    }

    /// Create a symbolic link at `dst` pointing to this path.
    ///
    /// # Errors
    ///
    /// Propagates the OS error.
    pub fn symlink_to(&self, dst: impl AsRef<Path>) -> Result<Self> {
        let dst = dst.as_ref();
        #[cfg(unix)]
        std::os::unix::fs::symlink(&self.path, dst).at(dst)?;
        #[cfg(windows)]
        {
            if self.is_dir() {
                std::os::windows::fs::symlink_dir(&self.path, dst).at(dst)?;
            } else {
                std::os::windows::fs::symlink_file(&self.path, dst).at(dst)?;
            }
        }
        Ok(self.derive(dst.to_path_buf()))
    }

    /// Target of this symbolic link.
    ///
    /// # Errors
    ///
    /// Propagates the OS error, e.g. when the path is not a link.
    pub fn read_link(&self) -> Result<Self> {
        Ok(self.derive(fs::read_link(&self.path).at(&self.path)?))
    }

    /// Key used for equality and hashing: the absolute lexical form.
    fn comparison_key(&self) -> PathBuf {
        normalize::absolutize(&self.path).unwrap_or_else(|_| normalize::normpath(&self.path))
    }
}

#[cfg(unix)]
impl PathBase {
    /// Set the full unix permission mode.
    ///
    /// # Errors
    ///
    /// Propagates the OS error.
    pub fn chmod(&self, mode: u32) -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        log::debug!("chmod {mode:o} {}", self.path.display());
        fs::set_permissions(&self.path, Permissions::from_mode(mode)).at(&self.path)
    }

    /// Owning user id.
    ///
    /// # Errors
    ///
    /// Propagates the OS error.
    pub fn uid(&self) -> Result<u32> {
        use std::os::unix::fs::MetadataExt;
        Ok(self.metadata()?.uid())
    }

    /// Owning group id.
    ///
    /// # Errors
    ///
    /// Propagates the OS error.
    pub fn gid(&self) -> Result<u32> {
        use std::os::unix::fs::MetadataExt;
        Ok(self.metadata()?.gid())
    }

    /// Whether the path is a mount point.
    #[must_use]
    pub fn is_mount(&self) -> bool {
        use std::os::unix::fs::MetadataExt;

        let Ok(meta) = fs::symlink_metadata(&self.path) else {
            return false;
        };
        if meta.file_type().is_symlink() {
            return false;
        }
        let parent = self.path.join("..");
        match fs::symlink_metadata(&parent) {
            Ok(parent_meta) => meta.dev() != parent_meta.dev() || meta.ino() == parent_meta.ino(),
            Err(_) => false,
        }
    }

    /// Whether the path is a block device.
    #[must_use]
    pub fn is_block_device(&self) -> bool {
        use std::os::unix::fs::FileTypeExt;
        self.metadata().is_ok_and(|m| m.file_type().is_block_device())
    }

    /// Whether the path is a character device.
    #[must_use]
    pub fn is_char_device(&self) -> bool {
        use std::os::unix::fs::FileTypeExt;
        self.metadata().is_ok_and(|m| m.file_type().is_char_device())
    }

    /// Whether the path is a named pipe.
    #[must_use]
    pub fn is_fifo(&self) -> bool {
        use std::os::unix::fs::FileTypeExt;
        self.metadata().is_ok_and(|m| m.file_type().is_fifo())
    }

    /// Whether the path is a unix socket.
    #[must_use]
    pub fn is_socket(&self) -> bool {
        use std::os::unix::fs::FileTypeExt;
        self.metadata().is_ok_and(|m| m.file_type().is_socket())
    }
}

/// Remove empty ancestors of `path`, stopping at the first failure.
pub(crate) fn prune_empty_parents(path: &Path) {
    let mut current = path.parent();
    while let Some(dir) = current.filter(|p| !p.as_os_str().is_empty()) {
        if fs::remove_dir(dir).is_err() {
            break;
        }
        log::debug!("pruned empty directory {}", dir.display());
        current = dir.parent();
    }
}

impl fmt::Display for PathBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl AsRef<Path> for PathBase {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl AsRef<PathBase> for PathBase {
    fn as_ref(&self) -> &PathBase {
        self
    }
}

impl PartialEq for PathBase {
    fn eq(&self, other: &Self) -> bool {
        self.comparison_key() == other.comparison_key()
    }
}

impl Eq for PathBase {}

impl Hash for PathBase {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.comparison_key().hash(state);
    }
}

impl PartialEq<Path> for PathBase {
    fn eq(&self, other: &Path) -> bool {
        self.comparison_key() == PathBase::new(other).comparison_key()
    }
}

impl PartialEq<PathBuf> for PathBase {
    fn eq(&self, other: &PathBuf) -> bool {
        self == other.as_path()
    }
}

impl PartialEq<str> for PathBase {
    fn eq(&self, other: &str) -> bool {
        self == Path::new(other)
    }
}

impl PartialEq<&str> for PathBase {
    fn eq(&self, other: &&str) -> bool {
        self == Path::new(*other)
    }
}

impl From<PathBase> for PathBuf {
    fn from(base: PathBase) -> Self {
        base.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_does_not_touch_filesystem() {
        let base = PathBase::new("/definitely/not/here");
        assert!(!base.exists());
        assert_eq!(base.kind().unwrap(), PathKind::Unknown);
    }

    #[test]
    fn test_strict_construction() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");
        let strict = PathOptions::new().strict(true);

        let err = PathBase::with_options(&missing, strict).unwrap_err();
        assert!(matches!(err, Error::StrictPathNotFound { .. }));
        assert!(PathBase::with_options(&missing, PathOptions::new()).is_ok());
        assert!(PathBase::with_options(temp.path(), strict).is_ok());
    }

    #[test]
    fn test_autoabs() {
        let base =
            PathBase::with_options("some/rel/../path", PathOptions::new().autoabs(true)).unwrap();
        assert!(base.is_absolute());
        assert!(base.as_path().ends_with("some/path"));
    }

    #[test]
    fn test_join_rejects_absolute_and_empty() {
        let base = PathBase::new("/tmp");
        assert!(matches!(
            base.join(""),
            Err(Error::InvalidSegment { .. })
        ));
        #[cfg(unix)]
        assert!(matches!(
            base.join("/etc"),
            Err(Error::InvalidSegment { .. })
        ));
    }

    #[test]
    fn test_join_strict_requires_child() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("present"), b"x").unwrap();
        let base = PathBase::with_options(temp.path(), PathOptions::new().strict(true)).unwrap();

        assert!(base.join("present").is_ok());
        let err = base.join("absent").unwrap_err();
        assert!(matches!(err, Error::StrictPathNotFound { .. }));
    }

    #[test]
    fn test_basename_dirname() {
        let base = PathBase::new("/a/b/c.txt");
        assert_eq!(base.basename(), Some(OsStr::new("c.txt")));
        assert_eq!(base.dirname().unwrap().as_path(), Path::new("/a/b"));
        assert_eq!(base.dirname_level(2).unwrap().as_path(), Path::new("/a"));
        assert_eq!(base.dirname_level(0).unwrap().as_path(), Path::new("/a/b/c.txt"));
        assert_eq!(PathBase::new("name").dirname().unwrap().as_path(), Path::new("."));
        assert_eq!(PathBase::new("a/b").dirname_level(5).unwrap().as_path(), Path::new("."));
    }

    #[test]
    #[cfg(unix)]
    fn test_dirname_stops_at_root() {
        assert_eq!(PathBase::new("/").dirname().unwrap().as_path(), Path::new("/"));
        assert_eq!(PathBase::new("/a").dirname_level(3).unwrap().as_path(), Path::new("/"));
        assert_eq!(PathBase::new("/a/b").dirname_level(2).unwrap().as_path(), Path::new("/"));
    }

    #[test]
    fn test_join_is_associative() {
        let base = PathBase::new("/srv");
        for (s1, s2) in [("a", "b"), ("a/b", "c/d"), ("x/..", "y"), ("./p", "q/./r")] {
            let stepwise = base.join(s1).unwrap().join(s2).unwrap();
            let combined = base.join(format!("{s1}/{s2}")).unwrap();
            assert_eq!(stepwise.as_path(), combined.as_path(), "{s1} then {s2}");
        }
    }

    #[test]
    fn test_split() {
        let (parent, name) = PathBase::new("/a/b").split();
        assert_eq!(parent, PathBuf::from("/a"));
        assert_eq!(name, Some(OsString::from("b")));
    }

    #[test]
    fn test_equality_uses_absolute_form() {
        let cwd = std::env::current_dir().unwrap();
        let relative = PathBase::new("x/./y");
        let absolute = PathBase::new(cwd.join("x/y"));
        assert_eq!(relative, absolute);
        assert_eq!(absolute, cwd.join("x").join("y"));
        assert_ne!(PathBase::new("/a"), PathBase::new("/b"));
    }

    #[test]
    fn test_delete_file_and_tree() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("f");
        fs::write(&file, b"x").unwrap();
        let tree = temp.path().join("d/e");
        fs::create_dir_all(&tree).unwrap();

        PathBase::new(&file).delete(false).unwrap();
        assert!(!file.exists());

        PathBase::new(temp.path().join("d")).delete(false).unwrap();
        assert!(!temp.path().join("d").exists());

        assert!(PathBase::new(&file).delete(true).is_ok());
        assert!(PathBase::new(&file).delete(false).unwrap_err().is_not_found());
    }

    #[test]
    fn test_rename_single_name_stays_in_parent() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("a.txt");
        fs::write(&src, b"x").unwrap();

        let renamed = PathBase::new(&src).rename("b.txt").unwrap();
        assert_eq!(renamed.as_path(), temp.path().join("b.txt"));
        assert!(renamed.exists());
        assert!(!src.exists());
    }

    #[test]
    fn test_renames_creates_and_prunes() {
        let temp = TempDir::new().unwrap();
        let src_dir = temp.path().join("old/deep");
        fs::create_dir_all(&src_dir).unwrap();
        let src = src_dir.join("f");
        fs::write(&src, b"x").unwrap();

        let dst = temp.path().join("new/nested/f");
        let renamed = PathBase::new(&src).renames(&dst).unwrap();
        assert_eq!(renamed.as_path(), dst.as_path());
        assert!(dst.exists());
        assert!(!temp.path().join("old").exists());
    }

    #[test]
    fn test_move_into_directory() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("a.txt");
        fs::write(&src, b"x").unwrap();
        let dst_dir = temp.path().join("dst");
        fs::create_dir(&dst_dir).unwrap();

        let moved = PathBase::new(&src).move_to(&dst_dir).unwrap();
        assert_eq!(moved.as_path(), dst_dir.join("a.txt"));
        assert!(moved.is_file());
    }

    #[test]
    fn test_move_directory_into_itself_rejected() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("a");
        fs::create_dir_all(src.join("b")).unwrap();
        fs::write(src.join("keep.txt"), b"k").unwrap();

        let err = PathBase::new(&src).move_to(src.join("b")).unwrap_err();
        assert!(matches!(err, Error::InvalidPath { .. }), "{err}");
        assert!(!src.join("b/a").exists());
        assert_eq!(fs::read(src.join("keep.txt")).unwrap(), b"k");

        let err = PathBase::new(&src).move_to(src.join("b/renamed")).unwrap_err();
        assert!(matches!(err, Error::InvalidPath { .. }), "{err}");
        assert!(fs::read_dir(src.join("b")).unwrap().next().is_none());
    }

    #[test]
    fn test_move_sibling_with_shared_prefix() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("a");
        fs::create_dir(&src).unwrap();

        let moved = PathBase::new(&src).move_to(temp.path().join("ab")).unwrap();
        assert!(moved.is_dir());
        assert!(!src.exists());
    }

    #[test]
    #[cfg(unix)]
    fn test_move_fallback_keeps_symlink() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("target.txt");
        fs::write(&target, b"t").unwrap();
        let link = temp.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();
        let dst = temp.path().join("moved-link");

        let meta = fs::symlink_metadata(&link).unwrap();
        PathBase::new(&link).copy_for_move(&meta, &dst).unwrap();
        assert!(fs::symlink_metadata(&dst).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_link(&dst).unwrap(), target);
    }

    #[test]
    fn test_move_missing_source() {
        let temp = TempDir::new().unwrap();
        let err = PathBase::new(temp.path().join("nope"))
            .move_to(temp.path().join("dst"))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    #[cfg(unix)]
    fn test_symlink_roundtrip() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("target");
        fs::write(&target, b"x").unwrap();
        let link = temp.path().join("link");

        let created = PathBase::new(&target).symlink_to(&link).unwrap();
        assert!(created.is_symlink());
        assert_eq!(created.read_link().unwrap().as_path(), target.as_path());

        let nofollow = PathBase::with_options(&link, PathOptions::new().follow_symlinks(false))
            .unwrap();
        assert!(nofollow.metadata().unwrap().file_type().is_symlink());
        assert!(PathBase::new(&link).metadata().unwrap().is_file());
    }

    #[test]
    #[cfg(unix)]
    fn test_chmod_and_copy_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let a = temp.path().join("a");
        let b = temp.path().join("b");
        fs::write(&a, b"x").unwrap();
        fs::write(&b, b"y").unwrap();

        let base = PathBase::new(&a);
        base.chmod(0o640).unwrap();
        base.copy_mode(&b).unwrap();
        let mode = fs::metadata(&b).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o640);
    }

    #[test]
    #[cfg(unix)]
    fn test_root_is_mount() {
        assert!(PathBase::new("/").is_mount());
    }

    #[test]
    fn test_size_and_times() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("f");
        fs::write(&file, b"12345").unwrap();
        let base = PathBase::new(&file);
        assert_eq!(base.size().unwrap(), 5);
        assert!(base.modified().is_ok());
        assert!(base.accessed().is_ok());
    }
}
