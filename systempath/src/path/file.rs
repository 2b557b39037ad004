//! Regular files.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{Error, IoContext, Result};
use crate::path::{Content, Directory, PathBase, PathKind, PathOptions};

/// A path expected to be a regular file.
///
/// Whole-content operations open, act and close in one call; no handle is
/// kept between calls.
///
/// # Examples
///
/// ```no_run
/// use systempath::File;
///
/// let file = File::new("/tmp/greeting.txt");
/// file.write(b"hello")?;
/// assert_eq!(file.read()?, b"hello");
/// file.delete(false)?;
/// assert!(!file.exists());
/// # Ok::<(), systempath::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct File(PathBase);

path_wrapper!(File);

impl File {
    /// Wrap `path` with default options.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self(PathBase::new(path))
    }

    /// Wrap `path` with explicit options.
    ///
    /// # Errors
    ///
    /// In strict mode, fails with `StrictPathNotFound` when the path is
    /// missing and `NotAFile` when it is something other than a regular file.
    pub fn with_options(path: impl AsRef<Path>, options: PathOptions) -> Result<Self> {
        Self::from_checked_base(PathBase::with_options(path, options)?)
    }

    pub(crate) fn from_checked_base(base: PathBase) -> Result<Self> {
        if base.options().is_strict() {
            base.check_strict()?;
            if base.kind()? != PathKind::File {
                return Err(Error::NotAFile {
                    path: base.into_path_buf(),
                });
            }
        }
        Ok(Self(base))
    }

    /// A view over the file's bytes.
    #[must_use]
    pub fn contents(&self) -> Content {
        Content::new(self.clone())
    }

    /// Read the whole file.
    ///
    /// # Errors
    ///
    /// `NotFound`, `PermissionDenied`, `IsADirectory` and other OS errors.
    pub fn read(&self) -> Result<Vec<u8>> {
        fs::read(self.as_path()).at(self.as_path())
    }

    /// Read the whole file as UTF-8.
    ///
    /// # Errors
    ///
    /// As [`File::read`], plus an `Io` error for invalid UTF-8.
    pub fn read_to_string(&self) -> Result<String> {
        fs::read_to_string(self.as_path()).at(self.as_path())
    }

    /// Replace the file's content, creating it if needed.
    ///
    /// # Errors
    ///
    /// Propagates the OS error.
    pub fn write(&self, data: impl AsRef<[u8]>) -> Result<()> {
        let data = data.as_ref();
        log::debug!("writing {} bytes to {}", data.len(), self.as_path().display());
        fs::write(self.as_path(), data).at(self.as_path())
    }

    /// Append to the file, creating it if needed.
    ///
    /// # Errors
    ///
    /// Propagates the OS error.
    pub fn append(&self, data: impl AsRef<[u8]>) -> Result<()> {
        let data = data.as_ref();
        log::debug!("appending {} bytes to {}", data.len(), self.as_path().display());
        let mut handle = self.open(OpenMode::Append)?;
        handle.write_all(data).at(self.as_path())
    }

    /// Empty the file. It must already exist.
    ///
    /// # Errors
    ///
    /// Propagates the OS error.
    pub fn clear(&self) -> Result<()> {
        self.truncate(0)
    }

    /// Cut or extend the file to `len` bytes. It must already exist.
    ///
    /// # Errors
    ///
    /// Propagates the OS error.
    pub fn truncate(&self, len: u64) -> Result<()> {
        log::debug!("truncating {} to {len} bytes", self.as_path().display());
        let handle = OpenOptions::new()
            .write(true)
            .open(self.as_path())
            .at(self.as_path())?;
        handle.set_len(len).at(self.as_path())
    }

    /// Copy to `dst`, returning the new file.
    ///
    /// # Errors
    ///
    /// Fails with `IsADirectory` when `dst` is a directory, otherwise
    /// propagates the OS error.
    pub fn copy_to(&self, dst: impl AsRef<Path>) -> Result<Self> {
        let dst = dst.as_ref();
        if dst.is_dir() {
            return Err(Error::IsADirectory {
                path: dst.to_path_buf(),
            });
        }
        log::debug!("copying {} -> {}", self.as_path().display(), dst.display());
        fs::copy(self.as_path(), dst).at(self.as_path())?;
        Ok(Self(self.derive(dst.to_path_buf())))
    }

    /// Stream this file's bytes into `other`, replacing its content.
    ///
    /// Returns the number of bytes copied.
    ///
    /// # Errors
    ///
    /// `SameFile` when both refer to the same path, otherwise OS errors.
    pub fn copy_content_to(&self, other: &File) -> Result<u64> {
        other.contents().overwrite_from(self)
    }

    /// Create a hard link at `dst`.
    ///
    /// # Errors
    ///
    /// Propagates the OS error.
    pub fn hard_link(&self, dst: impl AsRef<Path>) -> Result<Self> {
        let dst = dst.as_ref();
        fs::hard_link(self.as_path(), dst).at(dst)?;
        Ok(Self(self.derive(dst.to_path_buf())))
    }

    /// Create an empty file. Without `ignore_exists` an existing file is an
    /// error; with it the existing content is left untouched.
    ///
    /// # Errors
    ///
    /// `AlreadyExists` and other OS errors.
    pub fn create(&self, ignore_exists: bool) -> Result<()> {
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(self.as_path())
        {
            Ok(_) => {
                log::debug!("created {}", self.as_path().display());
                Ok(())
            }
            Err(e) if ignore_exists && e.kind() == ErrorKind::AlreadyExists => Ok(()),
            Err(e) => Err(Error::from_io(e, self.as_path())),
        }
    }

    /// Like [`File::create`], creating missing parent directories first.
    ///
    /// # Errors
    ///
    /// Propagates the OS error.
    pub fn create_all(&self, ignore_exists: bool) -> Result<()> {
        if let Some(parent) = self.as_path().parent().filter(|p| !p.as_os_str().is_empty()) {
            Directory::from_base(self.derive(parent.to_path_buf())).make_dirs(true)?;
        }
        self.create(ignore_exists)
    }

    /// Remove the file.
    ///
    /// # Errors
    ///
    /// `NotFound` unless `ignore_missing`, and other OS errors.
    pub fn remove(&self, ignore_missing: bool) -> Result<()> {
        log::debug!("removing {}", self.as_path().display());
        match fs::remove_file(self.as_path()) {
            Err(e) if ignore_missing && e.kind() == ErrorKind::NotFound => Ok(()),
            other => other.at(self.as_path()),
        }
    }

    /// Extension without the dot.
    #[must_use]
    pub fn extension(&self) -> Option<&OsStr> {
        self.as_path().extension()
    }

    /// File name without the extension.
    #[must_use]
    pub fn stem(&self) -> Option<&OsStr> {
        self.as_path().file_stem()
    }

    /// Split into the path without its extension and the extension with its
    /// leading dot (empty when there is none).
    #[must_use]
    pub fn split_extension(&self) -> (PathBuf, OsString) {
        match self.as_path().extension() {
            Some(ext) => {
                let mut dotted = OsString::from(".");
                dotted.push(ext);
                (self.as_path().with_extension(""), dotted)
            }
            None => (self.as_path().to_path_buf(), OsString::new()),
        }
    }

    /// Hex MD5 digest of the content, optionally salted with bytes fed
    /// before the content.
    ///
    /// # Errors
    ///
    /// Propagates the OS error.
    pub fn md5(&self, salt: Option<&[u8]>) -> Result<String> {
        self.contents().md5(salt)
    }

    /// Open a handle with the given mode.
    ///
    /// # Errors
    ///
    /// Propagates the OS error.
    pub fn open(&self, mode: OpenMode) -> Result<fs::File> {
        mode.to_open_options().open(self.as_path()).at(self.as_path())
    }
}

/// How [`File::open`] opens the file.
///
/// Parses the conventional mode names: `r`, `w`, `a`, `x`, each with an
/// optional `b`/`t` and an optional `+` (spelled `+` or `_plus`). Binary and
/// text are the same on this side.
///
/// ```
/// use systempath::OpenMode;
///
/// assert_eq!("rb".parse::<OpenMode>().unwrap(), OpenMode::Read);
/// assert_eq!("wb_plus".parse::<OpenMode>().unwrap(), OpenMode::WritePlus);
/// assert_eq!("a+".parse::<OpenMode>().unwrap(), OpenMode::AppendPlus);
/// assert!("q".parse::<OpenMode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// Read only; the file must exist.
    Read,
    /// Read and write; the file must exist.
    ReadPlus,
    /// Write only; create or truncate.
    Write,
    /// Read and write; create or truncate.
    WritePlus,
    /// Append only; create if missing.
    Append,
    /// Read and append; create if missing.
    AppendPlus,
    /// Write only; the file must not exist.
    Create,
    /// Read and write; the file must not exist.
    CreatePlus,
}

impl OpenMode {
    /// The matching `OpenOptions`.
    #[must_use]
    pub fn to_open_options(self) -> OpenOptions {
        let mut opts = OpenOptions::new();
        match self {
            Self::Read => opts.read(true),
            Self::ReadPlus => opts.read(true).write(true),
            Self::Write => opts.write(true).create(true).truncate(true),
            Self::WritePlus => opts.read(true).write(true).create(true).truncate(true),
            Self::Append => opts.append(true).create(true),
            Self::AppendPlus => opts.read(true).append(true).create(true),
            Self::Create => opts.write(true).create_new(true),
            Self::CreatePlus => opts.read(true).write(true).create_new(true),
        };
        opts
    }
}

impl FromStr for OpenMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::Validation {
            field: "mode".to_string(),
            message: format!("unknown open mode {s:?}"),
        };

        let (base, plus) = if let Some(rest) = s.strip_suffix("_plus") {
            (rest, true)
        } else if let Some(rest) = s.strip_suffix('+') {
            (rest, true)
        } else {
            (s, false)
        };
        let base = base
            .strip_suffix('b')
            .or_else(|| base.strip_suffix('t'))
            .unwrap_or(base);

        match (base, plus) {
            ("r", false) => Ok(Self::Read),
            ("r", true) => Ok(Self::ReadPlus),
            ("w", false) => Ok(Self::Write),
            ("w", true) => Ok(Self::WritePlus),
            ("a", false) => Ok(Self::Append),
            ("a", true) => Ok(Self::AppendPlus),
            ("x", false) => Ok(Self::Create),
            ("x", true) => Ok(Self::CreatePlus),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for OpenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Read => "r",
            Self::ReadPlus => "r+",
            Self::Write => "w",
            Self::WritePlus => "w+",
            Self::Append => "a",
            Self::AppendPlus => "a+",
            Self::Create => "x",
            Self::CreatePlus => "x+",
        };
        f.write_str(name)
    }
}
