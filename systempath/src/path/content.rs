//! Streaming view over a file's bytes.

use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::Path;

use crate::error::{Error, IoContext, Result};
use crate::path::File;

/// Chunk size for streaming reads.
#[cfg(windows)]
pub const READ_BUFSIZE: usize = 1024 * 1024;
/// Chunk size for streaming reads.
#[cfg(not(windows))]
pub const READ_BUFSIZE: usize = 64 * 1024;

/// The content of a [`File`], read and written on demand.
///
/// Comparisons and copies stream in [`READ_BUFSIZE`] chunks, so large files
/// are never held in memory.
///
/// ```no_run
/// use systempath::File;
///
/// let file = File::new("/tmp/notes.txt");
/// let content = file.contents();
/// content.overwrite(b"a\r\nb\n")?;
/// assert!(content.eq_bytes(b"a\r\nb\n")?);
/// let lines: Vec<Vec<u8>> = content.lines()?.collect::<Result<_, _>>()?;
/// assert_eq!(lines, vec![b"a".to_vec(), b"b".to_vec()]);
/// # Ok::<(), systempath::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Content {
    file: File,
}

impl Content {
    pub(crate) fn new(file: File) -> Self {
        Self { file }
    }

    fn path(&self) -> &Path {
        self.file.as_path()
    }

    fn reader(&self) -> Result<BufReader<fs::File>> {
        let handle = fs::File::open(self.path()).at(self.path())?;
        Ok(BufReader::with_capacity(READ_BUFSIZE, handle))
    }

    /// The file this view reads.
    #[must_use]
    pub fn file(&self) -> &File {
        &self.file
    }

    /// All bytes.
    ///
    /// # Errors
    ///
    /// Propagates the OS error.
    pub fn bytes(&self) -> Result<Vec<u8>> {
        self.file.read()
    }

    /// At most `limit` bytes from the start.
    ///
    /// # Errors
    ///
    /// Propagates the OS error.
    pub fn read(&self, limit: u64) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.reader()?
            .take(limit)
            .read_to_end(&mut buf)
            .at(self.path())?;
        Ok(buf)
    }

    /// Size in bytes.
    ///
    /// # Errors
    ///
    /// Propagates the OS error.
    pub fn len(&self) -> Result<u64> {
        Ok(fs::metadata(self.path()).at(self.path())?.len())
    }

    /// Whether the file is empty.
    ///
    /// # Errors
    ///
    /// Propagates the OS error.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Compare against `expected` without loading the whole file.
    ///
    /// # Errors
    ///
    /// Propagates the OS error.
    pub fn eq_bytes(&self, expected: &[u8]) -> Result<bool> {
        if self.len()? != expected.len() as u64 {
            return Ok(false);
        }
        let mut reader = self.reader()?;
        let mut offset = 0;
        loop {
            let chunk = reader.fill_buf().at(self.path())?;
            if chunk.is_empty() {
                return Ok(offset == expected.len());
            }
            let end = offset + chunk.len();
            if end > expected.len() || chunk != &expected[offset..end] {
                return Ok(false);
            }
            let consumed = chunk.len();
            reader.consume(consumed);
            offset = end;
        }
    }

    /// Compare against another file's content, chunk by chunk.
    ///
    /// # Errors
    ///
    /// Propagates the OS error of either side.
    pub fn eq_content(&self, other: &Content) -> Result<bool> {
        if self.len()? != other.len()? {
            return Ok(false);
        }
        let mut left = self.reader()?;
        let mut right = other.reader()?;
        let mut left_buf = vec![0u8; READ_BUFSIZE];
        let mut right_buf = vec![0u8; READ_BUFSIZE];
        loop {
            let n = read_full(&mut left, &mut left_buf).at(self.path())?;
            let m = read_full(&mut right, &mut right_buf).at(other.path())?;
            if n != m || left_buf[..n] != right_buf[..m] {
                return Ok(false);
            }
            if n == 0 {
                return Ok(true);
            }
        }
    }

    /// Iterate lines with trailing `\r` and `\n` removed.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be opened; read errors surface per line.
    pub fn lines(&self) -> Result<Lines> {
        Ok(Lines {
            inner: self.reader()?.split(b'\n'),
            path: self.path().to_path_buf(),
        })
    }

    /// Replace the content with `data`.
    ///
    /// # Errors
    ///
    /// Propagates the OS error.
    pub fn overwrite(&self, data: &[u8]) -> Result<()> {
        self.file.write(data)
    }

    /// Replace the content with another file's content, streaming.
    ///
    /// Returns the number of bytes copied.
    ///
    /// # Errors
    ///
    /// `SameFile` when `source` is this file, otherwise OS errors.
    pub fn overwrite_from(&self, source: &File) -> Result<u64> {
        self.ensure_distinct(source)?;
        let mut reader = source.contents().reader()?;
        let mut out = fs::File::create(self.path()).at(self.path())?;
        log::debug!(
            "copying content {} -> {}",
            source.as_path().display(),
            self.path().display()
        );
        io::copy(&mut reader, &mut out).at(self.path())
    }

    /// Append `data`.
    ///
    /// # Errors
    ///
    /// Propagates the OS error.
    pub fn append(&self, data: &[u8]) -> Result<()> {
        self.file.append(data)
    }

    /// Append another file's content, streaming.
    ///
    /// # Errors
    ///
    /// `SameFile` when `source` is this file, otherwise OS errors.
    pub fn append_from(&self, source: &File) -> Result<u64> {
        self.ensure_distinct(source)?;
        let mut reader = source.contents().reader()?;
        let mut out = OpenOptions::new()
            .append(true)
            .create(true)
            .open(self.path())
            .at(self.path())?;
        io::copy(&mut reader, &mut out).at(self.path())
    }

    /// Stream the content into any writer.
    ///
    /// # Errors
    ///
    /// Propagates the OS error.
    pub fn copy_into<W: Write + ?Sized>(&self, writer: &mut W) -> Result<u64> {
        let mut reader = self.reader()?;
        io::copy(&mut reader, writer).at(self.path())
    }

    /// Cut to `len` bytes.
    ///
    /// # Errors
    ///
    /// Propagates the OS error.
    pub fn truncate(&self, len: u64) -> Result<()> {
        self.file.truncate(len)
    }

    /// Empty the file.
    ///
    /// # Errors
    ///
    /// Propagates the OS error.
    pub fn clear(&self) -> Result<()> {
        self.file.clear()
    }

    /// Hex MD5 digest, optionally salted.
    ///
    /// # Errors
    ///
    /// Propagates the OS error.
    pub fn md5(&self, salt: Option<&[u8]>) -> Result<String> {
        let mut ctx = md5::Context::new();
        if let Some(salt) = salt {
            ctx.consume(salt);
        }
        let mut reader = self.reader()?;
        loop {
            let chunk = reader.fill_buf().at(self.path())?;
            if chunk.is_empty() {
                break;
            }
            ctx.consume(chunk);
            let consumed = chunk.len();
            reader.consume(consumed);
        }
        Ok(format!("{:x}", ctx.compute()))
    }

    /// Reject a source that is this file, by name or through a link.
    fn ensure_distinct(&self, source: &File) -> Result<()> {
        if source == &self.file || same_inode(source.as_path(), self.path()) {
            return Err(Error::SameFile {
                path: self.path().to_path_buf(),
            });
        }
        Ok(())
    }
}

#[cfg(unix)]
fn same_inode(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (fs::metadata(a), fs::metadata(b)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn same_inode(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Read until `buf` is full or the reader is exhausted.
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Lines of a file, see [`Content::lines`].
#[derive(Debug)]
pub struct Lines {
    inner: io::Split<BufReader<fs::File>>,
    path: std::path::PathBuf,
}

impl Iterator for Lines {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.inner.next()?;
        Some(line.at(&self.path).map(|mut bytes| {
            while matches!(bytes.last(), Some(b'\r' | b'\n')) {
                bytes.pop();
            }
            bytes
        }))
    }
}
