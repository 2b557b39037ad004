//! Recursive traversal built on `walkdir`.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;
use crate::path::{Entry, PathOptions};

/// Options for [`Directory::tree`](crate::Directory::tree).
///
/// ```
/// use systempath::TreeOptions;
///
/// let options = TreeOptions::new().max_depth(Some(2)).omit_dirs(true);
/// assert_eq!(options.depth_limit(), Some(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeOptions {
    max_depth: Option<usize>,
    bottom_up: bool,
    omit_dirs: bool,
    follow_symlinks: Option<bool>,
}

impl TreeOptions {
    /// Unlimited depth, parents before children, directories included,
    /// symlink handling inherited from the directory.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_depth: None,
            bottom_up: false,
            omit_dirs: false,
            follow_symlinks: None,
        }
    }

    /// Levels below the root to descend; `Some(1)` lists direct children.
    #[must_use]
    pub const fn max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    /// Yield each directory after its contents.
    #[must_use]
    pub const fn bottom_up(mut self, bottom_up: bool) -> Self {
        self.bottom_up = bottom_up;
        self
    }

    /// Skip directories in the output (they are still descended into).
    #[must_use]
    pub const fn omit_dirs(mut self, omit: bool) -> Self {
        self.omit_dirs = omit;
        self
    }

    /// Override whether symlinked directories are descended into.
    #[must_use]
    pub const fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = Some(follow);
        self
    }

    /// The configured depth limit.
    #[must_use]
    pub const fn depth_limit(&self) -> Option<usize> {
        self.max_depth
    }

    /// Whether directories come after their contents.
    #[must_use]
    pub const fn is_bottom_up(&self) -> bool {
        self.bottom_up
    }

    /// Whether directories are left out of the output.
    #[must_use]
    pub const fn omits_dirs(&self) -> bool {
        self.omit_dirs
    }

    pub(crate) fn effective_follow(&self, options: PathOptions) -> bool {
        self.follow_symlinks.unwrap_or(options.follows_symlinks())
    }
}

/// Lazy recursive traversal yielding every descendant of a directory.
#[derive(Debug)]
pub struct Tree {
    inner: walkdir::IntoIter,
    root: PathBuf,
    options: PathOptions,
    omit_dirs: bool,
}

impl Tree {
    pub(crate) fn new(root: &Path, tree: TreeOptions, options: PathOptions) -> Self {
        let follow = tree.effective_follow(options);
        let mut walker = WalkDir::new(root)
            .min_depth(1)
            .follow_links(follow)
            .contents_first(tree.bottom_up);
        if let Some(depth) = tree.max_depth {
            walker = walker.max_depth(depth);
        }
        Self {
            inner: walker.into_iter(),
            root: root.to_path_buf(),
            options: options.follow_symlinks(follow),
            omit_dirs: tree.omit_dirs,
        }
    }

    /// Yield paths relative to the traversal root instead of entries.
    pub fn relative_paths(self) -> impl Iterator<Item = Result<PathBuf>> {
        let root = self.root.clone();
        self.map(move |entry| {
            entry.map(|e| {
                e.path()
                    .strip_prefix(&root)
                    .map_or_else(|_| e.path().to_path_buf(), Path::to_path_buf)
            })
        })
    }
}

impl Iterator for Tree {
    type Item = Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(e.into())),
            };
            let typed = Entry::from_listing(entry.path(), entry.file_type(), self.options);
            if self.omit_dirs && typed.is_dir() {
                continue;
            }
            return Some(Ok(typed));
        }
    }
}

/// One step of [`Directory::walk`](crate::Directory::walk).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    /// The directory being listed.
    pub dirpath: PathBuf,
    /// Names of its subdirectories.
    pub dirnames: Vec<OsString>,
    /// Names of everything else.
    pub filenames: Vec<OsString>,
}

/// Directory-by-directory traversal: each step lists one directory.
#[derive(Debug)]
pub struct Walk {
    inner: walkdir::IntoIter,
}

impl Walk {
    pub(crate) fn new(root: &Path, topdown: bool, follow: bool) -> Self {
        let walker = WalkDir::new(root)
            .follow_links(follow)
            .contents_first(!topdown);
        Self {
            inner: walker.into_iter(),
        }
    }
}

impl Iterator for Walk {
    type Item = Result<WalkEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(e.into())),
            };
            if !entry.file_type().is_dir() {
                continue;
            }
            return Some(split_listing(entry.path()));
        }
    }
}

fn split_listing(dir: &Path) -> Result<WalkEntry> {
    use crate::error::IoContext;

    let mut dirnames = Vec::new();
    let mut filenames = Vec::new();
    for child in fs::read_dir(dir).at(dir)? {
        let child = child.at(dir)?;
        let is_dir = match child.file_type() {
            Ok(t) if t.is_symlink() => fs::metadata(child.path()).is_ok_and(|m| m.is_dir()),
            Ok(t) => t.is_dir(),
            Err(_) => false,
        };
        if is_dir {
            dirnames.push(child.file_name());
        } else {
            filenames.push(child.file_name());
        }
    }
    Ok(WalkEntry {
        dirpath: dir.to_path_buf(),
        dirnames,
        filenames,
    })
}
