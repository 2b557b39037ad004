//! Path objects for files, directories and generic paths.
//!
//! # Key Concepts
//!
//! ## Path types
//!
//! - [`PathBase`] carries the path plus its [`PathOptions`] and every
//!   operation that does not care what the path points at.
//! - [`File`] and [`Directory`] add content and listing operations.
//! - [`SystemPath`] is what joining produces: it asks the filesystem what it
//!   is each time an operation needs a concrete type.
//!
//! ## Joining
//!
//! `/` and `+` append lexically and cannot fail. [`PathBase::join`]
//! validates the segment and honours strict mode.
//!
//! ```
//! use systempath::{Directory, PathOptions};
//! use std::path::Path;
//!
//! let root = Directory::new("/var");
//! assert_eq!((&root / "log" / "syslog").as_path(), Path::new("/var/log/syslog"));
//! assert!(root.join("").is_err());
//! ```
//!
//! ## Strict mode
//!
//! With [`PathOptions::strict`] a path must exist when it is constructed or
//! joined; children inherit the setting.
//!
//! ```no_run
//! use systempath::{Directory, PathOptions};
//!
//! let tmp = Directory::with_options("/tmp", PathOptions::new().strict(true))?;
//! assert!(tmp.join("no-such-child").is_err());
//! # Ok::<(), systempath::Error>(())
//! ```

#[macro_use]
mod ops;

pub(crate) mod base;
mod content;
mod directory;
mod file;
mod kind;
pub mod normalize;
mod options;
mod segment;
mod system;
mod tree;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use base::PathBase;
pub use content::{Content, Lines, READ_BUFSIZE};
pub use directory::{Children, CopyTreeOptions, Directory};
pub use file::{File, OpenMode};
pub use kind::{Entry, PathKind};
pub use options::PathOptions;
pub use system::SystemPath;
pub use tree::{Tree, TreeOptions, Walk, WalkEntry};
