#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # systempath
//!
//! Object-oriented files, directories and generic paths over `std::fs`.
//!
//! ## Core Types
//!
//! - [`PathBase`]: a path plus its [`PathOptions`], with every operation that
//!   does not depend on the target's type
//! - [`File`] and [`Directory`]: typed wrappers adding content and listing
//!   operations
//! - [`SystemPath`]: a generic path resolved to a file or directory on use
//! - [`Entry`] and [`PathKind`]: the result of asking what a path is
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```no_run
//! use systempath::{Directory, PathOptions};
//!
//! let tmp = Directory::with_options("/tmp", PathOptions::new().strict(true))?;
//! let greeting = (&tmp / "a.txt").as_file()?;
//! greeting.write(b"hello")?;
//! assert_eq!(greeting.read()?, b"hello");
//!
//! greeting.delete(false)?;
//! assert!(!greeting.exists());
//! # Ok::<(), systempath::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, install_logger, LogLevel, Logger};
pub use path::{
    Children, Content, CopyTreeOptions, Directory, Entry, File, OpenMode, PathBase, PathKind,
    PathOptions, SystemPath, Tree, TreeOptions, Walk, WalkEntry,
};
