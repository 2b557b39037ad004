//! Configuration system for systempath front ends.
//!
//! The library never reads configuration on its own: path objects take
//! explicit [`PathOptions`](crate::PathOptions). This module lets a front
//! end collect those options from:
//! - YAML configuration files (user config and project files)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//!
//! # Configuration Precedence
//!
//! Highest to lowest:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`SYSTEMPATH_*`)
//! 3. Explicit files (via `ConfigBuilder::with_file`)
//! 4. Private project config (`systempath.local.yaml`)
//! 5. Project config (`systempath.yaml`)
//! 6. User config (`~/.systempath/config.yaml`)
//! 7. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use systempath::config::ConfigBuilder;
//! use systempath::Directory;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! let root = Directory::with_options("/srv", config.path_options()).unwrap();
//! for entry in root.tree(config.tree_options()) {
//!     println!("{}", entry.unwrap());
//! }
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, TreeConfig};
pub use validator::ConfigValidator;
