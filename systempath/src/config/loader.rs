//! Configuration file discovery and loading.
//!
//! This module handles discovering and loading systempath configuration
//! files from the user's home directory and the project tree.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Directory under the home directory holding the user config.
pub const USER_CONFIG_DIR: &str = ".systempath";
/// File name of the user config inside [`USER_CONFIG_DIR`].
pub const USER_CONFIG_FILE: &str = "config.yaml";
/// Project config file name.
pub const PROJECT_CONFIG_FILE: &str = "systempath.yaml";
/// Private project config file name, not meant to be committed.
pub const LOCAL_CONFIG_FILE: &str = "systempath.local.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
///
/// # Examples
///
/// ```
/// use systempath::config::ConfigSource;
/// use std::path::PathBuf;
///
/// let user_config = ConfigSource {
///     path: PathBuf::from("~/.systempath/config.yaml"),
///     precedence: 1,
///     config: Default::default(),
/// };
/// assert_eq!(user_config.precedence, 1);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from various sources.
///
/// # Examples
///
/// ```no_run
/// use systempath::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("."), None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files.
    ///
    /// Searches for:
    /// 1. User config at `~/.systempath/config.yaml` (precedence 1)
    /// 2. `systempath.yaml` walking up from `working_dir` (precedence 2)
    /// 3. `systempath.local.yaml` next to it (precedence 3)
    ///
    /// `user_dir` replaces `~/.systempath` when given.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration file exists but cannot be read
    /// or parsed.
    pub fn load_all(working_dir: &Path, user_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user_config) = Self::load_user_config(user_dir)? {
            sources.push(user_config);
        }

        sources.extend(Self::discover_project_configs(working_dir)?);
        sources.sort_by_key(|s| s.precedence);

        Ok(sources)
    }

    fn load_user_config(user_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match user_dir {
            Some(dir) => dir.join(USER_CONFIG_FILE),
            None => match Self::user_config_path() {
                Some(path) => path,
                None => {
                    log::debug!("no home directory; skipping user config");
                    return Ok(None);
                }
            },
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1,
            config,
        }))
    }

    /// Discover project configurations by walking up directories.
    ///
    /// Stops at the first directory containing either project file.
    ///
    /// # Errors
    ///
    /// Returns an error if any discovered file cannot be read or parsed.
    pub fn discover_project_configs(start_dir: &Path) -> Result<Vec<ConfigSource>> {
        let mut configs = Vec::new();
        let mut current = start_dir.to_path_buf();

        loop {
            for (name, precedence) in [(PROJECT_CONFIG_FILE, 2), (LOCAL_CONFIG_FILE, 3)] {
                let candidate = current.join(name);
                if candidate.is_file() {
                    let config = Self::load_file(&candidate)?;
                    configs.push(ConfigSource {
                        path: candidate,
                        precedence,
                        config,
                    });
                }
            }

            if !configs.is_empty() || !current.pop() {
                break;
            }
        }

        Ok(configs)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// An empty file is an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;
        log::debug!("loading configuration from {}", path.display());

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Default location of the user config file.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE))
    }
}
