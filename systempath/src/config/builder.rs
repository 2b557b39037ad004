//! Layered configuration assembly.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::{ConfigLoader, ConfigSource};
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds a [`Config`] from files, the environment and explicit overrides.
///
/// # Examples
///
/// ```
/// use systempath::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config { strict: Some(true), ..Default::default() })
///     .build()
///     .unwrap();
/// assert!(config.path_options().is_strict());
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    user_dir: Option<PathBuf>,
    explicit_files: Vec<PathBuf>,
    overrides: Vec<Config>,
    skip_files: bool,
    skip_env: bool,
}

impl ConfigBuilder {
    /// A builder that reads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start project discovery from `dir` instead of the current directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Read the user config from `dir` instead of `~/.systempath`.
    #[must_use]
    pub fn with_user_dir(mut self, dir: &Path) -> Self {
        self.user_dir = Some(dir.to_path_buf());
        self
    }

    /// Layer an explicit file above the discovered ones.
    #[must_use]
    pub fn with_file(mut self, path: &Path) -> Self {
        self.explicit_files.push(path.to_path_buf());
        self
    }

    /// Layer a programmatic config above everything else.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Ignore the user and project files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `SYSTEMPATH_*` variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Merge all sources and validate the result.
    ///
    /// # Errors
    ///
    /// Returns an error when a file cannot be read or parsed, an
    /// environment value is malformed, or validation fails.
    pub fn build(self) -> Result<Config> {
        let mut sources = Vec::new();

        if !self.skip_files {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            };
            sources.extend(ConfigLoader::load_all(&working_dir, self.user_dir.as_deref())?);
        }

        for path in &self.explicit_files {
            sources.push(ConfigSource {
                path: path.clone(),
                precedence: 4,
                config: ConfigLoader::load_file(path)?,
            });
        }

        let mut config = ConfigMerger::merge(sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        for overlay in &self.overrides {
            ConfigMerger::merge_into(&mut config, overlay);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::environment::ENV_STRICT;
    use crate::config::loader::PROJECT_CONFIG_FILE;
    use crate::config::schema::TreeConfig;
    use crate::error::Error;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_only() {
        let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_project_file_then_override() {
        let temp = TempDir::new().unwrap();
        let user = temp.path().join("user");
        fs::create_dir(&user).unwrap();
        fs::write(
            temp.path().join(PROJECT_CONFIG_FILE),
            "strict: true\nautoabs: true\n",
        )
        .unwrap();

        let config = ConfigBuilder::new()
            .with_working_dir(temp.path())
            .with_user_dir(&user)
            .skip_env()
            .with_config(Config {
                strict: Some(false),
                ..Default::default()
            })
            .build()
            .unwrap();
        assert_eq!(config.strict, Some(false));
        assert_eq!(config.autoabs, Some(true));
    }

    #[test]
    fn test_explicit_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("custom.yaml");
        fs::write(&file, "tree:\n  omit_dirs: true\n").unwrap();

        let config = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_file(&file)
            .build()
            .unwrap();
        assert!(config.tree_options().omits_dirs());
    }

    #[test]
    fn test_validation_runs() {
        let result = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(Config {
                tree: Some(TreeConfig {
                    max_depth: Some(0),
                    ..Default::default()
                }),
                ..Default::default()
            })
            .build();
        assert!(matches!(result, Err(Error::Validation { .. })));
    }

    #[test]
    #[serial]
    fn test_env_above_files_below_overrides() {
        let temp = TempDir::new().unwrap();
        let user = temp.path().join("user");
        fs::create_dir(&user).unwrap();
        fs::write(temp.path().join(PROJECT_CONFIG_FILE), "strict: false\n").unwrap();

        env::set_var(ENV_STRICT, "true");
        let from_env = ConfigBuilder::new()
            .with_working_dir(temp.path())
            .with_user_dir(&user)
            .build();
        let overridden = ConfigBuilder::new()
            .with_working_dir(temp.path())
            .with_user_dir(&user)
            .with_config(Config {
                strict: Some(false),
                ..Default::default()
            })
            .build();
        env::remove_var(ENV_STRICT);

        assert_eq!(from_env.unwrap().strict, Some(true));
        assert_eq!(overridden.unwrap().strict, Some(false));
    }
}
