//! Command to show the effective configuration.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;

/// Show the configuration after merging files, environment and flags.
#[derive(Args)]
pub struct ShowConfigCommand {
    /// Print the resolved options instead of the raw merged file values
    #[arg(long)]
    pub resolved: bool,
}

impl ShowConfigCommand {
    /// Execute the show-config command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;

        if self.resolved {
            let options = config.path_options();
            let tree = config.tree_options();
            println!("strict: {}", options.is_strict());
            println!("autoabs: {}", options.is_autoabs());
            println!("follow_symlinks: {}", options.follows_symlinks());
            println!(
                "tree.max_depth: {}",
                tree.depth_limit()
                    .map_or_else(|| "unlimited".to_string(), |d| d.to_string())
            );
            println!("tree.bottom_up: {}", tree.is_bottom_up());
            println!("tree.omit_dirs: {}", tree.omits_dirs());
            return Ok(());
        }

        let yaml = serde_yaml::to_string(&config).map_err(|e| CliError::Config(e.to_string()))?;
        print!("{yaml}");
        Ok(())
    }
}
