//! Property-based tests for configuration merging.

use super::merger::ConfigMerger;
use super::schema::{Config, TreeConfig};
use super::validator::ConfigValidator;
use proptest::prelude::*;

fn tree_strategy() -> impl Strategy<Value = TreeConfig> {
    (
        prop::option::of(0usize..32),
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(max_depth, bottom_up, omit_dirs)| TreeConfig {
            max_depth,
            bottom_up,
            omit_dirs,
        })
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
        prop::option::of(tree_strategy()),
    )
        .prop_map(|(strict, autoabs, follow_symlinks, tree)| Config {
            strict,
            autoabs,
            follow_symlinks,
            tree,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Set fields of the higher layer win, unset ones keep the lower value
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        prop_assert_eq!(result.strict, high.strict.or(low.strict));
        prop_assert_eq!(result.autoabs, high.autoabs.or(low.autoabs));
        prop_assert_eq!(result.follow_symlinks, high.follow_symlinks.or(low.follow_symlinks));
    }

    // Empty config is identity element for merge
    #[test]
    fn config_merge_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    // Merging a config into itself changes nothing
    #[test]
    fn config_merge_idempotent(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &config);
        prop_assert_eq!(merged, config);
    }

    // Validation fails exactly when a zero depth is configured
    #[test]
    fn validation_rejects_only_zero_depth(config in config_strategy()) {
        let zero = config.tree.as_ref().and_then(|t| t.max_depth) == Some(0);
        prop_assert_eq!(ConfigValidator::validate(&config).is_err(), zero);
    }

    // YAML serialization preserves the config
    #[test]
    fn config_yaml_roundtrip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }
}
