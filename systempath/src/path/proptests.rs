//! Property-based tests for joining and construction.

use super::{Directory, PathBase, PathOptions};
use proptest::prelude::*;
use std::path::PathBuf;

fn segment_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            4 => "[a-zA-Z0-9_-]{1,12}",
            1 => Just("..".to_string()),
            1 => Just(".".to_string()),
        ],
        1..4,
    )
    .prop_map(|parts| parts.join("/"))
}

fn base_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec("[a-z0-9]{1,8}", 0..5).prop_map(|parts| {
        let mut path = PathBuf::from("/");
        for part in parts {
            path.push(part);
        }
        path
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // join(join(P, s1), s2) == join(P, s1/s2)
    #[test]
    fn join_is_associative(base in base_strategy(), s1 in segment_strategy(), s2 in segment_strategy()) {
        let root = PathBase::new(&base);
        let stepwise = root.join(&s1).unwrap().join(&s2).unwrap();
        let combined = root.join(format!("{s1}/{s2}")).unwrap();
        prop_assert_eq!(stepwise.as_path(), combined.as_path());
    }

    // The operators agree with the checked join on valid segments
    #[test]
    fn operators_match_join(base in base_strategy(), s in segment_strategy()) {
        let dir = Directory::new(&base);
        let checked = dir.join(&s).unwrap();
        prop_assert_eq!((&dir / &s).as_path(), checked.as_path());
        prop_assert_eq!((&dir + &s).as_path(), checked.as_path());
    }

    // Joined paths always stay under their base lexically
    #[test]
    fn join_keeps_base_prefix(base in base_strategy(), s in segment_strategy()) {
        let joined = PathBase::new(&base).join(&s).unwrap();
        prop_assert!(joined.as_path().starts_with(&base));
    }

    // Strict construction of a missing path always fails, non-strict never does
    #[test]
    fn strict_rejects_missing(name in "[a-z]{8,16}") {
        let temp = tempfile::TempDir::new().unwrap();
        let missing = temp.path().join(&name);
        prop_assert!(PathBase::with_options(&missing, PathOptions::new().strict(true)).is_err());
        prop_assert!(PathBase::with_options(&missing, PathOptions::new()).is_ok());
    }
}
