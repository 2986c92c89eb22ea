//! Property-based tests across the path algorithms.
//!
//! Note: the individual modules already carry light property tests. This
//! module runs the cross-module properties with a high case count.

use super::lexical::{lexically_proximate, lexically_relative};
use super::normalize::normalize;
use super::prefix::{common_prefix, remove_common_prefix};
use proptest::prelude::*;
use std::path::{Path, PathBuf};

// Strategy for generating path-like strings
fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-d0-9_-]{1,4}"
}

fn absolute_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(path_component_strategy(), 0..8).prop_map(|parts| {
        let mut path = PathBuf::from("/");
        for part in parts {
            path.push(part);
        }
        path
    })
}

// Paths sprinkled with `.` and `..`, absolute or relative
fn messy_path_strategy() -> impl Strategy<Value = PathBuf> {
    (
        prop::bool::ANY,
        prop::collection::vec(
            prop_oneof![
                Just(".".to_string()),
                Just("..".to_string()),
                path_component_strategy(),
            ],
            0..10,
        ),
    )
        .prop_map(|(absolute, parts)| {
            let mut path = if absolute {
                PathBuf::from("/")
            } else {
                PathBuf::new()
            };
            for part in parts {
                path.push(part);
            }
            path
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Normalization is idempotent: normalize(normalize(p)) == normalize(p)
    #[test]
    fn normalization_idempotent(path in messy_path_strategy()) {
        let once = normalize(&path);
        prop_assert_eq!(normalize(&once), once);
    }

    // Normalized absolute paths never contain ".."
    #[test]
    fn normalized_absolute_paths_no_parent_refs(path in messy_path_strategy()) {
        if path.is_absolute() {
            let normalized = normalize(&path);
            prop_assert!(!normalized
                .components()
                .any(|c| c == std::path::Component::ParentDir));
        }
    }

    // normalize(start / lexically_relative(path, start)) == normalize(path)
    #[test]
    fn lexical_round_trip(path in messy_path_strategy(), start in absolute_path_strategy()) {
        let path = normalize(&Path::new("/").join(path));
        let start = normalize(&start);
        let rel = lexically_relative(&path, &start);
        prop_assert!(!rel.as_os_str().is_empty());
        prop_assert_eq!(normalize(&start.join(&rel)), path);
    }

    // Proximate equals relative whenever relative is non-empty
    #[test]
    fn proximate_agrees_with_relative(path in messy_path_strategy(), start in messy_path_strategy()) {
        let rel = lexically_relative(&path, &start);
        let prox = lexically_proximate(&path, &start);
        if rel.as_os_str().is_empty() {
            prop_assert_eq!(prox, path);
        } else {
            prop_assert_eq!(prox, rel);
        }
    }

    // Prefix of N paths is a prefix of each of them
    #[test]
    fn common_prefix_is_prefix_of_all(paths in prop::collection::vec(absolute_path_strategy(), 1..5)) {
        let prefix = common_prefix(&paths);
        for path in &paths {
            prop_assert!(path.starts_with(&prefix));
        }
    }

    // Remainders rebuild the inputs
    #[test]
    fn remove_common_prefix_rebuilds(paths in prop::collection::vec(absolute_path_strategy(), 1..5)) {
        let split = remove_common_prefix(&paths);
        prop_assert_eq!(split.remainders.len(), paths.len());
        for (rest, path) in split.remainders.iter().zip(&paths) {
            prop_assert_eq!(&split.prefix.join(rest), path);
        }
    }

    // Prefix of two unrelated relative paths is empty
    #[test]
    fn disjoint_first_segments_share_nothing(a in path_component_strategy(), b in path_component_strategy()) {
        prop_assume!(a != b);
        let pa = Path::new(&a).join("x");
        let pb = Path::new(&b).join("x");
        prop_assert_eq!(common_prefix([&pa, &pb]), PathBuf::new());
    }
}
