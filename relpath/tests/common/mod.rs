//! Common test utilities for integration tests.
//!
//! This module provides the directory-tree fixtures and the scenario matrix
//! used by the relative-path integration tests. Each fixture is a handful of
//! directory chains (`a_level_1/../a_level_5`) under a base directory, some
//! real, some imaginary, some reached through symlinks. The pairs to check
//! are generated from the chains rather than listed by hand.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use relpath::path::prefix::remove_common_prefix_pair;
use relpath::path::relative::{try_proximate, try_relative};
use relpath::{lexically_relative, normalize};

/// Number of levels in every chain.
pub const LEVELS: usize = 5;

/// Creates a temporary directory for testing.
///
/// The directory will be automatically cleaned up when the returned
/// `TempDir` is dropped.
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("failed to create temporary directory")
}

/// A fixture tree: a base directory and named chains of nested paths.
#[derive(Debug, Clone)]
pub struct Tree {
    /// The directory every chain hangs off.
    pub base: PathBuf,
    /// Chains by name; `chains["a"][0]` is level 1 of chain `a`.
    pub chains: BTreeMap<&'static str, Vec<PathBuf>>,
}

impl Tree {
    /// Start an empty tree rooted at `base`.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            chains: BTreeMap::new(),
        }
    }

    /// Add a chain whose levels are `segments`, joined one after another
    /// onto the base. Nothing is created on disk.
    pub fn chain(mut self, name: &'static str, segments: &[&str]) -> Self {
        let mut current = self.base.clone();
        let levels = segments
            .iter()
            .map(|segment| {
                current = current.join(segment);
                current.clone()
            })
            .collect();
        self.chains.insert(name, levels);
        self
    }

    /// Level `level` (1-based) of chain `name`.
    pub fn level(&self, name: &str, level: usize) -> &Path {
        &self.chains[name][level - 1]
    }

    /// Create `level` of chain `name` and all its parents on disk.
    pub fn create(&self, name: &str, level: usize) -> &Self {
        fs::create_dir_all(self.level(name, level)).expect("failed to create fixture directory");
        self
    }

    /// Make level `level` of chain `name` a symlink to `target`.
    #[cfg(unix)]
    pub fn link(&self, name: &str, level: usize, target: &Path) -> &Self {
        std::os::unix::fs::symlink(target, self.level(name, level))
            .expect("failed to create fixture symlink");
        self
    }

    /// The (path, start) pairs to check for this tree.
    ///
    /// For every chain: each level against the base, both ways. For every
    /// ordered pair of distinct chains: level 1 against each level, each
    /// level against level 1, equal levels, and two skewed pairs.
    pub fn pairs(&self) -> Vec<(PathBuf, PathBuf)> {
        let mut pairs = vec![(self.base.clone(), self.base.clone())];

        for levels in self.chains.values() {
            for level in levels {
                pairs.push((level.clone(), self.base.clone()));
                pairs.push((self.base.clone(), level.clone()));
            }
        }

        for (x_name, x) in &self.chains {
            for (y_name, y) in &self.chains {
                if x_name == y_name {
                    continue;
                }
                for i in 0..LEVELS.min(x.len()).min(y.len()) {
                    pairs.push((x[0].clone(), y[i].clone()));
                    pairs.push((x[i].clone(), y[0].clone()));
                    pairs.push((x[i].clone(), y[i].clone()));
                }
                if x.len() >= 4 && y.len() >= 4 {
                    pairs.push((x[1].clone(), y[3].clone()));
                    pairs.push((x[3].clone(), y[1].clone()));
                }
            }
        }

        pairs
    }
}

/// The path `relative` is expected to have been computed against: the
/// canonical form if `path` exists, otherwise `path` rebuilt on top of the
/// (canonical, if it exists) common ancestor it shares with `other`.
pub fn real_endpoint(path: &Path, other: &Path) -> PathBuf {
    if let Ok(canonical) = fs::canonicalize(path) {
        return canonical;
    }
    let (common, rest, _) = remove_common_prefix_pair(&normalize(path), &normalize(other));
    let common = fs::canonicalize(&common).unwrap_or(common);
    normalize(&common.join(rest))
}

/// Check `relative(path, start)` and `proximate(path, start)`.
///
/// When both endpoints exist, `start/relative` must reach the same file as
/// `path`. Otherwise `start/relative` must normalize to the real form of
/// `path`. An empty result is only acceptable when the paths cannot be
/// related, in which case `proximate` returns `path` unchanged.
pub fn check_relative(path: &Path, start: &Path) {
    let relative = try_relative(path, start).unwrap_or_else(|e| {
        panic!(
            "relative({}, {}) failed: {e}",
            path.display(),
            start.display()
        )
    });
    let proximate = try_proximate(path, start).expect("proximate failed");

    if relative.as_os_str().is_empty() {
        assert_eq!(proximate, path, "proximate must fall back to path");
    } else {
        assert_eq!(proximate, relative, "proximate must equal relative");
    }

    if path.exists() && start.exists() {
        assert!(
            !relative.as_os_str().is_empty(),
            "existing paths {} and {} must be related",
            path.display(),
            start.display()
        );
        assert_eq!(
            fs::canonicalize(start.join(&relative)).expect("start/relative must exist"),
            fs::canonicalize(path).expect("path must exist"),
            "start {} + {} does not reach {}",
            start.display(),
            relative.display(),
            path.display()
        );
    } else {
        let real_path = real_endpoint(path, start);
        let real_start = real_endpoint(start, path);
        let reaches = normalize(&real_start.join(&relative)) == normalize(&real_path);
        assert!(
            relative.as_os_str().is_empty() != reaches,
            "relative({}, {}) = {:?}; real start {} real path {}",
            path.display(),
            start.display(),
            relative,
            real_start.display(),
            real_path.display()
        );
        // Two imaginary endpoints share one rebuilt ancestor, so the answer
        // is the lexical one.
        if !path.exists() && !start.exists() {
            let lexical = lexically_relative(&normalize(path), &normalize(start));
            assert_eq!(relative, lexical);
        }
    }
}
