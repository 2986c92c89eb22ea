//! Common-prefix extraction over several paths.
//!
//! Every public entry point (two paths, a slice, an iterator) funnels into
//! [`split_common_prefix`], so all forms share the same edge-case behavior.

use std::path::{Path, PathBuf};

use crate::path::segments::{join_segments, SegmentRange};

/// The result of splitting a set of paths on their longest shared prefix.
///
/// Joining `prefix` with each entry of `remainders` reproduces the
/// corresponding input path (segment-wise).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommonPrefix {
    /// The longest run of leading segments shared by every input.
    pub prefix: PathBuf,
    /// Each input with the prefix removed, in input order.
    pub remainders: Vec<PathBuf>,
}

/// Walk every input in lockstep and split at the first disagreement.
///
/// A single mismatching path ends the prefix for all of them. An empty input
/// path (or no input at all) yields an empty prefix.
fn split_common_prefix<I, P>(paths: I) -> CommonPrefix
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let owned: Vec<P> = paths.into_iter().collect();
    let mut cursors: Vec<SegmentRange<'_>> =
        owned.iter().map(|p| SegmentRange::new(p.as_ref())).collect();

    let mut shared = Vec::new();
    if let Some((first, others)) = cursors.split_first() {
        // Degenerate input: nothing to compare against.
        if first.current().is_some() {
            let mut depth = 0;
            'walk: loop {
                let Some(candidate) = first.rest().get(depth) else {
                    break;
                };
                for other in others {
                    if other.rest().get(depth) != Some(candidate) {
                        break 'walk;
                    }
                }
                shared.push(candidate.clone());
                depth += 1;
            }
        }
    }

    for cursor in &mut cursors {
        for _ in 0..shared.len() {
            cursor.advance();
        }
    }

    CommonPrefix {
        prefix: join_segments(&shared),
        remainders: cursors.iter().map(SegmentRange::remainder).collect(),
    }
}

/// Longest shared leading segment run of `paths`.
///
/// Returns an empty path when the inputs share nothing, e.g. absolute paths
/// on different roots.
///
/// # Examples
///
/// ```
/// use relpath::path::prefix::common_prefix;
/// use std::path::PathBuf;
///
/// let prefix = common_prefix(["/a/b/c/d/e", "/a/b/c/j/k", "/a/b/c/p"]);
/// assert_eq!(prefix, PathBuf::from("/a/b/c"));
///
/// assert_eq!(common_prefix(["a/x", "b/x"]), PathBuf::new());
/// ```
#[must_use]
pub fn common_prefix<I, P>(paths: I) -> PathBuf
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    split_common_prefix(paths).prefix
}

/// Split `paths` into their common prefix and the remainder of each.
///
/// The inputs are not modified; new paths are returned.
///
/// # Examples
///
/// ```
/// use relpath::path::prefix::remove_common_prefix;
/// use std::path::PathBuf;
///
/// let split = remove_common_prefix(["/a/b/c/d/e/f", "/a/b/c/d/j/k", "/a/b/c/p/q/r"]);
/// assert_eq!(split.prefix, PathBuf::from("/a/b/c"));
/// assert_eq!(
///     split.remainders,
///     vec![
///         PathBuf::from("d/e/f"),
///         PathBuf::from("d/j/k"),
///         PathBuf::from("p/q/r"),
///     ]
/// );
/// ```
#[must_use]
pub fn remove_common_prefix<I, P>(paths: I) -> CommonPrefix
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    split_common_prefix(paths)
}

/// Two-path form of [`remove_common_prefix`].
///
/// Returns `(prefix, remainder_of_a, remainder_of_b)`.
///
/// # Examples
///
/// ```
/// use relpath::path::prefix::remove_common_prefix_pair;
/// use std::path::{Path, PathBuf};
///
/// let (prefix, a, b) =
///     remove_common_prefix_pair(Path::new("/a/b/c/d/e/f/g/h"), Path::new("/a/b/c/d/j/k"));
/// assert_eq!(prefix, PathBuf::from("/a/b/c/d"));
/// assert_eq!(a, PathBuf::from("e/f/g/h"));
/// assert_eq!(b, PathBuf::from("j/k"));
/// ```
#[must_use]
pub fn remove_common_prefix_pair(a: &Path, b: &Path) -> (PathBuf, PathBuf, PathBuf) {
    let CommonPrefix { prefix, remainders } = split_common_prefix([a, b]);
    let mut remainders = remainders.into_iter();
    let rest_a = remainders.next().unwrap_or_default();
    let rest_b = remainders.next().unwrap_or_default();
    (prefix, rest_a, rest_b)
}
