//! Lexical relative-path derivation.
//!
//! These functions compare segments only; they never consult the filesystem
//! and never fail. "No relative path can be expressed" (e.g. paths on
//! different drives or network roots) is signalled by an empty path.
//!
//! Inputs are expected to be in comparable form already: both absolute and
//! normalized, or both relative to the same base. Use
//! [`normalize`](crate::path::normalize::normalize) first if in doubt.

use std::path::{Path, PathBuf};

use crate::path::segments::{join_segments, segments, Segment};

/// Express `path` relative to `start` by segment comparison alone.
///
/// Returns an empty path when the first segments differ (different roots,
/// or one absolute and one relative) or when either input is empty. When the
/// common run consumes all of `start`, the result begins with `.`.
///
/// If the result is non-empty, normalizing `start.join(result)` reproduces
/// `normalize(path)`.
///
/// # Examples
///
/// ```
/// use relpath::path::lexical::lexically_relative;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(
///     lexically_relative(Path::new("/a/b/c/e/f"), Path::new("/a/b/c/j/k")),
///     PathBuf::from("../../e/f")
/// );
/// assert_eq!(
///     lexically_relative(Path::new("/a/b/c"), Path::new("/a/b")),
///     PathBuf::from("./c")
/// );
/// assert_eq!(
///     lexically_relative(Path::new("/a/b"), Path::new("/a/b")),
///     PathBuf::from(".")
/// );
/// assert_eq!(
///     lexically_relative(Path::new("x"), Path::new("/x")),
///     PathBuf::new()
/// );
/// ```
#[must_use]
pub fn lexically_relative(path: &Path, start: &Path) -> PathBuf {
    let path_segments = segments(path);
    let start_segments = segments(start);

    match (path_segments.first(), start_segments.first()) {
        (Some(p), Some(s)) if p == s => {}
        _ => return PathBuf::new(),
    }

    let common = path_segments
        .iter()
        .zip(&start_segments)
        .take_while(|(p, s)| p == s)
        .count();

    let mut relative: Vec<Segment<'_>> = Vec::new();
    if common == start_segments.len() {
        relative.push(Segment::CurDir);
    }
    relative.extend(start_segments[common..].iter().map(|_| Segment::ParentDir));
    relative.extend(path_segments[common..].iter().cloned());

    join_segments(&relative)
}

/// Like [`lexically_relative`], but falls back to `path` itself when no
/// relative path can be expressed.
///
/// # Examples
///
/// ```
/// use relpath::path::lexical::lexically_proximate;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(
///     lexically_proximate(Path::new("/a/d"), Path::new("/a/b/c")),
///     PathBuf::from("../../d")
/// );
/// assert_eq!(
///     lexically_proximate(Path::new("relative/x"), Path::new("/abs")),
///     PathBuf::from("relative/x")
/// );
/// ```
#[must_use]
pub fn lexically_proximate(path: &Path, start: &Path) -> PathBuf {
    let relative = lexically_relative(path, start);
    if relative.as_os_str().is_empty() {
        path.to_path_buf()
    } else {
        relative
    }
}
