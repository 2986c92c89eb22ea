//! Lexical path normalization.
//!
//! This module provides:
//! - [`normalize`]: collapse `.` and resolvable `..` segments without
//!   touching the filesystem
//! - [`expand_tilde`]: expand `~` to the home directory for user input
//!
//! Normalization is purely textual. In the presence of symlinks `a/link/..`
//! is not necessarily `a`; the filesystem-aware relativizer canonicalizes
//! existing paths instead of trusting this result.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::segments::{join_segments, segments, Segment};

/// Expand tilde (~) to the home directory.
///
/// This function handles `~` and `~/path` but does not support `~user` syntax.
///
/// # Errors
///
/// Returns an error if:
/// - The path contains invalid UTF-8
/// - The home directory cannot be determined
/// - The path uses `~user` syntax (not supported)
///
/// # Examples
///
/// ```
/// use relpath::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// // Expands ~/path to home/path
/// let expanded = expand_tilde(Path::new("~/project")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with("project"));
///
/// // Leaves other paths unchanged
/// let expanded = expand_tilde(Path::new("../relative")).unwrap();
/// assert_eq!(expanded, Path::new("../relative"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let Some(path_str) = path.to_str() else {
        // Non-UTF-8 paths cannot start with a literal `~` we could expand.
        return Ok(path.to_path_buf());
    };

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Cannot determine home directory".to_string(),
    })?;

    if path_str == "~" {
        Ok(home)
    } else if path_str.starts_with("~/") || path_str.starts_with("~\\") {
        Ok(home.join(&path_str[2..]))
    } else {
        Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Collapse `.` and resolvable `..` segments.
///
/// `.` segments are dropped. A `..` cancels the preceding named segment when
/// there is one; otherwise it is kept literally, so leading `..` runs of a
/// relative path survive. A `..` directly under the root is absorbed, since
/// the parent of the root is the root.
///
/// The result never contains a reducible `name/..` pair, and normalizing twice
/// gives the same result as normalizing once.
///
/// # Examples
///
/// ```
/// use relpath::path::normalize::normalize;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(normalize(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
/// assert_eq!(normalize(Path::new("../../a")), PathBuf::from("../../a"));
/// assert_eq!(normalize(Path::new("a/../../b")), PathBuf::from("../b"));
/// assert_eq!(normalize(Path::new("a/..")), PathBuf::new());
/// ```
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut out: Vec<Segment<'_>> = Vec::new();

    for segment in segments(path) {
        match segment {
            Segment::CurDir => {}
            Segment::ParentDir => match out.last() {
                Some(Segment::Name(_)) => {
                    out.pop();
                }
                Some(Segment::RootName(_) | Segment::RootDir) => {}
                Some(Segment::ParentDir | Segment::CurDir) | None => {
                    out.push(Segment::ParentDir);
                }
            },
            other => out.push(other),
        }
    }

    join_segments(&out)
}
