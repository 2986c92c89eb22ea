//! Segment-sequence view over `std::path::Path`.
//!
//! The relative-path algorithms compare paths one segment at a time. This
//! module exposes a path as an ordered list of [`Segment`]s (root segments
//! first, then named components) and rebuilds `PathBuf`s from such lists.
//!
//! Beyond what `Path::components()` reports, Unix paths of the form
//! `//host/...` are given a network root name (`//host`), so that two paths
//! on different network roots do not share their leading segment.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR_STR};

/// One atomic component of a path.
///
/// Segments compare by exact textual equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment<'a> {
    /// A root name: a Windows prefix (`C:`, `\\server\share`) or a Unix
    /// network root (`//host`).
    RootName(Cow<'a, OsStr>),
    /// The root directory marker.
    RootDir,
    /// The current directory, `.`.
    CurDir,
    /// The parent directory, `..`.
    ParentDir,
    /// A named component.
    Name(&'a OsStr),
}

impl<'a> Segment<'a> {
    /// The textual form of the segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use relpath::path::segments::Segment;
    /// use std::ffi::OsStr;
    ///
    /// assert_eq!(Segment::ParentDir.as_os_str(), OsStr::new(".."));
    /// assert_eq!(Segment::Name(OsStr::new("src")).as_os_str(), OsStr::new("src"));
    /// ```
    #[must_use]
    pub fn as_os_str(&self) -> &OsStr {
        match self {
            Self::RootName(name) => name.as_ref(),
            Self::RootDir => OsStr::new(MAIN_SEPARATOR_STR),
            Self::CurDir => OsStr::new("."),
            Self::ParentDir => OsStr::new(".."),
            Self::Name(name) => *name,
        }
    }

    /// Whether this segment is part of the path's root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        matches!(self, Self::RootName(_) | Self::RootDir)
    }
}

impl<'a> From<Component<'a>> for Segment<'a> {
    fn from(component: Component<'a>) -> Self {
        match component {
            Component::Prefix(prefix) => Self::RootName(Cow::Borrowed(prefix.as_os_str())),
            Component::RootDir => Self::RootDir,
            Component::CurDir => Self::CurDir,
            Component::ParentDir => Self::ParentDir,
            Component::Normal(name) => Self::Name(name),
        }
    }
}

/// Split a path into its segments, in traversal order.
///
/// An empty path has no segments; `"."` has exactly one.
///
/// # Examples
///
/// ```
/// use relpath::path::segments::{segments, Segment};
/// use std::ffi::OsStr;
/// use std::path::Path;
///
/// assert!(segments(Path::new("")).is_empty());
/// assert_eq!(segments(Path::new(".")), vec![Segment::CurDir]);
/// assert_eq!(
///     segments(Path::new("../src")),
///     vec![Segment::ParentDir, Segment::Name(OsStr::new("src"))]
/// );
/// ```
#[must_use]
pub fn segments(path: &Path) -> Vec<Segment<'_>> {
    let mut components = path.components();
    let mut out = Vec::new();

    if let Some((root_name, has_root_dir)) = network_root(path) {
        // Skip the RootDir and host components already folded into the name.
        components.next();
        components.next();
        out.push(Segment::RootName(Cow::Owned(root_name)));
        if has_root_dir {
            out.push(Segment::RootDir);
        }
    }

    out.extend(components.map(Segment::from));
    out
}

/// Detect a Unix network root (`//host`) at the start of `path`.
///
/// Returns the root name and whether a root directory separator follows it.
#[cfg(unix)]
fn network_root(path: &Path) -> Option<(OsString, bool)> {
    let bytes = path.as_os_str().as_encoded_bytes();
    if bytes.len() < 3 || bytes[0] != b'/' || bytes[1] != b'/' || bytes[2] == b'/' {
        return None;
    }

    let host = match path.components().nth(1) {
        Some(Component::Normal(host)) => host,
        _ => return None,
    };

    let mut root_name = OsString::from("//");
    root_name.push(host);
    let has_root_dir = bytes.len() > root_name.len();
    Some((root_name, has_root_dir))
}

/// Windows reports network roots as `Component::Prefix` already.
#[cfg(not(unix))]
fn network_root(_path: &Path) -> Option<(OsString, bool)> {
    None
}

/// Rebuild a path from a sequence of segments.
///
/// Root segments are concatenated into a single root (`//host` + `/`) before
/// named segments are pushed, so a root directory following a root name does
/// not reset the path.
///
/// # Examples
///
/// ```
/// use relpath::path::segments::{join_segments, segments};
/// use std::path::{Path, PathBuf};
///
/// let path = Path::new("/a/b/c");
/// assert_eq!(join_segments(&segments(path)), PathBuf::from("/a/b/c"));
/// ```
#[must_use]
pub fn join_segments<'s, 'a: 's, I>(segments: I) -> PathBuf
where
    I: IntoIterator<Item = &'s Segment<'a>>,
{
    let mut root = OsString::new();
    let mut path = PathBuf::new();

    for segment in segments {
        if segment.is_root() {
            root.push(segment.as_os_str());
            continue;
        }
        if !root.is_empty() {
            path = PathBuf::from(std::mem::take(&mut root));
        }
        path.push(segment.as_os_str());
    }

    if !root.is_empty() {
        path = PathBuf::from(root);
    }
    path
}

/// A cursor over a path's segment sequence.
///
/// The common-prefix engine advances one `SegmentRange` per input path in
/// lockstep, then rebuilds each remainder from wherever its cursor stopped.
#[derive(Debug, Clone)]
pub struct SegmentRange<'a> {
    segments: Vec<Segment<'a>>,
    begin: usize,
}

impl<'a> SegmentRange<'a> {
    /// Create a cursor positioned at the first segment of `path`.
    #[must_use]
    pub fn new(path: &'a Path) -> Self {
        Self {
            segments: segments(path),
            begin: 0,
        }
    }

    /// The segment under the cursor, or `None` when exhausted.
    #[must_use]
    pub fn current(&self) -> Option<&Segment<'a>> {
        self.segments.get(self.begin)
    }

    /// Move the cursor one segment forward.
    pub fn advance(&mut self) {
        if self.begin < self.segments.len() {
            self.begin += 1;
        }
    }

    /// Whether every segment has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.begin >= self.segments.len()
    }

    /// The segments not yet consumed.
    #[must_use]
    pub fn rest(&self) -> &[Segment<'a>] {
        &self.segments[self.begin..]
    }

    /// Rebuild the unconsumed segments into a new path.
    #[must_use]
    pub fn remainder(&self) -> PathBuf {
        join_segments(self.rest())
    }
}
