//! Method-call syntax for the lexical operations.
//!
//! [`RelativePathExt`] is implemented for [`Path`], so anything that derefs to
//! a `Path` (`PathBuf`, `&PathBuf`, `Box<Path>`) gets the methods too.

use std::path::{Path, PathBuf};

use crate::path::lexical::{lexically_proximate, lexically_relative};
use crate::path::normalize::normalize;
use crate::path::prefix::common_prefix;

/// Extension trait adding lexical relative-path operations to [`Path`].
///
/// None of these methods touch the filesystem. For symlink-aware results use
/// [`Relativizer`](crate::path::relative::Relativizer).
///
/// # Examples
///
/// ```
/// use relpath::RelativePathExt;
/// use std::path::{Path, PathBuf};
///
/// let path = Path::new("/srv/app/./static/../bin/run");
/// assert_eq!(path.lexically_normal(), PathBuf::from("/srv/app/bin/run"));
/// assert_eq!(
///     path.lexically_normal().relative_to("/srv/data"),
///     PathBuf::from("../app/bin/run")
/// );
/// ```
pub trait RelativePathExt {
    /// Returns the path with `.` and resolvable `..` segments collapsed.
    ///
    /// See [`normalize`].
    fn lexically_normal(&self) -> PathBuf;

    /// Returns `self` expressed relative to `start`, or an empty path if no
    /// relative path can be expressed.
    ///
    /// See [`lexically_relative`].
    fn relative_to<P: AsRef<Path>>(&self, start: P) -> PathBuf;

    /// Returns `self` relative to `start`, or `self` unchanged if no relative
    /// path can be expressed.
    ///
    /// See [`lexically_proximate`].
    fn proximate_to<P: AsRef<Path>>(&self, start: P) -> PathBuf;

    /// Returns the longest leading segment run shared with `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use relpath::RelativePathExt;
    /// use std::path::{Path, PathBuf};
    ///
    /// assert_eq!(
    ///     Path::new("/a/b/c").common_prefix_with("/a/b/d"),
    ///     PathBuf::from("/a/b")
    /// );
    /// ```
    fn common_prefix_with<P: AsRef<Path>>(&self, other: P) -> PathBuf;
}

impl RelativePathExt for Path {
    fn lexically_normal(&self) -> PathBuf {
        normalize(self)
    }

    fn relative_to<P: AsRef<Path>>(&self, start: P) -> PathBuf {
        lexically_relative(self, start.as_ref())
    }

    fn proximate_to<P: AsRef<Path>>(&self, start: P) -> PathBuf {
        lexically_proximate(self, start.as_ref())
    }

    fn common_prefix_with<P: AsRef<Path>>(&self, other: P) -> PathBuf {
        common_prefix([self, other.as_ref()])
    }
}
