//! Relative-path computation, lexical and filesystem-aware.
//!
//! This module provides the path algorithms of the relpath library.
//!
//! # Key Concepts
//!
//! ## Segments
//!
//! Every algorithm works on a path's segment sequence ([`segments`]): root
//! segments first, then `.`, `..` and named components. Segments compare by
//! exact text.
//!
//! ## Lexical operations
//!
//! [`common_prefix`], [`normalize`], [`lexically_relative`] and
//! [`lexically_proximate`] look at segments only. They never touch the
//! filesystem and never fail; when no relative path exists (different roots)
//! they return an empty path.
//!
//! ## Filesystem-aware operations
//!
//! [`Relativizer`] combines the lexical operations with existence probes and
//! canonicalization, so the result is correct through symlinks, while still
//! handling endpoints that do not exist yet ("imaginary" paths).
//!
//! # Examples
//!
//! ```
//! use relpath::path::{lexically_relative, normalize};
//! use std::path::{Path, PathBuf};
//!
//! let path = normalize(Path::new("/a/b/../d"));
//! assert_eq!(lexically_relative(&path, Path::new("/a/b/c")), PathBuf::from("../../d"));
//! ```
//!
//! ```no_run
//! use relpath::path::Relativizer;
//! use std::path::Path;
//!
//! let relativizer = Relativizer::new();
//! let rel = relativizer.try_relative_to_cwd(Path::new("/usr/lib")).unwrap();
//! println!("{}", rel.display());
//! ```

pub mod ext;
pub mod fs;
pub mod lexical;
pub mod normalize;
pub mod prefix;
pub mod relative;
pub mod segments;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use ext::RelativePathExt;
pub use fs::{Existence, FileSystem, StdFileSystem};
pub use lexical::{lexically_proximate, lexically_relative};
pub use normalize::{expand_tilde, normalize};
pub use prefix::{common_prefix, remove_common_prefix, remove_common_prefix_pair, CommonPrefix};
pub use relative::{CanonicalizeFailurePolicy, Relativizer};
pub use segments::{join_segments, segments, Segment, SegmentRange};
