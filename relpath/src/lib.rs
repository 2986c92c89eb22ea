#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # relpath
//!
//! A library for computing relative paths between filesystem paths.
//!
//! Two families of operations are provided:
//!
//! - **Lexical** operations work on path text alone: common-prefix
//!   extraction, normalization of `.` and `..`, and lexical relative /
//!   proximate paths. They never touch the filesystem and never fail.
//! - **Filesystem-aware** operations ([`Relativizer`]) canonicalize the
//!   endpoints that exist, so results are correct through symlinks, and
//!   fall back to lexical reasoning for endpoints that do not exist yet.
//!
//! ## Core Types
//!
//! - [`RelativePathExt`]: lexical operations as methods on `Path`
//! - [`Relativizer`] and [`CanonicalizeFailurePolicy`]: filesystem-aware
//!   relative paths
//! - [`Error`], [`FilesystemError`] and [`Result`]: Error handling types
//! - [`Config`] and [`ConfigBuilder`]: Layered configuration
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use relpath::RelativePathExt;
//! use std::path::{Path, PathBuf};
//!
//! let target = Path::new("/a/d");
//! assert_eq!(target.relative_to("/a/b/c"), PathBuf::from("../../d"));
//!
//! // Different network roots have no relative path.
//! # #[cfg(unix)]
//! assert_eq!(Path::new("//c_drive/y").relative_to("//d_drive/x"), PathBuf::new());
//! # #[cfg(unix)]
//! assert_eq!(
//!     Path::new("//c_drive/y").proximate_to("//d_drive/x"),
//!     PathBuf::from("//c_drive/y")
//! );
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, FilesystemError, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{
    common_prefix, lexically_proximate, lexically_relative, normalize, remove_common_prefix,
    CanonicalizeFailurePolicy, RelativePathExt, Relativizer,
};
