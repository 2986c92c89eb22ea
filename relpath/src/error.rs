//! Error types for the relpath library.
//!
//! This module provides the error hierarchy for the filesystem-aware
//! operations, using `thiserror` for ergonomic error handling. The purely
//! lexical operations never fail: a missing relationship between two paths is
//! reported as an empty path, not as an error.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for operations that may fail with a relpath error.
///
/// # Examples
///
/// ```
/// use relpath::{Error, Result};
/// use std::path::PathBuf;
///
/// fn example_operation() -> Result<PathBuf> {
///     Ok(PathBuf::from("../b"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `ENOTDIR` on the Unix platforms we support (Linux, macOS, the BSDs).
#[cfg(unix)]
const NOT_A_DIRECTORY_CODE: i32 = 20;

/// `ERROR_DIRECTORY` ("The directory name is invalid").
#[cfg(windows)]
const NOT_A_DIRECTORY_CODE: i32 = 267;

#[cfg(not(any(unix, windows)))]
const NOT_A_DIRECTORY_CODE: i32 = -1;

/// The main error type for the relpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// The starting point of a relative path exists but is not a directory.
    #[error("not a directory: {}", path.display())]
    NotADirectory {
        /// The offending start path.
        path: PathBuf,
    },

    /// A path that was reported to exist could not be canonicalized.
    #[error("cannot canonicalize {}: {source}", path.display())]
    Canonicalize {
        /// The path being canonicalized.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The current working directory could not be determined.
    #[error("cannot determine current directory: {source}")]
    CurrentDir {
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A JSON serialization error occurred.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Check if error indicates the start path is not a directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use relpath::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::NotADirectory { path: PathBuf::from("/etc/hosts") };
    /// assert!(err.is_not_a_directory());
    /// ```
    #[must_use]
    pub fn is_not_a_directory(&self) -> bool {
        matches!(self, Self::NotADirectory { .. })
    }

    /// Check if error indicates a path does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.io_kind() == Some(io::ErrorKind::NotFound)
    }

    /// Check if error is permission-related.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        self.io_kind() == Some(io::ErrorKind::PermissionDenied)
    }

    /// The operating-system error code behind this error, if any.
    ///
    /// `NotADirectory` maps to the platform's "not a directory" code so that
    /// callers can report it the same way as a failed system call.
    ///
    /// # Examples
    ///
    /// ```
    /// use relpath::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::NotADirectory { path: PathBuf::from("/etc/hosts") };
    /// assert!(err.os_error_code().is_some());
    /// ```
    #[must_use]
    pub fn os_error_code(&self) -> Option<i32> {
        match self {
            Self::NotADirectory { .. } => Some(NOT_A_DIRECTORY_CODE),
            _ => self.io_error().and_then(io::Error::raw_os_error),
        }
    }

    fn io_error(&self) -> Option<&io::Error> {
        match self {
            Self::Canonicalize { source, .. } | Self::CurrentDir { source } => Some(source),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }

    fn io_kind(&self) -> Option<io::ErrorKind> {
        self.io_error().map(io::Error::kind)
    }
}

/// Failure of a filesystem-aware operation, carrying both input paths.
///
/// This is the payload of the panic raised by the convenience forms
/// ([`relative`](crate::path::relative::relative) and friends) when the
/// underlying operation fails. Callers that need to recover from it can use
/// [`std::panic::catch_unwind`] and downcast the payload.
///
/// # Examples
///
/// ```
/// use relpath::{Error, FilesystemError};
/// use std::path::{Path, PathBuf};
///
/// let err = FilesystemError::new(
///     "relative",
///     Path::new("/a/b"),
///     Path::new("/etc/hosts"),
///     Error::NotADirectory { path: PathBuf::from("/etc/hosts") },
/// );
/// assert!(err.to_string().contains("relpath::relative"));
/// assert!(err.to_string().contains("/a/b"));
/// ```
#[derive(Debug, Error)]
#[error(
    "relpath::{operation}: {source}: \"{}\", \"{}\"",
    path.display(),
    start.display()
)]
pub struct FilesystemError {
    /// Name of the failed operation.
    pub operation: &'static str,
    /// The target path argument.
    pub path: PathBuf,
    /// The start path argument.
    pub start: PathBuf,
    /// The underlying error.
    #[source]
    pub source: Error,
}

impl FilesystemError {
    /// Wrap `source` together with the two paths of the failed call.
    #[must_use]
    pub fn new(operation: &'static str, path: &Path, start: &Path, source: Error) -> Self {
        Self {
            operation,
            path: path.to_path_buf(),
            start: start.to_path_buf(),
            source,
        }
    }

    /// The operating-system error code of the underlying error, if any.
    #[must_use]
    pub fn os_error_code(&self) -> Option<i32> {
        self.source.os_error_code()
    }
}
