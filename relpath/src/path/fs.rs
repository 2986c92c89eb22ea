//! Filesystem queries used by the real-path relativizer.
//!
//! The relativizer talks to the filesystem only through the [`FileSystem`]
//! trait, so tests can substitute failures (permission errors, paths that
//! vanish between probes) and a fixed current directory.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// The filesystem operations the relativizer needs.
#[cfg_attr(test, mockall::automock)]
pub trait FileSystem {
    /// Whether `path` exists. Broken symlinks do not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if existence cannot be determined.
    fn exists(&self, path: &Path) -> io::Result<bool>;

    /// Whether `path` exists and is a directory, following symlinks.
    ///
    /// # Errors
    ///
    /// Returns an error if the metadata cannot be read.
    fn is_dir(&self, path: &Path) -> io::Result<bool>;

    /// The canonical form of `path`: absolute, symlinks resolved, no `.`/`..`.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` does not exist or cannot be resolved.
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    /// The current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory is unavailable.
    fn current_dir(&self) -> io::Result<PathBuf>;
}

/// [`FileSystem`] backed by `std::fs` and `std::env`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        path.try_exists()
    }

    fn is_dir(&self, path: &Path) -> io::Result<bool> {
        fs::metadata(path).map(|m| m.is_dir())
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        fs::canonicalize(path)
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        env::current_dir()
    }
}

/// Make `path` absolute against the current directory reported by `fs`.
///
/// Absolute paths are returned unchanged; nothing is normalized.
///
/// # Errors
///
/// Returns [`Error::CurrentDir`] if `path` is relative and the current
/// directory cannot be determined.
///
/// # Examples
///
/// ```
/// use relpath::path::fs::{absolute, StdFileSystem};
/// use std::path::Path;
///
/// let abs = absolute(&StdFileSystem, Path::new("src/../lib")).unwrap();
/// assert!(abs.is_absolute());
/// assert!(abs.ends_with("src/../lib"));
/// ```
pub fn absolute<F: FileSystem + ?Sized>(fs: &F, path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = fs
        .current_dir()
        .map_err(|source| Error::CurrentDir { source })?;
    Ok(cwd.join(path))
}

/// What a single probe learned about a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Existence {
    /// The path does not exist (or its existence could not be determined).
    Missing,
    /// The path exists and is not a directory.
    File {
        /// The canonical form of the path.
        canonical: PathBuf,
    },
    /// The path exists and is a directory.
    Directory {
        /// The canonical form of the path.
        canonical: PathBuf,
    },
}

impl Existence {
    /// The canonical path, if the path exists.
    #[must_use]
    pub fn canonical(&self) -> Option<&Path> {
        match self {
            Self::Missing => None,
            Self::File { canonical } | Self::Directory { canonical } => Some(canonical),
        }
    }

    /// Whether the path exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        !matches!(self, Self::Missing)
    }
}

/// Probe `path`: does it exist, is it a directory, and what is its canonical
/// form.
///
/// A failure of the existence check itself is discarded and reported as
/// [`Existence::Missing`], so it cannot leak into a later probe. Once a path
/// is known to exist, failures to read its metadata or canonicalize it are
/// returned.
///
/// # Errors
///
/// Returns [`Error::Canonicalize`] if an existing path cannot be
/// canonicalized or its type cannot be read.
pub fn probe<F: FileSystem + ?Sized>(fs: &F, path: &Path) -> Result<Existence> {
    match fs.exists(path) {
        Ok(true) => {}
        Ok(false) => return Ok(Existence::Missing),
        Err(e) => {
            log::trace!("existence check failed for {}: {e}", path.display());
            return Ok(Existence::Missing);
        }
    }

    let to_error = |source| Error::Canonicalize {
        path: path.to_path_buf(),
        source,
    };
    let is_dir = fs.is_dir(path).map_err(to_error)?;
    let canonical = fs.canonicalize(path).map_err(to_error)?;

    Ok(if is_dir {
        Existence::Directory { canonical }
    } else {
        Existence::File { canonical }
    })
}
