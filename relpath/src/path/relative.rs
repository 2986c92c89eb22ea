//! Filesystem-aware relative paths.
//!
//! [`Relativizer`] computes a relative path between two endpoints that may or
//! may not exist on disk. Existing endpoints are canonicalized, so symlinks
//! are resolved the way the filesystem resolves them. Endpoints that do not
//! exist ("imaginary" paths, such as planned output locations) are rebuilt
//! lexically on top of their common ancestor, which is itself canonicalized
//! when it exists.
//!
//! The probes happen one after another within a call. A path changed by
//! another process between two probes can produce an inconsistent result;
//! nothing here can prevent that.
//!
//! # Examples
//!
//! ```
//! use relpath::path::relative::try_relative;
//! use std::path::{Path, PathBuf};
//!
//! // Neither path exists, so the answer is purely lexical.
//! let rel = try_relative(
//!     Path::new("/no_such_root_xyz/a/d"),
//!     Path::new("/no_such_root_xyz/a/b/c"),
//! ).unwrap();
//! assert_eq!(rel, PathBuf::from("../../d"));
//! ```

use std::panic;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{Error, FilesystemError, Result};
use crate::path::fs::{absolute, probe, Existence, FileSystem, StdFileSystem};
use crate::path::lexical::lexically_relative;
use crate::path::normalize::normalize;
use crate::path::prefix::remove_common_prefix_pair;

/// What to do when a path that exists cannot be canonicalized.
///
/// # Examples
///
/// ```
/// use relpath::path::relative::CanonicalizeFailurePolicy;
///
/// assert_eq!(CanonicalizeFailurePolicy::default(), CanonicalizeFailurePolicy::Abort);
/// assert_eq!(CanonicalizeFailurePolicy::Lexical.to_string(), "lexical");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalizeFailurePolicy {
    /// Stop and return the error.
    #[default]
    Abort,
    /// Treat the endpoint as imaginary and rebuild it lexically.
    Lexical,
}

impl std::fmt::Display for CanonicalizeFailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Abort => write!(f, "abort"),
            Self::Lexical => write!(f, "lexical"),
        }
    }
}

impl std::str::FromStr for CanonicalizeFailurePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "lexical" => Ok(Self::Lexical),
            _ => Err(Error::Validation {
                field: "on_canonicalize_error".to_string(),
                message: format!("expected 'abort' or 'lexical', got '{s}'"),
            }),
        }
    }
}

/// Computes relative paths with help from the filesystem.
///
/// Stateless across calls: every call probes the filesystem afresh.
///
/// # Examples
///
/// ```no_run
/// use relpath::path::relative::{CanonicalizeFailurePolicy, Relativizer};
/// use std::path::Path;
///
/// let relativizer = Relativizer::new()
///     .with_policy(CanonicalizeFailurePolicy::Lexical);
///
/// let rel = relativizer
///     .try_relative(Path::new("/srv/data/out.txt"), Path::new("/srv/app"))
///     .unwrap();
/// println!("{}", rel.display());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Relativizer<F = StdFileSystem> {
    fs: F,
    policy: CanonicalizeFailurePolicy,
}

impl Relativizer<StdFileSystem> {
    /// Create a relativizer over the real filesystem with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a relativizer over the real filesystem configured by `config`.
    ///
    /// # Examples
    ///
    /// ```
    /// use relpath::config::Config;
    /// use relpath::path::relative::{CanonicalizeFailurePolicy, Relativizer};
    ///
    /// let config = Config {
    ///     on_canonicalize_error: Some(CanonicalizeFailurePolicy::Lexical),
    ///     ..Default::default()
    /// };
    /// let relativizer = Relativizer::from_config(&config);
    /// assert_eq!(relativizer.policy(), CanonicalizeFailurePolicy::Lexical);
    /// ```
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new().with_policy(config.on_canonicalize_error.unwrap_or_default())
    }
}

impl<F: FileSystem> Relativizer<F> {
    /// Create a relativizer over a custom filesystem.
    #[must_use]
    pub fn with_fs(fs: F) -> Self {
        Self {
            fs,
            policy: CanonicalizeFailurePolicy::default(),
        }
    }

    /// Configure what happens when canonicalization fails.
    #[must_use]
    pub fn with_policy(mut self, policy: CanonicalizeFailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The configured canonicalization failure policy.
    #[must_use]
    pub fn policy(&self) -> CanonicalizeFailurePolicy {
        self.policy
    }

    /// Relative path from `start` to `path`, consulting the filesystem.
    ///
    /// Both inputs are made absolute and normalized, split on their common
    /// prefix, and then each of the common ancestor, `start` and `path` is
    /// canonicalized if it exists or rebuilt lexically if it does not. The
    /// two resulting paths are compared lexically.
    ///
    /// An empty result means no relative path can be expressed (the inputs
    /// are on different roots).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `start` exists but is not a directory ([`Error::NotADirectory`])
    /// - an existing endpoint cannot be canonicalized and the policy is
    ///   [`CanonicalizeFailurePolicy::Abort`] ([`Error::Canonicalize`])
    /// - the current directory is needed and unavailable ([`Error::CurrentDir`])
    pub fn try_relative(&self, path: &Path, start: &Path) -> Result<PathBuf> {
        let abs_path = absolute(&self.fs, path)?;
        let abs_start = absolute(&self.fs, start)?;

        let (common, rel_path, rel_start) =
            remove_common_prefix_pair(&normalize(&abs_path), &normalize(&abs_start));

        let common = match self.probe(&common)? {
            Some(canonical) => canonical,
            None => common,
        };

        let real_start = match self.probe_existence(&abs_start)? {
            Existence::File { .. } => {
                log::debug!("start {} is not a directory", abs_start.display());
                return Err(Error::NotADirectory { path: abs_start });
            }
            Existence::Directory { canonical } => canonical,
            Existence::Missing => common.join(&rel_start),
        };

        let real_path = match self.probe(&abs_path)? {
            Some(canonical) => canonical,
            None => common.join(&rel_path),
        };

        log::debug!(
            "relative: path {} -> {}, start {} -> {}",
            path.display(),
            real_path.display(),
            start.display(),
            real_start.display()
        );

        Ok(lexically_relative(&real_path, &real_start))
    }

    /// Relative path from the current directory to `path`.
    ///
    /// # Errors
    ///
    /// Same as [`Relativizer::try_relative`], plus [`Error::CurrentDir`] if the
    /// current directory is unavailable.
    pub fn try_relative_to_cwd(&self, path: &Path) -> Result<PathBuf> {
        let cwd = self
            .fs
            .current_dir()
            .map_err(|source| Error::CurrentDir { source })?;
        self.try_relative(path, &cwd)
    }

    /// [`Relativizer::try_relative`], falling back to `path` itself when no
    /// relative path can be expressed.
    ///
    /// # Errors
    ///
    /// Same as [`Relativizer::try_relative`].
    pub fn try_proximate(&self, path: &Path, start: &Path) -> Result<PathBuf> {
        let relative = self.try_relative(path, start)?;
        if relative.as_os_str().is_empty() {
            Ok(path.to_path_buf())
        } else {
            Ok(relative)
        }
    }

    /// Proximate path from the current directory to `path`.
    ///
    /// # Errors
    ///
    /// Same as [`Relativizer::try_relative_to_cwd`].
    pub fn try_proximate_to_cwd(&self, path: &Path) -> Result<PathBuf> {
        let cwd = self
            .fs
            .current_dir()
            .map_err(|source| Error::CurrentDir { source })?;
        self.try_proximate(path, &cwd)
    }

    /// Lexical relative path after making both inputs absolute and normalized.
    ///
    /// Nothing is probed or canonicalized; only the current directory is
    /// consulted, and only for relative inputs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CurrentDir`] if a relative input needs the current
    /// directory and it is unavailable.
    pub fn try_relativize(&self, path: &Path, start: &Path) -> Result<PathBuf> {
        let path = normalize(&absolute(&self.fs, path)?);
        let start = normalize(&absolute(&self.fs, start)?);
        Ok(lexically_relative(&path, &start))
    }

    /// Like [`Relativizer::try_relative`], but a failure is fatal.
    ///
    /// # Panics
    ///
    /// Panics with a [`FilesystemError`] payload carrying both input paths and
    /// the underlying error when [`Relativizer::try_relative`] fails.
    #[must_use]
    pub fn relative(&self, path: &Path, start: &Path) -> PathBuf {
        or_fail("relative", path, start, self.try_relative(path, start))
    }

    /// Like [`Relativizer::try_proximate`], but a failure is fatal.
    ///
    /// # Panics
    ///
    /// Panics with a [`FilesystemError`] payload when
    /// [`Relativizer::try_proximate`] fails.
    #[must_use]
    pub fn proximate(&self, path: &Path, start: &Path) -> PathBuf {
        or_fail("proximate", path, start, self.try_proximate(path, start))
    }

    /// Probe `path` and return its canonical form if it exists.
    fn probe(&self, path: &Path) -> Result<Option<PathBuf>> {
        Ok(match self.probe_existence(path)? {
            Existence::Missing => None,
            Existence::File { canonical } | Existence::Directory { canonical } => Some(canonical),
        })
    }

    /// Probe `path`, applying the canonicalization failure policy.
    fn probe_existence(&self, path: &Path) -> Result<Existence> {
        match probe(&self.fs, path) {
            Err(e @ Error::Canonicalize { .. })
                if self.policy == CanonicalizeFailurePolicy::Lexical =>
            {
                log::warn!("{e}; treating {} as imaginary", path.display());
                Ok(Existence::Missing)
            }
            other => other,
        }
    }
}

/// Unwrap `result` or panic with a [`FilesystemError`] payload.
fn or_fail(operation: &'static str, path: &Path, start: &Path, result: Result<PathBuf>) -> PathBuf {
    match result {
        Ok(relative) => relative,
        Err(source) => panic::panic_any(FilesystemError::new(operation, path, start, source)),
    }
}

/// [`Relativizer::try_relative`] over the real filesystem.
///
/// # Errors
///
/// See [`Relativizer::try_relative`].
pub fn try_relative(path: &Path, start: &Path) -> Result<PathBuf> {
    Relativizer::new().try_relative(path, start)
}

/// [`Relativizer::try_relative_to_cwd`] over the real filesystem.
///
/// # Errors
///
/// See [`Relativizer::try_relative_to_cwd`].
pub fn try_relative_to_cwd(path: &Path) -> Result<PathBuf> {
    Relativizer::new().try_relative_to_cwd(path)
}

/// [`Relativizer::try_proximate`] over the real filesystem.
///
/// # Errors
///
/// See [`Relativizer::try_proximate`].
pub fn try_proximate(path: &Path, start: &Path) -> Result<PathBuf> {
    Relativizer::new().try_proximate(path, start)
}

/// [`Relativizer::relative`] over the real filesystem.
///
/// # Panics
///
/// Panics with a [`FilesystemError`] payload on failure.
#[must_use]
pub fn relative(path: &Path, start: &Path) -> PathBuf {
    Relativizer::new().relative(path, start)
}

/// Relative path from the current directory to `path`, over the real
/// filesystem.
///
/// # Panics
///
/// Panics with a [`FilesystemError`] payload on failure. The start path in
/// the payload is empty if the current directory itself was unavailable.
#[must_use]
pub fn relative_to_cwd(path: &Path) -> PathBuf {
    let relativizer = Relativizer::new();
    match relativizer.fs.current_dir() {
        Ok(cwd) => relativizer.relative(path, &cwd),
        Err(source) => or_fail(
            "relative",
            path,
            Path::new(""),
            Err(Error::CurrentDir { source }),
        ),
    }
}

/// [`Relativizer::proximate`] over the real filesystem.
///
/// # Panics
///
/// Panics with a [`FilesystemError`] payload on failure.
#[must_use]
pub fn proximate(path: &Path, start: &Path) -> PathBuf {
    Relativizer::new().proximate(path, start)
}
