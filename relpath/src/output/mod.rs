//! Output formatting for relative-path results.
//!
//! This module renders the outcome of an operation as plain text (one path
//! per line, for shell pipelines) or as JSON (for tooling).

mod formatters;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub use formatters::{JsonFormatter, TextFormatter};

/// Trait for formatting reports into different output formats.
pub trait OutputFormatter {
    /// Format the given reports into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the formatting fails (e.g., a path that is not
    /// valid UTF-8 cannot be written as JSON).
    fn format(&self, reports: &[Report]) -> Result<String>;
}

/// Available output formats.
///
/// # Examples
///
/// ```
/// use relpath::output::OutputFormat;
///
/// let format: OutputFormat = "json".parse().unwrap();
/// assert_eq!(format, OutputFormat::Json);
/// assert_eq!(OutputFormat::default().to_string(), "text");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One result path per line.
    #[default]
    Text,
    /// JSON report objects.
    Json,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }

    /// Render `reports` in this format.
    ///
    /// # Errors
    ///
    /// See [`OutputFormatter::format`].
    pub fn render(&self, reports: &[Report]) -> Result<String> {
        self.create_formatter().format(reports)
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(Error::Validation {
                field: "output_format".to_string(),
                message: format!("expected 'text' or 'json', got '{s}'"),
            }),
        }
    }
}

/// The outcome of one operation, ready for rendering.
///
/// # Examples
///
/// ```
/// use relpath::output::Report;
/// use std::path::{Path, PathBuf};
///
/// let report = Report::relation(
///     "lexical",
///     Path::new("/a/d"),
///     Path::new("/a/b/c"),
///     PathBuf::from("../../d"),
/// );
/// assert!(!report.is_empty);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Name of the operation that produced the result.
    pub operation: String,
    /// The target path, for two-path operations and `normalize`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// The start path, for two-path operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<PathBuf>,
    /// All inputs, for many-path operations.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<PathBuf>,
    /// The computed path.
    pub result: PathBuf,
    /// Per-input remainders, for `common-prefix --remove`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub remainders: Vec<PathBuf>,
    /// Whether `result` is the empty "no relation" path.
    pub is_empty: bool,
}

impl Report {
    /// Report for an operation on a target path and a start path.
    #[must_use]
    pub fn relation(operation: &str, path: &Path, start: &Path, result: PathBuf) -> Self {
        Self {
            path: Some(path.to_path_buf()),
            start: Some(start.to_path_buf()),
            ..Self::new(operation, result)
        }
    }

    /// Report for an operation on a single path.
    #[must_use]
    pub fn single(operation: &str, path: &Path, result: PathBuf) -> Self {
        Self {
            path: Some(path.to_path_buf()),
            ..Self::new(operation, result)
        }
    }

    /// Report for an operation over several paths.
    #[must_use]
    pub fn many(
        operation: &str,
        inputs: Vec<PathBuf>,
        result: PathBuf,
        remainders: Vec<PathBuf>,
    ) -> Self {
        Self {
            inputs,
            remainders,
            ..Self::new(operation, result)
        }
    }

    fn new(operation: &str, result: PathBuf) -> Self {
        Self {
            operation: operation.to_string(),
            path: None,
            start: None,
            inputs: Vec::new(),
            is_empty: result.as_os_str().is_empty(),
            result,
            remainders: Vec::new(),
        }
    }
}
