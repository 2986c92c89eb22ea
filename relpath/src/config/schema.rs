//! Configuration schema definitions.
//!
//! This module defines the configuration structure for relpath. Every field
//! is optional so that partial files can be layered on top of each other.

use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;
use crate::path::relative::CanonicalizeFailurePolicy;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use relpath::config::Config;
/// use relpath::output::OutputFormat;
/// use relpath::path::CanonicalizeFailurePolicy;
///
/// let config: Config = serde_yaml::from_str(
///     "on_canonicalize_error: lexical\noutput_format: json\n",
/// ).unwrap();
/// assert_eq!(config.on_canonicalize_error, Some(CanonicalizeFailurePolicy::Lexical));
/// assert_eq!(config.output_format, Some(OutputFormat::Json));
/// assert!(config.expand_tilde());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// What to do when an existing path cannot be canonicalized.
    pub on_canonicalize_error: Option<CanonicalizeFailurePolicy>,

    /// Output format for CLI results.
    pub output_format: Option<OutputFormat>,

    /// Expand a leading `~` in CLI path arguments.
    pub expand_tilde: Option<bool>,
}

impl Config {
    /// Effective canonicalization failure policy.
    #[must_use]
    pub fn on_canonicalize_error(&self) -> CanonicalizeFailurePolicy {
        self.on_canonicalize_error.unwrap_or_default()
    }

    /// Effective output format.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// Whether tilde expansion is enabled (defaults to true).
    #[must_use]
    pub fn expand_tilde(&self) -> bool {
        self.expand_tilde.unwrap_or(true)
    }
}
