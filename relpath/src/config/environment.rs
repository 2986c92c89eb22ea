//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `RELPATH_*` environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::output::OutputFormat;
use crate::path::relative::CanonicalizeFailurePolicy;
use std::env;

/// Overrides [`Config::on_canonicalize_error`].
pub const ON_CANONICALIZE_ERROR_ENV: &str = "RELPATH_ON_CANONICALIZE_ERROR";
/// Overrides [`Config::output_format`].
pub const OUTPUT_FORMAT_ENV: &str = "RELPATH_OUTPUT_FORMAT";
/// Overrides [`Config::expand_tilde`].
pub const EXPAND_TILDE_ENV: &str = "RELPATH_EXPAND_TILDE";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use relpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., unknown policy name, invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var(ON_CANONICALIZE_ERROR_ENV) {
            let policy: CanonicalizeFailurePolicy =
                val.parse().map_err(|_| Error::Validation {
                    field: ON_CANONICALIZE_ERROR_ENV.into(),
                    message: format!("Invalid policy: '{val}' (expected abort/lexical)"),
                })?;
            config.on_canonicalize_error = Some(policy);
        }

        if let Ok(val) = env::var(OUTPUT_FORMAT_ENV) {
            let format: OutputFormat = val.parse().map_err(|_| Error::Validation {
                field: OUTPUT_FORMAT_ENV.into(),
                message: format!("Invalid output format: '{val}' (expected text/json)"),
            })?;
            config.output_format = Some(format);
        }

        if let Ok(val) = env::var(EXPAND_TILDE_ENV) {
            config.expand_tilde = Some(Self::parse_bool(EXPAND_TILDE_ENV, &val)?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
