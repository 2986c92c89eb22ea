//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use relpath::config::{Config, ConfigMerger};
///
/// let low = Config { expand_tilde: Some(true), ..Default::default() };
/// let high = Config { expand_tilde: Some(false), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.expand_tilde, Some(false));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target where set).
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.on_canonicalize_error.is_some() {
            target.on_canonicalize_error = source.on_canonicalize_error;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if source.expand_tilde.is_some() {
            target.expand_tilde = source.expand_tilde;
        }
    }
}
