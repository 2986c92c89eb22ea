//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, input path preparation, and output
//! rendering.

use crate::error::CliError;
use relpath::output::{OutputFormat, Report};
use relpath::path::normalize::expand_tilde;
use relpath::{Config, ConfigBuilder, Logger};
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,

    /// Output format requested on the command line.
    pub format: Option<OutputFormat>,

    /// Logger for user-facing warnings.
    pub logger: Logger,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. The `--config` file
/// 4. Discovered configuration files
/// 5. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref path) = global.config {
        if !path.exists() {
            return Err(CliError::Config(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }
        builder = builder.with_config_file(path);
    }

    if let Some(format) = global.format {
        builder = builder.with_config(Config {
            output_format: Some(format),
            ..Default::default()
        });
    }

    let config = builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(config)
}

/// Prepare a user-supplied path: expand `~` when the configuration allows it.
///
/// The path is otherwise left untouched; the library decides whether to make
/// it absolute or normalize it.
pub fn prepare_path(config: &Config, path: &Path) -> Result<PathBuf, CliError> {
    if config.expand_tilde() {
        Ok(expand_tilde(path)?)
    } else {
        Ok(path.to_path_buf())
    }
}

/// Render `reports` in the configured format and print them to stdout.
pub fn print_reports(config: &Config, reports: &[Report]) -> Result<(), CliError> {
    let output = config.output_format().render(reports)?;
    println!("{output}");
    Ok(())
}

/// Warn that `path` cannot be expressed relative to `start`.
pub fn warn_unrelated(global: &GlobalOptions, path: &Path, start: &Path) {
    global.logger.warn(&format!(
        "no relative path between {} and {}",
        path.display(),
        start.display()
    ));
}
