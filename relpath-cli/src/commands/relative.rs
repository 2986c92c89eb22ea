//! Relative command implementation.
//!
//! This module implements the `relative` command, which prints the path of
//! PATH relative to a start directory. Existing endpoints are canonicalized,
//! so the answer is correct through symlinks; endpoints that do not exist
//! yet are resolved lexically.

use crate::error::CliError;
use crate::utils::{load_configuration, prepare_path, print_reports, warn_unrelated, GlobalOptions};
use clap::Args;
use relpath::output::Report;
use relpath::Relativizer;
use std::env;
use std::path::PathBuf;

/// Print PATH relative to a start directory.
#[derive(Args)]
pub struct RelativeCommand {
    /// Target path
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Start directory (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub start: Option<PathBuf>,

    /// Fail instead of printing an empty line when no relative path exists
    #[arg(long)]
    pub require_relative: bool,
}

impl RelativeCommand {
    /// Execute the relative command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load configuration
        let config = load_configuration(global)?;
        let relativizer = Relativizer::from_config(&config);

        // 2. Prepare inputs
        let path = prepare_path(&config, &self.path)?;
        let start = match self.start {
            Some(ref start) => prepare_path(&config, start)?,
            None => env::current_dir()?,
        };

        // 3. Compute
        let result = relativizer.try_relative(&path, &start)?;

        // 4. Report
        if result.as_os_str().is_empty() {
            if self.require_relative {
                return Err(CliError::SemanticFailure(format!(
                    "no relative path from {} to {}",
                    start.display(),
                    path.display()
                )));
            }
            warn_unrelated(global, &path, &start);
        }

        print_reports(&config, &[Report::relation("relative", &path, &start, result)])
    }
}
