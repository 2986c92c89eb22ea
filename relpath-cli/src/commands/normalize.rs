//! Normalize command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, prepare_path, print_reports, GlobalOptions};
use clap::Args;
use relpath::normalize;
use relpath::output::Report;
use std::path::PathBuf;

/// Print each PATH with `.` and resolvable `..` segments removed.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Paths to normalize
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,
}

impl NormalizeCommand {
    /// Execute the normalize command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;

        let reports = self
            .paths
            .iter()
            .map(|path| {
                let path = prepare_path(&config, path)?;
                let result = normalize(&path);
                Ok(Report::single("normalize", &path, result))
            })
            .collect::<Result<Vec<_>, CliError>>()?;

        print_reports(&config, &reports)
    }
}
