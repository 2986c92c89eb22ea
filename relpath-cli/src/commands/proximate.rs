//! Proximate command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, prepare_path, print_reports, GlobalOptions};
use clap::Args;
use relpath::output::Report;
use relpath::Relativizer;
use std::env;
use std::path::PathBuf;

/// Print PATH relative to a start directory, or PATH itself when the two
/// cannot be related.
#[derive(Args)]
pub struct ProximateCommand {
    /// Target path
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Start directory (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub start: Option<PathBuf>,
}

impl ProximateCommand {
    /// Execute the proximate command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let relativizer = Relativizer::from_config(&config);

        let path = prepare_path(&config, &self.path)?;
        let start = match self.start {
            Some(ref start) => prepare_path(&config, start)?,
            None => env::current_dir()?,
        };

        let result = relativizer.try_proximate(&path, &start)?;
        print_reports(&config, &[Report::relation("proximate", &path, &start, result)])
    }
}
