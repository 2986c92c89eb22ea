//! Common prefix command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, prepare_path, print_reports, GlobalOptions};
use clap::Args;
use relpath::output::Report;
use relpath::remove_common_prefix;
use std::path::PathBuf;

/// Print the longest common leading path of all PATHs.
#[derive(Args)]
pub struct CommonPrefixCommand {
    /// Paths to compare
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Also print what remains of each path after the prefix
    #[arg(long)]
    pub remove: bool,
}

impl CommonPrefixCommand {
    /// Execute the common-prefix command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;

        let inputs = self
            .paths
            .iter()
            .map(|path| prepare_path(&config, path))
            .collect::<Result<Vec<_>, CliError>>()?;

        let split = remove_common_prefix(&inputs);
        let remainders = if self.remove {
            split.remainders
        } else {
            Vec::new()
        };

        print_reports(
            &config,
            &[Report::many("common_prefix", inputs, split.prefix, remainders)],
        )
    }
}
