//! Lexical command implementation.
//!
//! Unlike `relative`, this command never touches the filesystem: both paths
//! are taken as written, `.` and `..` segments included, and symlinks are not
//! followed.

use crate::error::CliError;
use crate::utils::{load_configuration, prepare_path, print_reports, warn_unrelated, GlobalOptions};
use clap::Args;
use relpath::output::Report;
use relpath::{lexically_proximate, lexically_relative};
use std::path::PathBuf;

/// Print PATH relative to START, computed from the path text alone.
#[derive(Args)]
pub struct LexicalCommand {
    /// Target path
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Start path
    #[arg(value_name = "START")]
    pub start: PathBuf,

    /// Print PATH itself when no relative path exists
    #[arg(long)]
    pub proximate: bool,
}

impl LexicalCommand {
    /// Execute the lexical command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let path = prepare_path(&config, &self.path)?;
        let start = prepare_path(&config, &self.start)?;

        let (operation, result) = if self.proximate {
            ("lexically_proximate", lexically_proximate(&path, &start))
        } else {
            ("lexically_relative", lexically_relative(&path, &start))
        };

        if result.as_os_str().is_empty() {
            warn_unrelated(global, &path, &start);
        }

        print_reports(&config, &[Report::relation(operation, &path, &start, result)])
    }
}
