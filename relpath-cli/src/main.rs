//! Main entry point for the relpath CLI.
//!
//! This is the command-line interface for the relpath library.
//! It provides commands for computing paths:
//! - `relative`: Relative path, resolving symlinks of existing endpoints
//! - `proximate`: Relative path, or the path itself when none exists
//! - `lexical`: Relative path from the path text alone
//! - `normalize`: Lexically normalized paths
//! - `common-prefix`: Common prefix of several paths

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity; library records go through it too
    let logger = relpath::init_logger(cli.verbose, cli.quiet);
    let _ = logger.install();

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
        format: cli.format,
        logger,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Relative(cmd) => cmd.execute(&global),
        cli::Command::Proximate(cmd) => cmd.execute(&global),
        cli::Command::Lexical(cmd) => cmd.execute(&global),
        cli::Command::Normalize(cmd) => cmd.execute(&global),
        cli::Command::CommonPrefix(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
