//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CommonPrefixCommand, CompletionsCommand, LexicalCommand, NormalizeCommand, ProximateCommand,
    RelativeCommand,
};
use clap::{Parser, Subcommand};
use relpath::output::OutputFormat;
use std::path::PathBuf;

/// Command-line tool for computing relative paths.
#[derive(Parser)]
#[command(name = "relpath")]
#[command(version, about = "Compute lexical and filesystem-aware relative paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Load this configuration file above any discovered one
    #[arg(long, value_name = "FILE", global = true, env = "RELPATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(long, value_name = "FORMAT", global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Relative path from a start directory, resolving symlinks
    Relative(RelativeCommand),

    /// Like `relative`, but fall back to the path itself
    Proximate(ProximateCommand),

    /// Relative path computed from the path text alone
    Lexical(LexicalCommand),

    /// Collapse `.` and `..` segments without touching the filesystem
    Normalize(NormalizeCommand),

    /// Longest common leading path of several paths
    CommonPrefix(CommonPrefixCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
