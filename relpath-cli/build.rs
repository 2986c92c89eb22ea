//! Build script for relpath-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    let path = || Arg::new("path").value_name("PATH").required(true);
    let start = || {
        Arg::new("start")
            .long("start")
            .value_name("DIR")
            .help("Start directory (defaults to the current directory)")
    };

    Command::new("relpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compute lexical and filesystem-aware relative paths")
        .long_about(
            "Command-line tool for computing relative paths between filesystem paths, \
             through symlinks and for paths that do not exist yet",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Load this configuration file above any discovered one")
                .value_name("FILE")
                .global(true)
                .env("RELPATH_CONFIG"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format (text or json)")
                .value_name("FORMAT")
                .global(true),
        )
        .subcommands(vec![
            Command::new("relative")
                .about("Relative path from a start directory, resolving symlinks")
                .long_about(
                    "Print PATH relative to a start directory. Existing endpoints are \
                     canonicalized; missing endpoints are resolved lexically",
                )
                .arg(path())
                .arg(start())
                .arg(
                    Arg::new("require-relative")
                        .long("require-relative")
                        .help("Fail instead of printing an empty line when no relative path exists")
                        .action(ArgAction::SetTrue),
                ),
            Command::new("proximate")
                .about("Like `relative`, but fall back to the path itself")
                .long_about("Print PATH relative to a start directory, or PATH itself")
                .arg(path())
                .arg(start()),
            Command::new("lexical")
                .about("Relative path computed from the path text alone")
                .long_about("Print PATH relative to START without touching the filesystem")
                .arg(path())
                .arg(Arg::new("start").value_name("START").required(true))
                .arg(
                    Arg::new("proximate")
                        .long("proximate")
                        .help("Print PATH itself when no relative path exists")
                        .action(ArgAction::SetTrue),
                ),
            Command::new("normalize")
                .about("Collapse `.` and `..` segments without touching the filesystem")
                .arg(path().num_args(1..)),
            Command::new("common-prefix")
                .about("Longest common leading path of several paths")
                .arg(path().num_args(1..))
                .arg(
                    Arg::new("remove")
                        .long("remove")
                        .help("Also print what remains of each path after the prefix")
                        .action(ArgAction::SetTrue),
                ),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    // Generate main relpath.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("relpath.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
