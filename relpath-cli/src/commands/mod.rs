//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `relative`: Relative path, resolving symlinks of existing endpoints
//! - `proximate`: Relative path, or the path itself when none exists
//! - `lexical`: Relative or proximate path from the path text alone
//! - `normalize`: Lexically normalized paths
//! - `common_prefix`: Common prefix of several paths, optionally with remainders
//! - `completions`: Shell completion scripts

pub mod common_prefix;
pub mod completions;
pub mod lexical;
pub mod normalize;
pub mod proximate;
pub mod relative;

pub use common_prefix::CommonPrefixCommand;
pub use completions::CompletionsCommand;
pub use lexical::LexicalCommand;
pub use normalize::NormalizeCommand;
pub use proximate::ProximateCommand;
pub use relative::RelativeCommand;
