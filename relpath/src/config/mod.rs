//! Configuration system for relpath.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project `relpath.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`RELPATH_*`)
//! 3. Explicit config file (via `ConfigBuilder::with_config_file`)
//! 4. Project config (nearest `relpath.yaml`)
//! 5. User config (`~/.relpath/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use relpath::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//!
//! println!("on canonicalize error: {}", config.on_canonicalize_error());
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use relpath::config::{Config, ConfigBuilder};
//! use relpath::path::CanonicalizeFailurePolicy;
//!
//! let custom = Config {
//!     on_canonicalize_error: Some(CanonicalizeFailurePolicy::Lexical),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.on_canonicalize_error(), CanonicalizeFailurePolicy::Lexical);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::Config;
