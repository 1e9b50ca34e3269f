//! fob-superjson CLI - superjson serialization for Next.js pages.
//!
//! Drives the [`fob_superjson`] rewriter over a project's page modules.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap)
//! - [`config`] - Layered configuration (figment)
//! - [`commands`] - `transform` and `classify`
//! - [`error`] - Error types and miette rendering
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - Status lines on stderr
//!
//! # Example
//!
//! ```rust,no_run
//! use fob_superjson_cli::{cli::ClassifyArgs, commands, error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     commands::classify_execute(ClassifyArgs {
//!         paths: vec!["pages".into()],
//!         ..ClassifyArgs::default()
//!     })
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, ConfigError, Result};
