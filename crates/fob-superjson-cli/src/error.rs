//! Error handling for the fob-superjson CLI.
//!
//! Commands return [`CliError`]; `main` turns it into a [`miette::Report`]
//! with [`cli_error_to_miette`] so host diagnostics keep their codes and help
//! text.

use fob_gen::GenError;
use miette::Report;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration-related errors (unreadable file, bad values, conflicts)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A module could not be parsed or printed
    #[error("Failed to rewrite {}: {source}", .path.display())]
    Rewrite {
        /// Module that failed
        path: PathBuf,
        /// Underlying host error
        #[source]
        source: GenError,
    },

    /// Some modules failed; each failure was already reported
    #[error("{failed} of {total} files could not be rewritten")]
    RewriteFailed {
        /// Number of failed modules
        failed: usize,
        /// Number of modules processed
        total: usize,
    },

    /// `--check` found modules that would be rewritten
    #[error("{} file(s) would be rewritten\n\nHint: Run with --write to apply the changes", .files.len())]
    CheckFailed {
        /// Modules that are not up to date
        files: Vec<PathBuf>,
    },

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory traversal errors
    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `--config` points at a file that does not exist
    #[error("Config file not found: {}\n\nHint: Create a fob-superjson.json file or drop --config", .0.display())]
    NotFound(PathBuf),

    /// Merged configuration could not be extracted
    #[error("Invalid configuration: {0}\n\nHint: Check fob-superjson.json syntax and field types")]
    Invalid(String),

    /// Mutually exclusive options were specified
    #[error("Conflicting options: {0}\n\nHint: These options cannot be used together")]
    ConflictingOptions(String),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Rewrite { path, source } => {
            Report::new(source).wrap_err(format!("Failed to rewrite {}", path.display()))
        }
        CliError::CheckFailed { files } => {
            let list: Vec<String> = files
                .iter()
                .map(|f| format!("  {}", f.display()))
                .collect();
            miette::miette!(
                help = "Run with --write to apply the changes",
                "{} file(s) would be rewritten:\n{}",
                files.len(),
                list.join("\n")
            )
        }
        other => miette::miette!("{}", other),
    }
}
