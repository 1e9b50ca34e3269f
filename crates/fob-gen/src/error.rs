//! Error types for the OXC host layer

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised by the host primitives (parsing and node construction)
#[derive(Error, Debug, Diagnostic)]
pub enum GenError {
    /// Invalid identifier name
    #[error("Invalid identifier: '{identifier}'")]
    #[diagnostic(
        code(fob::gen::invalid_identifier),
        help("identifiers must match [A-Za-z_$][A-Za-z0-9_$]*")
    )]
    InvalidIdentifier { identifier: String },

    /// Source text could not be parsed
    #[error("Failed to parse {file}: {}", messages.join(", "))]
    #[diagnostic(
        code(fob::gen::parse_failed),
        help("fix the syntax error, or parse with `allow_errors` to keep a partial AST")
    )]
    ParseFailed { file: String, messages: Vec<String> },
}

impl GenError {
    /// Create an InvalidIdentifier error
    pub fn invalid_identifier(identifier: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            identifier: identifier.into(),
        }
    }
}

/// Result type for host operations
pub type Result<T> = std::result::Result<T, GenError>;
