//! Parser façade for reading existing JavaScript/TypeScript modules
//!
//! Rewriters receive a [`ParsedProgram`]: the OXC program together with the
//! arena it lives in, so passes can allocate replacement nodes next to the
//! ones they edit.

use crate::error::{GenError, Result};
use oxc_allocator::Allocator;
use oxc_parser::{ParseOptions as OxcParseOptions, Parser};
use oxc_span::SourceType;

/// Parse options for reading source code
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Source type (JavaScript, TypeScript, JSX, TSX); JSX-enabled ESM by default
    pub source_type: SourceType,
    /// Allow parsing errors (returns partial AST)
    pub allow_errors: bool,
    /// File name used in diagnostics
    pub file_name: Option<String>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            source_type: SourceType::jsx(),
            allow_errors: false,
            file_name: None,
        }
    }
}

impl ParseOptions {
    /// Create parse options from file path (auto-detects source type)
    pub fn from_path(path: &str) -> Self {
        Self {
            source_type: SourceType::from_path(path).map_or(SourceType::jsx(), |source_type| {
                // `.js` pages routinely contain JSX
                if source_type.is_javascript() {
                    source_type.with_jsx(true)
                } else {
                    source_type
                }
            }),
            allow_errors: false,
            file_name: Some(path.to_string()),
        }
    }

    /// Create parse options for TSX
    pub fn tsx() -> Self {
        Self {
            source_type: SourceType::tsx(),
            ..Self::default()
        }
    }

    /// Keep the partial AST when the parser reports errors
    pub fn allow_errors(mut self) -> Self {
        self.allow_errors = true;
        self
    }
}

/// Parse diagnostic information
#[derive(Debug, Clone)]
pub struct ParseDiagnostic {
    /// Error message
    pub message: String,
}

/// Parsed program with AST and metadata
pub struct ParsedProgram<'a> {
    /// The parsed AST program
    pub program: oxc_ast::ast::Program<'a>,
    /// Parse diagnostics (errors/warnings)
    pub diagnostics: Vec<ParseDiagnostic>,
    /// Allocator used for AST nodes
    pub allocator: &'a Allocator,
}

impl<'a> ParsedProgram<'a> {
    /// Get the program AST
    pub fn ast(&self) -> &oxc_ast::ast::Program<'a> {
        &self.program
    }

    /// Get mutable access to the program AST
    pub fn ast_mut(&mut self) -> &mut oxc_ast::ast::Program<'a> {
        &mut self.program
    }

    /// Get the allocator for creating new AST nodes
    pub fn allocator(&self) -> &'a Allocator {
        self.allocator
    }

    /// Check if parsing had errors
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Parse source code into an AST
///
/// # Arguments
///
/// * `allocator` - Allocator for AST nodes (must outlive the returned program)
/// * `source` - Source code to parse
/// * `options` - Parse options
pub fn parse<'a>(
    allocator: &'a Allocator,
    source: &'a str,
    options: ParseOptions,
) -> Result<ParsedProgram<'a>> {
    // Parentheses are not kept as nodes; the printer re-inserts the ones it needs
    let parser = Parser::new(allocator, source, options.source_type).with_options(OxcParseOptions {
        preserve_parens: false,
        ..OxcParseOptions::default()
    });
    let result = parser.parse();

    let diagnostics: Vec<ParseDiagnostic> = result
        .errors
        .iter()
        .map(|err| ParseDiagnostic {
            message: err.to_string(),
        })
        .collect();

    if !options.allow_errors && (!diagnostics.is_empty() || result.panicked) {
        return Err(GenError::ParseFailed {
            file: options.file_name.unwrap_or_else(|| "<input>".to_string()),
            messages: diagnostics.into_iter().map(|d| d.message).collect(),
        });
    }

    Ok(ParsedProgram {
        program: result.program,
        diagnostics,
        allocator,
    })
}
