//! Printing options and helpers for rewritten modules

use oxc_ast::ast::Program;
use oxc_codegen::{Codegen, CodegenOptions};

/// Quote style for string literals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteStyle {
    /// Single quotes: `'hello'`
    Single,
    /// Double quotes: `"hello"`
    #[default]
    Double,
}

/// Formatting options for code generation
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// Quote style for string literals
    pub quote_style: QuoteStyle,
}

impl FormatOptions {
    fn codegen_options(&self) -> CodegenOptions {
        CodegenOptions {
            single_quote: self.quote_style == QuoteStyle::Single,
            ..CodegenOptions::default()
        }
    }
}

/// Print a program to a string
pub fn generate(program: &Program<'_>, opts: &FormatOptions) -> String {
    Codegen::new()
        .with_options(opts.codegen_options())
        .build(program)
        .code
}
