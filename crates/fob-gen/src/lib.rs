//! OXC host layer for fob source rewriters
//!
//! This crate is the syntax-tree capability set that rewrite passes are
//! written against: parse a module, construct replacement nodes, inject
//! imports, and print the result.
//!
//! # Features
//!
//! - **Parser façade** - [`parse`] with source-type detection from file names
//! - **Node builders** - [`JsBuilder`] for identifiers, calls, `const` declarations and imports
//! - **Import injection** - [`ImportRegistry`], deduplicated per module
//! - **Pass pipeline** - [`TransformPass`] and [`TransformEngine`]
//!
//! # Examples
//!
//! ```rust
//! use fob_gen::{Allocator, FormatOptions, JsBuilder, ParseOptions, generate, parse};
//!
//! let allocator = Allocator::default();
//! let mut parsed = parse(&allocator, "import Page from './page';", ParseOptions::default())?;
//! let js = JsBuilder::new(&allocator);
//!
//! // Append: const page = wrap(Page);
//! let call = js.call(js.ident("wrap"), vec![js.arg(js.ident("Page"))]);
//! parsed.ast_mut().body.push(js.const_decl("page", call));
//!
//! let code = generate(parsed.ast(), &FormatOptions::default());
//! assert!(code.contains("const page = wrap(Page)"));
//! # Ok::<(), fob_gen::GenError>(())
//! ```
//!
//! ## Running a pass
//!
//! ```rust
//! use fob_gen::{
//!     Allocator, ParsedProgram, Result, TransformContext, TransformEngine, TransformPass,
//!     TransformResult,
//! };
//!
//! struct CountStatements;
//!
//! impl TransformPass for CountStatements {
//!     fn name(&self) -> &'static str {
//!         "count-statements"
//!     }
//!
//!     fn run(&self, program: &mut ParsedProgram<'_>, _ctx: &TransformContext) -> Result<TransformResult> {
//!         let count = program.ast().body.len();
//!         Ok(TransformResult::unchanged().with_diagnostics(format!("{count} statements")))
//!     }
//! }
//!
//! let allocator = Allocator::default();
//! let engine = TransformEngine::new(&allocator).add_pass(CountStatements);
//! let output = engine.transform("let a; let b;", &TransformContext::default())?;
//! assert_eq!(output.diagnostics, vec!["2 statements".to_string()]);
//! # Ok::<(), fob_gen::GenError>(())
//! ```

mod builder;
mod error;
mod format;
mod imports;
mod parser;
mod transform;

pub use builder::{JsBuilder, is_identifier_name};
pub use error::{GenError, Result};
pub use format::{FormatOptions, QuoteStyle, generate};
pub use imports::ImportRegistry;
pub use parser::{ParseDiagnostic, ParseOptions, ParsedProgram, parse};
pub use transform::{
    TransformContext, TransformEngine, TransformOutput, TransformPass, TransformResult,
};

// Re-export commonly used OXC types for convenience
pub use oxc_allocator::Allocator;
pub use oxc_ast::AstBuilder;
pub use oxc_span::Atom;
