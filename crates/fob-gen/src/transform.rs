//! Transformation engine for AST rewriting
//!
//! Provides a pipeline for applying multiple rewrite passes to one module.

use crate::error::Result;
use crate::format::{FormatOptions, generate};
use crate::parser::{ParseOptions, ParsedProgram, parse};
use oxc_allocator::Allocator;

/// What the host knows about the module being rewritten
#[derive(Debug, Clone, Default)]
pub struct TransformContext {
    /// Module file name, absolute or relative to `cwd`
    pub filename: Option<String>,
    /// Working directory of the build
    pub cwd: Option<String>,
}

impl TransformContext {
    /// Context for a file with no known working directory
    pub fn for_file(filename: impl Into<String>) -> Self {
        Self {
            filename: Some(filename.into()),
            cwd: None,
        }
    }

    /// Set the working directory
    pub fn with_cwd(mut self, cwd: impl Into<String>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// File name with the `cwd` prefix removed, if it has one
    pub fn relative_filename(&self) -> Option<&str> {
        let filename = self.filename.as_deref().filter(|f| !f.is_empty())?;
        match self.cwd.as_deref() {
            Some(cwd) if !cwd.is_empty() => Some(filename.strip_prefix(cwd).unwrap_or(filename)),
            _ => Some(filename),
        }
    }
}

/// Result of a transformation pass
#[derive(Debug, Default)]
pub struct TransformResult {
    /// Whether the transformation modified the AST
    pub modified: bool,
    /// Diagnostics from the transformation
    pub diagnostics: Vec<String>,
}

impl TransformResult {
    pub fn unchanged() -> Self {
        Self::default()
    }

    pub fn modified() -> Self {
        Self {
            modified: true,
            diagnostics: Vec::new(),
        }
    }

    pub fn with_diagnostics(mut self, diag: String) -> Self {
        self.diagnostics.push(diag);
        self
    }
}

/// Trait for transformation passes
pub trait TransformPass {
    /// Name of the transformation pass
    fn name(&self) -> &'static str;

    /// Run the transformation on a parsed program
    fn run(&self, program: &mut ParsedProgram<'_>, ctx: &TransformContext)
    -> Result<TransformResult>;
}

/// Transformation engine that applies multiple passes
pub struct TransformEngine<'a> {
    allocator: &'a Allocator,
    passes: Vec<Box<dyn TransformPass + Send + Sync + 'a>>,
    format_options: FormatOptions,
}

impl<'a> TransformEngine<'a> {
    /// Create a new transformation engine
    pub fn new(allocator: &'a Allocator) -> Self {
        Self {
            allocator,
            passes: Vec::new(),
            format_options: FormatOptions::default(),
        }
    }

    /// Set format options
    pub fn with_format_options(mut self, opts: FormatOptions) -> Self {
        self.format_options = opts;
        self
    }

    /// Add a transformation pass
    pub fn add_pass<P: TransformPass + Send + Sync + 'a>(mut self, pass: P) -> Self {
        self.passes.push(Box::new(pass));
        self
    }

    /// Transform source code
    ///
    /// The source type is taken from the context's file name. When no pass
    /// modifies the program the original text is returned untouched.
    pub fn transform(&self, source: &'a str, ctx: &TransformContext) -> Result<TransformOutput> {
        let parse_options = ctx
            .filename
            .as_deref()
            .map(ParseOptions::from_path)
            .unwrap_or_default();
        let mut parsed = parse(self.allocator, source, parse_options)?;

        let mut all_diagnostics = Vec::new();
        let mut any_modified = false;

        for pass in &self.passes {
            let result = pass.run(&mut parsed, ctx)?;
            tracing::trace!(pass = pass.name(), modified = result.modified, "ran pass");
            any_modified |= result.modified;
            all_diagnostics.extend(result.diagnostics);
        }

        let code = if any_modified {
            generate(parsed.ast(), &self.format_options)
        } else {
            source.to_string()
        };

        Ok(TransformOutput {
            code,
            modified: any_modified,
            diagnostics: all_diagnostics,
        })
    }
}

/// Output from transformation engine
#[derive(Debug)]
pub struct TransformOutput {
    /// Generated code
    pub code: String,
    /// Whether the code was modified
    pub modified: bool,
    /// Diagnostics from transformations
    pub diagnostics: Vec<String>,
}
