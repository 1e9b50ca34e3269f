//! The page rewrite as a [`TransformPass`]

use crate::classify::{SkipReason, page_path, skip_reason};
use crate::locate::PageExports;
use crate::wrap::{
    DefaultExportShape, WITH_PAGE, WITH_PROPS, Wrapper, wrap_data_loaders, wrap_default_export,
};
use fob_gen::{
    Allocator, ImportRegistry, JsBuilder, ParsedProgram, Result, TransformContext, TransformPass,
    TransformResult,
};
use oxc_ast::ast::{Program, Statement};

/// Wraps page data loaders in `withSuperJSONProps` and the page component in
/// `withSuperJSONPage`
#[derive(Debug, Clone, Copy, Default)]
pub struct SuperJsonPass;

impl TransformPass for SuperJsonPass {
    fn name(&self) -> &'static str {
        "add superjson to pages with prop getters"
    }

    fn run(
        &self,
        program: &mut ParsedProgram<'_>,
        ctx: &TransformContext,
    ) -> Result<TransformResult> {
        let allocator = program.allocator();
        let report = rewrite_program(program.ast_mut(), allocator, ctx)?;

        let mut result = if report.modified() {
            TransformResult::modified()
        } else {
            TransformResult::unchanged()
        };
        for name in &report.wrapped_loaders {
            result = result.with_diagnostics(format!("wrapped `{name}` with {WITH_PROPS}"));
        }
        if let Some(shape) = report.default_export.filter(|s| *s != DefaultExportShape::Other) {
            result = result
                .with_diagnostics(format!("wrapped default export ({shape:?}) with {WITH_PAGE}"));
        }
        Ok(result)
    }
}

/// What [`rewrite_program`] did to one module
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteReport {
    /// Set when the module was not a page; nothing else is filled in then
    pub skipped: Option<SkipReason>,
    /// Data loaders wrapped, in source order
    pub wrapped_loaders: Vec<String>,
    /// Shape of the default export, if the module has one
    pub default_export: Option<DefaultExportShape>,
    /// Import declarations added to the module
    pub imports_injected: usize,
}

impl RewriteReport {
    fn skipped(reason: SkipReason) -> Self {
        Self {
            skipped: Some(reason),
            ..Self::default()
        }
    }

    /// True when the program was changed
    pub fn modified(&self) -> bool {
        self.imports_injected > 0
    }
}

/// Rewrite one page module in place
///
/// Data loaders are wrapped first, then the default export; the helper
/// imports are inserted last so no statement index computed up front moves
/// while it is still needed. Modules that are not pages are left untouched.
pub fn rewrite_program<'a>(
    program: &mut Program<'a>,
    allocator: &'a Allocator,
    ctx: &TransformContext,
) -> Result<RewriteReport> {
    let path = page_path(ctx);
    if let Some(reason) = skip_reason(&path) {
        tracing::debug!(path = %path, %reason, "skipping module");
        return Ok(RewriteReport::skipped(reason));
    }

    let exports = PageExports::locate(&program.body);
    if exports.is_empty() {
        tracing::debug!(path = %path, "page has no data loaders or default export");
        return Ok(RewriteReport::default());
    }

    let js = JsBuilder::new(allocator);
    let mut imports = ImportRegistry::for_program(js, program);
    let mut report = RewriteReport::default();

    {
        let mut wrapper = Wrapper::new(js, &mut imports, WITH_PROPS);
        for &idx in &exports.data_loaders {
            if let Some(Statement::ExportNamedDeclaration(export)) = program.body.get_mut(idx) {
                report
                    .wrapped_loaders
                    .extend(wrap_data_loaders(export, &mut wrapper));
            }
        }
    }

    if let Some(idx) = exports.default_export {
        let mut wrapper = Wrapper::new(js, &mut imports, WITH_PAGE);
        let mut hoisted = None;
        if let Some(Statement::ExportDefaultDeclaration(export)) = program.body.get_mut(idx) {
            let outcome = wrap_default_export(export, &mut wrapper);
            report.default_export = Some(outcome.shape);
            hoisted = outcome.hoisted;
        }
        if let Some(declaration) = hoisted {
            tracing::trace!(path = %path, index = idx, "hoisting default export declaration");
            program.body.insert(idx, declaration);
        }
    }

    report.imports_injected = imports.inject(program)?;
    tracing::debug!(
        path = %path,
        loaders = ?report.wrapped_loaders,
        default_export = ?report.default_export,
        imports = report.imports_injected,
        "rewrote page"
    );
    Ok(report)
}
