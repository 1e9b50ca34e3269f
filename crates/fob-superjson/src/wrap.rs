//! Wrapping data loaders and page components in the superjson helpers

use crate::locate::{is_data_loader_declarator, is_data_loader_function};
use crate::normalize::{class_to_expression, function_to_expression};
use fob_gen::{ImportRegistry, JsBuilder};
use oxc_allocator::Box;
use oxc_ast::ast::{
    BindingPatternKind, CallExpression, Declaration, ExportDefaultDeclaration, ExportDefaultDeclarationKind,
    ExportNamedDeclaration, Expression, Statement,
};
use oxc_span::{GetSpan, SPAN};

/// Module the runtime helpers are imported from
pub const TOOLS_MODULE: &str = "babel-plugin-superjson-next/tools";

/// Helper wrapping `getServerSideProps` / `getStaticProps`
pub const WITH_PROPS: &str = "withSuperJSONProps";

/// Helper wrapping the default-exported page component
pub const WITH_PAGE: &str = "withSuperJSONPage";

/// Builds `helper(expr)` calls, importing `helper` on first use
pub struct Wrapper<'r, 'a> {
    js: JsBuilder<'a>,
    imports: &'r mut ImportRegistry<'a>,
    helper: &'static str,
}

impl<'r, 'a> Wrapper<'r, 'a> {
    pub fn new(
        js: JsBuilder<'a>,
        imports: &'r mut ImportRegistry<'a>,
        helper: &'static str,
    ) -> Self {
        Self {
            js,
            imports,
            helper,
        }
    }

    /// `helper(expr)`, spanning the wrapped expression
    pub fn wrap(&mut self, expr: Expression<'a>) -> Box<'a, CallExpression<'a>> {
        let local = self.imports.ensure_named(self.helper, TOOLS_MODULE);
        let span = expr.span();
        self.js
            .call_expr(span, self.js.ident(local), vec![self.js.arg(expr)])
    }

    /// [`Self::wrap`] as an expression
    pub fn wrap_expression(&mut self, expr: Expression<'a>) -> Expression<'a> {
        Expression::CallExpression(self.wrap(expr))
    }
}

/// Rewrite the data loaders declared by one named export
///
/// `export function getServerSideProps() {}` becomes
/// `export const getServerSideProps = helper(function getServerSideProps() {})`;
/// watched declarators with an initializer get the initializer wrapped in
/// place. Returns the names that were wrapped.
pub fn wrap_data_loaders<'a>(
    export: &mut ExportNamedDeclaration<'a>,
    wrapper: &mut Wrapper<'_, 'a>,
) -> Vec<String> {
    let mut wrapped = Vec::new();
    match export.declaration.take() {
        Some(Declaration::FunctionDeclaration(func)) if is_data_loader_function(&func) => {
            let Some(name) = func.id.as_ref().map(|id| id.name) else {
                export.declaration = Some(Declaration::FunctionDeclaration(func));
                return wrapped;
            };
            let span = func.span;
            let init = wrapper.wrap_expression(function_to_expression(func));
            export.declaration = Some(wrapper.js.const_declaration(span, name, init));
            wrapped.push(name.to_string());
        }
        Some(Declaration::VariableDeclaration(mut var)) => {
            for declarator in var.declarations.iter_mut() {
                if !is_data_loader_declarator(declarator) {
                    continue;
                }
                if let Some(init) = declarator.init.take() {
                    declarator.init = Some(wrapper.wrap_expression(init));
                    if let BindingPatternKind::BindingIdentifier(ident) = &declarator.id.kind {
                        wrapped.push(ident.name.to_string());
                    }
                }
            }
            export.declaration = Some(Declaration::VariableDeclaration(var));
        }
        other => export.declaration = other,
    }
    wrapped
}

/// Shape of a default export, as far as wrapping is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultExportShape {
    /// `export default Page`
    Identifier,
    /// `export default function () {}` parsed as an expression
    FunctionExpression,
    /// `export default function Page() {}` / `export default class Page {}`
    NamedDeclaration,
    /// `export default function () {}`
    AnonymousFunction,
    /// `export default class {}`
    AnonymousClass,
    /// Anything else: arrows, calls, objects, TS interfaces, bodiless signatures
    Other,
}

impl DefaultExportShape {
    pub fn of(kind: &ExportDefaultDeclarationKind<'_>) -> Self {
        match kind {
            ExportDefaultDeclarationKind::Identifier(_) => Self::Identifier,
            ExportDefaultDeclarationKind::FunctionExpression(_) => Self::FunctionExpression,
            ExportDefaultDeclarationKind::FunctionDeclaration(func) if func.body.is_none() => {
                Self::Other
            }
            ExportDefaultDeclarationKind::FunctionDeclaration(func) if func.id.is_some() => {
                Self::NamedDeclaration
            }
            ExportDefaultDeclarationKind::FunctionDeclaration(_) => Self::AnonymousFunction,
            ExportDefaultDeclarationKind::ClassDeclaration(class) if class.id.is_some() => {
                Self::NamedDeclaration
            }
            ExportDefaultDeclarationKind::ClassDeclaration(_) => Self::AnonymousClass,
            _ => Self::Other,
        }
    }
}

/// Outcome of wrapping the default export
#[derive(Debug)]
pub struct DefaultExportWrap<'a> {
    pub shape: DefaultExportShape,
    /// Declaration to insert right before the export statement
    pub hoisted: Option<Statement<'a>>,
}

impl DefaultExportWrap<'_> {
    pub fn wrapped(&self) -> bool {
        self.shape != DefaultExportShape::Other
    }
}

/// Wrap the default-exported page component
///
/// Named function and class declarations are hoisted out of the export so
/// their binding stays visible to the rest of the module (and to themselves);
/// the export then wraps a reference to that binding.
pub fn wrap_default_export<'a>(
    export: &mut ExportDefaultDeclaration<'a>,
    wrapper: &mut Wrapper<'_, 'a>,
) -> DefaultExportWrap<'a> {
    let shape = DefaultExportShape::of(&export.declaration);
    if shape == DefaultExportShape::Other {
        return DefaultExportWrap {
            shape,
            hoisted: None,
        };
    }

    let placeholder =
        ExportDefaultDeclarationKind::NullLiteral(wrapper.js.ast().alloc_null_literal(SPAN));
    let declaration = std::mem::replace(&mut export.declaration, placeholder);

    let (wrapped, hoisted) = match declaration {
        ExportDefaultDeclarationKind::Identifier(ident) => {
            (wrapper.wrap(Expression::Identifier(ident)), None)
        }
        ExportDefaultDeclarationKind::FunctionExpression(func) => {
            (wrapper.wrap(Expression::FunctionExpression(func)), None)
        }
        ExportDefaultDeclarationKind::FunctionDeclaration(func) => match func.id.as_ref() {
            Some(id) => {
                let reference = wrapper.js.ident_at(id.span, id.name);
                (wrapper.wrap(reference), Some(Statement::FunctionDeclaration(func)))
            }
            None => (wrapper.wrap(function_to_expression(func)), None),
        },
        ExportDefaultDeclarationKind::ClassDeclaration(class) => match class.id.as_ref() {
            Some(id) => {
                let reference = wrapper.js.ident_at(id.span, id.name);
                (wrapper.wrap(reference), Some(Statement::ClassDeclaration(class)))
            }
            None => (wrapper.wrap(class_to_expression(class)), None),
        },
        // `shape` already ruled these out
        other => {
            export.declaration = other;
            return DefaultExportWrap {
                shape: DefaultExportShape::Other,
                hoisted: None,
            };
        }
    };

    export.declaration = ExportDefaultDeclarationKind::CallExpression(wrapped);
    DefaultExportWrap { shape, hoisted }
}
