//! Node constructors used by source rewriters
//!
//! Thin wrapper over OXC's [`AstBuilder`] that covers the handful of node
//! shapes a rewrite pass injects: identifier references, call expressions,
//! `const` declarations and named imports.

use crate::error::{GenError, Result};
use oxc_allocator::{Allocator, Box};
use oxc_ast::ast::*;
use oxc_ast::{AstBuilder, NONE};
use oxc_span::{Atom, SPAN, Span};

/// JavaScript node builder bound to an arena
#[derive(Clone, Copy)]
pub struct JsBuilder<'a> {
    ast: AstBuilder<'a>,
}

impl<'a> JsBuilder<'a> {
    /// Create a builder allocating into `allocator`
    pub fn new(allocator: &'a Allocator) -> Self {
        Self {
            ast: AstBuilder::new(allocator),
        }
    }

    /// Get the underlying AST builder
    pub fn ast(&self) -> AstBuilder<'a> {
        self.ast
    }

    /// Intern a string into the arena
    pub fn atom(&self, value: &str) -> Atom<'a> {
        self.ast.atom(value)
    }

    /// Identifier reference: `name`
    pub fn ident(&self, name: impl Into<Atom<'a>>) -> Expression<'a> {
        self.ident_at(SPAN, name)
    }

    /// Identifier reference carrying a source span
    pub fn ident_at(&self, span: Span, name: impl Into<Atom<'a>>) -> Expression<'a> {
        Expression::Identifier(self.ast.alloc_identifier_reference(span, name))
    }

    /// Call argument from an expression
    pub fn arg(&self, expr: Expression<'a>) -> Argument<'a> {
        Argument::from(expr)
    }

    /// Boxed call expression: `callee(args...)`
    ///
    /// Returned boxed so callers can place it in any enum that inherits
    /// expression variants (`Expression`, `ExportDefaultDeclarationKind`, ...).
    pub fn call_expr(
        &self,
        span: Span,
        callee: Expression<'a>,
        args: Vec<Argument<'a>>,
    ) -> Box<'a, CallExpression<'a>> {
        self.ast
            .alloc_call_expression(span, callee, NONE, self.ast.vec_from_iter(args), false)
    }

    /// Call expression: `callee(args...)`
    pub fn call(&self, callee: Expression<'a>, args: Vec<Argument<'a>>) -> Expression<'a> {
        Expression::CallExpression(self.call_expr(SPAN, callee, args))
    }

    /// `const name = init` as a declaration (for export positions)
    pub fn const_declaration(
        &self,
        span: Span,
        name: impl Into<Atom<'a>>,
        init: Expression<'a>,
    ) -> Declaration<'a> {
        let kind = VariableDeclarationKind::Const;
        let pattern = self.ast.binding_pattern(
            self.ast.binding_pattern_kind_binding_identifier(span, name),
            NONE,
            false,
        );
        let declarator = self
            .ast
            .variable_declarator(span, kind, pattern, Some(init), false);
        self.ast
            .declaration_variable(span, kind, self.ast.vec1(declarator), false)
    }

    /// `const name = init;` as a statement
    pub fn const_decl(&self, name: impl Into<Atom<'a>>, init: Expression<'a>) -> Statement<'a> {
        Statement::from(self.const_declaration(SPAN, name, init))
    }

    /// `import { imported as local } from "source";`
    ///
    /// Both names must be valid identifiers.
    pub fn named_import(&self, imported: &str, local: &str, source: &str) -> Result<Statement<'a>> {
        for name in [imported, local] {
            if !is_identifier_name(name) {
                return Err(GenError::invalid_identifier(name));
            }
        }

        let specifier = self.ast.import_declaration_specifier_import_specifier(
            SPAN,
            ModuleExportName::IdentifierName(self.ast.identifier_name(SPAN, self.atom(imported))),
            self.ast.binding_identifier(SPAN, self.atom(local)),
            ImportOrExportKind::Value,
        );
        let import = self.ast.module_declaration_import_declaration(
            SPAN,
            Some(self.ast.vec1(specifier)),
            self.ast.string_literal(SPAN, self.atom(source), None),
            None,
            NONE,
            ImportOrExportKind::Value,
        );
        Ok(Statement::from(import))
    }
}

/// ASCII identifier check (`[A-Za-z_$][A-Za-z0-9_$]*`)
pub fn is_identifier_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
