//! Locating the exports a page rewrite cares about

use oxc_ast::ast::{
    BindingPatternKind, Declaration, ExportNamedDeclaration, Function, Statement,
    VariableDeclarator,
};

/// Data-loading exports whose results are serialized for the page
pub const DATA_LOADERS: [&str; 2] = ["getServerSideProps", "getStaticProps"];

/// Positions of the rewrite candidates in a module's top-level statements
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageExports {
    /// `export function getServerSideProps ...` / `export const getStaticProps = ...`
    pub data_loaders: Vec<usize>,
    /// First `export default ...`
    pub default_export: Option<usize>,
}

impl PageExports {
    /// Scan `body` in order
    ///
    /// A module with several default exports is malformed; the first one is
    /// taken without complaint.
    pub fn locate(body: &[Statement<'_>]) -> Self {
        let mut found = Self::default();
        for (idx, stmt) in body.iter().enumerate() {
            match stmt {
                Statement::ExportNamedDeclaration(export) if exports_data_loader(export) => {
                    found.data_loaders.push(idx);
                }
                Statement::ExportDefaultDeclaration(_) if found.default_export.is_none() => {
                    found.default_export = Some(idx);
                }
                _ => {}
            }
        }
        found
    }

    /// Nothing to rewrite
    pub fn is_empty(&self) -> bool {
        self.data_loaders.is_empty() && self.default_export.is_none()
    }
}

/// True for names in [`DATA_LOADERS`]
pub fn is_data_loader(name: &str) -> bool {
    DATA_LOADERS.contains(&name)
}

/// Does this named export declare a watched function or initialized variable?
pub fn exports_data_loader(export: &ExportNamedDeclaration<'_>) -> bool {
    match &export.declaration {
        Some(Declaration::FunctionDeclaration(func)) => is_data_loader_function(func),
        Some(Declaration::VariableDeclaration(var)) => {
            var.declarations.iter().any(is_data_loader_declarator)
        }
        _ => false,
    }
}

/// Named function in the watch-list; anonymous functions and bodiless
/// `declare function` signatures never match
pub(crate) fn is_data_loader_function(func: &Function<'_>) -> bool {
    func.body.is_some() && func.id.as_ref().is_some_and(|id| is_data_loader(&id.name))
}

/// `name = init` with a watched identifier and an initializer to wrap
pub(crate) fn is_data_loader_declarator(declarator: &VariableDeclarator<'_>) -> bool {
    let BindingPatternKind::BindingIdentifier(ident) = &declarator.id.kind else {
        return false;
    };
    declarator.init.is_some() && is_data_loader(&ident.name)
}
