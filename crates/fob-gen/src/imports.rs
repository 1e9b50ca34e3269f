//! Per-module named-import injection
//!
//! A rewrite pass asks for a local binding of some `imported` name from a
//! `source` module; the registry hands back a local identifier, creating the
//! import on first request and reusing it afterwards. Registries are scoped to
//! one program and never shared across modules.

use crate::builder::JsBuilder;
use crate::error::Result;
use indexmap::IndexMap;
use oxc_ast::ast::{BindingIdentifier, IdentifierReference, Program, Statement};
use oxc_ast_visit::{Visit, walk};
use oxc_span::Atom;
use rustc_hash::FxHashSet;

/// Named imports requested during one module pass
pub struct ImportRegistry<'a> {
    js: JsBuilder<'a>,
    used_names: FxHashSet<String>,
    imports: IndexMap<(String, String), Atom<'a>>,
}

impl<'a> ImportRegistry<'a> {
    /// Create a registry for `program`, reserving every identifier it already uses
    pub fn for_program(js: JsBuilder<'a>, program: &Program<'a>) -> Self {
        let mut collector = NameCollector::default();
        walk::walk_program(&mut collector, program);
        Self {
            js,
            used_names: collector.names,
            imports: IndexMap::new(),
        }
    }

    /// Local identifier bound to `imported` from `source`
    ///
    /// The first call for a pair picks a fresh `_imported` style name; later
    /// calls return the same atom.
    pub fn ensure_named(&mut self, imported: &str, source: &str) -> Atom<'a> {
        let key = (imported.to_string(), source.to_string());
        if let Some(local) = self.imports.get(&key) {
            return *local;
        }

        let local = self.js.atom(&self.unique_name(imported));
        tracing::trace!(imported, source, local = local.as_str(), "registered named import");
        self.used_names.insert(local.to_string());
        self.imports.insert(key, local);
        local
    }

    /// Number of distinct imports requested so far
    pub fn len(&self) -> usize {
        self.imports.len()
    }

    /// True when nothing has been requested
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Insert the requested imports into `program`
    ///
    /// Declarations go after the leading block of import statements, in the
    /// order they were first requested. Returns how many were inserted.
    pub fn inject(self, program: &mut Program<'a>) -> Result<usize> {
        let mut at = program
            .body
            .iter()
            .take_while(|stmt| matches!(stmt, Statement::ImportDeclaration(_)))
            .count();

        let count = self.imports.len();
        for ((imported, source), local) in self.imports {
            let stmt = self.js.named_import(&imported, local.as_str(), &source)?;
            program.body.insert(at, stmt);
            at += 1;
        }
        Ok(count)
    }

    /// `_name`, then `_name2`, `_name3`, ... until unused
    fn unique_name(&self, base: &str) -> String {
        let base = base.trim_start_matches('_');
        let mut candidate = format!("_{base}");
        let mut n = 2;
        while self.used_names.contains(&candidate) {
            candidate = format!("_{base}{n}");
            n += 1;
        }
        candidate
    }
}

#[derive(Default)]
struct NameCollector {
    names: FxHashSet<String>,
}

impl<'a> Visit<'a> for NameCollector {
    fn visit_identifier_reference(&mut self, it: &IdentifierReference<'a>) {
        self.names.insert(it.name.to_string());
    }

    fn visit_binding_identifier(&mut self, it: &BindingIdentifier<'a>) {
        self.names.insert(it.name.to_string());
    }
}
