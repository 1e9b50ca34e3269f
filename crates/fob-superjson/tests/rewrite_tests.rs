//! End-to-end page rewrites: parse, run the pass, print, and parse the
//! printed module again to check its structure.

use fob_gen::{Allocator, FormatOptions, ParseOptions, TransformContext, TransformOutput, parse};
use fob_superjson::{TOOLS_MODULE, transform};
use oxc_ast::ast::{
    Argument, Declaration, ExportDefaultDeclarationKind, Expression, ImportDeclarationSpecifier,
    ModuleExportName, Program, Statement, VariableDeclarationKind,
};
use std::path::MAIN_SEPARATOR;

fn native(path: &str) -> String {
    path.replace('/', &MAIN_SEPARATOR.to_string())
}

fn rewrite(source: &str, filename: &str) -> TransformOutput {
    let allocator = Allocator::default();
    let ctx = TransformContext::for_file(native(filename));
    transform(&allocator, source, &ctx, FormatOptions::default()).unwrap()
}

fn with_reparsed(code: &str, check: impl FnOnce(&Program<'_>)) {
    let allocator = Allocator::default();
    let parsed = parse(&allocator, code, ParseOptions::tsx())
        .unwrap_or_else(|e| panic!("output does not parse: {e}\n{code}"));
    check(parsed.ast());
}

/// `(imported, local)` for every specifier imported from the helper module
fn helper_imports(program: &Program<'_>) -> Vec<(String, String)> {
    program
        .body
        .iter()
        .filter_map(|stmt| match stmt {
            Statement::ImportDeclaration(import) if import.source.value == TOOLS_MODULE => {
                import.specifiers.as_ref()
            }
            _ => None,
        })
        .flat_map(|specifiers| specifiers.iter())
        .filter_map(|specifier| match specifier {
            ImportDeclarationSpecifier::ImportSpecifier(spec) => {
                let ModuleExportName::IdentifierName(imported) = &spec.imported else {
                    return None;
                };
                Some((imported.name.to_string(), spec.local.name.to_string()))
            }
            _ => None,
        })
        .collect()
}

fn callee_name<'b>(expr: &'b Expression<'_>) -> Option<&'b str> {
    let Expression::CallExpression(call) = expr else {
        return None;
    };
    match &call.callee {
        Expression::Identifier(ident) => Some(ident.name.as_str()),
        _ => None,
    }
}

fn default_export_call<'b, 'a>(
    program: &'b Program<'a>,
) -> (usize, &'b oxc_ast::ast::CallExpression<'a>) {
    program
        .body
        .iter()
        .enumerate()
        .find_map(|(idx, stmt)| match stmt {
            Statement::ExportDefaultDeclaration(export) => match &export.declaration {
                ExportDefaultDeclarationKind::CallExpression(call) => Some((idx, &**call)),
                other => panic!("default export not wrapped: {other:?}"),
            },
            _ => None,
        })
        .expect("default export")
}

#[test]
fn function_loader_becomes_wrapped_const() {
    let out = rewrite(
        "export function getServerSideProps() {\n  return { props: { now: new Date() } };\n}\n",
        "pages/index.js",
    );
    assert!(out.modified);
    assert!(out.code.contains(
        "export const getServerSideProps = _withSuperJSONProps(function getServerSideProps()"
    ));

    with_reparsed(&out.code, |program| {
        assert_eq!(
            helper_imports(program),
            vec![("withSuperJSONProps".to_string(), "_withSuperJSONProps".to_string())]
        );
        let Some(Statement::ExportNamedDeclaration(export)) = program.body.last() else {
            panic!("loader is no longer exported");
        };
        let Some(Declaration::VariableDeclaration(var)) = &export.declaration else {
            panic!("expected const declaration");
        };
        assert_eq!(var.kind, VariableDeclarationKind::Const);
        let init = var.declarations[0].init.as_ref().unwrap();
        assert_eq!(callee_name(init), Some("_withSuperJSONProps"));
    });
}

#[test]
fn variable_loader_only_has_its_initializer_wrapped() {
    let out = rewrite(
        "export const getStaticProps = async () => {\n  return { props: {} };\n};\n",
        "pages/blog/[slug].tsx",
    );
    assert!(out.code.contains("export const getStaticProps = _withSuperJSONProps(async () =>"));

    with_reparsed(&out.code, |program| {
        let Some(Statement::ExportNamedDeclaration(export)) = program.body.last() else {
            panic!("expected export");
        };
        let Some(Declaration::VariableDeclaration(var)) = &export.declaration else {
            panic!("expected variable declaration");
        };
        assert_eq!(var.kind, VariableDeclarationKind::Const);
        let Some(Expression::CallExpression(call)) = &var.declarations[0].init else {
            panic!("initializer not wrapped");
        };
        let Argument::ArrowFunctionExpression(arrow) = &call.arguments[0] else {
            panic!("expected the original arrow function");
        };
        assert!(arrow.r#async);
    });
}

#[test]
fn named_default_function_is_hoisted_before_export() {
    let out = rewrite(
        "import React from \"react\";\nexport default function HomePage() {\n  return null;\n}\n",
        "pages/index.jsx",
    );
    assert!(out.code.contains("export default _withSuperJSONPage(HomePage)"));

    with_reparsed(&out.code, |program| {
        let (idx, call) = default_export_call(program);
        let Statement::FunctionDeclaration(func) = &program.body[idx - 1] else {
            panic!("declaration not hoisted right before the export");
        };
        assert_eq!(func.id.as_ref().unwrap().name, "HomePage");
        assert!(matches!(&call.arguments[0], Argument::Identifier(id) if id.name == "HomePage"));

        // helper import lands after the existing import
        assert!(matches!(&program.body[0], Statement::ImportDeclaration(i) if i.source.value == "react"));
        assert!(matches!(&program.body[1], Statement::ImportDeclaration(i) if i.source.value == TOOLS_MODULE));
    });
}

#[test]
fn named_default_class_is_hoisted_before_export() {
    let out = rewrite(
        "export default class Page extends React.Component {\n  render() { return null; }\n}\n",
        "pages/about.js",
    );

    with_reparsed(&out.code, |program| {
        let (idx, call) = default_export_call(program);
        let Statement::ClassDeclaration(class) = &program.body[idx - 1] else {
            panic!("class not hoisted");
        };
        assert_eq!(class.id.as_ref().unwrap().name, "Page");
        assert!(class.super_class.is_some());
        assert!(matches!(&call.arguments[0], Argument::Identifier(id) if id.name == "Page"));
    });
}

#[test]
fn anonymous_default_function_is_wrapped_in_place() {
    let out = rewrite("export default function () {\n  return null;\n}\n", "pages/index.js");

    with_reparsed(&out.code, |program| {
        assert_eq!(program.body.len(), 2, "import plus export, nothing hoisted");
        let (_, call) = default_export_call(program);
        let Argument::FunctionExpression(func) = &call.arguments[0] else {
            panic!("expected function expression argument");
        };
        assert!(func.id.is_none());
    });
}

#[test]
fn anonymous_default_class_is_wrapped_in_place() {
    let out = rewrite("export default class {\n  render() {}\n}\n", "pages/index.js");

    with_reparsed(&out.code, |program| {
        assert_eq!(program.body.len(), 2);
        let (_, call) = default_export_call(program);
        assert!(matches!(&call.arguments[0], Argument::ClassExpression(c) if c.id.is_none()));
    });
}

#[test]
fn default_identifier_is_wrapped() {
    let out = rewrite(
        "const Page = () => null;\nexport default Page;\n",
        "pages/index.js",
    );
    assert!(out.code.contains("export default _withSuperJSONPage(Page)"));
}

#[test]
fn loader_and_default_export_import_each_helper_once() {
    let out = rewrite(
        r#"
export const getServerSideProps = async () => ({ props: {} });
export const getStaticProps = async () => ({ props: {} });
export default function () {
  return null;
}
"#,
        "pages/index.js",
    );

    with_reparsed(&out.code, |program| {
        let mut imports = helper_imports(program);
        imports.sort();
        assert_eq!(
            imports,
            vec![
                ("withSuperJSONPage".to_string(), "_withSuperJSONPage".to_string()),
                ("withSuperJSONProps".to_string(), "_withSuperJSONProps".to_string()),
            ]
        );
    });
}

#[test]
fn helper_locals_avoid_existing_bindings() {
    let out = rewrite(
        "const _withSuperJSONPage = 1;\nconst Page = () => _withSuperJSONPage;\nexport default Page;\n",
        "pages/index.js",
    );
    assert!(out.code.contains("withSuperJSONPage as _withSuperJSONPage2"));
    assert!(out.code.contains("export default _withSuperJSONPage2(Page)"));
}

#[test]
fn js_page_with_jsx_is_rewritten() {
    let source = "export const getStaticProps = () => ({ props: {} });\n\nexport default function Home() {\n  return <main />;\n}\n";
    let out = rewrite(source, "pages/index.js");
    assert!(out.modified);
    assert!(out.code.contains("<main />"));

    with_reparsed(&out.code, |program| {
        let (idx, call) = default_export_call(program);
        assert!(matches!(&call.arguments[0], Argument::Identifier(ident) if ident.name == "Home"));
        assert!(matches!(
            &program.body[idx - 1],
            Statement::FunctionDeclaration(func) if func.id.as_ref().is_some_and(|id| id.name == "Home")
        ));
        assert_eq!(helper_imports(program).len(), 2);
    });
}

#[test]
fn api_routes_and_scaffolding_are_returned_verbatim() {
    let source = "export default  function handler(req,res){ res.end() }\nexport const getStaticProps=()=>({props:{}})\n";
    for filename in [
        "pages/api/hello.js",
        "pages/_app.js",
        "pages/_document.tsx",
        "pages/_error.jsx",
        "pages/api-v2/users.js",
        "pages/my_app.js",
        "components/Nav.js",
    ] {
        let out = rewrite(source, filename);
        assert!(!out.modified, "{filename} should be skipped");
        assert_eq!(out.code, source, "{filename} should be byte-identical");
    }
}

#[test]
fn uninitialized_loader_is_left_alone() {
    let source = "export let getStaticProps;\n";
    let out = rewrite(source, "pages/index.js");
    assert!(!out.modified);
    assert_eq!(out.code, source);
}

#[test]
fn unsupported_default_export_is_left_alone() {
    let source = "export default connect(mapState)(Page);\n";
    let out = rewrite(source, "pages/index.js");
    assert!(!out.modified);
    assert_eq!(out.code, source);
}

#[test]
fn cwd_is_stripped_before_classification() {
    let allocator = Allocator::default();
    let source = "export default function Home() { return null; }";
    let ctx = TransformContext::for_file(native("/project/pages/index.tsx")).with_cwd(native("/project"));
    let out = transform(&allocator, source, &ctx, FormatOptions::default()).unwrap();
    assert!(out.modified);
}

#[test]
fn unknown_filename_is_treated_as_a_page() {
    let allocator = Allocator::default();
    let source = "export default function Home() { return <main />; }";
    let out = transform(&allocator, source, &TransformContext::default(), FormatOptions::default())
        .unwrap();
    assert!(out.modified);
    assert!(out.code.contains("_withSuperJSONPage(Home)"));
}

#[test]
fn rerunning_wraps_loaders_again() {
    let source = "export function getStaticProps() { return { props: {} }; }";
    let once = rewrite(source, "pages/index.js");
    let twice = rewrite(&once.code, "pages/index.js");
    assert!(twice.modified);
    assert!(twice.code.contains("_withSuperJSONProps2(_withSuperJSONProps("));
}

#[test]
fn wrapped_default_export_is_not_wrapped_twice() {
    let once = rewrite("export default function Home() { return null; }", "pages/index.js");
    let twice = rewrite(&once.code, "pages/index.js");
    assert!(!twice.modified);
    assert_eq!(twice.code, once.code);
}
