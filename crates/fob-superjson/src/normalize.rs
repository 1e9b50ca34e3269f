//! Declaration to expression conversions
//!
//! A function or class can sit in statement position (a declaration) or in
//! value position (an expression). OXC models both with the same node and a
//! type tag, so converting only retags the node: id, params, body, flags,
//! superclass and decorators are carried over untouched.

use oxc_allocator::Box;
use oxc_ast::ast::{Class, ClassType, Expression, Function, FunctionType};

/// `function name(...) {...}` as a function expression
pub fn function_to_expression<'a>(mut func: Box<'a, Function<'a>>) -> Expression<'a> {
    func.r#type = FunctionType::FunctionExpression;
    Expression::FunctionExpression(func)
}

/// `class Name extends Base {...}` as a class expression
pub fn class_to_expression<'a>(mut class: Box<'a, Class<'a>>) -> Expression<'a> {
    class.r#type = ClassType::ClassExpression;
    Expression::ClassExpression(class)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fob_gen::{Allocator, FormatOptions, JsBuilder, ParseOptions, generate, parse};
    use oxc_ast::ast::Statement;

    #[test]
    fn function_keeps_identity_and_flags() {
        let allocator = Allocator::default();
        let source = "async function* load(a, { b }, ...rest) { yield a; }";
        let mut parsed = parse(&allocator, source, ParseOptions::default()).unwrap();
        let Statement::FunctionDeclaration(func) = parsed.ast_mut().body.remove(0) else {
            panic!("expected function declaration");
        };
        let span = func.span;

        let Expression::FunctionExpression(expr) = function_to_expression(func) else {
            panic!("expected function expression");
        };
        assert_eq!(expr.r#type, FunctionType::FunctionExpression);
        assert_eq!(expr.id.as_ref().map(|id| id.name.as_str()), Some("load"));
        assert!(expr.r#async);
        assert!(expr.generator);
        assert_eq!(expr.params.items.len(), 2);
        assert!(expr.params.rest.is_some());
        assert_eq!(expr.body.as_ref().map(|b| b.statements.len()), Some(1));
        assert_eq!(expr.span, span);
    }

    #[test]
    fn anonymous_function_stays_anonymous() {
        let allocator = Allocator::default();
        let mut parsed =
            parse(&allocator, "export default function () {}", ParseOptions::default()).unwrap();
        let Statement::ExportDefaultDeclaration(export) = parsed.ast_mut().body.remove(0) else {
            panic!("expected default export");
        };
        let export = export.unbox();
        let oxc_ast::ast::ExportDefaultDeclarationKind::FunctionDeclaration(func) =
            export.declaration
        else {
            panic!("expected function declaration");
        };

        let Expression::FunctionExpression(expr) = function_to_expression(func) else {
            panic!("expected function expression");
        };
        assert!(expr.id.is_none());
    }

    #[test]
    fn class_keeps_superclass_body_and_decorators() {
        let allocator = Allocator::default();
        let source = "@sealed class Page extends Base { static title = \"x\"; render() {} }";
        let mut parsed = parse(&allocator, source, ParseOptions::tsx()).unwrap();
        let Statement::ClassDeclaration(class) = parsed.ast_mut().body.remove(0) else {
            panic!("expected class declaration");
        };

        let Expression::ClassExpression(expr) = class_to_expression(class) else {
            panic!("expected class expression");
        };
        assert_eq!(expr.r#type, ClassType::ClassExpression);
        assert_eq!(expr.id.as_ref().map(|id| id.name.as_str()), Some("Page"));
        assert!(expr.super_class.is_some());
        assert_eq!(expr.decorators.len(), 1);
        assert_eq!(expr.body.body.len(), 2);
    }

    #[test]
    fn converted_function_prints_as_value() {
        let allocator = Allocator::default();
        let js = JsBuilder::new(&allocator);
        let mut parsed =
            parse(&allocator, "function double(x) { return x * 2; }", ParseOptions::default())
                .unwrap();
        let Statement::FunctionDeclaration(func) = parsed.ast_mut().body.remove(0) else {
            panic!("expected function declaration");
        };
        parsed
            .ast_mut()
            .body
            .push(js.const_decl("twice", function_to_expression(func)));

        let code = generate(parsed.ast(), &FormatOptions::default());
        assert!(code.contains("const twice = function double(x)"));
    }
}
