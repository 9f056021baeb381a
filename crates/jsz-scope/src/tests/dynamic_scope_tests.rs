//! Tests for `with`/`eval` detection.

use super::*;
use jsz_ast::{AstBuilder, VarKind};

#[test]
fn test_direct_eval_call_is_detected() {
    let mut b = AstBuilder::new();
    let eval = b.ident("eval");
    let code = b.string("x");
    let call = b.call(eval, vec![code]);
    let stmt = b.expr_stmt(call);
    let arena = b.finish();

    assert!(contains_dynamic_scope(&arena, stmt));
}

#[test]
fn test_eval_as_member_or_value_is_not_detected() {
    // obj.eval("x"); var f = eval;
    let mut b = AstBuilder::new();
    let obj = b.ident("obj");
    let member = b.ident("eval");
    let access = b.member(obj, member);
    let code = b.string("x");
    let call = b.call(access, vec![code]);
    let call_stmt = b.expr_stmt(call);
    let f = b.ident("f");
    let eval_ref = b.ident("eval");
    let var_f = b.var_decl(VarKind::Var, f, eval_ref);
    let root = b.source_file(vec![call_stmt, var_f]);
    let arena = b.finish();

    assert!(
        !contains_dynamic_scope(&arena, root),
        "only calls whose callee is the bare identifier count"
    );
}

#[test]
fn test_with_statement_is_detected_through_nested_functions() {
    // function outer() { function inner() { with (o) {} } }
    let mut b = AstBuilder::new();
    let o = b.ident("o");
    let body = b.block(vec![]);
    let with = b.with_stmt(o, body);
    let inner_name = b.ident("inner");
    let inner_body = b.block(vec![with]);
    let inner = b.function_declaration(inner_name, vec![], inner_body);
    let outer_name = b.ident("outer");
    let outer_body = b.block(vec![inner]);
    let outer = b.function_declaration(outer_name, vec![], outer_body);
    let arena = b.finish();

    assert!(function_uses_dynamic_scope(&arena, outer));
    assert!(function_uses_dynamic_scope(&arena, inner));
}

#[test]
fn test_eval_in_parameter_default_is_detected() {
    // function f(a = eval("1")) {}
    let mut b = AstBuilder::new();
    let a = b.ident("a");
    let eval = b.ident("eval");
    let one = b.string("1");
    let call = b.call(eval, vec![one]);
    let param = b.param_with_default(a, call);
    let name = b.ident("f");
    let body = b.block(vec![]);
    let func = b.function_declaration(name, vec![param], body);
    let arena = b.finish();

    assert!(function_uses_dynamic_scope(&arena, func));
}

#[test]
fn test_clean_function_passes_guard() {
    let mut b = AstBuilder::new();
    let x = b.ident("x");
    let ret = b.return_stmt(x);
    let body = b.block(vec![ret]);
    let px = b.ident("x");
    let param = b.param(px);
    let arrow = b.arrow(vec![param], body);
    let arena = b.finish();

    assert!(!function_uses_dynamic_scope(&arena, arrow));
    assert!(
        !function_uses_dynamic_scope(&arena, x),
        "non-functions never trip the function guard"
    );
}
