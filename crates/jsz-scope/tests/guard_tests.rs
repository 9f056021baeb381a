//! Functions containing `with` or a direct `eval` are left unanalyzed.

mod common;

use common::{analyze, assert_def_use_consistent, global_names};
use jsz_ast::{AstBuilder, NodeIndex, VarKind};
use jsz_scope::{def_of_use, use_is_def};

#[test]
fn test_function_with_with_statement_is_skipped() {
    // var o; function f() { with (o) { x = 1; } } o;
    let mut b = AstBuilder::new();
    let o = b.ident("o");
    let var_o = b.var_decl(VarKind::Var, o, NodeIndex::NONE);
    let f = b.ident("f");
    let o_inner = b.ident("o");
    let x = b.ident("x");
    let one = b.number("1");
    let assign = b.assign(x, one);
    let assign_stmt = b.expr_stmt(assign);
    let with_body = b.block(vec![assign_stmt]);
    let with = b.with_stmt(o_inner, with_body);
    let body = b.block(vec![with]);
    let func = b.function_declaration(f, vec![], body);
    let o_after = b.ident("o");
    let stmt = b.expr_stmt(o_after);
    let root = b.source_file(vec![var_o, func, stmt]);
    let arena = b.finish();

    let info = analyze(&arena, root);
    assert_eq!(info.scope_count(), 1, "no scope is created for f");
    assert!(info.globals().is_empty());
    assert!(!info.locals().contains_key(&o_inner));
    assert!(!info.locals().contains_key(&x));
    assert!(use_is_def(&info, f), "f itself is still declared");
    assert_eq!(def_of_use(&info, o_after), def_of_use(&info, o));
    assert_eq!(info.max_distinct(), 2);
}

#[test]
fn test_nested_eval_disables_every_enclosing_function() {
    // function outer() { function inner() { eval("x"); } } function sibling(s) { s; }
    let mut b = AstBuilder::new();
    let outer = b.ident("outer");
    let inner = b.ident("inner");
    let eval = b.ident("eval");
    let src = b.string("x");
    let call = b.call(eval, vec![src]);
    let call_stmt = b.expr_stmt(call);
    let inner_body = b.block(vec![call_stmt]);
    let inner_fn = b.function_declaration(inner, vec![], inner_body);
    let outer_body = b.block(vec![inner_fn]);
    let outer_fn = b.function_declaration(outer, vec![], outer_body);
    let sibling = b.ident("sibling");
    let s = b.ident("s");
    let ps = b.param(s);
    let s_use = b.ident("s");
    let s_stmt = b.expr_stmt(s_use);
    let sibling_body = b.block(vec![s_stmt]);
    let sibling_fn = b.function_declaration(sibling, vec![ps], sibling_body);
    let root = b.source_file(vec![outer_fn, sibling_fn]);
    let arena = b.finish();

    let info = analyze(&arena, root);
    assert!(!info.locals().contains_key(&inner));
    assert!(!info.locals().contains_key(&eval));
    assert_eq!(def_of_use(&info, s_use), def_of_use(&info, s));
    assert_eq!(info.scope_count(), 2, "program and sibling");
    assert_def_use_consistent(&info);
}

#[test]
fn test_named_function_expression_with_eval_leaves_name_unbound() {
    // var h = function named() { eval("1"); };
    let mut b = AstBuilder::new();
    let h = b.ident("h");
    let named = b.ident("named");
    let eval = b.ident("eval");
    let src = b.string("1");
    let call = b.call(eval, vec![src]);
    let call_stmt = b.expr_stmt(call);
    let body = b.block(vec![call_stmt]);
    let func = b.function_expression(named, vec![], body);
    let var_h = b.var_decl(VarKind::Var, h, func);
    let root = b.source_file(vec![var_h]);
    let arena = b.finish();

    let info = analyze(&arena, root);
    assert!(use_is_def(&info, h));
    assert!(!info.locals().contains_key(&named));
    assert_eq!(info.scope_count(), 1);
    assert_eq!(info.max_distinct(), 1);
}

#[test]
fn test_eval_as_member_call_is_not_dynamic() {
    // function f(obj) { obj.eval(); }
    let mut b = AstBuilder::new();
    let f = b.ident("f");
    let obj = b.ident("obj");
    let pobj = b.param(obj);
    let obj_use = b.ident("obj");
    let eval = b.ident("eval");
    let access = b.member(obj_use, eval);
    let call = b.call(access, vec![]);
    let call_stmt = b.expr_stmt(call);
    let body = b.block(vec![call_stmt]);
    let func = b.function_declaration(f, vec![pobj], body);
    let root = b.source_file(vec![func]);
    let arena = b.finish();

    let info = analyze(&arena, root);
    assert_eq!(def_of_use(&info, obj_use), def_of_use(&info, obj));
    assert!(!info.locals().contains_key(&eval));
    assert_eq!(info.scope_count(), 2);
}

#[test]
fn test_class_expression_with_eval_keeps_name_unrecorded() {
    // var C = class Named { m() { eval("1"); } field = Named; };
    let mut b = AstBuilder::new();
    let c = b.ident("C");
    let named = b.ident("Named");
    let m = b.ident("m");
    let eval = b.ident("eval");
    let src = b.string("1");
    let call = b.call(eval, vec![src]);
    let call_stmt = b.expr_stmt(call);
    let m_body = b.block(vec![call_stmt]);
    let method = b.method(m, vec![], m_body);
    let field = b.ident("field");
    let named_use = b.ident("Named");
    let prop = b.property_decl(field, named_use);
    let class = b.class_expression(named, NodeIndex::NONE, vec![method, prop]);
    let var_c = b.var_decl(VarKind::Var, c, class);
    let root = b.source_file(vec![var_c]);
    let arena = b.finish();

    let info = analyze(&arena, root);
    assert!(!info.locals().contains_key(&named));
    assert!(!info.locals().contains_key(&named_use));
    assert!(!info.locals().contains_key(&eval), "the method itself is skipped");
    assert_eq!(global_names(&info, 0), vec!["Named"]);
    assert_eq!(info.scope_count(), 1);
}

#[test]
fn test_walk_resumes_cleanly_after_skipped_function() {
    // function a(x) { with (x) {} } function b(y) { y; }
    let mut b = AstBuilder::new();
    let a = b.ident("a");
    let x = b.ident("x");
    let px = b.param(x);
    let x_use = b.ident("x");
    let with_body = b.block(vec![]);
    let with = b.with_stmt(x_use, with_body);
    let a_body = b.block(vec![with]);
    let a_fn = b.function_declaration(a, vec![px], a_body);
    let bn = b.ident("b");
    let y = b.ident("y");
    let py = b.param(y);
    let y_use = b.ident("y");
    let y_stmt = b.expr_stmt(y_use);
    let b_body = b.block(vec![y_stmt]);
    let b_fn = b.function_declaration(bn, vec![py], b_body);
    let root = b.source_file(vec![a_fn, b_fn]);
    let arena = b.finish();

    let info = analyze(&arena, root);
    assert!(!info.locals().contains_key(&x));
    let y_def = def_of_use(&info, y);
    assert_eq!(y_def.slot_id.0, 2);
    assert_eq!(y_def.scope_id.0, 1, "the skipped function consumed no scope id");
    assert_eq!(def_of_use(&info, y_use), y_def);
    assert_eq!(info.max_distinct(), 3);
}

#[test]
fn test_program_level_with_is_walked() {
    // var o; with (o) { y; }
    let mut b = AstBuilder::new();
    let o = b.ident("o");
    let var_o = b.var_decl(VarKind::Var, o, NodeIndex::NONE);
    let o_use = b.ident("o");
    let y = b.ident("y");
    let y_stmt = b.expr_stmt(y);
    let with_body = b.block(vec![y_stmt]);
    let with = b.with_stmt(o_use, with_body);
    let root = b.source_file(vec![var_o, with]);
    let arena = b.finish();

    let info = analyze(&arena, root);
    assert_eq!(def_of_use(&info, o_use), def_of_use(&info, o));
    assert_eq!(global_names(&info, 0), vec!["y"]);
}
