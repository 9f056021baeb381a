//! Tests for arena accessors and generic child traversal.

use super::*;

#[test]
fn test_node_flags() {
    assert_eq!(node_flags::NONE, 0);
    assert_eq!(node_flags::LET, 1);
    assert_eq!(node_flags::CONST, 2);
    assert_eq!(node_flags::BLOCK_SCOPED, 3);
}

#[test]
fn test_node_index() {
    let index = NodeIndex(0);
    assert!(index.is_some());
    assert!(!index.is_none());

    let none = NodeIndex::NONE;
    assert!(none.is_none());
    assert!(!none.is_some());
    assert_eq!(NodeIndex::default(), NodeIndex::NONE);
    assert_eq!(format!("{none:?}"), "NodeIndex(NONE)");
}

#[test]
fn test_get_none_index_returns_none() {
    let arena = NodeArena::new();
    assert!(arena.get(NodeIndex::NONE).is_none());
    assert!(arena.get(NodeIndex(42)).is_none());
    assert!(!arena.exists(NodeIndex::NONE));
}

#[test]
fn test_accessor_checks_kind() {
    let mut b = AstBuilder::new();
    let x = b.ident("x");
    let stmt = b.expr_stmt(x);
    let arena = b.finish();

    assert!(arena.get_identifier_at(x).is_some());
    assert!(
        arena.get_identifier_at(stmt).is_none(),
        "identifier accessor must reject statement nodes"
    );
    assert!(arena.get_expr_statement_at(stmt).is_some());
    assert_eq!(arena.get_identifier_text(x), Some("x"));
    assert_eq!(arena.get_identifier_text(stmt), None);
}

#[test]
fn test_identifiers_share_atoms() {
    let mut b = AstBuilder::new();
    let first = b.ident("value");
    let second = b.ident("value");
    let other = b.ident("other");
    let arena = b.finish();

    let atom = |idx| arena.get_identifier_at(idx).map(|data| data.atom);
    assert_eq!(atom(first), atom(second));
    assert_ne!(atom(first), atom(other));
}

#[test]
fn test_block_scoped_declaration_list() {
    let mut b = AstBuilder::new();
    let a = b.ident("a");
    let decl_a = b.declarator(a, NodeIndex::NONE);
    let var_list = b.declaration_list(VarKind::Var, vec![decl_a]);
    let c = b.ident("c");
    let decl_c = b.declarator(c, NodeIndex::NONE);
    let const_list = b.declaration_list(VarKind::Const, vec![decl_c]);
    let arena = b.finish();

    assert!(!arena.is_block_scoped_declaration_list(var_list));
    assert!(arena.is_block_scoped_declaration_list(const_list));
    assert!(!arena.is_block_scoped_declaration_list(a));
}

#[test]
fn test_function_parts_cover_functions_and_methods() {
    let mut b = AstBuilder::new();
    let p = b.ident("p");
    let param = b.param(p);
    let body = b.block(vec![]);
    let arrow = b.arrow(vec![param], body);
    let key = b.ident("m");
    let method_body = b.block(vec![]);
    let method = b.method(key, vec![], method_body);
    let arena = b.finish();

    let (params, arrow_body) = arena.get_function_parts(arrow).expect("arrow parts");
    assert_eq!(params.nodes, vec![param]);
    assert_eq!(arrow_body, body);

    let (params, body) = arena.get_function_parts(method).expect("method parts");
    assert!(params.is_empty());
    assert_eq!(body, method_body);

    assert!(arena.get_function_parts(key).is_none());
}

#[test]
fn test_children_of_for_statement_in_source_order() {
    let mut b = AstBuilder::new();
    let i = b.ident("i");
    let zero = b.number("0");
    let decl = b.declarator(i, zero);
    let init = b.declaration_list(VarKind::Let, vec![decl]);
    let cond = b.ident("ok");
    let step = b.ident("step");
    let body = b.block(vec![]);
    let for_stmt = b.for_stmt(init, cond, step, body);
    let arena = b.finish();

    assert_eq!(arena.get_children(for_stmt), vec![init, cond, step, body]);
    assert_eq!(arena.get_children(decl), vec![i, zero]);
}

#[test]
fn test_children_skip_absent_slots() {
    let mut b = AstBuilder::new();
    let cond = b.ident("c");
    let then_stmt = b.empty();
    let if_stmt = b.if_stmt(cond, then_stmt, NodeIndex::NONE);
    let arena = b.finish();

    assert_eq!(arena.get_children(if_stmt), vec![cond, then_stmt]);
}

#[test]
fn test_do_loop_children_put_body_first() {
    let mut b = AstBuilder::new();
    let body = b.block(vec![]);
    let cond = b.ident("again");
    let do_stmt = b.do_stmt(body, cond);
    let arena = b.finish();

    assert_eq!(arena.get_children(do_stmt), vec![body, cond]);
}

#[test]
fn test_labeled_statement_exposes_only_its_body() {
    let mut b = AstBuilder::new();
    let brk = b.break_stmt(Some("outer"));
    let body = b.block(vec![brk]);
    let cond = b.ident("go");
    let loop_stmt = b.while_stmt(cond, body);
    let labeled = b.labeled("outer", loop_stmt);
    let arena = b.finish();

    assert_eq!(arena.get_children(labeled), vec![loop_stmt]);
    assert!(arena.get_children(brk).is_empty());
    let label = arena.get_labeled_statement_at(labeled).expect("label data").label;
    assert_eq!(arena.interner().resolve(label), "outer");
}

#[test]
fn test_property_access_children_include_member_name() {
    let mut b = AstBuilder::new();
    let object = b.ident("obj");
    let name = b.ident("prop");
    let access = b.member(object, name);
    let arena = b.finish();

    assert_eq!(arena.kind(access), Some(SyntaxKind::PropertyAccessExpression));
    assert_eq!(arena.get_children(access), vec![object, name]);
}
