//! Free-name conflicts recorded per rename slot.

mod common;

use common::{analyze, global_names};
use jsz_ast::{AstBuilder, NodeIndex, VarKind};
use jsz_scope::def_of_use;

#[test]
fn test_free_name_conflicts_with_shadowed_slots() {
    // var x; function f() { var x; return free; }
    let mut b = AstBuilder::new();
    let outer_x = b.ident("x");
    let var_outer = b.var_decl(VarKind::Var, outer_x, NodeIndex::NONE);
    let f = b.ident("f");
    let inner_x = b.ident("x");
    let var_inner = b.var_decl(VarKind::Var, inner_x, NodeIndex::NONE);
    let free = b.ident("free");
    let ret = b.return_stmt(free);
    let body = b.block(vec![var_inner, ret]);
    let func = b.function_declaration(f, vec![], body);
    let root = b.source_file(vec![var_outer, func]);
    let arena = b.finish();

    let info = analyze(&arena, root);
    assert_ne!(
        def_of_use(&info, outer_x).slot_id,
        def_of_use(&info, inner_x).slot_id
    );
    for slot in 0..3 {
        assert_eq!(global_names(&info, slot), vec!["free"], "slot {slot}");
    }
}

#[test]
fn test_released_slots_do_not_collect_later_names() {
    // function f(a) {} free;
    let mut b = AstBuilder::new();
    let f = b.ident("f");
    let a = b.ident("a");
    let pa = b.param(a);
    let body = b.block(vec![]);
    let func = b.function_declaration(f, vec![pa], body);
    let free = b.ident("free");
    let stmt = b.expr_stmt(free);
    let root = b.source_file(vec![func, stmt]);
    let arena = b.finish();

    let info = analyze(&arena, root);
    assert_eq!(def_of_use(&info, a).slot_id.0, 1);
    assert_eq!(global_names(&info, 0), vec!["free"]);
    assert!(global_names(&info, 1).is_empty());
}

#[test]
fn test_repeated_free_name_is_recorded_once() {
    // var a; b; b;
    let mut b = AstBuilder::new();
    let a = b.ident("a");
    let var_a = b.var_decl(VarKind::Var, a, NodeIndex::NONE);
    let first = b.ident("b");
    let s1 = b.expr_stmt(first);
    let second = b.ident("b");
    let s2 = b.expr_stmt(second);
    let root = b.source_file(vec![var_a, s1, s2]);
    let arena = b.finish();

    let info = analyze(&arena, root);
    assert_eq!(info.globals().len(), 1);
    assert_eq!(global_names(&info, 0), vec!["b"]);
}

#[test]
fn test_reused_slot_accumulates_conflicts_of_every_occupant() {
    // function f(a) { g1; } function h(c) { g2; }
    let mut b = AstBuilder::new();
    let f = b.ident("f");
    let a = b.ident("a");
    let pa = b.param(a);
    let g1 = b.ident("g1");
    let s1 = b.expr_stmt(g1);
    let f_body = b.block(vec![s1]);
    let f_fn = b.function_declaration(f, vec![pa], f_body);
    let h = b.ident("h");
    let c = b.ident("c");
    let pc = b.param(c);
    let g2 = b.ident("g2");
    let s2 = b.expr_stmt(g2);
    let h_body = b.block(vec![s2]);
    let h_fn = b.function_declaration(h, vec![pc], h_body);
    let root = b.source_file(vec![f_fn, h_fn]);
    let arena = b.finish();

    let info = analyze(&arena, root);
    let shared = def_of_use(&info, a).slot_id;
    assert_eq!(def_of_use(&info, c).slot_id, shared);
    assert_eq!(global_names(&info, shared.0), vec!["g1", "g2"]);
    assert_eq!(global_names(&info, 0), vec!["g1", "g2"]);
    assert_eq!(global_names(&info, 1), vec!["g1", "g2"]);
}

#[test]
fn test_nested_functions_raise_high_water_mark() {
    // function a(p) { function b(q) { function c(r) {} } }
    let mut b = AstBuilder::new();
    let a = b.ident("a");
    let p = b.ident("p");
    let pp = b.param(p);
    let bn = b.ident("b");
    let q = b.ident("q");
    let pq = b.param(q);
    let c = b.ident("c");
    let r = b.ident("r");
    let pr = b.param(r);
    let c_body = b.block(vec![]);
    let c_fn = b.function_declaration(c, vec![pr], c_body);
    let b_body = b.block(vec![c_fn]);
    let b_fn = b.function_declaration(bn, vec![pq], b_body);
    let a_body = b.block(vec![b_fn]);
    let a_fn = b.function_declaration(a, vec![pp], a_body);
    let root = b.source_file(vec![a_fn]);
    let arena = b.finish();

    let info = analyze(&arena, root);
    assert_eq!(info.max_distinct(), 6);
    assert_eq!(def_of_use(&info, r).slot_id.0, 5);
    assert!(info.globals().is_empty());
}
