//! Detection of `with` statements and direct `eval` calls.
//!
//! Either construct can introduce or observe names the static walk cannot
//! see, so a function containing one anywhere below it (nested functions
//! included) is left out of the analysis entirely.

use jsz_ast::{NodeAccess, NodeArena, NodeIndex, SyntaxKind};

/// Whether the subtree rooted at `node` contains a `with` statement or a call
/// whose callee is the bare identifier `eval`.
pub fn contains_dynamic_scope(arena: &NodeArena, node: NodeIndex) -> bool {
    let Some(n) = arena.get(node) else {
        return false;
    };
    match n.kind {
        SyntaxKind::WithStatement => return true,
        SyntaxKind::CallExpression => {
            if let Some(call) = arena.get_call_expr(n)
                && arena.get_identifier_text(call.expression) == Some("eval")
            {
                return true;
            }
        }
        _ => {}
    }
    arena
        .get_children(node)
        .into_iter()
        .any(|child| contains_dynamic_scope(arena, child))
}

/// Guard for a function-like node: checks its parameters and body.
pub fn function_uses_dynamic_scope(arena: &NodeArena, func: NodeIndex) -> bool {
    let Some((parameters, body)) = arena.get_function_parts(func) else {
        return false;
    };
    parameters
        .iter()
        .any(|&param| contains_dynamic_scope(arena, param))
        || contains_dynamic_scope(arena, body)
}

#[cfg(test)]
#[path = "tests/dynamic_scope_tests.rs"]
mod tests;
