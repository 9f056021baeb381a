//! Shared helpers for the scope analysis integration tests.

#![allow(dead_code)]

use jsz_ast::{NodeArena, NodeIndex};
use jsz_scope::{Info, all_defs, all_uses, def_is_unused, def_of_use, use_is_def, uses_of_def};

/// Route walker logs to the test output when `RUST_LOG` is set.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn analyze(arena: &NodeArena, root: NodeIndex) -> Info {
    init_tracing();
    jsz_scope::analyze_source_file(arena, root)
}

/// Names recorded as conflicts for `slot`, sorted.
pub fn global_names(info: &Info, slot: u32) -> Vec<String> {
    jsz_scope::globals_of_slot(info, jsz_scope::SlotId(slot))
        .iter()
        .cloned()
        .collect()
}

/// Def/use consistency that must hold for every analysis result.
pub fn assert_def_use_consistent(info: &Info) {
    for loc in all_uses(info) {
        let def = def_of_use(info, loc);
        assert!(
            use_is_def(info, def.binding_loc),
            "binding site of {loc:?} does not resolve to itself"
        );
    }
    for def in all_defs(info) {
        let uses = uses_of_def(info, def, true);
        assert!(
            !uses.contains(&def.binding_loc),
            "excluded binding site returned for {def:?}"
        );
        assert_eq!(
            def_is_unused(info, def),
            uses.is_empty(),
            "unused flag disagrees with uses for {def:?}"
        );
    }
    assert_eq!(info.validate(), Vec::new());
}
