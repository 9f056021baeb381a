//! Static scope and binding analysis for JavaScript minification.
//!
//! `analyze` walks a syntax tree once and produces an [`Info`]: for every
//! identifier occurrence the definition it resolves to, the rename slot each
//! definition may use, the free names that collide with each slot, and the
//! parent of every scope. Functions that contain `with` or a direct `eval`
//! are left out, since their names cannot be resolved statically.
//!
//! ```ignore
//! let info = jsz_scope::analyze_source_file(&arena, root);
//! for def in jsz_scope::unused_defs(&info) {
//!     println!("unused binding at {:?}", def.binding_loc);
//! }
//! ```

use jsz_ast::{NodeArena, NodeIndex};
use jsz_hoist::{BindingHoister, DeclarationHoister};

pub mod dynamic_scope;
pub mod environment;
pub mod info;
pub mod queries;
pub mod slots;
mod walker;

pub use info::{Def, Info, ScopeId, SlotId, ValidationError};
pub use queries::{
    QueryError, all_defs, all_uses, def_is_unused, def_of_use, defs_of_scope, globals_of_slot,
    try_def_of_use, unused_defs, use_is_def, uses_of_def, uses_of_use,
};

use walker::ScopeWalker;

/// Options for `analyze`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnalyzeOptions {
    /// Walk `root` directly instead of pushing a program scope for it. Names
    /// declared at the top level stay free and the first scopes pushed below
    /// `root` are parentless.
    pub reuse_root_scope: bool,
}

/// Analyze the tree rooted at `root`.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(root = root.0, reuse_root_scope = options.reuse_root_scope)
)]
pub fn analyze<H>(arena: &NodeArena, root: NodeIndex, hoister: &H, options: AnalyzeOptions) -> Info
where
    H: BindingHoister + ?Sized,
{
    let mut walker = ScopeWalker::new(arena, hoister);
    if options.reuse_root_scope {
        walker.walk_reusing_root(root);
    } else {
        walker.walk_program(root);
    }
    let info = walker.finish();
    tracing::debug!(
        locals = info.locals().len(),
        scopes = info.scope_count(),
        max_distinct = info.max_distinct(),
        "scope analysis complete"
    );
    info
}

/// Analyze a whole program with the default hoisting rules.
pub fn analyze_source_file(arena: &NodeArena, root: NodeIndex) -> Info {
    analyze(
        arena,
        root,
        &DeclarationHoister::default(),
        AnalyzeOptions::default(),
    )
}
