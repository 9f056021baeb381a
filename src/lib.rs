//! jsz: static scope analysis for JavaScript renaming and minification.
//!
//! This package re-exports the workspace crates under one roof:
//!
//! - [`ast`]: the arena AST (`NodeArena`, `NodeIndex`, `AstBuilder`)
//! - [`hoist`]: hoisting policies and the reference `DeclarationHoister`
//! - [`scope`]: the scope walk, `Info` and the def/use queries
//!
//! ```ignore
//! let mut b = jsz::ast::AstBuilder::new();
//! let a = b.ident("a");
//! let stmt = b.var_decl(jsz::ast::VarKind::Var, a, jsz::ast::NodeIndex::NONE);
//! let root = b.source_file(vec![stmt]);
//! let arena = b.finish();
//! let info = jsz::analyze_source_file(&arena, root);
//! assert!(jsz::scope::use_is_def(&info, a));
//! ```

pub use jsz_ast as ast;
pub use jsz_common as common;
pub use jsz_hoist as hoist;
pub use jsz_scope as scope;

pub use jsz_scope::{AnalyzeOptions, Def, Info, ScopeId, SlotId, analyze, analyze_source_file};

// Tracing configuration (text / tree / json output)
pub mod tracing_config;

/// Analyze `root` with the reference hoister and `options`, rendering the
/// result as JSON.
pub fn analyze_to_json(
    arena: &ast::NodeArena,
    root: ast::NodeIndex,
    options: AnalyzeOptions,
) -> serde_json::Result<String> {
    let hoister = hoist::DeclarationHoister::default();
    let info = analyze(arena, root, &hoister, options);
    tracing::debug!(
        defs = scope::all_defs(&info).len(),
        max_distinct = info.max_distinct(),
        "rendering analysis"
    );
    info.to_json()
}
