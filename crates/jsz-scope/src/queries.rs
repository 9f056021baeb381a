//! Def/use queries over a completed `Info`.
//!
//! All functions are read-only; results are ordered by node index.

use crate::info::{Def, Info, ScopeId, SlotId};
use jsz_ast::NodeIndex;
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;
use std::fmt;

static NO_GLOBALS: BTreeSet<String> = BTreeSet::new();

/// Error returned by fallible queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryError {
    /// The location was never recorded as an identifier occurrence.
    UnknownOccurrence(NodeIndex),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::UnknownOccurrence(loc) => write!(f, "unknown occurrence {loc:?}"),
        }
    }
}

impl std::error::Error for QueryError {}

/// Every recorded occurrence, binding sites included.
pub fn all_uses(info: &Info) -> Vec<NodeIndex> {
    info.locals().keys().copied().collect()
}

pub fn try_def_of_use(info: &Info, loc: NodeIndex) -> Result<Def, QueryError> {
    info.locals()
        .get(&loc)
        .copied()
        .ok_or(QueryError::UnknownOccurrence(loc))
}

/// Definition an occurrence resolves to.
///
/// # Panics
///
/// Panics with "unknown occurrence" if `loc` was never recorded. Locations
/// obtained from the same `Info` are always recorded.
pub fn def_of_use(info: &Info, loc: NodeIndex) -> Def {
    match try_def_of_use(info, loc) {
        Ok(def) => def,
        Err(err) => panic!("{err}"),
    }
}

/// Whether `loc` is the binding site of its definition.
pub fn use_is_def(info: &Info, loc: NodeIndex) -> bool {
    info.locals()
        .get(&loc)
        .is_some_and(|def| def.binding_loc == loc)
}

/// Occurrences resolving to `def`, optionally without the binding site itself.
pub fn uses_of_def(info: &Info, def: Def, exclude_def: bool) -> Vec<NodeIndex> {
    info.locals()
        .iter()
        .filter(|&(&loc, d)| *d == def && !(exclude_def && loc == def.binding_loc))
        .map(|(&loc, _)| loc)
        .collect()
}

/// Occurrences sharing a definition with `loc`.
///
/// # Panics
///
/// Panics like `def_of_use` if `loc` was never recorded.
pub fn uses_of_use(info: &Info, loc: NodeIndex, exclude_def: bool) -> Vec<NodeIndex> {
    uses_of_def(info, def_of_use(info, loc), exclude_def)
}

/// True when nothing but the binding site resolves to `def`.
pub fn def_is_unused(info: &Info, def: Def) -> bool {
    !info
        .locals()
        .iter()
        .any(|(&loc, d)| *d == def && loc != def.binding_loc)
}

/// Every definition, ordered by binding site.
pub fn all_defs(info: &Info) -> Vec<Def> {
    info.locals()
        .iter()
        .filter(|&(&loc, def)| loc == def.binding_loc)
        .map(|(_, &def)| def)
        .collect()
}

pub fn defs_of_scope(info: &Info, scope_id: ScopeId) -> Vec<Def> {
    all_defs(info)
        .into_iter()
        .filter(|def| def.scope_id == scope_id)
        .collect()
}

/// Free names that must not be chosen when renaming into `slot_id`.
pub fn globals_of_slot(info: &Info, slot_id: SlotId) -> &BTreeSet<String> {
    info.globals().get(&slot_id).unwrap_or(&NO_GLOBALS)
}

/// Definitions that no other occurrence resolves to.
pub fn unused_defs(info: &Info) -> Vec<Def> {
    let used: FxHashSet<Def> = info
        .locals()
        .iter()
        .filter(|&(&loc, def)| loc != def.binding_loc)
        .map(|(_, &def)| def)
        .collect();
    all_defs(info)
        .into_iter()
        .filter(|def| !used.contains(def))
        .collect()
}

#[cfg(test)]
#[path = "tests/queries_tests.rs"]
mod tests;
