//! Result of a scope analysis: definitions, uses, conflicts and scope tree.

use jsz_ast::NodeIndex;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Identifier of a scope instantiated during the walk.
///
/// Ids are assigned in pre-order starting at `ScopeId::ROOT`, which is the
/// program scope unless the root is reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ScopeId(pub u32);

impl ScopeId {
    pub const ROOT: ScopeId = ScopeId(0);
    /// No enclosing scope (the context before the first push).
    pub const NONE: ScopeId = ScopeId(u32::MAX);

    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == u32::MAX
    }
}

/// A rename slot. Two definitions share a slot only if their lifetimes never overlap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SlotId(pub u32);

/// A binding: where it is declared, which scope owns it and which slot it renames into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Def {
    pub binding_loc: NodeIndex,
    pub scope_id: ScopeId,
    pub slot_id: SlotId,
}

/// Problems found by `Info::validate`.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// An occurrence resolves to a definition whose binding site does not resolve to it
    UnboundDefinition {
        node_index: NodeIndex,
        binding_loc: NodeIndex,
    },
    /// A scope's parent was never allocated
    DanglingScopeParent { scope_id: ScopeId, parent_id: ScopeId },
    /// A scope parent link does not point to an earlier scope
    ScopeCycle { scope_id: ScopeId, parent_id: ScopeId },
    /// A slot id at or above the reported high-water mark
    SlotOutOfRange { slot_id: SlotId, max_distinct: u32 },
}

/// Frozen output of `analyze`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Info {
    pub(crate) locals: BTreeMap<NodeIndex, Def>,
    pub(crate) globals: BTreeMap<SlotId, BTreeSet<String>>,
    pub(crate) scopes: BTreeMap<ScopeId, ScopeId>,
    pub(crate) max_distinct: u32,
    pub(crate) scope_count: u32,
}

impl Info {
    pub(crate) fn new() -> Info {
        Info::default()
    }

    /// Every identifier occurrence mapped to the definition it resolves to.
    #[inline]
    pub fn locals(&self) -> &BTreeMap<NodeIndex, Def> {
        &self.locals
    }

    /// Free names observed while each slot was live.
    #[inline]
    pub fn globals(&self) -> &BTreeMap<SlotId, BTreeSet<String>> {
        &self.globals
    }

    /// Child scope to parent scope, for every scope that has a parent.
    #[inline]
    pub fn scopes(&self) -> &BTreeMap<ScopeId, ScopeId> {
        &self.scopes
    }

    /// Most slots ever live at the same time.
    #[inline]
    pub fn max_distinct(&self) -> u32 {
        self.max_distinct
    }

    /// Number of scope ids handed out, the root included.
    #[inline]
    pub fn scope_count(&self) -> u32 {
        self.scope_count
    }

    #[inline]
    pub fn parent_of(&self, scope_id: ScopeId) -> Option<ScopeId> {
        self.scopes.get(&scope_id).copied()
    }

    /// Render as JSON for external tooling.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub(crate) fn record_use(&mut self, loc: NodeIndex, def: Def) {
        self.locals.insert(loc, def);
    }

    #[inline]
    pub(crate) fn is_recorded(&self, loc: NodeIndex) -> bool {
        self.locals.contains_key(&loc)
    }

    pub(crate) fn add_global(&mut self, slot_id: SlotId, name: &str) {
        let names = self.globals.entry(slot_id).or_default();
        if !names.contains(name) {
            names.insert(name.to_owned());
        }
    }

    pub(crate) fn record_scope(&mut self, scope_id: ScopeId, parent_id: ScopeId) {
        self.scopes.insert(scope_id, parent_id);
    }

    /// Check the structural invariants of a completed analysis.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        for (&node_index, def) in &self.locals {
            if self.locals.get(&def.binding_loc) != Some(def) {
                errors.push(ValidationError::UnboundDefinition {
                    node_index,
                    binding_loc: def.binding_loc,
                });
            }
            if def.slot_id.0 >= self.max_distinct {
                errors.push(ValidationError::SlotOutOfRange {
                    slot_id: def.slot_id,
                    max_distinct: self.max_distinct,
                });
            }
        }

        for (&scope_id, &parent_id) in &self.scopes {
            if parent_id.0 >= self.scope_count {
                errors.push(ValidationError::DanglingScopeParent {
                    scope_id,
                    parent_id,
                });
            } else if parent_id >= scope_id {
                errors.push(ValidationError::ScopeCycle {
                    scope_id,
                    parent_id,
                });
            }
        }

        for &slot_id in self.globals.keys() {
            if slot_id.0 >= self.max_distinct {
                errors.push(ValidationError::SlotOutOfRange {
                    slot_id,
                    max_distinct: self.max_distinct,
                });
            }
        }

        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}
