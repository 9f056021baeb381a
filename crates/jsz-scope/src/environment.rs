//! Layered name environment for the scope walk.
//!
//! Each pushed scope adds a layer on top of its parent's environment. Layers
//! are reference counted so that saving and restoring the environment around
//! a scope is a pointer copy.

use crate::info::{Def, SlotId};
use jsz_common::Atom;
use rustc_hash::FxHashMap;
use std::rc::Rc;

#[derive(Debug, Default)]
pub struct Environment {
    parent: Option<Rc<Environment>>,
    bindings: FxHashMap<Atom, Def>,
}

impl Environment {
    /// The empty environment outside every scope.
    pub fn root() -> Rc<Environment> {
        Rc::new(Environment::default())
    }

    /// A new layer whose bindings shadow `parent`.
    pub fn extend(parent: &Rc<Environment>, bindings: FxHashMap<Atom, Def>) -> Rc<Environment> {
        Rc::new(Environment {
            parent: Some(Rc::clone(parent)),
            bindings,
        })
    }

    /// Innermost definition of `name`.
    pub fn lookup(&self, name: Atom) -> Option<Def> {
        let mut layer = Some(self);
        while let Some(env) = layer {
            if let Some(&def) = env.bindings.get(&name) {
                return Some(def);
            }
            layer = env.parent.as_deref();
        }
        None
    }

    /// Slots of every definition in the chain, shadowed ones included.
    pub fn live_slots(&self) -> impl Iterator<Item = SlotId> + '_ {
        std::iter::successors(Some(self), |env| env.parent.as_deref())
            .flat_map(|env| env.bindings.values().map(|def| def.slot_id))
    }
}

#[cfg(test)]
#[path = "tests/environment_tests.rs"]
mod tests;
