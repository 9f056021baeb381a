//! Binding hoisting for the jsz scope analyzer.
//!
//! A scope walk asks a `BindingHoister` which names a scope-introducing node
//! declares before it descends into that node. The answer depends on the
//! policy: a full hoist covers everything a function or program body makes
//! visible from its first statement, a lexical hoist covers only the
//! block-scoped declarations directly inside a block, case block or loop
//! header.

use jsz_ast::{NodeArena, NodeIndex};
use jsz_common::Atom;
use smallvec::SmallVec;

pub mod collect;
pub use collect::DeclarationHoister;

/// Which declarations a hoist request should report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HoistPolicy {
    /// Function or program scope: parameters, `var`s at any depth, direct
    /// function, class, `let` and `const` declarations.
    Full,
    /// Block scope: direct `let`, `const`, class and function declarations.
    Lexical,
}

/// Binding sites in declaration order, as `(identifier node, name)`.
pub type BindingList = SmallVec<[(NodeIndex, Atom); 8]>;

/// Result of one hoist request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoistedBindings {
    pub bindings: BindingList,
    /// Identifier catch parameters that must not get their own scope because
    /// the catch body re-declares the same name.
    pub invalidated_catch_params: Vec<NodeIndex>,
}

impl HoistedBindings {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// A single binding, used for catch parameters and function expression names.
    pub fn singleton(loc: NodeIndex, name: Atom) -> HoistedBindings {
        let mut bindings = BindingList::new();
        bindings.push((loc, name));
        HoistedBindings {
            bindings,
            invalidated_catch_params: Vec::new(),
        }
    }
}

/// Source of the declarations each scope introduces.
pub trait BindingHoister {
    fn hoist(&self, arena: &NodeArena, node: NodeIndex, policy: HoistPolicy) -> HoistedBindings;
}

impl<T: BindingHoister + ?Sized> BindingHoister for &T {
    fn hoist(&self, arena: &NodeArena, node: NodeIndex, policy: HoistPolicy) -> HoistedBindings {
        (**self).hoist(arena, node, policy)
    }
}

/// Configuration for `DeclarationHoister`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoisterOptions {
    /// Hoist function declarations nested in blocks to the enclosing function
    /// (sloppy-mode Annex B). When set, such functions are not also bound in
    /// their block.
    pub annex_b_block_functions: bool,
}

impl HoisterOptions {
    pub fn annex_b() -> HoisterOptions {
        HoisterOptions {
            annex_b_block_functions: true,
        }
    }
}
