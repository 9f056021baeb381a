//! The scope walk.
//!
//! A depth-first traversal that instantiates a scope at every
//! scope-introducing construct, resolves each identifier occurrence against
//! the live environment and records the outcome in an `Info`.
//!
//! All traversal state lives in `ScopeContext`. `with_scope` derives a new
//! context for the duration of a closure and restores the saved one (and the
//! slot counter) afterwards, so every exit path leaves the walker as it found
//! it.

use crate::dynamic_scope::{contains_dynamic_scope, function_uses_dynamic_scope};
use crate::environment::Environment;
use crate::info::{Def, Info, ScopeId};
use crate::slots::SlotAllocator;
use jsz_ast::{NodeAccess, NodeArena, NodeIndex, SyntaxKind};
use jsz_common::Atom;
use jsz_hoist::{BindingHoister, HoistPolicy, HoistedBindings};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::hash_map::Entry;
use std::rc::Rc;
use tracing::{debug, trace};

/// Traversal state saved and restored around every scope.
#[derive(Clone, Debug)]
pub(crate) struct ScopeContext {
    pub(crate) env: Rc<Environment>,
    pub(crate) scope_id: ScopeId,
    /// Catch parameters that resolve outward instead of getting their own scope.
    pub(crate) invalidated_catch_params: Rc<FxHashSet<NodeIndex>>,
}

impl ScopeContext {
    fn outermost() -> ScopeContext {
        ScopeContext {
            env: Environment::root(),
            scope_id: ScopeId::NONE,
            invalidated_catch_params: Rc::new(FxHashSet::default()),
        }
    }
}

struct SavedScope {
    ctx: ScopeContext,
    slot_mark: u32,
}

pub(crate) struct ScopeWalker<'a, H: BindingHoister + ?Sized> {
    arena: &'a NodeArena,
    hoister: &'a H,
    info: Info,
    slots: SlotAllocator,
    next_scope_id: u32,
    ctx: ScopeContext,
}

impl<'a, H: BindingHoister + ?Sized> ScopeWalker<'a, H> {
    pub(crate) fn new(arena: &'a NodeArena, hoister: &'a H) -> Self {
        ScopeWalker {
            arena,
            hoister,
            info: Info::new(),
            slots: SlotAllocator::new(),
            next_scope_id: 0,
            ctx: ScopeContext::outermost(),
        }
    }

    /// Push the program scope and walk its statements.
    pub(crate) fn walk_program(&mut self, root: NodeIndex) {
        let hoisted = self.hoister.hoist(self.arena, root, HoistPolicy::Full);
        self.with_scope(hoisted, |walker| walker.walk_children(root));
    }

    /// Walk `root` without a scope of its own. First-level scopes have no
    /// parent and are numbered from `ScopeId::ROOT`.
    pub(crate) fn walk_reusing_root(&mut self, root: NodeIndex) {
        debug_assert!(self.ctx.scope_id.is_none());
        self.walk_node(root);
    }

    pub(crate) fn finish(mut self) -> Info {
        self.info.max_distinct = self.slots.high_water();
        self.info.scope_count = self.next_scope_id;
        self.info
    }

    // =========================================================================
    // Scope management
    // =========================================================================

    fn with_scope<F>(&mut self, hoisted: HoistedBindings, f: F)
    where
        F: FnOnce(&mut Self),
    {
        let saved = self.push_scope(hoisted);
        f(self);
        self.pop_scope(saved);
    }

    fn push_scope(&mut self, hoisted: HoistedBindings) -> SavedScope {
        let parent_id = self.ctx.scope_id;
        let scope_id = ScopeId(self.next_scope_id);
        self.next_scope_id += 1;
        if !parent_id.is_none() {
            self.info.record_scope(scope_id, parent_id);
        }

        let slot_mark = self.slots.mark();
        let mut bindings: FxHashMap<Atom, Def> = FxHashMap::default();
        for (binding_loc, name) in hoisted.bindings {
            // Re-declarations keep the first binding site.
            if let Entry::Vacant(entry) = bindings.entry(name) {
                let def = Def {
                    binding_loc,
                    scope_id,
                    slot_id: self.slots.alloc(),
                };
                self.info.record_use(binding_loc, def);
                entry.insert(def);
            }
        }

        let invalidated_catch_params = if hoisted.invalidated_catch_params.is_empty() {
            Rc::clone(&self.ctx.invalidated_catch_params)
        } else {
            let mut set = (*self.ctx.invalidated_catch_params).clone();
            set.extend(hoisted.invalidated_catch_params);
            Rc::new(set)
        };

        debug!(
            scope_id = scope_id.0,
            parent_id = parent_id.0,
            bindings = bindings.len(),
            live_slots = self.slots.live(),
            "push scope"
        );

        let next = ScopeContext {
            env: Environment::extend(&self.ctx.env, bindings),
            scope_id,
            invalidated_catch_params,
        };
        SavedScope {
            ctx: std::mem::replace(&mut self.ctx, next),
            slot_mark,
        }
    }

    fn pop_scope(&mut self, saved: SavedScope) {
        debug!(
            scope_id = self.ctx.scope_id.0,
            released = self.slots.live() - saved.slot_mark,
            "pop scope"
        );
        self.ctx = saved.ctx;
        self.slots.release_to(saved.slot_mark);
    }

    fn hoist(&self, node: NodeIndex, policy: HoistPolicy) -> HoistedBindings {
        self.hoister.hoist(self.arena, node, policy)
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    fn resolve_identifier(&mut self, idx: NodeIndex) {
        // Binding sites were recorded when their scope was pushed.
        if self.info.is_recorded(idx) {
            return;
        }
        let Some(data) = self.arena.get_identifier_at(idx) else {
            return;
        };
        match self.ctx.env.lookup(data.atom) {
            Some(def) => {
                trace!(
                    node = idx.0,
                    binding = def.binding_loc.0,
                    slot = def.slot_id.0,
                    "resolved"
                );
                self.info.record_use(idx, def);
            }
            None => {
                let name = self.arena.resolve_identifier_text(data);
                trace!(node = idx.0, name, "free identifier");
                for slot_id in self.ctx.env.live_slots() {
                    self.info.add_global(slot_id, name);
                }
            }
        }
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    pub(crate) fn walk_node(&mut self, idx: NodeIndex) {
        let arena = self.arena;
        let Some(node) = arena.get(idx) else {
            return;
        };
        match node.kind {
            SyntaxKind::Identifier => self.resolve_identifier(idx),
            SyntaxKind::Block => self.walk_block(idx),
            SyntaxKind::ForStatement | SyntaxKind::ForInStatement | SyntaxKind::ForOfStatement => {
                self.walk_for(idx)
            }
            SyntaxKind::CatchClause => self.walk_catch_clause(idx),
            SyntaxKind::SwitchStatement => self.walk_switch(idx),
            SyntaxKind::FunctionDeclaration => {
                if let Some(func) = arena.get_function(node) {
                    self.resolve_identifier(func.name);
                }
                self.walk_function_scope(idx);
            }
            SyntaxKind::FunctionExpression => self.walk_function_expression(idx),
            SyntaxKind::ArrowFunction => self.walk_function_scope(idx),
            SyntaxKind::MethodDeclaration
            | SyntaxKind::GetAccessor
            | SyntaxKind::SetAccessor
            | SyntaxKind::Constructor => {
                if let Some(method) = arena.get_method_decl(node) {
                    self.walk_property_name(method.name);
                }
                self.walk_function_scope(idx);
            }
            SyntaxKind::ClassDeclaration => {
                if let Some(class) = arena.get_class(node) {
                    self.resolve_identifier(class.name);
                }
                self.walk_class_body(idx);
            }
            SyntaxKind::ClassExpression => self.walk_class_expression(idx),
            SyntaxKind::PropertyDeclaration => {
                if let Some(prop) = arena.get_property_decl(node) {
                    self.walk_property_name(prop.name);
                    self.walk_node(prop.initializer);
                }
            }
            SyntaxKind::PropertyAssignment => {
                if let Some(prop) = arena.get_property_assignment(node) {
                    self.walk_property_name(prop.name);
                    self.walk_node(prop.initializer);
                }
            }
            SyntaxKind::BindingElement => {
                if let Some(element) = arena.get_binding_element(node) {
                    self.walk_property_name(element.property_name);
                    self.walk_node(element.name);
                    self.walk_node(element.initializer);
                }
            }
            SyntaxKind::PropertyAccessExpression => {
                // The member name is not a variable reference.
                if let Some(access) = arena.get_access_expr(node) {
                    self.walk_node(access.expression);
                }
            }
            _ => self.walk_children(idx),
        }
    }

    fn walk_children(&mut self, idx: NodeIndex) {
        for child in self.arena.get_children(idx) {
            self.walk_node(child);
        }
    }

    /// Property keys are only walked when computed.
    fn walk_property_name(&mut self, name: NodeIndex) {
        if self.arena.kind(name) == Some(SyntaxKind::ComputedPropertyName) {
            self.walk_children(name);
        }
    }

    // =========================================================================
    // Block-level scopes
    // =========================================================================

    fn walk_block(&mut self, idx: NodeIndex) {
        let hoisted = self.hoist(idx, HoistPolicy::Lexical);
        self.with_scope(hoisted, |walker| walker.walk_children(idx));
    }

    /// Loops whose header declares variables get a scope around the whole loop.
    fn walk_for(&mut self, idx: NodeIndex) {
        let arena = self.arena;
        let initializer = match arena.get_loop_at(idx) {
            Some(loop_data) => loop_data.initializer,
            None => arena
                .get_for_in_of_at(idx)
                .map_or(NodeIndex::NONE, |data| data.initializer),
        };
        if arena.kind(initializer) == Some(SyntaxKind::VariableDeclarationList) {
            let hoisted = self.hoist(idx, HoistPolicy::Lexical);
            self.with_scope(hoisted, |walker| walker.walk_children(idx));
        } else {
            self.walk_children(idx);
        }
    }

    fn walk_catch_clause(&mut self, idx: NodeIndex) {
        let arena = self.arena;
        let Some(catch) = arena.get_catch_clause_at(idx) else {
            return;
        };
        let param = catch.variable_declaration;
        let block = catch.block;

        let hoisted = match arena.get_identifier_at(param) {
            Some(data) if !self.ctx.invalidated_catch_params.contains(&param) => {
                HoistedBindings::singleton(param, data.atom)
            }
            // Destructured or invalidated parameters bind nothing here; their
            // identifiers resolve to the enclosing scopes.
            _ => HoistedBindings::default(),
        };
        self.with_scope(hoisted, |walker| {
            walker.walk_node(param);
            walker.walk_node(block);
        });
    }

    fn walk_switch(&mut self, idx: NodeIndex) {
        let Some(switch) = self.arena.get_switch_at(idx) else {
            return;
        };
        let expression = switch.expression;
        let case_block = switch.case_block;
        self.walk_node(expression);
        let hoisted = self.hoist(case_block, HoistPolicy::Lexical);
        self.with_scope(hoisted, |walker| walker.walk_children(case_block));
    }

    // =========================================================================
    // Functions and classes
    // =========================================================================

    /// Guard, then the combined parameter and body scope.
    fn walk_function_scope(&mut self, idx: NodeIndex) {
        if function_uses_dynamic_scope(self.arena, idx) {
            debug!(node = idx.0, "function contains with/eval, skipped");
            return;
        }
        self.enter_function_scope(idx);
    }

    fn enter_function_scope(&mut self, idx: NodeIndex) {
        let arena = self.arena;
        let Some((parameters, body)) = arena.get_function_parts(idx) else {
            return;
        };
        let hoisted = self.hoist(idx, HoistPolicy::Full);
        self.with_scope(hoisted, |walker| {
            for &param in parameters {
                walker.walk_node(param);
            }
            // The body block shares the function scope.
            match arena.get_block_at(body) {
                Some(block) => {
                    for &stmt in &block.statements {
                        walker.walk_node(stmt);
                    }
                }
                None => walker.walk_node(body),
            }
        });
    }

    /// A named function expression binds its own name in a scope of its own,
    /// wrapping the parameter and body scope.
    fn walk_function_expression(&mut self, idx: NodeIndex) {
        let arena = self.arena;
        let Some(func) = arena.get_function_at(idx) else {
            return;
        };
        let Some(name) = arena.get_identifier_at(func.name) else {
            self.walk_function_scope(idx);
            return;
        };
        if function_uses_dynamic_scope(arena, idx) {
            debug!(node = idx.0, "function expression contains with/eval, skipped");
            return;
        }
        let hoisted = HoistedBindings::singleton(func.name, name.atom);
        self.with_scope(hoisted, |walker| walker.enter_function_scope(idx));
    }

    fn walk_class_expression(&mut self, idx: NodeIndex) {
        let arena = self.arena;
        let Some(class) = arena.get_class_at(idx) else {
            return;
        };
        let Some(name) = arena.get_identifier_at(class.name) else {
            self.walk_class_body(idx);
            return;
        };
        if contains_dynamic_scope(arena, idx) {
            // The name is visible only inside the class; leave it unrecorded.
            debug!(node = idx.0, "class expression contains with/eval, name not bound");
            self.walk_class_body(idx);
            return;
        }
        let hoisted = HoistedBindings::singleton(class.name, name.atom);
        self.with_scope(hoisted, |walker| walker.walk_class_body(idx));
    }

    /// Heritage clause and members; the class name is handled by the caller.
    fn walk_class_body(&mut self, idx: NodeIndex) {
        let arena = self.arena;
        let Some(class) = arena.get_class_at(idx) else {
            return;
        };
        self.walk_node(class.heritage);
        for &member in &class.members {
            self.walk_node(member);
        }
    }
}
