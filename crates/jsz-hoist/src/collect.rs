//! Reference hoisting rules over the jsz arena AST.

use crate::{BindingHoister, BindingList, HoistPolicy, HoistedBindings, HoisterOptions};
use jsz_ast::{NodeArena, NodeIndex, NodeList, SyntaxKind};
use tracing::trace;

/// Hoists declarations the way an ES2015+ engine scopes them.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeclarationHoister {
    pub options: HoisterOptions,
}

impl DeclarationHoister {
    pub fn new(options: HoisterOptions) -> DeclarationHoister {
        DeclarationHoister { options }
    }
}

impl BindingHoister for DeclarationHoister {
    fn hoist(&self, arena: &NodeArena, node: NodeIndex, policy: HoistPolicy) -> HoistedBindings {
        let mut collector = Collector::new(arena, self.options);
        match policy {
            HoistPolicy::Full => collector.collect_full(node),
            HoistPolicy::Lexical => collector.collect_lexical(node),
        }
        trace!(
            node = node.0,
            ?policy,
            bindings = collector.bindings.len(),
            invalidated = collector.invalidated_catch_params.len(),
            "hoisted"
        );
        HoistedBindings {
            bindings: collector.bindings,
            invalidated_catch_params: collector.invalidated_catch_params,
        }
    }
}

struct Collector<'a> {
    arena: &'a NodeArena,
    options: HoisterOptions,
    bindings: BindingList,
    invalidated_catch_params: Vec<NodeIndex>,
}

impl<'a> Collector<'a> {
    fn new(arena: &'a NodeArena, options: HoisterOptions) -> Collector<'a> {
        Collector {
            arena,
            options,
            bindings: BindingList::new(),
            invalidated_catch_params: Vec::new(),
        }
    }

    fn push_name(&mut self, ident: NodeIndex) {
        if let Some(data) = self.arena.get_identifier_at(ident) {
            self.bindings.push((ident, data.atom));
        }
    }

    /// Push every identifier bound by `name`, descending into destructuring patterns.
    fn push_binding_names(&mut self, name: NodeIndex) {
        let arena = self.arena;
        let Some(node) = arena.get(name) else {
            return;
        };
        match node.kind {
            SyntaxKind::Identifier => self.push_name(name),
            SyntaxKind::ObjectBindingPattern | SyntaxKind::ArrayBindingPattern => {
                let Some(pattern) = arena.get_binding_pattern(node) else {
                    return;
                };
                for &element in &pattern.elements.nodes {
                    // Holes in array patterns are OmittedExpression and bind nothing.
                    if let Some(data) = arena.get_binding_element_at(element) {
                        self.push_binding_names(data.name);
                    }
                }
            }
            _ => {}
        }
    }

    fn push_declaration_list(&mut self, list_idx: NodeIndex) {
        let arena = self.arena;
        let Some(list) = arena.get_variable_at(list_idx) else {
            return;
        };
        for &decl_idx in &list.declarations.nodes {
            if let Some(decl) = arena.get_variable_declaration_at(decl_idx) {
                self.push_binding_names(decl.name);
            }
        }
    }

    /// The declaration list of a `VariableStatement`.
    fn statement_declaration_list(&self, stmt: NodeIndex) -> Option<NodeIndex> {
        let data = self.arena.get_variable_at(stmt)?;
        data.declarations.nodes.first().copied()
    }

    // =========================================================================
    // Full hoist
    // =========================================================================

    fn collect_full(&mut self, node_idx: NodeIndex) {
        let arena = self.arena;
        let Some(node) = arena.get(node_idx) else {
            return;
        };
        if node.is_function_like() {
            let Some((parameters, body)) = arena.get_function_parts(node_idx) else {
                return;
            };
            for &param in &parameters.nodes {
                if let Some(data) = arena.get_parameter_at(param) {
                    self.push_binding_names(data.name);
                }
            }
            // A concise arrow body is an expression and declares nothing.
            if let Some(block) = arena.get_block_at(body) {
                self.collect_container(&block.statements, false);
            }
            return;
        }
        match node.kind {
            SyntaxKind::SourceFile => {
                if let Some(file) = arena.get_source_file(node) {
                    self.collect_container(&file.statements, false);
                }
            }
            SyntaxKind::Block => {
                if let Some(block) = arena.get_block(node) {
                    self.collect_container(&block.statements, false);
                }
            }
            _ => {}
        }
    }

    /// Source-order scan of a function or program body.
    ///
    /// `in_block` is false only for statements that belong directly to the
    /// container; lexical declarations and (outside Annex B) function
    /// declarations are collected only there.
    fn collect_container(&mut self, statements: &NodeList, in_block: bool) {
        for &stmt_idx in &statements.nodes {
            self.collect_statement(stmt_idx, in_block);
        }
    }

    fn collect_statement(&mut self, stmt_idx: NodeIndex, in_block: bool) {
        let arena = self.arena;
        let Some(node) = arena.get(stmt_idx) else {
            return;
        };
        match node.kind {
            SyntaxKind::VariableStatement => {
                if let Some(list_idx) = self.statement_declaration_list(stmt_idx) {
                    if !arena.is_block_scoped_declaration_list(list_idx) || !in_block {
                        self.push_declaration_list(list_idx);
                    }
                }
            }
            SyntaxKind::FunctionDeclaration => {
                if !in_block || self.options.annex_b_block_functions {
                    if let Some(func) = arena.get_function(node) {
                        self.push_name(func.name);
                    }
                }
            }
            SyntaxKind::ClassDeclaration => {
                if !in_block {
                    if let Some(class) = arena.get_class(node) {
                        self.push_name(class.name);
                    }
                }
            }
            SyntaxKind::Block => {
                if let Some(block) = arena.get_block(node) {
                    self.collect_container(&block.statements, true);
                }
            }
            SyntaxKind::IfStatement => {
                if let Some(if_stmt) = arena.get_if_statement(node) {
                    self.collect_statement(if_stmt.then_statement, true);
                    self.collect_statement(if_stmt.else_statement, true);
                }
            }
            SyntaxKind::WhileStatement | SyntaxKind::DoStatement => {
                if let Some(loop_data) = arena.get_loop(node) {
                    self.collect_statement(loop_data.statement, true);
                }
            }
            SyntaxKind::ForStatement => {
                if let Some(loop_data) = arena.get_loop(node) {
                    self.collect_var_initializer(loop_data.initializer);
                    self.collect_statement(loop_data.statement, true);
                }
            }
            SyntaxKind::ForInStatement | SyntaxKind::ForOfStatement => {
                if let Some(for_data) = arena.get_for_in_of(node) {
                    self.collect_var_initializer(for_data.initializer);
                    self.collect_statement(for_data.statement, true);
                }
            }
            SyntaxKind::TryStatement => {
                if let Some(try_data) = arena.get_try(node) {
                    self.collect_statement(try_data.try_block, true);
                    if let Some(catch_data) = arena.get_catch_clause_at(try_data.catch_clause) {
                        self.check_catch_invalidation(
                            catch_data.variable_declaration,
                            catch_data.block,
                        );
                        self.collect_statement(catch_data.block, true);
                    }
                    self.collect_statement(try_data.finally_block, true);
                }
            }
            SyntaxKind::SwitchStatement => {
                if let Some(switch_data) = arena.get_switch(node)
                    && let Some(case_block) = arena.get_block_at(switch_data.case_block)
                {
                    for &clause_idx in &case_block.statements.nodes {
                        if let Some(clause) = arena.get_case_clause_at(clause_idx) {
                            self.collect_container(&clause.statements, true);
                        }
                    }
                }
            }
            SyntaxKind::LabeledStatement => {
                if let Some(label_data) = arena.get_labeled_statement(node) {
                    // `l: function f() {}` declares `f` in the same position as the label.
                    self.collect_statement(label_data.statement, in_block);
                }
            }
            SyntaxKind::WithStatement => {
                if let Some(with_data) = arena.get_with(node) {
                    self.collect_statement(with_data.statement, true);
                }
            }
            _ => {}
        }
    }

    /// `for (var x ...)` hoists `x`; `let`/`const` headers get their own scope.
    fn collect_var_initializer(&mut self, init: NodeIndex) {
        let Some(init_node) = self.arena.get(init) else {
            return;
        };
        if init_node.kind == SyntaxKind::VariableDeclarationList
            && !self.arena.is_block_scoped_declaration_list(init)
        {
            self.push_declaration_list(init);
        }
    }

    /// A catch parameter is invalidated when its body re-declares the same
    /// name with `var` (anywhere) or a lexical declaration (directly).
    fn check_catch_invalidation(&mut self, param: NodeIndex, block: NodeIndex) {
        let Some(param_name) = self.arena.get_identifier_at(param).map(|data| data.atom) else {
            return;
        };
        let arena = self.arena;
        let Some(block_data) = arena.get_block_at(block) else {
            return;
        };
        let mut inner = Collector::new(arena, self.options);
        inner.collect_container(&block_data.statements, false);
        if inner.bindings.iter().any(|&(_, name)| name == param_name) {
            trace!(param = param.0, "catch parameter re-declared in its body");
            self.invalidated_catch_params.push(param);
        }
    }

    // =========================================================================
    // Lexical hoist
    // =========================================================================

    fn collect_lexical(&mut self, node_idx: NodeIndex) {
        let arena = self.arena;
        let Some(node) = arena.get(node_idx) else {
            return;
        };
        match node.kind {
            SyntaxKind::Block => {
                if let Some(block) = arena.get_block(node) {
                    self.collect_lexical_statements(&block.statements);
                }
            }
            SyntaxKind::SourceFile => {
                if let Some(file) = arena.get_source_file(node) {
                    self.collect_lexical_statements(&file.statements);
                }
            }
            SyntaxKind::CaseBlock => {
                if let Some(case_block) = arena.get_block(node) {
                    for &clause_idx in &case_block.statements.nodes {
                        if let Some(clause) = arena.get_case_clause_at(clause_idx) {
                            self.collect_lexical_statements(&clause.statements);
                        }
                    }
                }
            }
            SyntaxKind::ForStatement => {
                if let Some(loop_data) = arena.get_loop(node) {
                    self.collect_lexical_header(loop_data.initializer);
                }
            }
            SyntaxKind::ForInStatement | SyntaxKind::ForOfStatement => {
                if let Some(for_data) = arena.get_for_in_of(node) {
                    self.collect_lexical_header(for_data.initializer);
                }
            }
            SyntaxKind::VariableDeclarationList => self.collect_lexical_header(node_idx),
            _ => {}
        }
    }

    fn collect_lexical_header(&mut self, init: NodeIndex) {
        if self.arena.is_block_scoped_declaration_list(init) {
            self.push_declaration_list(init);
        }
    }

    fn collect_lexical_statements(&mut self, statements: &NodeList) {
        let arena = self.arena;
        for &stmt_idx in &statements.nodes {
            let Some(node) = arena.get(stmt_idx) else {
                continue;
            };
            match node.kind {
                SyntaxKind::VariableStatement => {
                    if let Some(list_idx) = self.statement_declaration_list(stmt_idx)
                        && arena.is_block_scoped_declaration_list(list_idx)
                    {
                        self.push_declaration_list(list_idx);
                    }
                }
                SyntaxKind::ClassDeclaration => {
                    if let Some(class) = arena.get_class(node) {
                        self.push_name(class.name);
                    }
                }
                SyntaxKind::FunctionDeclaration => {
                    if !self.options.annex_b_block_functions
                        && let Some(func) = arena.get_function(node)
                    {
                        self.push_name(func.name);
                    }
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/collect_tests.rs"]
mod tests;
