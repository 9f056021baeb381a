//! NodeArena access methods and the NodeAccess trait.
//!
//! `get_*` accessors return a node's payload only when the node kind matches
//! the pool; `get_*_at` variants take a `NodeIndex` directly.
//! `NodeAccess::get_children` is the generic traversal every analysis falls
//! back to for node kinds it does not specialize.

use super::base::{NodeIndex, NodeList};
use super::node::*;
use super::syntax_kind::SyntaxKind;
use jsz_common::Span;

macro_rules! pool_accessor {
    ($(#[$meta:meta])* $get:ident, $get_at:ident, $pool:ident, $data:ty, $($kind:ident)|+) => {
        $(#[$meta])*
        #[inline]
        pub fn $get(&self, node: &Node) -> Option<&$data> {
            if node.has_data() && matches!(node.kind, $(SyntaxKind::$kind)|+) {
                self.$pool.get(node.data_index as usize)
            } else {
                None
            }
        }

        #[inline]
        pub fn $get_at(&self, index: NodeIndex) -> Option<&$data> {
            let node = self.get(index)?;
            self.$get(node)
        }
    };
}

impl NodeArena {
    /// Get a thin node by index
    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    /// Get a mutable thin node by index
    #[inline]
    pub fn get_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get_mut(index.0 as usize)
        }
    }

    pool_accessor!(
        /// Get identifier data for a node.
        get_identifier,
        get_identifier_at,
        identifiers,
        IdentifierData,
        Identifier
    );
    pool_accessor!(
        get_literal,
        get_literal_at,
        literals,
        LiteralData,
        StringLiteral | NumericLiteral
    );
    pool_accessor!(
        get_source_file,
        get_source_file_at,
        source_files,
        SourceFileData,
        SourceFile
    );
    pool_accessor!(
        get_block,
        get_block_at,
        blocks,
        BlockData,
        Block | CaseBlock
    );
    pool_accessor!(
        /// Variable statement (one declaration list) or declaration list.
        get_variable,
        get_variable_at,
        variables,
        VariableData,
        VariableStatement | VariableDeclarationList
    );
    pool_accessor!(
        get_variable_declaration,
        get_variable_declaration_at,
        variable_declarations,
        VariableDeclarationData,
        VariableDeclaration
    );
    pool_accessor!(
        get_function,
        get_function_at,
        functions,
        FunctionData,
        FunctionDeclaration | FunctionExpression | ArrowFunction
    );
    pool_accessor!(
        get_method_decl,
        get_method_decl_at,
        method_decls,
        MethodDeclData,
        MethodDeclaration | GetAccessor | SetAccessor | Constructor
    );
    pool_accessor!(
        get_parameter,
        get_parameter_at,
        parameters,
        ParameterData,
        Parameter
    );
    pool_accessor!(
        get_class,
        get_class_at,
        classes,
        ClassData,
        ClassDeclaration | ClassExpression
    );
    pool_accessor!(
        get_property_decl,
        get_property_decl_at,
        property_decls,
        PropertyDeclData,
        PropertyDeclaration
    );
    pool_accessor!(
        get_binding_pattern,
        get_binding_pattern_at,
        binding_patterns,
        BindingPatternData,
        ObjectBindingPattern | ArrayBindingPattern
    );
    pool_accessor!(
        get_binding_element,
        get_binding_element_at,
        binding_elements,
        BindingElementData,
        BindingElement
    );
    pool_accessor!(
        get_if_statement,
        get_if_statement_at,
        if_statements,
        IfStatementData,
        IfStatement
    );
    pool_accessor!(
        get_loop,
        get_loop_at,
        loops,
        LoopData,
        ForStatement | WhileStatement | DoStatement
    );
    pool_accessor!(
        get_for_in_of,
        get_for_in_of_at,
        for_in_of,
        ForInOfData,
        ForInStatement | ForOfStatement
    );
    pool_accessor!(
        get_return,
        get_return_at,
        return_data,
        ReturnData,
        ReturnStatement | ThrowStatement
    );
    pool_accessor!(
        get_expr_statement,
        get_expr_statement_at,
        expr_statements,
        ExprStatementData,
        ExpressionStatement
    );
    pool_accessor!(
        get_wrapped_expr,
        get_wrapped_expr_at,
        wrapped_exprs,
        WrappedExprData,
        ParenthesizedExpression
            | SpreadElement
            | ComputedPropertyName
            | AwaitExpression
            | YieldExpression
    );
    pool_accessor!(get_try, get_try_at, try_data, TryData, TryStatement);
    pool_accessor!(
        get_catch_clause,
        get_catch_clause_at,
        catch_clauses,
        CatchClauseData,
        CatchClause
    );
    pool_accessor!(
        get_switch,
        get_switch_at,
        switch_data,
        SwitchData,
        SwitchStatement
    );
    pool_accessor!(
        get_case_clause,
        get_case_clause_at,
        case_clauses,
        CaseClauseData,
        CaseClause | DefaultClause
    );
    pool_accessor!(
        get_labeled_statement,
        get_labeled_statement_at,
        labeled_data,
        LabeledData,
        LabeledStatement
    );
    pool_accessor!(
        get_jump,
        get_jump_at,
        jump_data,
        JumpData,
        BreakStatement | ContinueStatement
    );
    pool_accessor!(get_with, get_with_at, with_data, WithData, WithStatement);
    pool_accessor!(
        get_call_expr,
        get_call_expr_at,
        call_exprs,
        CallExprData,
        CallExpression | NewExpression
    );
    pool_accessor!(
        get_access_expr,
        get_access_expr_at,
        access_exprs,
        AccessExprData,
        PropertyAccessExpression | ElementAccessExpression
    );
    pool_accessor!(
        get_binary_expr,
        get_binary_expr_at,
        binary_exprs,
        BinaryExprData,
        BinaryExpression
    );
    pool_accessor!(
        get_unary_expr,
        get_unary_expr_at,
        unary_exprs,
        UnaryExprData,
        PrefixUnaryExpression | PostfixUnaryExpression
    );
    pool_accessor!(
        get_conditional_expr,
        get_conditional_expr_at,
        conditional_exprs,
        ConditionalExprData,
        ConditionalExpression
    );
    pool_accessor!(
        get_literal_expr,
        get_literal_expr_at,
        literal_exprs,
        LiteralExprData,
        ArrayLiteralExpression | ObjectLiteralExpression
    );
    pool_accessor!(
        get_property_assignment,
        get_property_assignment_at,
        property_assignments,
        PropertyAssignmentData,
        PropertyAssignment
    );
    pool_accessor!(
        get_shorthand_property,
        get_shorthand_property_at,
        shorthand_properties,
        ShorthandPropertyData,
        ShorthandPropertyAssignment
    );

    /// Parameters and body of any function-like node.
    pub fn get_function_parts(&self, index: NodeIndex) -> Option<(&NodeList, NodeIndex)> {
        let node = self.get(index)?;
        if let Some(func) = self.get_function(node) {
            return Some((&func.parameters, func.body));
        }
        let method = self.get_method_decl(node)?;
        Some((&method.parameters, method.body))
    }

    /// Whether `index` is a `VariableDeclarationList` declared with `let`/`const`.
    pub fn is_block_scoped_declaration_list(&self, index: NodeIndex) -> bool {
        self.get(index).is_some_and(|node| {
            node.kind == SyntaxKind::VariableDeclarationList
                && (node.flags & super::node_flags::BLOCK_SCOPED) != 0
        })
    }
}

/// Read-only view of a tree used by analyses that only need structure.
pub trait NodeAccess {
    /// Get the node kind
    fn kind(&self, index: NodeIndex) -> Option<SyntaxKind>;

    /// Get the source range
    fn span(&self, index: NodeIndex) -> Option<Span>;

    /// Check if a node exists
    fn exists(&self, index: NodeIndex) -> bool {
        !index.is_none() && self.kind(index).is_some()
    }

    /// Get identifier text (if this is an identifier node)
    fn get_identifier_text(&self, index: NodeIndex) -> Option<&str>;

    /// Get children of a node in source order (for traversal)
    fn get_children(&self, index: NodeIndex) -> Vec<NodeIndex>;
}

impl NodeAccess for NodeArena {
    fn kind(&self, index: NodeIndex) -> Option<SyntaxKind> {
        self.get(index).map(|n| n.kind)
    }

    fn span(&self, index: NodeIndex) -> Option<Span> {
        self.get(index).map(Node::span)
    }

    fn get_identifier_text(&self, index: NodeIndex) -> Option<&str> {
        let data = self.get_identifier_at(index)?;
        Some(self.resolve_identifier_text(data))
    }

    fn get_children(&self, index: NodeIndex) -> Vec<NodeIndex> {
        let Some(node) = self.get(index) else {
            return Vec::new();
        };

        let mut children = Vec::new();
        let add_opt = |children: &mut Vec<NodeIndex>, idx: NodeIndex| {
            if idx.is_some() {
                children.push(idx);
            }
        };
        let add_list = |children: &mut Vec<NodeIndex>, list: &NodeList| {
            children.extend(list.nodes.iter().copied());
        };

        match node.kind {
            SyntaxKind::SourceFile => {
                if let Some(data) = self.get_source_file(node) {
                    add_list(&mut children, &data.statements);
                }
            }
            SyntaxKind::Block | SyntaxKind::CaseBlock => {
                if let Some(data) = self.get_block(node) {
                    add_list(&mut children, &data.statements);
                }
            }
            SyntaxKind::VariableStatement | SyntaxKind::VariableDeclarationList => {
                if let Some(data) = self.get_variable(node) {
                    add_list(&mut children, &data.declarations);
                }
            }
            SyntaxKind::VariableDeclaration => {
                if let Some(data) = self.get_variable_declaration(node) {
                    add_opt(&mut children, data.name);
                    add_opt(&mut children, data.initializer);
                }
            }
            SyntaxKind::FunctionDeclaration
            | SyntaxKind::FunctionExpression
            | SyntaxKind::ArrowFunction => {
                if let Some(data) = self.get_function(node) {
                    add_opt(&mut children, data.name);
                    add_list(&mut children, &data.parameters);
                    add_opt(&mut children, data.body);
                }
            }
            SyntaxKind::MethodDeclaration
            | SyntaxKind::GetAccessor
            | SyntaxKind::SetAccessor
            | SyntaxKind::Constructor => {
                if let Some(data) = self.get_method_decl(node) {
                    add_opt(&mut children, data.name);
                    add_list(&mut children, &data.parameters);
                    add_opt(&mut children, data.body);
                }
            }
            SyntaxKind::Parameter => {
                if let Some(data) = self.get_parameter(node) {
                    add_opt(&mut children, data.name);
                    add_opt(&mut children, data.initializer);
                }
            }
            SyntaxKind::ClassDeclaration | SyntaxKind::ClassExpression => {
                if let Some(data) = self.get_class(node) {
                    add_opt(&mut children, data.name);
                    add_opt(&mut children, data.heritage);
                    add_list(&mut children, &data.members);
                }
            }
            SyntaxKind::PropertyDeclaration => {
                if let Some(data) = self.get_property_decl(node) {
                    add_opt(&mut children, data.name);
                    add_opt(&mut children, data.initializer);
                }
            }
            SyntaxKind::ObjectBindingPattern | SyntaxKind::ArrayBindingPattern => {
                if let Some(data) = self.get_binding_pattern(node) {
                    add_list(&mut children, &data.elements);
                }
            }
            SyntaxKind::BindingElement => {
                if let Some(data) = self.get_binding_element(node) {
                    add_opt(&mut children, data.property_name);
                    add_opt(&mut children, data.name);
                    add_opt(&mut children, data.initializer);
                }
            }
            SyntaxKind::IfStatement => {
                if let Some(data) = self.get_if_statement(node) {
                    add_opt(&mut children, data.expression);
                    add_opt(&mut children, data.then_statement);
                    add_opt(&mut children, data.else_statement);
                }
            }
            SyntaxKind::ForStatement | SyntaxKind::WhileStatement => {
                if let Some(data) = self.get_loop(node) {
                    add_opt(&mut children, data.initializer);
                    add_opt(&mut children, data.condition);
                    add_opt(&mut children, data.incrementor);
                    add_opt(&mut children, data.statement);
                }
            }
            SyntaxKind::DoStatement => {
                if let Some(data) = self.get_loop(node) {
                    add_opt(&mut children, data.statement);
                    add_opt(&mut children, data.condition);
                }
            }
            SyntaxKind::ForInStatement | SyntaxKind::ForOfStatement => {
                if let Some(data) = self.get_for_in_of(node) {
                    add_opt(&mut children, data.initializer);
                    add_opt(&mut children, data.expression);
                    add_opt(&mut children, data.statement);
                }
            }
            SyntaxKind::ReturnStatement | SyntaxKind::ThrowStatement => {
                if let Some(data) = self.get_return(node) {
                    add_opt(&mut children, data.expression);
                }
            }
            SyntaxKind::ExpressionStatement => {
                if let Some(data) = self.get_expr_statement(node) {
                    add_opt(&mut children, data.expression);
                }
            }
            SyntaxKind::ParenthesizedExpression
            | SyntaxKind::SpreadElement
            | SyntaxKind::ComputedPropertyName
            | SyntaxKind::AwaitExpression
            | SyntaxKind::YieldExpression => {
                if let Some(data) = self.get_wrapped_expr(node) {
                    add_opt(&mut children, data.expression);
                }
            }
            SyntaxKind::TryStatement => {
                if let Some(data) = self.get_try(node) {
                    add_opt(&mut children, data.try_block);
                    add_opt(&mut children, data.catch_clause);
                    add_opt(&mut children, data.finally_block);
                }
            }
            SyntaxKind::CatchClause => {
                if let Some(data) = self.get_catch_clause(node) {
                    add_opt(&mut children, data.variable_declaration);
                    add_opt(&mut children, data.block);
                }
            }
            SyntaxKind::SwitchStatement => {
                if let Some(data) = self.get_switch(node) {
                    add_opt(&mut children, data.expression);
                    add_opt(&mut children, data.case_block);
                }
            }
            SyntaxKind::CaseClause | SyntaxKind::DefaultClause => {
                if let Some(data) = self.get_case_clause(node) {
                    add_opt(&mut children, data.expression);
                    add_list(&mut children, &data.statements);
                }
            }
            SyntaxKind::LabeledStatement => {
                if let Some(data) = self.get_labeled_statement(node) {
                    add_opt(&mut children, data.statement);
                }
            }
            SyntaxKind::WithStatement => {
                if let Some(data) = self.get_with(node) {
                    add_opt(&mut children, data.expression);
                    add_opt(&mut children, data.statement);
                }
            }
            SyntaxKind::CallExpression | SyntaxKind::NewExpression => {
                if let Some(data) = self.get_call_expr(node) {
                    add_opt(&mut children, data.expression);
                    add_list(&mut children, &data.arguments);
                }
            }
            SyntaxKind::PropertyAccessExpression | SyntaxKind::ElementAccessExpression => {
                if let Some(data) = self.get_access_expr(node) {
                    add_opt(&mut children, data.expression);
                    add_opt(&mut children, data.name_or_argument);
                }
            }
            SyntaxKind::BinaryExpression => {
                if let Some(data) = self.get_binary_expr(node) {
                    add_opt(&mut children, data.left);
                    add_opt(&mut children, data.right);
                }
            }
            SyntaxKind::PrefixUnaryExpression | SyntaxKind::PostfixUnaryExpression => {
                if let Some(data) = self.get_unary_expr(node) {
                    add_opt(&mut children, data.operand);
                }
            }
            SyntaxKind::ConditionalExpression => {
                if let Some(data) = self.get_conditional_expr(node) {
                    add_opt(&mut children, data.condition);
                    add_opt(&mut children, data.when_true);
                    add_opt(&mut children, data.when_false);
                }
            }
            SyntaxKind::ArrayLiteralExpression | SyntaxKind::ObjectLiteralExpression => {
                if let Some(data) = self.get_literal_expr(node) {
                    add_list(&mut children, &data.elements);
                }
            }
            SyntaxKind::PropertyAssignment => {
                if let Some(data) = self.get_property_assignment(node) {
                    add_opt(&mut children, data.name);
                    add_opt(&mut children, data.initializer);
                }
            }
            SyntaxKind::ShorthandPropertyAssignment => {
                if let Some(data) = self.get_shorthand_property(node) {
                    add_opt(&mut children, data.name);
                    add_opt(&mut children, data.object_assignment_initializer);
                }
            }
            SyntaxKind::Unknown
            | SyntaxKind::Identifier
            | SyntaxKind::StringLiteral
            | SyntaxKind::NumericLiteral
            | SyntaxKind::ThisKeyword
            | SyntaxKind::SuperKeyword
            | SyntaxKind::NullKeyword
            | SyntaxKind::TrueKeyword
            | SyntaxKind::FalseKeyword
            | SyntaxKind::OmittedExpression
            | SyntaxKind::EmptyStatement
            | SyntaxKind::ContinueStatement
            | SyntaxKind::BreakStatement
            | SyntaxKind::DebuggerStatement => {}
        }

        children
    }
}
