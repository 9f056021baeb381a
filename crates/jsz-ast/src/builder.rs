//! Programmatic tree construction.
//!
//! `AstBuilder` wraps the low-level `NodeArena::add_*` methods and assigns
//! source positions automatically: every leaf gets the next free range and
//! every composite node covers its children. Building a tree in source order
//! therefore yields spans that are ordered like the source text would be.

use super::base::{NodeIndex, NodeList};
use super::node::*;
use super::node_flags;
use super::syntax_kind::{Operator, SyntaxKind};
use jsz_common::interner::Atom;

/// Declaration keyword of a variable declaration list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VarKind {
    Var,
    Let,
    Const,
}

impl VarKind {
    fn flags(self) -> u16 {
        match self {
            VarKind::Var => node_flags::NONE,
            VarKind::Let => node_flags::LET,
            VarKind::Const => node_flags::CONST,
        }
    }
}

#[derive(Debug)]
pub struct AstBuilder {
    arena: NodeArena,
    cursor: u32,
}

impl Default for AstBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AstBuilder {
    pub fn new() -> AstBuilder {
        AstBuilder {
            arena: NodeArena::new(),
            cursor: 0,
        }
    }

    /// Finish building and hand out the arena.
    pub fn finish(self) -> NodeArena {
        self.arena
    }

    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    fn leaf_span(&mut self, len: u32) -> (u32, u32) {
        let pos = self.cursor;
        let end = pos + len.max(1);
        self.cursor = end + 1;
        (pos, end)
    }

    fn cover(&mut self, children: &[NodeIndex]) -> (u32, u32) {
        let mut span: Option<(u32, u32)> = None;
        for &child in children {
            if let Some(node) = self.arena.get(child) {
                span = Some(match span {
                    Some((pos, end)) => (pos.min(node.pos), end.max(node.end)),
                    None => (node.pos, node.end),
                });
            }
        }
        match span {
            Some(span) => span,
            None => self.leaf_span(1),
        }
    }

    fn cover_list(&mut self, leading: &[NodeIndex], list: &[NodeIndex]) -> (u32, u32) {
        let mut all = Vec::with_capacity(leading.len() + list.len());
        all.extend_from_slice(leading);
        all.extend_from_slice(list);
        self.cover(&all)
    }

    // =========================================================================
    // Leaves
    // =========================================================================

    pub fn ident(&mut self, name: &str) -> NodeIndex {
        let (pos, end) = self.leaf_span(name.len() as u32);
        self.arena.add_identifier(name, pos, end)
    }

    pub fn string(&mut self, text: &str) -> NodeIndex {
        let (pos, end) = self.leaf_span(text.len() as u32 + 2);
        self.arena.add_literal(
            SyntaxKind::StringLiteral,
            pos,
            end,
            LiteralData {
                text: text.to_string(),
            },
        )
    }

    pub fn number(&mut self, text: &str) -> NodeIndex {
        let (pos, end) = self.leaf_span(text.len() as u32);
        self.arena.add_literal(
            SyntaxKind::NumericLiteral,
            pos,
            end,
            LiteralData {
                text: text.to_string(),
            },
        )
    }

    /// Keyword-like leaves: `this`, `super`, `null`, `true`, `false`, array holes,
    /// empty and debugger statements.
    pub fn token(&mut self, kind: SyntaxKind) -> NodeIndex {
        let (pos, end) = self.leaf_span(4);
        self.arena.add_token(kind, pos, end)
    }

    pub fn this(&mut self) -> NodeIndex {
        self.token(SyntaxKind::ThisKeyword)
    }

    pub fn empty(&mut self) -> NodeIndex {
        self.token(SyntaxKind::EmptyStatement)
    }

    // =========================================================================
    // Program and statements
    // =========================================================================

    pub fn source_file(&mut self, statements: Vec<NodeIndex>) -> NodeIndex {
        let (pos, end) = self.cover(&statements);
        self.arena.add_source_file(
            SyntaxKind::SourceFile,
            pos,
            end,
            SourceFileData {
                file_name: "input.js".to_string(),
                statements: NodeList::from(statements),
            },
        )
    }

    pub fn block(&mut self, statements: Vec<NodeIndex>) -> NodeIndex {
        let (pos, end) = self.cover(&statements);
        self.arena.add_block(
            SyntaxKind::Block,
            pos,
            end,
            BlockData {
                statements: NodeList::from(statements),
            },
        )
    }

    pub fn declarator(&mut self, name: NodeIndex, initializer: NodeIndex) -> NodeIndex {
        let (pos, end) = self.cover(&[name, initializer]);
        self.arena.add_variable_declaration(
            SyntaxKind::VariableDeclaration,
            pos,
            end,
            VariableDeclarationData { name, initializer },
        )
    }

    /// A bare declaration list, as used in `for` headers.
    pub fn declaration_list(&mut self, kind: VarKind, declarations: Vec<NodeIndex>) -> NodeIndex {
        let (pos, end) = self.cover(&declarations);
        let list = self.arena.add_variable(
            SyntaxKind::VariableDeclarationList,
            pos,
            end,
            VariableData {
                declarations: NodeList::from(declarations),
            },
        );
        self.arena.set_flags(list, kind.flags());
        list
    }

    /// `var|let|const a = init, b = init;`
    pub fn var_statement(&mut self, kind: VarKind, declarations: Vec<NodeIndex>) -> NodeIndex {
        let list = self.declaration_list(kind, declarations);
        let (pos, end) = self.cover(&[list]);
        self.arena.add_variable(
            SyntaxKind::VariableStatement,
            pos,
            end,
            VariableData {
                declarations: NodeList::from(vec![list]),
            },
        )
    }

    /// Shorthand for a single-declarator statement.
    pub fn var_decl(&mut self, kind: VarKind, name: NodeIndex, initializer: NodeIndex) -> NodeIndex {
        let declarator = self.declarator(name, initializer);
        self.var_statement(kind, vec![declarator])
    }

    pub fn expr_stmt(&mut self, expression: NodeIndex) -> NodeIndex {
        let (pos, end) = self.cover(&[expression]);
        self.arena.add_expr_statement(
            SyntaxKind::ExpressionStatement,
            pos,
            end,
            ExprStatementData { expression },
        )
    }

    pub fn if_stmt(
        &mut self,
        expression: NodeIndex,
        then_statement: NodeIndex,
        else_statement: NodeIndex,
    ) -> NodeIndex {
        let (pos, end) = self.cover(&[expression, then_statement, else_statement]);
        self.arena.add_if_statement(
            SyntaxKind::IfStatement,
            pos,
            end,
            IfStatementData {
                expression,
                then_statement,
                else_statement,
            },
        )
    }

    pub fn for_stmt(
        &mut self,
        initializer: NodeIndex,
        condition: NodeIndex,
        incrementor: NodeIndex,
        statement: NodeIndex,
    ) -> NodeIndex {
        let (pos, end) = self.cover(&[initializer, condition, incrementor, statement]);
        self.arena.add_loop(
            SyntaxKind::ForStatement,
            pos,
            end,
            LoopData {
                initializer,
                condition,
                incrementor,
                statement,
            },
        )
    }

    pub fn while_stmt(&mut self, condition: NodeIndex, statement: NodeIndex) -> NodeIndex {
        let (pos, end) = self.cover(&[condition, statement]);
        self.arena.add_loop(
            SyntaxKind::WhileStatement,
            pos,
            end,
            LoopData {
                initializer: NodeIndex::NONE,
                condition,
                incrementor: NodeIndex::NONE,
                statement,
            },
        )
    }

    pub fn do_stmt(&mut self, statement: NodeIndex, condition: NodeIndex) -> NodeIndex {
        let (pos, end) = self.cover(&[statement, condition]);
        self.arena.add_loop(
            SyntaxKind::DoStatement,
            pos,
            end,
            LoopData {
                initializer: NodeIndex::NONE,
                condition,
                incrementor: NodeIndex::NONE,
                statement,
            },
        )
    }

    fn for_in_of(
        &mut self,
        kind: SyntaxKind,
        initializer: NodeIndex,
        expression: NodeIndex,
        statement: NodeIndex,
    ) -> NodeIndex {
        let (pos, end) = self.cover(&[initializer, expression, statement]);
        self.arena.add_for_in_of(
            kind,
            pos,
            end,
            ForInOfData {
                initializer,
                expression,
                statement,
            },
        )
    }

    pub fn for_in(
        &mut self,
        initializer: NodeIndex,
        expression: NodeIndex,
        statement: NodeIndex,
    ) -> NodeIndex {
        self.for_in_of(SyntaxKind::ForInStatement, initializer, expression, statement)
    }

    pub fn for_of(
        &mut self,
        initializer: NodeIndex,
        expression: NodeIndex,
        statement: NodeIndex,
    ) -> NodeIndex {
        self.for_in_of(SyntaxKind::ForOfStatement, initializer, expression, statement)
    }

    pub fn return_stmt(&mut self, expression: NodeIndex) -> NodeIndex {
        let (pos, end) = self.cover(&[expression]);
        self.arena.add_return(
            SyntaxKind::ReturnStatement,
            pos,
            end,
            ReturnData { expression },
        )
    }

    pub fn throw_stmt(&mut self, expression: NodeIndex) -> NodeIndex {
        let (pos, end) = self.cover(&[expression]);
        self.arena.add_return(
            SyntaxKind::ThrowStatement,
            pos,
            end,
            ReturnData { expression },
        )
    }

    pub fn try_stmt(
        &mut self,
        try_block: NodeIndex,
        catch_clause: NodeIndex,
        finally_block: NodeIndex,
    ) -> NodeIndex {
        let (pos, end) = self.cover(&[try_block, catch_clause, finally_block]);
        self.arena.add_try(
            SyntaxKind::TryStatement,
            pos,
            end,
            TryData {
                try_block,
                catch_clause,
                finally_block,
            },
        )
    }

    /// `catch (variable_declaration) block`; pass `NodeIndex::NONE` for `catch {}`.
    pub fn catch_clause(&mut self, variable_declaration: NodeIndex, block: NodeIndex) -> NodeIndex {
        let (pos, end) = self.cover(&[variable_declaration, block]);
        self.arena.add_catch_clause(
            SyntaxKind::CatchClause,
            pos,
            end,
            CatchClauseData {
                variable_declaration,
                block,
            },
        )
    }

    pub fn switch_stmt(&mut self, expression: NodeIndex, clauses: Vec<NodeIndex>) -> NodeIndex {
        let (pos, end) = self.cover(&clauses);
        let case_block = self.arena.add_block(
            SyntaxKind::CaseBlock,
            pos,
            end,
            BlockData {
                statements: NodeList::from(clauses),
            },
        );
        let (pos, end) = self.cover(&[expression, case_block]);
        self.arena.add_switch(
            SyntaxKind::SwitchStatement,
            pos,
            end,
            SwitchData {
                expression,
                case_block,
            },
        )
    }

    pub fn case_clause(&mut self, expression: NodeIndex, statements: Vec<NodeIndex>) -> NodeIndex {
        let (pos, end) = self.cover_list(&[expression], &statements);
        self.arena.add_case_clause(
            SyntaxKind::CaseClause,
            pos,
            end,
            CaseClauseData {
                expression,
                statements: NodeList::from(statements),
            },
        )
    }

    pub fn default_clause(&mut self, statements: Vec<NodeIndex>) -> NodeIndex {
        let (pos, end) = self.cover(&statements);
        self.arena.add_case_clause(
            SyntaxKind::DefaultClause,
            pos,
            end,
            CaseClauseData {
                expression: NodeIndex::NONE,
                statements: NodeList::from(statements),
            },
        )
    }

    pub fn labeled(&mut self, label: &str, statement: NodeIndex) -> NodeIndex {
        let label = self.arena.intern(label);
        let (pos, end) = self.cover(&[statement]);
        self.arena.add_labeled(
            SyntaxKind::LabeledStatement,
            pos,
            end,
            LabeledData { label, statement },
        )
    }

    fn jump(&mut self, kind: SyntaxKind, label: Option<&str>) -> NodeIndex {
        let label = match label {
            Some(text) => self.arena.intern(text),
            None => Atom::NONE,
        };
        let (pos, end) = self.leaf_span(5);
        self.arena.add_jump(kind, pos, end, JumpData { label })
    }

    pub fn break_stmt(&mut self, label: Option<&str>) -> NodeIndex {
        self.jump(SyntaxKind::BreakStatement, label)
    }

    pub fn continue_stmt(&mut self, label: Option<&str>) -> NodeIndex {
        self.jump(SyntaxKind::ContinueStatement, label)
    }

    pub fn with_stmt(&mut self, expression: NodeIndex, statement: NodeIndex) -> NodeIndex {
        let (pos, end) = self.cover(&[expression, statement]);
        self.arena.add_with(
            SyntaxKind::WithStatement,
            pos,
            end,
            WithData {
                expression,
                statement,
            },
        )
    }

    // =========================================================================
    // Functions and classes
    // =========================================================================

    fn function(
        &mut self,
        kind: SyntaxKind,
        name: NodeIndex,
        parameters: Vec<NodeIndex>,
        body: NodeIndex,
    ) -> NodeIndex {
        let (pos, end) = self.cover_list(&[name, body], &parameters);
        self.arena.add_function(
            kind,
            pos,
            end,
            FunctionData {
                name,
                parameters: NodeList::from(parameters),
                body,
            },
        )
    }

    pub fn function_declaration(
        &mut self,
        name: NodeIndex,
        parameters: Vec<NodeIndex>,
        body: NodeIndex,
    ) -> NodeIndex {
        self.function(SyntaxKind::FunctionDeclaration, name, parameters, body)
    }

    /// Pass `NodeIndex::NONE` as `name` for an anonymous function expression.
    pub fn function_expression(
        &mut self,
        name: NodeIndex,
        parameters: Vec<NodeIndex>,
        body: NodeIndex,
    ) -> NodeIndex {
        self.function(SyntaxKind::FunctionExpression, name, parameters, body)
    }

    /// `body` may be a block or a concise expression body.
    pub fn arrow(&mut self, parameters: Vec<NodeIndex>, body: NodeIndex) -> NodeIndex {
        self.function(SyntaxKind::ArrowFunction, NodeIndex::NONE, parameters, body)
    }

    pub fn param(&mut self, name: NodeIndex) -> NodeIndex {
        self.param_with_default(name, NodeIndex::NONE)
    }

    pub fn param_with_default(&mut self, name: NodeIndex, initializer: NodeIndex) -> NodeIndex {
        let (pos, end) = self.cover(&[name, initializer]);
        self.arena.add_parameter(
            SyntaxKind::Parameter,
            pos,
            end,
            ParameterData {
                dot_dot_dot_token: false,
                name,
                initializer,
            },
        )
    }

    pub fn rest_param(&mut self, name: NodeIndex) -> NodeIndex {
        let (pos, end) = self.cover(&[name]);
        self.arena.add_parameter(
            SyntaxKind::Parameter,
            pos,
            end,
            ParameterData {
                dot_dot_dot_token: true,
                name,
                initializer: NodeIndex::NONE,
            },
        )
    }

    fn method_like(
        &mut self,
        kind: SyntaxKind,
        name: NodeIndex,
        parameters: Vec<NodeIndex>,
        body: NodeIndex,
    ) -> NodeIndex {
        let (pos, end) = self.cover_list(&[name, body], &parameters);
        self.arena.add_method_decl(
            kind,
            pos,
            end,
            MethodDeclData {
                name,
                parameters: NodeList::from(parameters),
                body,
            },
        )
    }

    pub fn method(&mut self, name: NodeIndex, parameters: Vec<NodeIndex>, body: NodeIndex) -> NodeIndex {
        self.method_like(SyntaxKind::MethodDeclaration, name, parameters, body)
    }

    pub fn getter(&mut self, name: NodeIndex, body: NodeIndex) -> NodeIndex {
        self.method_like(SyntaxKind::GetAccessor, name, Vec::new(), body)
    }

    pub fn setter(&mut self, name: NodeIndex, parameter: NodeIndex, body: NodeIndex) -> NodeIndex {
        self.method_like(SyntaxKind::SetAccessor, name, vec![parameter], body)
    }

    pub fn constructor(&mut self, parameters: Vec<NodeIndex>, body: NodeIndex) -> NodeIndex {
        self.method_like(SyntaxKind::Constructor, NodeIndex::NONE, parameters, body)
    }

    pub fn property_decl(&mut self, name: NodeIndex, initializer: NodeIndex) -> NodeIndex {
        let (pos, end) = self.cover(&[name, initializer]);
        self.arena.add_property_decl(
            SyntaxKind::PropertyDeclaration,
            pos,
            end,
            PropertyDeclData { name, initializer },
        )
    }

    fn class(
        &mut self,
        kind: SyntaxKind,
        name: NodeIndex,
        heritage: NodeIndex,
        members: Vec<NodeIndex>,
    ) -> NodeIndex {
        let (pos, end) = self.cover_list(&[name, heritage], &members);
        self.arena.add_class(
            kind,
            pos,
            end,
            ClassData {
                name,
                heritage,
                members: NodeList::from(members),
            },
        )
    }

    pub fn class_declaration(
        &mut self,
        name: NodeIndex,
        heritage: NodeIndex,
        members: Vec<NodeIndex>,
    ) -> NodeIndex {
        self.class(SyntaxKind::ClassDeclaration, name, heritage, members)
    }

    pub fn class_expression(
        &mut self,
        name: NodeIndex,
        heritage: NodeIndex,
        members: Vec<NodeIndex>,
    ) -> NodeIndex {
        self.class(SyntaxKind::ClassExpression, name, heritage, members)
    }

    // =========================================================================
    // Binding patterns
    // =========================================================================

    pub fn object_pattern(&mut self, elements: Vec<NodeIndex>) -> NodeIndex {
        let (pos, end) = self.cover(&elements);
        self.arena.add_binding_pattern(
            SyntaxKind::ObjectBindingPattern,
            pos,
            end,
            BindingPatternData {
                elements: NodeList::from(elements),
            },
        )
    }

    pub fn array_pattern(&mut self, elements: Vec<NodeIndex>) -> NodeIndex {
        let (pos, end) = self.cover(&elements);
        self.arena.add_binding_pattern(
            SyntaxKind::ArrayBindingPattern,
            pos,
            end,
            BindingPatternData {
                elements: NodeList::from(elements),
            },
        )
    }

    /// `property_name: name = initializer`; either side may be `NodeIndex::NONE`.
    pub fn binding_element(
        &mut self,
        property_name: NodeIndex,
        name: NodeIndex,
        initializer: NodeIndex,
    ) -> NodeIndex {
        let (pos, end) = self.cover(&[property_name, name, initializer]);
        self.arena.add_binding_element(
            SyntaxKind::BindingElement,
            pos,
            end,
            BindingElementData {
                dot_dot_dot_token: false,
                property_name,
                name,
                initializer,
            },
        )
    }

    pub fn rest_element(&mut self, name: NodeIndex) -> NodeIndex {
        let (pos, end) = self.cover(&[name]);
        self.arena.add_binding_element(
            SyntaxKind::BindingElement,
            pos,
            end,
            BindingElementData {
                dot_dot_dot_token: true,
                property_name: NodeIndex::NONE,
                name,
                initializer: NodeIndex::NONE,
            },
        )
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    fn call_like(&mut self, kind: SyntaxKind, expression: NodeIndex, arguments: Vec<NodeIndex>) -> NodeIndex {
        let (pos, end) = self.cover_list(&[expression], &arguments);
        self.arena.add_call_expr(
            kind,
            pos,
            end,
            CallExprData {
                expression,
                arguments: NodeList::from(arguments),
            },
        )
    }

    pub fn call(&mut self, expression: NodeIndex, arguments: Vec<NodeIndex>) -> NodeIndex {
        self.call_like(SyntaxKind::CallExpression, expression, arguments)
    }

    pub fn new_expr(&mut self, expression: NodeIndex, arguments: Vec<NodeIndex>) -> NodeIndex {
        self.call_like(SyntaxKind::NewExpression, expression, arguments)
    }

    /// `expression.name` where `name` is an identifier node.
    pub fn member(&mut self, expression: NodeIndex, name: NodeIndex) -> NodeIndex {
        let (pos, end) = self.cover(&[expression, name]);
        self.arena.add_access_expr(
            SyntaxKind::PropertyAccessExpression,
            pos,
            end,
            AccessExprData {
                expression,
                name_or_argument: name,
            },
        )
    }

    /// `expression[argument]`
    pub fn element(&mut self, expression: NodeIndex, argument: NodeIndex) -> NodeIndex {
        let (pos, end) = self.cover(&[expression, argument]);
        self.arena.add_access_expr(
            SyntaxKind::ElementAccessExpression,
            pos,
            end,
            AccessExprData {
                expression,
                name_or_argument: argument,
            },
        )
    }

    pub fn binary(&mut self, left: NodeIndex, operator: Operator, right: NodeIndex) -> NodeIndex {
        let (pos, end) = self.cover(&[left, right]);
        self.arena.add_binary_expr(
            SyntaxKind::BinaryExpression,
            pos,
            end,
            BinaryExprData {
                left,
                operator,
                right,
            },
        )
    }

    pub fn assign(&mut self, left: NodeIndex, right: NodeIndex) -> NodeIndex {
        self.binary(left, Operator::Assign, right)
    }

    pub fn prefix(&mut self, operator: Operator, operand: NodeIndex) -> NodeIndex {
        let (pos, end) = self.cover(&[operand]);
        self.arena.add_unary_expr(
            SyntaxKind::PrefixUnaryExpression,
            pos,
            end,
            UnaryExprData { operator, operand },
        )
    }

    pub fn postfix(&mut self, operand: NodeIndex, operator: Operator) -> NodeIndex {
        let (pos, end) = self.cover(&[operand]);
        self.arena.add_unary_expr(
            SyntaxKind::PostfixUnaryExpression,
            pos,
            end,
            UnaryExprData { operator, operand },
        )
    }

    pub fn conditional(
        &mut self,
        condition: NodeIndex,
        when_true: NodeIndex,
        when_false: NodeIndex,
    ) -> NodeIndex {
        let (pos, end) = self.cover(&[condition, when_true, when_false]);
        self.arena.add_conditional_expr(
            SyntaxKind::ConditionalExpression,
            pos,
            end,
            ConditionalExprData {
                condition,
                when_true,
                when_false,
            },
        )
    }

    pub fn array(&mut self, elements: Vec<NodeIndex>) -> NodeIndex {
        let (pos, end) = self.cover(&elements);
        self.arena.add_literal_expr(
            SyntaxKind::ArrayLiteralExpression,
            pos,
            end,
            LiteralExprData {
                elements: NodeList::from(elements),
            },
        )
    }

    pub fn object(&mut self, properties: Vec<NodeIndex>) -> NodeIndex {
        let (pos, end) = self.cover(&properties);
        self.arena.add_literal_expr(
            SyntaxKind::ObjectLiteralExpression,
            pos,
            end,
            LiteralExprData {
                elements: NodeList::from(properties),
            },
        )
    }

    /// `name: initializer` inside an object literal.
    pub fn property(&mut self, name: NodeIndex, initializer: NodeIndex) -> NodeIndex {
        let (pos, end) = self.cover(&[name, initializer]);
        self.arena.add_property_assignment(
            SyntaxKind::PropertyAssignment,
            pos,
            end,
            PropertyAssignmentData { name, initializer },
        )
    }

    /// `{ name }` inside an object literal.
    pub fn shorthand(&mut self, name: NodeIndex) -> NodeIndex {
        let (pos, end) = self.cover(&[name]);
        self.arena.add_shorthand_property(
            SyntaxKind::ShorthandPropertyAssignment,
            pos,
            end,
            ShorthandPropertyData {
                name,
                object_assignment_initializer: NodeIndex::NONE,
            },
        )
    }

    fn wrapped(&mut self, kind: SyntaxKind, expression: NodeIndex) -> NodeIndex {
        let (pos, end) = self.cover(&[expression]);
        self.arena
            .add_wrapped_expr(kind, pos, end, WrappedExprData { expression })
    }

    pub fn paren(&mut self, expression: NodeIndex) -> NodeIndex {
        self.wrapped(SyntaxKind::ParenthesizedExpression, expression)
    }

    pub fn spread(&mut self, expression: NodeIndex) -> NodeIndex {
        self.wrapped(SyntaxKind::SpreadElement, expression)
    }

    /// `[expression]` used as a property name.
    pub fn computed(&mut self, expression: NodeIndex) -> NodeIndex {
        self.wrapped(SyntaxKind::ComputedPropertyName, expression)
    }

    pub fn await_expr(&mut self, expression: NodeIndex) -> NodeIndex {
        self.wrapped(SyntaxKind::AwaitExpression, expression)
    }

    pub fn yield_expr(&mut self, expression: NodeIndex) -> NodeIndex {
        self.wrapped(SyntaxKind::YieldExpression, expression)
    }
}
