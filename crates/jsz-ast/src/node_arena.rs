//! NodeArena creation methods (add_* methods).
//!
//! Every `add_*` method pushes a payload into its typed pool and a header
//! into `nodes`, returning the new node's index. Callers pass source
//! positions explicitly; `AstBuilder` computes them automatically.

use super::base::NodeIndex;
use super::node::*;
use super::syntax_kind::SyntaxKind;
use jsz_common::interner::{Atom, Interner};

macro_rules! add_pooled {
    ($(#[$meta:meta])* $fn_name:ident, $pool:ident, $data:ty) => {
        $(#[$meta])*
        pub fn $fn_name(&mut self, kind: SyntaxKind, pos: u32, end: u32, data: $data) -> NodeIndex {
            let data_index = self.$pool.len() as u32;
            self.$pool.push(data);
            self.push_node(Node::with_data(kind, pos, end, data_index))
        }
    };
}

impl NodeArena {
    pub fn new() -> NodeArena {
        let mut arena = NodeArena::default();
        arena.interner.intern_common();
        arena
    }

    /// Get a reference to the interner
    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    /// Intern a name into this arena's interner.
    pub fn intern(&mut self, text: &str) -> Atom {
        self.interner.intern(text)
    }

    /// Resolve an identifier's text through the arena interner
    #[inline]
    pub fn resolve_identifier_text(&self, data: &IdentifierData) -> &str {
        self.interner.resolve(data.atom)
    }

    /// Number of nodes allocated so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    fn push_node(&mut self, node: Node) -> NodeIndex {
        let index = NodeIndex(self.nodes.len() as u32);
        self.nodes.push(node);
        index
    }

    /// Add a node that carries no payload (keywords, empty statements, holes).
    pub fn add_token(&mut self, kind: SyntaxKind, pos: u32, end: u32) -> NodeIndex {
        self.push_node(Node::new(kind, pos, end))
    }

    /// Add an identifier node, interning its text.
    pub fn add_identifier(&mut self, text: &str, pos: u32, end: u32) -> NodeIndex {
        let atom = self.interner.intern(text);
        let data_index = self.identifiers.len() as u32;
        self.identifiers.push(IdentifierData { atom });
        self.push_node(Node::with_data(
            SyntaxKind::Identifier,
            pos,
            end,
            data_index,
        ))
    }

    /// Set packed flags on an existing node.
    pub fn set_flags(&mut self, index: NodeIndex, flags: u16) {
        if let Some(node) = self.get_mut(index) {
            node.flags = flags;
        }
    }

    add_pooled!(add_literal, literals, LiteralData);
    add_pooled!(add_source_file, source_files, SourceFileData);
    add_pooled!(
        /// Blocks and case blocks
        add_block,
        blocks,
        BlockData
    );
    add_pooled!(
        /// Variable statements and declaration lists
        add_variable,
        variables,
        VariableData
    );
    add_pooled!(
        add_variable_declaration,
        variable_declarations,
        VariableDeclarationData
    );
    add_pooled!(
        /// Function declarations, function expressions and arrows
        add_function,
        functions,
        FunctionData
    );
    add_pooled!(
        /// Methods, accessors and constructors
        add_method_decl,
        method_decls,
        MethodDeclData
    );
    add_pooled!(add_parameter, parameters, ParameterData);
    add_pooled!(add_class, classes, ClassData);
    add_pooled!(add_property_decl, property_decls, PropertyDeclData);
    add_pooled!(add_binding_pattern, binding_patterns, BindingPatternData);
    add_pooled!(add_binding_element, binding_elements, BindingElementData);
    add_pooled!(add_if_statement, if_statements, IfStatementData);
    add_pooled!(
        /// `for(;;)`, `while` and `do` loops
        add_loop,
        loops,
        LoopData
    );
    add_pooled!(add_for_in_of, for_in_of, ForInOfData);
    add_pooled!(
        /// Return and throw statements
        add_return,
        return_data,
        ReturnData
    );
    add_pooled!(add_expr_statement, expr_statements, ExprStatementData);
    add_pooled!(
        /// Parenthesized, spread, computed name, await and yield
        add_wrapped_expr,
        wrapped_exprs,
        WrappedExprData
    );
    add_pooled!(add_try, try_data, TryData);
    add_pooled!(add_catch_clause, catch_clauses, CatchClauseData);
    add_pooled!(add_switch, switch_data, SwitchData);
    add_pooled!(add_case_clause, case_clauses, CaseClauseData);
    add_pooled!(add_labeled, labeled_data, LabeledData);
    add_pooled!(
        /// Break and continue statements
        add_jump,
        jump_data,
        JumpData
    );
    add_pooled!(add_with, with_data, WithData);
    add_pooled!(
        /// Call and new expressions
        add_call_expr,
        call_exprs,
        CallExprData
    );
    add_pooled!(
        /// Property and element access
        add_access_expr,
        access_exprs,
        AccessExprData
    );
    add_pooled!(add_binary_expr, binary_exprs, BinaryExprData);
    add_pooled!(add_unary_expr, unary_exprs, UnaryExprData);
    add_pooled!(add_conditional_expr, conditional_exprs, ConditionalExprData);
    add_pooled!(
        /// Array and object literals
        add_literal_expr,
        literal_exprs,
        LiteralExprData
    );
    add_pooled!(
        add_property_assignment,
        property_assignments,
        PropertyAssignmentData
    );
    add_pooled!(
        add_shorthand_property,
        shorthand_properties,
        ShorthandPropertyData
    );
}
