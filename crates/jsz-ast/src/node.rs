//! Thin node headers and typed storage pools.
//!
//! Each `Node` is a small fixed-size header (kind, flags, position, data
//! index). Node-specific payloads live in typed `Vec` pools on the
//! `NodeArena`; `data_index` points into the pool selected by `kind`.

use super::base::{NodeIndex, NodeList};
use super::syntax_kind::{Operator, SyntaxKind};
use jsz_common::Span;
use jsz_common::interner::{Atom, Interner};
use serde::{Deserialize, Serialize};

/// Fixed-size header shared by every node kind.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Node {
    pub kind: SyntaxKind,
    /// Packed flags, see `node_flags`.
    pub flags: u16,
    pub pos: u32,
    pub end: u32,
    /// Slot in the payload pool for `kind`, or `NO_DATA` for tokens.
    pub data_index: u32,
}

impl Node {
    pub const NO_DATA: u32 = u32::MAX;

    #[inline]
    pub fn new(kind: SyntaxKind, pos: u32, end: u32) -> Node {
        Node {
            kind,
            flags: 0,
            pos,
            end,
            data_index: Self::NO_DATA,
        }
    }

    #[inline]
    pub fn with_data(kind: SyntaxKind, pos: u32, end: u32, data_index: u32) -> Node {
        Node {
            kind,
            flags: 0,
            pos,
            end,
            data_index,
        }
    }

    #[inline]
    pub fn has_data(&self) -> bool {
        self.data_index != Self::NO_DATA
    }

    #[inline]
    pub fn span(&self) -> Span {
        Span::new(self.pos, self.end)
    }

    #[inline]
    pub fn is_function_like(&self) -> bool {
        self.kind.is_function_like()
    }
}

// =============================================================================
// Typed payloads
// =============================================================================

/// Data for identifiers
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct IdentifierData {
    pub atom: Atom,
}

/// Data for string and numeric literals
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LiteralData {
    pub text: String,
}

/// Data for the program root
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SourceFileData {
    pub file_name: String,
    pub statements: NodeList,
}

/// Data for blocks and case blocks
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BlockData {
    pub statements: NodeList,
}

/// Data for variable statements and variable declaration lists.
///
/// A `VariableStatement` stores its `VariableDeclarationList` as the single
/// element of `declarations`; the list stores its `VariableDeclaration`s.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VariableData {
    pub declarations: NodeList,
}

/// Data for a single `name = initializer` declarator
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct VariableDeclarationData {
    /// Identifier or binding pattern
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

/// Data for function declarations, function expressions and arrow functions
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FunctionData {
    /// NONE for anonymous functions and arrows
    pub name: NodeIndex,
    pub parameters: NodeList,
    /// A `Block`, or an expression for concise arrow bodies
    pub body: NodeIndex,
}

/// Data for methods, accessors and constructors
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MethodDeclData {
    /// Property name (identifier key, literal or computed name); NONE for constructors
    pub name: NodeIndex,
    pub parameters: NodeList,
    pub body: NodeIndex,
}

/// Data for a parameter
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ParameterData {
    pub dot_dot_dot_token: bool,
    /// Identifier or binding pattern
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

/// Data for class declarations and expressions
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClassData {
    pub name: NodeIndex,
    /// `extends` expression, NONE if absent
    pub heritage: NodeIndex,
    pub members: NodeList,
}

/// Data for class fields
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PropertyDeclData {
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

/// Data for object and array binding patterns
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BindingPatternData {
    pub elements: NodeList,
}

/// Data for a binding pattern element (`key: name = init`, `...rest`)
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct BindingElementData {
    pub dot_dot_dot_token: bool,
    /// Property key in object patterns, NONE otherwise
    pub property_name: NodeIndex,
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

/// Data for if statements
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct IfStatementData {
    pub expression: NodeIndex,
    pub then_statement: NodeIndex,
    pub else_statement: NodeIndex,
}

/// Data for `for(;;)`, `while` and `do` loops
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct LoopData {
    pub initializer: NodeIndex,
    pub condition: NodeIndex,
    pub incrementor: NodeIndex,
    pub statement: NodeIndex,
}

/// Data for `for-in` and `for-of`
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ForInOfData {
    /// Variable declaration list or assignment target expression
    pub initializer: NodeIndex,
    /// The iterated expression
    pub expression: NodeIndex,
    pub statement: NodeIndex,
}

/// Data for return and throw statements
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ReturnData {
    pub expression: NodeIndex,
}

/// Data for expression statements
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ExprStatementData {
    pub expression: NodeIndex,
}

/// Data for nodes wrapping a single expression (parenthesized, spread,
/// computed property name, await, yield)
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct WrappedExprData {
    pub expression: NodeIndex,
}

/// Data for try statements
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TryData {
    pub try_block: NodeIndex,
    pub catch_clause: NodeIndex,
    pub finally_block: NodeIndex,
}

/// Data for catch clauses
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CatchClauseData {
    /// Identifier or binding pattern; NONE for `catch { ... }`
    pub variable_declaration: NodeIndex,
    pub block: NodeIndex,
}

/// Data for switch statements
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SwitchData {
    pub expression: NodeIndex,
    /// `CaseBlock` whose statements are the case/default clauses
    pub case_block: NodeIndex,
}

/// Data for case and default clauses
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CaseClauseData {
    /// NONE for `default:`
    pub expression: NodeIndex,
    pub statements: NodeList,
}

/// Data for labeled statements.
///
/// Labels live in their own namespace and never take part in scope
/// resolution, so they are stored as atoms rather than identifier nodes.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct LabeledData {
    pub label: Atom,
    pub statement: NodeIndex,
}

/// Data for break/continue statements
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct JumpData {
    /// Atom::NONE when no label is given
    pub label: Atom,
}

/// Data for with statements
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct WithData {
    pub expression: NodeIndex,
    pub statement: NodeIndex,
}

/// Data for call and new expressions
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CallExprData {
    pub expression: NodeIndex,
    pub arguments: NodeList,
}

/// Data for property access (`a.b`) and element access (`a[b]`)
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct AccessExprData {
    pub expression: NodeIndex,
    /// Member name identifier for property access, argument expression for element access
    pub name_or_argument: NodeIndex,
}

/// Data for binary expressions (including assignments and the comma operator)
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct BinaryExprData {
    pub left: NodeIndex,
    pub operator: Operator,
    pub right: NodeIndex,
}

/// Data for prefix/postfix unary expressions
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct UnaryExprData {
    pub operator: Operator,
    pub operand: NodeIndex,
}

/// Data for `a ? b : c`
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ConditionalExprData {
    pub condition: NodeIndex,
    pub when_true: NodeIndex,
    pub when_false: NodeIndex,
}

/// Data for array and object literals
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LiteralExprData {
    pub elements: NodeList,
}

/// Data for `key: value` in object literals
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PropertyAssignmentData {
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

/// Data for `{ name }` and `{ name = default }` in object literals
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ShorthandPropertyData {
    pub name: NodeIndex,
    pub object_assignment_initializer: NodeIndex,
}

// =============================================================================
// Arena
// =============================================================================

/// Arena holding every node header and payload pool of one tree.
#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    pub nodes: Vec<Node>,
    pub(crate) interner: Interner,

    pub identifiers: Vec<IdentifierData>,
    pub literals: Vec<LiteralData>,
    pub source_files: Vec<SourceFileData>,
    pub blocks: Vec<BlockData>,
    pub variables: Vec<VariableData>,
    pub variable_declarations: Vec<VariableDeclarationData>,
    pub functions: Vec<FunctionData>,
    pub method_decls: Vec<MethodDeclData>,
    pub parameters: Vec<ParameterData>,
    pub classes: Vec<ClassData>,
    pub property_decls: Vec<PropertyDeclData>,
    pub binding_patterns: Vec<BindingPatternData>,
    pub binding_elements: Vec<BindingElementData>,
    pub if_statements: Vec<IfStatementData>,
    pub loops: Vec<LoopData>,
    pub for_in_of: Vec<ForInOfData>,
    pub return_data: Vec<ReturnData>,
    pub expr_statements: Vec<ExprStatementData>,
    pub wrapped_exprs: Vec<WrappedExprData>,
    pub try_data: Vec<TryData>,
    pub catch_clauses: Vec<CatchClauseData>,
    pub switch_data: Vec<SwitchData>,
    pub case_clauses: Vec<CaseClauseData>,
    pub labeled_data: Vec<LabeledData>,
    pub jump_data: Vec<JumpData>,
    pub with_data: Vec<WithData>,
    pub call_exprs: Vec<CallExprData>,
    pub access_exprs: Vec<AccessExprData>,
    pub binary_exprs: Vec<BinaryExprData>,
    pub unary_exprs: Vec<UnaryExprData>,
    pub conditional_exprs: Vec<ConditionalExprData>,
    pub literal_exprs: Vec<LiteralExprData>,
    pub property_assignments: Vec<PropertyAssignmentData>,
    pub shorthand_properties: Vec<ShorthandPropertyData>,
}
