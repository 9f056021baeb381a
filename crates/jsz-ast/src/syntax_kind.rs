//! Node kinds and operator tokens for the JavaScript subset the analyzer walks.

use serde::{Deserialize, Serialize};

/// Kind tag stored in every `Node` header.
#[repr(u16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SyntaxKind {
    Unknown,

    // Names and literals
    Identifier,
    StringLiteral,
    NumericLiteral,
    ThisKeyword,
    SuperKeyword,
    NullKeyword,
    TrueKeyword,
    FalseKeyword,
    ComputedPropertyName,

    // Expressions
    ArrayLiteralExpression,
    ObjectLiteralExpression,
    PropertyAssignment,
    ShorthandPropertyAssignment,
    SpreadElement,
    OmittedExpression,
    PropertyAccessExpression,
    ElementAccessExpression,
    CallExpression,
    NewExpression,
    ParenthesizedExpression,
    FunctionExpression,
    ArrowFunction,
    ClassExpression,
    PrefixUnaryExpression,
    PostfixUnaryExpression,
    BinaryExpression,
    ConditionalExpression,
    AwaitExpression,
    YieldExpression,

    // Binding patterns
    ObjectBindingPattern,
    ArrayBindingPattern,
    BindingElement,
    Parameter,

    // Statements
    SourceFile,
    Block,
    EmptyStatement,
    VariableStatement,
    VariableDeclarationList,
    VariableDeclaration,
    ExpressionStatement,
    IfStatement,
    DoStatement,
    WhileStatement,
    ForStatement,
    ForInStatement,
    ForOfStatement,
    ContinueStatement,
    BreakStatement,
    ReturnStatement,
    WithStatement,
    SwitchStatement,
    CaseBlock,
    CaseClause,
    DefaultClause,
    LabeledStatement,
    ThrowStatement,
    TryStatement,
    CatchClause,
    DebuggerStatement,

    // Declarations and class members
    FunctionDeclaration,
    ClassDeclaration,
    MethodDeclaration,
    GetAccessor,
    SetAccessor,
    Constructor,
    PropertyDeclaration,
}

impl SyntaxKind {
    /// Nodes that own a parameter list and a body.
    #[inline]
    pub fn is_function_like(self) -> bool {
        matches!(
            self,
            SyntaxKind::FunctionDeclaration
                | SyntaxKind::FunctionExpression
                | SyntaxKind::ArrowFunction
                | SyntaxKind::MethodDeclaration
                | SyntaxKind::GetAccessor
                | SyntaxKind::SetAccessor
                | SyntaxKind::Constructor
        )
    }
}

/// Operator token of a binary or unary expression.
///
/// The scope analysis never looks at operators; they are kept so a tree
/// built for analysis can still be printed or inspected faithfully.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    // Assignment
    Assign,
    PlusAssign,
    MinusAssign,
    AsteriskAssign,
    SlashAssign,
    AmpersandAmpersandAssign,
    BarBarAssign,
    QuestionQuestionAssign,

    // Binary
    Comma,
    Plus,
    Minus,
    Asterisk,
    Slash,
    Percent,
    AsteriskAsterisk,
    LessThan,
    GreaterThan,
    LessThanEquals,
    GreaterThanEquals,
    EqualsEquals,
    ExclamationEquals,
    EqualsEqualsEquals,
    ExclamationEqualsEquals,
    AmpersandAmpersand,
    BarBar,
    QuestionQuestion,
    Ampersand,
    Bar,
    Caret,
    LessThanLessThan,
    GreaterThanGreaterThan,
    In,
    Instanceof,

    // Unary
    Exclamation,
    Tilde,
    Typeof,
    Void,
    Delete,
    PlusPlus,
    MinusMinus,
}
