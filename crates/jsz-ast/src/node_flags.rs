//! Packed node flags stored in `Node::flags`.
//!
//! `LET`/`CONST` live on `VariableDeclarationList` nodes; a list with neither
//! flag set is a `var` list.

pub const NONE: u16 = 0;
pub const LET: u16 = 1 << 0;
pub const CONST: u16 = 1 << 1;
pub const BLOCK_SCOPED: u16 = LET | CONST;
/// Set on arrow functions and function expressions marked `async`.
pub const ASYNC: u16 = 1 << 2;
/// Set on generator functions (`function*`).
pub const GENERATOR: u16 = 1 << 3;
/// Set on class members declared `static`.
pub const STATIC: u16 = 1 << 4;
/// Set on `for await (... of ...)`.
pub const AWAIT: u16 = 1 << 5;
/// Set on optional-chain access and call expressions (`a?.b`, `f?.()`).
pub const OPTIONAL_CHAIN: u16 = 1 << 6;
