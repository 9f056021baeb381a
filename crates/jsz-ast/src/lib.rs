//! Syntax tree for the jsz scope analyzer.
//!
//! Nodes are thin headers stored in a `NodeArena`; payloads live in typed
//! pools addressed through `get_*` accessors. Trees are produced by an
//! external parser or, in tests and tooling, by `AstBuilder`.

pub mod base;
pub use base::{NodeIndex, NodeList};

pub mod syntax_kind;
pub use syntax_kind::{Operator, SyntaxKind};

pub mod node_flags;

pub mod node;
pub use node::*;

mod node_arena;

pub mod node_access;
pub use node_access::NodeAccess;

pub mod builder;
pub use builder::{AstBuilder, VarKind};

#[cfg(test)]
#[path = "tests/node_access_tests.rs"]
mod node_access_tests;

#[cfg(test)]
#[path = "tests/builder_tests.rs"]
mod builder_tests;
