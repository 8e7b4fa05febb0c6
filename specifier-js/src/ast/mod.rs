//! A compact module-level syntax tree that implements the host capabilities,
//! for hosts without their own tree and for tests.

pub mod expr;
mod host;
pub mod node;
pub mod stmt;

pub use host::{module_specifiers, AstFactory};
