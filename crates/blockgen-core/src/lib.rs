/*! Core types for turning visual math blocks into Lua.
 *
 * A block program arrives as a tree of nodes, each carrying a block type, a few scalar fields and
 * named operand slots. This crate holds that model, the closed tag tables the emitters dispatch on,
 * the precedence ladder used to parenthesize composed expressions, and the naming service that keeps
 * emitted identifiers legal and unique.
 */

pub mod kind;
pub mod names;
pub mod node;
pub mod precedence;

pub use kind::{ArithmeticOp, ListOp, MathConstant, NumberProperty, OperationKind, SingleOp, TagCategory};
pub use names::{NameDatabase, NameResolver, LUA_RESERVED_WORDS};
pub use node::{OperationNode, Program};
pub use precedence::Precedence;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    #[error("Unrecognized {category}: {tag}")]
    UnrecognizedTag { category: TagCategory, tag: String },

    #[error("Missing required field: {field} in {block_type}")]
    MissingField { block_type: String, field: String },

    #[error("Invalid number literal: {0:?}")]
    InvalidNumber(String),

    #[error("Expected a value block, got statement block {block_type}")]
    ExpectedExpression { block_type: String },
}

impl GenError {
    pub fn unrecognized(category: TagCategory, tag: impl Into<String>) -> Self {
        GenError::UnrecognizedTag {
            category,
            tag: tag.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GenError>;

#[cfg(test)]
mod tests;
