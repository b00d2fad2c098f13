use blockgen_core::{OperationNode, Precedence, Result};
use serde::Serialize;
use std::fmt;

/// A value-producing piece of Lua together with how tightly it binds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expression {
    pub code: String,
    pub order: Precedence,
}

impl Expression {
    pub fn new(code: impl Into<String>, order: Precedence) -> Self {
        Self {
            code: code.into(),
            order,
        }
    }
}

/// One or more complete Lua statements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statement {
    pub lines: Vec<String>,
}

impl Statement {
    pub fn line(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// What a block emitter hands back. Value blocks and statement blocks are not interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Emitted {
    Expression(Expression),
    Statement(Statement),
}

impl Emitted {
    pub fn expression(code: impl Into<String>, order: Precedence) -> Self {
        Emitted::Expression(Expression::new(code, order))
    }

    pub fn as_expression(&self) -> Option<&Expression> {
        match self {
            Emitted::Expression(expr) => Some(expr),
            Emitted::Statement(_) => None,
        }
    }

    pub fn as_statement(&self) -> Option<&Statement> {
        match self {
            Emitted::Statement(stmt) => Some(stmt),
            Emitted::Expression(_) => None,
        }
    }
}

/// Services a block emitter needs from whoever is walking the block tree.
pub trait Resolver {
    /// Code for the block plugged into `slot` of `node`, wrapped in parentheses when it binds more
    /// loosely than `order`. `None` when the slot is unconnected; the caller picks the fallback.
    fn value_to_code(
        &mut self,
        node: &OperationNode,
        slot: &str,
        order: Precedence,
    ) -> Result<Option<String>>;

    /// Register a shared helper under `logical_name` and return the identifier to call it by.
    ///
    /// `template` lines use [`crate::FUNCTION_NAME_PLACEHOLDER`] where the identifier goes.
    fn provide_function(&mut self, logical_name: &str, template: &[String]) -> String;

    /// Emitted identifier for a user variable.
    fn variable_name(&mut self, name: &str) -> String;

    /// `value_to_code` with a fallback for an unconnected slot.
    fn value_or(
        &mut self,
        node: &OperationNode,
        slot: &str,
        order: Precedence,
        default: &str,
    ) -> Result<String> {
        Ok(self
            .value_to_code(node, slot, order)?
            .unwrap_or_else(|| default.to_string()))
    }
}
