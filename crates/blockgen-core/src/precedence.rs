use serde::{Deserialize, Serialize};

/// Binding strength of an emitted Lua expression.
///
/// Variants are ordered from tightest to loosest, so `a < b` means `a` binds more tightly than `b`.
/// The ladder mirrors Lua's operator table with two extra ends: `Atomic` for literals and names,
/// `None` for a context that never needs parentheses (a call argument, the right side of `=`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Precedence {
    Atomic,
    /// Function calls and table access.
    High,
    Exponentiation,
    Unary,
    Multiplicative,
    Additive,
    Concatenation,
    Relational,
    And,
    Or,
    None,
}

impl Precedence {
    /// True when an expression at `self` must be wrapped to be used where `required` is demanded.
    ///
    /// Equal levels never wrap, so `a + b` dropped into an additive slot stays bare.
    pub fn needs_parens(self, required: Precedence) -> bool {
        self > required
    }

    /// Wrap `code` in parentheses if an expression at `self` is too weak for `required`.
    pub fn wrap(self, code: &str, required: Precedence) -> String {
        if self.needs_parens(required) {
            format!("({})", code)
        } else {
            code.to_string()
        }
    }

    /// The next tighter level, saturating at `Atomic`.
    pub fn tighter(self) -> Precedence {
        match self {
            Precedence::Atomic | Precedence::High => Precedence::Atomic,
            Precedence::Exponentiation => Precedence::High,
            Precedence::Unary => Precedence::Exponentiation,
            Precedence::Multiplicative => Precedence::Unary,
            Precedence::Additive => Precedence::Multiplicative,
            Precedence::Concatenation => Precedence::Additive,
            Precedence::Relational => Precedence::Concatenation,
            Precedence::And => Precedence::Relational,
            Precedence::Or => Precedence::And,
            Precedence::None => Precedence::Or,
        }
    }
}
