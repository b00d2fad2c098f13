//! Closed tag tables for math blocks.
//!
//! Block types and field values arrive as strings from the editor. Each table here parses one kind
//! of tag into an enum so emitters can `match` exhaustively; anything outside the table is a
//! [`GenError::UnrecognizedTag`].

use crate::GenError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which lookup table a tag was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TagCategory {
    BlockType,
    ArithmeticOperator,
    MathOperator,
    Constant,
    NumberProperty,
    ListOperator,
}

impl fmt::Display for TagCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TagCategory::BlockType => "block type",
            TagCategory::ArithmeticOperator => "arithmetic operator",
            TagCategory::MathOperator => "math operator",
            TagCategory::Constant => "math constant",
            TagCategory::NumberProperty => "number property",
            TagCategory::ListOperator => "list operator",
        };
        f.write_str(name)
    }
}

macro_rules! tag_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $category:expr, {
            $($variant:ident => $tag:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $tag),+
                }
            }
        }

        impl FromStr for $name {
            type Err = GenError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($tag => Ok($name::$variant),)+
                    other => Err(GenError::unrecognized($category, other)),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

tag_enum! {
    /// Block types handled by the math generator.
    OperationKind, TagCategory::BlockType, {
        Number => "math_number",
        Arithmetic => "math_arithmetic",
        Single => "math_single",
        Round => "math_round",
        Trig => "math_trig",
        Constant => "math_constant",
        NumberProperty => "math_number_property",
        OnList => "math_on_list",
        Modulo => "math_modulo",
        Constrain => "math_constrain",
        RandomInt => "math_random_int",
        RandomFloat => "math_random_float",
        Atan2 => "math_atan2",
        Change => "math_change",
    }
}

impl OperationKind {
    /// Statement blocks produce lines, not values.
    pub fn is_statement(&self) -> bool {
        matches!(self, OperationKind::Change)
    }
}

tag_enum! {
    ArithmeticOp, TagCategory::ArithmeticOperator, {
        Add => "ADD",
        Minus => "MINUS",
        Multiply => "MULTIPLY",
        Divide => "DIVIDE",
        Power => "POWER",
    }
}

tag_enum! {
    /// Single-operand functions shared by `math_single`, `math_round` and `math_trig`.
    SingleOp, TagCategory::MathOperator, {
        Root => "ROOT",
        Abs => "ABS",
        Neg => "NEG",
        Ln => "LN",
        Log10 => "LOG10",
        Exp => "EXP",
        Pow10 => "POW10",
        Round => "ROUND",
        RoundUp => "ROUNDUP",
        RoundDown => "ROUNDDOWN",
        Sin => "SIN",
        Cos => "COS",
        Tan => "TAN",
        Asin => "ASIN",
        Acos => "ACOS",
        Atan => "ATAN",
    }
}

tag_enum! {
    MathConstant, TagCategory::Constant, {
        Pi => "PI",
        E => "E",
        GoldenRatio => "GOLDEN_RATIO",
        Sqrt2 => "SQRT2",
        Sqrt1_2 => "SQRT1_2",
        Infinity => "INFINITY",
    }
}

tag_enum! {
    NumberProperty, TagCategory::NumberProperty, {
        Even => "EVEN",
        Odd => "ODD",
        Prime => "PRIME",
        Whole => "WHOLE",
        Positive => "POSITIVE",
        Negative => "NEGATIVE",
        DivisibleBy => "DIVISIBLE_BY",
    }
}

tag_enum! {
    ListOp, TagCategory::ListOperator, {
        Sum => "SUM",
        Min => "MIN",
        Max => "MAX",
        Average => "AVERAGE",
        Median => "MEDIAN",
        Mode => "MODE",
        StdDev => "STD_DEV",
        Random => "RANDOM",
    }
}
