use crate::resolver::{Emitted, Resolver};
use blockgen_core::{MathConstant, OperationNode, Precedence, Result, SingleOp};

struct Template {
    prefix: &'static str,
    suffix: &'static str,
    operand: Precedence,
    result: Precedence,
}

const fn call(prefix: &'static str, suffix: &'static str) -> Template {
    Template {
        prefix,
        suffix,
        operand: Precedence::None,
        result: Precedence::High,
    }
}

fn template(op: SingleOp) -> Template {
    match op {
        SingleOp::Neg => Template {
            prefix: "-",
            suffix: "",
            operand: Precedence::Unary,
            result: Precedence::Unary,
        },
        SingleOp::Pow10 => Template {
            prefix: "10 ^ ",
            suffix: "",
            operand: Precedence::Exponentiation,
            result: Precedence::Exponentiation,
        },
        // Rounds halves up.
        SingleOp::Round => Template {
            prefix: "math.floor(",
            suffix: " + .5)",
            operand: Precedence::Additive,
            result: Precedence::High,
        },
        SingleOp::Abs => call("math.abs(", ")"),
        SingleOp::Root => call("math.sqrt(", ")"),
        SingleOp::Ln => call("math.log(", ")"),
        SingleOp::Log10 => call("math.log(", ", 10)"),
        SingleOp::Exp => call("math.exp(", ")"),
        SingleOp::RoundUp => call("math.ceil(", ")"),
        SingleOp::RoundDown => call("math.floor(", ")"),
        // Blocks work in degrees, Lua in radians.
        SingleOp::Sin => call("math.sin(math.rad(", "))"),
        SingleOp::Cos => call("math.cos(math.rad(", "))"),
        SingleOp::Tan => call("math.tan(math.rad(", "))"),
        SingleOp::Asin => call("math.deg(math.asin(", "))"),
        SingleOp::Acos => call("math.deg(math.acos(", "))"),
        SingleOp::Atan => call("math.deg(math.atan(", "))"),
    }
}

/// `math_single`, `math_round` and `math_trig`.
pub(super) fn single(node: &OperationNode, resolver: &mut dyn Resolver) -> Result<Emitted> {
    let op: SingleOp = node.tag("OP")?;
    let template = template(op);
    let arg = resolver.value_or(node, "NUM", template.operand, "0")?;

    // `--` starts a Lua comment.
    let gap = if op == SingleOp::Neg && arg.starts_with('-') {
        " "
    } else {
        ""
    };

    Ok(Emitted::expression(
        format!("{}{}{}{}", template.prefix, gap, arg, template.suffix),
        template.result,
    ))
}

pub(super) fn constant(node: &OperationNode) -> Result<Emitted> {
    let (code, order) = match node.tag::<MathConstant>("CONSTANT")? {
        MathConstant::Pi => ("math.pi", Precedence::High),
        MathConstant::E => ("math.exp(1)", Precedence::High),
        MathConstant::GoldenRatio => ("(1 + math.sqrt(5)) / 2", Precedence::Multiplicative),
        MathConstant::Sqrt2 => ("math.sqrt(2)", Precedence::High),
        MathConstant::Sqrt1_2 => ("math.sqrt(1 / 2)", Precedence::High),
        MathConstant::Infinity => ("math.huge", Precedence::High),
    };
    Ok(Emitted::expression(code, order))
}
