use crate::resolver::{Emitted, Resolver, Statement};
use blockgen_core::{ArithmeticOp, GenError, OperationNode, Precedence, Result};

pub(super) fn number(node: &OperationNode) -> Result<Emitted> {
    let text = node.require_field("NUM")?;
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| GenError::InvalidNumber(text.to_string()))?;

    if value.is_nan() {
        return Err(GenError::InvalidNumber(text.to_string()));
    }
    if value.is_infinite() {
        return Ok(if value > 0.0 {
            Emitted::expression("math.huge", Precedence::High)
        } else {
            Emitted::expression("-math.huge", Precedence::Unary)
        });
    }

    // -0 prints as "-0" otherwise.
    let value = if value == 0.0 { 0.0 } else { value };
    let order = if value < 0.0 {
        Precedence::Unary
    } else {
        Precedence::Atomic
    };
    Ok(Emitted::expression(value.to_string(), order))
}

fn operator(op: ArithmeticOp) -> (&'static str, Precedence) {
    match op {
        ArithmeticOp::Add => (" + ", Precedence::Additive),
        ArithmeticOp::Minus => (" - ", Precedence::Additive),
        ArithmeticOp::Multiply => (" * ", Precedence::Multiplicative),
        ArithmeticOp::Divide => (" / ", Precedence::Multiplicative),
        ArithmeticOp::Power => (" ^ ", Precedence::Exponentiation),
    }
}

pub(super) fn arithmetic(node: &OperationNode, resolver: &mut dyn Resolver) -> Result<Emitted> {
    let op: ArithmeticOp = node.tag("OP")?;
    let (symbol, order) = operator(op);

    // Operands resolve at the operator's own level so `a + b + c` stays flat. The side that would
    // regroup under Lua's associativity is held one level tighter.
    let (left_order, right_order) = match op {
        ArithmeticOp::Add | ArithmeticOp::Multiply => (order, order),
        ArithmeticOp::Minus | ArithmeticOp::Divide => (order, order.tighter()),
        ArithmeticOp::Power => (order.tighter(), order),
    };

    let left = resolver.value_or(node, "A", left_order, "0")?;
    let right = resolver.value_or(node, "B", right_order, "0")?;
    Ok(Emitted::expression(format!("{}{}{}", left, symbol, right), order))
}

pub(super) fn modulo(node: &OperationNode, resolver: &mut dyn Resolver) -> Result<Emitted> {
    let dividend = resolver.value_or(node, "DIVIDEND", Precedence::Multiplicative, "0")?;
    let divisor = resolver.value_or(node, "DIVISOR", Precedence::Multiplicative, "0")?;
    Ok(Emitted::expression(
        format!("{} % {}", dividend, divisor),
        Precedence::Multiplicative,
    ))
}

/// `name = name + delta`
pub(super) fn change(node: &OperationNode, resolver: &mut dyn Resolver) -> Result<Emitted> {
    let var = node.require_field("VAR")?;
    let delta = resolver.value_or(node, "DELTA", Precedence::Additive, "0")?;
    let name = resolver.variable_name(var);
    Ok(Emitted::Statement(Statement::line(format!(
        "{} = {} + {}",
        name, name, delta
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::test_support::StubResolver;
    use blockgen_core::OperationKind;
    use pretty_assertions::assert_eq;

    fn literal(text: &str) -> Emitted {
        number(&OperationNode::number(text)).unwrap()
    }

    #[test]
    fn test_number_precedence_follows_sign() {
        assert_eq!(literal("3"), Emitted::expression("3", Precedence::Atomic));
        assert_eq!(literal("-2"), Emitted::expression("-2", Precedence::Unary));
        assert_eq!(literal("2.5"), Emitted::expression("2.5", Precedence::Atomic));
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(literal("3.0"), Emitted::expression("3", Precedence::Atomic));
        assert_eq!(literal("-0"), Emitted::expression("0", Precedence::Atomic));
        assert_eq!(literal(" 7 "), Emitted::expression("7", Precedence::Atomic));
        assert_eq!(literal("1e3"), Emitted::expression("1000", Precedence::Atomic));
        assert_eq!(literal("Infinity"), Emitted::expression("math.huge", Precedence::High));
        assert_eq!(literal("-inf"), Emitted::expression("-math.huge", Precedence::Unary));
    }

    #[test]
    fn test_number_rejects_garbage() {
        for bad in ["", "abc", "NaN", "3abc"] {
            let err = number(&OperationNode::number(bad)).unwrap_err();
            assert_eq!(err, GenError::InvalidNumber(bad.to_string()));
        }
    }

    #[test]
    fn test_number_requires_num_field() {
        let err = number(&OperationNode::of_kind(OperationKind::Number)).unwrap_err();
        assert!(matches!(err, GenError::MissingField { ref field, .. } if field == "NUM"));
    }

    #[test]
    fn test_arithmetic_unconnected_operands_default_to_zero() {
        let node = OperationNode::of_kind(OperationKind::Arithmetic).with_field("OP", "MULTIPLY");
        let mut resolver = StubResolver::default();

        let emitted = arithmetic(&node, &mut resolver).unwrap();

        assert_eq!(emitted, Emitted::expression("0 * 0", Precedence::Multiplicative));
    }

    #[test]
    fn test_arithmetic_operand_orders() {
        let cases = [
            ("ADD", Precedence::Additive, Precedence::Additive),
            ("MINUS", Precedence::Additive, Precedence::Multiplicative),
            ("MULTIPLY", Precedence::Multiplicative, Precedence::Multiplicative),
            ("DIVIDE", Precedence::Multiplicative, Precedence::Unary),
            ("POWER", Precedence::High, Precedence::Exponentiation),
        ];

        for (op, left, right) in cases {
            let node = OperationNode::of_kind(OperationKind::Arithmetic).with_field("OP", op);
            let mut resolver = StubResolver::default();
            arithmetic(&node, &mut resolver).unwrap();

            assert_eq!(
                resolver.requested_orders,
                vec![("A".to_string(), left), ("B".to_string(), right)],
                "operand orders for {}",
                op
            );
        }
    }

    #[test]
    fn test_arithmetic_unknown_operator() {
        let node = OperationNode::of_kind(OperationKind::Arithmetic).with_field("OP", "XOR");
        let mut resolver = StubResolver::default();

        let err = arithmetic(&node, &mut resolver).unwrap_err();

        assert_eq!(err.to_string(), "Unrecognized arithmetic operator: XOR");
        assert!(resolver.requested_orders.is_empty());
    }

    #[test]
    fn test_modulo() {
        let node = OperationNode::of_kind(OperationKind::Modulo);
        let mut resolver = StubResolver::default()
            .with_slot("DIVIDEND", "a + b", Precedence::Additive)
            .with_slot("DIVISOR", "c", Precedence::Atomic);

        let emitted = modulo(&node, &mut resolver).unwrap();

        assert_eq!(
            emitted,
            Emitted::expression("(a + b) % c", Precedence::Multiplicative)
        );
    }

    #[test]
    fn test_change_is_a_statement() {
        let node = OperationNode::of_kind(OperationKind::Change).with_field("VAR", "total score");
        let mut resolver =
            StubResolver::default().with_slot("DELTA", "x * 2", Precedence::Multiplicative);

        let emitted = change(&node, &mut resolver).unwrap();

        assert_eq!(
            emitted,
            Emitted::Statement(Statement::line("total_score = total_score + x * 2"))
        );
        assert!(emitted.as_expression().is_none());
    }

    #[test]
    fn test_change_defaults_delta() {
        let node = OperationNode::of_kind(OperationKind::Change).with_field("VAR", "i");
        let mut resolver = StubResolver::default();

        let emitted = change(&node, &mut resolver).unwrap();

        assert_eq!(emitted.as_statement().unwrap().lines, vec!["i = i + 0"]);
    }
}
