use super::helpers;
use crate::resolver::{Emitted, Resolver};
use blockgen_core::{NumberProperty, OperationNode, Precedence, Result};

pub(super) fn number_property(
    node: &OperationNode,
    resolver: &mut dyn Resolver,
) -> Result<Emitted> {
    let property: NumberProperty = node.tag("PROPERTY")?;
    let subject = resolver.value_or(node, "NUMBER_TO_CHECK", Precedence::Multiplicative, "0")?;

    let code = match property {
        NumberProperty::Prime => {
            let function = resolver.provide_function(helpers::IS_PRIME, &helpers::is_prime());
            return Ok(Emitted::expression(
                format!("{}({})", function, subject),
                Precedence::High,
            ));
        }
        NumberProperty::Even => format!("{} % 2 == 0", subject),
        NumberProperty::Odd => format!("{} % 2 == 1", subject),
        NumberProperty::Whole => format!("{} % 1 == 0", subject),
        NumberProperty::Positive => format!("{} > 0", subject),
        NumberProperty::Negative => format!("{} < 0", subject),
        NumberProperty::DivisibleBy => {
            let divisor =
                resolver.value_to_code(node, "DIVISOR", Precedence::Multiplicative)?;
            // Only a literal zero is caught here; a divisor that evaluates to zero at runtime
            // still divides by zero.
            match divisor {
                Some(divisor) if divisor != "0" => format!("{} % {} == 0", subject, divisor),
                _ => return Ok(Emitted::expression("nil", Precedence::Atomic)),
            }
        }
    };

    Ok(Emitted::expression(code, Precedence::Relational))
}
