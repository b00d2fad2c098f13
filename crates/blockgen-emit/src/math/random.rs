use crate::resolver::{Emitted, Resolver};
use blockgen_core::{OperationNode, Precedence, Result};

pub(super) fn random_int(node: &OperationNode, resolver: &mut dyn Resolver) -> Result<Emitted> {
    let from = resolver.value_or(node, "FROM", Precedence::None, "0")?;
    let to = resolver.value_or(node, "TO", Precedence::None, "0")?;
    Ok(Emitted::expression(
        format!("math.random({}, {})", from, to),
        Precedence::High,
    ))
}

pub(super) fn random_float() -> Emitted {
    Emitted::expression("math.random()", Precedence::High)
}
