use crate::resolver::{Emitted, Resolver};
use blockgen_core::{OperationNode, Precedence, Result};

/// `math.min(math.max(value, low), high)`; open bounds default to infinity.
pub(super) fn constrain(node: &OperationNode, resolver: &mut dyn Resolver) -> Result<Emitted> {
    let value = resolver.value_or(node, "VALUE", Precedence::None, "0")?;
    let low = resolver.value_or(node, "LOW", Precedence::None, "-math.huge")?;
    let high = resolver.value_or(node, "HIGH", Precedence::None, "math.huge")?;
    Ok(Emitted::expression(
        format!("math.min(math.max({}, {}), {})", value, low, high),
        Precedence::High,
    ))
}

/// Angle of the point (X, Y) in degrees, -180 to 180.
pub(super) fn atan2(node: &OperationNode, resolver: &mut dyn Resolver) -> Result<Emitted> {
    let x = resolver.value_or(node, "X", Precedence::None, "0")?;
    let y = resolver.value_or(node, "Y", Precedence::None, "0")?;
    Ok(Emitted::expression(
        format!("math.deg(math.atan2({}, {}))", y, x),
        Precedence::High,
    ))
}
