use super::helpers;
use crate::resolver::{Emitted, Resolver};
use blockgen_core::{ListOp, OperationNode, Precedence, Result};

/// Statistics over a list. Every operation calls a shared helper on the list.
pub(super) fn on_list(node: &OperationNode, resolver: &mut dyn Resolver) -> Result<Emitted> {
    let op: ListOp = node.tag("OP")?;
    let list = resolver.value_or(node, "LIST", Precedence::None, "{}")?;

    let function = match op {
        ListOp::Sum => provide_sum(resolver),
        ListOp::Min => resolver.provide_function(helpers::MIN, &helpers::min()),
        ListOp::Max => resolver.provide_function(helpers::MAX, &helpers::max()),
        ListOp::Average => {
            let sum = provide_sum(resolver);
            resolver.provide_function(helpers::AVERAGE, &helpers::average(&sum))
        }
        ListOp::Median => resolver.provide_function(helpers::MEDIAN, &helpers::median()),
        ListOp::Mode => resolver.provide_function(helpers::MODES, &helpers::modes()),
        ListOp::StdDev => {
            let sum = provide_sum(resolver);
            resolver.provide_function(
                helpers::STANDARD_DEVIATION,
                &helpers::standard_deviation(&sum),
            )
        }
        ListOp::Random => resolver.provide_function(helpers::RANDOM_LIST, &helpers::random_list()),
    };

    Ok(Emitted::expression(
        format!("{}({})", function, list),
        Precedence::High,
    ))
}

fn provide_sum(resolver: &mut dyn Resolver) -> String {
    resolver.provide_function(helpers::SUM, &helpers::sum())
}
