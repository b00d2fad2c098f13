//! Lua emitters for the math block family.
//!
//! One function per block type. Each reads its fields, pulls operand code through the
//! [`Resolver`], and returns either an expression with its precedence or a statement.

mod arithmetic;
mod functions;
pub mod helpers;
mod lists;
mod property;
mod random;
mod single;

use crate::resolver::{Emitted, Resolver};
use blockgen_core::{OperationKind, OperationNode, Result};

/// Emit `node`, failing if its block type is not a math block.
pub fn emit(node: &OperationNode, resolver: &mut dyn Resolver) -> Result<Emitted> {
    let kind = node.kind()?;
    emit_kind(kind, node, resolver)
}

pub fn emit_kind(
    kind: OperationKind,
    node: &OperationNode,
    resolver: &mut dyn Resolver,
) -> Result<Emitted> {
    match kind {
        OperationKind::Number => arithmetic::number(node),
        OperationKind::Arithmetic => arithmetic::arithmetic(node, resolver),
        OperationKind::Single | OperationKind::Round | OperationKind::Trig => {
            single::single(node, resolver)
        }
        OperationKind::Constant => single::constant(node),
        OperationKind::NumberProperty => property::number_property(node, resolver),
        OperationKind::OnList => lists::on_list(node, resolver),
        OperationKind::Modulo => arithmetic::modulo(node, resolver),
        OperationKind::Constrain => functions::constrain(node, resolver),
        OperationKind::RandomInt => random::random_int(node, resolver),
        OperationKind::RandomFloat => Ok(random::random_float()),
        OperationKind::Atan2 => functions::atan2(node, resolver),
        OperationKind::Change => arithmetic::change(node, resolver),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::registry::HelperRegistry;
    use crate::resolver::Resolver;
    use blockgen_core::{NameDatabase, NameResolver, OperationNode, Precedence, Result};
    use std::collections::HashMap;

    /// Resolver with canned operand code per slot.
    #[derive(Default)]
    pub struct StubResolver {
        pub slots: HashMap<String, (String, Precedence)>,
        pub requested_orders: Vec<(String, Precedence)>,
        pub helpers: HelperRegistry,
        pub names: NameDatabase,
    }

    impl StubResolver {
        pub fn with_slot(mut self, slot: &str, code: &str, order: Precedence) -> Self {
            self.slots.insert(slot.to_string(), (code.to_string(), order));
            self
        }
    }

    impl Resolver for StubResolver {
        fn value_to_code(
            &mut self,
            _node: &OperationNode,
            slot: &str,
            order: Precedence,
        ) -> Result<Option<String>> {
            self.requested_orders.push((slot.to_string(), order));
            Ok(self
                .slots
                .get(slot)
                .map(|(code, inner)| inner.wrap(code, order)))
        }

        fn provide_function(&mut self, logical_name: &str, template: &[String]) -> String {
            self.helpers.provide(&mut self.names, logical_name, template)
        }

        fn variable_name(&mut self, name: &str) -> String {
            self.names.variable_name(name)
        }
    }
}
