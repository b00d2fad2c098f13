use crate::config::EmitterConfig;
use crate::emitter::{EmitContext, EmitHelper, EmitResult, Emittable};
use crate::math;
use crate::registry::{HelperDefinition, HelperRegistry};
use crate::resolver::{Emitted, Expression, Resolver};
use blockgen_core::{
    GenError, NameDatabase, NameResolver, OperationNode, Precedence, Program, Result,
};
use serde::Serialize;
use std::collections::HashMap;
use std::io::Write;

/// Emitter for a block type outside the math family.
pub type BlockFn = fn(&OperationNode, &mut dyn Resolver) -> Result<Emitted>;

/// Walks a block program and emits Lua for it.
///
/// A generator owns the state of one generation pass: the helper registry and the name database.
/// Both are cleared at the start of every [`Generator::generate`] call. Run concurrent passes on
/// separate generators.
pub struct Generator {
    config: EmitterConfig,
    helpers: HelperRegistry,
    names: Box<dyn NameResolver>,
    blocks: HashMap<String, BlockFn>,
}

impl Generator {
    pub fn new(config: EmitterConfig) -> Self {
        let names = NameDatabase::with_reserved_words(&config.reserved_words);
        Self::with_names(config, Box::new(names))
    }

    pub fn with_names(config: EmitterConfig, names: Box<dyn NameResolver>) -> Self {
        Self {
            helpers: HelperRegistry::new(config.indent_style.clone()),
            config,
            names,
            blocks: HashMap::new(),
        }
    }

    /// Route `block_type` to `emit` instead of the math emitters.
    pub fn register_block(&mut self, block_type: impl Into<String>, emit: BlockFn) {
        self.blocks.insert(block_type.into(), emit);
    }

    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    pub fn helpers(&self) -> &HelperRegistry {
        &self.helpers
    }

    /// Start a fresh pass.
    pub fn reset(&mut self) {
        self.helpers.clear();
        self.names.reset();
    }

    pub fn block_to_code(&mut self, node: &OperationNode) -> Result<Emitted> {
        tracing::trace!(block_type = %node.block_type, "emitting block");
        if let Some(emit) = self.blocks.get(&node.block_type).copied() {
            return emit(node, self);
        }
        math::emit(node, self)
    }

    /// Emit a value block, rejecting statement blocks.
    pub fn expression_to_code(&mut self, node: &OperationNode) -> Result<Expression> {
        match self.block_to_code(node)? {
            Emitted::Expression(expr) => Ok(expr),
            Emitted::Statement(_) => Err(GenError::ExpectedExpression {
                block_type: node.block_type.clone(),
            }),
        }
    }

    /// Run one generation pass over `program`.
    ///
    /// A failed pass leaves no helpers behind in [`Generator::helpers`].
    #[tracing::instrument(skip_all, fields(block_count = program.blocks.len()))]
    pub fn generate(&mut self, program: &Program) -> Result<GeneratedProgram> {
        self.reset();
        for block in &program.blocks {
            self.declare_variables(block);
        }

        let code = match self.emit_blocks(&program.blocks) {
            Ok(code) => code,
            Err(err) => {
                tracing::debug!(error = %err, "generation pass failed");
                self.reset();
                return Err(err);
            }
        };

        tracing::debug!(
            helpers = self.helpers.len(),
            lines = code.len(),
            "generation pass finished"
        );
        Ok(GeneratedProgram {
            helpers: self.helpers.definitions().cloned().collect(),
            code,
        })
    }

    fn emit_blocks(&mut self, blocks: &[OperationNode]) -> Result<Vec<String>> {
        let mut code = Vec::new();
        for block in blocks {
            match self.block_to_code(block)? {
                Emitted::Statement(stmt) => code.extend(stmt.lines),
                Emitted::Expression(expr) => code.push(self.scrub_naked_value(&expr)),
            }
        }
        Ok(code)
    }

    /// Claim user variable names before any helper can take them.
    fn declare_variables(&mut self, node: &OperationNode) {
        let is_statement = node.kind().map(|k| k.is_statement()).unwrap_or(false);
        if is_statement {
            if let Some(var) = node.field("VAR") {
                self.names.variable_name(var);
            }
        }
        for child in node.inputs.values() {
            self.declare_variables(child);
        }
    }

    fn scrub_naked_value(&self, expr: &Expression) -> String {
        if self.config.wrap_naked_values {
            format!("local _ = {}", expr.code)
        } else {
            expr.code.clone()
        }
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(EmitterConfig::default())
    }
}

impl Resolver for Generator {
    fn value_to_code(
        &mut self,
        node: &OperationNode,
        slot: &str,
        order: Precedence,
    ) -> Result<Option<String>> {
        let Some(child) = node.input(slot) else {
            return Ok(None);
        };
        let expr = self.expression_to_code(child)?;
        Ok(Some(expr.order.wrap(&expr.code, order)))
    }

    fn provide_function(&mut self, logical_name: &str, template: &[String]) -> String {
        self.helpers
            .provide(self.names.as_mut(), logical_name, template)
    }

    fn variable_name(&mut self, name: &str) -> String {
        self.names.variable_name(name)
    }
}

/// Output of one generation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedProgram {
    pub helpers: Vec<HelperDefinition>,
    pub code: Vec<String>,
}

impl GeneratedProgram {
    /// Helper definitions, then the program's own lines.
    pub fn to_source(&self) -> String {
        let mut source = String::new();
        if !self.helpers.is_empty() {
            let definitions: Vec<String> = self.helpers.iter().map(|h| h.source()).collect();
            source.push_str(&definitions.join("\n\n"));
            source.push_str("\n\n\n");
        }
        for line in &self.code {
            source.push_str(line);
            source.push('\n');
        }
        source
    }
}

impl Emittable for GeneratedProgram {
    fn emit<W: Write>(&self, writer: &mut W, context: &mut EmitContext) -> EmitResult {
        for (i, helper) in self.helpers.iter().enumerate() {
            if i > 0 {
                writeln!(writer)?;
            }
            for line in &helper.lines {
                EmitHelper::write_line(writer, context, line)?;
            }
        }
        if !self.helpers.is_empty() {
            writeln!(writer)?;
            writeln!(writer)?;
        }
        for line in &self.code {
            EmitHelper::write_line(writer, context, line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::Statement;
    use blockgen_core::OperationKind;
    use pretty_assertions::assert_eq;

    fn list_block(node: &OperationNode, resolver: &mut dyn Resolver) -> Result<Emitted> {
        let mut items = Vec::new();
        for i in 0.. {
            match resolver.value_to_code(node, &format!("ADD{}", i), Precedence::None)? {
                Some(item) => items.push(item),
                None => break,
            }
        }
        Ok(Emitted::expression(format!("{{{}}}", items.join(", ")), Precedence::High))
    }

    fn print_block(node: &OperationNode, resolver: &mut dyn Resolver) -> Result<Emitted> {
        let text = resolver.value_or(node, "TEXT", Precedence::None, "''")?;
        Ok(Emitted::Statement(Statement::line(format!("print({})", text))))
    }

    #[test]
    fn test_registered_block_types_take_priority() {
        let mut generator = Generator::default();
        generator.register_block("lists_create_with", list_block);

        let node = OperationNode::new("lists_create_with")
            .with_input("ADD0", OperationNode::number(1))
            .with_input("ADD1", OperationNode::number(2));

        let expr = generator.expression_to_code(&node).unwrap();
        assert_eq!(expr, Expression::new("{1, 2}", Precedence::High));
    }

    #[test]
    fn test_statement_in_value_slot_is_rejected() {
        let mut generator = Generator::default();
        let node = OperationNode::of_kind(OperationKind::Single)
            .with_field("OP", "ABS")
            .with_input(
                "NUM",
                OperationNode::of_kind(OperationKind::Change).with_field("VAR", "x"),
            );

        let err = generator.block_to_code(&node).unwrap_err();
        assert_eq!(
            err,
            GenError::ExpectedExpression {
                block_type: "math_change".to_string()
            }
        );
    }

    #[test]
    fn test_naked_values_are_wrapped() {
        let mut generator = Generator::default();
        let program = Program::new(vec![OperationNode::of_kind(OperationKind::RandomFloat)]);

        let output = generator.generate(&program).unwrap();
        assert_eq!(output.code, vec!["local _ = math.random()"]);

        let mut bare = Generator::new(EmitterConfig {
            wrap_naked_values: false,
            ..EmitterConfig::default()
        });
        assert_eq!(bare.generate(&program).unwrap().code, vec!["math.random()"]);
    }

    #[test]
    fn test_variables_claim_names_before_helpers() {
        let mut generator = Generator::default();
        let program = Program::new(vec![
            OperationNode::of_kind(OperationKind::OnList).with_field("OP", "SUM"),
            OperationNode::of_kind(OperationKind::Change).with_field("VAR", "math_sum"),
        ]);

        let output = generator.generate(&program).unwrap();

        assert_eq!(output.helpers[0].identifier, "math_sum2");
        assert_eq!(
            output.code,
            vec!["local _ = math_sum2({})", "math_sum = math_sum + 0"]
        );
    }

    #[test]
    fn test_emit_matches_to_source() {
        let mut generator = Generator::default();
        generator.register_block("text_print", print_block);
        let program = Program::new(vec![OperationNode::new("text_print").with_input(
            "TEXT",
            OperationNode::of_kind(OperationKind::NumberProperty)
                .with_field("PROPERTY", "PRIME")
                .with_input("NUMBER_TO_CHECK", OperationNode::number(7)),
        )]);

        let output = generator.generate(&program).unwrap();

        let mut buffer = Vec::new();
        output.emit(&mut buffer, &mut EmitContext::new()).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), output.to_source());
        assert!(output.to_source().ends_with("end\n\n\nprint(math_isPrime(7))\n"));
    }

    #[test]
    fn test_failed_pass_leaves_no_helpers() {
        let mut generator = Generator::default();
        let program = Program::new(vec![
            OperationNode::of_kind(OperationKind::OnList).with_field("OP", "SUM"),
            OperationNode::new("text_length"),
        ]);

        assert!(generator.generate(&program).is_err());
        assert!(generator.helpers().is_empty());
    }

    #[test]
    fn test_empty_program() {
        let mut generator = Generator::default();
        let output = generator.generate(&Program::default()).unwrap();

        assert!(output.helpers.is_empty());
        assert_eq!(output.to_source(), "");
    }
}
