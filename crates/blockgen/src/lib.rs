/*! Visual math blocks in, Lua out.
 *
 * Single import for the block model, the emitters and the generation driver.
 */

pub use blockgen_core as core;
pub use blockgen_emit as emit;

pub use blockgen_core::{
    GenError, NameDatabase, NameResolver, OperationKind, OperationNode, Precedence, Program,
};

pub use blockgen_emit::{
    EmitterConfig, Emitted, Expression, GeneratedProgram, Generator, HelperRegistry, Resolver,
    Statement,
};

/// Generate Lua source for `program` with the default configuration.
pub fn compile(program: &Program) -> Result<String, GenError> {
    Ok(Generator::default().generate(program)?.to_source())
}
