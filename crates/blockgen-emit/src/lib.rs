/*! Turn math blocks into Lua source.
 *
 * Every block type has an emitter that returns either a value expression tagged with its
 * precedence, so parents know when to add parentheses, or a statement. Blocks that need more than
 * an expression share helper functions through a registry that emits each helper exactly once per
 * pass. The [`Generator`] drives a whole program through both.
 */

pub mod config;
pub mod emitter;
pub mod generator;
pub mod math;
pub mod output;
pub mod registry;
pub mod resolver;

pub use config::{EmitterConfig, IndentStyle};
pub use emitter::{EmitContext, EmitHelper, EmitResult, Emittable};
pub use generator::{BlockFn, GeneratedProgram, Generator};
pub use output::{render_program, write_program, OutputFormat};
pub use registry::{HelperDefinition, HelperRegistry, FUNCTION_NAME_PLACEHOLDER};
pub use resolver::{Emitted, Expression, Resolver, Statement};
