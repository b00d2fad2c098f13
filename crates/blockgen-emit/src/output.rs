use crate::emitter::{EmitContext, Emittable};
use crate::generator::GeneratedProgram;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Plain Lua source.
    Text,
    /// `{"helpers": [...], "code": [...]}` for tools that place helpers themselves.
    Json,
}

pub fn write_program<W: Write>(
    writer: &mut W,
    program: &GeneratedProgram,
    format: OutputFormat,
    context: &mut EmitContext,
) -> Result<()> {
    match format {
        OutputFormat::Text => program.emit(writer, context),
        OutputFormat::Json => JsonFormatter::format_object(writer, &serde_json::to_value(program)?),
    }
}

pub fn render_program(program: &GeneratedProgram, format: OutputFormat) -> Result<String> {
    let mut buffer = Vec::new();
    write_program(&mut buffer, program, format, &mut EmitContext::new())?;
    Ok(String::from_utf8(buffer)?)
}

pub struct JsonFormatter;

impl JsonFormatter {
    pub fn format_object<W: Write>(writer: &mut W, obj: &serde_json::Value) -> Result<()> {
        serde_json::to_writer_pretty(&mut *writer, obj)?;
        writeln!(writer)?;
        Ok(())
    }
}
