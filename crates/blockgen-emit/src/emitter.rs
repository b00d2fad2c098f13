use anyhow::Result;
use std::io::Write;

pub type EmitResult = Result<()>;

/// Indentation applied to every line written through [`EmitHelper`].
#[derive(Debug, Clone)]
pub struct EmitContext {
    pub indent_level: usize,
    pub indent_chars: String,
}

impl EmitContext {
    pub fn new() -> Self {
        Self {
            indent_level: 0,
            indent_chars: "  ".to_string(),
        }
    }

    pub fn get_indent(&self) -> String {
        self.indent_chars.repeat(self.indent_level)
    }
}

impl Default for EmitContext {
    fn default() -> Self {
        Self::new()
    }
}

pub trait Emittable {
    fn emit<W: Write>(&self, writer: &mut W, context: &mut EmitContext) -> EmitResult;
}

pub struct EmitHelper;

impl EmitHelper {
    pub fn write_line<W: Write>(writer: &mut W, context: &EmitContext, text: &str) -> EmitResult {
        writeln!(writer, "{}{}", context.get_indent(), text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_context_has_no_indent() {
        let ctx = EmitContext::default();
        assert_eq!(ctx.indent_level, 0);
        assert_eq!(ctx.get_indent(), "");
    }

    #[test]
    fn test_write_line_uses_context_indent() {
        let mut buffer = Vec::new();
        let ctx = EmitContext {
            indent_level: 2,
            ..EmitContext::new()
        };

        EmitHelper::write_line(&mut buffer, &ctx, "return 1").unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "    return 1\n");
    }
}
