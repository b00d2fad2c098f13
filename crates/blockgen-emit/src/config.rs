use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterConfig {
    /// Indentation used inside helper function bodies.
    pub indent_style: IndentStyle,
    /// Names generated code must not use, on top of Lua's own reserved words.
    pub reserved_words: Vec<String>,
    /// Turn a top-level value block into `local _ = <value>` so the output stays valid Lua.
    pub wrap_naked_values: bool,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            indent_style: IndentStyle::Spaces(2),
            reserved_words: Vec::new(),
            wrap_naked_values: true,
        }
    }
}

impl EmitterConfig {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndentStyle {
    Spaces(usize),
    Tabs,
}

impl IndentStyle {
    /// One level of indentation in this style.
    pub fn as_indent(&self) -> String {
        match self {
            IndentStyle::Spaces(n) => " ".repeat(*n),
            IndentStyle::Tabs => "\t".to_string(),
        }
    }

    /// Rewrite a line indented in two-space steps to use this style.
    pub fn reindent(&self, line: &str) -> String {
        let body = line.trim_start_matches(' ');
        let levels = (line.len() - body.len()) / 2;
        let stray = (line.len() - body.len()) % 2;
        format!("{}{}{}", self.as_indent().repeat(levels), " ".repeat(stray), body)
    }
}
