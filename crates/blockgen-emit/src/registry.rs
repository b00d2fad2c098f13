//! Shared helper functions, emitted once per generation pass.
//!
//! Several blocks need a small Lua function rather than a one-line expression (primality, list
//! statistics). Each one is requested by a stable logical name; the first request picks an
//! identifier and stores the body, later requests only get the identifier back.

use crate::config::IndentStyle;
use blockgen_core::NameResolver;
use indexmap::IndexMap;
use serde::Serialize;

/// Stand-in for the helper's final identifier inside a template.
pub const FUNCTION_NAME_PLACEHOLDER: &str = "{%FUNCTION_NAME%}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HelperDefinition {
    pub logical_name: String,
    pub identifier: String,
    pub lines: Vec<String>,
}

impl HelperDefinition {
    pub fn source(&self) -> String {
        self.lines.join("\n")
    }
}

#[derive(Debug, Clone)]
pub struct HelperRegistry {
    indent: IndentStyle,
    definitions: IndexMap<String, HelperDefinition>,
}

impl HelperRegistry {
    pub fn new(indent: IndentStyle) -> Self {
        Self {
            indent,
            definitions: IndexMap::new(),
        }
    }

    /// Identifier for `logical_name`, registering `template` on the first request of the pass.
    pub fn provide(
        &mut self,
        names: &mut dyn NameResolver,
        logical_name: &str,
        template: &[String],
    ) -> String {
        if let Some(existing) = self.definitions.get(logical_name) {
            tracing::debug!(logical_name, identifier = %existing.identifier, "reusing helper");
            return existing.identifier.clone();
        }

        let identifier = names.distinct_name(logical_name);
        let lines = template
            .iter()
            .map(|line| {
                self.indent
                    .reindent(&line.replace(FUNCTION_NAME_PLACEHOLDER, &identifier))
            })
            .collect();

        tracing::debug!(logical_name, identifier = %identifier, "registered helper");
        self.definitions.insert(
            logical_name.to_string(),
            HelperDefinition {
                logical_name: logical_name.to_string(),
                identifier: identifier.clone(),
                lines,
            },
        );
        identifier
    }

    pub fn identifier(&self, logical_name: &str) -> Option<&str> {
        self.definitions
            .get(logical_name)
            .map(|def| def.identifier.as_str())
    }

    /// Definitions in first-request order.
    pub fn definitions(&self) -> impl Iterator<Item = &HelperDefinition> {
        self.definitions.values()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn clear(&mut self) {
        self.definitions.clear();
    }
}

impl Default for HelperRegistry {
    fn default() -> Self {
        Self::new(IndentStyle::Spaces(2))
    }
}
