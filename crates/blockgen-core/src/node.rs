use crate::{GenError, OperationKind, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// One block in the program tree.
///
/// Fields hold the block's dropdown and text values (`OP`, `NUM`, `VAR`, ...). Inputs hold the
/// blocks plugged into named value slots; a slot with no entry is unconnected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationNode {
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub inputs: BTreeMap<String, OperationNode>,
}

impl OperationNode {
    pub fn new(block_type: impl Into<String>) -> Self {
        Self {
            block_type: block_type.into(),
            fields: BTreeMap::new(),
            inputs: BTreeMap::new(),
        }
    }

    pub fn of_kind(kind: OperationKind) -> Self {
        Self::new(kind.as_str())
    }

    /// Shorthand for a `math_number` literal.
    pub fn number(value: impl ToString) -> Self {
        Self::of_kind(OperationKind::Number).with_field("NUM", value)
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.fields.insert(name.into(), value.to_string());
        self
    }

    pub fn with_input(mut self, slot: impl Into<String>, child: OperationNode) -> Self {
        self.inputs.insert(slot.into(), child);
        self
    }

    pub fn kind(&self) -> Result<OperationKind> {
        OperationKind::from_str(&self.block_type)
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(|s| s.as_str())
    }

    pub fn require_field(&self, name: &str) -> Result<&str> {
        self.field(name).ok_or_else(|| GenError::MissingField {
            block_type: self.block_type.clone(),
            field: name.to_string(),
        })
    }

    /// Parse a required field through one of the tag tables.
    pub fn tag<T>(&self, name: &str) -> Result<T>
    where
        T: FromStr<Err = GenError>,
    {
        self.require_field(name)?.parse()
    }

    pub fn input(&self, slot: &str) -> Option<&OperationNode> {
        self.inputs.get(slot)
    }
}

/// Top-level blocks of a workspace, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    #[serde(default)]
    pub blocks: Vec<OperationNode>,
}

impl Program {
    pub fn new(blocks: Vec<OperationNode>) -> Self {
        Self { blocks }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
