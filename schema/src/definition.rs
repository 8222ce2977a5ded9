use serde::{Deserialize, Serialize};

use crate::literal::Literal;

/// Wire name of the layout entry kind that reserves bits without a field.
pub const PADDING_KIND: &str = "padding";

/// One top-level record of a definition file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Definition {
    Enum(EnumDefinition),
    Register(RegisterDefinition),
}

impl Definition {
    pub fn name(&self) -> &str {
        match self {
            Definition::Enum(def)     => &def.name,
            Definition::Register(def) => &def.name,
        }
    }

    /// The `"type"` tag this record was read from.
    pub fn kind(&self) -> &'static str {
        match self {
            Definition::Enum(_)     => "enum",
            Definition::Register(_) => "register",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumDefinition {
    pub name:   String,
    pub width:  Literal,
    pub values: Vec<MemberDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberDefinition {
    pub name:    String,
    pub value:   Literal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterDefinition {
    pub name:    String,
    pub address: Literal,
    pub layout:  Vec<LayoutEntry>,
}

/// A field or padding entry of a register layout.
///
/// `kind` stays textual here: the set of capability kinds belongs to the
/// compiler, which reports unknown kinds with the register and field name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutEntry {
    #[serde(rename = "type")]
    pub kind:      String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name:      Option<String>,
    pub width:     Literal,
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_name: Option<String>,
}

impl LayoutEntry {
    pub fn is_padding(&self) -> bool {
        self.kind == PADDING_KIND
    }
}
