//! Raw definition records for the hwreg register compiler.
//!
//! A definition file is a JSON array of records tagged by `"type"`: either an
//! `"enum"` or a `"register"`. These types mirror that file one-to-one and do
//! no validation beyond what serde enforces; the compiler turns them into
//! checked entities.
//!
//! ```
//! use hwreg_schema::*;
//!
//! let definitions = parse_definitions(r#"[
//!     {"type": "enum", "name": "Mode", "width": 8, "values": [
//!         {"name": "Off", "value": "0x0"},
//!         {"name": "On", "value": 1, "comment": "Powered"}
//!     ]},
//!     {"type": "register", "name": "ctrl", "address": "0xFF40", "layout": [
//!         {"type": "volatile_read_write", "name": "mode", "width": 1, "enum": "Mode"},
//!         {"type": "padding", "width": 7}
//!     ]}
//! ]"#).unwrap();
//!
//! assert_eq!(definitions.len(), 2);
//! assert_eq!(definitions[0].name(), "Mode");
//! assert_eq!(definitions[1].kind(), "register");
//! ```

pub mod definition;
pub mod literal;

pub use definition::*;
pub use literal::*;

/// Parse the text of a definition file.
pub fn parse_definitions(text: &str) -> serde_json::Result<Vec<Definition>> {
    serde_json::from_str(text)
}
