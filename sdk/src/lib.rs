//! hwreg
//!
//! Entry points for turning a register definition file into C++ headers.
//!
//! - `generate_header` / `EmitOptions` (re-exported from the compiler)
//! - `compile_to_json` for inspecting what a definition file compiles to

pub use hwreg_compiler::error::RegGenError;
pub use hwreg_compiler::{generate_header, EmitOptions, GeneratedSet};
pub use hwreg_schema::{Definition, Literal};

/// Compile a definition file and dump the result, bit offsets included, as
/// pretty-printed JSON.
pub fn compile_to_json(text: &str) -> Result<String, RegGenError> {
    let generated = hwreg_compiler::compile_text(text)?;
    Ok(serde_json::to_string_pretty(&generated)?)
}

pub mod error {
    pub use hwreg_compiler::error::RegGenError;
}

pub mod schema {
    pub use hwreg_schema::{Definition, EnumDefinition, LayoutEntry, Literal, MemberDefinition, RegisterDefinition};
}
