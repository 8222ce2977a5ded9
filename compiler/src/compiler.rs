use hwreg_schema::{parse_definitions, Definition};

use crate::{
    error::RegGenError,
    gen_cxx::{compile_to_cxx, EmitOptions},
    generated::GeneratedSet,
    traits::Compile,
    verifier::verify_generated,
};

/// Compile definition records in order. The first failing record aborts
/// the run.
pub fn compile_definitions(definitions: &[Definition]) -> Result<GeneratedSet, RegGenError> {
    let mut generated = GeneratedSet::new();
    for definition in definitions {
        match definition {
            Definition::Enum(def)     => generated.add_enum(def.compile()?)?,
            Definition::Register(def) => generated.add_register(def.compile()?),
        }
    }
    Ok(generated)
}

/// Parse, compile and verify the text of a definition file.
pub fn compile_text(text: &str) -> Result<GeneratedSet, RegGenError> {
    let definitions = parse_definitions(text)?;
    let generated = compile_definitions(&definitions)?;
    verify_generated(&generated)?;
    Ok(generated)
}

/// Produce the complete header for the text of a definition file.
pub fn generate_header(text: &str, options: &EmitOptions) -> Result<String, RegGenError> {
    let definitions = parse_definitions(text)?;
    let generated = compile_definitions(&definitions)?;
    compile_to_cxx(&generated, options)
}
