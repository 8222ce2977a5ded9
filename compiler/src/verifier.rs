use std::collections::{HashMap, HashSet};

use crate::{
    error::RegGenError,
    generated::GeneratedSet,
    types::{ValueType, UNIT_WIDTH},
    utils::to_struct_name,
};

/// Checks that hold across registers rather than within one.
///
/// Runs after every definition has compiled, so a malformed register is
/// always reported before an address collision.
pub fn verify_generated(generated: &GeneratedSet) -> Result<(), RegGenError> {
    // 1) Each address belongs to exactly one register
    let mut addresses: HashMap<u64, &str> = HashMap::new();
    for register in generated.registers() {
        if let Some(first) = addresses.insert(register.address, &register.name) {
            return Err(RegGenError::DuplicateAddress {
                address: register.address,
                first:   first.to_string(),
                second:  register.name.clone(),
            });
        }
    }

    // 2) Register names must be unique, their address constants and accessor
    // names derive from them
    let mut names: HashSet<&str> = HashSet::new();
    for register in generated.registers() {
        if !names.insert(&register.name) {
            return Err(RegGenError::DuplicateDefinition {
                kind: "register",
                name: register.name.clone(),
            });
        }
    }

    // 3) Packed struct names share one scope with the enums
    let mut type_names: HashMap<String, String> = HashMap::new();
    for compiled in generated.enums() {
        type_names.insert(compiled.name.clone(), format!("enum \"{}\"", compiled.name));
    }
    for register in generated.registers() {
        if register.single_full_width_field().is_some() {
            continue;
        }
        let type_name = to_struct_name(&register.name);
        let owner = format!("register \"{}\"", register.name);
        if let Some(first) = type_names.insert(type_name.clone(), owner.clone()) {
            return Err(RegGenError::TypeNameCollision {
                type_name,
                first,
                second: owner,
            });
        }
    }

    // 4) Every enum a field refers to is defined in the same file and spans
    // exactly one unit, so accessors never touch neighbouring bytes
    for register in generated.registers() {
        for field in register.fields() {
            if let ValueType::Enum(ref enum_name) = field.value_type {
                let Some(compiled) = generated.enum_by_name(enum_name) else {
                    return Err(RegGenError::UnknownEnum {
                        register:  register.name.clone(),
                        field:     field.name.clone(),
                        enum_name: enum_name.clone(),
                    });
                };
                if compiled.width != UNIT_WIDTH {
                    return Err(RegGenError::EnumWidthMismatch {
                        register:  register.name.clone(),
                        field:     field.name.clone(),
                        enum_name: enum_name.clone(),
                        width:     compiled.width,
                        expected:  UNIT_WIDTH,
                    });
                }
            }
        }
    }

    Ok(())
}
