use std::collections::HashMap;

use serde::Serialize;

use crate::{
    error::RegGenError,
    types::{Enum, Register},
};

/// Everything compiled from one definition file.
///
/// Enums are looked up by name but kept in insertion order, as are registers,
/// so the emitted header follows the order of the input.
#[derive(Debug, Default, Serialize)]
pub struct GeneratedSet {
    enums:      Vec<Enum>,
    #[serde(skip)]
    enum_index: HashMap<String, usize>,
    registers:  Vec<Register>,
}

impl GeneratedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_enum(&mut self, compiled: Enum) -> Result<(), RegGenError> {
        if self.enum_index.contains_key(&compiled.name) {
            return Err(RegGenError::DuplicateDefinition {
                kind: "enum",
                name: compiled.name,
            });
        }
        self.enum_index.insert(compiled.name.clone(), self.enums.len());
        self.enums.push(compiled);
        Ok(())
    }

    /// Registers are only checked against each other by the verifier, once
    /// every register has compiled.
    pub fn add_register(&mut self, compiled: Register) {
        self.registers.push(compiled);
    }

    pub fn enums(&self) -> &[Enum] {
        &self.enums
    }

    pub fn registers(&self) -> &[Register] {
        &self.registers
    }

    pub fn enum_by_name(&self, name: &str) -> Option<&Enum> {
        self.enum_index.get(name).map(|&index| &self.enums[index])
    }

    pub fn register_by_name(&self, name: &str) -> Option<&Register> {
        self.registers.iter().find(|register| register.name == name)
    }
}
