use std::collections::HashSet;

use hwreg_schema::{LayoutEntry, RegisterDefinition};

use crate::{
    error::RegGenError,
    traits::Compile,
    types::{Capability, Field, IntType, LayoutItem, Padding, Register, ValueType, UNIT_WIDTH},
    utils::{check_identifier, parse_unsigned},
};

impl Compile for RegisterDefinition {
    type Output = Register;

    fn compile(&self) -> Result<Register, RegGenError> {
        check_identifier(&self.name)?;
        let address = parse_unsigned(&self.address, &format!("address of register {}", self.name))?;

        let mut layout = Vec::with_capacity(self.layout.len());
        let mut seen = HashSet::new();
        let mut total_width: u64 = 0;

        for (index, entry) in self.layout.iter().enumerate() {
            // Offsets past the unit are only reachable on malformed input,
            // which the width check below rejects.
            let offset = total_width.min(u32::MAX as u64) as u32;
            let item = compile_entry(&self.name, index, offset, entry)?;

            if let LayoutItem::Field(ref field) = item {
                if !seen.insert(field.name.clone()) {
                    return Err(RegGenError::DuplicateMember {
                        owner:  self.name.clone(),
                        member: field.name.clone(),
                    });
                }
            }

            total_width += item.width() as u64;
            layout.push(item);
        }

        if total_width != UNIT_WIDTH as u64 {
            return Err(RegGenError::WidthMismatch {
                register: self.name.clone(),
                actual:   total_width,
                expected: UNIT_WIDTH,
            });
        }

        if seen.is_empty() {
            return Err(RegGenError::NoFields(self.name.clone()));
        }

        Ok(Register {
            name: self.name.clone(),
            address,
            layout,
            width: UNIT_WIDTH,
        })
    }
}

fn compile_entry(
    register: &str,
    index:    usize,
    offset:   u32,
    entry:    &LayoutEntry,
) -> Result<LayoutItem, RegGenError> {
    let describe = || match entry.name {
        Some(ref name) => format!("{}.{}", register, name),
        None           => format!("{}[{}]", register, index),
    };

    let width = parse_unsigned(&entry.width, &format!("width of {}", describe()))?;
    let width = match u32::try_from(width) {
        Ok(width) if width > 0 => width,
        _ => {
            return Err(RegGenError::InvalidWidth {
                entity: describe(),
                width,
            })
        }
    };

    if entry.is_padding() {
        return Ok(LayoutItem::Padding(Padding { offset, width }));
    }

    let capability = Capability::from_kind(&entry.kind).ok_or_else(|| {
        RegGenError::UnknownCapabilityKind {
            register: register.to_string(),
            field:    entry.name.clone().unwrap_or_else(describe),
            kind:     entry.kind.clone(),
        }
    })?;

    let name = entry
        .name
        .clone()
        .ok_or_else(|| RegGenError::MissingField(format!("name of {}", describe())))?;

    check_identifier(&name)?;
    let value_type = match entry.enum_name {
        Some(ref enum_name) => {
            check_identifier(enum_name)?;
            ValueType::Enum(enum_name.clone())
        }
        None => ValueType::Integer(IntType::unit()),
    };

    Ok(LayoutItem::Field(Field {
        name,
        offset,
        width,
        value_type,
        capability,
    }))
}
