use std::collections::HashSet;

use hwreg_schema::EnumDefinition;

use crate::{
    error::RegGenError,
    traits::Compile,
    types::{Enum, IntType, Member},
    utils::{check_identifier, parse_int, parse_unsigned},
};

impl Compile for EnumDefinition {
    type Output = Enum;

    /// Member order is kept as declared; it is the emission order.
    fn compile(&self) -> Result<Enum, RegGenError> {
        check_identifier(&self.name)?;

        let width = parse_unsigned(&self.width, &format!("width of enum {}", self.name))?;
        let underlying = u32::try_from(width)
            .ok()
            .and_then(IntType::from_width)
            .ok_or_else(|| RegGenError::InvalidWidth {
                entity: format!("enum {}", self.name),
                width,
            })?;

        let mut seen = HashSet::new();
        let mut members = Vec::with_capacity(self.values.len());
        for member in &self.values {
            check_identifier(&member.name)?;
            if !seen.insert(member.name.as_str()) {
                return Err(RegGenError::DuplicateMember {
                    owner:  self.name.clone(),
                    member: member.name.clone(),
                });
            }

            let entity = format!("{}::{}", self.name, member.name);
            let value = parse_int(&member.value).ok_or_else(|| RegGenError::MalformedValue {
                entity:  entity.clone(),
                literal: member.value.to_string(),
            })?;
            if value < 0 || value > max_value(underlying.width) {
                return Err(RegGenError::ValueOutOfRange {
                    entity,
                    value,
                    width: underlying.width,
                });
            }

            members.push(Member {
                name:    member.name.clone(),
                value:   value as u64,
                comment: member.comment.clone(),
            });
        }

        Ok(Enum {
            name: self.name.clone(),
            width: underlying.width,
            members,
        })
    }
}

fn max_value(width: u32) -> i128 {
    (1i128 << width) - 1
}
