//! Host-side model of the bit pattern the generated accessors store.
//!
//! Fields are allocated from the least significant bit upwards in declared
//! order, matching how GCC and Clang lay out bit-fields of a packed struct on
//! the little-endian target. The model lets the layout be checked without
//! compiling the generated header.

use crate::types::{LayoutItem, Register};

/// Mask covering the low `width` bits.
pub fn mask(width: u32) -> u64 {
    if width >= 64 {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// One unit's worth of register bits, viewed through a compiled layout.
#[derive(Debug, Clone, Copy)]
pub struct RegisterImage<'a> {
    register: &'a Register,
    bits:     u64,
}

impl<'a> RegisterImage<'a> {
    pub fn new(register: &'a Register) -> Self {
        Self::from_bits(register, 0)
    }

    /// Bits beyond the register width are dropped.
    pub fn from_bits(register: &'a Register, bits: u64) -> Self {
        RegisterImage {
            register,
            bits: bits & mask(register.width),
        }
    }

    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// Value of the named field, or `None` if the register has no such field.
    pub fn get(&self, field: &str) -> Option<u64> {
        let field = self.register.field(field)?;
        Some((self.bits >> field.offset) & mask(field.width))
    }

    /// Stores `value` into the named field, truncated to the field width.
    /// Returns `false` if the register has no such field.
    pub fn set(&mut self, field: &str, value: u64) -> bool {
        let Some(field) = self.register.field(field) else {
            return false;
        };
        let field_mask = mask(field.width) << field.offset;
        self.bits = (self.bits & !field_mask) | ((value << field.offset) & field_mask);
        true
    }

    /// The bits that belong to padding entries.
    pub fn padding_bits(&self) -> u64 {
        self.register
            .layout
            .iter()
            .filter(|item| matches!(item, LayoutItem::Padding(_)))
            .fold(0, |acc, item| acc | (mask(item.width()) << item.offset()))
            & self.bits
    }
}
