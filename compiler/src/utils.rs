use hwreg_schema::Literal;
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::RegGenError;

lazy_static! {
    static ref IDENTIFIER: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
    static ref INTEGER:    Regex = Regex::new(
        r"^(?P<sign>-)?(?:0[xX](?P<hex>[0-9a-fA-F](?:_?[0-9a-fA-F])*)|0[oO](?P<oct>[0-7](?:_?[0-7])*)|0[bB](?P<bin>[01](?:_?[01])*)|(?P<dec>[1-9](?:_?[0-9])*|0+))$"
    ).unwrap();
}

/// Parses a decimal or prefixed (`0x`, `0o`, `0b`) integer literal.
/// Returns `None` when the literal is not a well-formed integer.
pub fn parse_int(literal: &Literal) -> Option<i128> {
    let text = match literal {
        Literal::Integer(value)  => return Some(*value as i128),
        Literal::Unsigned(value) => return Some(*value as i128),
        Literal::Float(_)        => return None,
        Literal::Text(text)      => text.trim(),
    };

    let captures = INTEGER.captures(text)?;
    let (digits, radix) = if let Some(m) = captures.name("hex") {
        (m.as_str(), 16)
    } else if let Some(m) = captures.name("oct") {
        (m.as_str(), 8)
    } else if let Some(m) = captures.name("bin") {
        (m.as_str(), 2)
    } else {
        (captures.name("dec")?.as_str(), 10)
    };

    let digits = digits.replace('_', "");
    let magnitude = u64::from_str_radix(&digits, radix).ok()? as i128;
    if captures.name("sign").is_some() {
        Some(-magnitude)
    } else {
        Some(magnitude)
    }
}

/// Parses a literal that must be a non-negative integer, such as a width or
/// an address.
pub fn parse_unsigned(literal: &Literal, entity: &str) -> Result<u64, RegGenError> {
    parse_int(literal)
        .and_then(|value| u64::try_from(value).ok())
        .ok_or_else(|| RegGenError::MalformedValue {
            entity:  entity.to_string(),
            literal: literal.to_string(),
        })
}

/// Rejects names that cannot be used verbatim as C++ identifiers.
pub fn check_identifier(name: &str) -> Result<(), RegGenError> {
    if IDENTIFIER.is_match(name) {
        Ok(())
    } else {
        Err(RegGenError::InvalidIdentifier(name.to_string()))
    }
}

/// Converts a snake_case register name to the PascalCase name of its packed
/// struct, e.g. `"nr_10"` becomes `"Nr10"`.
pub fn to_struct_name(name: &str) -> String {
    name.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().to_string() + &chars.as_str().to_lowercase(),
            }
        })
        .collect::<String>()
}
