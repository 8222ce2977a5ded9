use serde::{Deserialize, Serialize};
use std::fmt;

/// A numeric literal as written in a definition file.
///
/// Numbers may be JSON integers or strings, so that addresses and masks can
/// be written in hexadecimal (`"0xFF40"`) or binary (`"0b0110"`). Fractional
/// and out-of-range numbers are kept as `Float` so the compiler can report
/// them against the entity they belong to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Text(String),
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Integer(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::Text(value.to_string())
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Integer(value)  => write!(f, "{}", value),
            Literal::Unsigned(value) => write!(f, "{}", value),
            Literal::Float(value)    => write!(f, "{}", value),
            Literal::Text(text)      => write!(f, "{}", text),
        }
    }
}
