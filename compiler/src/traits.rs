use crate::error::RegGenError;

/// A raw definition record that compiles into a checked entity.
pub trait Compile {
    type Output;

    fn compile(&self) -> Result<Self::Output, RegGenError>;
}
