//! hwreg-compiler
//!
//! This crate implements:
//!  1) The enum and register compilers (`Compile` for the raw records),
//!  2) The `GeneratedSet` holding one run's compiled entities,
//!  3) A verifier for cross-register rules (duplicate addresses, dangling enums),
//!  4) C++ code generation (`compile_to_cxx` → `String`) through a document tree,
//!  5) A host-side model of register bit layouts, and
//!  6) Error types (`RegGenError`).

pub mod error;
pub mod types;
pub mod utils;
pub mod traits;
pub mod enums;
pub mod registers;
pub mod generated;
pub mod verifier;
pub mod layout;
pub mod cxx;
pub mod gen_cxx;
pub mod compiler;

pub use compiler::{compile_definitions, compile_text, generate_header};
pub use gen_cxx::{compile_to_cxx, EmitOptions};
pub use generated::GeneratedSet;
