use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegGenError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Definition parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed value {literal:?} for {entity}")]
    MalformedValue {
        entity:  String,
        literal: String,
    },

    #[error("Value {value} of {entity} does not fit in {width} bits")]
    ValueOutOfRange {
        entity: String,
        value:  i128,
        width:  u32,
    },

    #[error("Invalid width {width} for {entity}")]
    InvalidWidth {
        entity: String,
        width:  u64,
    },

    #[error("Invalid identifier \"{0}\"")]
    InvalidIdentifier(String),

    #[error("Missing required field \"{0}\"")]
    MissingField(String),

    #[error("Unrecognized type \"{kind}\" for field \"{field}\" in register \"{register}\"")]
    UnknownCapabilityKind {
        register: String,
        field:    String,
        kind:     String,
    },

    #[error("Fields in \"{register}\" add up to {actual} bits, expected {expected}")]
    WidthMismatch {
        register: String,
        actual:   u64,
        expected: u32,
    },

    #[error("Register \"{0}\" has no fields")]
    NoFields(String),

    #[error("The {kind} \"{name}\" is defined twice")]
    DuplicateDefinition {
        kind: &'static str,
        name: String,
    },

    #[error("\"{member}\" is defined twice in \"{owner}\"")]
    DuplicateMember {
        owner:  String,
        member: String,
    },

    #[error("Registers \"{first}\" and \"{second}\" share address {address:#x}")]
    DuplicateAddress {
        address: u64,
        first:   String,
        second:  String,
    },

    #[error("Field \"{field}\" of register \"{register}\" uses {width}-bit enum \"{enum_name}\", expected {expected} bits")]
    EnumWidthMismatch {
        register:  String,
        field:     String,
        enum_name: String,
        width:     u32,
        expected:  u32,
    },

    #[error("The type name \"{type_name}\" of {second} collides with {first}")]
    TypeNameCollision {
        type_name: String,
        first:     String,
        second:    String,
    },

    #[error("Field \"{field}\" of register \"{register}\" refers to undefined enum \"{enum_name}\"")]
    UnknownEnum {
        register:  String,
        field:     String,
        enum_name: String,
    },
}
