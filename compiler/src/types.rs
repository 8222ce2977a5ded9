use serde::Serialize;

/// Width in bits of the smallest independently addressable location on the
/// target. Every register spans exactly one unit.
pub const UNIT_WIDTH: u32 = 8;

/// Widths that have a fixed-size unsigned integer type on the target.
pub const INT_WIDTHS: [u32; 4] = [8, 16, 32, 64];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntType {
    pub width: u32,
}

impl IntType {
    pub fn from_width(width: u32) -> Option<IntType> {
        if INT_WIDTHS.contains(&width) {
            Some(IntType { width })
        } else {
            None
        }
    }

    /// The integer type spanning exactly one addressable unit.
    pub fn unit() -> IntType {
        IntType { width: UNIT_WIDTH }
    }

    pub fn name(&self) -> String {
        format!("uint{}_t", self.width)
    }
}

/// The type a field's accessors read and write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "lowercase")]
pub enum ValueType {
    Integer(IntType),
    /// Refers to an [`Enum`] by name.
    Enum(String),
}

impl ValueType {
    pub fn name(&self) -> String {
        match self {
            ValueType::Integer(int) => int.name(),
            ValueType::Enum(name)   => name.clone(),
        }
    }

    /// Storage width of the declared type; a field narrower than this is
    /// emitted as a bit-field.
    pub fn width(&self) -> u32 {
        match self {
            ValueType::Integer(int) => int.width,
            ValueType::Enum(_)      => UNIT_WIDTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Member {
    pub name:    String,
    pub value:   u64,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Enum {
    pub name:    String,
    pub width:   u32,
    pub members: Vec<Member>,
}

impl Enum {
    pub fn underlying_type(&self) -> IntType {
        IntType { width: self.width }
    }
}

/// Read/write classification of a register field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    NonVolatileReadWrite,
    VolatileReadWrite,
    VolatileReadOnly,
    WriteOnly,
}

impl Capability {
    pub const ALL: [Capability; 4] = [
        Capability::NonVolatileReadWrite,
        Capability::VolatileReadWrite,
        Capability::VolatileReadOnly,
        Capability::WriteOnly,
    ];

    pub fn from_kind(kind: &str) -> Option<Capability> {
        Capability::ALL.into_iter().find(|c| c.kind() == kind)
    }

    /// Name used for this capability in definition files.
    pub fn kind(&self) -> &'static str {
        match self {
            Capability::NonVolatileReadWrite => "non_volatile_read_write",
            Capability::VolatileReadWrite    => "volatile_read_write",
            Capability::VolatileReadOnly     => "volatile_read_only",
            Capability::WriteOnly            => "write_only",
        }
    }

    pub fn can_read(&self) -> bool {
        !matches!(self, Capability::WriteOnly)
    }

    pub fn can_write(&self) -> bool {
        !matches!(self, Capability::VolatileReadOnly)
    }

    pub fn is_read_volatile(&self) -> bool {
        matches!(self, Capability::VolatileReadWrite | Capability::VolatileReadOnly)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub name:       String,
    /// Bit position of the least significant bit within the register.
    pub offset:     u32,
    pub width:      u32,
    pub value_type: ValueType,
    pub capability: Capability,
}

impl Field {
    pub fn can_read(&self) -> bool {
        self.capability.can_read()
    }

    pub fn can_write(&self) -> bool {
        self.capability.can_write()
    }

    pub fn is_read_volatile(&self) -> bool {
        self.capability.is_read_volatile()
    }

    /// Whether the field occupies its whole value type, so no bit-width is needed.
    pub fn is_full_width(&self) -> bool {
        self.width == self.value_type.width()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Padding {
    pub offset: u32,
    pub width:  u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LayoutItem {
    Field(Field),
    Padding(Padding),
}

impl LayoutItem {
    pub fn offset(&self) -> u32 {
        match self {
            LayoutItem::Field(field)     => field.offset,
            LayoutItem::Padding(padding) => padding.offset,
        }
    }

    pub fn width(&self) -> u32 {
        match self {
            LayoutItem::Field(field)     => field.width,
            LayoutItem::Padding(padding) => padding.width,
        }
    }

    pub fn as_field(&self) -> Option<&Field> {
        match self {
            LayoutItem::Field(field) => Some(field),
            LayoutItem::Padding(_)   => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Register {
    pub name:    String,
    pub address: u64,
    pub layout:  Vec<LayoutItem>,
    pub width:   u32,
}

impl Register {
    /// Non-padding entries, in declared order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.layout.iter().filter_map(LayoutItem::as_field)
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields().find(|field| field.name == name)
    }

    /// A register holding one field that spans the whole unit is accessed
    /// directly through its value type.
    pub fn single_full_width_field(&self) -> Option<&Field> {
        match self.layout.as_slice() {
            [LayoutItem::Field(field)] if field.width == self.width => Some(field),
            _ => None,
        }
    }

    /// A whole-register snapshot is only meaningful when every field can be read.
    pub fn has_whole_getter(&self) -> bool {
        self.fields().all(Field::can_read)
    }

    pub fn has_whole_setter(&self) -> bool {
        self.fields().any(Field::can_write)
    }

    pub fn is_read_volatile(&self) -> bool {
        self.fields().any(Field::is_read_volatile)
    }

    pub fn storage_type(&self) -> IntType {
        IntType { width: self.width }
    }
}
