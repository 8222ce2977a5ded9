use crate::{
    cxx::{
        Constant, Decl, Document, EnumDecl, Enumerator, Expr, Function, Include, Namespace, Param,
        Section, Stmt, StructDecl, StructMember,
    },
    error::RegGenError,
    generated::GeneratedSet,
    types::{Enum, Field, IntType, LayoutItem, Register},
    utils::to_struct_name,
    verifier::verify_generated,
};

/// Which declarations go into the header, and how it refers to its peers.
#[derive(Debug, Clone, PartialEq)]
pub struct EmitOptions {
    pub emit_enums:     bool,
    pub emit_accessors: bool,
    /// Namespace wrapping every declaration, e.g. `"board::regs"`.
    pub namespace:      String,
    /// Header that declares the enums when they are not emitted here.
    pub enum_header:    String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        EmitOptions {
            emit_enums:     true,
            emit_accessors: true,
            namespace:      "registers".to_string(),
            enum_header:    "enums.hpp".to_string(),
        }
    }
}

/// Verifies the compiled set and renders it as a C++ header.
/// Nothing is rendered unless verification passes.
pub fn compile_to_cxx(generated: &GeneratedSet, options: &EmitOptions) -> Result<String, RegGenError> {
    verify_generated(generated)?;
    Ok(build_document(generated, options).render())
}

pub fn build_document(generated: &GeneratedSet, options: &EmitOptions) -> Document {
    let mut includes = vec![Include::System("stdint.h".to_string())];
    if !options.emit_enums {
        includes.push(Include::Local(options.enum_header.clone()));
    }

    let mut sections = Vec::new();
    if options.emit_enums {
        sections.extend(generated.enums().iter().map(enum_section));
    }
    if options.emit_accessors {
        sections.extend(generated.registers().iter().map(register_section));
    }

    Document {
        includes,
        namespace: Namespace {
            name: options.namespace.clone(),
            sections,
        },
    }
}

fn enum_section(compiled: &Enum) -> Section {
    let members = compiled
        .members
        .iter()
        .map(|member| Enumerator {
            name:    member.name.clone(),
            value:   member.value,
            comment: member.comment.clone(),
        })
        .collect();

    Section {
        decls: vec![Decl::Enum(EnumDecl {
            name:       compiled.name.clone(),
            underlying: compiled.underlying_type().name(),
            members,
        })],
    }
}

fn address_constant_name(register: &Register) -> String {
    format!("{}_addr", register.name)
}

fn register_section(register: &Register) -> Section {
    let addr = address_constant_name(register);
    let mut decls = vec![Decl::Constant(Constant {
        ty:    "intptr_t".to_string(),
        name:  addr.clone(),
        value: register.address,
    })];

    // A lone full-width field needs no bit layout
    if let Some(field) = register.single_full_width_field() {
        decls.extend(direct_accessors(&register.name, &addr, field));
        return Section { decls };
    }

    let struct_name = to_struct_name(&register.name);
    decls.push(Decl::Struct(packed_struct(&struct_name, register)));

    if register.has_whole_getter() {
        decls.push(Decl::Function(whole_getter(register, &struct_name, &addr)));
    }
    if register.has_whole_setter() {
        decls.push(Decl::Function(whole_setter(register, &struct_name, &addr)));
    }

    for field in register.fields() {
        decls.extend(field_accessors(register, field, &struct_name, &addr));
    }

    Section { decls }
}

fn packed_struct(struct_name: &str, register: &Register) -> StructDecl {
    let padding_type = IntType::unit().name();
    let mut padding_index = 0;
    let mut members = Vec::with_capacity(register.layout.len());

    for item in &register.layout {
        let member = match item {
            LayoutItem::Padding(padding) => {
                let member = StructMember {
                    ty:   padding_type.clone(),
                    name: format!("padding_{}", padding_index),
                    bits: Some(padding.width),
                };
                padding_index += 1;
                member
            }
            LayoutItem::Field(field) => StructMember {
                ty:   field.value_type.name(),
                name: field.name.clone(),
                bits: if field.is_full_width() { None } else { Some(field.width) },
            },
        };
        members.push(member);
    }

    StructDecl {
        name: struct_name.to_string(),
        members,
    }
}

fn getter(name: String, nodiscard: bool, returns: String, value: Expr) -> Function {
    Function {
        nodiscard,
        name,
        param: None,
        returns,
        body: vec![Stmt::Return(value)],
    }
}

fn setter(name: String, ty: String, target: Expr) -> Function {
    Function {
        nodiscard: false,
        name,
        param: Some(Param { ty, name: "value".to_string() }),
        returns: "void".to_string(),
        body: vec![Stmt::Assign { target, value: Expr::Ident("value".to_string()) }],
    }
}

fn direct_accessors(register_name: &str, addr: &str, field: &Field) -> Vec<Decl> {
    let ty = field.value_type.name();
    let mut decls = Vec::new();

    if field.can_read() {
        decls.push(Decl::Function(getter(
            format!("get_{}", register_name),
            true,
            ty.clone(),
            Expr::Deref { ty: ty.clone(), volatile: field.is_read_volatile(), addr: addr.to_string() },
        )));
    }

    if field.can_write() {
        decls.push(Decl::Function(setter(
            format!("set_{}", register_name),
            ty.clone(),
            Expr::Deref { ty, volatile: true, addr: addr.to_string() },
        )));
    }

    decls
}

/// Reads the whole register. A volatile read goes through the unit-sized
/// integer so the compiler performs exactly one load of the right width; a
/// volatile bit-field struct dereference carries no such guarantee.
fn whole_getter(register: &Register, struct_name: &str, addr: &str) -> Function {
    let int_type = register.storage_type().name();

    let body = if register.is_read_volatile() {
        vec![
            Stmt::StaticAssertSameSize { lhs: struct_name.to_string(), rhs: int_type.clone() },
            Stmt::Declare {
                ty:   int_type.clone(),
                name: "loaded".to_string(),
                init: Some(Expr::Deref { ty: int_type.clone(), volatile: true, addr: addr.to_string() }),
            },
            Stmt::Declare { ty: struct_name.to_string(), name: "result".to_string(), init: None },
            Stmt::BitCopy { dst: "result".to_string(), src: "loaded".to_string(), ty: int_type },
            Stmt::Return(Expr::Ident("result".to_string())),
        ]
    } else {
        vec![Stmt::Return(Expr::Deref {
            ty:       struct_name.to_string(),
            volatile: false,
            addr:     addr.to_string(),
        })]
    };

    Function {
        nodiscard: true,
        name:      format!("get_{}", register.name),
        param:     None,
        returns:   struct_name.to_string(),
        body,
    }
}

/// Writes the whole register with a single volatile store of the unit-sized
/// integer. Padding and unreadable fields are stored as they are in `value`.
fn whole_setter(register: &Register, struct_name: &str, addr: &str) -> Function {
    let int_type = register.storage_type().name();

    Function {
        nodiscard: false,
        name:      format!("set_{}", register.name),
        param:     Some(Param { ty: struct_name.to_string(), name: "value".to_string() }),
        returns:   "void".to_string(),
        body: vec![
            Stmt::StaticAssertSameSize { lhs: struct_name.to_string(), rhs: int_type.clone() },
            Stmt::Declare { ty: int_type.clone(), name: "to_store".to_string(), init: None },
            Stmt::BitCopy { dst: "to_store".to_string(), src: "value".to_string(), ty: int_type.clone() },
            Stmt::Assign {
                target: Expr::Deref { ty: int_type, volatile: true, addr: addr.to_string() },
                value:  Expr::Ident("to_store".to_string()),
            },
        ],
    }
}

fn field_accessors(register: &Register, field: &Field, struct_name: &str, addr: &str) -> Vec<Decl> {
    let ty = field.value_type.name();
    let member = |volatile: bool| Expr::Member {
        ty:     struct_name.to_string(),
        volatile,
        addr:   addr.to_string(),
        member: field.name.clone(),
    };
    let mut decls = Vec::new();

    if field.can_read() {
        decls.push(Decl::Function(getter(
            format!("get_{}_{}", register.name, field.name),
            false,
            ty.clone(),
            member(field.is_read_volatile()),
        )));
    }

    // Sub-field writes always target the hardware
    if field.can_write() {
        decls.push(Decl::Function(setter(
            format!("set_{}_{}", register.name, field.name),
            ty,
            member(true),
        )));
    }

    decls
}
