//! A small C++ document tree.
//!
//! The emitter builds a [`Document`] and renders it once at the end, so the
//! order of declarations is decided in one place and the rendering rules
//! (indentation, blank lines) in another.

use std::fmt;

const INDENT: &str = "    ";

fn indent(line: &str) -> String {
    format!("{}{}", INDENT, line)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub includes:  Vec<Include>,
    pub namespace: Namespace,
}

impl Document {
    pub fn render(&self) -> String {
        let mut lines: Vec<String> = Vec::new();
        lines.push("#pragma once".to_string());

        let mut includes: Vec<String> = self.includes.iter().map(Include::to_string).collect();
        includes.sort();
        includes.dedup();
        for include in includes {
            lines.push(format!("#include {}", include));
        }
        lines.push(String::new());

        self.namespace.render_into(&mut lines);

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Include {
    System(String),
    Local(String),
}

impl fmt::Display for Include {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Include::System(header) => write!(f, "<{}>", header),
            Include::Local(header)  => write!(f, "\"{}\"", header),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Namespace {
    pub name:     String,
    pub sections: Vec<Section>,
}

impl Namespace {
    fn render_into(&self, lines: &mut Vec<String>) {
        lines.push(format!("namespace {} {{", self.name));
        lines.push(String::new());
        for section in &self.sections {
            section.render_into(lines);
            lines.push(String::new());
        }
        lines.push(format!("}} // {}", self.name));
    }

    pub fn decls(&self) -> impl Iterator<Item = &Decl> {
        self.sections.iter().flat_map(|section| section.decls.iter())
    }
}

/// Declarations emitted for one enum or one register, followed by a blank line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Section {
    pub decls: Vec<Decl>,
}

impl Section {
    fn render_into(&self, lines: &mut Vec<String>) {
        for decl in &self.decls {
            if let Decl::Function(_) = decl {
                lines.push(String::new());
            }
            lines.extend(decl.lines());
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Constant(Constant),
    Enum(EnumDecl),
    Struct(StructDecl),
    Function(Function),
}

impl Decl {
    pub fn lines(&self) -> Vec<String> {
        match self {
            Decl::Constant(constant) => vec![constant.to_string()],
            Decl::Enum(decl)         => decl.lines(),
            Decl::Struct(decl)       => decl.lines(),
            Decl::Function(function) => function.lines(),
        }
    }
}

/// `static constexpr <ty> <name> = <hex>;`
#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
    pub ty:    String,
    pub name:  String,
    pub value: u64,
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "static constexpr {} {} = {:#x};", self.ty, self.name, self.value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumDecl {
    pub name:       String,
    pub underlying: String,
    pub members:    Vec<Enumerator>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enumerator {
    pub name:    String,
    pub value:   u64,
    pub comment: Option<String>,
}

impl EnumDecl {
    fn lines(&self) -> Vec<String> {
        let mut lines = vec![format!("enum class {} : {} {{", self.name, self.underlying)];
        for member in &self.members {
            if let Some(ref comment) = member.comment {
                // One `//` per line of comment text
                lines.extend(comment.lines().map(|line| indent(format!("// {}", line).trim_end())));
            }
            lines.push(indent(&format!("{} = {:#x},", member.name, member.value)));
        }
        lines.push("};".to_string());
        lines
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructDecl {
    pub name:    String,
    pub members: Vec<StructMember>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructMember {
    pub ty:   String,
    pub name: String,
    /// Bit-field width; `None` for a member spanning its whole type.
    pub bits: Option<u32>,
}

impl StructDecl {
    fn lines(&self) -> Vec<String> {
        let mut lines = vec![format!("struct [[gnu::packed]] {} {{", self.name)];
        for member in &self.members {
            let line = match member.bits {
                Some(bits) => format!("{} {} : {};", member.ty, member.name, bits),
                None       => format!("{} {};", member.ty, member.name),
            };
            lines.push(indent(&line));
        }
        lines.push("};".to_string());
        lines
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub ty:   String,
    pub name: String,
}

/// `[[nodiscard]] inline auto <name>(<param>) -> <ret> { <body> }`
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub nodiscard: bool,
    pub name:      String,
    pub param:     Option<Param>,
    pub returns:   String,
    pub body:      Vec<Stmt>,
}

impl Function {
    fn lines(&self) -> Vec<String> {
        let attribute = if self.nodiscard { "[[nodiscard]] " } else { "" };
        let param = match self.param {
            Some(ref param) => format!("{} {}", param.ty, param.name),
            None            => String::new(),
        };

        let mut lines = vec![format!(
            "{}inline auto {}({}) -> {} {{",
            attribute, self.name, param, self.returns
        )];
        lines.extend(self.body.iter().map(|stmt| indent(&stmt.to_string())));
        lines.push("}".to_string());
        lines
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `static_assert(sizeof(<lhs>) == sizeof(<rhs>));`
    StaticAssertSameSize { lhs: String, rhs: String },
    Declare { ty: String, name: String, init: Option<Expr> },
    /// Bitwise copy of `sizeof(<ty>)` bytes from `src` into `dst`. Spelled as
    /// the builtin because the target has no libc `memcpy`.
    BitCopy { dst: String, src: String, ty: String },
    Assign { target: Expr, value: Expr },
    Return(Expr),
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::StaticAssertSameSize { lhs, rhs } => {
                write!(f, "static_assert(sizeof({}) == sizeof({}));", lhs, rhs)
            }
            Stmt::Declare { ty, name, init: Some(init) } => write!(f, "{} {} = {};", ty, name, init),
            Stmt::Declare { ty, name, init: None }       => write!(f, "{} {};", ty, name),
            Stmt::BitCopy { dst, src, ty } => {
                write!(f, "__builtin_memcpy(&{}, &{}, sizeof({}));", dst, src, ty)
            }
            Stmt::Assign { target, value } => write!(f, "{} = {};", target, value),
            Stmt::Return(expr)             => write!(f, "return {};", expr),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Ident(String),
    /// `*(<ty> volatile*)<addr>`
    Deref { ty: String, volatile: bool, addr: String },
    /// `((<ty> volatile*)<addr>)-><member>`
    Member { ty: String, volatile: bool, addr: String, member: String },
}

impl Expr {
    pub fn is_volatile(&self) -> bool {
        match self {
            Expr::Ident(_)                  => false,
            Expr::Deref { volatile, .. }    => *volatile,
            Expr::Member { volatile, .. }   => *volatile,
        }
    }
}

fn pointer(ty: &str, volatile: bool) -> String {
    if volatile {
        format!("{} volatile*", ty)
    } else {
        format!("{}*", ty)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Ident(name) => write!(f, "{}", name),
            Expr::Deref { ty, volatile, addr } => {
                write!(f, "*({}){}", pointer(ty, *volatile), addr)
            }
            Expr::Member { ty, volatile, addr, member } => {
                write!(f, "(({}){})->{}", pointer(ty, *volatile), addr, member)
            }
        }
    }
}
