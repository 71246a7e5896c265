//! Core domain types for TypeGraph.
//!
//! Declaration records (`TypeDecl`, `MemberDecl`) are what the in-memory
//! model stores; the traversal engine itself only ever sees opaque
//! [`TypeId`] handles and the accessor slices behind
//! [`crate::model::TypeModel`].

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TypeId
// ---------------------------------------------------------------------------

/// Opaque handle to a declared type.
///
/// An arena index into the owning model. `Copy + Eq + Hash` so frontier
/// queues and dedup sets can hold it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeId(u32);

impl TypeId {
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// TypeKind
// ---------------------------------------------------------------------------

/// Kinds of declared types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
    Annotation,
}

impl TypeKind {
    /// Annotation types carry interface semantics: they sit on the
    /// superinterface side of the hierarchy and never have a superclass.
    pub fn is_interface(self) -> bool {
        matches!(self, Self::Interface | Self::Annotation)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Annotation => "annotation",
        }
    }

    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s {
            "class" => Some(Self::Class),
            "interface" => Some(Self::Interface),
            "enum" => Some(Self::Enum),
            "annotation" => Some(Self::Annotation),
            _ => None,
        }
    }
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MemberKind
// ---------------------------------------------------------------------------

/// Kinds of declared members on a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Method,
    Field,
    Annotation,
}

impl MemberKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Method => "method",
            Self::Field => "field",
            Self::Annotation => "annotation",
        }
    }

    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s {
            "method" => Some(Self::Method),
            "field" => Some(Self::Field),
            "annotation" => Some(Self::Annotation),
            _ => None,
        }
    }
}

impl std::fmt::Display for MemberKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Flags
// ---------------------------------------------------------------------------

/// Modifier bitmask on types and members.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Flags(u16);

impl Flags {
    pub const NONE: Flags = Flags(0);
    pub const PUBLIC: Flags = Flags(1 << 0);
    pub const STATIC: Flags = Flags(1 << 1);
    pub const FINAL: Flags = Flags(1 << 2);
    pub const ABSTRACT: Flags = Flags(1 << 3);
    pub const SYNTHETIC: Flags = Flags(1 << 4);

    /// True when every bit of `other` is set in `self`.
    pub fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

// ---------------------------------------------------------------------------
// TypeDecl
// ---------------------------------------------------------------------------

/// A type declaration record as stored by the in-memory model.
///
/// Relations reference other types by [`TypeId`]; ordered fields preserve
/// declaration order, which is the order traversals expose.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeDecl {
    pub name: String,
    pub kind: TypeKind,
    #[serde(default, skip_serializing_if = "Flags::is_empty")]
    pub flags: Flags,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub super_class: Option<TypeId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<TypeId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inner_types: Vec<TypeId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<MemberDecl>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<MemberDecl>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<MemberDecl>,
}

impl TypeDecl {
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            flags: Flags::NONE,
            super_class: None,
            interfaces: Vec::new(),
            inner_types: Vec::new(),
            methods: Vec::new(),
            fields: Vec::new(),
            annotations: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// MemberDecl
// ---------------------------------------------------------------------------

/// A member declared directly on one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDecl {
    pub name: String,
    pub kind: MemberKind,
    #[serde(default, skip_serializing_if = "Flags::is_empty")]
    pub flags: Flags,
}

impl MemberDecl {
    pub fn new(name: impl Into<String>, kind: MemberKind) -> Self {
        Self {
            name: name.into(),
            kind,
            flags: Flags::NONE,
        }
    }

    pub fn with_flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
