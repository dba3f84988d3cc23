//! Type catalog abstraction
//!
//! A catalog is an immutable, queryable collection of kernel type
//! definitions. The resolver only ever needs one capability from it: find
//! every definition recorded under a name. Keeping that behind a trait lets
//! the BTF-backed catalog and static per-kernel layout tables feed the same
//! resolution algorithm unmodified.

pub mod btf;
pub mod fallback;

pub use btf::BtfTypeCatalog;
pub use fallback::StaticTypeCatalog;

/// Kind of a type definition.
///
/// Only structs answer size/offset requests; the other kinds exist so a
/// lookup can see them and skip them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Struct,
    Enum,
    Other,
}

/// A named struct member with its bit-level offset as recorded in the
/// kernel's type information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDef {
    pub name: String,
    pub bit_offset: u32,
}

impl MemberDef {
    pub fn new(name: &str, bit_offset: u32) -> Self {
        Self { name: name.to_string(), bit_offset }
    }
}

/// One type definition as seen by the resolver.
///
/// `byte_size` is meaningful for [`TypeKind::Struct`] only. Members are in
/// declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDef {
    pub kind: TypeKind,
    pub byte_size: u64,
    pub members: Vec<MemberDef>,
}

impl TypeDef {
    /// Struct definition with the given declared size and members.
    pub fn struct_def(byte_size: u64, members: Vec<MemberDef>) -> Self {
        Self { kind: TypeKind::Struct, byte_size, members }
    }

    /// Definition of a non-struct kind; never yields a candidate value.
    pub fn other(kind: TypeKind) -> Self {
        Self { kind, byte_size: 0, members: Vec::new() }
    }
}

/// Read-only lookup over a collection of type definitions.
///
/// `name` is already normalized (no `"struct "`/`"enum "` keyword). Zero
/// matches is an empty vec, never an error: the type legitimately may not
/// exist on this kernel build. Implementations are immutable after
/// construction and safe to share across any number of fetcher sessions.
pub trait TypeCatalog {
    /// Find all type definitions recorded under `name`.
    fn definitions_by_name(&self, name: &str) -> Vec<TypeDef>;
}
