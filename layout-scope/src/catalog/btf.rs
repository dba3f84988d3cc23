//! BTF-backed type catalog
//!
//! Wraps the btf-rs decoder behind the [`TypeCatalog`] trait. The raw BTF
//! encoding itself is btf-rs's problem; this module only converts its typed
//! view into the neutral [`TypeDef`] model the resolver consumes.

use std::path::Path;

use btf_rs::{Btf, Type};
use log::debug;

use super::{MemberDef, TypeCatalog, TypeDef, TypeKind};
use crate::domain::errors::CatalogError;

/// Where a kernel built with CONFIG_DEBUG_INFO_BTF exposes its type catalog.
const VMLINUX_BTF_PATH: &str = "/sys/kernel/btf/vmlinux";

/// Type catalog backed by a decoded BTF blob.
pub struct BtfTypeCatalog {
    btf: Btf,
}

impl BtfTypeCatalog {
    /// Wrap an already-decoded BTF handle. No failure path.
    pub fn from_btf(btf: Btf) -> Self {
        Self { btf }
    }

    /// Decode a catalog from raw BTF bytes.
    ///
    /// # Errors
    /// Returns [`CatalogError::Parse`] if the bytes are not a valid BTF
    /// encoding; no catalog exists in that case.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CatalogError> {
        let btf = Btf::from_bytes(bytes).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Ok(Self::from_btf(btf))
    }

    /// Load the running kernel's exposed type catalog.
    ///
    /// # Errors
    /// Returns [`CatalogError::Unavailable`] if the host does not expose
    /// one, or [`CatalogError::Parse`] if the exposed data is unreadable.
    pub fn from_current_kernel() -> Result<Self, CatalogError> {
        Self::from_vmlinux(Path::new(VMLINUX_BTF_PATH))
    }

    fn from_vmlinux(path: &Path) -> Result<Self, CatalogError> {
        if !path.exists() {
            return Err(CatalogError::Unavailable(format!(
                "{} not present (kernel built without CONFIG_DEBUG_INFO_BTF?)",
                path.display()
            )));
        }
        let btf = Btf::from_file(path).map_err(|e| CatalogError::Parse(e.to_string()))?;
        debug!("loaded kernel type catalog from {}", path.display());
        Ok(Self::from_btf(btf))
    }

    fn convert(&self, ty: &Type) -> TypeDef {
        match ty {
            Type::Struct(st) => {
                let members = st
                    .members
                    .iter()
                    .filter_map(|m| {
                        // Anonymous members carry no usable name; skip them
                        // rather than failing the whole lookup.
                        let name = self.btf.resolve_name(m).ok()?;
                        Some(MemberDef { name, bit_offset: m.bit_offset() })
                    })
                    .collect();
                TypeDef { kind: TypeKind::Struct, byte_size: st.size() as u64, members }
            }
            Type::Enum(_) | Type::Enum64(_) => TypeDef::other(TypeKind::Enum),
            _ => TypeDef::other(TypeKind::Other),
        }
    }
}

impl TypeCatalog for BtfTypeCatalog {
    fn definitions_by_name(&self, name: &str) -> Vec<TypeDef> {
        // btf-rs reports an unknown name as an error; for resolution that is
        // simply zero matches.
        let Ok(types) = self.btf.resolve_types_by_name(name) else {
            return Vec::new();
        };
        types.iter().map(|ty| self.convert(ty)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BTF_KIND_STRUCT: u32 = 4;
    const BTF_MAGIC: u16 = 0xeb9f;

    /// Assemble a BTF blob from a type section and a string section.
    fn build_btf(types: &[u8], strings: &[u8]) -> Vec<u8> {
        let mut blob = Vec::new();
        blob.extend_from_slice(&BTF_MAGIC.to_le_bytes());
        blob.push(1); // version
        blob.push(0); // flags
        blob.extend_from_slice(&24u32.to_le_bytes()); // header length
        // Section offsets are relative to the end of the header.
        blob.extend_from_slice(&0u32.to_le_bytes());
        blob.extend_from_slice(&u32::try_from(types.len()).unwrap().to_le_bytes());
        blob.extend_from_slice(&u32::try_from(types.len()).unwrap().to_le_bytes());
        blob.extend_from_slice(&u32::try_from(strings.len()).unwrap().to_le_bytes());
        blob.extend_from_slice(types);
        blob.extend_from_slice(strings);
        blob
    }

    /// Append a struct type record: (member name offset, bit offset) pairs.
    fn push_struct(out: &mut Vec<u8>, name_off: u32, size: u32, members: &[(u32, u32)]) {
        let info = (BTF_KIND_STRUCT << 24) | u32::try_from(members.len()).unwrap();
        out.extend_from_slice(&name_off.to_le_bytes());
        out.extend_from_slice(&info.to_le_bytes());
        out.extend_from_slice(&size.to_le_bytes());
        for &(member_name_off, bit_offset) in members {
            out.extend_from_slice(&member_name_off.to_le_bytes());
            out.extend_from_slice(&0u32.to_le_bytes()); // member type: void
            out.extend_from_slice(&bit_offset.to_le_bytes());
        }
    }

    #[test]
    fn test_corrupt_bytes_fail_with_parse_error() {
        let result = BtfTypeCatalog::from_bytes(&[0xde, 0xad, 0xbe, 0xef, 0x00, 0x01]);
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_truncated_header_fails_with_parse_error() {
        let blob = build_btf(&[], b"\0");
        let result = BtfTypeCatalog::from_bytes(&blob[..10]);
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_missing_vmlinux_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let result = BtfTypeCatalog::from_vmlinux(&dir.path().join("vmlinux"));
        assert!(matches!(result, Err(CatalogError::Unavailable(_))));
    }

    #[test]
    fn test_resolves_struct_from_minimal_blob() {
        // strings: \0 stat \0 st_size \0  (offsets 1 and 6)
        let strings = b"\0stat\0st_size\0";
        let mut types = Vec::new();
        push_struct(&mut types, 1, 144, &[(6, 512)]);

        let catalog = BtfTypeCatalog::from_bytes(&build_btf(&types, strings)).unwrap();
        let defs = catalog.definitions_by_name("stat");
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].kind, TypeKind::Struct);
        assert_eq!(defs[0].byte_size, 144);
        assert_eq!(defs[0].members, vec![MemberDef::new("st_size", 512)]);
    }

    #[test]
    fn test_duplicate_names_yield_multiple_definitions() {
        // Two distinct structs both named "foo", as a build carrying the
        // same struct name across translation units would record.
        let strings = b"\0foo\0";
        let mut types = Vec::new();
        push_struct(&mut types, 1, 8, &[]);
        push_struct(&mut types, 1, 16, &[]);

        let catalog = BtfTypeCatalog::from_bytes(&build_btf(&types, strings)).unwrap();
        let defs = catalog.definitions_by_name("foo");
        assert_eq!(defs.len(), 2);
        assert_eq!(defs[0].byte_size, 8);
        assert_eq!(defs[1].byte_size, 16);
    }

    #[test]
    fn test_unknown_name_is_zero_matches() {
        let strings = b"\0stat\0";
        let mut types = Vec::new();
        push_struct(&mut types, 1, 144, &[]);

        let catalog = BtfTypeCatalog::from_bytes(&build_btf(&types, strings)).unwrap();
        assert!(catalog.definitions_by_name("task_struct").is_empty());
    }
}
