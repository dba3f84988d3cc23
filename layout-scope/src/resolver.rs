//! Constant resolution over a type catalog
//!
//! Pure functions: one request plus a catalog in, a resolved value and/or a
//! mismatch out. Session bookkeeping lives in [`crate::fetcher`].

use crate::catalog::{TypeCatalog, TypeDef, TypeKind};
use crate::domain::errors::MismatchError;
use crate::domain::types::{ConstantOp, ConstantRequest};

/// Kind keywords accepted in front of a type name, in match order.
const KIND_PREFIXES: [&str; 2] = ["struct ", "enum "];

/// Strip a single leading kind keyword so `"struct task_struct"` and
/// `"task_struct"` are the same lookup key.
///
/// Only the first matching prefix is stripped; a name stacking two keywords
/// loses the outer one only.
pub fn normalize_type_name(name: &str) -> &str {
    for prefix in KIND_PREFIXES {
        if let Some(stripped) = name.strip_prefix(prefix) {
            return stripped;
        }
    }
    name
}

/// Outcome of resolving one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Resolution {
    /// First candidate value found across matching definitions, if any.
    pub value: Option<u64>,
    /// Set when two matching definitions disagreed on the value.
    pub mismatch: Option<MismatchError>,
}

/// Resolve one request against the catalog.
///
/// A kernel build can carry several distinct definitions under one struct
/// name; agreement across all of them is the correctness signal, so every
/// candidate is scanned even after a disagreement is found. Zero matching
/// definitions, or only definitions that cannot answer the request, resolve
/// to no value, which is not an error.
pub(crate) fn resolve_request(catalog: &dyn TypeCatalog, request: &ConstantRequest) -> Resolution {
    let name = normalize_type_name(&request.type_name);

    let mut value: Option<u64> = None;
    let mut mismatch: Option<MismatchError> = None;

    for def in catalog.definitions_by_name(name) {
        let Some(candidate) = candidate_value(&def, &request.op) else {
            continue;
        };
        match value {
            None => value = Some(candidate),
            Some(first) if candidate != first => {
                // Keep the first-seen value and the first disagreement; the
                // session is poisoned either way.
                if mismatch.is_none() {
                    mismatch = Some(MismatchError {
                        id: request.id.clone(),
                        type_name: name.to_string(),
                        first,
                        second: candidate,
                    });
                }
            }
            Some(_) => {}
        }
    }

    Resolution { value, mismatch }
}

/// Value of one definition for the requested operation, or `None` when this
/// definition cannot answer it.
fn candidate_value(def: &TypeDef, op: &ConstantOp) -> Option<u64> {
    if def.kind != TypeKind::Struct {
        return None;
    }
    match op {
        ConstantOp::Sizeof => Some(def.byte_size),
        // Byte-aligned semantics: bit offset truncated toward zero,
        // bit-fields are not decomposed further.
        ConstantOp::Offsetof { field } => def
            .members
            .iter()
            .find(|m| m.name == *field)
            .map(|m| u64::from(m.bit_offset) / 8),
    }
}
