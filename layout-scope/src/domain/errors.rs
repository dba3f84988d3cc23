//! Structured error types for layout-scope
//!
//! Using thiserror for automatic Display implementation and error chaining.

use thiserror::Error;

/// Errors raised while constructing a type catalog.
///
/// Construction is all-or-nothing: any of these means no catalog object
/// exists, there is no partial or degraded catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to parse BTF data: {0}")]
    Parse(String),

    #[error("kernel type catalog unavailable: {0}")]
    Unavailable(String),
}

/// Two or more type definitions sharing a requested name disagree on the
/// requested size or offset.
///
/// This signals an inconsistent build environment: a wrong layout constant
/// silently corrupts the probe bytecode it parameterizes, so the whole
/// resolution session is invalidated rather than picking a winner.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("mismatching values for constant {id:?}: definitions of {type_name:?} resolve to both {first} and {second}")]
pub struct MismatchError {
    /// Request id the disagreement was detected on.
    pub id: String,
    /// Normalized type name carrying the duplicate definitions.
    pub type_name: String,
    /// First candidate value encountered.
    pub first: u64,
    /// The differing candidate that triggered the fault.
    pub second: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_error_display() {
        let err = MismatchError {
            id: "sizeof_stat".to_string(),
            type_name: "stat".to_string(),
            first: 8,
            second: 16,
        };
        assert!(err.to_string().contains("sizeof_stat"));
        assert!(err.to_string().contains('8'));
        assert!(err.to_string().contains("16"));
    }

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::Unavailable("/sys/kernel/btf/vmlinux not present".to_string());
        assert!(err.to_string().contains("unavailable"));
    }
}
