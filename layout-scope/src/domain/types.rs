//! Core request types for constant resolution.

/// Operation requested against a named kernel type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstantOp {
    /// Total byte size of the type.
    Sizeof,
    /// Byte offset of a named field within the type.
    Offsetof {
        /// Member name to locate inside the struct.
        field: String,
    },
}

/// A single constant to resolve against a type catalog.
///
/// `id` is the caller-chosen key under which the resolved value appears in
/// the session's result map. `type_name` may carry a leading kind keyword
/// (`"struct task_struct"`); lookups normalize it away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantRequest {
    pub id: String,
    pub type_name: String,
    pub op: ConstantOp,
}
