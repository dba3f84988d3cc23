//! Request manifest loading
//!
//! JSON data model for the constants a probe loader wants resolved:
//!
//! ```json
//! [
//!     { "op": "sizeof",   "id": "sizeof_stat", "type": "struct stat" },
//!     { "op": "offsetof", "id": "st_size",     "type": "stat", "field": "st_size" }
//! ]
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One entry in the request manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum RequestSpec {
    /// Byte size of a named type.
    Sizeof {
        id: String,
        #[serde(rename = "type")]
        type_name: String,
    },
    /// Byte offset of a field within a named type.
    Offsetof {
        id: String,
        #[serde(rename = "type")]
        type_name: String,
        field: String,
    },
}

/// Load a request manifest from disk.
///
/// # Errors
/// Returns an error if the file cannot be read or is not a valid manifest.
pub fn load_requests(path: &Path) -> Result<Vec<RequestSpec>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read request manifest: {}", path.display()))?;
    let requests: Vec<RequestSpec> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid request manifest: {}", path.display()))?;
    Ok(requests)
}
