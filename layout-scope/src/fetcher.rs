//! Fetcher session facade
//!
//! Accumulates constant requests against one catalog, resolving each
//! eagerly, and exposes a terminal read of the id → value map. A detected
//! mismatch poisons the whole session: `finish_and_get_results` then
//! reports the error instead of a map that cannot be trusted.

use std::collections::HashMap;

use log::debug;

use crate::catalog::TypeCatalog;
use crate::domain::errors::MismatchError;
use crate::domain::types::{ConstantOp, ConstantRequest};
use crate::resolver::resolve_request;

/// One resolution session over a type catalog.
///
/// Create one per batch of requests and discard it afterwards. The catalog
/// is immutable and can back any number of sessions; the session itself
/// mutates in place on every append, so concurrent workloads use one
/// fetcher per thread and merge the results.
pub struct ConstantFetcher<'a> {
    catalog: &'a dyn TypeCatalog,
    constants: HashMap<String, u64>,
    fault: Option<MismatchError>,
}

impl<'a> ConstantFetcher<'a> {
    pub fn new(catalog: &'a dyn TypeCatalog) -> Self {
        Self { catalog, constants: HashMap::new(), fault: None }
    }

    /// Resolve the byte size of `type_name` and record it under `id`.
    pub fn append_sizeof_request(&mut self, id: &str, type_name: &str) {
        self.run_request(ConstantRequest {
            id: id.to_string(),
            type_name: type_name.to_string(),
            op: ConstantOp::Sizeof,
        });
    }

    /// Resolve the byte offset of `field_name` within `type_name` and
    /// record it under `id`.
    pub fn append_offsetof_request(&mut self, id: &str, type_name: &str, field_name: &str) {
        self.run_request(ConstantRequest {
            id: id.to_string(),
            type_name: type_name.to_string(),
            op: ConstantOp::Offsetof { field: field_name.to_string() },
        });
    }

    fn run_request(&mut self, request: ConstantRequest) {
        let outcome = resolve_request(self.catalog, &request);

        match outcome.value {
            // Stored even when a mismatch was recorded; the fault keeps the
            // value from ever being reported as a success.
            Some(value) => {
                self.constants.insert(request.id, value);
            }
            None => debug!("constant {:?} not resolvable on this kernel", request.id),
        }

        // The fault is sticky: only the first mismatch is kept, and later
        // requests keep resolving so their diagnostics stay visible.
        if self.fault.is_none() {
            self.fault = outcome.mismatch;
        }
    }

    /// Terminal read of the session.
    ///
    /// Idempotent: resolution already happened at append time, so repeated
    /// calls return the same outcome without touching the catalog again.
    ///
    /// # Errors
    /// Returns the first recorded [`MismatchError`] if any two type
    /// definitions disagreed on a requested constant. No partial map is
    /// exposed in that case.
    pub fn finish_and_get_results(&self) -> Result<HashMap<String, u64>, MismatchError> {
        match &self.fault {
            Some(err) => Err(err.clone()),
            None => Ok(self.constants.clone()),
        }
    }
}
