//! # layout-scope - Kernel Struct Layout Constant Resolution
//!
//! layout-scope resolves host-specific kernel data-structure layout
//! constants (struct byte sizes and field byte offsets) from the kernel's
//! BTF type information. A runtime security monitor loading eBPF probes
//! into arbitrary, unmodified production kernels uses these constants to
//! parameterize bytecode whose memory layouts vary across kernel builds
//! and are unknowable at compile time.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                   Probe Loader (Caller)                      │
//! │        substitutes resolved constants into bytecode          │
//! └───────────────┬───────────────────────────▲──────────────────┘
//!                 │ requests (id, type, field)│ id → value map
//!                 ▼                           │
//! ┌──────────────────────────────────────────────────────────────┐
//! │                  layout-scope (This Crate)                   │
//! │                                                              │
//! │  ┌──────────────┐    ┌──────────────┐    ┌──────────────┐    │
//! │  │   Fetcher    │───▶│   Resolver   │───▶│   Catalog    │    │
//! │  │  (session)   │    │ (pure query) │    │   (trait)    │    │
//! │  └──────────────┘    └──────────────┘    └──────┬───────┘    │
//! │                                                 │            │
//! │                              ┌──────────────────┴───┐        │
//! │                              ▼                      ▼        │
//! │                      ┌──────────────┐      ┌──────────────┐  │
//! │                      │  BTF-backed  │      │ Static table │  │
//! │                      │   (btf-rs)   │      │   fallback   │  │
//! │                      └──────────────┘      └──────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - [`catalog`]: The type-catalog capability trait and its backends
//!   - `btf`: catalog decoded from raw BTF bytes, a parsed handle, or the
//!     running kernel's `/sys/kernel/btf/vmlinux`
//!   - `fallback`: static per-kernel-version layout tables
//!
//! - [`resolver`]: Name normalization and the constant-resolution algorithm
//!   - cross-checks duplicate type definitions sharing one name
//!   - converts bit-level member offsets to byte offsets
//!
//! - [`fetcher`]: The per-session facade accumulating requests eagerly and
//!   exposing one terminal read of the results
//!
//! - [`domain`]: Core request types and structured errors
//!
//! - [`requests`] / [`cli`]: JSON request manifest and argument parsing for
//!   the bundled one-shot binary
//!
//! ## Key Concepts
//!
//! - **BTF**: compact kernel type format recording compiled struct/enum
//!   layouts, queryable at runtime
//! - **Duplicate definitions**: production kernels can carry multiple
//!   compiled definitions under one struct name; agreement across all of
//!   them is the correctness signal, disagreement poisons the session
//! - **Unresolved is not an error**: a type or field absent on this kernel
//!   build simply leaves its id out of the result map
//!
//! ## Typical Usage
//!
//! ```no_run
//! use layout_scope::catalog::BtfTypeCatalog;
//! use layout_scope::fetcher::ConstantFetcher;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = BtfTypeCatalog::from_current_kernel()?;
//!
//! let mut fetcher = ConstantFetcher::new(&catalog);
//! fetcher.append_sizeof_request("sizeof_inode", "struct inode");
//! fetcher.append_offsetof_request("pid_offset", "task_struct", "pid");
//!
//! let constants = fetcher.finish_and_get_results()?;
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod cli;
pub mod domain;
pub mod fetcher;
pub mod requests;
pub mod resolver;
