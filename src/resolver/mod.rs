//! Build-manifest resolution.
//!
//! This module implements the core algorithm: condition-based entry
//! selection, manifest-relative path resolution, and recursive dependency
//! merging. Resolution is synchronous and owns no state beyond the call
//! stack; concurrent top-level calls are safe by construction.

pub mod errors;
pub mod paths;
pub mod resolve;
pub mod select;

pub use errors::ResolveError;
pub use resolve::{resolve_manifest, Conditions, ResolveOptions};
