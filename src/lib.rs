//! Ballast - a resolver for native add-on build manifests
//!
//! This crate provides the core library functionality for Ballast:
//! condition-based entry selection, manifest-relative path resolution,
//! and recursive dependency merging.

pub mod core;
pub mod resolver;
pub mod util;

pub use crate::core::{ConfEntry, ManifestDoc, ResolvedConfig, MANIFEST_NAME};
pub use crate::resolver::{resolve_manifest, Conditions, ResolveError, ResolveOptions};
pub use crate::util::convert::PathConvention;
