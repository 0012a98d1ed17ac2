//! Core data structures for Ballast.
//!
//! This module contains the foundational types used throughout Ballast:
//! - The on-disk manifest schema and its loader
//! - The resolved build configuration returned to callers

pub mod config;
pub mod manifest;

pub use config::ResolvedConfig;
pub use manifest::{ConfEntry, ManifestDoc, MANIFEST_NAME};
