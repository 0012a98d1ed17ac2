//! Shared utilities.

pub mod convert;

pub use convert::{convert_path, PathConvention};
