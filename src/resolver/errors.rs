//! Resolution error types.

use std::path::PathBuf;

use thiserror::Error;

/// Error during manifest resolution.
///
/// Every variant is fatal to the whole call: nothing is retried and no
/// partial configuration is returned. "No matching entry" at the top level
/// is not an error and is reported as `Ok(None)` instead.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A caller-supplied argument has the wrong shape. Raised before any I/O.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The manifest file could not be read.
    #[error("failed to read manifest: {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest file is not valid JSON.
    #[error("failed to parse manifest: {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The manifest parsed but violates the schema.
    #[error("malformed manifest {}: {message}", .path.display())]
    ManifestShape { path: PathBuf, message: String },

    /// A declared dependency yielded no usable configuration.
    #[error("unable to resolve manifest for dependency `{token}` (declared in {})", .manifest.display())]
    UnresolvableDependency {
        token: String,
        manifest: PathBuf,
        #[source]
        source: Option<Box<ResolveError>>,
    },

    /// The dependency graph loops back on itself.
    #[error("dependency cycle detected at {}", .path.display())]
    DependencyCycle { path: PathBuf },
}

impl ResolveError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        ResolveError::InvalidArgument {
            message: message.into(),
        }
    }
}
