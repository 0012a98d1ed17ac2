//! Manifest resolution.
//!
//! `resolve_manifest` is the crate's root operation: it loads a manifest,
//! selects the configuration entry applicable under the caller's conditions,
//! path-resolves the entry's build inputs, and recursively resolves and
//! merges any declared dependencies. Each recursive call is a fresh,
//! independent resolution rooted at the dependency's own directory.

use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::core::config::ResolvedConfig;
use crate::core::manifest::{ConfEntry, ManifestDoc, MANIFEST_NAME};
use crate::resolver::errors::ResolveError;
use crate::resolver::paths::{normalize, resolve_path};
use crate::resolver::select::select;
use crate::util::convert::{convert_path, PathConvention};

/// Caller-supplied condition set. Values must be scalars; a flat mapping
/// with no nesting and no array values.
pub type Conditions = BTreeMap<String, Value>;

/// Options accepted by [`resolve_manifest`].
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Directory against which manifest-relative paths and dependency tokens
    /// resolve. Defaults to the manifest file's own directory.
    pub basedir: Option<PathBuf>,

    /// Target path-separator convention for resolved paths.
    pub paths: Option<PathConvention>,
}

/// Resolve a build manifest into a concrete configuration.
///
/// Returns `Ok(None)` when no entry applies under `conditions` — "this
/// manifest has nothing to contribute" is a legitimate outcome. A declared
/// dependency that fails to load or resolve is an error, never a silent
/// omission.
pub fn resolve_manifest(
    manifest_path: &Path,
    conditions: &Conditions,
    options: &ResolveOptions,
) -> Result<Option<ResolvedConfig>, ResolveError> {
    validate_args(manifest_path, conditions)?;

    // Visited set tracks the active recursion chain only; a diamond in the
    // dependency graph is legal, a loop is not.
    let mut visited = Vec::new();
    resolve_inner(manifest_path, conditions, options, &mut visited)
}

/// Argument-shape checks, performed before any I/O.
fn validate_args(manifest_path: &Path, conditions: &Conditions) -> Result<(), ResolveError> {
    if manifest_path.as_os_str().is_empty() {
        return Err(ResolveError::invalid_argument(
            "manifest path must be a non-empty string",
        ));
    }
    for (key, value) in conditions {
        if value.is_array() || value.is_object() {
            return Err(ResolveError::invalid_argument(format!(
                "condition `{key}` must be a scalar value"
            )));
        }
    }
    Ok(())
}

fn resolve_inner(
    manifest_path: &Path,
    conditions: &Conditions,
    options: &ResolveOptions,
    visited: &mut Vec<PathBuf>,
) -> Result<Option<ResolvedConfig>, ResolveError> {
    let identity = normalize(&absolutize(manifest_path));
    if visited.contains(&identity) {
        return Err(ResolveError::DependencyCycle { path: identity });
    }
    visited.push(identity);

    let doc = ManifestDoc::load(manifest_path)?;

    let basedir = match &options.basedir {
        Some(dir) => dir.clone(),
        None => manifest_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default(),
    };

    let entry = match select(&doc.confs, &doc.options, conditions) {
        Some(entry) => entry,
        None => {
            debug!(
                manifest = %manifest_path.display(),
                "no entry matches the supplied conditions"
            );
            visited.pop();
            return Ok(None);
        }
    };

    let mut config = resolve_entry(entry, &basedir, options.paths);

    for token in &entry.dependencies {
        // Dependency tokens are manifest-relative; the token resolved against
        // basedir names the directory holding the dependency's manifest.
        // Conversion to the requested path convention never applies here:
        // this path is used for I/O on the host.
        let dep_dir = PathBuf::from(resolve_path(&basedir, token));
        let dep_manifest = dep_dir.join(MANIFEST_NAME);
        debug!(
            dependency = %token,
            manifest = %dep_manifest.display(),
            "resolving dependency"
        );

        let dep_options = ResolveOptions {
            basedir: Some(dep_dir),
            paths: options.paths,
        };
        let dep_config = match resolve_inner(&dep_manifest, conditions, &dep_options, visited) {
            Ok(Some(config)) => config,
            Ok(None) => {
                return Err(ResolveError::UnresolvableDependency {
                    token: token.clone(),
                    manifest: manifest_path.to_path_buf(),
                    source: None,
                });
            }
            Err(err @ ResolveError::DependencyCycle { .. }) => return Err(err),
            Err(err) => {
                return Err(ResolveError::UnresolvableDependency {
                    token: token.clone(),
                    manifest: manifest_path.to_path_buf(),
                    source: Some(Box::new(err)),
                });
            }
        };

        config.absorb(dep_config);
    }

    visited.pop();
    Ok(Some(config))
}

/// Build the configuration for a selected entry, before dependency merging.
fn resolve_entry(
    entry: &ConfEntry,
    basedir: &Path,
    paths: Option<PathConvention>,
) -> ResolvedConfig {
    let resolve_all = |values: &[String]| -> Vec<String> {
        values
            .iter()
            .map(|value| {
                let resolved = resolve_path(basedir, value);
                match paths {
                    Some(convention) => convert_path(&resolved, convention),
                    None => resolved,
                }
            })
            .collect()
    };

    ResolvedConfig {
        src: resolve_all(&entry.src),
        include: resolve_all(&entry.include),
        // Linker flags, not filesystem paths: copied untouched.
        libraries: entry.libraries.clone(),
        libpath: resolve_all(&entry.libpath),
        dependencies: entry.dependencies.clone(),
        extra: entry.fields.clone(),
    }
}

/// Anchor a possibly-relative manifest path for cycle tracking.
fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}
