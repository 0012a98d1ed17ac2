//! manifest.json parsing and schema.
//!
//! A build manifest declares an ordered list of configuration entries
//! (`confs`) plus the names of the condition keys entries may constrain on
//! (`options`). Entry fields named in `options` are condition fields; the
//! five reserved array fields describe build inputs; every other scalar
//! field passes through to the resolved output verbatim.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::resolver::errors::ResolveError;

/// Conventional filename for a build manifest.
///
/// Dependency tokens name a directory; the dependency's manifest is
/// expected at `<directory>/manifest.json`.
pub const MANIFEST_NAME: &str = "manifest.json";

/// The parsed manifest document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ManifestDoc {
    /// Names of the condition keys entries may constrain on.
    #[serde(default)]
    pub options: Vec<String>,

    /// Ordered configuration entries.
    #[serde(default)]
    pub confs: Vec<ConfEntry>,
}

/// A single configuration entry.
///
/// The five reserved fields are kept strongly typed; condition and
/// pass-through fields land in the flattened `fields` map.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfEntry {
    /// Source files to compile.
    #[serde(default)]
    pub src: Vec<String>,

    /// Include directories.
    #[serde(default)]
    pub include: Vec<String>,

    /// Linker flags (e.g. `-lblas`); never path-resolved.
    #[serde(default)]
    pub libraries: Vec<String>,

    /// Library search paths.
    #[serde(default)]
    pub libpath: Vec<String>,

    /// Directory tokens naming other manifests to resolve and merge.
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Condition and pass-through fields.
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl ConfEntry {
    /// Iterate this entry's condition fields: fields whose key is named in
    /// the manifest's `options` list.
    pub fn condition_fields<'a>(
        &'a self,
        options: &'a [String],
    ) -> impl Iterator<Item = (&'a String, &'a Value)> {
        self.fields
            .iter()
            .filter(move |(key, _)| options.iter().any(|opt| opt == *key))
    }

    /// An entry with zero condition fields is the manifest's default entry.
    pub fn is_default(&self, options: &[String]) -> bool {
        self.condition_fields(options).next().is_none()
    }
}

impl ManifestDoc {
    /// Load and parse the manifest file at `path`.
    pub fn load(path: &Path) -> Result<Self, ResolveError> {
        let text = fs::read_to_string(path).map_err(|source| ResolveError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// Parse manifest text. `path` is used for error reporting only.
    pub fn parse(text: &str, path: &Path) -> Result<Self, ResolveError> {
        let doc: ManifestDoc =
            serde_json::from_str(text).map_err(|source| ResolveError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        doc.validate(path)?;
        Ok(doc)
    }

    /// Reject non-scalar condition/pass-through values.
    fn validate(&self, path: &Path) -> Result<(), ResolveError> {
        for entry in &self.confs {
            for (key, value) in &entry.fields {
                if value.is_array() || value.is_object() {
                    return Err(ResolveError::ManifestShape {
                        path: path.to_path_buf(),
                        message: format!("field `{key}` must be a scalar"),
                    });
                }
            }
        }
        Ok(())
    }
}
