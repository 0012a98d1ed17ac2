//! Resolved build configuration.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// The fully resolved build configuration for one manifest.
///
/// Serializes to the flat JSON object consumers expect: the five reserved
/// fields plus the selected entry's condition and pass-through fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResolvedConfig {
    /// Source files, own entries first, then dependency contributions.
    pub src: Vec<String>,

    /// Include directories.
    pub include: Vec<String>,

    /// Linker flags.
    pub libraries: Vec<String>,

    /// Library search paths.
    pub libpath: Vec<String>,

    /// The selected entry's dependency tokens, verbatim. Dependency
    /// resolution never rewrites this list.
    pub dependencies: Vec<String>,

    /// Condition and pass-through fields of the selected entry.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ResolvedConfig {
    /// Merge a dependency's contribution into this configuration.
    ///
    /// The dependency's `src`, `include`, `libraries`, and `libpath` are
    /// appended after the current contents. Its pass-through fields and its
    /// own dependency list do not propagate upward.
    pub fn absorb(&mut self, dep: ResolvedConfig) {
        self.src.extend(dep.src);
        self.include.extend(dep.include);
        self.libraries.extend(dep.libraries);
        self.libpath.extend(dep.libpath);
    }
}
