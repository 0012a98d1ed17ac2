//! `ballast check` command
//!
//! Validates that a manifest parses and is well-formed, and reports entries
//! that can never be selected.

use anyhow::{Context, Result};

use ballast::ManifestDoc;

use crate::cli::CheckArgs;

pub fn execute(args: CheckArgs) -> Result<()> {
    let doc = ManifestDoc::load(&args.manifest)
        .with_context(|| format!("failed to load {}", args.manifest.display()))?;

    // Only the first default entry is ever reachable.
    let defaults = doc
        .confs
        .iter()
        .filter(|entry| entry.is_default(&doc.options))
        .count();
    if defaults > 1 {
        println!(
            "warning: {} default entries; only the first is reachable",
            defaults
        );
    }

    // Condition keys no entry constrains on are usually stale.
    for option in &doc.options {
        let used = doc
            .confs
            .iter()
            .any(|entry| entry.fields.contains_key(option));
        if !used {
            println!("warning: condition key `{option}` is not used by any entry");
        }
    }

    println!(
        "ok: {} ({} entries, {} condition keys)",
        args.manifest.display(),
        doc.confs.len(),
        doc.options.len()
    );

    Ok(())
}
