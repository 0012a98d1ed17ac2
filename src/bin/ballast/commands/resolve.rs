//! `ballast resolve` command
//!
//! Resolves a manifest into a concrete build configuration and prints it
//! as JSON. Prints `{}` when no entry matches the supplied conditions.

use anyhow::{bail, Context, Result};
use serde_json::Value;

use ballast::{resolve_manifest, Conditions, ResolveOptions};

use crate::cli::ResolveArgs;

pub fn execute(args: ResolveArgs) -> Result<()> {
    let conditions = parse_conditions(&args.conditions)?;
    let options = ResolveOptions {
        basedir: args.basedir.clone(),
        paths: args.paths,
    };

    let config = resolve_manifest(&args.manifest, &conditions, &options)
        .with_context(|| format!("failed to resolve {}", args.manifest.display()))?;

    let json = match &config {
        Some(config) => serde_json::to_value(config)?,
        None => Value::Object(Default::default()),
    };

    if args.pretty {
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        println!("{}", serde_json::to_string(&json)?);
    }

    Ok(())
}

/// Parse repeated `key=value` flags into a condition set.
fn parse_conditions(pairs: &[String]) -> Result<Conditions> {
    let mut conditions = Conditions::new();
    for pair in pairs {
        let Some((key, value)) = pair.split_once('=') else {
            bail!("invalid condition `{pair}` (expected key=value)");
        };
        if key.is_empty() {
            bail!("invalid condition `{pair}` (empty key)");
        }
        conditions.insert(key.to_string(), Value::from(value));
    }
    Ok(conditions)
}
