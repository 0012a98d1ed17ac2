//! Configuration entry selection.

use serde_json::Value;

use crate::core::manifest::ConfEntry;
use crate::resolver::resolve::Conditions;

/// Select the entry applicable under the given conditions.
///
/// Entries are examined in file order. The first condition-bearing entry
/// whose every condition field strictly equals the corresponding value in
/// `conditions` wins; a satisfied condition-bearing entry always beats the
/// default entry (the first entry with no condition fields), regardless of
/// position. Returns `None` when neither exists.
pub fn select<'a>(
    entries: &'a [ConfEntry],
    options: &[String],
    conditions: &Conditions,
) -> Option<&'a ConfEntry> {
    let mut default = None;

    for entry in entries {
        if entry.is_default(options) {
            if default.is_none() {
                default = Some(entry);
            }
            continue;
        }
        if entry
            .condition_fields(options)
            .all(|(key, value)| satisfied(conditions, key.as_str(), value))
        {
            return Some(entry);
        }
    }

    default
}

/// A condition field is satisfied only when the key is present in the
/// caller's conditions with a strictly equal scalar value.
fn satisfied(conditions: &Conditions, key: &str, value: &Value) -> bool {
    conditions.get(key) == Some(value)
}
