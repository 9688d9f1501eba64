//! Field projection over loosely-typed provider payloads.
//!
//! Providers return JSON arrays of objects whose field names differ per
//! provider. [`project_fields`] extracts a fixed set of target fields from
//! each object, renaming through a per-provider mapping table, so the
//! provider-specific vocabulary stays in the adapters and never leaks into
//! shared code.

use serde_json::Value;

use crate::types::JsonObject;

/// Alternate source keys tried when a `link` target is missing.
const LINK_ALIASES: &[&str] = &["url", "href"];

/// Alternate source keys tried when a `snippet` target is missing.
const SNIPPET_ALIASES: &[&str] = &["description", "content"];

/// Project `target_fields` out of a raw JSON array of objects.
///
/// `mapping` entries are `(target_field, source_field)` pairs; targets
/// without an entry read from the key of the same name. Two targets get
/// fixed fallback aliases when the resolved source key is absent:
/// `link` falls back to `url` then `href`, and `snippet` falls back to
/// `description` then `content`. A target that resolves nowhere is set to
/// an explicit JSON `null`, never omitted.
///
/// Malformed input is tolerated rather than fatal: a missing, null, or
/// non-array `items` yields an empty vec, and non-object elements are
/// silently skipped. Element order is preserved; the output holds one
/// object per retained input element.
pub fn project_fields(
    items: Option<&Value>,
    target_fields: &[&str],
    mapping: &[(&str, &str)],
) -> Vec<JsonObject> {
    let items = match items.and_then(Value::as_array) {
        Some(items) => items,
        None => return Vec::new(),
    };

    let mut projected = Vec::with_capacity(items.len());
    for item in items {
        let item = match item.as_object() {
            Some(obj) => obj,
            None => continue,
        };

        let mut out = JsonObject::new();
        for &target in target_fields {
            let source = mapping
                .iter()
                .find(|(t, _)| *t == target)
                .map(|(_, s)| *s)
                .unwrap_or(target);
            out.insert(target.to_string(), resolve_field(item, source));
        }
        projected.push(out);
    }
    projected
}

/// Look up `source` in `item`, trying the fixed aliases for `link` and
/// `snippet` when the primary key is absent (not merely null).
fn resolve_field(item: &JsonObject, source: &str) -> Value {
    if let Some(value) = item.get(source) {
        return value.clone();
    }
    let aliases: &[&str] = match source {
        "link" => LINK_ALIASES,
        "snippet" => SNIPPET_ALIASES,
        _ => &[],
    };
    aliases
        .iter()
        .find_map(|alias| item.get(*alias))
        .cloned()
        .unwrap_or(Value::Null)
}

/// Copy a raw section verbatim, treating an explicit JSON `null` the same
/// as an absent key.
pub(crate) fn raw_value(value: Option<&Value>) -> Option<Value> {
    value.cloned().filter(|v| !v.is_null())
}

/// Copy a raw array section verbatim, defaulting anything that is not an
/// array to empty.
pub(crate) fn raw_array(value: Option<&Value>) -> Vec<Value> {
    value
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}
