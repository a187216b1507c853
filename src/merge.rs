//! Structural merge for configuration trees.
//!
//! Patches fold onto an accumulator left to right. Mapping pairs merge
//! recursively; everything else is overwritten by the patch. A patch key
//! prefixed with `+` appends to the sequence under the stripped key, and a
//! `-` prefix removes sequence elements by value equality.

use crate::types::ConfigMap;
use serde_json::Value;

/// Merge `patches` onto `base`, left to right.
///
/// Inputs are never mutated; a fresh map is returned. Application order is
/// significant: each patch merges onto the cumulative result of all patches
/// before it.
pub fn merge<'a>(base: &ConfigMap, patches: impl IntoIterator<Item = &'a ConfigMap>) -> ConfigMap {
    let mut acc = base.clone();
    for patch in patches {
        apply_patch(&mut acc, patch);
    }
    acc
}

/// Apply a single patch onto the accumulator in place.
///
/// Modifier keys (`+`/`-`) only take effect when the patch value is a
/// sequence; a modifier carrying anything else is ignored. A non-sequence
/// accumulator value under a modifier key is treated as the empty sequence.
fn apply_patch(acc: &mut ConfigMap, patch: &ConfigMap) {
    for (key, value) in patch {
        if let Some(stripped) = key.strip_prefix('+') {
            if let Value::Array(additions) = value {
                let mut items = take_sequence(acc, stripped);
                items.extend(additions.iter().cloned());
                acc.insert(stripped.to_string(), Value::Array(items));
            }
            continue;
        }

        if let Some(stripped) = key.strip_prefix('-') {
            if let Value::Array(removals) = value {
                let kept: Vec<Value> = take_sequence(acc, stripped)
                    .into_iter()
                    .filter(|item| !removals.contains(item))
                    .collect();
                acc.insert(stripped.to_string(), Value::Array(kept));
            }
            continue;
        }

        match (acc.get_mut(key), value) {
            // Mapping pairs merge recursively; the patch wins on leaves.
            (Some(Value::Object(existing)), Value::Object(nested)) => {
                apply_patch(existing, nested);
            }
            // Everything else is authoritative overwrite, including full
            // sequence replacement for unmodified sequence keys.
            _ => {
                acc.insert(key.clone(), value.clone());
            }
        }
    }
}

/// Remove the value under `key`, returning it as a sequence.
///
/// Absent keys and non-sequence values yield an empty sequence.
fn take_sequence(acc: &mut ConfigMap, key: &str) -> Vec<Value> {
    match acc.remove(key) {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    }
}
