//! Shared type aliases for configuration trees.

use serde_json::{Map, Value};

/// A mapping node in a configuration or permission tree.
///
/// Values are dynamic: scalar, sequence, or nested mapping. Merge behavior
/// dispatches on the variant pair.
pub type ConfigMap = Map<String, Value>;
