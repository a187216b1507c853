//! Override resolution: cumulative folding and permission queries.

use crate::context::MatchContext;
use crate::matcher::rule_matches;
use crate::merge;
use crate::options::PluginOptions;
use crate::types::ConfigMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

/// Effective options for one plugin under one context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedOptions {
    pub config: ConfigMap,
    pub permissions: ConfigMap,
}

/// Compute the effective options for `ctx`.
///
/// Overrides are visited in declaration order; each matching override's
/// patches merge onto the cumulative result of all prior matches. Folding
/// is monotonic: a later non-matching override never undoes an earlier
/// match. The input document is never mutated, so a shared `PluginOptions`
/// is safe to resolve from concurrently.
pub fn resolve_options(options: &PluginOptions, ctx: &MatchContext) -> ResolvedOptions {
    let mut resolved = ResolvedOptions {
        config: options.config.clone(),
        permissions: options.permissions.clone(),
    };

    for (index, rule) in options.overrides.iter().enumerate() {
        if !rule_matches(rule, ctx) {
            continue;
        }
        trace!(index, "override matched, applying patches");
        if !rule.config.is_empty() {
            resolved.config = merge::merge(&resolved.config, [&rule.config]);
        }
        if !rule.permissions.is_empty() {
            resolved.permissions = merge::merge(&resolved.permissions, [&rule.permissions]);
        }
    }

    resolved
}

/// Answer a permission query against the resolved options.
///
/// `path` is a `.`-separated path into nested permission maps.
pub fn has_permission(path: &str, options: &PluginOptions, ctx: &MatchContext) -> bool {
    let resolved = resolve_options(options, ctx);
    permission_at(&resolved.permissions, path)
}

/// Extract the boolean leaf at `path` from a permission tree.
///
/// A missing segment, a non-mapping interior node, or a non-boolean leaf
/// resolves to `false`: permissions are closed by default, never inferred
/// as granted.
pub fn permission_at(permissions: &ConfigMap, path: &str) -> bool {
    let mut current = permissions;
    let mut segments = path.split('.').peekable();

    while let Some(segment) = segments.next() {
        match current.get(segment) {
            Some(value) if segments.peek().is_none() => {
                return match value {
                    Value::Bool(flag) => *flag,
                    _ => false,
                };
            }
            Some(Value::Object(nested)) => current = nested,
            _ => return false,
        }
    }

    false
}
