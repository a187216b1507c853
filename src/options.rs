//! Plugin options document: base values plus ordered overrides.

use crate::error::ValidationError;
use crate::rule::{OverrideRule, RangeClause};
use crate::types::ConfigMap;
use serde::{Deserialize, Serialize};

/// Declared options for one plugin: base configuration, base permissions,
/// and an ordered list of conditional overrides.
///
/// Override order is semantically significant and preserved from the
/// document: matching overrides fold onto the base in declaration order.
/// The document is immutable input to resolution; nothing here is mutated
/// across calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginOptions {
    /// Base configuration tree
    #[serde(default)]
    pub config: ConfigMap,

    /// Base permission tree
    #[serde(default)]
    pub permissions: ConfigMap,

    /// Conditional overrides, applied in order
    #[serde(default)]
    pub overrides: Vec<OverrideRule>,
}

impl PluginOptions {
    /// Check the document for declarations that can never match.
    ///
    /// Matching itself is total and treats flagged declarations as simply
    /// non-matching; validation exists so a loader can warn about them
    /// instead of shipping rules that silently never apply.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        for (index, rule) in self.overrides.iter().enumerate() {
            if let Some(levels) = &rule.level {
                for clause in &levels.clauses {
                    if let RangeClause::Malformed(raw) = clause {
                        errors.push(ValidationError::MalformedRange {
                            index,
                            expr: raw.clone(),
                        });
                    }
                }
            }

            let selectors = [
                ("channel", &rule.channel),
                ("user", &rule.user),
                ("role", &rule.role),
            ];
            for (category, selector) in selectors {
                if let Some(selector) = selector {
                    let has_empty_entry = selector
                        .include
                        .iter()
                        .chain(&selector.exclude)
                        .any(|entry| entry.is_empty());
                    if has_empty_entry {
                        errors.push(ValidationError::EmptySelectorEntry { index, category });
                    }
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
