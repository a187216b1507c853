//! Typed override rules.
//!
//! Overrides are declared in a compact string form: `">=20"` for ranges,
//! `"!3200"` for negated identifiers, and a single entry wherever a list is
//! allowed. Deserialization compiles those strings into the typed condition
//! representation here, so matching never re-parses a string.

mod range;
mod selector;

pub use range::{CompareOp, LevelCondition, RangeClause, RangeExpr};
pub use selector::Selector;

use crate::types::ConfigMap;
use serde::{Deserialize, Serialize};

/// How per-category verdicts combine into a rule verdict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Every category present in the rule must match
    #[default]
    All,
    /// At least one category present in the rule must match
    Any,
}

/// A conditional patch applied on top of base configuration and permissions
/// when its conditions match a context.
///
/// Absent condition categories impose no constraint. A rule with no
/// categories at all matches every context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverrideRule {
    /// Level condition; every clause must hold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<LevelCondition>,

    /// Channel condition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<Selector>,

    /// User condition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Selector>,

    /// Role condition, matched against the caller's role set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Selector>,

    /// Category combination mode
    #[serde(default, rename = "type")]
    pub mode: MatchMode,

    /// Configuration patch applied when the rule matches
    #[serde(default, skip_serializing_if = "ConfigMap::is_empty")]
    pub config: ConfigMap,

    /// Permission patch applied when the rule matches
    #[serde(default, skip_serializing_if = "ConfigMap::is_empty")]
    pub permissions: ConfigMap,
}

/// Serde intermediate accepting either a single value or a sequence.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}
