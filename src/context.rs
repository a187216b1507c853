//! Caller context a resolution decision is evaluated against.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The caller-specific facts override rules are matched against.
///
/// Every field is optional. A rule category whose context datum is absent
/// evaluates false, so the empty context only ever selects unconditional
/// overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchContext {
    /// Privilege level of the caller
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<i64>,

    /// Channel the request originated from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,

    /// Identity of the caller
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// Roles held by the caller
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_roles: Option<HashSet<String>>,
}
