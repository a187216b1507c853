//! Identifier selectors with negation.

use crate::rule::OneOrMany;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Identifier condition for the channel, user, and role categories.
///
/// Entries prefixed with `!` in the source form are negations. Positive
/// entries are OR-combined; negated entries are AND-combined must-not-match
/// constraints. With no positive entries the positive side is vacuously
/// true, so a selector of only negations matches anything the negations
/// allow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "OneOrMany<String>", into = "Vec<String>")]
pub struct Selector {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl Selector {
    /// Match a single identifier (channel and user categories).
    pub fn matches_id(&self, id: &str) -> bool {
        let included = self.include.is_empty() || self.include.iter().any(|entry| entry == id);
        let excluded = self.exclude.iter().any(|entry| entry == id);
        included && !excluded
    }

    /// Match against a set of held identifiers (role category).
    ///
    /// A positive entry matches if the set contains it; a negated entry
    /// fails the selector if the set contains it.
    pub fn matches_set(&self, held: &HashSet<String>) -> bool {
        let included = self.include.is_empty() || self.include.iter().any(|entry| held.contains(entry));
        let excluded = self.exclude.iter().any(|entry| held.contains(entry));
        included && !excluded
    }
}

impl From<OneOrMany<String>> for Selector {
    fn from(raw: OneOrMany<String>) -> Self {
        let mut include = Vec::new();
        let mut exclude = Vec::new();
        for entry in raw.into_vec() {
            match entry.strip_prefix('!') {
                Some(negated) => exclude.push(negated.to_string()),
                None => include.push(entry),
            }
        }
        Selector { include, exclude }
    }
}

impl From<Selector> for Vec<String> {
    fn from(selector: Selector) -> Self {
        let mut entries = selector.include;
        entries.extend(selector.exclude.into_iter().map(|id| format!("!{}", id)));
        entries
    }
}
