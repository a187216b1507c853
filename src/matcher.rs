//! Condition evaluation for override rules.

use crate::context::MatchContext;
use crate::rule::{MatchMode, OverrideRule};

/// Decide whether a rule's conditions hold for the given context.
///
/// Categories absent from the rule are skipped entirely; they contribute
/// neither true nor false to the combination step, and a rule with no
/// categories matches unconditionally. A category that is present but whose
/// context datum is absent evaluates false, even when its requirement list
/// is empty: the rule cannot be evaluated without the datum.
pub fn rule_matches(rule: &OverrideRule, ctx: &MatchContext) -> bool {
    let mut verdicts = Vec::with_capacity(4);

    if let Some(levels) = &rule.level {
        verdicts.push(match ctx.level {
            Some(level) => levels.holds(level),
            None => false,
        });
    }

    if let Some(channels) = &rule.channel {
        verdicts.push(match &ctx.channel_id {
            Some(id) => channels.matches_id(id),
            None => false,
        });
    }

    if let Some(users) = &rule.user {
        verdicts.push(match &ctx.user_id {
            Some(id) => users.matches_id(id),
            None => false,
        });
    }

    if let Some(roles) = &rule.role {
        verdicts.push(match &ctx.member_roles {
            Some(held) => roles.matches_set(held),
            None => false,
        });
    }

    if verdicts.is_empty() {
        return true;
    }

    match rule.mode {
        MatchMode::All => verdicts.iter().all(|verdict| *verdict),
        MatchMode::Any => verdicts.iter().any(|verdict| *verdict),
    }
}
