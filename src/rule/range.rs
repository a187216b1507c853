//! Range expressions for level conditions.
//!
//! Expressions arrive as strings (`">=20"`, `"<40"`, `"50"`) and are parsed
//! once at document load time. Matching only ever evaluates the parsed form.

use crate::error::ParseRangeError;
use crate::rule::OneOrMany;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Comparison operator of a range expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// `>=`
    Ge,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `=`, also used when no operator is given
    Eq,
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            CompareOp::Ge => ">=",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Lt => "<",
            CompareOp::Eq => "=",
        };
        write!(f, "{}", symbol)
    }
}

/// A parsed range expression: operator plus integer bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeExpr {
    pub op: CompareOp,
    pub bound: i64,
}

impl RangeExpr {
    /// Evaluate the expression against a concrete level.
    pub fn holds(&self, level: i64) -> bool {
        match self.op {
            CompareOp::Ge => level >= self.bound,
            CompareOp::Le => level <= self.bound,
            CompareOp::Gt => level > self.bound,
            CompareOp::Lt => level < self.bound,
            CompareOp::Eq => level == self.bound,
        }
    }
}

impl FromStr for RangeExpr {
    type Err = ParseRangeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        // Two-character operators first, or `=` is never reached.
        let (op, rest) = if let Some(rest) = trimmed.strip_prefix(">=") {
            (CompareOp::Ge, rest)
        } else if let Some(rest) = trimmed.strip_prefix("<=") {
            (CompareOp::Le, rest)
        } else if let Some(rest) = trimmed.strip_prefix('>') {
            (CompareOp::Gt, rest)
        } else if let Some(rest) = trimmed.strip_prefix('<') {
            (CompareOp::Lt, rest)
        } else if let Some(rest) = trimmed.strip_prefix('=') {
            (CompareOp::Eq, rest)
        } else {
            (CompareOp::Eq, trimmed)
        };

        let bound = rest
            .trim()
            .parse::<i64>()
            .map_err(|_| ParseRangeError(raw.to_string()))?;

        Ok(RangeExpr { op, bound })
    }
}

impl fmt::Display for RangeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.op {
            CompareOp::Eq => write!(f, "{}", self.bound),
            op => write!(f, "{}{}", op, self.bound),
        }
    }
}

/// One clause of a level condition.
///
/// A clause that failed to parse is retained rather than rejected: it never
/// matches, and document validation reports it. A malformed rule must never
/// grant unintended access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeClause {
    Parsed(RangeExpr),
    Malformed(String),
}

impl RangeClause {
    pub fn holds(&self, level: i64) -> bool {
        match self {
            RangeClause::Parsed(expr) => expr.holds(level),
            RangeClause::Malformed(_) => false,
        }
    }
}

impl From<String> for RangeClause {
    fn from(raw: String) -> Self {
        match raw.parse::<RangeExpr>() {
            Ok(expr) => RangeClause::Parsed(expr),
            Err(_) => RangeClause::Malformed(raw),
        }
    }
}

impl fmt::Display for RangeClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeClause::Parsed(expr) => expr.fmt(f),
            RangeClause::Malformed(raw) => f.write_str(raw),
        }
    }
}

/// Level condition of an override rule: every clause must hold.
///
/// Deserializes from a single expression string or a sequence of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "OneOrMany<String>", into = "Vec<String>")]
pub struct LevelCondition {
    pub clauses: Vec<RangeClause>,
}

impl LevelCondition {
    /// Evaluate the condition against a concrete context level.
    ///
    /// An empty clause list is vacuously true. The caller decides what an
    /// absent context level means; this type never sees one.
    pub fn holds(&self, level: i64) -> bool {
        self.clauses.iter().all(|clause| clause.holds(level))
    }
}

impl From<OneOrMany<String>> for LevelCondition {
    fn from(raw: OneOrMany<String>) -> Self {
        LevelCondition {
            clauses: raw.into_vec().into_iter().map(RangeClause::from).collect(),
        }
    }
}

impl From<LevelCondition> for Vec<String> {
    fn from(cond: LevelCondition) -> Self {
        cond.clauses.iter().map(|clause| clause.to_string()).collect()
    }
}
