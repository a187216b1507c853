//! Error types for option documents.
//!
//! Resolution itself is total and never fails; these types cover the
//! document boundary, where a loader may want to surface declarations that
//! can never match.

use thiserror::Error;

/// A range expression that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed range expression: '{0}'")]
pub struct ParseRangeError(pub String);

/// Advisory findings produced by document validation.
///
/// None of these stop resolution: a flagged declaration simply never
/// matches. Reporting them is the loading collaborator's call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("override {index}: malformed range expression '{expr}' never matches")]
    MalformedRange { index: usize, expr: String },

    #[error("override {index}: empty {category} selector entry never matches")]
    EmptySelectorEntry { index: usize, category: &'static str },
}
