//! Stratum: Layered Plugin Configuration and Permission Resolution
//!
//! Computes the effective configuration and permission values for a
//! plugin-based application whose behavior varies per caller context.
//! Administrators declare base values plus an ordered list of conditional
//! overrides; at request time the matching overrides fold onto the base, in
//! declaration order, and permission queries read boolean leaves out of the
//! result. Every operation is a pure function of its inputs.

pub mod context;
pub mod error;
pub mod matcher;
pub mod merge;
pub mod options;
pub mod resolver;
pub mod rule;
pub mod types;
