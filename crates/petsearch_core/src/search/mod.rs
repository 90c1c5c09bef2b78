//! Store-level filters for pet lookups.
//!
//! # Responsibility
//! - Translate a (field, pattern) criterion into a collection query.
//! - Provide the case-insensitive `regexp` matcher the query relies on.
//!
//! # Invariants
//! - Matching is unanchored and ignores case.
//! - Pattern syntax in caller input is honored, not escaped.

pub mod filter;
pub mod regexp;
