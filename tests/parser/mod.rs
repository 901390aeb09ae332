//! Parser tests
//!
//! Tests for:
//! - Identifier table construction
//! - Types and kinds
//! - Possible continuations
//! - Parse failure diagnostics
//! - Folding ranges and comments
//! - Grammar errors

pub mod tests_continuations;
pub mod tests_diagnostics;
pub mod tests_grammar_errors;
pub mod tests_identifiers;
pub mod tests_types;
