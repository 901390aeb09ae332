//! # uld-base
//!
//! Grammar-configurable source analysis: parse any language described by a
//! declarative grammar and answer editor queries about it.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → Editor features (completion, references, goto, folding)
//!   ↓
//! parser    → Rule engine, action interpreter, ParseResult
//!   ↓
//! semantic  → Identifiers, diagnostics, completion items, folding ranges
//!   ↓
//! grammar   → Rules, symbols, terminals, actions, comment rules
//!   ↓
//! base      → Primitives (Position, Span, Location, SourceText)
//! ```

// ============================================================================
// MODULES (dependency order: base → grammar → semantic → parser → ide)
// ============================================================================

/// Foundation types: Position, Span, Location, SourceText
pub mod base;

/// Grammar model: rules, symbols, validation
pub mod grammar;

/// Semantic model: identifiers, diagnostics, completion items
pub mod semantic;

/// Parser: rule engine and action interpreter
pub mod parser;

/// IDE features: completion, references, goto, folding
pub mod ide;

// Re-export commonly needed items
pub use base::{Location, Position, SourceText, Span};
pub use grammar::{Grammar, GrammarBuilder, GrammarError};
pub use parser::{ParseOptions, ParseResult, Parser};
