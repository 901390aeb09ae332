//! Semantic model: what a parse learns about the source text.
//!
//! - [`Identifier`] - one name with all its sites and inferred types
//! - [`Diagnostic`] - a recoverable problem found in the text
//! - [`CompletionItem`] - a suggested continuation
//! - [`FoldingRange`] - a collapsible region
//!
//! These are plain data types. The action interpreter in
//! [`parser`](crate::parser) fills them in.

mod completion;
mod diagnostic;
mod folding;
mod identifier;

pub use completion::{CompletionItem, CompletionKind};
pub use diagnostic::{Diagnostic, ErrorCode, RelatedInfo, Severity};
pub use folding::{FoldingKind, FoldingRange};
pub use identifier::{Identifier, IdentifierTypes, Reference};
