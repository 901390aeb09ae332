//! Foundation types for the uld toolchain.
//!
//! This module provides fundamental types used throughout the engine:
//! - [`Position`], [`Span`] - Line/character positions
//! - [`Location`] - A span inside a named document
//! - [`SourceText`], [`TextSource`] - Input snapshots and span access
//!
//! This module has NO dependencies on other uld modules.

mod position;
mod text;

pub use position::{Location, Position, Span};
pub use text::{SourceText, TextSource, is_word_character, is_word_start};
