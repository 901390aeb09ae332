//! IDE feature tests
//!
//! Tests for:
//! - Find references
//! - Go to declaration / definition / implementation
//! - Code completion
//! - Folding ranges
//! - AnalysisHost document management

pub mod tests_references;
