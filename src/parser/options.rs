//! Parse options

/// Settings for a parse run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Skip whitespace between tokens; line breaks are always skipped
    pub skip_whitespace: bool,
    /// Report multi-line comments as comment folding ranges
    pub fold_comments: bool,
    /// Maximum rule nesting. A document that goes deeper is rejected with an
    /// E0103 diagnostic from the point the limit was reached; right-recursive
    /// lists nest once or twice per item.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            skip_whitespace: true,
            fold_comments: true,
            max_depth: 100_000,
        }
    }
}
