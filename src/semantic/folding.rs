//! Folding ranges.

use crate::base::Span;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FoldingKind {
    /// A structural region bracketed by `folding` actions
    #[default]
    Region,
    /// A multi-line comment
    Comment,
}

impl FoldingKind {
    /// The LSP `FoldingRangeKind` string
    pub fn as_lsp_str(&self) -> &'static str {
        match self {
            FoldingKind::Region => "region",
            FoldingKind::Comment => "comment",
        }
    }
}

/// A collapsible range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FoldingRange {
    pub span: Span,
    pub kind: FoldingKind,
}

impl FoldingRange {
    pub fn region(span: Span) -> Self {
        Self {
            span,
            kind: FoldingKind::Region,
        }
    }

    pub fn comment(span: Span) -> Self {
        Self {
            span,
            kind: FoldingKind::Comment,
        }
    }
}
