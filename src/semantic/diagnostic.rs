//! Diagnostics: recoverable problems found in source text.
//!
//! Diagnostics never abort a parse. They are accumulated in the parse state
//! and handed to the caller with the result. Problems with the grammar itself
//! are [`GrammarError`](crate::grammar::GrammarError)s instead.
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Parse failures (input the grammar does not accept)
//! - E02xx: Duplicate identifier sites
//! - E03xx: Identifier consistency (kinds, types)

use std::fmt;

use smol_str::SmolStr;

use crate::base::{Location, Span};

// ============================================================================
// SEVERITY
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    #[default]
    Error,
    Warning,
    Info,
    Hint,
}

impl Severity {
    /// Convert to LSP severity number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            Severity::Error => 1,
            Severity::Warning => 2,
            Severity::Info => 3,
            Severity::Hint => 4,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

// ============================================================================
// ERROR CODES
// ============================================================================

/// Categorized diagnostic codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorCode {
    /// No start rule accepts the input
    E0101,
    /// A start rule matched, but input remains after it
    E0102,
    /// The document nests deeper than the configured rule depth
    E0103,

    /// Second declaration of a name
    E0201,
    /// Second definition of a name
    E0202,
    /// Second implementation of a name
    E0203,

    /// Identifier kind disagrees with an earlier assertion
    E0301,
    /// Identifier types are not compatible with the recorded ones
    E0302,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0201")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0102 => "E0102",
            Self::E0103 => "E0103",
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0203 => "E0203",
            Self::E0301 => "E0301",
            Self::E0302 => "E0302",
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::E0101 => "unexpected input",
            Self::E0102 => "unexpected trailing input",
            Self::E0103 => "input nests deeper than the parser's rule depth limit",
            Self::E0201 => "already declared",
            Self::E0202 => "already defined",
            Self::E0203 => "already implemented",
            Self::E0301 => "identifier kind mismatch",
            Self::E0302 => "identifier type mismatch",
        }
    }

    /// Whether the code reports a parse failure rather than a semantic problem
    pub fn is_parse_failure(&self) -> bool {
        matches!(self, Self::E0101 | Self::E0102 | Self::E0103)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// DIAGNOSTIC
// ============================================================================

/// Related information for a diagnostic, e.g. the earlier declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelatedInfo {
    pub location: Location,
    pub message: String,
}

impl RelatedInfo {
    pub fn new(location: Location, message: impl Into<String>) -> Self {
        Self {
            location,
            message: message.into(),
        }
    }
}

/// A diagnostic message with location.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostic {
    /// The document containing this diagnostic.
    pub uri: SmolStr,
    pub span: Span,
    pub severity: Severity,
    pub code: ErrorCode,
    pub message: String,
    pub related: Vec<RelatedInfo>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(uri: impl Into<SmolStr>, span: Span, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            span,
            severity: Severity::Error,
            code,
            message: message.into(),
            related: Vec::new(),
        }
    }

    /// Create an error diagnostic carrying the code's default message.
    pub fn from_code(uri: impl Into<SmolStr>, span: Span, code: ErrorCode) -> Self {
        Self::error(uri, span, code, code.default_message())
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Add related information.
    pub fn with_related(mut self, info: RelatedInfo) -> Self {
        self.related.push(info);
        self
    }

    pub fn location(&self) -> Location {
        Location::new(self.uri.clone(), self.span)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: [{}] {}", self.uri, self.span.start, self.code, self.message)
    }
}
