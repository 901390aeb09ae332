//! Grammar-configuration errors.

use smol_str::SmolStr;
use thiserror::Error;

/// Errors caused by a malformed language definition.
///
/// These abort the current parse run. They are never turned into content
/// diagnostics, since the source text cannot fix them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    /// The grammar declares no start rule.
    #[error("grammar has no start rules")]
    NoStartRules,

    /// Two rules share a name.
    #[error("rule `{0}` is defined more than once")]
    DuplicateRule(SmolStr),

    /// A rule reference, alternative option or start rule names no rule.
    #[error("unknown rule `{rule}` referenced from `{from}`")]
    UnknownRule { rule: SmolStr, from: SmolStr },

    /// A pattern terminal could not be compiled.
    #[error("invalid terminal pattern `{pattern}`: {message}")]
    InvalidPattern { pattern: String, message: String },

    /// An action names a command the interpreter does not know.
    #[error("unsupported action: `{0}`")]
    UnsupportedAction(String),

    /// A known action command was given an argument form it does not support.
    #[error("unsupported arguments for action `{action}`: expected {expected}")]
    UnsupportedArgument {
        action: String,
        expected: &'static str,
    },

    /// `identifierKind set` named a completion kind that does not exist.
    #[error("unknown identifier kind `{0}`")]
    UnknownKind(SmolStr),

    /// A `folding end` action ran without a matching `folding start`.
    #[error("folding end found without matching start: `{0}`")]
    UnbalancedFolding(String),

    /// A rule re-entered itself without consuming input.
    #[error("left recursion in rule `{0}`")]
    LeftRecursion(SmolStr),
}

impl GrammarError {
    /// Create an unknown rule error.
    pub fn unknown_rule(rule: impl Into<SmolStr>, from: impl Into<SmolStr>) -> Self {
        Self::UnknownRule {
            rule: rule.into(),
            from: from.into(),
        }
    }

    /// Create an unsupported argument error.
    pub fn unsupported_argument(action: impl ToString, expected: &'static str) -> Self {
        Self::UnsupportedArgument {
            action: action.to_string(),
            expected,
        }
    }
}
