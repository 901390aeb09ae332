//! Grammar symbols and rules.

use smol_str::SmolStr;

use super::action::Action;
use super::terminal::Terminal;

/// One element of a rule's symbol sequence.
///
/// The set of variants is closed by the grammar format.
#[derive(Debug, Clone)]
pub enum Symbol {
    Terminal(Terminal),
    /// Defers to another named rule; resolved at parse time.
    RuleReference(SmolStr),
    Alternative(Alternative),
    Action(Action),
}

impl Symbol {
    pub fn literal(text: impl Into<SmolStr>) -> Self {
        Self::Terminal(Terminal::literal(text))
    }

    pub fn rule(name: impl Into<SmolStr>) -> Self {
        Self::RuleReference(name.into())
    }

    /// An alternative that must match one of `options`
    pub fn one_of<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        Self::Alternative(Alternative::new(options, false))
    }

    /// An alternative that may also match nothing
    pub fn optional<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        Self::Alternative(Alternative::new(options, true))
    }

    pub fn action(text: &str) -> Self {
        Self::Action(Action::from(text))
    }

    /// Names of the rules this symbol refers to
    pub fn referenced_rules(&self) -> &[SmolStr] {
        match self {
            Self::RuleReference(name) => std::slice::from_ref(name),
            Self::Alternative(alternative) => alternative.options(),
            Self::Terminal(_) | Self::Action(_) => &[],
        }
    }
}

impl From<Terminal> for Symbol {
    fn from(terminal: Terminal) -> Self {
        Self::Terminal(terminal)
    }
}

impl From<Action> for Symbol {
    fn from(action: Action) -> Self {
        Self::Action(action)
    }
}

/// A choice between named options, tried in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternative {
    options: Vec<SmolStr>,
    allow_none: bool,
}

impl Alternative {
    pub fn new<I, S>(options: I, allow_none: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            allow_none,
        }
    }

    pub fn options(&self) -> &[SmolStr] {
        &self.options
    }

    /// Whether matching no option counts as a zero-width match
    pub fn allow_none(&self) -> bool {
        self.allow_none
    }
}

/// A named, ordered symbol sequence.
#[derive(Debug, Clone)]
pub struct Rule {
    name: SmolStr,
    symbols: Vec<Symbol>,
}

impl Rule {
    pub fn new(name: impl Into<SmolStr>, symbols: impl IntoIterator<Item = Symbol>) -> Self {
        Self {
            name: name.into(),
            symbols: symbols.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &SmolStr {
        &self.name
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }
}
