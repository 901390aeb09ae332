//! Semantic actions embedded in grammar rules.

use std::fmt;

use smol_str::SmolStr;

/// A zero-width grammar symbol that triggers a semantic side effect.
///
/// Actions are written as whitespace-separated words: the command name
/// followed by its arguments, e.g. `identifierType set int`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Action {
    command: SmolStr,
    arguments: Vec<SmolStr>,
}

impl Action {
    /// Brackets an identifier name with two occurrences.
    pub const IDENTIFIER: &'static str = "identifier";
    /// Adds a type to the next identifier, immediately or by bracketing.
    pub const IDENTIFIER_TYPE: &'static str = "identifierType";
    /// Sets the completion kind of the next identifier.
    pub const IDENTIFIER_KIND: &'static str = "identifierKind";
    /// Marks the next identifier as a declaration site.
    pub const DECLARATION: &'static str = "declaration";
    /// Marks the next identifier as a definition site.
    pub const DEFINITION: &'static str = "definition";
    /// Marks the next identifier as an implementation site.
    pub const IMPLEMENTATION: &'static str = "implementation";
    /// Opens or closes a folding range.
    pub const FOLDING: &'static str = "folding";

    /// Argument selecting the immediate form of `identifierType`/`identifierKind`.
    pub const ARG_SET: &'static str = "set";
    pub const ARG_FOLDING_START: &'static str = "start";
    pub const ARG_FOLDING_END: &'static str = "end";

    pub fn new<I, S>(command: impl Into<SmolStr>, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        Self {
            command: command.into(),
            arguments: arguments.into_iter().map(Into::into).collect(),
        }
    }

    /// The command name; two-phase markers are keyed by it
    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn arguments(&self) -> &[SmolStr] {
        &self.arguments
    }

    pub fn argument(&self, index: usize) -> Option<&str> {
        self.arguments.get(index).map(SmolStr::as_str)
    }
}

impl From<&str> for Action {
    fn from(text: &str) -> Self {
        let mut words = text.split_whitespace();
        let command = words.next().unwrap_or_default();
        Self::new(command, words)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command)?;
        for argument in &self.arguments {
            write!(f, " {argument}")?;
        }
        Ok(())
    }
}
