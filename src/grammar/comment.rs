//! Comment delimiter rules.

use smol_str::SmolStr;

/// Start/end delimiters of one comment form.
///
/// An `end` of `"\n"` makes the comment run to the end of its line.
/// `replacement`, when present, stands in for the start delimiter in the
/// extracted comment text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRule {
    start: SmolStr,
    end: SmolStr,
    replacement: Option<SmolStr>,
}

impl CommentRule {
    pub const LINE_END: &'static str = "\n";

    pub fn new(start: impl Into<SmolStr>, end: impl Into<SmolStr>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            replacement: None,
        }
    }

    /// A comment running from `start` to the end of the line
    pub fn line(start: impl Into<SmolStr>) -> Self {
        Self::new(start, Self::LINE_END)
    }

    pub fn with_replacement(mut self, replacement: impl Into<SmolStr>) -> Self {
        self.replacement = Some(replacement.into());
        self
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    pub fn replacement(&self) -> Option<&str> {
        self.replacement.as_deref()
    }

    pub fn is_line_comment(&self) -> bool {
        self.end == Self::LINE_END
    }
}

/// The comment forms of a language.
///
/// Documentation comments are tried first so a `///` form wins over `//`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentRules {
    pub normal: Vec<CommentRule>,
    pub documentation: Vec<CommentRule>,
}

impl CommentRules {
    pub fn is_empty(&self) -> bool {
        self.normal.is_empty() && self.documentation.is_empty()
    }

    /// All rules in matching order, paired with whether they are documentation
    pub fn iter(&self) -> impl Iterator<Item = (&CommentRule, bool)> {
        self.documentation
            .iter()
            .map(|rule| (rule, true))
            .chain(self.normal.iter().map(|rule| (rule, false)))
    }
}
