//! Grammar model: the declarative description of a language.
//!
//! A [`Grammar`] is data only. It is built once per language through
//! [`GrammarBuilder`], validated, and then shared read-only (usually behind an
//! `Arc`) by every parse of that language.
//!
//! ```text
//! Grammar
//!   ├── start rules   ["program", ...]
//!   ├── rules         name → Rule(Symbol*)
//!   │                   Symbol = Terminal | RuleReference | Alternative | Action
//!   ├── comment rules normal + documentation delimiters
//!   └── keywords      literal suggestions of every terminal
//! ```

mod action;
mod comment;
mod error;
mod symbol;
mod terminal;

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxBuildHasher;
use smol_str::SmolStr;

pub use action::Action;
pub use comment::{CommentRule, CommentRules};
pub use error::GrammarError;
pub use symbol::{Alternative, Rule, Symbol};
pub use terminal::{Terminal, TerminalKind, TerminalPredicate};

/// An immutable language definition.
#[derive(Debug, Clone)]
pub struct Grammar {
    start_rules: Vec<SmolStr>,
    rules: IndexMap<SmolStr, Rule, FxBuildHasher>,
    comment_rules: CommentRules,
    /// Every literal suggestion of every terminal, first occurrence order
    keywords: Vec<SmolStr>,
}

impl Grammar {
    pub fn builder() -> GrammarBuilder {
        GrammarBuilder::default()
    }

    /// Rule names tried, in order, at the start of a parse
    pub fn start_rules(&self) -> &[SmolStr] {
        &self.start_rules
    }

    pub fn rule(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }

    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.values()
    }

    pub fn comment_rules(&self) -> &CommentRules {
        &self.comment_rules
    }

    /// The keyword completion list, used when a parse offers no continuations
    pub fn keywords(&self) -> &[SmolStr] {
        &self.keywords
    }

    fn collect_keywords(rules: &IndexMap<SmolStr, Rule, FxBuildHasher>) -> Vec<SmolStr> {
        let mut keywords = IndexSet::<SmolStr, FxBuildHasher>::default();
        for symbol in rules.values().flat_map(Rule::symbols) {
            if let Symbol::Terminal(terminal) = symbol {
                keywords.extend(terminal.possible_content().iter().cloned());
            }
        }
        keywords.into_iter().collect()
    }

    fn validate(&self) -> Result<(), GrammarError> {
        if self.start_rules.is_empty() {
            return Err(GrammarError::NoStartRules);
        }

        for start in &self.start_rules {
            if !self.rules.contains_key(start) {
                return Err(GrammarError::unknown_rule(start.clone(), "<start>"));
            }
        }

        for rule in self.rules.values() {
            for symbol in rule.symbols() {
                if let Some(missing) = symbol
                    .referenced_rules()
                    .iter()
                    .find(|name| !self.rules.contains_key(*name))
                {
                    return Err(GrammarError::unknown_rule(missing.clone(), rule.name().clone()));
                }
            }
        }

        Ok(())
    }
}

/// Collects rules and settings, then validates them into a [`Grammar`].
#[derive(Debug, Default)]
pub struct GrammarBuilder {
    start_rules: Vec<SmolStr>,
    rules: Vec<Rule>,
    comment_rules: CommentRules,
}

impl GrammarBuilder {
    pub fn start_rule(mut self, name: impl Into<SmolStr>) -> Self {
        self.start_rules.push(name.into());
        self
    }

    pub fn rule(mut self, name: impl Into<SmolStr>, symbols: impl IntoIterator<Item = Symbol>) -> Self {
        self.rules.push(Rule::new(name, symbols));
        self
    }

    /// A rule made of a single terminal, usable as an alternative option
    pub fn terminal_rule(self, name: impl Into<SmolStr>, terminal: Terminal) -> Self {
        self.rule(name, [Symbol::Terminal(terminal)])
    }

    pub fn comment(mut self, rule: CommentRule) -> Self {
        self.comment_rules.normal.push(rule);
        self
    }

    pub fn documentation_comment(mut self, rule: CommentRule) -> Self {
        self.comment_rules.documentation.push(rule);
        self
    }

    /// Build and validate.
    ///
    /// Fails when there are no start rules, a rule name repeats, or any start
    /// rule, rule reference or alternative option names no rule.
    pub fn build(self) -> Result<Grammar, GrammarError> {
        let grammar = self.assemble()?;
        grammar.validate()?;
        Ok(grammar)
    }

    /// Build without resolving references.
    ///
    /// Unresolved names are then reported by the parser when it reaches them.
    pub fn build_unchecked(self) -> Result<Grammar, GrammarError> {
        self.assemble()
    }

    fn assemble(self) -> Result<Grammar, GrammarError> {
        let mut rules = IndexMap::with_capacity_and_hasher(self.rules.len(), FxBuildHasher);
        for rule in self.rules {
            let name = rule.name().clone();
            if rules.insert(name.clone(), rule).is_some() {
                return Err(GrammarError::DuplicateRule(name));
            }
        }

        Ok(Grammar {
            keywords: Grammar::collect_keywords(&rules),
            start_rules: self.start_rules,
            rules,
            comment_rules: self.comment_rules,
        })
    }
}
