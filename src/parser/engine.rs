//! Rule engine: applies grammar rules to the input.
//!
//! Rules are applied top-down, symbol by symbol, threading a [`ParseState`]
//! value. There is no backtracking beyond alternatives: an alternative tries
//! its options against copies of the state and keeps the first match.
//!
//! ```text
//! apply(rule, state)
//!   for symbol in rule:
//!     Terminal      -> match text on the current line, then skip trivia
//!     RuleReference -> apply(referenced rule)
//!     Alternative   -> first Matched option, else union of Partial options
//!     Action        -> actions::execute, zero width
//! ```
//!
//! When the input ends inside a rule, the terminal that would come next is
//! the frontier and its suggestions become the completion candidates.

use indexmap::IndexSet;
use rustc_hash::{FxBuildHasher, FxHashSet};
use smol_str::SmolStr;

use super::actions::{self, ParserInfo};
use super::options::ParseOptions;
use super::stack::ensure_sufficient_stack;
use super::state::ParseState;
use super::trivia::skip_trivia;
use crate::base::{Position, SourceText};
use crate::grammar::{Alternative, Grammar, GrammarError, Rule, Symbol, Terminal};
use crate::semantic::ErrorCode;

pub(crate) type CandidateSet = IndexSet<SmolStr, FxBuildHasher>;

/// Result of applying a rule or symbol.
#[derive(Debug)]
pub(crate) enum Outcome {
    /// The whole sequence matched
    Matched(ParseState),
    /// Input ran out before the sequence completed
    Partial(Frontier),
    /// The input cannot continue this sequence
    Failed(Failure),
}

#[derive(Debug)]
pub(crate) struct Frontier {
    pub candidates: CandidateSet,
    pub state: ParseState,
}

#[derive(Debug)]
pub(crate) struct Failure {
    pub position: Position,
    pub state: ParseState,
}

/// Why rule application stopped before reaching a verdict.
#[derive(Debug)]
pub(crate) enum Halt {
    /// The grammar is malformed
    Grammar(GrammarError),
    /// Rule nesting reached `max_depth`; the state is where it happened
    TooDeep(ParseState),
}

impl From<GrammarError> for Halt {
    fn from(err: GrammarError) -> Self {
        Self::Grammar(err)
    }
}

/// How a whole parse run ended.
#[derive(Debug)]
pub(crate) enum Verdict {
    /// A start rule matched the entire input
    Finished(ParseState),
    /// The input is a prefix of a document; these may come next
    Unfinished(Frontier),
    /// The input is rejected from `from` to its end
    Rejected {
        state: ParseState,
        code: ErrorCode,
        from: Position,
        expected: Vec<SmolStr>,
    },
}

pub(crate) struct RuleEngine<'a> {
    grammar: &'a Grammar,
    text: &'a SourceText,
    uri: &'a str,
    options: &'a ParseOptions,
    /// Rules being applied, with the position they started at
    active: FxHashSet<(SmolStr, Position)>,
    depth: usize,
    furthest: Option<Position>,
    expected: CandidateSet,
}

impl<'a> RuleEngine<'a> {
    pub fn new(grammar: &'a Grammar, text: &'a SourceText, uri: &'a str, options: &'a ParseOptions) -> Self {
        Self {
            grammar,
            text,
            uri,
            options,
            active: FxHashSet::default(),
            depth: 0,
            furthest: None,
            expected: CandidateSet::default(),
        }
    }

    /// Try every start rule and pick the verdict for the whole input.
    pub fn run(&mut self) -> Result<Verdict, GrammarError> {
        let grammar = self.grammar;
        if grammar.start_rules().is_empty() {
            return Err(GrammarError::NoStartRules);
        }

        let mut start = ParseState::default();
        skip_trivia(self.text, grammar.comment_rules(), self.options, &mut start);

        let mut partial: Option<Frontier> = None;
        let mut trailing: Option<ParseState> = None;
        let mut failure: Option<Failure> = None;

        for name in grammar.start_rules() {
            let outcome = match self.apply(name, "<start>", start.clone()) {
                Ok(outcome) => outcome,
                Err(Halt::Grammar(err)) => return Err(err),
                Err(Halt::TooDeep(state)) => {
                    tracing::debug!(rule = %name, at = %state.position, "rule nesting limit reached");
                    let from = state.position;
                    return Ok(Verdict::Rejected {
                        state,
                        code: ErrorCode::E0103,
                        from,
                        expected: Vec::new(),
                    });
                }
            };
            match outcome {
                Outcome::Matched(state) if self.text.is_end(state.position) => {
                    tracing::debug!(rule = %name, "start rule matched the whole input");
                    return Ok(Verdict::Finished(state));
                }
                Outcome::Matched(state) => {
                    tracing::debug!(rule = %name, end = %state.position, "start rule left trailing input");
                    trailing.get_or_insert(state);
                }
                Outcome::Partial(frontier) => {
                    tracing::debug!(rule = %name, candidates = frontier.candidates.len(), "start rule reached the frontier");
                    if partial
                        .as_ref()
                        .is_none_or(|best| frontier.candidates.len() > best.candidates.len())
                    {
                        partial = Some(frontier);
                    }
                }
                Outcome::Failed(failed) => {
                    tracing::debug!(rule = %name, at = %failed.position, "start rule failed");
                    if failure.as_ref().is_none_or(|best| failed.position > best.position) {
                        failure = Some(failed);
                    }
                }
            }
        }

        if let Some(frontier) = partial {
            return Ok(Verdict::Unfinished(frontier));
        }

        // The span covers everything no start rule consumed; the expectation
        // comes from the furthest point any terminal failed at
        let (state, code, from) = match (trailing, failure) {
            (Some(state), _) => {
                let from = state.position;
                (state, ErrorCode::E0102, from)
            }
            (None, Some(failure)) => (failure.state, ErrorCode::E0101, start.position),
            (None, None) => {
                let from = start.position;
                (start, ErrorCode::E0101, from)
            }
        };
        let expected = match self.furthest {
            Some(furthest) if furthest >= from => self.expected.iter().cloned().collect(),
            _ => Vec::new(),
        };

        Ok(Verdict::Rejected {
            state,
            code,
            from,
            expected,
        })
    }

    /// Apply the rule `name`, referenced from the rule `from`.
    pub fn apply(&mut self, name: &str, from: &str, state: ParseState) -> Result<Outcome, Halt> {
        let grammar = self.grammar;
        let rule = grammar
            .rule(name)
            .ok_or_else(|| GrammarError::unknown_rule(name, from))?;

        let key = (rule.name().clone(), state.position);
        if !self.active.insert(key.clone()) {
            return Err(GrammarError::LeftRecursion(rule.name().clone()).into());
        }
        if self.depth >= self.options.max_depth {
            self.active.remove(&key);
            return Err(Halt::TooDeep(state));
        }

        tracing::trace!(rule = %name, position = %state.position, "apply rule");
        self.depth += 1;
        let outcome = ensure_sufficient_stack(|| self.apply_sequence(rule, state));
        self.depth -= 1;
        self.active.remove(&key);
        outcome
    }

    fn apply_sequence(&mut self, rule: &'a Rule, mut state: ParseState) -> Result<Outcome, Halt> {
        for symbol in rule.symbols() {
            state = match self.apply_symbol(rule, symbol, state)? {
                Outcome::Matched(next) => next,
                other => return Ok(other),
            };
        }
        Ok(Outcome::Matched(state))
    }

    fn apply_symbol(&mut self, rule: &'a Rule, symbol: &'a Symbol, state: ParseState) -> Result<Outcome, Halt> {
        match symbol {
            Symbol::Terminal(terminal) => Ok(self.match_terminal(rule, terminal, state)),
            Symbol::RuleReference(name) => self.apply(name, rule.name(), state),
            Symbol::Alternative(alternative) => self.apply_alternative(rule, alternative, state),
            Symbol::Action(action) => {
                let info = ParserInfo {
                    uri: self.uri,
                    text: self.text,
                };
                Ok(Outcome::Matched(actions::execute(info, state, action)?))
            }
        }
    }

    fn match_terminal(&mut self, rule: &Rule, terminal: &Terminal, state: ParseState) -> Outcome {
        let position = state.position;
        let rest = self.text.rest_of_line(position);
        let remaining = rest.chars().count();

        if remaining >= terminal.min_chars() {
            if let Some(len) = terminal.match_prefix(rest) {
                let mut next = state;
                next.advance_to(position.advanced(len));
                skip_trivia(self.text, self.grammar.comment_rules(), self.options, &mut next);
                return Outcome::Matched(next);
            }
        } else if self.text.is_last_line(position.line) {
            // Only suggestions the partial text could still become
            let content = terminal.possible_content();
            let typed: Vec<&SmolStr> = content
                .iter()
                .filter(|candidate| candidate.starts_with(rest))
                .collect();
            if content.is_empty() || !typed.is_empty() {
                let candidates: CandidateSet = typed
                    .into_iter()
                    .chain(state.skipped_candidates())
                    .cloned()
                    .collect();
                return Outcome::Partial(Frontier { candidates, state });
            }
        }

        self.record_failure(rule, terminal, position);
        Outcome::Failed(Failure { position, state })
    }

    fn apply_alternative(
        &mut self,
        rule: &'a Rule,
        alternative: &'a Alternative,
        state: ParseState,
    ) -> Result<Outcome, Halt> {
        let mut partial: Option<Frontier> = None;
        let mut failure: Option<Failure> = None;

        for option in alternative.options() {
            match self.apply(option, rule.name(), state.clone())? {
                Outcome::Matched(next) => return Ok(Outcome::Matched(next)),
                Outcome::Partial(frontier) => {
                    if let Some(collected) = partial.as_mut() {
                        collected.candidates.extend(frontier.candidates);
                    } else {
                        partial = Some(frontier);
                    }
                }
                Outcome::Failed(failed) => {
                    if failure.as_ref().is_none_or(|best| failed.position > best.position) {
                        failure = Some(failed);
                    }
                }
            }
        }

        if alternative.allow_none() {
            if self.text.is_end(state.position) {
                let mut next = state;
                if let Some(frontier) = partial {
                    next.remember_skipped(frontier.candidates.iter());
                }
                return Ok(Outcome::Matched(next));
            }
            if partial.is_none() {
                return Ok(Outcome::Matched(state));
            }
        }

        Ok(match (partial, failure) {
            (Some(frontier), _) => Outcome::Partial(frontier),
            (None, Some(failure)) => Outcome::Failed(failure),
            (None, None) => Outcome::Failed(Failure {
                position: state.position,
                state,
            }),
        })
    }

    /// Track the furthest position a terminal failed at, and what it wanted there
    fn record_failure(&mut self, rule: &Rule, terminal: &Terminal, position: Position) {
        match self.furthest {
            Some(furthest) if furthest > position => return,
            Some(furthest) if furthest == position => {}
            _ => {
                self.furthest = Some(position);
                self.expected.clear();
            }
        }
        if terminal.possible_content().is_empty() {
            self.expected.insert(rule.name().clone());
        } else {
            self.expected.extend(terminal.possible_content().iter().cloned());
        }
    }
}
