//! The identifier symbol table entries built by a parse.

use std::fmt;

use im::Vector;
use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;
use smol_str::SmolStr;

use super::completion::CompletionKind;
use crate::base::{Location, Position, Span};

/// One occurrence of an identifier, optionally with its enclosing construct.
///
/// Also used for declaration, definition and implementation sites.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reference {
    pub location: Location,
    pub enclosing_range: Option<Span>,
}

impl Reference {
    pub fn new(location: Location) -> Self {
        Self {
            location,
            enclosing_range: None,
        }
    }

    pub fn with_enclosing_range(mut self, range: Span) -> Self {
        self.enclosing_range = Some(range);
        self
    }

    pub fn span(&self) -> Span {
        self.location.span
    }
}

/// The raw type names recorded for an identifier.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdentifierTypes {
    types: IndexSet<SmolStr, FxBuildHasher>,
}

impl IdentifierTypes {
    pub fn new<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        Self {
            types: types.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn contains(&self, ty: &str) -> bool {
        self.types.contains(ty)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SmolStr> {
        self.types.iter()
    }

    pub fn insert(&mut self, ty: impl Into<SmolStr>) -> bool {
        self.types.insert(ty.into())
    }

    /// Add every type of `other`
    pub fn extend(&mut self, other: &IdentifierTypes) {
        self.types.extend(other.types.iter().cloned());
    }

    /// Whether `asserted` may be used where these types are recorded.
    ///
    /// Nothing recorded accepts anything; otherwise every asserted type must
    /// be recorded.
    pub fn is_compatible_with_all_of(&self, asserted: &IdentifierTypes) -> bool {
        self.types.is_empty() || asserted.types.is_subset(&self.types)
    }
}

impl fmt::Display for IdentifierTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, ty) in self.types.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            f.write_str(ty)?;
        }
        Ok(())
    }
}

impl<S: Into<SmolStr>> FromIterator<S> for IdentifierTypes {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// All sites of one name within a parse.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identifier {
    pub name: SmolStr,
    /// Every occurrence, in order of appearance
    pub references: Vector<Reference>,
    pub types: IdentifierTypes,
    pub kind: Option<CompletionKind>,
    pub declaration: Option<Reference>,
    pub definition: Option<Reference>,
    pub implementation: Option<Reference>,
}

impl Identifier {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            references: Vector::new(),
            types: IdentifierTypes::default(),
            kind: None,
            declaration: None,
            definition: None,
            implementation: None,
        }
    }

    /// The declaration, definition and implementation sites that are set
    pub fn sites(&self) -> impl Iterator<Item = &Reference> {
        [&self.declaration, &self.definition, &self.implementation]
            .into_iter()
            .flatten()
    }

    /// Whether any site or reference of this identifier in `uri` covers `position`
    pub fn is_at(&self, uri: &str, position: Position) -> bool {
        self.references
            .iter()
            .chain(self.sites())
            .any(|site| site.location.contains(uri, position))
    }
}
