//! Completion categories and items.

use std::fmt;
use std::str::FromStr;

use smol_str::SmolStr;

use crate::grammar::GrammarError;

/// Category of a completion item or identifier.
///
/// Mirrors the LSP `CompletionItemKind` set; grammars name these in
/// `identifierKind set <kind>` actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompletionKind {
    Text,
    Method,
    Function,
    Constructor,
    Field,
    Variable,
    Class,
    Interface,
    Module,
    Property,
    Unit,
    Value,
    Enum,
    Keyword,
    Snippet,
    Color,
    File,
    Reference,
    Folder,
    EnumMember,
    Constant,
    Struct,
    Event,
    Operator,
    TypeParameter,
}

impl CompletionKind {
    pub const ALL: [CompletionKind; 25] = [
        Self::Text,
        Self::Method,
        Self::Function,
        Self::Constructor,
        Self::Field,
        Self::Variable,
        Self::Class,
        Self::Interface,
        Self::Module,
        Self::Property,
        Self::Unit,
        Self::Value,
        Self::Enum,
        Self::Keyword,
        Self::Snippet,
        Self::Color,
        Self::File,
        Self::Reference,
        Self::Folder,
        Self::EnumMember,
        Self::Constant,
        Self::Struct,
        Self::Event,
        Self::Operator,
        Self::TypeParameter,
    ];

    /// Convert to LSP completion item kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            CompletionKind::Text => 1,
            CompletionKind::Method => 2,
            CompletionKind::Function => 3,
            CompletionKind::Constructor => 4,
            CompletionKind::Field => 5,
            CompletionKind::Variable => 6,
            CompletionKind::Class => 7,
            CompletionKind::Interface => 8,
            CompletionKind::Module => 9,
            CompletionKind::Property => 10,
            CompletionKind::Unit => 11,
            CompletionKind::Value => 12,
            CompletionKind::Enum => 13,
            CompletionKind::Keyword => 14,
            CompletionKind::Snippet => 15,
            CompletionKind::Color => 16,
            CompletionKind::File => 17,
            CompletionKind::Reference => 18,
            CompletionKind::Folder => 19,
            CompletionKind::EnumMember => 20,
            CompletionKind::Constant => 21,
            CompletionKind::Struct => 22,
            CompletionKind::Event => 23,
            CompletionKind::Operator => 24,
            CompletionKind::TypeParameter => 25,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompletionKind::Text => "Text",
            CompletionKind::Method => "Method",
            CompletionKind::Function => "Function",
            CompletionKind::Constructor => "Constructor",
            CompletionKind::Field => "Field",
            CompletionKind::Variable => "Variable",
            CompletionKind::Class => "Class",
            CompletionKind::Interface => "Interface",
            CompletionKind::Module => "Module",
            CompletionKind::Property => "Property",
            CompletionKind::Unit => "Unit",
            CompletionKind::Value => "Value",
            CompletionKind::Enum => "Enum",
            CompletionKind::Keyword => "Keyword",
            CompletionKind::Snippet => "Snippet",
            CompletionKind::Color => "Color",
            CompletionKind::File => "File",
            CompletionKind::Reference => "Reference",
            CompletionKind::Folder => "Folder",
            CompletionKind::EnumMember => "EnumMember",
            CompletionKind::Constant => "Constant",
            CompletionKind::Struct => "Struct",
            CompletionKind::Event => "Event",
            CompletionKind::Operator => "Operator",
            CompletionKind::TypeParameter => "TypeParameter",
        }
    }
}

impl FromStr for CompletionKind {
    type Err = GrammarError;

    /// Parse a kind name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| GrammarError::UnknownKind(s.into()))
    }
}

impl fmt::Display for CompletionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A completion suggestion.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompletionItem {
    /// The text to insert.
    pub label: SmolStr,
    pub kind: CompletionKind,
    /// Detail text (shown after label).
    pub detail: Option<SmolStr>,
    /// Sort priority (lower = higher priority).
    pub sort_priority: u32,
}

impl CompletionItem {
    pub fn new(label: impl Into<SmolStr>, kind: CompletionKind) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
            sort_priority: 100,
        }
    }

    /// A keyword suggestion
    pub fn keyword(label: impl Into<SmolStr>) -> Self {
        Self::new(label, CompletionKind::Keyword)
    }

    pub fn with_detail(mut self, detail: impl Into<SmolStr>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_priority(mut self, priority: u32) -> Self {
        self.sort_priority = priority;
        self
    }
}
