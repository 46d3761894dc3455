//! Catalog-agnostic symbol projection.

use serde::{Deserialize, Serialize};

/// One browsable, insertable entry surfaced to the picker UI.
///
/// Symbols are rebuilt from catalog rows on every listing call; holding one
/// does not pin any catalog state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    /// Display label, e.g. `:smile:` or the raw glyph.
    pub name: String,
    /// Literal text inserted into the document.
    pub value: String,
    /// Alternate names in declared order. `aliases[0]` is canonical.
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Optional human-readable description.
    #[serde(default)]
    pub description: Option<String>,
}

impl Symbol {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            aliases: Vec::new(),
            description: None,
        }
    }

    /// Returns whether `query` is a raw substring of the name or any alias.
    ///
    /// No case or whitespace normalization is applied. The empty query
    /// matches every symbol.
    pub fn matches(&self, query: &str) -> bool {
        self.name.contains(query) || self.aliases.iter().any(|alias| alias.contains(query))
    }
}
