//! Symbol data provider contract and implementations.
//!
//! # Responsibility
//! - Define the capability trait every picker catalog implements.
//! - Host the emoji and special-character providers plus the id registry.
//!
//! # Invariants
//! - `symbol_group_names()` always starts with [`CATEGORY_ALL`].
//! - Listing and filtering return fresh vectors and never reorder input.
//! - `insert_symbol_transaction` always returns exactly one edit.

use crate::document::{DocumentEdit, DocumentState};
use crate::model::symbol::Symbol;

pub mod emoji;
pub mod registry;
pub mod special_chars;

/// Pseudo-category listing every symbol of a catalog.
pub const CATEGORY_ALL: &str = "All";

/// Browsable, filterable, insertable symbol set consumed by the picker UI.
pub trait SymbolDataProvider: Send + Sync {
    /// Stable registry id (`[a-z0-9_-]+`).
    fn provider_id(&self) -> &str;

    /// Placeholder text for the picker search box.
    fn filter_placeholder_hint(&self) -> &str;

    /// `"All"` followed by the catalog categories in declared order.
    fn symbol_group_names(&self) -> Vec<String>;

    /// Lists symbols of `group_name`; `None`, `""` and `"All"` list everything.
    /// Unknown groups yield an empty list.
    fn get_symbols(&self, group_name: Option<&str>) -> Vec<Symbol>;

    /// Keeps the symbols matching `query`, preserving input order.
    fn filter_symbols(&self, query: &str, symbols: &[Symbol]) -> Vec<Symbol> {
        filter_by_name_or_alias(query, symbols)
    }

    /// Builds the edit inserting `symbol` at the current selection.
    fn insert_symbol_transaction(
        &self,
        symbol: &Symbol,
        search_term: &str,
        state: &dyn DocumentState,
    ) -> DocumentEdit;
}

/// Returns whether `group_name` selects the whole catalog. A missing or empty
/// name counts as [`CATEGORY_ALL`].
pub fn is_all_group(group_name: Option<&str>) -> bool {
    matches!(group_name, None | Some("") | Some(CATEGORY_ALL))
}

/// Stable raw-substring filter over symbol name and aliases.
pub fn filter_by_name_or_alias(query: &str, symbols: &[Symbol]) -> Vec<Symbol> {
    symbols
        .iter()
        .filter(|symbol| symbol.matches(query))
        .cloned()
        .collect()
}
