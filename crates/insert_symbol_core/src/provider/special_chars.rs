//! Special character provider.
//!
//! Symbols are named by their uppercase Unicode character name and always
//! insert as plain text.

use crate::document::{DocumentEdit, DocumentState};
use crate::insert::plain_text_insertion;
use crate::model::symbol::Symbol;
use crate::provider::{is_all_group, SymbolDataProvider, CATEGORY_ALL};
use log::debug;

/// Registry id of the special character provider.
pub const SPECIAL_CHARACTERS_PROVIDER_ID: &str = "special_characters";

const FILTER_PLACEHOLDER_HINT: &str = "keyword or codepoint";

const GROUPS: &[&str] = &[
    "Arrows",
    "Currency",
    "Greek Letters",
    "Mathematical Operators",
    "Punctuation",
];

struct SpecialCharacter {
    group: &'static str,
    ch: char,
    name: &'static str,
}

const fn entry(group: &'static str, ch: char, name: &'static str) -> SpecialCharacter {
    SpecialCharacter { group, ch, name }
}

const SPECIAL_CHARACTERS: &[SpecialCharacter] = &[
    entry("Arrows", '←', "LEFTWARDS ARROW"),
    entry("Arrows", '↑', "UPWARDS ARROW"),
    entry("Arrows", '→', "RIGHTWARDS ARROW"),
    entry("Arrows", '↓', "DOWNWARDS ARROW"),
    entry("Arrows", '↔', "LEFT RIGHT ARROW"),
    entry("Arrows", '⇐', "LEFTWARDS DOUBLE ARROW"),
    entry("Arrows", '⇒', "RIGHTWARDS DOUBLE ARROW"),
    entry("Arrows", '⇔', "LEFT RIGHT DOUBLE ARROW"),
    entry("Currency", '¢', "CENT SIGN"),
    entry("Currency", '£', "POUND SIGN"),
    entry("Currency", '¥', "YEN SIGN"),
    entry("Currency", '€', "EURO SIGN"),
    entry("Currency", '₹', "INDIAN RUPEE SIGN"),
    entry("Currency", '₿', "BITCOIN SIGN"),
    entry("Greek Letters", 'α', "GREEK SMALL LETTER ALPHA"),
    entry("Greek Letters", 'β', "GREEK SMALL LETTER BETA"),
    entry("Greek Letters", 'γ', "GREEK SMALL LETTER GAMMA"),
    entry("Greek Letters", 'δ', "GREEK SMALL LETTER DELTA"),
    entry("Greek Letters", 'λ', "GREEK SMALL LETTER LAMDA"),
    entry("Greek Letters", 'μ', "GREEK SMALL LETTER MU"),
    entry("Greek Letters", 'π', "GREEK SMALL LETTER PI"),
    entry("Greek Letters", 'σ', "GREEK SMALL LETTER SIGMA"),
    entry("Greek Letters", 'Δ', "GREEK CAPITAL LETTER DELTA"),
    entry("Greek Letters", 'Ω', "GREEK CAPITAL LETTER OMEGA"),
    entry("Mathematical Operators", '±', "PLUS-MINUS SIGN"),
    entry("Mathematical Operators", '×', "MULTIPLICATION SIGN"),
    entry("Mathematical Operators", '÷', "DIVISION SIGN"),
    entry("Mathematical Operators", '∞', "INFINITY"),
    entry("Mathematical Operators", '≈', "ALMOST EQUAL TO"),
    entry("Mathematical Operators", '≠', "NOT EQUAL TO"),
    entry("Mathematical Operators", '≤', "LESS-THAN OR EQUAL TO"),
    entry("Mathematical Operators", '≥', "GREATER-THAN OR EQUAL TO"),
    entry("Mathematical Operators", '∑', "N-ARY SUMMATION"),
    entry("Mathematical Operators", '√', "SQUARE ROOT"),
    entry("Punctuation", '–', "EN DASH"),
    entry("Punctuation", '—', "EM DASH"),
    entry("Punctuation", '…', "HORIZONTAL ELLIPSIS"),
    entry("Punctuation", '§', "SECTION SIGN"),
    entry("Punctuation", '¶', "PILCROW SIGN"),
    entry("Punctuation", '†', "DAGGER"),
    entry("Punctuation", '‰', "PER MILLE SIGN"),
    entry("Punctuation", '«', "LEFT-POINTING DOUBLE ANGLE QUOTATION MARK"),
    entry("Punctuation", '»', "RIGHT-POINTING DOUBLE ANGLE QUOTATION MARK"),
];

/// [`SymbolDataProvider`] over a fixed table of special characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpecialCharacterSymbolDataProvider;

impl SpecialCharacterSymbolDataProvider {
    pub fn new() -> Self {
        Self
    }
}

impl SymbolDataProvider for SpecialCharacterSymbolDataProvider {
    fn provider_id(&self) -> &str {
        SPECIAL_CHARACTERS_PROVIDER_ID
    }

    fn filter_placeholder_hint(&self) -> &str {
        FILTER_PLACEHOLDER_HINT
    }

    fn symbol_group_names(&self) -> Vec<String> {
        std::iter::once(CATEGORY_ALL)
            .chain(GROUPS.iter().copied())
            .map(str::to_string)
            .collect()
    }

    fn get_symbols(&self, group_name: Option<&str>) -> Vec<Symbol> {
        let all = is_all_group(group_name);
        SPECIAL_CHARACTERS
            .iter()
            .filter(|entry| all || group_name == Some(entry.group))
            .map(symbol_for_character)
            .collect()
    }

    /// Names are uppercase, so the query is uppercased before the substring
    /// test. `U+XXXX` queries also match the code point description.
    fn filter_symbols(&self, query: &str, symbols: &[Symbol]) -> Vec<Symbol> {
        let needle = query.to_uppercase();
        let by_codepoint = needle.starts_with("U+");
        symbols
            .iter()
            .filter(|symbol| {
                symbol.matches(&needle)
                    || (by_codepoint
                        && symbol
                            .description
                            .as_deref()
                            .is_some_and(|codepoint| codepoint.starts_with(&needle)))
            })
            .cloned()
            .collect()
    }

    fn insert_symbol_transaction(
        &self,
        symbol: &Symbol,
        search_term: &str,
        state: &dyn DocumentState,
    ) -> DocumentEdit {
        debug!(
            "event=symbol_insert module=special_chars_provider arm=plain search_term_len={}",
            search_term.chars().count()
        );
        plain_text_insertion(&symbol.value, state)
    }
}

fn symbol_for_character(entry: &SpecialCharacter) -> Symbol {
    Symbol {
        name: entry.name.to_string(),
        value: entry.ch.to_string(),
        aliases: Vec::new(),
        description: Some(format!("U+{:04X}", u32::from(entry.ch))),
    }
}

#[cfg(test)]
mod tests {
    use super::{SpecialCharacterSymbolDataProvider, GROUPS, SPECIAL_CHARACTERS};
    use crate::document::{DocumentEdit, Selection};
    use crate::provider::{SymbolDataProvider, CATEGORY_ALL};

    #[test]
    fn every_entry_uses_a_declared_group() {
        for entry in SPECIAL_CHARACTERS {
            assert!(GROUPS.contains(&entry.group), "{} has no group", entry.name);
        }
    }

    #[test]
    fn group_names_start_with_all() {
        let names = SpecialCharacterSymbolDataProvider::new().symbol_group_names();
        assert_eq!(names[0], CATEGORY_ALL);
        assert_eq!(names.len(), GROUPS.len() + 1);
    }

    #[test]
    fn lists_one_group() {
        let provider = SpecialCharacterSymbolDataProvider::new();
        let arrows = provider.get_symbols(Some("Arrows"));
        assert_eq!(arrows.len(), 8);
        assert_eq!(arrows[2].value, "→");
        assert_eq!(arrows[2].description.as_deref(), Some("U+2192"));
        assert!(provider.get_symbols(Some("Emoji")).is_empty());
    }

    #[test]
    fn filter_is_case_insensitive_on_names() {
        let provider = SpecialCharacterSymbolDataProvider::new();
        let all = provider.get_symbols(None);
        let hits = provider.filter_symbols("euro", &all);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].value, "€");
    }

    #[test]
    fn filter_matches_codepoints() {
        let provider = SpecialCharacterSymbolDataProvider::new();
        let all = provider.get_symbols(None);
        let hits = provider.filter_symbols("u+00a7", &all);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].value, "§");
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let provider = SpecialCharacterSymbolDataProvider::new();
        let all = provider.get_symbols(Some(CATEGORY_ALL));
        assert_eq!(provider.filter_symbols("", &all), all);
    }

    #[test]
    fn empty_group_name_lists_everything() {
        let provider = SpecialCharacterSymbolDataProvider::new();
        let all = provider.get_symbols(None);
        assert_eq!(all.len(), SPECIAL_CHARACTERS.len());
        assert_eq!(provider.get_symbols(Some("")), all);
    }

    #[test]
    fn inserts_plain_text() {
        let provider = SpecialCharacterSymbolDataProvider::new();
        let pi = provider
            .get_symbols(Some("Greek Letters"))
            .into_iter()
            .find(|symbol| symbol.value == "π")
            .expect("pi should be listed");
        let edit = provider.insert_symbol_transaction(&pi, "pi", &Selection::collapsed(4));
        assert_eq!(
            edit,
            DocumentEdit::InsertText {
                selection: Selection::collapsed(4),
                text: "π".to_string(),
            }
        );
    }
}
