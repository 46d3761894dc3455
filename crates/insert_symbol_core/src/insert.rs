//! Insertion edit builders.
//!
//! # Responsibility
//! - Pick the alias that best reflects what the user typed.
//! - Build exactly one `DocumentEdit` per chosen symbol.
//!
//! # Invariants
//! - Builders are pure and never fail; unresolvable input degrades to a
//!   plain-text edit of the literal value.

use crate::document::{DocumentEdit, DocumentState, TextMark};
use crate::model::emoji::Emoji;

/// Returns the first alias containing `search_term`, else `aliases[0]`.
///
/// Returns `None` only for an empty alias list.
pub fn best_alias<'a>(aliases: &'a [String], search_term: &str) -> Option<&'a str> {
    aliases
        .iter()
        .find(|alias| alias.contains(search_term))
        .or_else(|| aliases.first())
        .map(String::as_str)
}

/// Builds the edit for an emoji choice.
///
/// `resolved` is the catalog row recovered from `value` at the current skin
/// tone. Rows with a markdown form replace the selection with the glyph
/// carrying an emoji mark; anything else inserts `value` verbatim.
pub fn emoji_insertion(
    resolved: Option<&Emoji>,
    value: &str,
    search_term: &str,
    state: &dyn DocumentState,
) -> DocumentEdit {
    let styled = resolved
        .filter(|emoji| emoji.has_markdown_representation)
        .and_then(|emoji| {
            best_alias(&emoji.aliases, search_term).map(|alias| (emoji.emoji.as_str(), alias))
        });

    match styled {
        Some((glyph, alias)) => DocumentEdit::ReplaceSelectionWithStyledText {
            selection: state.selection(),
            text: glyph.to_string(),
            mark: TextMark::Emoji {
                emojihint: alias.to_string(),
            },
        },
        None => plain_text_insertion(value, state),
    }
}

/// Builds an unstyled insertion of `value` at the current selection.
pub fn plain_text_insertion(value: &str, state: &dyn DocumentState) -> DocumentEdit {
    DocumentEdit::InsertText {
        selection: state.selection(),
        text: value.to_string(),
    }
}
