//! Emoji symbol provider.
//!
//! # Responsibility
//! - Project catalog rows into picker symbols at the preferred skin tone.
//! - Turn a picked emoji back into a styled, hint-carrying edit.
//!
//! # Invariants
//! - The skin tone is read from the preference collaborator on every call
//!   that needs it; the provider keeps no tone state.
//! - A failed preference read falls back to `SkinTone::Default`.

use crate::catalog::EmojiCatalog;
use crate::document::{DocumentEdit, DocumentState};
use crate::insert::emoji_insertion;
use crate::model::emoji::{Emoji, SkinTone};
use crate::model::symbol::Symbol;
use crate::prefs::SkinTonePreference;
use crate::provider::{is_all_group, SymbolDataProvider, CATEGORY_ALL};
use log::{debug, warn};
use std::sync::Arc;

/// Registry id of the emoji provider.
pub const EMOJI_PROVIDER_ID: &str = "emoji";

const FILTER_PLACEHOLDER_HINT: &str = "emoji name";

/// [`SymbolDataProvider`] over an [`EmojiCatalog`].
pub struct EmojiSymbolDataProvider<P: SkinTonePreference> {
    catalog: Arc<EmojiCatalog>,
    prefs: P,
}

impl<P: SkinTonePreference> EmojiSymbolDataProvider<P> {
    /// Creates a provider over the process-wide builtin catalog.
    pub fn new(prefs: P) -> Self {
        Self::with_catalog(EmojiCatalog::builtin(), prefs)
    }

    /// Creates a provider over a caller-supplied catalog.
    pub fn with_catalog(catalog: Arc<EmojiCatalog>, prefs: P) -> Self {
        Self { catalog, prefs }
    }

    pub fn catalog(&self) -> &EmojiCatalog {
        &self.catalog
    }

    /// Reads the active skin tone.
    pub fn skin_tone(&self) -> SkinTone {
        match self.prefs.emoji_skin_tone() {
            Ok(tone) => tone,
            Err(err) => {
                warn!(
                    "event=skin_tone_read module=emoji_provider status=fallback error={}",
                    err
                );
                SkinTone::Default
            }
        }
    }
}

impl<P: SkinTonePreference> SymbolDataProvider for EmojiSymbolDataProvider<P> {
    fn provider_id(&self) -> &str {
        EMOJI_PROVIDER_ID
    }

    fn filter_placeholder_hint(&self) -> &str {
        FILTER_PLACEHOLDER_HINT
    }

    fn symbol_group_names(&self) -> Vec<String> {
        std::iter::once(CATEGORY_ALL.to_string())
            .chain(self.catalog.categories().iter().cloned())
            .collect()
    }

    fn get_symbols(&self, group_name: Option<&str>) -> Vec<Symbol> {
        let tone = self.skin_tone();
        let emojis = match group_name {
            Some(category) if !is_all_group(group_name) => {
                self.catalog.emojis_in_category(category, tone)
            }
            _ => self.catalog.emojis(tone),
        };
        debug!(
            "event=symbols_list module=emoji_provider group={} tone={:?} count={}",
            group_name.unwrap_or(CATEGORY_ALL),
            tone,
            emojis.len()
        );
        emojis.iter().map(symbol_for_emoji).collect()
    }

    fn insert_symbol_transaction(
        &self,
        symbol: &Symbol,
        search_term: &str,
        state: &dyn DocumentState,
    ) -> DocumentEdit {
        let resolved = self.catalog.find_by_glyph(&symbol.value, self.skin_tone());
        let edit = emoji_insertion(resolved.as_ref(), &symbol.value, search_term, state);
        debug!(
            "event=symbol_insert module=emoji_provider arm={} search_term_len={}",
            if edit.mark().is_some() { "styled" } else { "plain" },
            search_term.chars().count()
        );
        edit
    }
}

/// Projects a resolved emoji into a picker symbol.
///
/// The name is `:alias:` when a markdown form exists, the glyph otherwise.
pub fn symbol_for_emoji(emoji: &Emoji) -> Symbol {
    let name = match (emoji.has_markdown_representation, emoji.primary_alias()) {
        (true, Some(alias)) => format!(":{alias}:"),
        _ => emoji.emoji.clone(),
    };
    Symbol {
        name,
        value: emoji.emoji.clone(),
        aliases: emoji.aliases.clone(),
        description: emoji.description.clone(),
    }
}
