//! Symbol catalog and insertion engine for editor symbol pickers.
//! This crate owns catalog, filtering, skin-tone and insertion invariants;
//! rendering the picker and applying edits stay with the host editor.

pub mod catalog;
pub mod document;
pub mod insert;
pub mod logging;
pub mod model;
pub mod prefs;
pub mod provider;

pub use catalog::{CatalogError, CatalogResult, EmojiCatalog};
pub use document::{DocumentEdit, DocumentState, Selection, TextMark};
pub use insert::{best_alias, emoji_insertion, plain_text_insertion};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::emoji::{Emoji, EmojiRecord, SkinTone};
pub use model::symbol::Symbol;
pub use prefs::{
    FixedSkinTone, PickerPrefs, PreferenceError, PrefsError, SharedSkinTone, SkinTonePreference,
};
pub use provider::emoji::{symbol_for_emoji, EmojiSymbolDataProvider, EMOJI_PROVIDER_ID};
pub use provider::registry::{ProviderRegistryError, SymbolProviderRegistry};
pub use provider::special_chars::{
    SpecialCharacterSymbolDataProvider, SPECIAL_CHARACTERS_PROVIDER_ID,
};
pub use provider::{SymbolDataProvider, CATEGORY_ALL};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
