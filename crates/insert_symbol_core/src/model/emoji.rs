//! Emoji catalog rows and skin-tone variants.
//!
//! # Responsibility
//! - Define the raw catalog row shape loaded from the emoji dataset.
//! - Resolve a row into the concrete glyph for one skin tone.
//!
//! # Invariants
//! - `aliases` is non-empty for every row accepted by the catalog.
//! - Rows without skin-tone support resolve to their base glyph at every tone.
//! - `has_markdown_representation` does not depend on the tone.

use serde::{Deserialize, Serialize};

/// Variation selector that forces emoji presentation (`U+FE0F`).
const VARIATION_SELECTOR_16: char = '\u{FE0F}';

/// User-selectable skin tone for emoji that support Fitzpatrick modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkinTone {
    /// No preference was ever recorded.
    #[default]
    #[serde(alias = "none")]
    Unset,
    /// Explicit choice of the unmodified (yellow) glyph.
    Default,
    Light,
    MediumLight,
    Medium,
    MediumDark,
    Dark,
}

impl SkinTone {
    /// Every tone in preference-menu order.
    pub const ALL: [SkinTone; 7] = [
        Self::Unset,
        Self::Default,
        Self::Light,
        Self::MediumLight,
        Self::Medium,
        Self::MediumDark,
        Self::Dark,
    ];

    /// Stable integer code used by preference stores.
    ///
    /// `Unset` is `-1`, `Default` is `0`, the remaining tones use their
    /// modifier code point (`0x1F3FB..=0x1F3FF`).
    pub fn code(self) -> i32 {
        match self {
            Self::Unset => -1,
            Self::Default => 0,
            Self::Light => 0x1F3FB,
            Self::MediumLight => 0x1F3FC,
            Self::Medium => 0x1F3FD,
            Self::MediumDark => 0x1F3FE,
            Self::Dark => 0x1F3FF,
        }
    }

    /// Parses a stored integer code. Returns `None` for unknown codes.
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|tone| tone.code() == code)
    }

    /// Fitzpatrick modifier appended for this tone, if any.
    pub fn modifier(self) -> Option<char> {
        match self {
            Self::Unset | Self::Default => None,
            other => char::from_u32(other.code() as u32),
        }
    }
}

/// Raw emoji row as stored in the catalog dataset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmojiRecord {
    /// Canonical base glyph without any skin-tone modifier.
    pub emoji: String,
    /// Ordered alias list. `aliases[0]` is the canonical markdown name.
    pub aliases: Vec<String>,
    /// Single category label; must be declared by the catalog.
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Whether Fitzpatrick modifiers apply to this glyph.
    #[serde(default)]
    pub skin_tones: bool,
    /// Whether `:alias:` is a valid textual form for this glyph.
    #[serde(default = "default_markdown")]
    pub markdown: bool,
}

fn default_markdown() -> bool {
    true
}

impl EmojiRecord {
    /// Returns the glyph to display and insert for `tone`.
    pub fn glyph(&self, tone: SkinTone) -> String {
        match tone.modifier() {
            Some(modifier) if self.skin_tones => apply_modifier(&self.emoji, modifier),
            _ => self.emoji.clone(),
        }
    }

    /// Resolves this row at `tone`.
    pub fn resolve(&self, tone: SkinTone) -> Emoji {
        Emoji {
            emoji: self.glyph(tone),
            aliases: self.aliases.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            has_markdown_representation: self.markdown,
        }
    }
}

/// Emoji row resolved at one skin tone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emoji {
    /// Glyph with the skin-tone modifier applied when supported.
    pub emoji: String,
    pub aliases: Vec<String>,
    pub category: String,
    pub description: Option<String>,
    pub has_markdown_representation: bool,
}

impl Emoji {
    /// Canonical alias (`aliases[0]`), if any.
    pub fn primary_alias(&self) -> Option<&str> {
        self.aliases.first().map(String::as_str)
    }
}

// The modifier follows the first scalar; a trailing VS16 on that scalar is
// dropped because the modifier already implies emoji presentation.
fn apply_modifier(base: &str, modifier: char) -> String {
    let mut chars = base.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let rest = chars.as_str();
    let rest = rest.strip_prefix(VARIATION_SELECTOR_16).unwrap_or(rest);

    let mut glyph = String::with_capacity(base.len() + modifier.len_utf8());
    glyph.push(first);
    glyph.push(modifier);
    glyph.push_str(rest);
    glyph
}
