//! Static symbol catalogs.
//!
//! # Responsibility
//! - Load and validate the emoji dataset exactly once per process.
//! - Provide read-only lookup by category, glyph and alias.
//!
//! # Invariants
//! - Catalogs are immutable after construction.
//! - Every row belongs to exactly one declared category.
//! - A glyph resolves to at most one row across all skin tones.
//! - A catalog that fails validation is never partially exposed.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod emoji_catalog;

pub use emoji_catalog::EmojiCatalog;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog load/validation error.
#[derive(Debug)]
pub enum CatalogError {
    /// Dataset is not valid JSON or does not match the row schema.
    Parse(serde_json::Error),
    DuplicateCategory(String),
    UnknownCategory {
        emoji: String,
        category: String,
    },
    EmptyAliases(String),
    InvalidAlias {
        emoji: String,
        alias: String,
    },
    DuplicateEmoji(String),
    /// A glyph `emoji` produces at some skin tone is already produced by
    /// the row `other`.
    ConflictingGlyph {
        emoji: String,
        glyph: String,
        other: String,
    },
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid emoji dataset: {err}"),
            Self::DuplicateCategory(value) => write!(f, "category declared twice: {value}"),
            Self::UnknownCategory { emoji, category } => {
                write!(f, "emoji {emoji} uses undeclared category `{category}`")
            }
            Self::EmptyAliases(emoji) => write!(f, "emoji {emoji} has no aliases"),
            Self::InvalidAlias { emoji, alias } => {
                write!(f, "emoji {emoji} has invalid alias `{alias}`")
            }
            Self::DuplicateEmoji(emoji) => write!(f, "emoji listed twice: {emoji}"),
            Self::ConflictingGlyph {
                emoji,
                glyph,
                other,
            } => write!(
                f,
                "emoji {emoji} produces glyph {glyph} already owned by {other}"
            ),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}
