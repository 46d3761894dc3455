//! Emoji catalog backed by the embedded dataset.

use crate::catalog::{CatalogError, CatalogResult};
use crate::model::emoji::{Emoji, EmojiRecord, SkinTone};
use log::{error, info};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

const BUILTIN_DATASET: &str = include_str!("data/emojis.json");

static ALIAS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9_+\-]+$").expect("valid alias regex"));
static BUILTIN_CATALOG: Lazy<Arc<EmojiCatalog>> = Lazy::new(load_builtin);

#[derive(Deserialize)]
struct CatalogDocument {
    categories: Vec<String>,
    emojis: Vec<EmojiRecord>,
}

/// Immutable emoji table with a declared category order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmojiCatalog {
    categories: Vec<String>,
    records: Vec<EmojiRecord>,
}

impl EmojiCatalog {
    /// Builds a catalog after validating every row.
    ///
    /// # Errors
    /// - Duplicate category declarations.
    /// - Rows with no aliases, malformed aliases or undeclared categories.
    /// - The same base glyph listed twice.
    /// - A glyph produced at any skin tone that another row also produces.
    pub fn new(categories: Vec<String>, records: Vec<EmojiRecord>) -> CatalogResult<Self> {
        let mut declared = BTreeSet::new();
        for category in &categories {
            if !declared.insert(category.as_str()) {
                return Err(CatalogError::DuplicateCategory(category.clone()));
            }
        }

        // glyph -> base glyph of the row producing it
        let mut glyphs: BTreeMap<String, &str> = BTreeMap::new();
        for record in &records {
            if record.aliases.is_empty() {
                return Err(CatalogError::EmptyAliases(record.emoji.clone()));
            }
            if let Some(alias) = record.aliases.iter().find(|alias| !ALIAS_RE.is_match(alias)) {
                return Err(CatalogError::InvalidAlias {
                    emoji: record.emoji.clone(),
                    alias: alias.clone(),
                });
            }
            if !declared.contains(record.category.as_str()) {
                return Err(CatalogError::UnknownCategory {
                    emoji: record.emoji.clone(),
                    category: record.category.clone(),
                });
            }
            let produced: BTreeSet<String> = SkinTone::ALL
                .into_iter()
                .map(|tone| record.glyph(tone))
                .collect();
            for glyph in produced {
                if let Some(other) = glyphs.get(&glyph) {
                    if *other == record.emoji {
                        return Err(CatalogError::DuplicateEmoji(record.emoji.clone()));
                    }
                    return Err(CatalogError::ConflictingGlyph {
                        emoji: record.emoji.clone(),
                        glyph,
                        other: (*other).to_string(),
                    });
                }
                glyphs.insert(glyph, record.emoji.as_str());
            }
        }

        Ok(Self {
            categories,
            records,
        })
    }

    /// Parses `{ "categories": [...], "emojis": [...] }` and validates it.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::new(document.categories, document.emojis)
    }

    /// Returns the process-wide catalog built from the embedded dataset.
    ///
    /// The dataset is parsed on first use. A dataset that fails validation is
    /// logged and replaced by an empty catalog so pickers still open.
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN_CATALOG)
    }

    /// Declared categories in catalog order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Raw rows in catalog order.
    pub fn records(&self) -> &[EmojiRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Resolves every row at `tone`, in catalog order.
    pub fn emojis(&self, tone: SkinTone) -> Vec<Emoji> {
        self.records
            .iter()
            .map(|record| record.resolve(tone))
            .collect()
    }

    /// Resolves rows whose category equals `category`. Unknown categories
    /// yield an empty list.
    pub fn emojis_in_category(&self, category: &str, tone: SkinTone) -> Vec<Emoji> {
        self.records
            .iter()
            .filter(|record| record.category == category)
            .map(|record| record.resolve(tone))
            .collect()
    }

    /// Finds the row whose glyph at `tone` equals `glyph`.
    pub fn find_by_glyph(&self, glyph: &str, tone: SkinTone) -> Option<Emoji> {
        self.records
            .iter()
            .find(|record| record.glyph(tone) == glyph)
            .map(|record| record.resolve(tone))
    }

    /// Finds the row declaring `alias` (exact match) and resolves it at `tone`.
    pub fn find_by_alias(&self, alias: &str, tone: SkinTone) -> Option<Emoji> {
        self.records
            .iter()
            .find(|record| record.aliases.iter().any(|value| value == alias))
            .map(|record| record.resolve(tone))
    }
}

fn load_builtin() -> Arc<EmojiCatalog> {
    match EmojiCatalog::from_json_str(BUILTIN_DATASET) {
        Ok(catalog) => {
            info!(
                "event=catalog_load module=catalog status=ok emojis={} categories={}",
                catalog.len(),
                catalog.categories().len()
            );
            Arc::new(catalog)
        }
        Err(err) => {
            error!(
                "event=catalog_load module=catalog status=error error={}",
                err
            );
            Arc::new(EmojiCatalog::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{EmojiCatalog, BUILTIN_DATASET};
    use crate::catalog::CatalogError;
    use crate::model::emoji::{EmojiRecord, SkinTone};

    fn row(emoji: &str, alias: &str, category: &str) -> EmojiRecord {
        EmojiRecord {
            emoji: emoji.to_string(),
            aliases: vec![alias.to_string()],
            category: category.to_string(),
            description: None,
            skin_tones: false,
            markdown: true,
        }
    }

    #[test]
    fn embedded_dataset_is_valid() {
        let catalog = EmojiCatalog::from_json_str(BUILTIN_DATASET).expect("embedded dataset");
        assert!(!catalog.is_empty());
        assert_eq!(catalog.categories()[0], "People");
    }

    #[test]
    fn builtin_is_shared() {
        let first = EmojiCatalog::builtin();
        let second = EmojiCatalog::builtin();
        assert!(std::sync::Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn rejects_duplicate_category() {
        let err = EmojiCatalog::new(vec!["People".to_string(), "People".to_string()], vec![])
            .expect_err("duplicate category must fail");
        assert!(matches!(err, CatalogError::DuplicateCategory(_)));
    }

    #[test]
    fn rejects_undeclared_category() {
        let err = EmojiCatalog::new(vec!["People".to_string()], vec![row("🐶", "dog", "Nature")])
            .expect_err("undeclared category must fail");
        assert!(matches!(err, CatalogError::UnknownCategory { .. }));
    }

    #[test]
    fn rejects_empty_and_malformed_aliases() {
        let mut empty = row("🐶", "dog", "Nature");
        empty.aliases.clear();
        let err = EmojiCatalog::new(vec!["Nature".to_string()], vec![empty])
            .expect_err("empty aliases must fail");
        assert!(matches!(err, CatalogError::EmptyAliases(_)));

        let err = EmojiCatalog::new(
            vec!["Nature".to_string()],
            vec![row("🐶", "Dog Face", "Nature")],
        )
        .expect_err("malformed alias must fail");
        assert!(matches!(err, CatalogError::InvalidAlias { .. }));
    }

    #[test]
    fn rejects_duplicate_glyph() {
        let err = EmojiCatalog::new(
            vec!["Nature".to_string()],
            vec![row("🐶", "dog", "Nature"), row("🐶", "puppy", "Nature")],
        )
        .expect_err("duplicate glyph must fail");
        assert!(matches!(err, CatalogError::DuplicateEmoji(_)));
    }

    #[test]
    fn rejects_toned_glyph_owned_by_another_row() {
        let mut wave = row("👋", "wave", "People");
        wave.skin_tones = true;
        let toned = row("👋🏽", "wave_medium", "People");

        let err = EmojiCatalog::new(
            vec!["People".to_string()],
            vec![wave.clone(), toned.clone()],
        )
        .expect_err("toned glyph clash must fail");
        match err {
            CatalogError::ConflictingGlyph { emoji, glyph, other } => {
                assert_eq!(emoji, "👋🏽");
                assert_eq!(glyph, "👋🏽");
                assert_eq!(other, "👋");
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = EmojiCatalog::new(vec!["People".to_string()], vec![toned, wave])
            .expect_err("clash is found in either row order");
        assert!(matches!(err, CatalogError::ConflictingGlyph { .. }));
    }

    #[test]
    fn reports_parse_errors() {
        let err = EmojiCatalog::from_json_str("{").expect_err("broken json must fail");
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn unknown_category_lists_nothing() {
        let catalog = EmojiCatalog::new(
            vec!["Nature".to_string()],
            vec![row("🐶", "dog", "Nature")],
        )
        .expect("valid catalog");
        assert!(catalog
            .emojis_in_category("Vehicles", SkinTone::Default)
            .is_empty());
    }

    #[test]
    fn finds_by_alias_and_glyph() {
        let catalog = EmojiCatalog::new(
            vec!["Nature".to_string()],
            vec![row("🐶", "dog", "Nature"), row("🐱", "cat", "Nature")],
        )
        .expect("valid catalog");
        let cat = catalog
            .find_by_alias("cat", SkinTone::Unset)
            .expect("alias lookup");
        assert_eq!(cat.emoji, "🐱");
        let dog = catalog
            .find_by_glyph("🐶", SkinTone::Unset)
            .expect("glyph lookup");
        assert_eq!(dog.primary_alias(), Some("dog"));
        assert!(catalog.find_by_alias("ca", SkinTone::Unset).is_none());
    }
}
