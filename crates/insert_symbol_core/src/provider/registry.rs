//! In-process symbol provider registry.

use crate::prefs::SkinTonePreference;
use crate::provider::emoji::EmojiSymbolDataProvider;
use crate::provider::special_chars::SpecialCharacterSymbolDataProvider;
use crate::provider::SymbolDataProvider;
use log::{info, warn};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Provider registration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderRegistryError {
    InvalidProviderId(String),
    DuplicateProviderId(String),
}

impl Display for ProviderRegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidProviderId(value) => write!(f, "provider id is invalid: {value}"),
            Self::DuplicateProviderId(value) => {
                write!(f, "provider id already registered: {value}")
            }
        }
    }
}

impl Error for ProviderRegistryError {}

/// Symbol providers keyed by id, so one picker path can serve every catalog.
#[derive(Default)]
pub struct SymbolProviderRegistry {
    providers: BTreeMap<String, Arc<dyn SymbolDataProvider>>,
}

impl SymbolProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the emoji and special character providers.
    pub fn with_builtin_providers<P>(prefs: P) -> Self
    where
        P: SkinTonePreference + 'static,
    {
        let mut registry = Self::new();
        let builtins: [Arc<dyn SymbolDataProvider>; 2] = [
            Arc::new(EmojiSymbolDataProvider::new(prefs)),
            Arc::new(SpecialCharacterSymbolDataProvider::new()),
        ];
        for provider in builtins {
            if let Err(err) = registry.register(provider) {
                warn!(
                    "event=provider_register module=registry status=error error={}",
                    err
                );
            }
        }
        registry
    }

    /// Registers one provider under its trimmed `provider_id()`.
    pub fn register(
        &mut self,
        provider: Arc<dyn SymbolDataProvider>,
    ) -> Result<(), ProviderRegistryError> {
        let provider_id = provider.provider_id().trim().to_string();
        if !is_valid_provider_id(&provider_id) {
            return Err(ProviderRegistryError::InvalidProviderId(provider_id));
        }
        if self.providers.contains_key(provider_id.as_str()) {
            return Err(ProviderRegistryError::DuplicateProviderId(provider_id));
        }

        info!(
            "event=provider_register module=registry status=ok provider_id={}",
            provider_id
        );
        self.providers.insert(provider_id, provider);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Returns sorted provider ids.
    pub fn provider_ids(&self) -> Vec<String> {
        self.providers.keys().cloned().collect()
    }

    /// Returns one provider by id.
    pub fn get(&self, provider_id: &str) -> Option<Arc<dyn SymbolDataProvider>> {
        self.providers.get(provider_id.trim()).cloned()
    }
}

fn is_valid_provider_id(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    value
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
}
