//! Skin-tone preference collaborator.
//!
//! # Responsibility
//! - Define the read-only contract providers use to fetch the active tone.
//! - Provide fixed, live-updatable and document-backed implementations.
//!
//! # Invariants
//! - Core code only reads preferences; it never writes them.
//! - Every read is a single value fetch with no cached state.

use crate::model::emoji::SkinTone;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

/// Preference read failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceError {
    /// Store holds a code that maps to no known tone.
    InvalidSkinToneCode(i32),
    /// Backing store could not be read.
    Unavailable(String),
}

impl Display for PreferenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSkinToneCode(code) => write!(f, "unknown skin tone code: {code}"),
            Self::Unavailable(message) => write!(f, "preference store unavailable: {message}"),
        }
    }
}

impl Error for PreferenceError {}

/// Read accessor for the user's emoji skin-tone preference.
pub trait SkinTonePreference: Send + Sync {
    fn emoji_skin_tone(&self) -> Result<SkinTone, PreferenceError>;
}

impl<T: SkinTonePreference + ?Sized> SkinTonePreference for Arc<T> {
    fn emoji_skin_tone(&self) -> Result<SkinTone, PreferenceError> {
        (**self).emoji_skin_tone()
    }
}

/// Constant preference, mostly for tests and headless callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedSkinTone(pub SkinTone);

impl SkinTonePreference for FixedSkinTone {
    fn emoji_skin_tone(&self) -> Result<SkinTone, PreferenceError> {
        Ok(self.0)
    }
}

/// Preference cell the host updates while pickers keep reading it.
///
/// Clones share the same cell. The tone is stored by integer code, so a host
/// writing a raw code through [`SharedSkinTone::set_code`] can store values
/// that fail to parse on read.
#[derive(Debug, Clone)]
pub struct SharedSkinTone {
    code: Arc<AtomicI32>,
}

impl SharedSkinTone {
    pub fn new(tone: SkinTone) -> Self {
        Self {
            code: Arc::new(AtomicI32::new(tone.code())),
        }
    }

    pub fn set(&self, tone: SkinTone) {
        self.code.store(tone.code(), Ordering::Release);
    }

    /// Stores a raw preference code as received from a host store.
    pub fn set_code(&self, code: i32) {
        self.code.store(code, Ordering::Release);
    }
}

impl Default for SharedSkinTone {
    fn default() -> Self {
        Self::new(SkinTone::Unset)
    }
}

impl SkinTonePreference for SharedSkinTone {
    fn emoji_skin_tone(&self) -> Result<SkinTone, PreferenceError> {
        let code = self.code.load(Ordering::Acquire);
        SkinTone::from_code(code).ok_or(PreferenceError::InvalidSkinToneCode(code))
    }
}

/// Picker preference document.
///
/// Unknown keys are ignored so the document can be a slice of a larger host
/// preference file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct PickerPrefs {
    pub emoji_skin_tone: SkinTone,
}

impl PickerPrefs {
    /// Parses a JSON preference document, e.g. `{"emoji_skin_tone":"medium"}`.
    pub fn from_json_str(json: &str) -> Result<Self, PrefsError> {
        serde_json::from_str(json).map_err(PrefsError::Parse)
    }
}

impl SkinTonePreference for PickerPrefs {
    fn emoji_skin_tone(&self) -> Result<SkinTone, PreferenceError> {
        Ok(self.emoji_skin_tone)
    }
}

/// Preference document load error.
#[derive(Debug)]
pub enum PrefsError {
    Parse(serde_json::Error),
}

impl Display for PrefsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid picker preferences: {err}"),
        }
    }
}

impl Error for PrefsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
        }
    }
}
