//! Theme preference behind an explicit settings store.
//!
//! The portal remembers whether a user wants the dark theme. Instead of
//! reaching into ambient global storage, the preference goes through the
//! [`SettingsStore`] trait: a stored value wins, otherwise the system
//! color-scheme preference decides.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::RwLock;

/// Storage key for the theme preference.
pub const THEME_KEY: &str = "unda_theme";

/// The two portal themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
}

impl ThemePreference {
    /// The opposite theme.
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    /// Stored string form.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Interpret a stored value. Anything other than `"dark"` means light.
    fn from_stored(value: &str) -> Self {
        if value == "dark" {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A key/value store for user settings.
///
/// Implementations swallow `set` failures; there is no error channel.
pub trait SettingsStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Thread-safe in-memory settings store.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .read()
            .ok()
            .and_then(|values| values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.write() {
            values.insert(key.to_string(), value.to_string());
        }
    }
}

/// Resolve the active theme: the stored preference wins, otherwise the
/// system color-scheme preference decides.
pub fn resolve_theme(store: &dyn SettingsStore, system_prefers_dark: bool) -> ThemePreference {
    match store.get(THEME_KEY) {
        Some(stored) => ThemePreference::from_stored(&stored),
        None if system_prefers_dark => ThemePreference::Dark,
        None => ThemePreference::Light,
    }
}

/// Flip the active theme and persist the new preference.
pub fn toggle_theme(store: &dyn SettingsStore, system_prefers_dark: bool) -> ThemePreference {
    let next = resolve_theme(store, system_prefers_dark).toggled();
    store.set(THEME_KEY, next.as_str());
    next
}
