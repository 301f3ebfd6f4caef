// SPDX-License-Identifier: LGPL-3.0-only
//! Startup wiring: storage, store and style scope in load order.

use anyhow::Result;

use pasofirme_theme::persist::StateStorage;
use pasofirme_theme::sink::{StyleSheet, StyleSink};
use pasofirme_theme::store::ThemeStore;

use crate::storage::FileStorage;

/// Registry owning the settings store for the lifetime of the process.
///
/// Construction performs the whole rehydration sequence in order:
/// build the storage backend, load and sanitize the persisted state,
/// then run `init()`, so the style scope is consistent before the
/// first consumer reads it.
pub struct SettingsRegistry<S: StyleSink = StyleSheet> {
    store: ThemeStore<S>,
}

impl SettingsRegistry<StyleSheet> {
    /// Load persisted settings from the XDG config home and project
    /// them onto a fresh in-memory style scope.
    pub fn new() -> Result<Self> {
        let storage = FileStorage::new()?;
        log::info!("loading settings from {:?}", storage.base_dir());
        Ok(Self::with_parts(StyleSheet::new(), Box::new(storage)))
    }

    /// Render the projected scope as a `:root { ... }` block for the
    /// storefront shell.
    pub fn stylesheet(&self) -> String {
        self.store.sink().to_css()
    }
}

impl<S: StyleSink> SettingsRegistry<S> {
    /// Wire an explicit sink and storage backend (tests, embedding,
    /// alternate scopes).
    pub fn with_parts(sink: S, storage: Box<dyn StateStorage>) -> Self {
        let mut store = ThemeStore::with_storage(sink, storage);
        store.init();
        Self { store }
    }

    /// The settings store.
    pub fn store(&self) -> &ThemeStore<S> {
        &self.store
    }

    /// Mutable access to the settings store.
    pub fn store_mut(&mut self) -> &mut ThemeStore<S> {
        &mut self.store
    }
}
