//! # Persistence & Rehydration
//!
//! Durable storage is an injected capability: a string-keyed store of
//! JSON documents. The engine owns one entry, `"theme-storage"`, laid
//! out as the envelope the storefront has always written:
//!
//! ```json
//! { "state": { "currentId": 1, "typography": { ... }, "imageSize": { ... },
//!   "colorBlind": false, "palettes": [ ... ] }, "version": 0 }
//! ```
//!
//! Loading runs once per process, synchronously, strictly before the
//! store's `init()`; every failure path (absent key, corrupt JSON,
//! unknown version, invalid colors) lands on the seeded defaults so
//! the projection never observes inconsistent state.

use serde::{Deserialize, Serialize};

use crate::error::ThemeResult;
use crate::state::ThemeState;

/// Storage key holding the persisted settings aggregate.
pub const THEME_STORAGE_KEY: &str = "theme-storage";

/// Version stamped into the persisted envelope. Anything else is
/// treated like a corrupt blob.
pub const STORAGE_VERSION: u32 = 0;

/// Durable key-value storage capability.
///
/// Payloads are JSON documents; keys are plain strings. Backends are
/// expected to be synchronous local storage, not network services.
pub trait StateStorage {
    /// Read the document stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Write (or overwrite) the document stored under `key`.
    fn put(&mut self, key: &str, value: &str) -> ThemeResult<()>;
}

/// In-memory storage for tests and non-persistent embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: std::collections::HashMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: &str) -> ThemeResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    state: ThemeState,
    #[serde(default)]
    version: u32,
}

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    state: &'a ThemeState,
    version: u32,
}

/// Load and sanitize the persisted state, falling back to the seeded
/// defaults on any failure.
pub fn load_state(storage: &dyn StateStorage) -> ThemeState {
    let Some(raw) = storage.get(THEME_STORAGE_KEY) else {
        log::debug!("no persisted theme state, seeding defaults");
        return ThemeState::default();
    };
    log::debug!("hydrating theme state");
    match serde_json::from_str::<Envelope>(&raw) {
        Ok(envelope) if envelope.version == STORAGE_VERSION => {
            let mut state = envelope.state;
            state.sanitize();
            log::debug!("hydration finished");
            state
        }
        Ok(envelope) => {
            log::warn!(
                "persisted theme state has unknown version {}, discarding",
                envelope.version
            );
            ThemeState::default()
        }
        Err(error) => {
            log::warn!("failed to decode persisted theme state: {error}");
            ThemeState::default()
        }
    }
}

/// Serialize the state into its envelope and write it through the
/// storage handle.
pub fn save_state(storage: &mut dyn StateStorage, state: &ThemeState) -> ThemeResult<()> {
    let raw = serde_json::to_string(&EnvelopeRef {
        state,
        version: STORAGE_VERSION,
    })?;
    storage.put(THEME_STORAGE_KEY, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PaletteId;
    use crate::state::ImageSize;

    #[test]
    fn absent_key_seeds_defaults() {
        let storage = MemoryStorage::new();
        assert_eq!(load_state(&storage), ThemeState::default());
    }

    #[test]
    fn round_trip_preserves_state() {
        let mut storage = MemoryStorage::new();
        let mut state = ThemeState::default();
        state.current_id = Some(PaletteId(2));
        state.color_blind = true;
        state.image_size = ImageSize {
            width: 640,
            height: 480,
        };
        save_state(&mut storage, &state).unwrap();

        let loaded = load_state(&storage);
        assert_eq!(loaded, state);
    }

    #[test]
    fn corrupt_blob_seeds_defaults() {
        let mut storage = MemoryStorage::new();
        storage.put(THEME_STORAGE_KEY, "{not json").unwrap();
        assert_eq!(load_state(&storage), ThemeState::default());
    }

    #[test]
    fn invalid_color_in_blob_seeds_defaults() {
        let mut storage = MemoryStorage::new();
        let raw = r##"{"state": {"palettes": [
            {"id": 1, "name": "Bad", "colors": {"primary": "chartreuse", "secondary": "#222222", "accent": "#333333"}}
        ]}, "version": 0}"##;
        storage.put(THEME_STORAGE_KEY, raw).unwrap();
        assert_eq!(load_state(&storage), ThemeState::default());
    }

    #[test]
    fn unknown_version_seeds_defaults() {
        let mut storage = MemoryStorage::new();
        let mut state = ThemeState::default();
        state.color_blind = true;
        let raw = serde_json::to_string(&EnvelopeRef {
            state: &state,
            version: 7,
        })
        .unwrap();
        storage.put(THEME_STORAGE_KEY, &raw).unwrap();
        assert_eq!(load_state(&storage), ThemeState::default());
    }

    #[test]
    fn dangling_current_id_is_cleared_on_load() {
        let mut storage = MemoryStorage::new();
        let mut state = ThemeState::default();
        state.current_id = Some(PaletteId(99));
        save_state(&mut storage, &state).unwrap();

        let loaded = load_state(&storage);
        assert_eq!(loaded.current_id, None);
        assert_eq!(loaded.palettes.len(), 2);
    }

    #[test]
    fn partial_state_merges_over_seeds() {
        let mut storage = MemoryStorage::new();
        storage
            .put(
                THEME_STORAGE_KEY,
                r#"{"state": {"colorBlind": true}, "version": 0}"#,
            )
            .unwrap();

        let loaded = load_state(&storage);
        assert!(loaded.color_blind);
        assert_eq!(loaded.palettes.len(), 2);
        assert_eq!(loaded.current_id, Some(PaletteId(1)));
    }
}
