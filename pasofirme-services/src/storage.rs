// SPDX-License-Identifier: LGPL-3.0-only
//! File-backed key-value storage under the XDG config home.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use pasofirme_theme::error::{ThemeError, ThemeResult};
use pasofirme_theme::persist::StateStorage;

/// One JSON document per key, stored as
/// `$XDG_CONFIG_HOME/pasofirme/<key>.json`.
///
/// Reads and writes are synchronous; this backend plays the role the
/// browser's local storage plays for the hosted storefront.
pub struct FileStorage {
    base_dir: PathBuf,
}

impl FileStorage {
    /// Create a storage handle rooted at the standard config location.
    pub fn new() -> ThemeResult<Self> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("pasofirme")
            .map_err(ThemeError::storage_unavailable)?;
        Ok(Self {
            base_dir: xdg_dirs.get_config_home(),
        })
    }

    /// Create a storage handle rooted at an explicit directory.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// The directory documents are stored in.
    pub fn base_dir(&self) -> &std::path::Path {
        &self.base_dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }
}

impl StateStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.key_path(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Some(contents),
            Err(error) if error.kind() == ErrorKind::NotFound => None,
            Err(error) => {
                log::warn!("failed to read {path:?}: {error}");
                None
            }
        }
    }

    fn put(&mut self, key: &str, value: &str) -> ThemeResult<()> {
        fs::create_dir_all(&self.base_dir)?;
        fs::write(self.key_path(key), value)?;
        Ok(())
    }
}
