// SPDX-License-Identifier: LGPL-3.0-only
pub mod registry;
pub mod storage;

// Re-export commonly used types
pub use pasofirme_theme::persist::MemoryStorage;
pub use registry::SettingsRegistry;
pub use storage::FileStorage;
