#![warn(missing_docs)]

//! Theme and settings engine for the Zapatería El Paso Firme storefront.

pub use pasofirme_services as services;
pub use pasofirme_theme as theme;

/// A "prelude" for embedders of the engine.
///
/// Importing this module brings into scope the types needed to load,
/// mutate and project the storefront's theme settings.
///
/// ```rust
/// use pasofirme::prelude::*;
/// ```
pub mod prelude {
    pub use crate::services::{FileStorage, MemoryStorage, SettingsRegistry};
    pub use crate::theme::color::CssColor;
    pub use crate::theme::palette::{ColorSet, Palette, PaletteId};
    pub use crate::theme::persist::{StateStorage, THEME_STORAGE_KEY};
    pub use crate::theme::projection::{project, COLOR_BLIND_CLASS};
    pub use crate::theme::properties::StyleProperty;
    pub use crate::theme::sink::{StyleSheet, StyleSink};
    pub use crate::theme::state::{ImageSize, ThemeState, Typography};
    pub use crate::theme::store::{ProjectionSource, ThemeStore};
}
