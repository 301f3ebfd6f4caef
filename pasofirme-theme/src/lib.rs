#![warn(missing_docs)]

//! # Paso Firme Theming Engine
//!
//! Settings store, palette model and style projection for the
//! Zapatería El Paso Firme storefront.
//!
//! ## Overview
//!
//! The engine is a persistence-and-projection pipeline:
//!
//! - **[ThemeState](state::ThemeState)**: the root settings aggregate
//!   (palettes, active palette id, typography, image size,
//!   accessibility flag)
//! - **[ThemeStore](store::ThemeStore)**: the single owner of that
//!   state, exposing the mutators the settings panel calls
//! - **[project](projection::project)**: the pure mapping from settings
//!   onto named style properties plus one class toggle
//! - **[StyleSink](sink::StyleSink)** / **[StateStorage](persist::StateStorage)**:
//!   injected capabilities for the style scope and for durable storage,
//!   so the store runs the same against the live scope, a file backend
//!   or in-memory fakes
//!
//! ## Quick Start
//!
//! ```rust
//! use pasofirme_theme::palette::PaletteId;
//! use pasofirme_theme::properties::StyleProperty;
//! use pasofirme_theme::sink::StyleSheet;
//! use pasofirme_theme::store::ThemeStore;
//!
//! let mut store = ThemeStore::new(StyleSheet::new());
//! store.init();
//! store.apply_palette(PaletteId(2));
//!
//! assert_eq!(
//!     store.sink().property(StyleProperty::Primary),
//!     Some("#bb86fc"),
//! );
//! println!("{}", store.sink().to_css());
//! ```
//!
//! Every consumer reads the projected properties through ordinary
//! cascade inheritance; nothing re-renders explicitly. On load,
//! persisted state is read and sanitized before the first projection
//! runs (see [persist]).

/// Contains validated CSS color values.
pub mod color;
/// Contains the [error::ThemeError] type.
pub mod error;
/// Contains palettes and their semantic color roles.
pub mod palette;
/// Contains the storage capability and state rehydration.
pub mod persist;
/// Contains the projection onto the style scope.
pub mod projection;
/// Contains type-safe style property keys.
pub mod properties;
/// Contains the style-scope capability and the in-memory scope.
pub mod sink;
/// Contains the root settings aggregate.
pub mod state;
/// Contains the settings store and its mutators.
pub mod store;
