//! # Settings Store
//!
//! The single owner of [`ThemeState`]. Every mutator updates the
//! in-memory state, re-projects onto the injected [`StyleSink`] where
//! the operation calls for it, and writes the new state through the
//! attached storage handle. All "not found" conditions degrade to
//! no-ops; nothing here is fatal.
//!
//! The model is synchronous and single-threaded: mutators take
//! `&mut self`, run to completion, and two sequential calls are fully
//! serialized: the second always observes the first's completed
//! state and its projection fully overwrites the first's.

use crate::palette::{ColorSet, Palette, PaletteId};
use crate::persist::{self, StateStorage};
use crate::projection::project;
use crate::sink::StyleSink;
use crate::state::{ImageSize, ThemeState, Typography};

/// What the most recent projection was sourced from.
///
/// Lets callers observe the hardcoded-fallback path without comparing
/// color values (the fallback triple overlaps the seeded light
/// palette).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionSource {
    /// Colors came from the stored palette with this id.
    Palette(PaletteId),
    /// Colors came from the hardcoded fallback triple.
    Fallback,
}

/// Single owner of the settings aggregate.
///
/// Constructed over an injected [`StyleSink`] and, optionally, a
/// [`StateStorage`] handle. With storage attached, construction loads
/// and sanitizes the persisted state; [`ThemeStore::init`] must then
/// run before consumers read the style scope.
pub struct ThemeStore<S: StyleSink> {
    state: ThemeState,
    sink: S,
    storage: Option<Box<dyn StateStorage>>,
    next_id: PaletteId,
    last_projection: Option<ProjectionSource>,
}

impl<S: StyleSink> ThemeStore<S> {
    /// Create a store over the seeded default state, without durable
    /// storage.
    pub fn new(sink: S) -> Self {
        Self::from_state(ThemeState::default(), sink, None)
    }

    /// Create a store rehydrated from durable storage.
    ///
    /// Loading and sanitization happen here, synchronously, so the
    /// state is invariant-respecting before any consumer can read it.
    pub fn with_storage(sink: S, storage: Box<dyn StateStorage>) -> Self {
        let state = persist::load_state(storage.as_ref());
        Self::from_state(state, sink, Some(storage))
    }

    fn from_state(state: ThemeState, sink: S, storage: Option<Box<dyn StateStorage>>) -> Self {
        let next_id = PaletteId(
            state
                .palettes
                .keys()
                .map(|id| id.0)
                .max()
                .unwrap_or(0)
                .saturating_add(1),
        );
        Self {
            state,
            sink,
            storage,
            next_id,
            last_projection: None,
        }
    }

    /// Read-only view of the settings aggregate.
    pub fn state(&self) -> &ThemeState {
        &self.state
    }

    /// Read-only view of the style scope.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Source of the most recent projection, if any ran.
    pub fn last_projection(&self) -> Option<ProjectionSource> {
        self.last_projection
    }

    /// Project the active palette, selecting one first if needed.
    ///
    /// Idempotent. With an unresolvable or absent `current_id` the
    /// first stored palette becomes active; with no palettes at all
    /// this is a safe no-op and the scope keeps its prior styling.
    pub fn init(&mut self) {
        if let Some(palette) = self.state.current_palette().cloned() {
            self.project_palette(&palette);
            return;
        }
        let Some(first) = self.state.palettes.values().next().cloned() else {
            log::debug!("init: no palettes stored, nothing to project");
            return;
        };
        self.state.current_id = Some(first.id);
        self.project_palette(&first);
        self.persist();
    }

    /// Store a new palette and return its allocated id.
    ///
    /// The new palette is not activated and nothing is re-projected.
    pub fn add_palette(&mut self, name: impl Into<String>, colors: ColorSet) -> PaletteId {
        let id = self.next_id;
        self.next_id = PaletteId(id.0 + 1);
        self.state.palettes.insert(
            id,
            Palette {
                id,
                name: name.into(),
                colors,
            },
        );
        self.persist();
        id
    }

    /// Remove a palette by id. Unknown ids are a no-op.
    ///
    /// Removing the active palette falls back to the first remaining
    /// palette. With none left, projects the hardcoded minimal triple
    /// with default typography, default image size and the colorblind
    /// class cleared.
    pub fn remove_palette(&mut self, id: PaletteId) {
        if self.state.palettes.shift_remove(&id).is_none() {
            log::debug!("remove_palette: palette {id} not found");
            return;
        }
        if self.state.current_id == Some(id) {
            match self.state.palettes.values().next().cloned() {
                Some(first) => {
                    self.state.current_id = Some(first.id);
                    self.project_palette(&first);
                }
                None => {
                    self.state.current_id = None;
                    log::info!("last palette removed, projecting fallback defaults");
                    project(
                        &ColorSet::fallback(),
                        &Typography::fallback(),
                        &ImageSize::default(),
                        false,
                        &mut self.sink,
                    );
                    self.last_projection = Some(ProjectionSource::Fallback);
                }
            }
        }
        self.persist();
    }

    /// Activate a palette and re-project with it. Unknown ids leave
    /// state and projection unchanged.
    pub fn apply_palette(&mut self, id: PaletteId) {
        let Some(palette) = self.state.palettes.get(&id).cloned() else {
            log::warn!("apply_palette: palette {id} not found");
            return;
        };
        self.state.current_id = Some(id);
        self.project_palette(&palette);
        self.persist();
    }

    /// Replace typography wholesale and re-project.
    pub fn update_typography(&mut self, typography: Typography) {
        self.state.typography = typography;
        self.reproject();
        self.persist();
    }

    /// Replace the image dimensions wholesale and re-project.
    pub fn update_image_size(&mut self, image_size: ImageSize) {
        self.state.image_size = image_size;
        self.reproject();
        self.persist();
    }

    /// Replace the accessibility flag and re-project.
    ///
    /// The class toggle is the observable change; colors, typography
    /// and dimensions are re-applied unchanged.
    pub fn update_color_blind(&mut self, color_blind: bool) {
        self.state.color_blind = color_blind;
        self.reproject();
        self.persist();
    }

    fn project_palette(&mut self, palette: &Palette) {
        project(
            &palette.colors,
            &self.state.typography,
            &self.state.image_size,
            self.state.color_blind,
            &mut self.sink,
        );
        self.last_projection = Some(ProjectionSource::Palette(palette.id));
    }

    // Re-project after a settings change. Without an active palette
    // the fallback triple stands in for the colors so the typography
    // and image-size properties still reach the sink.
    fn reproject(&mut self) {
        if let Some(palette) = self.state.current_palette().cloned() {
            self.project_palette(&palette);
        } else {
            project(
                &ColorSet::fallback(),
                &self.state.typography,
                &self.state.image_size,
                self.state.color_blind,
                &mut self.sink,
            );
            self.last_projection = Some(ProjectionSource::Fallback);
        }
    }

    fn persist(&mut self) {
        if let Some(storage) = self.storage.as_deref_mut() {
            if let Err(error) = persist::save_state(storage, &self.state) {
                log::warn!("failed to persist theme state: {error}");
            }
        }
    }
}
