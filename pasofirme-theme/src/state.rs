//! The root settings aggregate and its serialized layout.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::palette::{Palette, PaletteId};

/// Typography settings projected alongside the active palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    /// Body font family.
    pub font_family: String,
    /// Body font size (a CSS length).
    pub font_size: String,
    /// Heading font family.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_font_family: Option<String>,
    /// Button font size (a CSS length).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_font_size: Option<String>,
    /// Body line height (unitless ratio as a string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<String>,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font_family: "'Arial', sans-serif".to_string(),
            font_size: "16px".to_string(),
            heading_font_family: Some("'Arial Black', sans-serif".to_string()),
            button_font_size: Some("1em".to_string()),
            line_height: Some("1.6".to_string()),
        }
    }
}

impl Typography {
    /// The minimal typography projected on the no-palette fallback
    /// path: mandatory fields only.
    pub fn fallback() -> Self {
        Self {
            font_family: "'Arial', sans-serif".to_string(),
            font_size: "16px".to_string(),
            heading_font_family: None,
            button_font_size: None,
            line_height: None,
        }
    }
}

/// Pixel dimensions applied to product imagery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Default for ImageSize {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
        }
    }
}

/// Root settings aggregate, owned exclusively by the store.
///
/// Invariant: when `palettes` is non-empty, `current_id` references an
/// existing palette. The invariant is transiently violatable after a
/// deletion; the store repairs it by falling back to the first
/// remaining palette or `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeState {
    /// Stored palettes, in insertion order, keyed by id.
    #[serde(with = "palette_list")]
    pub palettes: IndexMap<PaletteId, Palette>,
    /// Id of the active palette, if any.
    pub current_id: Option<PaletteId>,
    /// Current typography settings.
    pub typography: Typography,
    /// Current product image dimensions.
    pub image_size: ImageSize,
    /// Accessibility flag driving the colorblind class toggle.
    pub color_blind: bool,
}

impl Default for ThemeState {
    fn default() -> Self {
        let palettes = [Palette::default_light(), Palette::dark_mode()]
            .into_iter()
            .map(|palette| (palette.id, palette))
            .collect();
        Self {
            palettes,
            current_id: Some(PaletteId(1)),
            typography: Typography::default(),
            image_size: ImageSize::default(),
            color_blind: false,
        }
    }
}

impl ThemeState {
    /// Get the active palette, if `current_id` resolves.
    pub fn current_palette(&self) -> Option<&Palette> {
        self.current_id.and_then(|id| self.palettes.get(&id))
    }

    /// Repair structural invariants after deserialization.
    ///
    /// A `current_id` that no longer references a stored palette is
    /// reset to `None`; `init()` then selects a real palette.
    pub fn sanitize(&mut self) {
        if let Some(id) = self.current_id {
            if !self.palettes.contains_key(&id) {
                log::warn!("persisted current palette {id} no longer exists, clearing");
                self.current_id = None;
            }
        }
    }
}

/// Serialize the palette map as the JSON array the storefront has
/// always persisted; on the way back in, duplicate ids are dropped
/// (first occurrence wins).
mod palette_list {
    use indexmap::IndexMap;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::palette::{Palette, PaletteId};

    pub fn serialize<S>(
        palettes: &IndexMap<PaletteId, Palette>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(palettes.values())
    }

    pub fn deserialize<'de, D>(
        deserializer: D,
    ) -> Result<IndexMap<PaletteId, Palette>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let list = Vec::<Palette>::deserialize(deserializer)?;
        let mut palettes = IndexMap::with_capacity(list.len());
        for palette in list {
            if palettes.contains_key(&palette.id) {
                log::warn!("dropping duplicate palette id {}", palette.id);
                continue;
            }
            palettes.insert(palette.id, palette);
        }
        Ok(palettes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_state_has_two_palettes_and_light_active() {
        let state = ThemeState::default();
        assert_eq!(state.palettes.len(), 2);
        assert_eq!(state.current_id, Some(PaletteId(1)));
        assert_eq!(state.current_palette().unwrap().name, "Default Light");
        assert!(!state.color_blind);
    }

    #[test]
    fn wire_layout_matches_the_persisted_blob() {
        let json = serde_json::to_value(ThemeState::default()).unwrap();
        assert!(json["palettes"].is_array());
        assert_eq!(json["currentId"], 1);
        assert_eq!(json["typography"]["fontFamily"], "'Arial', sans-serif");
        assert_eq!(json["imageSize"]["width"], 100);
        assert_eq!(json["colorBlind"], false);
    }

    #[test]
    fn missing_fields_fall_back_to_seeds() {
        let state: ThemeState = serde_json::from_str("{\"colorBlind\": true}").unwrap();
        assert!(state.color_blind);
        assert_eq!(state.palettes.len(), 2);
        assert_eq!(state.current_id, Some(PaletteId(1)));
        assert_eq!(state.image_size, ImageSize::default());
    }

    #[test]
    fn duplicate_palette_ids_keep_first_occurrence() {
        let raw = r##"{
            "palettes": [
                {"id": 7, "name": "A", "colors": {"primary": "#111111", "secondary": "#222222", "accent": "#333333"}},
                {"id": 7, "name": "B", "colors": {"primary": "#444444", "secondary": "#555555", "accent": "#666666"}}
            ],
            "currentId": 7
        }"##;
        let state: ThemeState = serde_json::from_str(raw).unwrap();
        assert_eq!(state.palettes.len(), 1);
        assert_eq!(state.palettes[&PaletteId(7)].name, "A");
    }

    #[test]
    fn sanitize_clears_dangling_current_id() {
        let mut state = ThemeState::default();
        state.current_id = Some(PaletteId(99));
        state.sanitize();
        assert_eq!(state.current_id, None);

        let mut state = ThemeState::default();
        state.sanitize();
        assert_eq!(state.current_id, Some(PaletteId(1)));
    }
}
