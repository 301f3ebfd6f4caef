//! Palettes: named, reusable sets of semantic color-role assignments.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::CssColor;

/// Identifier of a stored palette.
///
/// Ids are allocated by the store from a monotonic counter; the two
/// built-in palettes occupy ids 1 and 2.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PaletteId(pub u64);

impl fmt::Display for PaletteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Semantic color-role assignments shared by every palette.
///
/// `primary`, `secondary` and `accent` are mandatory; the remaining
/// roles are optional and, when absent, the projection leaves the
/// matching style property untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSet {
    /// Primary brand color.
    pub primary: CssColor,
    /// Secondary surface color.
    pub secondary: CssColor,
    /// Accent color.
    pub accent: CssColor,
    /// Main page background.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_primary: Option<CssColor>,
    /// Raised-surface background.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_secondary: Option<CssColor>,
    /// Main text color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_primary: Option<CssColor>,
    /// Muted text color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_secondary: Option<CssColor>,
    /// Border and separator color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<CssColor>,
    /// Positive-state color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<CssColor>,
    /// Warning-state color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<CssColor>,
    /// Error/danger-state color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub danger: Option<CssColor>,
}

impl ColorSet {
    /// Build a color set carrying only the three mandatory roles.
    pub fn minimal(primary: CssColor, secondary: CssColor, accent: CssColor) -> Self {
        Self {
            primary,
            secondary,
            accent,
            background_primary: None,
            background_secondary: None,
            text_primary: None,
            text_secondary: None,
            border: None,
            success: None,
            warning: None,
            danger: None,
        }
    }

    /// The hardcoded triple projected when no palette remains.
    pub fn fallback() -> Self {
        Self::minimal(seed("#007bff"), seed("#f8f9fa"), seed("#28a745"))
    }
}

/// A named, reusable set of semantic color-role assignments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Unique palette id.
    pub id: PaletteId,
    /// User-visible palette name.
    pub name: String,
    /// The palette's color-role assignments.
    pub colors: ColorSet,
}

impl Palette {
    /// The seeded light palette (id 1).
    pub fn default_light() -> Self {
        Self {
            id: PaletteId(1),
            name: "Default Light".to_string(),
            colors: ColorSet {
                primary: seed("#007bff"),
                secondary: seed("#f8f9fa"),
                accent: seed("#28a745"),
                background_primary: Some(seed("#ffffff")),
                background_secondary: Some(seed("#f0f0f0")),
                text_primary: Some(seed("#212529")),
                text_secondary: Some(seed("#6c757d")),
                border: Some(seed("#dee2e6")),
                success: Some(seed("#28a745")),
                warning: Some(seed("#ffc107")),
                danger: Some(seed("#dc3545")),
            },
        }
    }

    /// The seeded dark palette (id 2).
    pub fn dark_mode() -> Self {
        Self {
            id: PaletteId(2),
            name: "Dark Mode".to_string(),
            colors: ColorSet {
                primary: seed("#bb86fc"),
                secondary: seed("#121212"),
                accent: seed("#03dac6"),
                background_primary: Some(seed("#121212")),
                background_secondary: Some(seed("#1e1e1e")),
                text_primary: Some(seed("rgba(255, 255, 255, 0.87)")),
                text_secondary: Some(seed("#a0a0a0")),
                border: Some(seed("#424242")),
                success: Some(seed("#69f0ae")),
                warning: Some(seed("#ffeb3b")),
                danger: Some(seed("#ef5350")),
            },
        }
    }
}

// Seed literals are compile-time constants; a malformed one is a bug,
// not a runtime condition.
fn seed(value: &str) -> CssColor {
    CssColor::parse(value).expect("seed color literal")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_palettes_are_well_formed() {
        let light = Palette::default_light();
        assert_eq!(light.id, PaletteId(1));
        assert_eq!(light.name, "Default Light");
        assert_eq!(light.colors.primary.as_str(), "#007bff");
        assert!(light.colors.danger.is_some());

        let dark = Palette::dark_mode();
        assert_eq!(dark.id, PaletteId(2));
        assert_eq!(dark.colors.primary.as_str(), "#bb86fc");
        assert_eq!(
            dark.colors.text_primary.as_ref().map(CssColor::as_str),
            Some("rgba(255, 255, 255, 0.87)")
        );
    }

    #[test]
    fn color_set_uses_camel_case_on_the_wire() {
        let json = serde_json::to_value(Palette::default_light()).unwrap();
        let colors = &json["colors"];
        assert_eq!(colors["backgroundPrimary"], "#ffffff");
        assert_eq!(colors["textSecondary"], "#6c757d");
        assert!(colors.get("background_primary").is_none());
    }

    #[test]
    fn minimal_set_omits_optional_roles_on_the_wire() {
        let json = serde_json::to_value(ColorSet::fallback()).unwrap();
        assert_eq!(json["primary"], "#007bff");
        assert!(json.get("border").is_none());
    }
}
