//! Projection of settings state onto the style scope.

use crate::palette::ColorSet;
use crate::properties::StyleProperty;
use crate::sink::StyleSink;
use crate::state::{ImageSize, Typography};

/// Class toggled on the style scope when the accessibility flag is set.
///
/// The engine carries no colorblind-specific color logic; external
/// stylesheets react to this class.
pub const COLOR_BLIND_CLASS: &str = "daltonism";

/// Project settings onto the style scope.
///
/// Writes one property per *defined* color role; undefined optional
/// roles are left untouched, so a previously projected value keeps
/// cascading until some palette overrides it. Typography follows the
/// same rule for its optional fields. Image dimensions are always
/// written, formatted as pixel lengths. Accepts any well-formed input
/// and never fails.
pub fn project(
    colors: &ColorSet,
    typography: &Typography,
    image_size: &ImageSize,
    color_blind: bool,
    sink: &mut dyn StyleSink,
) {
    sink.set_property(StyleProperty::Primary, colors.primary.as_str());
    sink.set_property(StyleProperty::Secondary, colors.secondary.as_str());
    sink.set_property(StyleProperty::Accent, colors.accent.as_str());

    let optional_colors = [
        (StyleProperty::BackgroundPrimary, &colors.background_primary),
        (
            StyleProperty::BackgroundSecondary,
            &colors.background_secondary,
        ),
        (StyleProperty::TextPrimary, &colors.text_primary),
        (StyleProperty::TextSecondary, &colors.text_secondary),
        (StyleProperty::Border, &colors.border),
        (StyleProperty::Success, &colors.success),
        (StyleProperty::Warning, &colors.warning),
        (StyleProperty::Danger, &colors.danger),
    ];
    for (property, color) in optional_colors {
        if let Some(color) = color {
            sink.set_property(property, color.as_str());
        }
    }

    sink.set_property(StyleProperty::FontFamily, &typography.font_family);
    sink.set_property(StyleProperty::FontSize, &typography.font_size);
    if let Some(family) = &typography.heading_font_family {
        sink.set_property(StyleProperty::HeadingFontFamily, family);
    }
    if let Some(size) = &typography.button_font_size {
        sink.set_property(StyleProperty::ButtonFontSize, size);
    }
    if let Some(height) = &typography.line_height {
        sink.set_property(StyleProperty::LineHeight, height);
    }

    sink.set_property(StyleProperty::ImageWidth, &format!("{}px", image_size.width));
    sink.set_property(
        StyleProperty::ImageHeight,
        &format!("{}px", image_size.height),
    );

    sink.set_class(COLOR_BLIND_CLASS, color_blind);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Palette;
    use crate::sink::StyleSheet;

    #[test]
    fn projects_every_defined_role() {
        let palette = Palette::default_light();
        let mut sheet = StyleSheet::new();
        project(
            &palette.colors,
            &Typography::default(),
            &ImageSize::default(),
            false,
            &mut sheet,
        );
        assert_eq!(sheet.property(StyleProperty::Primary), Some("#007bff"));
        assert_eq!(sheet.property(StyleProperty::Border), Some("#dee2e6"));
        assert_eq!(
            sheet.property(StyleProperty::HeadingFontFamily),
            Some("'Arial Black', sans-serif")
        );
        assert_eq!(sheet.property(StyleProperty::ImageWidth), Some("100px"));
        assert_eq!(sheet.property(StyleProperty::ImageHeight), Some("100px"));
        assert!(!sheet.has_class(COLOR_BLIND_CLASS));
    }

    #[test]
    fn undefined_roles_keep_previous_values() {
        let mut sheet = StyleSheet::new();
        project(
            &Palette::dark_mode().colors,
            &Typography::default(),
            &ImageSize::default(),
            false,
            &mut sheet,
        );
        assert_eq!(sheet.property(StyleProperty::Border), Some("#424242"));

        // A minimal set defines no border; the dark palette's value
        // stays on the scope.
        project(
            &ColorSet::fallback(),
            &Typography::fallback(),
            &ImageSize::default(),
            false,
            &mut sheet,
        );
        assert_eq!(sheet.property(StyleProperty::Primary), Some("#007bff"));
        assert_eq!(sheet.property(StyleProperty::Border), Some("#424242"));
        assert_eq!(
            sheet.property(StyleProperty::LineHeight),
            Some("1.6"),
            "optional typography is sticky too"
        );
    }

    #[test]
    fn toggles_the_colorblind_class_both_ways() {
        let mut sheet = StyleSheet::new();
        let palette = Palette::default_light();
        project(
            &palette.colors,
            &Typography::default(),
            &ImageSize::default(),
            true,
            &mut sheet,
        );
        assert!(sheet.has_class(COLOR_BLIND_CLASS));
        project(
            &palette.colors,
            &Typography::default(),
            &ImageSize::default(),
            false,
            &mut sheet,
        );
        assert!(!sheet.has_class(COLOR_BLIND_CLASS));
    }

    #[test]
    fn image_dimensions_are_pixel_lengths() {
        let mut sheet = StyleSheet::new();
        project(
            &ColorSet::fallback(),
            &Typography::fallback(),
            &ImageSize {
                width: 200,
                height: 150,
            },
            false,
            &mut sheet,
        );
        assert_eq!(sheet.property(StyleProperty::ImageWidth), Some("200px"));
        assert_eq!(sheet.property(StyleProperty::ImageHeight), Some("150px"));
    }
}
