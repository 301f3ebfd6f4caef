//! Type-safe keys for the style properties the engine projects.

/// A named style property on the global style scope.
///
/// The wire names are the custom properties the storefront stylesheets
/// read; consumers re-render through ordinary cascade inheritance when
/// these change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleProperty {
    /// Primary brand color.
    Primary,
    /// Secondary surface color.
    Secondary,
    /// Accent color for highlights and calls to action.
    Accent,
    /// Main page background.
    BackgroundPrimary,
    /// Raised-surface background.
    BackgroundSecondary,
    /// Main text color.
    TextPrimary,
    /// Muted text color.
    TextSecondary,
    /// Border and separator color.
    Border,
    /// Positive-state color.
    Success,
    /// Warning-state color.
    Warning,
    /// Error/danger-state color.
    Danger,
    /// Body font family.
    FontFamily,
    /// Body font size.
    FontSize,
    /// Heading font family.
    HeadingFontFamily,
    /// Button font size.
    ButtonFontSize,
    /// Body line height.
    LineHeight,
    /// Product image width.
    ImageWidth,
    /// Product image height.
    ImageHeight,
}

impl StyleProperty {
    /// Get the wire name of this property on the style scope.
    pub fn name(&self) -> &'static str {
        match self {
            StyleProperty::Primary => "--color-primary",
            StyleProperty::Secondary => "--color-secondary",
            StyleProperty::Accent => "--color-accent",
            StyleProperty::BackgroundPrimary => "--color-background-primary",
            StyleProperty::BackgroundSecondary => "--color-background-secondary",
            StyleProperty::TextPrimary => "--color-text-primary",
            StyleProperty::TextSecondary => "--color-text-secondary",
            StyleProperty::Border => "--color-border",
            StyleProperty::Success => "--color-success",
            StyleProperty::Warning => "--color-warning",
            StyleProperty::Danger => "--color-danger",
            StyleProperty::FontFamily => "--font-fontFamily",
            StyleProperty::FontSize => "--font-fontSize",
            StyleProperty::HeadingFontFamily => "--font-heading-fontFamily",
            StyleProperty::ButtonFontSize => "--font-button-fontSize",
            StyleProperty::LineHeight => "--font-lineHeight",
            StyleProperty::ImageWidth => "--img-width",
            StyleProperty::ImageHeight => "--img-height",
        }
    }
}
