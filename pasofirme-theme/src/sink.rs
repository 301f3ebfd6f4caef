//! The style-scope capability the projection writes through.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use indexmap::IndexMap;

use crate::properties::StyleProperty;

/// Capability for writing named style properties and class toggles
/// onto the single global style scope consumers read from.
///
/// The store owns one sink, injected at construction; only the
/// projection writes to it. Passing a fake implementation makes the
/// store fully observable in tests.
pub trait StyleSink {
    /// Set a named property to the given value.
    fn set_property(&mut self, property: StyleProperty, value: &str);

    /// Add (`present = true`) or remove a class on the scope root.
    fn set_class(&mut self, class: &str, present: bool);
}

/// In-memory style scope.
///
/// Keeps the current property map and class set, and renders them as a
/// `:root { ... }` block for server-side rendering of the storefront
/// shell. Also serves as the fake sink in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSheet {
    properties: IndexMap<StyleProperty, String>,
    classes: BTreeSet<String>,
}

impl StyleSheet {
    /// Create an empty style scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current value of a property, if it was ever set.
    pub fn property(&self, property: StyleProperty) -> Option<&str> {
        self.properties.get(&property).map(String::as_str)
    }

    /// Check whether a class is present on the scope root.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Number of properties currently set.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether no property has been set yet.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Clear every property and class.
    ///
    /// Projection never clears on its own ("inherit until overridden");
    /// consumers that want strict per-palette isolation reset first.
    pub fn reset(&mut self) {
        self.properties.clear();
        self.classes.clear();
    }

    /// The `class` attribute value for the scope root.
    pub fn class_attr(&self) -> String {
        self.classes
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Render the current properties as a `:root { ... }` CSS block.
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (property, value) in &self.properties {
            let _ = writeln!(css, "  {}: {};", property.name(), value);
        }
        css.push('}');
        css.push('\n');
        css
    }
}

impl StyleSink for StyleSheet {
    fn set_property(&mut self, property: StyleProperty, value: &str) {
        self.properties.insert(property, value.to_string());
    }

    fn set_class(&mut self, class: &str, present: bool) {
        if present {
            self.classes.insert(class.to_string());
        } else {
            self.classes.remove(class);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn properties_overwrite_in_place() {
        let mut sheet = StyleSheet::new();
        sheet.set_property(StyleProperty::Primary, "#007bff");
        sheet.set_property(StyleProperty::Primary, "#bb86fc");
        assert_eq!(sheet.property(StyleProperty::Primary), Some("#bb86fc"));
        assert_eq!(sheet.len(), 1);
    }

    #[test]
    fn class_toggle_is_presence_based() {
        let mut sheet = StyleSheet::new();
        sheet.set_class("daltonism", true);
        assert!(sheet.has_class("daltonism"));
        assert_eq!(sheet.class_attr(), "daltonism");
        sheet.set_class("daltonism", false);
        assert!(!sheet.has_class("daltonism"));
        assert_eq!(sheet.class_attr(), "");
    }

    #[test]
    fn renders_a_root_block() {
        let mut sheet = StyleSheet::new();
        sheet.set_property(StyleProperty::Primary, "#007bff");
        sheet.set_property(StyleProperty::ImageWidth, "100px");
        let css = sheet.to_css();
        assert_eq!(
            css,
            ":root {\n  --color-primary: #007bff;\n  --img-width: 100px;\n}\n"
        );
    }
}
