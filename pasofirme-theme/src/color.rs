//! Validated CSS color values and their serde representation.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ThemeError;

/// A validated CSS color value.
///
/// Palettes store colors as the strings the style scope consumes, not
/// as decoded channel values. Accepted forms are `#rgb`, `#rrggbb` and
/// `#rrggbbaa` hex notation plus the `rgb(...)`/`rgba(...)` functional
/// notation (the built-in dark palette uses an `rgba()` text color).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CssColor(String);

impl CssColor {
    /// Validate and wrap a CSS color string.
    pub fn parse(value: &str) -> Result<Self, ThemeError> {
        let trimmed = value.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return Self::parse_hex(trimmed, hex);
        }
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("rgb(") || lower.starts_with("rgba(") {
            return Self::parse_functional(trimmed);
        }
        Err(ThemeError::invalid_color(
            value,
            "expected hex or rgb()/rgba() notation",
        ))
    }

    /// Get the color as the string the style scope consumes.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn parse_hex(original: &str, hex: &str) -> Result<Self, ThemeError> {
        if !matches!(hex.len(), 3 | 6 | 8) {
            return Err(ThemeError::invalid_color(
                original,
                "hex color must have 3, 6 or 8 digits",
            ));
        }
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ThemeError::invalid_color(
                original,
                "hex color contains non-hex digits",
            ));
        }
        Ok(Self(original.to_string()))
    }

    fn parse_functional(original: &str) -> Result<Self, ThemeError> {
        let open = original.find('(').unwrap_or(0);
        let Some(body) = original[open..]
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
        else {
            return Err(ThemeError::invalid_color(original, "unterminated rgb()"));
        };
        let components: Vec<&str> = body.split(',').map(str::trim).collect();
        let expected = if original[..open].eq_ignore_ascii_case("rgba") {
            4
        } else {
            3
        };
        if components.len() != expected {
            return Err(ThemeError::invalid_color(
                original,
                "wrong number of color components",
            ));
        }
        for component in components {
            let numeric = component.strip_suffix('%').unwrap_or(component);
            if numeric.parse::<f32>().is_err() {
                return Err(ThemeError::invalid_color(
                    original,
                    "non-numeric color component",
                ));
            }
        }
        Ok(Self(original.to_string()))
    }
}

impl fmt::Display for CssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CssColor {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for CssColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CssColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_hex_forms() {
        assert!(CssColor::parse("#fff").is_ok());
        assert!(CssColor::parse("#007bff").is_ok());
        assert!(CssColor::parse("#bb86fc80").is_ok());
    }

    #[test]
    fn accepts_functional_forms() {
        assert!(CssColor::parse("rgb(255, 255, 255)").is_ok());
        assert!(CssColor::parse("rgba(255, 255, 255, 0.87)").is_ok());
        assert!(CssColor::parse("rgba(100%, 0%, 0%, 1)").is_ok());
    }

    #[test]
    fn rejects_malformed_values() {
        assert!(CssColor::parse("#007bf").is_err());
        assert!(CssColor::parse("#zzzzzz").is_err());
        assert!(CssColor::parse("rgb(1, 2)").is_err());
        assert!(CssColor::parse("rgba(1, 2, 3, x)").is_err());
        assert!(CssColor::parse("blue").is_err());
    }

    #[test]
    fn serde_round_trip_keeps_text() {
        let color = CssColor::parse("rgba(255, 255, 255, 0.87)").unwrap();
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"rgba(255, 255, 255, 0.87)\"");
        let back: CssColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, color);
    }

    #[test]
    fn deserialize_rejects_invalid() {
        assert!(serde_json::from_str::<CssColor>("\"not-a-color\"").is_err());
    }
}
