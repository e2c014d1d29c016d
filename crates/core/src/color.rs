//! Hex colors and the CSS color strings derived from them.
//!
//! Color pickers hand editors `#rrggbb` strings. [`Srgb`] parses them once and
//! produces the `rgba(...)` and shaded variants the glass and soft-UI editors
//! need, so no template ever re-parses a generated string.

use crate::error::StudioError;
use crate::format::{num, round_half_up};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// sRGB color with components in [0, 1].
///
/// Serializes as a hex string `"#rrggbb"`. The hex round-trip has 8-bit
/// quantization, which is all a color picker ever produces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Srgb {
    pub const BLACK: Srgb = Srgb {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Parses a hex color string like "#ff00aa" or "ff00aa" (case insensitive).
    pub fn from_hex(hex: &str) -> Result<Srgb, StudioError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(StudioError::InvalidColor(format!(
                "expected 6 hex digits, got '{hex}'"
            )));
        }
        let channel = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|e| StudioError::InvalidColor(format!("invalid {name} component: {e}")))
        };
        Ok(Srgb::from_rgb8([
            channel(0..2, "red")?,
            channel(2..4, "green")?,
            channel(4..6, "blue")?,
        ]))
    }

    pub fn from_rgb8([r, g, b]: [u8; 3]) -> Srgb {
        Srgb {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// Quantizes each component to 0..=255 with rounding.
    pub fn to_rgb8(self) -> [u8; 3] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }

    /// Converts the color to a lowercase hex string like `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// `rgba(r, g, b, alpha)` with 8-bit channels.
    pub fn css_rgba(self, alpha: f64) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("rgba({r}, {g}, {b}, {})", num(alpha))
    }

    /// Lightens (positive `intensity`) or darkens (negative) each channel by
    /// `round(c * intensity)`, clamped to 0..=255.
    pub fn shade(self, intensity: f64) -> Srgb {
        let adjust = |c: u8| {
            let c = c as f64;
            (c + round_half_up(c * intensity)).clamp(0.0, 255.0) as u8
        };
        let [r, g, b] = self.to_rgb8();
        Srgb::from_rgb8([adjust(r), adjust(g), adjust(b)])
    }
}

impl Serialize for Srgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Srgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Srgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Reads a hex color parameter.
///
/// A missing key yields `default`. A present but unparseable value is an
/// error, because a color picker never produces one.
pub fn param_color(
    params: &serde_json::Value,
    name: &str,
    default: Srgb,
) -> Result<Srgb, StudioError> {
    match params.get(name).and_then(serde_json::Value::as_str) {
        None => Ok(default),
        Some(s) => Srgb::from_hex(s).map_err(|e| StudioError::InvalidParam {
            name: name.to_owned(),
            reason: e.to_string(),
        }),
    }
}

/// JSON schema entry for a color picker.
pub fn color_schema(default: Srgb, description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "color",
        "default": default.to_hex(),
        "description": description,
    })
}
