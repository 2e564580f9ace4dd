use std::fmt;

use serde::{Deserialize, Serialize};

/// RGBA color with every channel normalized to 0.0-1.0.
#[cfg_attr(feature = "napi", napi(object))]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }
}

impl Color {
    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    pub fn from_rgba8([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(
            r as f64 / 255.0,
            g as f64 / 255.0,
            b as f64 / 255.0,
            a as f64 / 255.0,
        )
    }

    /// Channels scaled to 0-255, truncated toward zero.
    pub fn to_rgba8(self) -> [u8; 4] {
        [
            channel_byte(self.red),
            channel_byte(self.green),
            channel_byte(self.blue),
            channel_byte(self.alpha),
        ]
    }
}

/// `v * 255` truncated and clamped into a byte. NaN maps to 0.
pub(crate) fn channel_byte(v: f64) -> u8 {
    (v * 255.0).clamp(0.0, 255.0) as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, _] = self.to_rgba8();
        write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
    }
}

/// Output layout for hex formatting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HexFormat {
    /// `#RRGGBB`; alpha is dropped.
    #[default]
    Rgb,
    /// `#RRGGBBAA`
    Rgba,
}

/// The model a rendering backend stores a color in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorModel {
    Rgb,
    Monochrome,
    Cmyk,
    Pattern,
}

impl ColorModel {
    /// Only RGB and grayscale colors can yield red/green/blue components.
    pub fn has_rgb_components(self) -> bool {
        matches!(self, ColorModel::Rgb | ColorModel::Monochrome)
    }
}

impl fmt::Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ColorModel::Rgb => "rgb",
            ColorModel::Monochrome => "monochrome",
            ColorModel::Cmyk => "cmyk",
            ColorModel::Pattern => "pattern",
        })
    }
}

/// A color as held by a rendering backend, tagged with its model.
///
/// JSON shape: `{ "model": "rgb", "red": 1.0, "green": 0.0, "blue": 0.0, "alpha": 1.0 }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "lowercase")]
pub enum DeviceColor {
    Rgb(Color),
    Monochrome {
        white: f64,
        alpha: f64,
    },
    Cmyk {
        cyan: f64,
        magenta: f64,
        yellow: f64,
        black: f64,
        alpha: f64,
    },
    /// Tiled image or shading; no fixed components.
    Pattern {
        alpha: f64,
    },
}

impl DeviceColor {
    pub fn model(&self) -> ColorModel {
        match self {
            DeviceColor::Rgb(_) => ColorModel::Rgb,
            DeviceColor::Monochrome { .. } => ColorModel::Monochrome,
            DeviceColor::Cmyk { .. } => ColorModel::Cmyk,
            DeviceColor::Pattern { .. } => ColorModel::Pattern,
        }
    }

    /// RGBA view of the color, or `None` when the model has no RGB components.
    pub fn rgb_components(&self) -> Option<Color> {
        match *self {
            DeviceColor::Rgb(color) => Some(color),
            DeviceColor::Monochrome { white, alpha } => Some(Color::new(white, white, white, alpha)),
            DeviceColor::Cmyk { .. } | DeviceColor::Pattern { .. } => None,
        }
    }

    pub fn alpha(&self) -> f64 {
        match *self {
            DeviceColor::Rgb(Color { alpha, .. })
            | DeviceColor::Monochrome { alpha, .. }
            | DeviceColor::Cmyk { alpha, .. }
            | DeviceColor::Pattern { alpha } => alpha,
        }
    }
}

impl From<Color> for DeviceColor {
    fn from(color: Color) -> Self {
        DeviceColor::Rgb(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_opaque_black() {
        assert_eq!(Color::default(), Color::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn rgba8_truncates() {
        // 0.999 * 255 = 254.745 -> 254
        assert_eq!(Color::new(0.999, 0.5, 0.0, 1.0).to_rgba8(), [254, 127, 0, 255]);
    }

    #[test]
    fn rgba8_clamps_out_of_range() {
        assert_eq!(Color::new(-0.5, 1.5, f64::NAN, 2.0).to_rgba8(), [0, 255, 0, 255]);
    }

    #[test]
    fn display_is_uppercase_rgb() {
        assert_eq!(Color::from_rgba8([0x1e, 0x29, 0x3b, 0x80]).to_string(), "#1E293B");
    }

    #[test]
    fn monochrome_expands_to_gray() {
        let gray = DeviceColor::Monochrome { white: 0.5, alpha: 0.25 };
        assert_eq!(gray.rgb_components(), Some(Color::new(0.5, 0.5, 0.5, 0.25)));
        assert_eq!(gray.model(), ColorModel::Monochrome);
    }

    #[test]
    fn cmyk_and_pattern_have_no_rgb() {
        let cmyk = DeviceColor::Cmyk {
            cyan: 1.0,
            magenta: 0.0,
            yellow: 0.0,
            black: 0.0,
            alpha: 1.0,
        };
        assert!(cmyk.rgb_components().is_none());
        assert!(DeviceColor::Pattern { alpha: 1.0 }.rgb_components().is_none());
        assert!(!ColorModel::Cmyk.has_rgb_components());
        assert!(ColorModel::Monochrome.has_rgb_components());
    }

    #[test]
    fn device_color_json_shape() {
        let json = serde_json::to_value(DeviceColor::from(Color::rgb(1.0, 0.0, 0.5))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "model": "rgb", "red": 1.0, "green": 0.0, "blue": 0.5, "alpha": 1.0 })
        );

        let pattern: DeviceColor =
            serde_json::from_str(r#"{ "model": "pattern", "alpha": 0.5 }"#).unwrap();
        assert_eq!(pattern, DeviceColor::Pattern { alpha: 0.5 });
    }
}
