use crate::color::{channel_byte, Color, DeviceColor, HexFormat};
use crate::error::{FormatIssue, HexColorError, Result};

/// Trim whitespace, drop every `#` and `0x`, uppercase.
fn normalize(input: &str) -> String {
    input
        .trim()
        .replace('#', "")
        .replace("0x", "")
        .to_ascii_uppercase()
}

/// Parse a hex color string into a [`Color`].
///
/// Accepts `RRGGBB` or `RRGGBBAA`, case-insensitive, with any number of `#` / `0x`
/// prefixes and surrounding whitespace. Six digits imply an opaque alpha.
///
/// Fails with [`HexColorError::InvalidFormat`] when the normalized string is not
/// 6 or 8 characters long or holds a non-hex character.
pub fn parse_hex_string(input: &str) -> Result<Color> {
    let hex = normalize(input);

    let len = hex.chars().count();
    if len != 6 && len != 8 {
        return Err(HexColorError::invalid(input, FormatIssue::Length(len)));
    }
    if let Some(c) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(HexColorError::invalid(input, FormatIssue::Digit(c)));
    }

    // ASCII from here on, so byte offsets are char offsets.
    let pair = |i: usize| -> Result<u8> {
        let digits = &hex[i..i + 2];
        u8::from_str_radix(digits, 16).map_err(|_| {
            let c = digits.chars().next().unwrap_or('?');
            HexColorError::invalid(input, FormatIssue::Digit(c))
        })
    };

    let alpha = if len == 8 { pair(6)? } else { 0xFF };
    Ok(Color::from_rgba8([pair(0)?, pair(2)?, pair(4)?, alpha]))
}

/// Build a color from a packed `0xRRGGBB` integer.
///
/// Bits above 23 are ignored. `alpha` is stored as given, without range checks.
pub fn color_from_hex_int(hex: u32, alpha: f64) -> Color {
    let [_, r, g, b] = hex.to_be_bytes();
    Color::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0, alpha)
}

/// Format a color as `#RRGGBB` (uppercase). Alpha is not emitted.
pub fn to_hex_string(color: impl Into<DeviceColor>) -> Result<String> {
    to_hex_string_with(color, HexFormat::Rgb)
}

/// Format a color as `#RRGGBB` or `#RRGGBBAA`.
///
/// Each channel is multiplied by 255 and truncated toward zero. Colors whose
/// model has no RGB components (CMYK, patterns) fail with
/// [`HexColorError::UnsupportedColorSpace`].
pub fn to_hex_string_with(color: impl Into<DeviceColor>, format: HexFormat) -> Result<String> {
    let color = color.into();
    let rgba = color
        .rgb_components()
        .ok_or(HexColorError::UnsupportedColorSpace(color.model()))?;

    let [r, g, b, _] = rgba.to_rgba8();
    Ok(match format {
        HexFormat::Rgb => format!("#{:02X}{:02X}{:02X}", r, g, b),
        HexFormat::Rgba => format!(
            "#{:02X}{:02X}{:02X}{:02X}",
            r,
            g,
            b,
            channel_byte(rgba.alpha)
        ),
    })
}

/// Alpha channel of any color, whatever its model.
pub fn alpha_of(color: impl Into<DeviceColor>) -> f64 {
    color.into().alpha()
}

impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        color_from_hex_int(hex, 1.0)
    }
}

impl std::str::FromStr for Color {
    type Err = HexColorError;

    fn from_str(s: &str) -> Result<Self> {
        parse_hex_string(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = HexColorError;

    fn try_from(value: &str) -> Result<Self> {
        parse_hex_string(value)
    }
}
