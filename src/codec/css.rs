use crate::codec::hex::{parse_hex_string, to_hex_string_with};
use crate::color::{Color, HexFormat};
use crate::error::{HexColorError, Result};

/// Parse any CSS color value into a [`Color`].
/// Handles: hex (3/4/6/8 digits), rgb, hsl, hwb, oklch, named colors, transparent.
/// Keywords that name no concrete color (inherit, currentColor, ...) are rejected.
///
/// Strict hex is tried first so `0x` prefixes and whitespace behave exactly as in
/// [`parse_hex_string`].
pub fn parse_css_color(value: &str) -> Result<Color> {
    let trimmed = value.trim();

    match trimmed.to_lowercase().as_str() {
        "inherit" | "currentcolor" | "initial" | "unset" => {
            return Err(HexColorError::UnrecognizedColor(value.to_string()))
        }
        _ => {}
    }

    let hex_err = match parse_hex_string(trimmed) {
        Ok(color) => return Ok(color),
        Err(err) => err,
    };

    log::trace!("{value:?} is not strict hex, trying css syntax");
    match trimmed.parse::<csscolorparser::Color>() {
        Ok(color) => Ok(Color::from_rgba8(color.to_rgba8())),
        // Looked like hex; the hex error says more than "unrecognized".
        Err(_) if trimmed.starts_with('#') || trimmed.starts_with("0x") => Err(hex_err),
        Err(_) => Err(HexColorError::UnrecognizedColor(value.to_string())),
    }
}

/// Convert any CSS color value to an uppercase hex string.
pub fn css_to_hex(value: &str, format: HexFormat) -> Result<String> {
    to_hex_string_with(parse_css_color(value)?, format)
}
