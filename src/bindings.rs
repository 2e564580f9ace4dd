//! Node exports. Built only with the `napi` feature.

use napi::{Error, Result, Status};

use crate::codec;
use crate::color::{Color, DeviceColor};
use crate::types::{FormatOptions, ResolveOptions, ResolvedColor};

/// `color` arrives as a tagged JSON object, e.g. `{ model: "monochrome", white: 0.5, alpha: 1 }`.
fn device_color(color: serde_json::Value) -> Result<DeviceColor> {
    serde_json::from_value(color)
        .map_err(|e| Error::new(Status::InvalidArg, format!("invalid color object: {e}")))
}

#[napi]
pub fn health_check() -> String {
    "hex-color-native ok".to_string()
}

#[napi]
pub fn parse_hex_string(input: String) -> Result<Color> {
    Ok(codec::parse_hex_string(&input)?)
}

#[napi]
pub fn color_from_hex_int(hex: u32, alpha: Option<f64>) -> Color {
    codec::color_from_hex_int(hex, alpha.unwrap_or(1.0))
}

#[napi]
pub fn to_hex_string(color: serde_json::Value, options: Option<FormatOptions>) -> Result<String> {
    let format = options.unwrap_or_default().hex_format();
    Ok(codec::to_hex_string_with(device_color(color)?, format)?)
}

#[napi]
pub fn alpha_of(color: serde_json::Value) -> Result<f64> {
    Ok(codec::alpha_of(device_color(color)?))
}

#[napi]
pub fn css_to_hex(value: String, options: Option<FormatOptions>) -> Result<String> {
    let format = options.unwrap_or_default().hex_format();
    Ok(codec::css_to_hex(&value, format)?)
}

#[napi]
pub fn resolve_colors(options: ResolveOptions) -> Result<Vec<ResolvedColor>> {
    Ok(crate::engine::resolve_colors(&options)?)
}
