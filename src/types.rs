use serde::{Deserialize, Serialize};

use crate::color::HexFormat;

/// Formatting options passed from JS
#[cfg_attr(feature = "napi", napi(object))]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Emit `#RRGGBBAA` instead of `#RRGGBB`
    pub include_alpha: Option<bool>,
}

impl FormatOptions {
    pub fn hex_format(&self) -> HexFormat {
        if self.include_alpha.unwrap_or(false) {
            HexFormat::Rgba
        } else {
            HexFormat::Rgb
        }
    }
}

/// Configuration for a batch resolve
#[cfg_attr(feature = "napi", napi(object))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveOptions {
    pub values: Vec<String>,
    /// Used for every value that fails to parse; must itself parse.
    pub fallback: String,
    /// Accept any CSS color syntax, not just hex
    pub lenient: Option<bool>,
    pub include_alpha: Option<bool>,
}

impl ResolveOptions {
    pub fn hex_format(&self) -> HexFormat {
        FormatOptions {
            include_alpha: self.include_alpha,
        }
        .hex_format()
    }
}

/// One resolved value, in the same position as its input
#[cfg_attr(feature = "napi", napi(object))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedColor {
    pub input: String,
    pub hex: String,
    pub alpha: f64,
    pub used_fallback: bool,
    /// Parse error message when the fallback was used
    pub error: Option<String>,
}
