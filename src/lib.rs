#[cfg(feature = "napi")]
#[macro_use]
extern crate napi_derive;

pub mod codec;
pub mod color;
pub mod engine;
pub mod error;
pub mod types;

#[cfg(feature = "napi")]
mod bindings;

pub use codec::{alpha_of, color_from_hex_int, parse_hex_string, to_hex_string, to_hex_string_with};
pub use color::{Color, ColorModel, DeviceColor, HexFormat};
pub use error::{FormatIssue, HexColorError};
