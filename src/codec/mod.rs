pub mod css;
pub mod hex;

pub use css::{css_to_hex, parse_css_color};
pub use hex::{alpha_of, color_from_hex_int, parse_hex_string, to_hex_string, to_hex_string_with};
