use std::fmt;

use crate::color::ColorModel;

/// What was wrong with a hex string after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatIssue {
    /// Number of characters left after normalization (must be 6 or 8).
    Length(usize),
    /// First character that is not a hex digit.
    Digit(char),
}

impl fmt::Display for FormatIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatIssue::Length(n) => write!(f, "expected 6 or 8 hex digits, got {n}"),
            FormatIssue::Digit(c) => write!(f, "{c:?} is not a hex digit"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HexColorError {
    #[error("invalid hex color {input:?}: {issue}")]
    InvalidFormat { input: String, issue: FormatIssue },

    #[error("{0} colors have no RGB components to format as hex")]
    UnsupportedColorSpace(ColorModel),

    #[error("unrecognized color value {0:?}")]
    UnrecognizedColor(String),
}

impl HexColorError {
    pub(crate) fn invalid(input: &str, issue: FormatIssue) -> Self {
        HexColorError::InvalidFormat {
            input: input.to_string(),
            issue,
        }
    }
}

#[cfg(feature = "napi")]
impl From<HexColorError> for napi::Error {
    fn from(err: HexColorError) -> Self {
        napi::Error::new(napi::Status::InvalidArg, err.to_string())
    }
}

pub type Result<T, E = HexColorError> = std::result::Result<T, E>;
