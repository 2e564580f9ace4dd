use rayon::prelude::*;

use crate::codec::{parse_css_color, parse_hex_string, to_hex_string_with};
use crate::color::Color;
use crate::error::Result;
use crate::types::{ResolveOptions, ResolvedColor};

/// Resolve many color strings in parallel, substituting the fallback for any
/// value that does not parse.
///
/// Uses Rayon's `par_iter()`; each value is parsed independently and the
/// output keeps the order of `options.values`.
///
/// Fails only when `options.fallback` itself is not a valid color.
pub fn resolve_colors(options: &ResolveOptions) -> Result<Vec<ResolvedColor>> {
    let lenient = options.lenient.unwrap_or(false);
    let parse = |value: &str| -> Result<Color> {
        if lenient {
            parse_css_color(value)
        } else {
            parse_hex_string(value)
        }
    };

    let format = options.hex_format();
    let fallback = parse(options.fallback.as_str())?;
    let fallback_hex = to_hex_string_with(fallback, format)?;

    options
        .values
        .par_iter()
        .map(|input| match parse(input.as_str()) {
            Ok(color) => Ok(ResolvedColor {
                input: input.clone(),
                hex: to_hex_string_with(color, format)?,
                alpha: color.alpha,
                used_fallback: false,
                error: None,
            }),
            Err(err) => {
                log::debug!("using fallback {fallback_hex} for {input:?}: {err}");
                Ok(ResolvedColor {
                    input: input.clone(),
                    hex: fallback_hex.clone(),
                    alpha: fallback.alpha,
                    used_fallback: true,
                    error: Some(err.to_string()),
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HexColorError;

    fn make_options(values: &[&str], fallback: &str) -> ResolveOptions {
        ResolveOptions {
            values: values.iter().map(|v| v.to_string()).collect(),
            fallback: fallback.to_string(),
            lenient: None,
            include_alpha: None,
        }
    }

    #[test]
    fn valid_values_resolve() {
        let results = resolve_colors(&make_options(&["#ff00ff", "0x00ff00"], "#000000")).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].hex, "#FF00FF");
        assert_eq!(results[1].hex, "#00FF00");
        assert!(results.iter().all(|r| !r.used_fallback && r.error.is_none()));
    }

    #[test]
    fn invalid_value_uses_fallback() {
        let results = resolve_colors(&make_options(&["#abc"], "#112233")).unwrap();
        assert_eq!(results[0].input, "#abc");
        assert_eq!(results[0].hex, "#112233");
        assert_eq!(results[0].alpha, 1.0);
        assert!(results[0].used_fallback);
        assert!(results[0].error.as_deref().unwrap().contains("got 3"));
    }

    #[test]
    fn invalid_fallback_is_an_error() {
        let err = resolve_colors(&make_options(&["#ffffff"], "nope")).unwrap_err();
        assert!(matches!(err, HexColorError::InvalidFormat { .. }));
    }

    #[test]
    fn lenient_accepts_css_syntax() {
        let mut options = make_options(&["red", "rgb(0, 0, 255)", "inherit"], "#808080");
        options.lenient = Some(true);
        let results = resolve_colors(&options).unwrap();
        assert_eq!(results[0].hex, "#FF0000");
        assert_eq!(results[1].hex, "#0000FF");
        assert_eq!(results[2].hex, "#808080");
        assert!(results[2].used_fallback);
    }

    #[test]
    fn strict_rejects_css_syntax() {
        let results = resolve_colors(&make_options(&["red"], "#808080")).unwrap();
        assert!(results[0].used_fallback);
    }

    #[test]
    fn include_alpha_emits_8_digits() {
        let mut options = make_options(&["#ff000080", "bad"], "#00000000");
        options.include_alpha = Some(true);
        let results = resolve_colors(&options).unwrap();
        assert_eq!(results[0].hex, "#FF000080");
        assert_eq!(results[1].hex, "#00000000");
        assert_eq!(results[1].alpha, 0.0);
    }

    #[test]
    fn no_values_returns_empty() {
        assert!(resolve_colors(&make_options(&[], "#000000")).unwrap().is_empty());
    }

    #[test]
    fn many_values_keep_order() {
        let values: Vec<String> = (0..500u32).map(|i| format!("#{:06X}", i * 997)).collect();
        let options = ResolveOptions {
            values: values.clone(),
            fallback: "#000000".to_string(),
            lenient: None,
            include_alpha: None,
        };
        let results = resolve_colors(&options).unwrap();
        assert_eq!(results.len(), 500);
        for (result, value) in results.iter().zip(&values) {
            assert_eq!(&result.input, value);
            assert_eq!(&result.hex, value);
        }
    }
}
