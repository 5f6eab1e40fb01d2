//! Parsing of the raw calculator fields.
//!
//! The sample field is free text: comma-separated numbers, each trimmed of surrounding
//! whitespace. The alpha field is restricted to the range the calculator offers.

use crate::error::{Result, TTestError};
use crate::testing::Sample;
use std::str::FromStr;

pub const DEFAULT_SAMPLE: &str = "10, 12, 9, 11, 10, 13, 12";
pub const MIN_ALPHA: f64 = 0.01;
pub const MAX_ALPHA: f64 = 0.10;

impl FromStr for Sample {
    type Err = TTestError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Err(TTestError::EmptyInput);
        }

        let values = s
            .split(',')
            .enumerate()
            .map(|(index, token)| {
                let token = token.trim();
                token.parse::<f64>().map_err(|_| TTestError::InvalidNumber {
                    index,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        Sample::new(values)
    }
}

/// Parse a significance level and check it lies in [`MIN_ALPHA`, `MAX_ALPHA`].
///
/// The error is a plain message so it can double as a `clap` value parser.
pub fn parse_alpha(s: &str) -> std::result::Result<f64, String> {
    let alpha: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("{:?} is not a number", s.trim()))?;
    if !(MIN_ALPHA..=MAX_ALPHA).contains(&alpha) {
        return Err(format!(
            "significance level must be between {MIN_ALPHA:.2} and {MAX_ALPHA:.2}, got {alpha}"
        ));
    }
    Ok(alpha)
}

/// Parse the hypothesized mean field.
pub fn parse_null_mean(s: &str) -> std::result::Result<f64, String> {
    let mean: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("{:?} is not a number", s.trim()))?;
    if !mean.is_finite() {
        return Err(format!("hypothesized mean must be finite, got {mean}"));
    }
    Ok(mean)
}
