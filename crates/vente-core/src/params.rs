// ABOUTME: Tolerant parsing of request query parameters into typed field values.
// ABOUTME: Missing or blank parameters become None; present but malformed values are errors.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Errors raised when a supplied parameter cannot be read as its field type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("invalid value for '{field}': {value:?}")]
    Invalid { field: &'static str, value: String },
}

/// Timestamp layouts accepted for order dates, tried in order.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse an optional numeric parameter. A missing or blank value yields `None`.
pub fn parse_number<T: FromStr>(
    field: &'static str,
    raw: Option<&str>,
) -> Result<Option<T>, ParamError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse::<T>().map(Some).map_err(|_| ParamError::Invalid {
            field,
            value: value.to_string(),
        }),
    }
}

/// Parse an optional decimal parameter that must be a finite number.
/// `inf` and `NaN` parse as `f64` but cannot be represented in JSON output.
pub fn parse_finite(field: &'static str, raw: Option<&str>) -> Result<Option<f64>, ParamError> {
    match parse_number::<f64>(field, raw)? {
        Some(value) if !value.is_finite() => Err(ParamError::Invalid {
            field,
            value: raw.unwrap_or_default().trim().to_string(),
        }),
        parsed => Ok(parsed),
    }
}

/// Parse an optional timestamp parameter.
///
/// Accepts `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DD HH:MM:SS` (both with optional
/// fractional seconds) and a bare `YYYY-MM-DD`, which is read as midnight.
pub fn parse_datetime(
    field: &'static str,
    raw: Option<&str>,
) -> Result<Option<NaiveDateTime>, ParamError> {
    let value = match raw.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(value) => value,
    };

    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(Some(parsed));
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(Some)
        .ok_or_else(|| ParamError::Invalid {
            field,
            value: value.to_string(),
        })
}
