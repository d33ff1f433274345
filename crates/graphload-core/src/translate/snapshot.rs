//! Map snapshot parameter validation.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use crate::error::TranslateError;
use crate::protocol::Protocol;

const DEFAULT_STYLE: &str = "osm-intl";

/// Builds the renderer path
/// `/img/<style>,<zoom>,<lat>,<lon>,<width>x<height>@2x.png` from the query.
pub(super) fn snapshot_path(query: &BTreeMap<String, String>) -> Result<String, TranslateError> {
    let width = int_param(query, "width", 1..=4096)?;
    let height = int_param(query, "height", 1..=4096)?;
    let zoom = int_param(query, "zoom", 0..=22)?;
    let lat = float_param(query, "lat", -90.0..=90.0)?;
    let lon = float_param(query, "lon", -180.0..=180.0)?;
    let style = match query.get("style") {
        None => DEFAULT_STYLE,
        Some(style) if is_valid_style(style) => style.as_str(),
        Some(style) => return Err(invalid("style", format!("{style:?} is not a valid style name"))),
    };

    Ok(format!("/img/{style},{zoom},{lat},{lon},{width}x{height}@2x.png"))
}

fn is_valid_style(style: &str) -> bool {
    !style.is_empty()
        && style
            .chars()
            .all(|c| matches!(c, '-' | '_' | '0'..='9' | 'a'..='z'))
}

fn int_param(
    query: &BTreeMap<String, String>,
    field: &'static str,
    range: RangeInclusive<i64>,
) -> Result<i64, TranslateError> {
    let raw = required(query, field)?;
    let value: i64 = raw
        .parse()
        .map_err(|_| invalid(field, format!("{raw:?} is not an integer")))?;
    if !range.contains(&value) {
        return Err(invalid(
            field,
            format!("{value} is outside {}..={}", range.start(), range.end()),
        ));
    }
    Ok(value)
}

fn float_param(
    query: &BTreeMap<String, String>,
    field: &'static str,
    range: RangeInclusive<f64>,
) -> Result<f64, TranslateError> {
    let raw = required(query, field)?;
    let value: f64 = raw
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .ok_or_else(|| invalid(field, format!("{raw:?} is not a number")))?;
    if !range.contains(&value) {
        return Err(invalid(
            field,
            format!("{value} is outside {}..={}", range.start(), range.end()),
        ));
    }
    Ok(value)
}

fn required<'a>(
    query: &'a BTreeMap<String, String>,
    field: &'static str,
) -> Result<&'a str, TranslateError> {
    query
        .get(field)
        .map(String::as_str)
        .ok_or_else(|| invalid(field, "missing".to_string()))
}

fn invalid(field: &'static str, reason: String) -> TranslateError {
    TranslateError::InvalidParameter {
        protocol: Protocol::MapSnapshot.to_string(),
        field,
        reason,
    }
}
