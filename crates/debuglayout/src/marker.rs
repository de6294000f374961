//! Ruler label formatting.
//!
//! Labels show at most one fractional digit and drop it for whole numbers
//! (`12.0` prints `12`, `12.5` prints `12.5`). Rounding is half away from
//! zero on every platform so labels agree everywhere.

use std::sync::Arc;

/// Formats tick values for ruler labels.
pub trait MarkerTextFormatter {
    /// Platform formatting; `None` when the value cannot be represented.
    fn try_format(&self, value: f32) -> Option<String>;

    /// Formats `value`, falling back to its default text representation.
    fn format(&self, value: f32) -> String {
        self.try_format(value)
            .unwrap_or_else(|| fallback_marker_text(value))
    }
}

pub type SharedMarkerFormatter = Arc<dyn MarkerTextFormatter + Send + Sync>;

/// Plain `1234.5` style, used on native targets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecimalMarkerFormatter;

impl MarkerTextFormatter for DecimalMarkerFormatter {
    fn try_format(&self, value: f32) -> Option<String> {
        to_tenths(value).map(|tenths| write_tenths(tenths, None))
    }
}

/// `en-US` style with thousands separators (`1,234.5`), matching the
/// browser number formatter on wasm targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GroupedMarkerFormatter {
    pub separator: char,
}

impl Default for GroupedMarkerFormatter {
    fn default() -> Self {
        Self { separator: ',' }
    }
}

impl MarkerTextFormatter for GroupedMarkerFormatter {
    fn try_format(&self, value: f32) -> Option<String> {
        to_tenths(value).map(|tenths| write_tenths(tenths, Some(self.separator)))
    }
}

/// Formatter for the platform this crate is compiled for.
#[cfg(target_arch = "wasm32")]
pub fn platform_marker_formatter() -> SharedMarkerFormatter {
    Arc::new(GroupedMarkerFormatter::default())
}

/// Formatter for the platform this crate is compiled for.
#[cfg(not(target_arch = "wasm32"))]
pub fn platform_marker_formatter() -> SharedMarkerFormatter {
    Arc::new(DecimalMarkerFormatter)
}

fn fallback_marker_text(value: f32) -> String {
    log::warn!("marker value {value} could not be formatted, using default representation");
    format!("{value}")
}

/// Rounds to an integer count of tenths, half away from zero.
fn to_tenths(value: f32) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    let tenths = (f64::from(value) * 10.0).round();
    if tenths.abs() >= i64::MAX as f64 {
        return None;
    }
    Some(tenths as i64)
}

fn write_tenths(tenths: i64, separator: Option<char>) -> String {
    let magnitude = tenths.unsigned_abs();
    let whole = (magnitude / 10).to_string();
    let fraction = magnitude % 10;

    let mut out = String::with_capacity(whole.len() + 4);
    if tenths < 0 {
        out.push('-');
    }
    match separator {
        Some(separator) => {
            for (index, digit) in whole.chars().enumerate() {
                if index > 0 && (whole.len() - index) % 3 == 0 {
                    out.push(separator);
                }
                out.push(digit);
            }
        }
        None => out.push_str(&whole),
    }
    if fraction != 0 {
        out.push('.');
        out.push(char::from(b'0' + fraction as u8));
    }
    out
}

#[cfg(test)]
#[path = "tests/marker_tests.rs"]
mod tests;
