//! Floating-point edge handling shared by the parser and the formatter.
//!
//! Sexagesimal decomposition multiplies fractional parts by 60 twice, so values that
//! should be whole (59.999999999 minutes) drift just below an integer. These helpers
//! absorb that drift before anything is rendered or range-checked.

use std::fmt;

pub const DEFAULT_EPSILON: f64 = 1.0e-8;

/// Floor of `x`, rounding up instead when `x` sits within [`DEFAULT_EPSILON`] of the
/// next integer.
///
/// ```
/// use radec::numeric::safe_floor;
/// assert_eq!(safe_floor(59.999999995), 60);
/// assert_eq!(safe_floor(59.9), 59);
/// ```
pub fn safe_floor(x: f64) -> i64 {
    safe_floor_with(x, DEFAULT_EPSILON)
}

pub fn safe_floor_with(x: f64, epsilon: f64) -> i64 {
    let floor = x.floor();
    if floor + 1.0 - x < epsilon {
        floor as i64 + 1
    } else {
        floor as i64
    }
}

/// Returns `0.0` when `|x|` is below [`DEFAULT_EPSILON`], otherwise `x`.
pub fn snap_to_zero(x: f64) -> f64 {
    snap_to_zero_with(x, DEFAULT_EPSILON)
}

pub fn snap_to_zero_with(x: f64, epsilon: f64) -> f64 {
    if x.abs() < epsilon { 0.0 } else { x }
}

/// Truncates (does not round) `x` to `digits` decimal places.
pub fn truncate_decimal(x: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits as i32);
    (x * scale).floor() / scale
}

/// Left-pads the integer part of a rendered number with zeros up to `width` digits.
///
/// The value is rendered with its `Display` impl first, so an already formatted
/// string such as `"9.880"` keeps its fractional digits exactly. A leading `-` or `+`
/// stays in front of the padding.
///
/// ```
/// use radec::numeric::zero_pad;
/// assert_eq!(zero_pad(5, 2), "05");
/// assert_eq!(zero_pad("-9.880", 2), "-09.880");
/// assert_eq!(zero_pad(51234, 3), "51234");
/// ```
pub fn zero_pad<T: fmt::Display>(value: T, width: usize) -> String {
    let text = value.to_string();
    let (sign, magnitude) = if text.starts_with(['-', '+']) {
        text.split_at(1)
    } else {
        ("", text.as_str())
    };
    let whole_digits = magnitude.find('.').unwrap_or(magnitude.len());
    let padding = width.saturating_sub(whole_digits);
    format!("{}{}{}", sign, "0".repeat(padding), magnitude)
}
