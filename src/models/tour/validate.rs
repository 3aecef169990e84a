//! Field-level checks for the tour form. Each returns `Some(message)` on failure.

/// Require at least `min` characters after trimming.
pub fn validate_min_chars(value: &str, min: usize, message: &str) -> Option<String> {
    if value.trim().chars().count() < min {
        return Some(message.to_string());
    }
    None
}

/// Require a non-blank value.
pub fn validate_required(value: &str, message: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some(message.to_string());
    }
    None
}

/// Parse a finite, non-negative decimal number.
///
/// The whole trimmed text must be a number: `"100abc"` is rejected rather than read as 100.
pub fn parse_non_negative(value: &str) -> Option<f64> {
    let n: f64 = value.trim().parse().ok()?;
    if n.is_finite() && n >= 0.0 { Some(n) } else { None }
}

/// Parse a whole number within `min..=max`.
///
/// No prefix parsing and no truncation: `"3.5"` and `"12abc"` are rejected,
/// not read as 3 and 12.
pub fn parse_int_in_range(value: &str, min: u32, max: u32) -> Option<u32> {
    let n: i64 = value.trim().parse().ok()?;
    if n < i64::from(min) || n > i64::from(max) {
        return None;
    }
    u32::try_from(n).ok()
}

/// Split a comma-separated list, trimming entries and dropping empty ones.
pub fn split_items(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
