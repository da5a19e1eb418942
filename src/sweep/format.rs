//! printf-style number formatting.

/// Format `value` in scientific notation with `precision` fractional digits
/// and a signed, at least two-digit exponent (`1.5e-3` -> `1.500e-03`).
///
/// Rust's `{:e}` writes `1.500e-3` and `1.500e0`; plotting tools and the
/// existing data files expect the C layout.
pub fn scientific(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return format!("{value}").to_lowercase();
    }

    let raw = format!("{value:.precision$e}");
    match raw.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", exp.abs())
            }
            Err(_) => raw,
        },
        None => raw,
    }
}
