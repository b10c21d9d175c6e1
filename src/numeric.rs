//! Locale-aware number parsing.
//!
//! rrdtool formats floats through the process locale, so `value_*`
//! fields and quoted print payloads may carry either `,` or `.` as the
//! decimal separator.

/// Parse a decimal number whose separator may be a comma or a dot.
///
/// Accepts at most one decimal separator and an optional
/// scientific-notation suffix (`1,4626943333e+00`). Returns `None` for
/// anything else.
pub fn parse_localized_float(input: &str) -> Option<f64> {
    if input.chars().filter(|&c| c == ',' || c == '.').count() > 1 {
        return None;
    }
    input.replace(',', ".").parse().ok()
}
