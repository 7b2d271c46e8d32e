// Number formatting for the display and the trace line

/// Format a double the way a browser prints it.
///
/// Integral values have no fractional part, `-0` prints as `0`, non-finite values
/// print as `Infinity`, `-Infinity` and `NaN`. Very large and very small magnitudes
/// switch to exponent notation with an explicit sign (`1e+21`, `1e-7`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        };
    }

    format!("{}", value)
}
