//! Number formatting for the engine display.

/// Fractional digits kept when rendering a computed result.
const RESULT_PRECISION: usize = 10;

/// Render a computed value as raw entry text (no separators).
///
/// Integers print without a fractional part; other values keep up to
/// ten fractional digits with trailing zeros trimmed.
pub fn format_raw(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        // `as i64` also folds -0.0 into "0"
        format!("{}", value as i64)
    } else {
        let formatted = format!("{:.*}", RESULT_PRECISION, value);
        let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
        if trimmed == "-0" {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    }
}

/// Add thousand separators to the integer part of raw entry text.
///
/// The text is kept otherwise untouched, so a trailing `.` or trailing
/// fractional zeros being typed stay visible.
pub fn group_thousands(entry: &str) -> String {
    let (sign, unsigned) = match entry.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", entry),
    };
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(dot_pos) => unsigned.split_at(dot_pos),
        None => (unsigned, ""),
    };

    let mut grouped = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let int_grouped: String = grouped.chars().rev().collect();
    format!("{}{}{}", sign, int_grouped, frac_part)
}
