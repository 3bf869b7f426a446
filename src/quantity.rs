//! Numeric and time normalization for amounts parsed out of recipe markup.

/// Parses an amount string into a number.
///
/// Accepts a plain floating-point literal or a single `a/b` fraction where
/// both sides are floating-point literals. Anything else is non-numeric and
/// yields `None`; the caller keeps the original text for display.
pub fn parse_number(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(value) = s.parse::<f64>() {
        if value.is_finite() {
            return Some(value);
        }
        return None;
    }
    let parts: Vec<&str> = s.split('/').collect();
    if parts.len() == 2 {
        let numerator: f64 = parts[0].trim().parse().ok()?;
        let denominator: f64 = parts[1].trim().parse().ok()?;
        let value = numerator / denominator;
        if value.is_finite() {
            return Some(value);
        }
    }
    None
}

/// Converts a quantity and unit into seconds.
///
/// The unit is matched case-insensitively by its first letter: `s*` is
/// seconds, `m*` is minutes, `h*` is hours. An unknown unit or a
/// non-positive quantity yields `0`.
pub fn to_seconds(quantity: f64, unit: &str) -> f64 {
    if quantity <= 0.0 {
        return 0.0;
    }
    match unit.trim().chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('s') => quantity,
        Some('m') => quantity * 60.0,
        Some('h') => quantity * 60.0 * 60.0,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(parse_number("3"), Some(3.0));
        assert_eq!(parse_number("2.5"), Some(2.5));
        assert_eq!(parse_number(" 125 "), Some(125.0));
    }

    #[test]
    fn parses_fractions() {
        assert_eq!(parse_number("1/4"), Some(0.25));
        assert_eq!(parse_number("1/2"), Some(0.5));
        assert_eq!(parse_number("3 / 4"), Some(0.75));
    }

    #[test]
    fn rejects_non_numeric_amounts() {
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("a pinch"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("1/2/3"), None);
        assert_eq!(parse_number("1/x"), None);
        assert_eq!(parse_number("1/0"), None);
    }

    #[test]
    fn converts_units_to_seconds() {
        assert_eq!(to_seconds(30.0, "seconds"), 30.0);
        assert_eq!(to_seconds(2.0, "minutes"), 120.0);
        assert_eq!(to_seconds(1.0, "minute"), 60.0);
        assert_eq!(to_seconds(0.25, "hour"), 900.0);
    }

    #[test]
    fn unit_matching_is_case_insensitive() {
        assert_eq!(to_seconds(30.0, "Seconds"), 30.0);
        assert_eq!(to_seconds(0.5, "Hour"), 1800.0);
        assert_eq!(to_seconds(1.0, "MIN"), 60.0);
    }

    #[test]
    fn unknown_units_and_bad_quantities_are_zero() {
        assert_eq!(to_seconds(5.0, "days"), 0.0);
        assert_eq!(to_seconds(5.0, ""), 0.0);
        assert_eq!(to_seconds(0.0, "minutes"), 0.0);
        assert_eq!(to_seconds(-1.0, "minutes"), 0.0);
    }
}
