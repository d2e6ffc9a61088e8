use super::domain::Trend;

/// Parses a display value like `"1 250 ppm"` or `"43.5"` by stripping every
/// character that is not a digit, sign, or decimal point first. Known
/// limitation carried from the source system: text with embedded digits
/// (footnote markers, unit suffixes with numbers) can merge into one number.
pub(crate) fn parse_metric(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|ch| ch.is_ascii_digit() || matches!(ch, '+' | '-' | '.'))
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

/// Delta between two parsed periods, formatted with an explicit sign and one
/// decimal place, plus the trend classification of the delta's sign.
pub(crate) fn signed_change(last_period: f64, actual: f64) -> (String, Trend) {
    let delta = actual - last_period;
    let trend = if delta > 0.0 {
        Trend::Up
    } else if delta < 0.0 {
        Trend::Down
    } else {
        Trend::Neutral
    };
    (format!("{delta:+.1}"), trend)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_decorated_numbers() {
        assert_eq!(parse_metric("42"), Some(42.0));
        assert_eq!(parse_metric("43.5"), Some(43.5));
        assert_eq!(parse_metric("-7.25"), Some(-7.25));
        assert_eq!(parse_metric("1 250 ppm"), Some(1250.0));
        assert_eq!(parse_metric("  55.0 %"), Some(55.0));
    }

    #[test]
    fn rejects_values_with_no_numeric_content() {
        assert_eq!(parse_metric("N/A"), None);
        assert_eq!(parse_metric(""), None);
        assert_eq!(parse_metric("pending"), None);
        assert_eq!(parse_metric("--"), None);
    }

    #[test]
    fn stripping_merges_embedded_digits() {
        // Pinned behavior, not an endorsement: "12 items, 3 open" parses as 123.
        assert_eq!(parse_metric("12 items, 3 open"), Some(123.0));
    }

    #[test]
    fn change_carries_explicit_sign_and_one_decimal() {
        assert_eq!(signed_change(40.0, 55.0), ("+15.0".to_string(), Trend::Up));
        assert_eq!(signed_change(10.0, 7.5), ("-2.5".to_string(), Trend::Down));
        assert_eq!(
            signed_change(12.0, 12.0),
            ("+0.0".to_string(), Trend::Neutral)
        );
    }
}
