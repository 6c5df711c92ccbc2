//! Parsing for display amounts such as `₹2.5Cr` or `₹10L`.
//!
//! Amounts are normalized to lakhs (1 crore = 100 lakhs) so investments and
//! funding figures can be compared numerically.

use once_cell::sync::Lazy;
use regex::Regex;

static AMOUNT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(?:₹|rs\.?|inr)?\s*([0-9]+(?:\.[0-9]+)?)\s*(cr|l|k)?\s*\+?\s*$")
        .expect("valid amount regex")
});

/// Converts a display amount into lakhs.
///
/// Returns `None` for placeholders like `-` and for unparsable text. A bare
/// number without unit is read as rupees.
pub fn parse_lakhs(raw: &str) -> Option<f64> {
    let caps = AMOUNT_RE.captures(raw)?;
    let value: f64 = caps.get(1)?.as_str().parse().ok()?;
    let unit = caps
        .get(2)
        .map(|m| m.as_str().to_ascii_lowercase())
        .unwrap_or_default();

    let lakhs = match unit.as_str() {
        "cr" => value * 100.0,
        "l" => value,
        "k" => value / 100.0,
        _ => value / 100_000.0,
    };
    Some(lakhs)
}

#[cfg(test)]
mod tests {
    use super::parse_lakhs;

    #[test]
    fn parses_crore_and_lakh_units() {
        assert_eq!(parse_lakhs("₹2.5Cr"), Some(250.0));
        assert_eq!(parse_lakhs("₹10L"), Some(10.0));
        assert_eq!(parse_lakhs("₹1Cr+"), Some(100.0));
    }

    #[test]
    fn placeholder_is_not_an_amount() {
        assert_eq!(parse_lakhs("-"), None);
        assert_eq!(parse_lakhs(""), None);
        assert_eq!(parse_lakhs("soon"), None);
    }
}
