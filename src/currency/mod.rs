//! Amount parsing and display formatting shared by the ledger and the view.

/// Default currency code used when the configuration names none.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Maps an ISO 4217 code to the symbol prefixed to displayed amounts.
pub fn symbol_for(code: &str) -> String {
    match code.to_uppercase().as_str() {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "AUD" => "A$".into(),
        "CAD" => "C$".into(),
        _ => code.into(),
    }
}

/// Formats an amount for display: whole values carry no decimal places,
/// anything else exactly two.
///
/// An amount sitting exactly on a half cent (only odd multiples of 1/8 are)
/// rounds away from zero, so `0.125` shows as `0.13`. Values that merely
/// print like a half cent, such as `1.005`, keep their nearest rounding.
pub fn format_amount(value: f64) -> String {
    // Normalizes negative zero so it never renders as "-0".
    let value = if value == 0.0 { 0.0 } else { value };
    if !value.is_finite() {
        return non_finite(value).to_string();
    }
    if value.fract() == 0.0 {
        return format!("{:.0}", value);
    }

    let eighths = value.abs() * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        // An odd number of eighths is a half cent: 25 * eighths half-cents.
        let cents = (eighths as u64 * 25 + 1) / 2;
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{}{}.{:02}", sign, cents / 100, cents % 100);
    }
    format!("{:.2}", value)
}

fn non_finite(value: f64) -> &'static str {
    if value.is_nan() {
        "NaN"
    } else if value > 0.0 {
        "Infinity"
    } else {
        "-Infinity"
    }
}

/// Formats an amount with the currency symbol prefixed, e.g. `$49.50`.
pub fn format_money(symbol: &str, value: f64) -> String {
    format!("{}{}", symbol, format_amount(value))
}

/// Parses the longest numeric prefix of `input`, after leading whitespace.
///
/// Accepts an optional sign, digits with an optional fraction, and an
/// optional exponent, so `"12abc"` yields `12.0` and `".5"` yields `0.5`.
/// `"Infinity"` with an optional sign is recognized as well. Returns `None`
/// when no digits lead the text.
pub fn parse_amount(input: &str) -> Option<f64> {
    let text = input.trim_start();
    let bytes = text.as_bytes();
    let mut idx = 0;

    let mut literal = String::new();
    if let Some(&sign) = bytes.first() {
        if sign == b'+' || sign == b'-' {
            literal.push(sign as char);
            idx += 1;
        }
    }

    if text[idx..].starts_with("Infinity") {
        return Some(if literal == "-" {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = idx;
    while idx < bytes.len() && bytes[idx].is_ascii_digit() {
        idx += 1;
    }
    let int_digits = &text[int_start..idx];

    let mut frac_digits = "";
    if idx < bytes.len() && bytes[idx] == b'.' {
        let frac_start = idx + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        frac_digits = &text[frac_start..end];
        idx = end;
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    literal.push_str(if int_digits.is_empty() { "0" } else { int_digits });
    if !frac_digits.is_empty() {
        literal.push('.');
        literal.push_str(frac_digits);
    }

    if idx < bytes.len() && (bytes[idx] == b'e' || bytes[idx] == b'E') {
        let mut end = idx + 1;
        let mut exponent = String::from("e");
        if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
            exponent.push(bytes[end] as char);
            end += 1;
        }
        let digits_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end > digits_start {
            exponent.push_str(&text[digits_start..end]);
            literal.push_str(&exponent);
        }
    }

    literal.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_amounts_drop_decimals() {
        assert_eq!(format_money("$", 50.0), "$50");
        assert_eq!(format_money("$", 500.0), "$500");
        assert_eq!(format_money("$", 0.0), "$0");
        assert_eq!(format_money("$", -0.0), "$0");
    }

    #[test]
    fn fractional_amounts_use_two_places() {
        assert_eq!(format_money("$", 49.5), "$49.50");
        assert_eq!(format_money("$", 23.5), "$23.50");
        assert_eq!(format_money("$", 0.1 + 0.2), "$0.30");
        assert_eq!(format_money("$", -10.5), "$-10.50");
        assert_eq!(format_amount(1.005), "1.00");
        assert_eq!(format_amount(2.675), "2.67");
    }

    #[test]
    fn exact_half_cents_round_away_from_zero() {
        assert_eq!(format_amount(0.125), "0.13");
        assert_eq!(format_amount(0.375), "0.38");
        assert_eq!(format_amount(0.625), "0.63");
        assert_eq!(format_amount(10.125), "10.13");
        assert_eq!(format_amount(-0.125), "-0.13");
        assert_eq!(format_money("$", 12.875), "$12.88");
        assert_eq!(format_amount(0.5), "0.50");
    }

    #[test]
    fn non_finite_values_are_spelled_out() {
        assert_eq!(format_money("$", f64::INFINITY), "$Infinity");
        assert_eq!(format_money("$", f64::NEG_INFINITY), "$-Infinity");
        assert_eq!(format_amount(f64::NAN), "NaN");
    }

    #[test]
    fn parses_leading_numeric_prefix() {
        assert_eq!(parse_amount("500"), Some(500.0));
        assert_eq!(parse_amount("  23.5"), Some(23.5));
        assert_eq!(parse_amount("12abc"), Some(12.0));
        assert_eq!(parse_amount(".5"), Some(0.5));
        assert_eq!(parse_amount("5."), Some(5.0));
        assert_eq!(parse_amount("-3"), Some(-3.0));
        assert_eq!(parse_amount("1e3"), Some(1000.0));
        assert_eq!(parse_amount("2e"), Some(2.0));
        assert_eq!(parse_amount("-Infinity"), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn rejects_text_without_leading_digits() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("$5"), None);
        assert_eq!(parse_amount("-"), None);
        assert_eq!(parse_amount("."), None);
    }

    #[test]
    fn symbols_follow_currency_code() {
        assert_eq!(symbol_for("usd"), "$");
        assert_eq!(symbol_for("EUR"), "€");
        assert_eq!(symbol_for("CHF"), "CHF");
    }
}
