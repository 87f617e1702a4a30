//! JavaScript-style numeric coercion.
//!
//! CSV fields arrive as text; the charts coerce them to numbers the way the
//! browser exercise did. Junk text coerces to `NaN` rather than failing the
//! load — broken numbers yield broken visuals, not a structured failure.

/// Leading-integer-prefix parse (`parseInt` semantics): skip whitespace,
/// take an optional sign and the longest digit prefix. No digits -> NaN.
pub fn parse_int(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let prefix: String = digits.chars().take_while(char::is_ascii_digit).collect();
    match prefix.parse::<f64>() {
        Ok(n) => sign * n,
        Err(_) => f64::NAN,
    }
}

/// Leading-float-prefix parse (`parseFloat` semantics). No numeric prefix
/// -> NaN.
pub fn parse_float(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let mut end = 0;
    let bytes = trimmed.as_bytes();
    if end < bytes.len() && (bytes[end] == b'-' || bytes[end] == b'+') {
        end += 1;
    }
    let mut seen_digit = false;
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if !seen_digit {
        return f64::NAN;
    }
    // An exponent only counts when digits actually follow the `e`.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp = end + 1;
        if exp < bytes.len() && (bytes[exp] == b'-' || bytes[exp] == b'+') {
            exp += 1;
        }
        let digits = bytes[exp..].iter().take_while(|b| b.is_ascii_digit()).count();
        if digits > 0 {
            end = exp + digits;
        }
    }
    trimmed[..end].parse().unwrap_or(f64::NAN)
}

/// Whole-string coercion (unary `+` semantics): empty/blank text is 0,
/// anything that is not entirely a number is NaN.
pub fn to_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_prefix_parse() {
        assert_eq!(parse_int("3"), 3.0);
        assert_eq!(parse_int("  42px"), 42.0);
        assert_eq!(parse_int("-7.9"), -7.0);
        assert!(parse_int("px42").is_nan());
        assert!(parse_int("").is_nan());
    }

    #[test]
    fn float_prefix_parse() {
        assert_eq!(parse_float("1.5"), 1.5);
        assert_eq!(parse_float("2.5em"), 2.5);
        assert_eq!(parse_float("-0.25"), -0.25);
        assert!(parse_float("junk").is_nan());
    }

    #[test]
    fn float_exponent_prefix() {
        assert_eq!(parse_float("1.5e3"), 1500.0);
        assert_eq!(parse_float("2E-2pt"), 0.02);
        // A bare `e` with no digits is not an exponent.
        assert_eq!(parse_float("1.5e"), 1.5);
        assert_eq!(parse_float("3e+"), 3.0);
    }

    #[test]
    fn whole_string_coercion() {
        assert_eq!(to_number("1930"), 1930.0);
        assert_eq!(to_number("  3.14 "), 3.14);
        assert_eq!(to_number(""), 0.0);
        assert!(to_number("12x").is_nan());
    }
}
