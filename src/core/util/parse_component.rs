/// Longest leading slice of `input` shaped like a decimal float: optional
/// sign, digits with an optional fraction, then an optional exponent that is
/// only taken when it has digits. Empty when no mantissa digit is present.
fn float_prefix(input: &str) -> &str {
    let bytes = input.as_bytes();
    let is_digit = |i: usize| bytes.get(i).is_some_and(u8::is_ascii_digit);
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while is_digit(end) {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while is_digit(frac_end) {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while is_digit(exp_end) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    &input[..end]
}

/// Lenient parse of one numeric component of a complex constant typed by a
/// user. Leading whitespace is skipped and the longest numeric prefix wins, so
/// `"0.156abc"` reads as `0.156`. No prefix, or a non-finite value, gives `0.0`.
#[must_use]
pub fn parse_component(input: &str) -> f64 {
    match float_prefix(input.trim_start()).parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_plain_numbers() {
        assert_eq!(parse_component("-0.8"), -0.8);
        assert_eq!(parse_component(" 0.156 "), 0.156);
        assert_eq!(parse_component("1e-3"), 0.001);
        assert_eq!(parse_component("+2"), 2.0);
        assert_eq!(parse_component("5."), 5.0);
    }

    #[test]
    fn test_trailing_text_keeps_leading_number() {
        assert_eq!(parse_component("0.156abc"), 0.156);
        assert_eq!(parse_component("-0.8,"), -0.8);
        assert_eq!(parse_component("1e"), 1.0);
        assert_eq!(parse_component("  .5x"), 0.5);
        assert_eq!(parse_component("2e+"), 2.0);
        assert_eq!(parse_component("-.25.5"), -0.25);
    }

    #[test]
    fn test_invalid_input_defaults_to_zero() {
        assert_eq!(parse_component(""), 0.0);
        assert_eq!(parse_component("abc"), 0.0);
        assert_eq!(parse_component("-"), 0.0);
        assert_eq!(parse_component("."), 0.0);
        assert_eq!(parse_component("e5"), 0.0);
        assert_eq!(parse_component("NaN"), 0.0);
        assert_eq!(parse_component("inf"), 0.0);
        assert_eq!(parse_component("1e999"), 0.0);
    }
}
