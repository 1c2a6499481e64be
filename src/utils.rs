/// Parse a numeric text field the way browser number inputs read it.
///
/// Leading whitespace is skipped and the longest numeric prefix wins, so
/// `"0.5px"` reads as `0.5` and `"12abc"` as `12`. `Infinity` (with an
/// optional sign) is accepted; callers clamp it into their range. Text with no
/// numeric prefix, including `NaN` and `inf`, yields `fallback`.
pub fn parse_f64_input(value: &str, fallback: f64) -> f64 {
    let text = value.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if text[end..].starts_with("Infinity") {
        return if bytes[0] == b'-' { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let digits_from = |start: usize| {
        start + bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count()
    };
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return fallback;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    text[..end].parse::<f64>().unwrap_or(fallback)
}

/// Clamp that keeps `fallback` for NaN instead of propagating it.
pub fn clamp_or(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        return fallback;
    }
    value.clamp(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_f64_input() {
        assert_eq!(parse_f64_input(" 0.42 ", 0.0), 0.42);
        assert_eq!(parse_f64_input("-1.5", 0.0), -1.5);
        assert_eq!(parse_f64_input("", 0.0), 0.0);
        assert_eq!(parse_f64_input("abc", 0.0), 0.0);
        assert_eq!(parse_f64_input("NaN", 0.0), 0.0);
        assert_eq!(parse_f64_input("inf", 7.0), 7.0);
    }

    #[test]
    fn test_parse_f64_input_reads_numeric_prefix() {
        assert_eq!(parse_f64_input("0.5px", 0.0), 0.5);
        assert_eq!(parse_f64_input("12abc", 0.0), 12.0);
        assert_eq!(parse_f64_input(".5", 0.0), 0.5);
        assert_eq!(parse_f64_input("5.", 0.0), 5.0);
        assert_eq!(parse_f64_input("+3", 0.0), 3.0);
        assert_eq!(parse_f64_input("1.5e2ms", 0.0), 150.0);
        assert_eq!(parse_f64_input("2e", 0.0), 2.0);
        assert_eq!(parse_f64_input("4e+x", 0.0), 4.0);
        assert_eq!(parse_f64_input("1.2.3", 0.0), 1.2);
        assert_eq!(parse_f64_input("-.", 9.0), 9.0);
        assert_eq!(parse_f64_input("px0.5", 9.0), 9.0);
    }

    #[test]
    fn test_parse_f64_input_infinity() {
        assert_eq!(parse_f64_input("Infinity", 0.0), f64::INFINITY);
        assert_eq!(parse_f64_input(" -Infinityx", 0.0), f64::NEG_INFINITY);
        assert_eq!(parse_f64_input("+Infinity", 0.0), f64::INFINITY);
        assert_eq!(parse_f64_input("infinity", 1.0), 1.0);
    }

    #[test]
    fn test_clamp_or() {
        assert_eq!(clamp_or(10.0, 0.5, 4.0, 1.0), 4.0);
        assert_eq!(clamp_or(-5.0, 0.5, 4.0, 1.0), 0.5);
        assert_eq!(clamp_or(f64::NAN, 0.5, 4.0, 1.0), 1.0);
    }
}
