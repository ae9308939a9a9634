//! Conversions between display text and numbers.
//!
//! The display always holds text, so every operation parses it, computes in
//! `f64`, and writes the result back as text. Both directions follow the
//! conventions of a browser calculator: lenient prefix parsing, and
//! non-finite values spelled out as `NaN` / `Infinity`.

use lazy_static::lazy_static;
use regex::Regex;

/// Display text longer than this is shown in scientific notation.
pub const MAX_PLAIN_DISPLAY_LEN: usize = 12;

/// Digits after the decimal point when the display switches to scientific notation.
const SCIENTIFIC_PRECISION: usize = 6;

/// Enough fractional digits to write any finite `f64` exactly in exponent form.
const EXACT_DIGITS: usize = 800;

lazy_static! {
    /// The longest leading run of the text that reads as a number.
    static ref NUMERIC_PREFIX: Regex = Regex::new(
        r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)"
    ).unwrap();
}

/// Parse display text into a number.
///
/// Leading whitespace is skipped and the longest numeric prefix is used, so
/// `"12."` reads as 12 and `"1e"` as 1. Text without a numeric prefix is `NaN`.
pub fn parse_number(text: &str) -> f64 {
    NUMERIC_PREFIX
        .find(text.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Format a number as display text.
///
/// Integers have no fractional part, other values use the shortest text that
/// round-trips, and very large or very small magnitudes switch to exponent
/// form with an explicit sign (`1e+21`, `1.5e-7`).
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
    // Also covers negative zero.
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        signed_exponent(&format!("{value:e}"))
    } else {
        format!("{value}")
    }
}

/// Render display text for the screen.
///
/// Text longer than [`MAX_PLAIN_DISPLAY_LEN`] characters is re-rendered in
/// scientific notation with six fractional digits; shorter text is returned
/// unchanged.
pub fn format_display(text: &str) -> String {
    if text.chars().count() <= MAX_PLAIN_DISPLAY_LEN {
        return text.to_string();
    }

    let value = parse_number(text);
    if !value.is_finite() {
        return format_number(value);
    }

    to_exponential(value, SCIENTIFIC_PRECISION)
}

/// Exponent form with `fraction_digits` digits after the point.
///
/// Ties round away from zero, so `1234562500000` becomes `1.234563e+12`.
fn to_exponential(value: f64, fraction_digits: usize) -> String {
    let exact = format!("{:.*e}", EXACT_DIGITS, value.abs());
    let Some((mantissa, exponent)) = exact.split_once('e') else {
        return signed_exponent(&format!("{:.*e}", fraction_digits, value));
    };
    let mut exponent: i32 = exponent.parse().unwrap_or_default();

    let digits: Vec<u8> = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    let (kept, rest) = digits.split_at(fraction_digits + 1);
    let mut kept = kept.to_vec();

    if rest.first().is_some_and(|&d| d >= 5) {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        // 9.999999|5 rolls over to 1.000000 with the next exponent.
        if carry {
            kept.insert(0, 1);
            kept.pop();
            exponent += 1;
        }
    }

    let mut text = String::with_capacity(fraction_digits + 8);
    if value < 0.0 {
        text.push('-');
    }
    text.push(char::from(b'0' + kept[0]));
    if fraction_digits > 0 {
        text.push('.');
        text.extend(kept[1..].iter().map(|&d| char::from(b'0' + d)));
    }
    let sign = if exponent < 0 { '-' } else { '+' };
    text.push_str(&format!("e{sign}{}", exponent.abs()));
    text
}

/// Insert `+` in front of a non-negative exponent (`1e21` becomes `1e+21`).
fn signed_exponent(text: &str) -> String {
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text.to_string(),
    }
}
