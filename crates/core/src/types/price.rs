//! Price text handling for the add-product form.
//!
//! The price input always shows the currency symbol in front of whatever the
//! user typed. Submitting strips the symbol and parses the rest leniently: the
//! longest numeric prefix wins and anything unparsable becomes "no price"
//! instead of an error.

/// Symbol pinned to the front of the price field.
pub const CURRENCY_SYMBOL: char = '$';

/// Remove the currency symbol from raw price text.
///
/// Only the first occurrence is removed, wherever the cursor put it, so a
/// symbol the user typed on purpose further along is kept.
#[must_use]
pub fn strip_currency_symbol(text: &str) -> String {
    text.find(CURRENCY_SYMBOL).map_or_else(
        || text.to_string(),
        |index| {
            let mut stripped = text.to_string();
            stripped.remove(index);
            stripped
        },
    )
}

/// Text the price field displays after the user typed `raw`.
#[must_use]
pub fn price_field_text(raw: &str) -> String {
    format!("{CURRENCY_SYMBOL}{}", strip_currency_symbol(raw))
}

/// Parse price field text into a number.
///
/// Leading whitespace after the symbol is ignored and trailing garbage is
/// dropped (`"$12abc"` is `12`). Text with no numeric prefix, or a value that
/// is not finite, yields `None`.
#[must_use]
pub fn parse_price(text: &str) -> Option<f64> {
    let remainder = strip_currency_symbol(text);
    numeric_prefix(remainder.trim_start())
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Plain text form of a price, without currency formatting.
///
/// Whole numbers drop the fraction (`10`), others keep their shortest
/// representation (`12.5`, `9.99`). Negative zero prints as `0`. Magnitudes
/// from `1e21` up and below `1e-6` switch to exponent form with an explicit
/// exponent sign (`1e+21`, `1.5e-7`).
#[must_use]
#[allow(clippy::float_cmp)] // Exact zero check, catches -0.0 as well
pub fn format_price(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !(EXPONENT_BELOW..EXPONENT_FROM).contains(&magnitude) {
        let text = format!("{value:e}");
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => text,
        };
    }

    value.to_string()
}

/// Smallest magnitude printed in positional form.
const EXPONENT_BELOW: f64 = 1e-6;

/// Magnitude from which prices print in exponent form.
const EXPONENT_FROM: f64 = 1e21;

/// Longest prefix of `text` that reads as a decimal float literal.
fn numeric_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes
            .iter()
            .skip(start)
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_digits = digits_from(end + 1 + sign);
        if exp_digits > 0 {
            end += 1 + sign + exp_digits;
        }
    }

    text.get(..end).unwrap_or_default()
}
