//! Numeric field encoding and decoding.
//!
//! Numeric fields hold a zero-padded, right-justified digit string. The
//! sign, when a field carries one at all, is encoded in the final
//! character with an overpunch mark: the last digit is replaced by a
//! letter (or `'-'` for zero) from the sign alphabet.
//!
//! # Format
//!
//! For an 11-wide amount field holding -100.45 (two implied decimals):
//! - Magnitude scaled to an integer by truncation: 10045
//! - Zero-padded: `00000010045`
//! - Final digit 5 replaced by its negative mark: `0000001004N`

use rust_decimal::Decimal;

use crate::error::SpisuError;
use crate::Result;

/// Negative overpunch marks, indexed by the digit they replace.
const NEGATIVE_MARKS: [char; 10] = ['-', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R'];

/// Positive overpunch marks, accepted on decode.
const POSITIVE_MARKS: [char; 10] = ['{', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I'];

/// How a numeric field encodes its sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignMode {
    /// Digits only; the value's sign is discarded.
    #[default]
    Unsigned,
    /// The final digit is replaced by a negative mark when the value
    /// is negative; positive values render as plain digits.
    Overpunch,
    /// The final digit is always replaced by a negative mark,
    /// regardless of the value's sign. Used by the credit memo record
    /// family, where the mark identifies the row rather than encoding
    /// arithmetic sign.
    AlwaysMark,
}

/// Encode a decimal value into a fixed-width numeric field.
///
/// The magnitude is scaled by `10^decimals` with truncation (fractional
/// remainder beyond the implied scale is dropped, never rounded) and
/// rendered as digits left-padded with `'0'`. Fails with `ValueTooWide`
/// when the scaled magnitude has more digits than the field.
pub fn encode_numeric(
    value: &Decimal,
    width: usize,
    decimals: u32,
    sign: SignMode,
) -> Result<String> {
    let scale_factor = Decimal::from(10u64.pow(decimals));
    let scaled = (value.abs() * scale_factor).trunc();
    let digits = scaled.to_string();

    if digits.len() > width {
        return Err(SpisuError::ValueTooWide {
            digits: digits.len(),
            width,
        });
    }

    let mut encoded = format!("{:0>width$}", digits, width = width);

    let mark = match sign {
        SignMode::Unsigned => false,
        SignMode::Overpunch => value.is_sign_negative() && !value.is_zero(),
        SignMode::AlwaysMark => true,
    };
    if mark {
        let last = usize::from(digits.as_bytes()[digits.len() - 1] - b'0');
        encoded.pop();
        encoded.push(NEGATIVE_MARKS[last]);
    }

    Ok(encoded)
}

/// Decode a fixed-width numeric field back into a decimal value.
///
/// The field must be all digits, except that the final character may be
/// an overpunch mark from either sign alphabet. The implied decimal
/// point is reinserted according to `decimals`.
pub fn decode_numeric(field: &str, decimals: u32) -> Result<Decimal> {
    let invalid = || SpisuError::InvalidNumericField {
        text: field.to_string(),
    };

    let chars: Vec<char> = field.chars().collect();
    let Some((&last, digits)) = chars.split_last() else {
        return Err(invalid());
    };

    let mut magnitude: i64 = 0;
    for &c in digits {
        let d = c.to_digit(10).ok_or_else(invalid)?;
        magnitude = magnitude
            .checked_mul(10)
            .and_then(|m| m.checked_add(i64::from(d)))
            .ok_or_else(invalid)?;
    }

    let (final_digit, negative) = decode_sign_char(last).ok_or_else(invalid)?;
    magnitude = magnitude
        .checked_mul(10)
        .and_then(|m| m.checked_add(final_digit))
        .ok_or_else(invalid)?;

    let signed = if negative { -magnitude } else { magnitude };
    Ok(Decimal::new(signed, decimals))
}

/// Resolve a field's final character to its digit value and sign.
fn decode_sign_char(c: char) -> Option<(i64, bool)> {
    if let Some(d) = c.to_digit(10) {
        return Some((i64::from(d), false));
    }
    if let Some(d) = NEGATIVE_MARKS.iter().position(|&m| m == c) {
        return Some((d as i64, true));
    }
    if let Some(d) = POSITIVE_MARKS.iter().position(|&m| m == c) {
        return Some((d as i64, false));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_encode_zero_padded() {
        let value = Decimal::from(120);
        let encoded = encode_numeric(&value, 11, 0, SignMode::Unsigned).unwrap();
        assert_eq!(encoded, "00000000120");
    }

    #[test]
    fn test_encode_scales_by_implied_decimals() {
        let value = Decimal::from_str("100.45").unwrap();
        let encoded = encode_numeric(&value, 12, 2, SignMode::Overpunch).unwrap();
        assert_eq!(encoded, "000000010045");
    }

    #[test]
    fn test_encode_truncates_excess_fraction() {
        // 1189104.936 keeps only two implied decimals; the remainder
        // is dropped, not rounded.
        let value = Decimal::from_str("1189104.936").unwrap();
        let encoded = encode_numeric(&value, 13, 2, SignMode::Unsigned).unwrap();
        assert_eq!(encoded, "0000118910493");
    }

    #[test]
    fn test_encode_negative_overpunch() {
        let value = Decimal::from_str("-100.45").unwrap();
        let encoded = encode_numeric(&value, 12, 2, SignMode::Overpunch).unwrap();
        assert_eq!(encoded, "00000001004N");

        let value = Decimal::from_str("-10.58").unwrap();
        let encoded = encode_numeric(&value, 15, 2, SignMode::Overpunch).unwrap();
        assert_eq!(encoded, "00000000000105Q");
    }

    #[test]
    fn test_encode_overpunch_positive_is_plain() {
        let value = Decimal::from_str("100.45").unwrap();
        let encoded = encode_numeric(&value, 12, 2, SignMode::Overpunch).unwrap();
        assert_eq!(encoded, "000000010045");
    }

    #[test]
    fn test_encode_always_mark_ignores_sign() {
        // The credit memo convention: positive and negative inputs
        // produce the same marked output.
        let positive = Decimal::from_str("99.90").unwrap();
        let negative = Decimal::from_str("-99.90").unwrap();
        let a = encode_numeric(&positive, 11, 2, SignMode::AlwaysMark).unwrap();
        let b = encode_numeric(&negative, 11, 2, SignMode::AlwaysMark).unwrap();
        assert_eq!(a, "0000000999-");
        assert_eq!(a, b);

        let value = Decimal::from_str("10.54").unwrap();
        let encoded = encode_numeric(&value, 13, 2, SignMode::AlwaysMark).unwrap();
        assert_eq!(encoded, "000000000105M");
    }

    #[test]
    fn test_encode_unsigned_discards_sign() {
        let value = Decimal::from_str("-120").unwrap();
        let encoded = encode_numeric(&value, 5, 0, SignMode::Unsigned).unwrap();
        assert_eq!(encoded, "00120");
    }

    #[test]
    fn test_encode_rejects_too_wide() {
        let value = Decimal::from(123_456);
        let err = encode_numeric(&value, 5, 0, SignMode::Unsigned).unwrap_err();
        assert!(matches!(
            err,
            SpisuError::ValueTooWide { digits: 6, width: 5 }
        ));
    }

    #[test]
    fn test_encode_exact_width() {
        let value = Decimal::from(12_345);
        let encoded = encode_numeric(&value, 5, 0, SignMode::Unsigned).unwrap();
        assert_eq!(encoded, "12345");
    }

    #[test]
    fn test_decode_plain_digits() {
        let value = decode_numeric("000000010045", 2).unwrap();
        assert_eq!(value, Decimal::from_str("100.45").unwrap());

        let value = decode_numeric("0000001", 0).unwrap();
        assert_eq!(value, Decimal::from(1));
    }

    #[test]
    fn test_decode_negative_marks() {
        let value = decode_numeric("00000001004N", 2).unwrap();
        assert_eq!(value, Decimal::from_str("-100.45").unwrap());

        let value = decode_numeric("00000000000105Q", 2).unwrap();
        assert_eq!(value, Decimal::from_str("-10.58").unwrap());

        // '-' marks a final zero digit.
        let value = decode_numeric("0000000999-", 2).unwrap();
        assert_eq!(value, Decimal::from_str("-99.90").unwrap());
    }

    #[test]
    fn test_decode_positive_marks() {
        let value = decode_numeric("0012E", 0).unwrap();
        assert_eq!(value, Decimal::from(125));

        let value = decode_numeric("0012{", 0).unwrap();
        assert_eq!(value, Decimal::from(120));
    }

    #[test]
    fn test_decode_rejects_bad_structure() {
        // Mark anywhere but the final position.
        assert!(decode_numeric("00N45", 0).is_err());
        // Unknown character.
        assert!(decode_numeric("0012x", 0).is_err());
        // Blank (unset) field.
        assert!(decode_numeric("      ", 0).is_err());
        // Empty.
        assert!(decode_numeric("", 0).is_err());
    }

    #[test]
    fn test_roundtrip_without_overpunch() {
        for n in [0i64, 1, 120, 9_999_999] {
            let value = Decimal::from(n);
            let encoded = encode_numeric(&value, 12, 0, SignMode::Unsigned).unwrap();
            assert_eq!(decode_numeric(&encoded, 0).unwrap(), value);
        }
    }

    #[test]
    fn test_roundtrip_negative_overpunch() {
        let value = Decimal::from_str("-1234.55").unwrap();
        let encoded = encode_numeric(&value, 10, 2, SignMode::Overpunch).unwrap();
        assert_eq!(decode_numeric(&encoded, 2).unwrap(), value);
    }
}
