//! Alphanumeric field encoding and decoding.

/// Encode a text value into a fixed-width alphanumeric field.
///
/// The value is uppercased with full Unicode case folding, so accented
/// and other extended letters survive (`ä` becomes `Ä`, not `A`). A
/// value longer than the field keeps only its first `width` characters;
/// a shorter one is right-padded with spaces. Infallible: text writes
/// truncate rather than reject.
pub fn encode_text(value: &str, width: usize) -> String {
    let upper = value.to_uppercase();
    let mut encoded: String = upper.chars().take(width).collect();
    let padding = width - encoded.chars().count();
    for _ in 0..padding {
        encoded.push(' ');
    }
    encoded
}

/// Decode a fixed-width alphanumeric field.
///
/// Returns the field text verbatim, trailing padding included; callers
/// that want trimmed values trim themselves. Keeping the padding here
/// preserves the distinction between an explicitly blank value and an
/// unset one for any layer that needs it.
pub fn decode_text(field: &str) -> String {
    field.to_string()
}
