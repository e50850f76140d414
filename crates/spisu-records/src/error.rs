//! Error types for SPISU record operations.

use miette::Diagnostic;
use thiserror::Error;

use crate::field::FieldKind;

/// Errors that can occur while declaring schemas or encoding and
/// decoding records.
#[derive(Debug, Error, Diagnostic)]
pub enum SpisuError {
    /// A field descriptor string or schema declaration is invalid.
    #[error("Malformed schema '{spec}': {reason}")]
    #[diagnostic(
        code(spisu::malformed_schema),
        help("Field descriptors are 'start:end:type' with 1-based inclusive columns and type N or AN")
    )]
    MalformedSchema {
        /// The offending descriptor string or field name.
        spec: String,
        /// Why the declaration was rejected.
        reason: String,
    },

    /// A field name is not declared in the record shape's schema.
    #[error("Unknown field '{field}' for record type '{type_code}'")]
    #[diagnostic(
        code(spisu::unknown_field),
        help("Only fields declared in the record shape's schema are accessible")
    )]
    UnknownField {
        /// The undeclared field name.
        field: String,
        /// Type code of the record shape.
        type_code: char,
    },

    /// A typed accessor was used against a field of the other kind.
    #[error("Field '{field}' is declared {declared} but was accessed as {accessed}")]
    #[diagnostic(code(spisu::field_kind_mismatch))]
    FieldKindMismatch {
        /// The field name.
        field: String,
        /// Kind declared in the schema.
        declared: FieldKind,
        /// Kind implied by the accessor.
        accessed: FieldKind,
    },

    /// An encoded numeric value does not fit the declared field width.
    #[error("Value needs {digits} digits but the field is only {width} wide")]
    #[diagnostic(
        code(spisu::value_too_wide),
        help("Numeric values are never truncated; shorten or reject the input")
    )]
    ValueTooWide {
        /// Digits required by the scaled magnitude.
        digits: usize,
        /// Declared field width.
        width: usize,
    },

    /// A numeric field's raw text violates the digit/sign structure.
    #[error("Invalid numeric field '{text}'")]
    #[diagnostic(
        code(spisu::invalid_numeric_field),
        help("Numeric fields are digits with at most one trailing overpunch sign character")
    )]
    InvalidNumericField {
        /// The raw field text.
        text: String,
    },

    /// A parsed line is not exactly the record width.
    #[error("Record line is {actual} characters, expected {expected}")]
    #[diagnostic(code(spisu::length_mismatch))]
    LengthMismatch {
        /// Actual character count of the line.
        actual: usize,
        /// Required record width.
        expected: usize,
    },
}
