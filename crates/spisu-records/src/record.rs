//! The generic record engine.
//!
//! A [`Record`] owns a fixed 80-character buffer that is the sole
//! source of truth: setters encode into it, getters re-derive from it,
//! and rendering returns it verbatim. All access goes through the
//! shape's declared field names; the engine exposes no positional
//! buffer access, so callers can never couple to raw column offsets.

use chrono::{Datelike, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::codec::{decode_numeric, decode_text, encode_numeric, encode_text, SignMode};
use crate::error::SpisuError;
use crate::field::{FieldDescriptor, FieldKind};
use crate::schema::RecordSchema;
use crate::Result;

/// Implied fractional digits for monetary amount fields.
const AMOUNT_DECIMALS: u32 = 2;

/// One fixed-width record instance.
///
/// The buffer holds characters rather than bytes so extended letters
/// (`Ä`, `Ö`, ...) occupy exactly one column.
#[derive(Debug, Clone)]
pub struct Record {
    schema: &'static RecordSchema,
    buffer: Vec<char>,
}

impl Record {
    /// Create an empty record: all spaces, with the shape's type code
    /// at column 1.
    pub fn new(schema: &'static RecordSchema) -> Self {
        let mut buffer = vec![' '; schema.width()];
        buffer[0] = schema.type_code();
        Self { schema, buffer }
    }

    /// Adopt an existing line as this shape's buffer.
    ///
    /// Fails with `LengthMismatch` unless the line is exactly the
    /// record width. Field content is not validated here; decoding
    /// happens lazily in the getters.
    pub fn from_line(schema: &'static RecordSchema, line: &str) -> Result<Self> {
        let buffer: Vec<char> = line.chars().collect();
        if buffer.len() != schema.width() {
            return Err(SpisuError::LengthMismatch {
                actual: buffer.len(),
                expected: schema.width(),
            });
        }
        tracing::trace!(type_code = %schema.type_code(), "adopted record line");
        Ok(Self { schema, buffer })
    }

    /// The schema this record was built from.
    pub fn schema(&self) -> &RecordSchema {
        self.schema
    }

    /// The type code at column 1.
    pub fn type_code(&self) -> char {
        self.buffer[0]
    }

    /// Render the record. Always exactly the record width, regardless
    /// of which fields were set.
    pub fn to_line(&self) -> String {
        self.buffer.iter().collect()
    }

    /// Set an alphanumeric field. Over-long values are truncated to the
    /// field width; short ones are space-padded.
    pub fn set_text(&mut self, field: &str, value: &str) -> Result<()> {
        let descriptor = *self.descriptor(field, FieldKind::Alphanumeric)?;
        let encoded = encode_text(value, descriptor.width());
        self.splice(&descriptor, &encoded);
        Ok(())
    }

    /// Read an alphanumeric field verbatim, trailing padding included.
    pub fn get_text(&self, field: &str) -> Result<String> {
        let descriptor = self.descriptor(field, FieldKind::Alphanumeric)?;
        Ok(decode_text(&self.extract(descriptor)))
    }

    /// Set a whole-number numeric field (counters, serials, codes).
    pub fn set_number(&mut self, field: &str, value: i64) -> Result<()> {
        let descriptor = *self.descriptor(field, FieldKind::Numeric)?;
        let encoded = encode_numeric(
            &Decimal::from(value),
            descriptor.width(),
            0,
            SignMode::Unsigned,
        )?;
        self.splice(&descriptor, &encoded);
        Ok(())
    }

    /// Read a whole-number numeric field, honouring overpunch marks.
    pub fn get_number(&self, field: &str) -> Result<i64> {
        let descriptor = self.descriptor(field, FieldKind::Numeric)?;
        let raw = self.extract(descriptor);
        let value = decode_numeric(&raw, 0)?;
        value
            .to_i64()
            .ok_or(SpisuError::InvalidNumericField { text: raw })
    }

    /// Set a monetary amount field (two implied decimals), with the
    /// field's declared sign convention.
    pub fn set_amount(&mut self, field: &str, value: Decimal, sign: SignMode) -> Result<()> {
        let descriptor = *self.descriptor(field, FieldKind::Numeric)?;
        let encoded = encode_numeric(&value, descriptor.width(), AMOUNT_DECIMALS, sign)?;
        self.splice(&descriptor, &encoded);
        Ok(())
    }

    /// Read a monetary amount field (two implied decimals).
    pub fn get_amount(&self, field: &str) -> Result<Decimal> {
        let descriptor = self.descriptor(field, FieldKind::Numeric)?;
        decode_numeric(&self.extract(descriptor), AMOUNT_DECIMALS)
    }

    /// Set a date field as 6-digit `yymmdd`.
    pub fn set_date(&mut self, field: &str, date: NaiveDate) -> Result<()> {
        let yymmdd = i64::from(date.year().rem_euclid(100)) * 10_000
            + i64::from(date.month()) * 100
            + i64::from(date.day());
        self.set_number(field, yymmdd)
    }

    /// Read a date field back as its 6-character `yymmdd` string.
    pub fn get_date(&self, field: &str) -> Result<String> {
        let value = self.get_number(field)?;
        Ok(format!("{value:06}"))
    }

    /// Resolve a field name and check the accessor's kind against the
    /// declared one.
    fn descriptor(&self, field: &str, accessed: FieldKind) -> Result<&FieldDescriptor> {
        let descriptor = self.schema.descriptor(field)?;
        if descriptor.kind != accessed {
            return Err(SpisuError::FieldKindMismatch {
                field: field.to_string(),
                declared: descriptor.kind,
                accessed,
            });
        }
        Ok(descriptor)
    }

    /// Splice an encoded field into the buffer at its column range.
    fn splice(&mut self, descriptor: &FieldDescriptor, encoded: &str) {
        let range = descriptor.range();
        for (slot, c) in self.buffer[range].iter_mut().zip(encoded.chars()) {
            *slot = c;
        }
    }

    /// Extract a field's raw text from the buffer.
    fn extract(&self, descriptor: &FieldDescriptor) -> String {
        self.buffer[descriptor.range()].iter().collect()
    }
}
