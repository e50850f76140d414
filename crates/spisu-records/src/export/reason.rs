//! Reason record (type `'7'`): national bank reporting reason code.

use std::sync::LazyLock;

use crate::record::Record;
use crate::schema::RecordSchema;
use crate::Result;

static SCHEMA: LazyLock<RecordSchema> = LazyLock::new(|| {
    RecordSchema::builder('7')
        .field("serial_number", "2:8:N")
        .field("code", "9:11:N")
        .build()
        .expect("reason record schema is well-formed")
});

/// Reason record carrying the central-bank reporting code for a
/// cross-border payment.
#[derive(Debug, Clone)]
pub struct ReasonRecord {
    record: Record,
}

impl ReasonRecord {
    /// Create an empty reason record.
    pub fn new() -> Self {
        Self {
            record: Record::new(&SCHEMA),
        }
    }

    /// Parse a reason record from a raw 80-character line.
    pub fn from_line(line: &str) -> Result<Self> {
        Ok(Self {
            record: Record::from_line(&SCHEMA, line)?,
        })
    }

    /// Render the fixed-width line.
    pub fn to_line(&self) -> String {
        self.record.to_line()
    }

    /// Set the beneficiary serial number.
    pub fn set_serial_number(&mut self, serial: i64) -> Result<()> {
        self.record.set_number("serial_number", serial)
    }

    /// The beneficiary serial number.
    pub fn serial_number(&self) -> Result<i64> {
        self.record.get_number("serial_number")
    }

    /// Set the three-digit reporting reason code.
    pub fn set_code(&mut self, code: i64) -> Result<()> {
        self.record.set_number("code", code)
    }

    /// The reporting reason code.
    pub fn code(&self) -> Result<i64> {
        self.record.get_number("code")
    }
}

impl Default for ReasonRecord {
    fn default() -> Self {
        Self::new()
    }
}
