//! Name record (type `'2'`): the beneficiary's name.

use std::sync::LazyLock;

use crate::record::Record;
use crate::schema::RecordSchema;
use crate::Result;

static SCHEMA: LazyLock<RecordSchema> = LazyLock::new(|| {
    RecordSchema::builder('2')
        .field("serial_number", "2:8:N")
        .field("name", "9:73:AN")
        .build()
        .expect("name record schema is well-formed")
});

/// Beneficiary name record. The serial number ties the record to its
/// payment's beneficiary sequence.
#[derive(Debug, Clone)]
pub struct NameRecord {
    record: Record,
}

impl NameRecord {
    /// Create an empty name record.
    pub fn new() -> Self {
        Self {
            record: Record::new(&SCHEMA),
        }
    }

    /// Parse a name record from a raw 80-character line.
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

    /// Set the beneficiary name.
    pub fn set_name(&mut self, name: &str) -> Result<()> {
        self.record.set_text("name", name)
    }

    /// The beneficiary name, trailing padding trimmed.
    pub fn name(&self) -> Result<String> {
        Ok(self.record.get_text("name")?.trim_end().to_string())
    }
}

impl Default for NameRecord {
    fn default() -> Self {
        Self::new()
    }
}
