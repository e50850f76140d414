//! Bank record (type `'4'`): the beneficiary's bank details.

use std::sync::LazyLock;

use crate::record::Record;
use crate::schema::RecordSchema;
use crate::Result;

static SCHEMA: LazyLock<RecordSchema> = LazyLock::new(|| {
    RecordSchema::builder('4')
        .field("serial_number", "2:8:N")
        .field("bank_id", "9:20:AN")
        .field("account", "21:50:AN")
        .field("name", "51:73:AN")
        .build()
        .expect("bank record schema is well-formed")
});

/// Beneficiary bank record: BIC (SWIFT) identifier, IBAN or national
/// account number, and the bank's name.
#[derive(Debug, Clone)]
pub struct BankRecord {
    record: Record,
}

impl BankRecord {
    /// Create an empty bank record.
    pub fn new() -> Self {
        Self {
            record: Record::new(&SCHEMA),
        }
    }

    /// Parse a bank record from a raw 80-character line.
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

    /// Set the bank's BIC (SWIFT) identifier.
    pub fn set_bank_id(&mut self, bic: &str) -> Result<()> {
        self.record.set_text("bank_id", bic)
    }

    /// The bank identifier, trailing padding trimmed.
    pub fn bank_id(&self) -> Result<String> {
        Ok(self.record.get_text("bank_id")?.trim_end().to_string())
    }

    /// Set the beneficiary's IBAN or account number. Account numbers
    /// are alphanumeric here: left-justified, never zero-padded.
    pub fn set_account(&mut self, account: &str) -> Result<()> {
        self.record.set_text("account", account)
    }

    /// The account number, trailing padding trimmed.
    pub fn account(&self) -> Result<String> {
        Ok(self.record.get_text("account")?.trim_end().to_string())
    }

    /// Set the bank's name.
    pub fn set_name(&mut self, name: &str) -> Result<()> {
        self.record.set_text("name", name)
    }

    /// The bank name, trailing padding trimmed.
    pub fn name(&self) -> Result<String> {
        Ok(self.record.get_text("name")?.trim_end().to_string())
    }
}

impl Default for BankRecord {
    fn default() -> Self {
        Self::new()
    }
}
