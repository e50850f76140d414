//! Address record (type `'3'`): the beneficiary's address and routing
//! choices.

use std::sync::LazyLock;

use super::codes::{AccountType, CostResponsibility, Priority};
use crate::record::Record;
use crate::schema::RecordSchema;
use crate::Result;

static SCHEMA: LazyLock<RecordSchema> = LazyLock::new(|| {
    RecordSchema::builder('3')
        .field("serial_number", "2:8:N")
        .field("address", "9:73:AN")
        .field("account_type", "74:74:N")
        .field("country_code", "75:76:AN")
        .field("cost_carrier", "78:78:N")
        .field("priority", "80:80:N")
        .build()
        .expect("address record schema is well-formed")
});

/// Beneficiary address record, carrying the free-form address plus the
/// single-character account type, country, cost and priority codes.
#[derive(Debug, Clone)]
pub struct AddressRecord {
    record: Record,
}

impl AddressRecord {
    /// Create an empty address record.
    pub fn new() -> Self {
        Self {
            record: Record::new(&SCHEMA),
        }
    }

    /// Parse an address record from a raw 80-character line.
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

    /// Set the free-form beneficiary address.
    pub fn set_address(&mut self, address: &str) -> Result<()> {
        self.record.set_text("address", address)
    }

    /// The beneficiary address, trailing padding trimmed.
    pub fn address(&self) -> Result<String> {
        Ok(self.record.get_text("address")?.trim_end().to_string())
    }

    /// Set the beneficiary account type code.
    pub fn set_account_type(&mut self, account_type: AccountType) -> Result<()> {
        self.record.set_number("account_type", account_type.code())
    }

    /// Set the ISO 3166 country code.
    pub fn set_country_code(&mut self, country: &str) -> Result<()> {
        self.record.set_text("country_code", country)
    }

    /// The country code.
    pub fn country_code(&self) -> Result<String> {
        self.record.get_text("country_code")
    }

    /// Set who carries the transfer costs.
    pub fn set_cost_carrier(&mut self, cost: CostResponsibility) -> Result<()> {
        self.record.set_number("cost_carrier", cost.code())
    }

    /// Set the payment priority.
    pub fn set_priority(&mut self, priority: Priority) -> Result<()> {
        self.record.set_number("priority", priority.code())
    }
}

impl Default for AddressRecord {
    fn default() -> Self {
        Self::new()
    }
}
