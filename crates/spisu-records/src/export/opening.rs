//! Opening record (type `'0'`): starts an export file.

use std::sync::LazyLock;

use chrono::NaiveDate;

use crate::record::Record;
use crate::schema::RecordSchema;
use crate::Result;

static SCHEMA: LazyLock<RecordSchema> = LazyLock::new(|| {
    RecordSchema::builder('0')
        .field("account", "2:9:N")
        .field("creation_date", "10:15:N")
        .field("name", "16:37:AN")
        .field("address", "38:72:AN")
        .field("pay_date", "73:78:N")
        .build()
        .expect("opening record schema is well-formed")
});

/// The file's opening record: sender account, creation date, and the
/// optional sender name/address block.
#[derive(Debug, Clone)]
pub struct OpeningRecord {
    record: Record,
}

impl OpeningRecord {
    /// Create an empty opening record.
    pub fn new() -> Self {
        Self {
            record: Record::new(&SCHEMA),
        }
    }

    /// Parse an opening record from a raw 80-character line.
    pub fn from_line(line: &str) -> Result<Self> {
        Ok(Self {
            record: Record::from_line(&SCHEMA, line)?,
        })
    }

    /// Render the fixed-width line.
    pub fn to_line(&self) -> String {
        self.record.to_line()
    }

    /// Set the sender's bankgiro account number.
    pub fn set_account(&mut self, account: &str) -> Result<()> {
        self.record.set_number("account", parse_account(account)?)
    }

    /// The sender's account number, without leading zeros.
    pub fn account(&self) -> Result<String> {
        Ok(self.record.get_number("account")?.to_string())
    }

    /// Set the file creation date.
    pub fn set_creation_date(&mut self, date: NaiveDate) -> Result<()> {
        self.record.set_date("creation_date", date)
    }

    /// The creation date as its 6-character `yymmdd` string.
    pub fn creation_date(&self) -> Result<String> {
        self.record.get_date("creation_date")
    }

    /// Set the optional sender name.
    pub fn set_name(&mut self, name: &str) -> Result<()> {
        self.record.set_text("name", name)
    }

    /// The sender name, trailing padding trimmed.
    pub fn name(&self) -> Result<String> {
        Ok(self.record.get_text("name")?.trim_end().to_string())
    }

    /// Set the optional sender address.
    pub fn set_address(&mut self, address: &str) -> Result<()> {
        self.record.set_text("address", address)
    }

    /// The sender address, trailing padding trimmed.
    pub fn address(&self) -> Result<String> {
        Ok(self.record.get_text("address")?.trim_end().to_string())
    }

    /// Set an explicit payment date for the whole file. When used, the
    /// bank expects the per-payment records to carry zeroed dates.
    pub fn set_pay_date(&mut self, date: NaiveDate) -> Result<()> {
        self.record.set_date("pay_date", date)
    }

    /// The explicit payment date as its 6-character `yymmdd` string.
    pub fn pay_date(&self) -> Result<String> {
        self.record.get_date("pay_date")
    }
}

impl Default for OpeningRecord {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse an account number given as a digit string.
pub(crate) fn parse_account(account: &str) -> Result<i64> {
    account
        .trim()
        .parse()
        .map_err(|_| crate::error::SpisuError::InvalidNumericField {
            text: account.to_string(),
        })
}
