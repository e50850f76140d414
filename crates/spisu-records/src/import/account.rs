//! Account record (type `'1'`): debit account statement row.

use std::sync::LazyLock;

use crate::record::Record;
use crate::schema::RecordSchema;
use crate::Result;

static SCHEMA: LazyLock<RecordSchema> = LazyLock::new(|| {
    RecordSchema::builder('1')
        .field("debit_account", "2:12:N")
        .field("transaction_date", "13:18:N")
        .build()
        .expect("account record schema is well-formed")
});

/// Import-side account record: names the debited account and the
/// transaction date for the rows that follow it. Import records are
/// only ever parsed from lines the bank produced.
#[derive(Debug, Clone)]
pub struct AccountRecord {
    record: Record,
}

impl AccountRecord {
    /// Parse an account record from a raw 80-character line.
    pub fn from_line(line: &str) -> Result<Self> {
        Ok(Self {
            record: Record::from_line(&SCHEMA, line)?,
        })
    }

    /// Render the fixed-width line back out.
    pub fn to_line(&self) -> String {
        self.record.to_line()
    }

    /// The debited account number, without leading zeros.
    pub fn debit_account(&self) -> Result<String> {
        Ok(self.record.get_number("debit_account")?.to_string())
    }

    /// The transaction date as its 6-character `yymmdd` string.
    pub fn transaction_date(&self) -> Result<String> {
        self.record.get_date("transaction_date")
    }
}
