//! Reconciliation record (type `'9'`): file-level control totals.

use std::sync::LazyLock;

use rust_decimal::Decimal;

use crate::codec::SignMode;
use super::opening::parse_account;
use crate::record::Record;
use crate::schema::RecordSchema;
use crate::Result;

static SCHEMA: LazyLock<RecordSchema> = LazyLock::new(|| {
    RecordSchema::builder('9')
        .field("account", "2:9:N")
        .field("sum_amount_sek", "10:21:N")
        .field("total_beneficiaries", "32:43:N")
        .field("total_records", "44:55:N")
        .field("sum_amount_foreign", "64:78:N")
        .build()
        .expect("reconciliation record schema is well-formed")
});

/// Reconciliation record closing an export file.
///
/// Unlike the credit memo and payment amount fields, the two sum
/// fields here are fully sign-sensitive: a negative total (credits
/// exceeding payments) replaces its final digit with the negative
/// overpunch mark, and positive totals render as plain digits.
#[derive(Debug, Clone)]
pub struct ReconciliationRecord {
    record: Record,
}

impl ReconciliationRecord {
    /// Create an empty reconciliation record.
    pub fn new() -> Self {
        Self {
            record: Record::new(&SCHEMA),
        }
    }

    /// Parse a reconciliation record from a raw 80-character line.
    pub fn from_line(line: &str) -> Result<Self> {
        Ok(Self {
            record: Record::from_line(&SCHEMA, line)?,
        })
    }

    /// Render the fixed-width line.
    pub fn to_line(&self) -> String {
        self.record.to_line()
    }

    /// Set the sender's account number, matching the opening record.
    pub fn set_account(&mut self, account: &str) -> Result<()> {
        self.record.set_number("account", parse_account(account)?)
    }

    /// The sender's account number, without leading zeros.
    pub fn account(&self) -> Result<String> {
        Ok(self.record.get_number("account")?.to_string())
    }

    /// Set the signed sum of all SEK amounts in the file.
    pub fn set_sum_amount_sek(&mut self, amount: Decimal) -> Result<()> {
        self.record
            .set_amount("sum_amount_sek", amount, SignMode::Overpunch)
    }

    /// The signed SEK total.
    pub fn sum_amount_sek(&self) -> Result<Decimal> {
        self.record.get_amount("sum_amount_sek")
    }

    /// Set the signed sum of all foreign-currency amounts.
    pub fn set_sum_amount_foreign(&mut self, amount: Decimal) -> Result<()> {
        self.record
            .set_amount("sum_amount_foreign", amount, SignMode::Overpunch)
    }

    /// The signed foreign-currency total.
    pub fn sum_amount_foreign(&self) -> Result<Decimal> {
        self.record.get_amount("sum_amount_foreign")
    }

    /// Set the number of beneficiaries in the file.
    pub fn set_total_beneficiaries(&mut self, count: i64) -> Result<()> {
        self.record.set_number("total_beneficiaries", count)
    }

    /// The beneficiary count.
    pub fn total_beneficiaries(&self) -> Result<i64> {
        self.record.get_number("total_beneficiaries")
    }

    /// Set the total record count of the file.
    pub fn set_total_records(&mut self, count: i64) -> Result<()> {
        self.record.set_number("total_records", count)
    }

    /// The record count.
    pub fn total_records(&self) -> Result<i64> {
        self.record.get_number("total_records")
    }
}

impl Default for ReconciliationRecord {
    fn default() -> Self {
        Self::new()
    }
}
