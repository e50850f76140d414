//! Credit memo record (type `'5'`): a credit note against a payment.

use std::sync::LazyLock;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::codec::SignMode;
use crate::record::Record;
use crate::schema::RecordSchema;
use crate::Result;

static SCHEMA: LazyLock<RecordSchema> = LazyLock::new(|| {
    RecordSchema::builder('5')
        .field("serial_number", "2:8:N")
        .field("reference_msg", "9:33:AN")
        .field("amount_sek", "34:44:N")
        .field("currency_code", "55:57:AN")
        .field("date", "58:63:N")
        .field("amount_foreign", "66:78:N")
        .build()
        .expect("credit memo record schema is well-formed")
});

/// Credit memo record.
///
/// Both amount fields always carry an overpunch mark in their final
/// column (positions 44 and 78 of the line): the mark is what
/// distinguishes a credit memo row from a payment row, so it is written
/// regardless of the input amount's sign, and the input's sign is
/// otherwise ignored. Because the mark is drawn from the negative
/// alphabet, the decoded amounts come back negative even when the
/// record was built from positive input. This mirrors the observed
/// behavior of the format; whether credit amounts should ever encode
/// an arithmetic sign of their own is an open question with the bank.
#[derive(Debug, Clone)]
pub struct CreditMemoRecord {
    record: Record,
}

impl CreditMemoRecord {
    /// Create an empty credit memo record.
    pub fn new() -> Self {
        Self {
            record: Record::new(&SCHEMA),
        }
    }

    /// Parse a credit memo record from a raw 80-character line.
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

    /// Set the reference message (invoice number or similar).
    pub fn set_reference_msg(&mut self, msg: &str) -> Result<()> {
        self.record.set_text("reference_msg", msg)
    }

    /// The reference message, trailing padding trimmed.
    pub fn reference_msg(&self) -> Result<String> {
        Ok(self.record.get_text("reference_msg")?.trim_end().to_string())
    }

    /// Set the credited amount in SEK. The final digit is always
    /// replaced by its overpunch mark; the amount's sign is ignored.
    pub fn set_amount_sek(&mut self, amount: Decimal) -> Result<()> {
        self.record
            .set_amount("amount_sek", amount, SignMode::AlwaysMark)
    }

    /// The credited SEK amount. Decodes negative because of the
    /// always-written mark; see the type-level note.
    pub fn amount_sek(&self) -> Result<Decimal> {
        self.record.get_amount("amount_sek")
    }

    /// Set the credited amount in the foreign currency. Marked like
    /// [`set_amount_sek`](Self::set_amount_sek).
    pub fn set_amount_foreign(&mut self, amount: Decimal) -> Result<()> {
        self.record
            .set_amount("amount_foreign", amount, SignMode::AlwaysMark)
    }

    /// The credited foreign amount. Decodes negative; see the
    /// type-level note.
    pub fn amount_foreign(&self) -> Result<Decimal> {
        self.record.get_amount("amount_foreign")
    }

    /// Set the ISO 4217 currency code.
    pub fn set_currency_code(&mut self, currency: &str) -> Result<()> {
        self.record.set_text("currency_code", currency)
    }

    /// The currency code.
    pub fn currency_code(&self) -> Result<String> {
        self.record.get_text("currency_code")
    }

    /// Set the credit memo date.
    pub fn set_date(&mut self, date: NaiveDate) -> Result<()> {
        self.record.set_date("date", date)
    }

    /// The credit memo date as its 6-character `yymmdd` string.
    pub fn date(&self) -> Result<String> {
        self.record.get_date("date")
    }
}

impl Default for CreditMemoRecord {
    fn default() -> Self {
        Self::new()
    }
}
