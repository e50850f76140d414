//! Payment record (type `'6'`): one payment to a beneficiary.

use std::sync::LazyLock;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::codec::SignMode;
use crate::record::Record;
use crate::schema::RecordSchema;
use crate::Result;

static SCHEMA: LazyLock<RecordSchema> = LazyLock::new(|| {
    RecordSchema::builder('6')
        .field("serial_number", "2:8:N")
        .field("reference_msg", "9:33:AN")
        .field("amount_sek", "34:44:N")
        .field("currency_code", "55:57:AN")
        .field("date", "58:63:N")
        .field("amount_foreign", "66:78:N")
        .build()
        .expect("payment record schema is well-formed")
});

/// Payment record. Same column layout as the credit memo record, but
/// the amount fields stay unmarked plain digits (positions 44 and 78
/// hold ordinary digits), which is how the two row kinds are told
/// apart.
///
/// The amount fields discard the input's sign entirely — a negative
/// amount renders identically to its absolute value. This mirrors the
/// observed behavior of the format and is deliberately not "fixed"
/// here; a payment that should move money the other way is expressed
/// as a credit memo row instead.
#[derive(Debug, Clone)]
pub struct PaymentRecord {
    record: Record,
}

impl PaymentRecord {
    /// Create an empty payment record.
    pub fn new() -> Self {
        Self {
            record: Record::new(&SCHEMA),
        }
    }

    /// Parse a payment record from a raw 80-character line.
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

    /// Set the reference message shown to the beneficiary. Truncated
    /// to the field width when too long.
    pub fn set_reference_msg(&mut self, msg: &str) -> Result<()> {
        self.record.set_text("reference_msg", msg)
    }

    /// The reference message, trailing padding trimmed.
    pub fn reference_msg(&self) -> Result<String> {
        Ok(self.record.get_text("reference_msg")?.trim_end().to_string())
    }

    /// Set the payment amount in SEK. The sign is discarded.
    pub fn set_amount_sek(&mut self, amount: Decimal) -> Result<()> {
        self.record
            .set_amount("amount_sek", amount, SignMode::Unsigned)
    }

    /// The SEK amount.
    pub fn amount_sek(&self) -> Result<Decimal> {
        self.record.get_amount("amount_sek")
    }

    /// Set the payment amount in the foreign currency. The sign is
    /// discarded.
    pub fn set_amount_foreign(&mut self, amount: Decimal) -> Result<()> {
        self.record
            .set_amount("amount_foreign", amount, SignMode::Unsigned)
    }

    /// The foreign-currency amount.
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

    /// Set the payment date.
    pub fn set_date(&mut self, date: NaiveDate) -> Result<()> {
        self.record.set_date("date", date)
    }

    /// The payment date as its 6-character `yymmdd` string.
    pub fn date(&self) -> Result<String> {
        self.record.get_date("date")
    }
}

impl Default for PaymentRecord {
    fn default() -> Self {
        Self::new()
    }
}
