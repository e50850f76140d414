//! Integration tests for the import record family.

use spisu_records::import::AccountRecord;
use spisu_records::SpisuError;

#[test]
fn account_record_parses_fields_from_a_raw_line() {
    let mut line = String::new();
    line.push('1');
    line.push_str("00006381040"); // debit account, columns 2-12
    line.push_str("160805"); // transaction date, columns 13-18
    line.push_str(&" ".repeat(62));
    assert_eq!(line.chars().count(), 80);

    let record = AccountRecord::from_line(&line).unwrap();
    assert_eq!(record.debit_account().unwrap(), "6381040");
    assert_eq!(record.transaction_date().unwrap(), "160805");
    assert_eq!(record.to_line(), line);
}

#[test]
fn account_record_rejects_short_lines() {
    let err = AccountRecord::from_line("100006381040160805").unwrap_err();
    assert!(matches!(err, SpisuError::LengthMismatch { .. }));
}
