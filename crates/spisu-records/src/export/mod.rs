//! Export-side record shapes.
//!
//! An export file opens with an opening record, carries one
//! name/address/bank/payment group per beneficiary (with optional
//! credit memo and reason rows), and closes with a reconciliation
//! record. Every shape here is a schema declaration plus typed
//! accessors; all behavior lives in the generic record engine.

mod address;
mod bank;
mod codes;
mod credit_memo;
mod name;
mod opening;
mod payment;
mod reason;
mod reconciliation;

pub use address::AddressRecord;
pub use bank::BankRecord;
pub use codes::{AccountType, CostResponsibility, Priority};
pub use credit_memo::CreditMemoRecord;
pub use name::NameRecord;
pub use opening::OpeningRecord;
pub use payment::PaymentRecord;
pub use reason::ReasonRecord;
pub use reconciliation::ReconciliationRecord;
