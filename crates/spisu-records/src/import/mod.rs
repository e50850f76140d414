//! Import-side record shapes, parsed from files the bank sends back.

mod account;

pub use account::AccountRecord;
