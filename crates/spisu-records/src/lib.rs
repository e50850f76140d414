//! Fixed-width SPISU record encoding for bank payment interchange.
//!
//! Every SPISU record is one flat line of exactly 80 characters. Column
//! 1 holds a single-character type code identifying the record shape;
//! the remaining columns are fixed field ranges declared per shape with
//! compact `"start:end:type"` descriptors. One generic engine performs
//! all encoding and decoding; the concrete record shapes are pure
//! schema declarations.
//!
//! # Modules
//!
//! - **field** — field descriptors: column range plus numeric or
//!   alphanumeric kind
//! - **codec** — the two field codecs: zero-padded overpunch-signed
//!   numerics and uppercased space-padded text
//! - **schema** — per-shape field tables, validated at declaration time
//! - **record** — the generic record engine: buffer, typed named-field
//!   access, render and parse
//! - **export** / **import** — the concrete record shapes of the
//!   export and import file families
//!
//! # Example
//!
//! ```rust
//! use spisu_records::export::NameRecord;
//!
//! let mut record = NameRecord::new();
//! record.set_serial_number(1)?;
//! record.set_name("Abo OY")?;
//!
//! let line = record.to_line();
//! assert_eq!(line.chars().count(), 80);
//! assert!(line.starts_with("20000001ABO OY"));
//!
//! let parsed = NameRecord::from_line(&line)?;
//! assert_eq!(parsed.name()?, "ABO OY");
//! # Ok::<(), spisu_records::SpisuError>(())
//! ```
//!
//! File-level concerns — joining rendered lines, reading raw lines back
//! in, sequencing record groups — belong to the callers; this crate
//! never touches I/O.

#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod export;
pub mod field;
pub mod import;
pub mod record;
pub mod schema;

pub use codec::SignMode;
pub use error::SpisuError;
pub use field::{FieldDescriptor, FieldKind};
pub use record::Record;
pub use schema::{RecordSchema, SchemaBuilder, RECORD_WIDTH};

/// Result type for SPISU record operations.
pub type Result<T> = std::result::Result<T, SpisuError>;
