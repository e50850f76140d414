//! Field codecs.
//!
//! Two codecs cover every SPISU field: numeric (zero-padded digits with
//! optional overpunch sign marks) and alphanumeric (uppercased,
//! space-padded text). The record engine selects the codec from the
//! field's declared kind.

mod numeric;
mod text;

pub use numeric::{decode_numeric, encode_numeric, SignMode};
pub use text::{decode_text, encode_text};
