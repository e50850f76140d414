//! Field descriptors and kinds.
//!
//! A record shape declares each of its fields with a compact
//! `"start:end:type"` descriptor: 1-based inclusive column range plus a
//! type tag selecting the codec.

use std::fmt;
use std::ops::Range;

use crate::error::SpisuError;
use crate::Result;

/// Kind of data stored in a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Numeric: zero-padded digits, optional overpunch sign.
    Numeric,
    /// Alphanumeric: uppercased text, space-padded, truncated to width.
    Alphanumeric,
}

impl FieldKind {
    /// Parse a field kind from its descriptor tag.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "N" => Some(FieldKind::Numeric),
            "AN" => Some(FieldKind::Alphanumeric),
            _ => None,
        }
    }

    /// Returns the descriptor tag.
    pub fn code(&self) -> &'static str {
        match self {
            FieldKind::Numeric => "N",
            FieldKind::Alphanumeric => "AN",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A field's column range and kind within a record.
///
/// Columns are 1-based and inclusive, matching the bank's format
/// documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// First column (1-based, inclusive).
    pub start: usize,
    /// Last column (1-based, inclusive).
    pub end: usize,
    /// Data kind, selecting the codec.
    pub kind: FieldKind,
}

impl FieldDescriptor {
    /// Parse a `"start:end:type"` descriptor string.
    pub fn parse(spec: &str) -> Result<Self> {
        let malformed = |reason: &str| SpisuError::MalformedSchema {
            spec: spec.to_string(),
            reason: reason.to_string(),
        };

        let tokens: Vec<&str> = spec.split(':').collect();
        if tokens.len() != 3 {
            return Err(malformed("expected three colon-separated tokens"));
        }

        let start: usize = tokens[0]
            .parse()
            .map_err(|_| malformed("start column is not a valid integer"))?;
        let end: usize = tokens[1]
            .parse()
            .map_err(|_| malformed("end column is not a valid integer"))?;
        let kind = FieldKind::from_code(tokens[2])
            .ok_or_else(|| malformed("type tag must be N or AN"))?;

        if start < 1 {
            return Err(malformed("columns are 1-based"));
        }
        if start > end {
            return Err(malformed("start column is past end column"));
        }

        Ok(Self { start, end, kind })
    }

    /// Field width in columns.
    pub fn width(&self) -> usize {
        self.end - self.start + 1
    }

    /// 0-based buffer range for this field.
    pub(crate) fn range(&self) -> Range<usize> {
        self.start - 1..self.end
    }

    /// Whether this field's columns intersect another's.
    pub(crate) fn overlaps(&self, other: &FieldDescriptor) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_code() {
        assert_eq!(FieldKind::from_code("N"), Some(FieldKind::Numeric));
        assert_eq!(FieldKind::from_code("AN"), Some(FieldKind::Alphanumeric));
        assert_eq!(FieldKind::from_code("X"), None);
        assert_eq!(FieldKind::from_code("an"), None);
    }

    #[test]
    fn test_parse_numeric() {
        let field = FieldDescriptor::parse("2:8:N").unwrap();
        assert_eq!(field.start, 2);
        assert_eq!(field.end, 8);
        assert_eq!(field.kind, FieldKind::Numeric);
        assert_eq!(field.width(), 7);
        assert_eq!(field.range(), 1..8);
    }

    #[test]
    fn test_parse_alphanumeric() {
        let field = FieldDescriptor::parse("9:73:AN").unwrap();
        assert_eq!(field.kind, FieldKind::Alphanumeric);
        assert_eq!(field.width(), 65);
    }

    #[test]
    fn test_parse_single_column() {
        let field = FieldDescriptor::parse("74:74:N").unwrap();
        assert_eq!(field.width(), 1);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(FieldDescriptor::parse("2:8").is_err());
        assert!(FieldDescriptor::parse("2:8:N:extra").is_err());
        assert!(FieldDescriptor::parse("a:8:N").is_err());
        assert!(FieldDescriptor::parse("2:b:N").is_err());
        assert!(FieldDescriptor::parse("2:8:X").is_err());
        assert!(FieldDescriptor::parse("8:2:N").is_err());
        assert!(FieldDescriptor::parse("0:8:N").is_err());
    }

    #[test]
    fn test_overlap() {
        let a = FieldDescriptor::parse("2:8:N").unwrap();
        let b = FieldDescriptor::parse("8:10:N").unwrap();
        let c = FieldDescriptor::parse("9:12:N").unwrap();
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
        assert!(b.overlaps(&c));
    }
}
