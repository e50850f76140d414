//! Record schemas.
//!
//! A schema is the ordered table of named fields for one record shape,
//! plus the shape's single-character type code. Schemas are declared
//! once at shape-definition time, validated eagerly, and shared
//! immutably by every record instance of that shape.

use crate::error::SpisuError;
use crate::field::FieldDescriptor;
use crate::Result;

/// Width of every SPISU record, in characters.
pub const RECORD_WIDTH: usize = 80;

/// Immutable field table for one record shape.
#[derive(Debug, Clone)]
pub struct RecordSchema {
    type_code: char,
    fields: Vec<(&'static str, FieldDescriptor)>,
}

impl RecordSchema {
    /// Start declaring a schema for a record shape.
    pub fn builder(type_code: char) -> SchemaBuilder {
        SchemaBuilder {
            type_code,
            fields: Vec::new(),
        }
    }

    /// The shape's type code, written at column 1 of every record.
    pub fn type_code(&self) -> char {
        self.type_code
    }

    /// Total record width. Fixed at [`RECORD_WIDTH`] for every shape.
    pub fn width(&self) -> usize {
        RECORD_WIDTH
    }

    /// Look up a declared field's descriptor.
    pub fn descriptor(&self, field: &str) -> Result<&FieldDescriptor> {
        self.fields
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, descriptor)| descriptor)
            .ok_or_else(|| SpisuError::UnknownField {
                field: field.to_string(),
                type_code: self.type_code,
            })
    }

    /// Whether a field name is declared in this schema.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|(name, _)| *name == field)
    }

    /// Declared field names, in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(name, _)| *name)
    }
}

/// Builder collecting field declarations for a [`RecordSchema`].
#[derive(Debug)]
pub struct SchemaBuilder {
    type_code: char,
    fields: Vec<(&'static str, String)>,
}

impl SchemaBuilder {
    /// Declare a field by name and `"start:end:type"` descriptor.
    pub fn field(mut self, name: &'static str, spec: &str) -> Self {
        self.fields.push((name, spec.to_string()));
        self
    }

    /// Validate the declarations and freeze the schema.
    ///
    /// Rejects malformed descriptors, duplicate names, fields reaching
    /// into the reserved type-code column or past the record width, and
    /// overlapping column ranges. A failure here means the shape
    /// definition itself is broken, so callers declaring shape
    /// constants treat it as fatal.
    pub fn build(self) -> Result<RecordSchema> {
        let mut fields: Vec<(&'static str, FieldDescriptor)> = Vec::with_capacity(self.fields.len());

        for (name, spec) in &self.fields {
            let descriptor = FieldDescriptor::parse(spec)?;

            let violation = |reason: &str| SpisuError::MalformedSchema {
                spec: format!("{name} {spec}"),
                reason: reason.to_string(),
            };

            if descriptor.start < 2 {
                return Err(violation("column 1 is reserved for the type code"));
            }
            if descriptor.end > RECORD_WIDTH {
                return Err(violation("field extends past the record width"));
            }
            if fields.iter().any(|(existing, _)| existing == name) {
                return Err(violation("duplicate field name"));
            }
            if let Some((other, _)) = fields
                .iter()
                .find(|(_, existing)| existing.overlaps(&descriptor))
            {
                return Err(violation(&format!("columns overlap field '{other}'")));
            }

            fields.push((*name, descriptor));
        }

        Ok(RecordSchema {
            type_code: self.type_code,
            fields,
        })
    }
}
