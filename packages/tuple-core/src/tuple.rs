//! Tuples: one database record built against a schema descriptor.

use std::fmt;
use std::sync::Arc;

use tuple_types::{FieldType, FieldValue, Location};

use crate::error::TupleError;
use crate::schema::SchemaDescriptor;

/// One database record: an ordered sequence of typed value slots matching a
/// [`SchemaDescriptor`], plus an optional physical [`Location`].
///
/// The slot count always equals the schema's field count. Integer slots are
/// eagerly initialized to zero at construction; text slots start unset until
/// explicitly written. The schema is held as a shared read-only reference;
/// many tuples of the same relation point at one descriptor.
///
/// Tuples are not internally synchronized. Concurrent mutation of the same
/// tuple must be serialized by its owner.
#[derive(Debug, Clone)]
pub struct Tuple {
    schema: Arc<SchemaDescriptor>,
    fields: Vec<Option<FieldValue>>,
    location: Option<Location>,
}

impl Tuple {
    /// Creates a tuple with default-initialized slots for `schema`.
    pub fn new(schema: Arc<SchemaDescriptor>) -> Self {
        let fields = Self::default_slots(&schema);
        Self {
            schema,
            fields,
            location: None,
        }
    }

    fn default_slots(schema: &SchemaDescriptor) -> Vec<Option<FieldValue>> {
        schema
            .items()
            .map(|item| match item.field_type() {
                FieldType::Int => Some(FieldValue::Int(0)),
                FieldType::Text => None,
            })
            .collect()
    }

    /// Returns the schema this tuple was built against.
    pub fn schema(&self) -> &Arc<SchemaDescriptor> {
        &self.schema
    }

    /// Returns the physical location assigned by the storage layer, if any.
    pub fn location(&self) -> Option<Location> {
        self.location
    }

    /// Stores the physical location tag. No validation is performed; the
    /// storage layer owns its meaning.
    pub fn set_location(&mut self, location: Location) {
        self.location = Some(location);
    }

    /// Writes `value` into slot `i`, replacing any previous value.
    ///
    /// # Returns
    /// `Err(TupleError::IndexOutOfRange)` if `i` is not a valid slot, or
    /// `Err(TupleError::TypeMismatch)` if the value's type differs from the
    /// schema's declared type at that position.
    pub fn set_field(&mut self, i: usize, value: FieldValue) -> Result<(), TupleError> {
        let len = self.fields.len();
        let Some(slot) = self.fields.get_mut(i) else {
            return Err(TupleError::IndexOutOfRange { index: i, len });
        };
        let expected = self.schema.field_type(i)?;
        let got = value.field_type();
        if got != expected {
            tracing::warn!(
                slot = i,
                expected = %expected,
                got = %got,
                "rejecting field write with mismatched type"
            );
            return Err(TupleError::TypeMismatch {
                index: i,
                expected,
                got,
            });
        }
        *slot = Some(value);
        Ok(())
    }

    /// Returns the value at slot `i`.
    ///
    /// A legitimately unset slot yields `Ok(None)`; an invalid index yields
    /// `Err(TupleError::IndexOutOfRange)`. The two states are never conflated.
    pub fn field(&self, i: usize) -> Result<Option<&FieldValue>, TupleError> {
        self.fields
            .get(i)
            .map(Option::as_ref)
            .ok_or(TupleError::IndexOutOfRange {
                index: i,
                len: self.fields.len(),
            })
    }

    /// Iterates over all slots in schema order, unset slots included.
    ///
    /// Each call yields a fresh pass from the first slot.
    pub fn fields(&self) -> impl Iterator<Item = Option<&FieldValue>> {
        self.fields.iter().map(Option::as_ref)
    }

    /// Reinitializes this tuple against a new schema, as if freshly
    /// constructed. All field values are discarded; the location tag is kept,
    /// since physical placement is storage state rather than schema state.
    pub fn reset_schema(&mut self, schema: Arc<SchemaDescriptor>) {
        tracing::debug!(fields = schema.len(), "resetting tuple schema");
        self.fields = Self::default_slots(&schema);
        self.schema = schema;
    }

    /// Renders all field values joined by tabs with a trailing newline.
    ///
    /// The exact framing `v0\tv1\t...\tvN\n` is consumed by external test
    /// harnesses; unset slots render as empty.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str("\t")?;
            }
            if let Some(value) = field {
                write!(f, "{}", value)?;
            }
        }
        f.write_str("\n")
    }
}
