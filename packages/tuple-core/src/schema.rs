//! Schema descriptors: the ordered (type, optional name) shape of a relation.

use std::fmt;

use serde::{Deserialize, Serialize};
use tuple_types::FieldType;

use crate::error::SchemaError;

/// One schema position: a field type paired with an optional name.
///
/// An absent name (anonymous field) and a present-but-empty name are distinct
/// states; both survive equality comparison and serialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchemaItem {
    field_type: FieldType,
    name: Option<String>,
}

impl SchemaItem {
    /// Creates a schema item.
    pub fn new(field_type: FieldType, name: Option<String>) -> Self {
        Self { field_type, name }
    }

    /// Returns the field type.
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// Returns the field name, or `None` for an anonymous field.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the fixed byte width of this item's type.
    pub fn byte_size(&self) -> usize {
        self.field_type.byte_size()
    }
}

impl fmt::Display for SchemaItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}({})", self.field_type, name),
            None => write!(f, "{}", self.field_type),
        }
    }
}

/// Ordered, immutable sequence of [`SchemaItem`]s describing a tuple's shape.
///
/// # Invariants
///
/// - Length is at least 1; zero-field schemas are rejected at construction.
/// - Items never change after construction; the only way to derive a new
///   descriptor from existing ones is [`SchemaDescriptor::merge`], which
///   allocates a new descriptor and leaves its inputs untouched.
///
/// Equality and hashing both derive from the ordered (type, name) sequence,
/// so descriptors can be used as map keys: equal descriptors always hash
/// equal. Once constructed, a descriptor is safely shared read-only across
/// threads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchemaDescriptor {
    items: Vec<SchemaItem>,
}

impl SchemaDescriptor {
    /// Creates a descriptor from parallel type and name arrays.
    ///
    /// # Returns
    /// `Err(SchemaError::LengthMismatch)` if the arrays differ in length,
    /// `Err(SchemaError::EmptySchema)` if they are empty.
    pub fn new(types: Vec<FieldType>, names: Vec<Option<String>>) -> Result<Self, SchemaError> {
        if types.len() != names.len() {
            return Err(SchemaError::LengthMismatch {
                types: types.len(),
                names: names.len(),
            });
        }
        let items = types
            .into_iter()
            .zip(names)
            .map(|(field_type, name)| SchemaItem::new(field_type, name))
            .collect();
        Self::from_items(items)
    }

    /// Creates a descriptor with all fields anonymous.
    pub fn anonymous(types: Vec<FieldType>) -> Result<Self, SchemaError> {
        let items = types
            .into_iter()
            .map(|field_type| SchemaItem::new(field_type, None))
            .collect();
        Self::from_items(items)
    }

    /// Creates a descriptor from already-built items.
    ///
    /// # Returns
    /// `Err(SchemaError::EmptySchema)` if `items` is empty.
    pub fn from_items(items: Vec<SchemaItem>) -> Result<Self, SchemaError> {
        if items.is_empty() {
            return Err(SchemaError::EmptySchema);
        }
        Ok(Self { items })
    }

    /// Returns the number of fields, always at least 1.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false for a validly constructed descriptor.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the type of the `i`th field.
    ///
    /// # Returns
    /// `Err(SchemaError::NoSuchField)` if `i` is out of range.
    pub fn field_type(&self, i: usize) -> Result<FieldType, SchemaError> {
        self.items
            .get(i)
            .map(SchemaItem::field_type)
            .ok_or(SchemaError::NoSuchField {
                index: i,
                len: self.items.len(),
            })
    }

    /// Returns the name of the `i`th field, `None` for an anonymous field.
    ///
    /// # Returns
    /// `Err(SchemaError::NoSuchField)` if `i` is out of range.
    pub fn field_name(&self, i: usize) -> Result<Option<&str>, SchemaError> {
        self.items
            .get(i)
            .map(SchemaItem::name)
            .ok_or(SchemaError::NoSuchField {
                index: i,
                len: self.items.len(),
            })
    }

    /// Returns the first position whose name equals `name`.
    ///
    /// Anonymous fields never match; with duplicate names the first match
    /// wins.
    ///
    /// # Returns
    /// `Err(SchemaError::NoSuchName)` if no field carries that name.
    pub fn index_of_name(&self, name: &str) -> Result<usize, SchemaError> {
        self.items
            .iter()
            .position(|item| item.name() == Some(name))
            .ok_or_else(|| SchemaError::NoSuchName {
                name: name.to_string(),
            })
    }

    /// Returns the total byte size of a tuple with this schema.
    pub fn byte_size(&self) -> usize {
        self.items.iter().map(SchemaItem::byte_size).sum()
    }

    /// Iterates over the items in field order.
    pub fn items(&self) -> impl Iterator<Item = &SchemaItem> {
        self.items.iter()
    }

    /// Concatenates two optional descriptors into a new one.
    ///
    /// Field order and names are preserved: `a`'s fields come first. If one
    /// input is absent the other is returned unchanged (cloned); if both are
    /// absent the result is absent. Duplicate names after a merge are legal;
    /// [`SchemaDescriptor::index_of_name`] resolves to the first match.
    pub fn merge(a: Option<&Self>, b: Option<&Self>) -> Option<Self> {
        match (a, b) {
            (None, None) => None,
            (Some(a), None) => Some(a.clone()),
            (None, Some(b)) => Some(b.clone()),
            (Some(a), Some(b)) => {
                let mut items = a.items.clone();
                items.extend(b.items.iter().cloned());
                Some(Self { items })
            }
        }
    }
}

impl fmt::Display for SchemaDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}
