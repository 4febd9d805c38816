//! Schema and tuple error types.

use thiserror::Error;
use tuple_types::FieldType;

/// Schema descriptor construction and accessor errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A schema with zero fields is invalid.
    #[error("schema must contain at least one field")]
    EmptySchema,

    /// Type and name arrays of different lengths.
    #[error("schema arrays disagree: {types} types vs {names} names")]
    LengthMismatch { types: usize, names: usize },

    /// Positional accessor given an out-of-range index.
    #[error("field index {index} out of range for schema with {len} fields")]
    NoSuchField { index: usize, len: usize },

    /// Name lookup found no matching field.
    #[error("no field named '{name}'")]
    NoSuchName { name: String },
}

/// Tuple field access and mutation errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TupleError {
    /// Field accessor given an out-of-range index.
    #[error("field index {index} out of range for tuple with {len} slots")]
    IndexOutOfRange { index: usize, len: usize },

    /// A value's type does not match the schema's declared type at that slot.
    #[error("type mismatch at slot {index}: expected {expected}, got {got}")]
    TypeMismatch {
        index: usize,
        expected: FieldType,
        got: FieldType,
    },

    /// Underlying schema error.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}
