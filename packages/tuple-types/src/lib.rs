//! Shared value types for the tuple storage core.
//!
//! This crate defines the fixed-width field types, the tagged field values
//! that occupy tuple slots, and the opaque record locations handed out by
//! the storage layer.

pub mod field;
pub mod location;
pub mod types;

pub use field::{FieldError, FieldValue};
pub use location::Location;
pub use types::{FieldType, TEXT_FIELD_LEN};
