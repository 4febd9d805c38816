//! In-memory tuple and schema representation for a relational storage engine.
//!
//! Provides the schema descriptor shared by all tuples of a relation and the
//! tuple value type built against it. Higher layers (page storage, query
//! operators, buffer management) consume these through size accounting,
//! ordered field traversal, and the textual dump format.

pub mod error;
pub mod schema;
pub mod tuple;

pub use error::{SchemaError, TupleError};
pub use schema::{SchemaDescriptor, SchemaItem};
pub use tuple::Tuple;
