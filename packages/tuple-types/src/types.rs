//! Fixed-width field type definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of data bytes in a fixed-width text field.
///
/// Text values are stored as a 4-byte length prefix followed by exactly this
/// many bytes of UTF-8 data (zero-padded), so every text field occupies
/// `TEXT_FIELD_LEN + 4` bytes regardless of its contents.
pub const TEXT_FIELD_LEN: usize = 128;

/// Field types supported by the tuple core.
///
/// Every kind has a fixed, statically known byte length; there is no
/// variable-length kind. Page layout and slot-capacity planning rely on
/// [`FieldType::byte_size`] being exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    /// 32-bit signed integer.
    Int,
    /// Fixed-width UTF-8 string (length prefix plus [`TEXT_FIELD_LEN`] data bytes).
    Text,
}

impl FieldType {
    /// Returns the size in bytes a value of this type occupies on the wire.
    ///
    /// For `Text` this includes the 4-byte length prefix.
    pub fn byte_size(&self) -> usize {
        match self {
            FieldType::Int => 4,
            FieldType::Text => TEXT_FIELD_LEN + 4,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Int => write!(f, "int"),
            FieldType::Text => write!(f, "text"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_byte_size() {
        assert_eq!(FieldType::Int.byte_size(), 4);
    }

    #[test]
    fn test_text_byte_size() {
        assert_eq!(FieldType::Text.byte_size(), 132);
        assert_eq!(FieldType::Text.byte_size(), TEXT_FIELD_LEN + 4);
    }

    #[test]
    fn test_type_display() {
        assert_eq!(FieldType::Int.to_string(), "int");
        assert_eq!(FieldType::Text.to_string(), "text");
    }

    #[test]
    fn test_type_serialization() {
        let json = serde_json::to_string(&FieldType::Int).unwrap();
        let decoded: FieldType = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, FieldType::Int);
    }
}
