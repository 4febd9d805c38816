//! Tagged field values and their fixed-width binary encoding.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{FieldType, TEXT_FIELD_LEN};

/// Error type for field value decoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The input buffer is shorter than the type's fixed width.
    #[error("expected {expected} bytes for {ty} field, got {got}")]
    TruncatedInput {
        /// The field type being decoded.
        ty: FieldType,
        /// The type's fixed byte width.
        expected: usize,
        /// Bytes actually available.
        got: usize,
    },

    /// The text length prefix exceeds the fixed data width.
    #[error("text length prefix {len} exceeds maximum {max}")]
    InvalidLengthPrefix { len: usize, max: usize },

    /// The text payload is not valid UTF-8.
    #[error("text field bytes are not valid UTF-8")]
    InvalidUtf8,
}

/// One typed value occupying a tuple slot.
///
/// Each variant corresponds to exactly one [`FieldType`]. Values are owned by
/// the slot that holds them; replacing a slot's value discards the old one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldValue {
    /// 32-bit signed integer.
    Int(i32),
    /// UTF-8 string, at most [`TEXT_FIELD_LEN`] bytes.
    Text(String),
}

impl FieldValue {
    /// Creates an integer value.
    pub fn int(value: i32) -> Self {
        FieldValue::Int(value)
    }

    /// Creates a text value, truncating to [`TEXT_FIELD_LEN`] bytes.
    ///
    /// Truncation happens on a character boundary so the stored string is
    /// always valid UTF-8.
    pub fn text(value: impl Into<String>) -> Self {
        let mut s: String = value.into();
        if s.len() > TEXT_FIELD_LEN {
            s.truncate(floor_char_boundary(&s, TEXT_FIELD_LEN));
        }
        FieldValue::Text(s)
    }

    /// Returns the type tag of this value.
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldValue::Int(_) => FieldType::Int,
            FieldValue::Text(_) => FieldType::Text,
        }
    }

    /// Appends the fixed-width big-endian encoding of this value to `buf`.
    ///
    /// Exactly `self.field_type().byte_size()` bytes are written: integers as
    /// 4 big-endian bytes, text as a 4-byte big-endian length prefix followed
    /// by the UTF-8 data zero-padded to [`TEXT_FIELD_LEN`].
    pub fn encode(&self, buf: &mut Vec<u8>) {
        match self {
            FieldValue::Int(v) => buf.extend_from_slice(&v.to_be_bytes()),
            FieldValue::Text(s) => {
                // Values built through `text()` already fit; clamp anyway so a
                // hand-built oversized variant cannot corrupt the fixed frame.
                let data = &s.as_bytes()[..floor_char_boundary(s, TEXT_FIELD_LEN)];
                buf.extend_from_slice(&(data.len() as u32).to_be_bytes());
                buf.extend_from_slice(data);
                buf.extend(std::iter::repeat_n(0u8, TEXT_FIELD_LEN - data.len()));
            }
        }
    }

    /// Decodes a value of type `ty` from the front of `bytes`.
    ///
    /// # Returns
    /// The decoded value, or `Err(FieldError)` if the buffer is shorter than
    /// the type's fixed width, the length prefix is out of range, or the text
    /// payload is not valid UTF-8.
    pub fn decode(ty: FieldType, bytes: &[u8]) -> Result<FieldValue, FieldError> {
        let expected = ty.byte_size();
        if bytes.len() < expected {
            return Err(FieldError::TruncatedInput {
                ty,
                expected,
                got: bytes.len(),
            });
        }
        match ty {
            FieldType::Int => {
                let mut raw = [0u8; 4];
                raw.copy_from_slice(&bytes[..4]);
                Ok(FieldValue::Int(i32::from_be_bytes(raw)))
            }
            FieldType::Text => {
                let mut raw = [0u8; 4];
                raw.copy_from_slice(&bytes[..4]);
                let len = u32::from_be_bytes(raw) as usize;
                if len > TEXT_FIELD_LEN {
                    return Err(FieldError::InvalidLengthPrefix {
                        len,
                        max: TEXT_FIELD_LEN,
                    });
                }
                let data = &bytes[4..4 + len];
                let text = std::str::from_utf8(data)
                    .map_err(|_| FieldError::InvalidUtf8)?
                    .to_string();
                Ok(FieldValue::Text(text))
            }
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(v) => write!(f, "{}", v),
            FieldValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Largest index `<= max` that lands on a character boundary of `s`.
fn floor_char_boundary(s: &str, max: usize) -> usize {
    if max >= s.len() {
        return s.len();
    }
    let mut idx = max;
    while !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}
