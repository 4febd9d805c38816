//! Opaque physical record locations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Physical position of a tuple as assigned by the storage layer.
///
/// The tuple core stores and returns locations without interpreting them;
/// page and slot semantics belong entirely to the storage layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    page_no: u64,
    slot: u16,
}

impl Location {
    /// Creates a location from a page number and slot index.
    pub fn new(page_no: u64, slot: u16) -> Self {
        Self { page_no, slot }
    }

    /// Returns the page number.
    pub fn page_no(&self) -> u64 {
        self.page_no
    }

    /// Returns the slot index within the page.
    pub fn slot(&self) -> u16 {
        self.slot
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.page_no, self.slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let loc = Location::new(3, 7);
        assert_eq!(loc.page_no(), 3);
        assert_eq!(loc.slot(), 7);
    }

    #[test]
    fn test_equality_and_copy() {
        let a = Location::new(1, 2);
        let b = a;
        assert_eq!(a, b);
        assert_ne!(a, Location::new(1, 3));
        assert_ne!(a, Location::new(2, 2));
    }

    #[test]
    fn test_display() {
        assert_eq!(Location::new(12, 4).to_string(), "12:4");
    }

    #[test]
    fn test_serialization() {
        let loc = Location::new(9, 1);
        let json = serde_json::to_string(&loc).unwrap();
        let decoded: Location = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, loc);
    }
}
