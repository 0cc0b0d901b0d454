//! # Denomination Module
//!
//! The closed set of banknote face values a machine can handle.
//!
//! ## Why a Closed Enum?
//! A machine's note cassettes are physical: there is no such thing as a note
//! of arbitrary value showing up at runtime. Modeling the set as an enum
//! makes "unknown denomination" a parse-time failure (`TryFrom<u64>`) instead
//! of a silent zero-capacity entry, and gives every map keyed by
//! [`Denomination`] a total order by face value for free.
//!
//! ## Usage
//! ```rust
//! use teller_core::Denomination;
//!
//! let note = Denomination::try_from(500).unwrap();
//! assert_eq!(note, Denomination::FiveHundred);
//! assert_eq!(note.value(), 500);
//!
//! // No such note exists
//! assert!(Denomination::try_from(250).is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// =============================================================================
// Denomination Type
// =============================================================================

/// A banknote face value.
///
/// Variants are declared in ascending face-value order so the derived `Ord`
/// orders denominations by value. Maps keyed by `Denomination` therefore
/// iterate smallest-note-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Denomination {
    /// 10-unit note.
    Ten,
    /// 50-unit note.
    Fifty,
    /// 100-unit note.
    OneHundred,
    /// 500-unit note.
    FiveHundred,
    /// 1000-unit note.
    OneThousand,
    /// 2000-unit note.
    TwoThousand,
    /// 5000-unit note.
    FiveThousand,
}

impl Denomination {
    /// Every denomination the product line issues, in ascending face-value order.
    pub const ALL: [Denomination; 7] = [
        Denomination::Ten,
        Denomination::Fifty,
        Denomination::OneHundred,
        Denomination::FiveHundred,
        Denomination::OneThousand,
        Denomination::TwoThousand,
        Denomination::FiveThousand,
    ];

    /// Returns the face value of the note.
    #[inline]
    pub const fn value(&self) -> u64 {
        match self {
            Denomination::Ten => 10,
            Denomination::Fifty => 50,
            Denomination::OneHundred => 100,
            Denomination::FiveHundred => 500,
            Denomination::OneThousand => 1000,
            Denomination::TwoThousand => 2000,
            Denomination::FiveThousand => 5000,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Parses a raw face value into a denomination.
///
/// Fails with [`CoreError::UnknownDenomination`] for values the product line
/// does not issue. This is the only way raw integers enter the type system.
impl TryFrom<u64> for Denomination {
    type Error = CoreError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        match value {
            10 => Ok(Denomination::Ten),
            50 => Ok(Denomination::Fifty),
            100 => Ok(Denomination::OneHundred),
            500 => Ok(Denomination::FiveHundred),
            1000 => Ok(Denomination::OneThousand),
            2000 => Ok(Denomination::TwoThousand),
            5000 => Ok(Denomination::FiveThousand),
            other => Err(CoreError::UnknownDenomination { value: other }),
        }
    }
}

/// Display shows the face value.
///
/// This is for logs and receipts. Hosts format currency symbols themselves.
impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_ascending() {
        let values: Vec<u64> = Denomination::ALL.iter().map(|d| d.value()).collect();
        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(values, sorted);
        assert_eq!(values, vec![10, 50, 100, 500, 1000, 2000, 5000]);
    }

    #[test]
    fn test_ord_matches_face_value() {
        assert!(Denomination::Ten < Denomination::Fifty);
        assert!(Denomination::FiveHundred < Denomination::FiveThousand);

        let mut notes = vec![Denomination::FiveThousand, Denomination::Ten, Denomination::FiveHundred];
        notes.sort();
        assert_eq!(
            notes,
            vec![Denomination::Ten, Denomination::FiveHundred, Denomination::FiveThousand]
        );
    }

    #[test]
    fn test_try_from_round_trips() {
        for denomination in Denomination::ALL {
            assert_eq!(Denomination::try_from(denomination.value()).unwrap(), denomination);
        }
    }

    #[test]
    fn test_try_from_rejects_unknown_values() {
        for value in [0u64, 1, 25, 250, 10000] {
            let err = Denomination::try_from(value).unwrap_err();
            assert!(matches!(err, CoreError::UnknownDenomination { value: v } if v == value));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Denomination::Ten), "10");
        assert_eq!(format!("{}", Denomination::FiveThousand), "5000");
    }

    #[test]
    fn test_serde_uses_snake_case_names() {
        let json = serde_json::to_string(&Denomination::OneHundred).unwrap();
        assert_eq!(json, "\"one_hundred\"");

        let back: Denomination = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Denomination::OneHundred);
    }
}
