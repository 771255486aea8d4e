//! Pin direction domain

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{invalid_tag, Domain, ParseError};

/// Whether a pin measures a signal or asserts one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Direction {
    /// Reading data (measuring a signal)
    In = 0,
    /// Writing data (asserting a signal)
    Out = 1,
}

impl Direction {
    /// All directions, in tag order
    pub const ALL: [Direction; 2] = [Direction::In, Direction::Out];

    /// Get the raw tag
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Create a direction from a raw tag
    pub fn from_u8(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Direction::In),
            1 => Some(Direction::Out),
            _ => None,
        }
    }

    /// Textual form: `"In"` or `"Out"`
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::In => "In",
            Direction::Out => "Out",
        }
    }

    /// Textual form of a raw tag
    ///
    /// # Panics
    ///
    /// Panics if `tag` is not a `Direction` tag.
    #[track_caller]
    pub fn name_of(tag: u8) -> &'static str {
        match Self::from_u8(tag) {
            Some(direction) => direction.as_str(),
            None => invalid_tag(Domain::Direction, tag),
        }
    }

    /// Get the opposite direction
    pub fn opposite(self) -> Self {
        match self {
            Direction::In => Direction::Out,
            Direction::Out => Direction::In,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or(ParseError::new(Domain::Direction))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use serde::de::value::{Error as DeError, StrDeserializer};
    use serde::de::IntoDeserializer;
    use serde::Deserialize;

    fn from_name(name: &str) -> Result<Direction, DeError> {
        let de: StrDeserializer<'_, DeError> = name.into_deserializer();
        Direction::deserialize(de)
    }

    #[test]
    fn test_deserializes_from_tag_names() {
        for tag in Direction::ALL {
            assert_eq!(from_name(tag.as_str()), Ok(tag));
        }
    }

    #[test]
    fn test_rejects_unknown_names() {
        assert!(from_name("Inout").is_err());
        assert!(from_name("out").is_err());
        assert!(from_name("").is_err());
    }
}
