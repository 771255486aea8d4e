//! Logic value domain

use core::fmt;
use core::ops::Not;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{invalid_tag, Domain, ParseError};

/// Logic level of a GPIO signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Value {
    /// Logic low (logic 0)
    Low = 0,
    /// Logic high (logic 1)
    High = 1,
}

impl Value {
    /// All values, in tag order
    pub const ALL: [Value; 2] = [Value::Low, Value::High];

    /// Get the raw tag
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Create a value from a raw tag
    pub fn from_u8(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Value::Low),
            1 => Some(Value::High),
            _ => None,
        }
    }

    /// Textual form: `"Low"` or `"High"`
    pub fn as_str(self) -> &'static str {
        match self {
            Value::Low => "Low",
            Value::High => "High",
        }
    }

    /// Textual form of a raw tag
    ///
    /// # Panics
    ///
    /// Panics if `tag` is not a `Value` tag.
    #[track_caller]
    pub fn name_of(tag: u8) -> &'static str {
        match Self::from_u8(tag) {
            Some(value) => value.as_str(),
            None => invalid_tag(Domain::Value, tag),
        }
    }

    /// Check for logic high
    pub fn is_high(self) -> bool {
        self == Value::High
    }

    /// Check for logic low
    pub fn is_low(self) -> bool {
        self == Value::Low
    }
}

impl Not for Value {
    type Output = Value;

    fn not(self) -> Value {
        match self {
            Value::Low => Value::High,
            Value::High => Value::Low,
        }
    }
}

impl From<bool> for Value {
    fn from(high: bool) -> Self {
        if high {
            Value::High
        } else {
            Value::Low
        }
    }
}

impl From<Value> for bool {
    fn from(value: Value) -> Self {
        value.is_high()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Value {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or(ParseError::new(Domain::Value))
    }
}
