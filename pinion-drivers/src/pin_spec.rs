//! Pin names from configuration files
//!
//! Supports formats:
//! - `"gpio11"` - pin 11
//! - `"!gpio12"` - pin 12, inverted (active-low)
//! - `"^gpio4"` - pin 4 with pull-up
//! - `"~gpio5"` - pin 5 with pull-down
//!
//! Modifiers may be combined in any order (`"^!gpio4"`), each at most once.

use pinion_hal::{Puller, Value};

/// Name prefix before the pin number
pub const PIN_PREFIX: &str = "gpio";

/// Pull resistor requested for a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinPull {
    /// Leave the pull resistor disabled
    #[default]
    None,
    /// Enable the pull-up
    Up,
    /// Enable the pull-down
    Down,
}

/// Errors from parsing a pin name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinSpecError {
    /// Name does not start with [`PIN_PREFIX`] after the modifiers
    MissingPrefix,
    /// Pin number missing or not a number
    InvalidNumber,
    /// Pin number not below the pin count
    OutOfRange,
    /// Same modifier given twice, or both `^` and `~`
    ConflictingModifiers,
}

/// A parsed pin name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinSpec {
    /// Pin number
    pub number: u8,
    /// Active-low wiring
    pub inverted: bool,
    /// Requested pull resistor
    pub pull: PinPull,
}

impl PinSpec {
    /// Parse a pin name for a chip with `pin_count` pins
    pub fn parse(s: &str, pin_count: u8) -> Result<Self, PinSpecError> {
        let mut rest = s.trim();
        let mut inverted = false;
        let mut pull = PinPull::None;

        loop {
            let modifier = match rest.chars().next() {
                Some(c @ ('!' | '^' | '~')) => c,
                _ => break,
            };
            match modifier {
                '!' if !inverted => inverted = true,
                '^' if pull == PinPull::None => pull = PinPull::Up,
                '~' if pull == PinPull::None => pull = PinPull::Down,
                _ => return Err(PinSpecError::ConflictingModifiers),
            }
            rest = &rest[1..];
        }

        let digits = rest
            .strip_prefix(PIN_PREFIX)
            .ok_or(PinSpecError::MissingPrefix)?;
        // `u8::from_str` also takes a leading `+`
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PinSpecError::InvalidNumber);
        }
        let number: u8 = digits.parse().map_err(|_| PinSpecError::InvalidNumber)?;
        if number >= pin_count {
            return Err(PinSpecError::OutOfRange);
        }

        Ok(Self {
            number,
            inverted,
            pull,
        })
    }

    /// Pin level meaning "active"
    pub fn active_level(&self) -> Value {
        if self.inverted {
            Value::Low
        } else {
            Value::High
        }
    }

    /// Pin level for a logical on/off state
    pub fn level_for(&self, active: bool) -> Value {
        if active {
            self.active_level()
        } else {
            !self.active_level()
        }
    }

    /// Configure the pin's pull resistor as requested
    ///
    /// Always issues exactly one pull operation, so a previous pull is
    /// cleared when the spec asks for none.
    pub fn apply_pull<P: Puller>(&self, pin: &mut P) -> Result<(), P::Error> {
        match self.pull {
            PinPull::None => pin.stop_pulling(),
            PinPull::Up => pin.pull_up(),
            PinPull::Down => pin.pull_down(),
        }
    }
}
