//! Errors reported by simulated pins

use core::fmt;

use pinion_hal::ErrorKind;

/// Errors from simulated pin operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimError {
    /// The line was disconnected with [`crate::SimLine::disconnect`]
    Disconnected,
    /// A value was written while the pin is an input
    WrongDirection,
}

impl pinion_hal::Error for SimError {
    fn kind(&self) -> ErrorKind {
        match self {
            SimError::Disconnected => ErrorKind::Disconnected,
            SimError::WrongDirection => ErrorKind::WrongDirection,
        }
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::Disconnected => f.write_str("simulated line disconnected"),
            SimError::WrongDirection => f.write_str("cannot drive a pin configured as input"),
        }
    }
}

impl std::error::Error for SimError {}
