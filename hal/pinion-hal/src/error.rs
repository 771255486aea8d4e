//! Error model shared by every capability
//!
//! Backend failures travel through each operation's `Result`. Each backend
//! picks its own error type and exposes it once through [`ErrorType`], so a
//! device implementing several capabilities reports a single error type.
//!
//! Contract violations (asking for the name of a raw tag outside a domain)
//! are not errors; they panic.

use core::convert::Infallible;
use core::fmt;

/// Backend-independent classification of a capability failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum ErrorKind {
    /// The backend (chip, expander, bus) is unreachable
    Disconnected,
    /// The operating system or hardware refused access to the pin
    PermissionDenied,
    /// The operation needs the other pin direction (e.g. driving an input)
    WrongDirection,
    /// The hardware cannot perform the requested configuration
    Unsupported,
    /// Any other backend failure
    Other,
}

impl ErrorKind {
    /// Short human readable description
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Disconnected => "backend disconnected",
            ErrorKind::PermissionDenied => "permission denied",
            ErrorKind::WrongDirection => "pin configured for the other direction",
            ErrorKind::Unsupported => "operation not supported by hardware",
            ErrorKind::Other => "backend failure",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error reported by a capability operation
///
/// Backends keep their own rich error types and map them onto an
/// [`ErrorKind`] so generic consumers can react without knowing the backend.
pub trait Error: fmt::Debug {
    /// Classify this error
    fn kind(&self) -> ErrorKind;
}

impl Error for Infallible {
    fn kind(&self) -> ErrorKind {
        match *self {}
    }
}

impl Error for ErrorKind {
    fn kind(&self) -> ErrorKind {
        *self
    }
}

/// Associates an error type with a pin
///
/// Every capability trait has this as its supertrait, so all capabilities of
/// one device share the same `Error`.
pub trait ErrorType {
    /// Error type for all operations on this pin
    type Error: Error;
}

impl<T: ErrorType + ?Sized> ErrorType for &mut T {
    type Error = T::Error;
}

/// The enumerated domains of this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Domain {
    /// [`crate::Value`]
    Value,
    /// [`crate::Direction`]
    Direction,
    /// [`crate::EdgeSensitivity`]
    EdgeSensitivity,
}

impl Domain {
    /// Type name of the domain
    pub fn as_str(self) -> &'static str {
        match self {
            Domain::Value => "Value",
            Domain::Direction => "Direction",
            Domain::EdgeSensitivity => "EdgeSensitivity",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A string did not name any tag of the domain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParseError {
    domain: Domain,
}

impl ParseError {
    pub(crate) const fn new(domain: Domain) -> Self {
        Self { domain }
    }

    /// Domain that failed to parse
    pub fn domain(&self) -> Domain {
        self.domain
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized {} name", self.domain)
    }
}

/// Abort on a raw tag outside its domain
///
/// Reaching this is a bug in the caller, never an I/O condition.
#[cold]
#[track_caller]
pub(crate) fn invalid_tag(domain: Domain, tag: u8) -> ! {
    panic!("cannot name invalid {} tag {}", domain, tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_is_its_own_error() {
        assert_eq!(ErrorKind::WrongDirection.kind(), ErrorKind::WrongDirection);
        assert_eq!(ErrorKind::Other.kind(), ErrorKind::Other);
    }

    #[test]
    fn test_parse_error_names_domain() {
        let err = ParseError::new(Domain::EdgeSensitivity);
        assert_eq!(err.domain(), Domain::EdgeSensitivity);
    }

    #[test]
    fn test_domain_names() {
        assert_eq!(Domain::Value.as_str(), "Value");
        assert_eq!(Domain::Direction.as_str(), "Direction");
        assert_eq!(Domain::EdgeSensitivity.as_str(), "EdgeSensitivity");
    }

    #[test]
    #[should_panic(expected = "cannot name invalid Direction tag 7")]
    fn test_invalid_tag_panics() {
        invalid_tag(Domain::Direction, 7);
    }
}
