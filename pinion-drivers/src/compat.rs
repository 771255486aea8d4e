//! Bridge to and from `embedded-hal` 1.0 digital pins
//!
//! [`IntoHal`] lets a capability pin be handed to a crate written against
//! `embedded-hal`. [`FromHal`] goes the other way, so a chip HAL pin can be
//! used with the drivers in this crate.
//!
//! Only the capabilities both sides have in common are bridged: value read
//! and value write. `embedded-hal` has no blocking edge wait, so
//! [`pinion_hal::EdgeWaiter`] is not bridged.

use embedded_hal::digital;
use pinion_hal::{ErrorKind, ErrorType, Value, ValueGetter, ValueSetter};

/// Capability pin seen through `embedded-hal` traits
///
/// Implements `InputPin` if the pin is a [`ValueGetter`], `OutputPin` if it
/// is a [`ValueSetter`], and `StatefulOutputPin` if it is both.
pub struct IntoHal<P> {
    pin: P,
}

impl<P> IntoHal<P> {
    /// Wrap a capability pin
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Unwrap the capability pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

/// Capability error reported through `embedded-hal`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntoHalError<E>(pub E);

impl<E: pinion_hal::Error> digital::Error for IntoHalError<E> {
    fn kind(&self) -> digital::ErrorKind {
        // embedded-hal digital errors carry no finer classification;
        // the backend kind stays reachable through `.0`
        digital::ErrorKind::Other
    }
}

impl<P: ErrorType> digital::ErrorType for IntoHal<P> {
    type Error = IntoHalError<P::Error>;
}

impl<P: ValueGetter> digital::InputPin for IntoHal<P> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        ValueGetter::is_high(&mut self.pin).map_err(IntoHalError)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        ValueGetter::is_low(&mut self.pin).map_err(IntoHalError)
    }
}

impl<P: ValueSetter> digital::OutputPin for IntoHal<P> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.pin.set_value(Value::Low).map_err(IntoHalError)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.pin.set_value(Value::High).map_err(IntoHalError)
    }
}

impl<P: ValueGetter + ValueSetter> digital::StatefulOutputPin for IntoHal<P> {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        ValueGetter::is_high(&mut self.pin).map_err(IntoHalError)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        ValueGetter::is_low(&mut self.pin).map_err(IntoHalError)
    }
}

/// `embedded-hal` pin seen through capability traits
///
/// Implements [`ValueGetter`] for an `InputPin` and [`ValueSetter`] for an
/// `OutputPin`.
pub struct FromHal<P> {
    pin: P,
}

impl<P> FromHal<P> {
    /// Wrap an `embedded-hal` pin
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Unwrap the `embedded-hal` pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

/// `embedded-hal` error reported through the capability traits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FromHalError<E>(pub E);

impl<E: digital::Error> pinion_hal::Error for FromHalError<E> {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

impl<P: digital::ErrorType> ErrorType for FromHal<P> {
    type Error = FromHalError<P::Error>;
}

impl<P: digital::InputPin> ValueGetter for FromHal<P> {
    fn value(&mut self) -> Result<Value, Self::Error> {
        self.pin.is_high().map(Value::from).map_err(FromHalError)
    }
}

impl<P: digital::OutputPin> ValueSetter for FromHal<P> {
    fn set_value(&mut self, value: Value) -> Result<(), Self::Error> {
        let result = match value {
            Value::Low => self.pin.set_low(),
            Value::High => self.pin.set_high(),
        };
        result.map_err(FromHalError)
    }
}
