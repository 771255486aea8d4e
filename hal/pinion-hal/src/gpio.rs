//! Value and direction capabilities
//!
//! Each trait covers one operation so that backends implement exactly what
//! their hardware supports and consumers ask for exactly what they use.

use crate::direction::Direction;
use crate::error::ErrorType;
use crate::value::Value;

/// Pin whose logic value can be sampled
///
/// The result reflects the signal at the time of the call. Any caching is
/// the backend's business.
pub trait ValueGetter: ErrorType {
    /// Read the current logic value
    ///
    /// On error the signal could not be sampled (hardware fault, backend
    /// gone, I/O error) and no value is available.
    fn value(&mut self) -> Result<Value, Self::Error>;

    /// Check if the pin reads high
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.value().map(Value::is_high)
    }

    /// Check if the pin reads low
    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.value().map(Value::is_low)
    }
}

/// Pin that can assert a logic value
///
/// This is the only capability whose purpose is to change the electrical
/// state outside the program.
pub trait ValueSetter: ErrorType {
    /// Drive `value` onto the signal
    ///
    /// Fails if the signal cannot be driven, for example because the pin is
    /// currently an input.
    fn set_value(&mut self, value: Value) -> Result<(), Self::Error>;

    /// Drive the pin high
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set_value(Value::High)
    }

    /// Drive the pin low
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set_value(Value::Low)
    }
}

/// Pin whose data direction can be configured
///
/// Direction is independent of the value capabilities. Callers set the
/// direction before relying on read or write semantics; what happens when a
/// value operation runs in the wrong direction is up to the backend (an
/// error, or undefined hardware behaviour).
pub trait DirectionSetter: ErrorType {
    /// Use the pin for input or output from now on
    fn set_direction(&mut self, direction: Direction) -> Result<(), Self::Error>;
}

/// The most commonly available pin operations: pick a direction, then read
/// or write depending on that direction
///
/// This aggregate exists to describe what pin constructors return. Drivers
/// that consume pins without needing bidirectional access (the common case)
/// should be generic over [`ValueGetter`] or [`ValueSetter`] instead, so the
/// signature tells the user how the pin is used and two drivers driving the
/// same signal stand out.
pub trait GpioPin: ValueGetter + ValueSetter + DirectionSetter {}

// Blanket implementation for types that implement all three capabilities
impl<T: ValueGetter + ValueSetter + DirectionSetter + ?Sized> GpioPin for T {}

impl<T: ValueGetter + ?Sized> ValueGetter for &mut T {
    #[inline]
    fn value(&mut self) -> Result<Value, Self::Error> {
        T::value(self)
    }
}

impl<T: ValueSetter + ?Sized> ValueSetter for &mut T {
    #[inline]
    fn set_value(&mut self, value: Value) -> Result<(), Self::Error> {
        T::set_value(self, value)
    }
}

impl<T: DirectionSetter + ?Sized> DirectionSetter for &mut T {
    #[inline]
    fn set_direction(&mut self, direction: Direction) -> Result<(), Self::Error> {
        T::set_direction(self, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    /// Mock pin backed by a latch, refusing writes while an input
    struct MockPin {
        direction: Direction,
        latch: Value,
    }

    impl MockPin {
        fn new() -> Self {
            Self {
                direction: Direction::In,
                latch: Value::Low,
            }
        }
    }

    impl ErrorType for MockPin {
        type Error = ErrorKind;
    }

    impl ValueGetter for MockPin {
        fn value(&mut self) -> Result<Value, ErrorKind> {
            Ok(self.latch)
        }
    }

    impl ValueSetter for MockPin {
        fn set_value(&mut self, value: Value) -> Result<(), ErrorKind> {
            if self.direction != Direction::Out {
                return Err(ErrorKind::WrongDirection);
            }
            self.latch = value;
            Ok(())
        }
    }

    impl DirectionSetter for MockPin {
        fn set_direction(&mut self, direction: Direction) -> Result<(), ErrorKind> {
            self.direction = direction;
            Ok(())
        }
    }

    fn make_pin() -> impl GpioPin<Error = ErrorKind> {
        MockPin::new()
    }

    #[test]
    fn test_write_then_read_observes_value() {
        let mut pin = make_pin();
        pin.set_direction(Direction::Out).unwrap();

        for value in [Value::High, Value::Low, Value::High] {
            pin.set_value(value).unwrap();
            assert_eq!(pin.value(), Ok(value));
        }
    }

    #[test]
    fn test_write_in_wrong_direction_is_an_error() {
        let mut pin = make_pin();
        assert_eq!(pin.set_high(), Err(ErrorKind::WrongDirection));
        // Latch untouched
        assert_eq!(pin.is_low(), Ok(true));
    }

    #[test]
    fn test_provided_helpers() {
        let mut pin = MockPin::new();
        pin.set_direction(Direction::Out).unwrap();
        pin.set_high().unwrap();
        assert_eq!(pin.is_high(), Ok(true));
        pin.set_low().unwrap();
        assert_eq!(pin.is_high(), Ok(false));
    }

    #[test]
    fn test_narrow_bounds_accept_borrowed_pin() {
        fn read<P: ValueGetter>(mut pin: P) -> Result<Value, P::Error> {
            pin.value()
        }
        fn write<P: ValueSetter>(mut pin: P, value: Value) -> Result<(), P::Error> {
            pin.set_value(value)
        }

        let mut pin = MockPin::new();
        pin.set_direction(Direction::Out).unwrap();
        write(&mut pin, Value::High).unwrap();
        assert_eq!(read(&mut pin), Ok(Value::High));
    }
}
