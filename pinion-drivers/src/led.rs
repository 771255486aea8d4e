//! Status LED output
//!
//! An indicator LED on a GPIO pin, directly or through a transistor.

use pinion_hal::{Value, ValueSetter};

/// Status LED
///
/// Only needs to drive its pin. The pin can be wired active-high (default)
/// or active-low (LED between the pin and the supply rail).
pub struct StatusLed<P> {
    pin: P,
    /// If true, LED ON = pin LOW
    inverted: bool,
    /// Current logical state (true = lit)
    on: bool,
}

impl<P: ValueSetter> StatusLed<P> {
    /// Create a new status LED, switched off
    ///
    /// # Arguments
    /// - `pin`: The pin driving the LED, already configured as output
    /// - `inverted`: If true, the LED is lit when the pin is LOW
    pub fn new(pin: P, inverted: bool) -> Result<Self, P::Error> {
        let mut led = Self {
            pin,
            inverted,
            on: false,
        };
        // Ensure LED starts off
        led.set_on(false)?;
        Ok(led)
    }

    /// Create a new LED with active-high wiring
    pub fn new_active_high(pin: P) -> Result<Self, P::Error> {
        Self::new(pin, false)
    }

    /// Create a new LED with active-low wiring
    pub fn new_active_low(pin: P) -> Result<Self, P::Error> {
        Self::new(pin, true)
    }

    /// Switch the LED on or off
    ///
    /// The logical state only changes if the pin accepted the write.
    pub fn set_on(&mut self, on: bool) -> Result<(), P::Error> {
        // Normal: on=true, inverted=false → high
        // Inverted: on=true, inverted=true → low
        self.pin.set_value(Value::from(on != self.inverted))?;
        self.on = on;
        Ok(())
    }

    /// Invert the LED state
    pub fn toggle(&mut self) -> Result<(), P::Error> {
        self.set_on(!self.on)
    }

    /// Check if the LED is lit
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Release the pin
    pub fn free(self) -> P {
        self.pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinion_hal::{ErrorKind, ErrorType};

    /// Mock output recording the last driven value
    struct MockPin {
        value: Value,
        fail: bool,
    }

    impl MockPin {
        fn new() -> Self {
            Self {
                value: Value::Low,
                fail: false,
            }
        }
    }

    impl ErrorType for MockPin {
        type Error = ErrorKind;
    }

    impl ValueSetter for MockPin {
        fn set_value(&mut self, value: Value) -> Result<(), ErrorKind> {
            if self.fail {
                return Err(ErrorKind::Disconnected);
            }
            self.value = value;
            Ok(())
        }
    }

    #[test]
    fn test_active_high_led() {
        let mut led = StatusLed::new_active_high(MockPin::new()).unwrap();

        // Initially off
        assert!(!led.is_on());
        assert_eq!(led.pin.value, Value::Low);

        led.set_on(true).unwrap();
        assert!(led.is_on());
        assert_eq!(led.pin.value, Value::High);

        led.set_on(false).unwrap();
        assert!(!led.is_on());
        assert_eq!(led.pin.value, Value::Low);
    }

    #[test]
    fn test_active_low_led() {
        let mut led = StatusLed::new_active_low(MockPin::new()).unwrap();

        // Initially off (pin is high for active-low)
        assert!(!led.is_on());
        assert_eq!(led.pin.value, Value::High);

        // Turn on (pin goes low for active-low)
        led.set_on(true).unwrap();
        assert_eq!(led.pin.value, Value::Low);
    }

    #[test]
    fn test_toggle() {
        let mut led = StatusLed::new_active_high(MockPin::new()).unwrap();
        led.toggle().unwrap();
        assert!(led.is_on());
        led.toggle().unwrap();
        assert!(!led.is_on());
    }

    #[test]
    fn test_failed_write_keeps_state() {
        let mut led = StatusLed::new_active_high(MockPin::new()).unwrap();
        led.pin.fail = true;

        assert_eq!(led.set_on(true), Err(ErrorKind::Disconnected));
        assert!(!led.is_on());

        let pin = led.free();
        assert_eq!(pin.value, Value::Low);
    }

    #[test]
    fn test_construction_reports_backend_error() {
        let mut pin = MockPin::new();
        pin.fail = true;
        assert!(StatusLed::new_active_high(pin).is_err());
    }
}
