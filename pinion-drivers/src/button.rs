//! Push button input
//!
//! Reads a momentary switch and blocks until it is pressed or released.
//! No debouncing is done here; a bouncing contact produces several edges.

use pinion_hal::{DownPuller, EdgeSensitivity, EdgeWaiter, UpPuller, Value, ValueGetter};

/// Push button on an input pin
///
/// Reading the state only needs [`ValueGetter`]; waiting also needs
/// [`EdgeWaiter`]. Pull resistor setup is available only for pins that
/// have the matching pull capability.
pub struct Button<P> {
    pin: P,
    /// Pin level while the button is held down
    pressed: Value,
}

impl<P: ValueGetter> Button<P> {
    /// Button that pulls the pin low when pressed
    pub fn new_active_low(pin: P) -> Self {
        Self {
            pin,
            pressed: Value::Low,
        }
    }

    /// Button that pulls the pin high when pressed
    pub fn new_active_high(pin: P) -> Self {
        Self {
            pin,
            pressed: Value::High,
        }
    }

    /// Pin level while the button is held down
    pub fn pressed_level(&self) -> Value {
        self.pressed
    }

    /// Check if the button is held down right now
    pub fn is_pressed(&mut self) -> Result<bool, P::Error> {
        Ok(self.pin.value()? == self.pressed)
    }

    /// Release the pin
    pub fn free(self) -> P {
        self.pin
    }
}

impl<P: ValueGetter + UpPuller> Button<P> {
    /// Active-low button relying on the pin's internal pull-up
    pub fn new_pulled_up(mut pin: P) -> Result<Self, P::Error> {
        pin.pull_up()?;
        Ok(Self::new_active_low(pin))
    }
}

impl<P: ValueGetter + DownPuller> Button<P> {
    /// Active-high button relying on the pin's internal pull-down
    pub fn new_pulled_down(mut pin: P) -> Result<Self, P::Error> {
        pin.pull_down()?;
        Ok(Self::new_active_high(pin))
    }
}

impl<P: ValueGetter + EdgeWaiter> Button<P> {
    fn press_edge(&self) -> EdgeSensitivity {
        match self.pressed {
            Value::Low => EdgeSensitivity::FallingEdge,
            Value::High => EdgeSensitivity::RisingEdge,
        }
    }

    fn release_edge(&self) -> EdgeSensitivity {
        match self.pressed {
            Value::Low => EdgeSensitivity::RisingEdge,
            Value::High => EdgeSensitivity::FallingEdge,
        }
    }

    /// Block until the next press
    ///
    /// A button already held down when this is called must be released and
    /// pressed again.
    pub fn wait_for_press(&mut self) -> Result<(), P::Error> {
        let edge = self.press_edge();
        self.pin.set_sensitivity(edge)?;
        self.pin.wait_for_edge()
    }

    /// Block until the button is released
    ///
    /// Returns at once if it is not held down.
    pub fn wait_for_release(&mut self) -> Result<(), P::Error> {
        let edge = self.release_edge();
        self.pin.set_sensitivity(edge)?;
        if !self.is_pressed()? {
            return Ok(());
        }
        self.pin.wait_for_edge()
    }

    /// Block for a full press and release
    pub fn wait_for_click(&mut self) -> Result<(), P::Error> {
        self.wait_for_press()?;
        self.wait_for_release()
    }

    /// Stop watching for edges
    pub fn disarm(&mut self) -> Result<(), P::Error> {
        self.pin.set_sensitivity(EdgeSensitivity::NoEdges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinion_hal_sim::{Pull, SimConfig, SimLine};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    fn pulled_up_line() -> SimLine {
        SimLine::with_config(SimConfig::PULLED_UP_INPUT.with_label("button"))
    }

    #[test]
    fn test_is_pressed_active_low() {
        let line = pulled_up_line();
        let mut button = Button::new_active_low(line.pin());

        assert_eq!(button.is_pressed(), Ok(false));
        line.drive(Value::Low);
        assert_eq!(button.is_pressed(), Ok(true));
        line.release();
        assert_eq!(button.is_pressed(), Ok(false));
    }

    #[test]
    fn test_new_pulled_up_enables_pull() {
        let line = SimLine::new();
        let mut button = Button::new_pulled_up(line.pin()).unwrap();

        assert_eq!(line.pull(), Pull::Up);
        assert_eq!(button.pressed_level(), Value::Low);
        assert_eq!(button.is_pressed(), Ok(false));
    }

    #[test]
    fn test_new_pulled_down_enables_pull() {
        let line = SimLine::with_config(SimConfig::PULLED_UP_INPUT);
        let mut button = Button::new_pulled_down(line.pin()).unwrap();

        assert_eq!(line.pull(), Pull::Down);
        assert_eq!(button.is_pressed(), Ok(false));
        line.drive(Value::High);
        assert_eq!(button.is_pressed(), Ok(true));
    }

    #[test]
    fn test_wait_for_click_from_other_thread() {
        let line = pulled_up_line();
        let mut button = Button::new_active_low(line.pin());

        let done = Arc::new(AtomicBool::new(false));
        let presser = line.clone();
        let stop = done.clone();
        // Keep clicking until the waiter has seen a whole click
        let handle = thread::spawn(move || {
            while !stop.load(Ordering::Acquire) {
                presser.drive(Value::Low);
                thread::sleep(Duration::from_millis(5));
                presser.release();
                thread::sleep(Duration::from_millis(5));
            }
        });

        button.wait_for_click().unwrap();
        done.store(true, Ordering::Release);
        handle.join().unwrap();
        assert_eq!(button.is_pressed(), Ok(false));
    }

    #[test]
    fn test_wait_for_release_returns_when_not_pressed() {
        let line = pulled_up_line();
        let mut button = Button::new_active_low(line.pin());
        button.wait_for_release().unwrap();
    }

    #[test]
    fn test_disconnect_surfaces_as_error() {
        let line = pulled_up_line();
        let mut button = Button::new_active_low(line.pin());
        line.disconnect();
        assert!(button.wait_for_press().is_err());
        assert!(button.disarm().is_err());
    }
}
