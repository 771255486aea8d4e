//! Pin consumers
//!
//! Each driver here asks for the narrowest set of capabilities it needs:
//!
//! - [`led::StatusLed`] - only drives its pin ([`pinion_hal::ValueSetter`])
//! - [`button::Button`] - only reads and waits ([`pinion_hal::ValueGetter`] +
//!   [`pinion_hal::EdgeWaiter`]); pull configuration is opt-in
//! - [`shift_register::ShiftRegister`] - bit-banged serial output over three
//!   [`pinion_hal::ValueSetter`] pins
//!
//! Supporting pieces:
//!
//! - [`pin_spec`] - parse pin names such as `"^gpio4"` from configuration
//! - [`compat`] - bridge to and from `embedded-hal` 1.0 digital traits

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod button;
pub mod compat;
pub mod led;
pub mod pin_spec;
pub mod shift_register;

pub use button::Button;
pub use compat::{FromHal, IntoHal};
pub use led::StatusLed;
pub use pin_spec::{PinPull, PinSpec, PinSpecError};
pub use shift_register::{BitOrder, ShiftRegister};
