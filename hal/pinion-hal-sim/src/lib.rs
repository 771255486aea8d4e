//! Simulated GPIO backend
//!
//! A [`SimLine`] models one electrical signal. Any number of [`SimPin`]
//! handles can be taken from it; each implements every `pinion-hal`
//! capability, so a `SimPin` is both a [`pinion_hal::GpioPin`] and a
//! [`pinion_hal::Puller`].
//!
//! The line itself doubles as the "outside world": tests drive it from an
//! external device with [`SimLine::drive`], let it float with
//! [`SimLine::release`], and inject backend faults with
//! [`SimLine::disconnect`].
//!
//! # Level resolution
//!
//! ```text
//! direction == Out      -> output latch
//! external drive        -> driven value
//! pull-up / pull-down   -> High / Low
//! floating              -> previous level held
//! ```
//!
//! # Example
//!
//! ```
//! use pinion_hal::{EdgeSensitivity, EdgeWaiter, Value, ValueGetter};
//! use pinion_hal_sim::SimLine;
//!
//! let line = SimLine::new();
//! let mut pin = line.pin();
//! pin.set_sensitivity(EdgeSensitivity::RisingEdge).unwrap();
//!
//! line.drive(Value::High);
//! pin.wait_for_edge().unwrap();
//! assert_eq!(pin.value().unwrap(), Value::High);
//! ```

#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod line;
pub mod pin;

pub use config::{Pull, SimConfig};
pub use error::SimError;
pub use line::{SimLine, EDGE_HISTORY};
pub use pin::SimPin;
