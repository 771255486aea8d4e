//! Pinion GPIO capability layer
//!
//! This crate defines the capabilities a general purpose I/O pin may have,
//! each as its own small trait. Backends (a chip HAL, an I/O expander, a
//! simulated pin) implement only the capabilities their hardware supports,
//! and consumer drivers depend on only the capabilities they use.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Consumers (pinion-drivers, etc.)       │
//! └─────────────────────────────────────────┘
//!                     │  narrow bounds
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pinion-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     ▲
//!         ┌───────────┴───────────┐
//!         │                       │
//! ┌───────────────┐       ┌───────────────┐
//! │  chip / board │       │ pinion-hal-   │
//! │  backends     │       │     sim       │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Domains
//!
//! - [`Value`] - logic level, `Low` or `High`
//! - [`Direction`] - pin direction, `In` or `Out`
//! - [`EdgeSensitivity`] - which transitions an [`EdgeWaiter`] reacts to
//!
//! # Capabilities
//!
//! - [`ValueGetter`], [`ValueSetter`] - sample or drive the signal
//! - [`DirectionSetter`] - switch between input and output
//! - [`UpPuller`], [`DownPuller`], [`PullStopper`] - pull resistor control
//! - [`EdgeWaiter`] - block until a selected transition occurs
//!
//! # Composites
//!
//! - [`GpioPin`] - value read, value write and direction together
//! - [`Puller`] - all three pull resistor capabilities
//!
//! Both composites are blanket-implemented for any type that has the
//! component capabilities.
//!
//! # Depend on the narrowest capability
//!
//! A driver that only reads a signal should be generic over [`ValueGetter`],
//! not [`GpioPin`]. The bound documents how the pin is used and makes it
//! visible at the call site when two drivers would both drive one signal.
//!
//! ```
//! use pinion_hal::{Value, ValueGetter};
//!
//! fn is_tripped<P: ValueGetter>(endstop: &mut P) -> Result<bool, P::Error> {
//!     Ok(endstop.value()? == Value::High)
//! }
//! ```
//!
//! A read-only pin is rejected at compile time where a writer is required:
//!
//! ```compile_fail
//! use core::convert::Infallible;
//! use pinion_hal::{ErrorType, Value, ValueGetter, ValueSetter};
//!
//! struct SenseOnly;
//!
//! impl ErrorType for SenseOnly {
//!     type Error = Infallible;
//! }
//!
//! impl ValueGetter for SenseOnly {
//!     fn value(&mut self) -> Result<Value, Infallible> {
//!         Ok(Value::Low)
//!     }
//! }
//!
//! fn drive_high<P: ValueSetter>(pin: &mut P) -> Result<(), P::Error> {
//!     pin.set_value(Value::High)
//! }
//!
//! drive_high(&mut SenseOnly).unwrap();
//! ```
//!
//! # Features
//!
//! - `defmt` - derive `defmt::Format` for all public enums
//! - `serde` - derive `Serialize`/`Deserialize` for the three domains,
//!   using the variant names as their textual form

#![no_std]
#![deny(unsafe_code)]

pub mod direction;
pub mod edge;
pub mod error;
pub mod gpio;
pub mod pull;
pub mod value;

// Re-export key types at crate root for convenience
pub use direction::Direction;
pub use edge::{Edge, EdgeSensitivity, EdgeWaiter};
pub use error::{Domain, Error, ErrorKind, ErrorType, ParseError};
pub use gpio::{DirectionSetter, GpioPin, ValueGetter, ValueSetter};
pub use pull::{DownPuller, PullStopper, Puller, UpPuller};
pub use value::Value;
