//! Pull resistor capabilities
//!
//! Pull-up, pull-down and pull-disable are separate capabilities. Hardware
//! with only a pull-up implements [`UpPuller`] alone rather than a no-op
//! pull-down.
//!
//! The two pull modes are mutually exclusive on real hardware, but nothing
//! here encodes that. On a device that is both an [`UpPuller`] and a
//! [`DownPuller`], enabling one may silently disable the other; backends
//! document their exact behaviour.

use crate::error::ErrorType;

/// Pin that can enable a pull-up resistor
///
/// If the pin is also a [`DownPuller`], this may implicitly stop pulling
/// down.
pub trait UpPuller: ErrorType {
    /// Bias the pin toward High
    fn pull_up(&mut self) -> Result<(), Self::Error>;
}

/// Pin that can enable a pull-down resistor
///
/// If the pin is also an [`UpPuller`], this may implicitly stop pulling up.
pub trait DownPuller: ErrorType {
    /// Bias the pin toward Low
    fn pull_down(&mut self) -> Result<(), Self::Error>;
}

/// Pin that can disable its pull resistor
pub trait PullStopper: ErrorType {
    /// Leave the pin floating when undriven
    fn stop_pulling(&mut self) -> Result<(), Self::Error>;
}

/// Pin that can enable and disable both pull resistors
pub trait Puller: UpPuller + DownPuller + PullStopper {}

// Blanket implementation
impl<T: UpPuller + DownPuller + PullStopper + ?Sized> Puller for T {}

impl<T: UpPuller + ?Sized> UpPuller for &mut T {
    #[inline]
    fn pull_up(&mut self) -> Result<(), Self::Error> {
        T::pull_up(self)
    }
}

impl<T: DownPuller + ?Sized> DownPuller for &mut T {
    #[inline]
    fn pull_down(&mut self) -> Result<(), Self::Error> {
        T::pull_down(self)
    }
}

impl<T: PullStopper + ?Sized> PullStopper for &mut T {
    #[inline]
    fn stop_pulling(&mut self) -> Result<(), Self::Error> {
        T::stop_pulling(self)
    }
}
