//! Bit-banged serial-in, parallel-out shift register (74HC595 style)
//!
//! Data is sampled on the rising edge of the shift clock and copied to the
//! outputs on the rising edge of the latch (storage) clock. Registers can be
//! daisy-chained; the first byte written ends up in the furthest register.

use pinion_hal::{Value, ValueSetter};

/// Order in which bits of a byte are shifted out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    /// Bit 7 first (74HC595 QH ends up with bit 0)
    #[default]
    MsbFirst,
    /// Bit 0 first
    LsbFirst,
}

/// Shift register driven through three output-only pins
///
/// Every pin only needs [`ValueSetter`]; none of them is ever read. All three
/// must share one error type.
pub struct ShiftRegister<D, C, L> {
    data: D,
    clock: C,
    latch: L,
    order: BitOrder,
}

impl<D, C, L, E> ShiftRegister<D, C, L>
where
    D: ValueSetter<Error = E>,
    C: ValueSetter<Error = E>,
    L: ValueSetter<Error = E>,
{
    /// Create a new driver, parking both clocks low
    ///
    /// # Arguments
    /// - `data`: serial data pin (DS)
    /// - `clock`: shift clock pin (SHCP)
    /// - `latch`: storage clock pin (STCP)
    /// - `order`: bit order within each byte
    pub fn new(data: D, mut clock: C, mut latch: L, order: BitOrder) -> Result<Self, E> {
        clock.set_low()?;
        latch.set_low()?;
        Ok(Self {
            data,
            clock,
            latch,
            order,
        })
    }

    /// Bit order used by this driver
    pub fn bit_order(&self) -> BitOrder {
        self.order
    }

    fn shift_bit(&mut self, bit: bool) -> Result<(), E> {
        self.data.set_value(Value::from(bit))?;
        self.clock.set_high()?;
        self.clock.set_low()
    }

    /// Shift one byte in without updating the outputs
    pub fn shift_byte(&mut self, byte: u8) -> Result<(), E> {
        for i in 0..8 {
            let bit = match self.order {
                BitOrder::MsbFirst => byte & (0x80 >> i) != 0,
                BitOrder::LsbFirst => byte & (0x01 << i) != 0,
            };
            self.shift_bit(bit)?;
        }
        Ok(())
    }

    /// Copy the shifted bits to the outputs
    pub fn latch(&mut self) -> Result<(), E> {
        self.latch.set_high()?;
        self.latch.set_low()
    }

    /// Shift a byte in and show it on the outputs
    pub fn write_byte(&mut self, byte: u8) -> Result<(), E> {
        self.shift_byte(byte)?;
        self.latch()
    }

    /// Shift a chain of bytes in and latch once
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), E> {
        for &byte in bytes {
            self.shift_byte(byte)?;
        }
        self.latch()
    }

    /// Release the pins as `(data, clock, latch)`
    pub fn free(self) -> (D, C, L) {
        (self.data, self.clock, self.latch)
    }
}
