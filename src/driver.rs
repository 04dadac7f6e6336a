//! Bit-banged 2-wire LED chain protocol driver
//!
//! Serializes color bytes onto a clock + data bus feeding a chain of
//! shift-register RGB LEDs. One clock pulse per bit, idle-low clock, no
//! chip-select and no acknowledgment; a long hold after the frame lets the
//! register latch its outputs.
//!
//! The bit scan per byte runs from index 8 down to 1, never index 0, so the
//! first bit on the wire is always low and the least significant channel bit
//! is never transmitted. This matches the chain's established wire
//! convention and is pinned down by the driver tests.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::ChainOutput;
use crate::color::{Rgb, channel_bytes};

/// Hold before and after each rising clock edge, in microseconds.
pub const CLOCK_PERIOD_US: u32 = 10;

/// Hold after a full frame, giving the shift register time to latch.
pub const LATCH_DURATION_US: u32 = 501;

/// Channel bytes per LED slot.
const CHANNELS: usize = 3;

/// Bit-banged driver for a chain of `LEDS` shift-register RGB LEDs.
///
/// Owns the two output lines and the delay used for bit timing. Both pins
/// must share an error type; with infallible pins every method is
/// infallible as well.
pub struct ShiftChain<Clk, Dat, Dly, const LEDS: usize = 2> {
    clock: Clk,
    data: Dat,
    delay: Dly,
}

impl<Clk, Dat, Dly, E, const LEDS: usize> ShiftChain<Clk, Dat, Dly, LEDS>
where
    Clk: OutputPin<Error = E>,
    Dat: OutputPin<Error = E>,
    Dly: DelayNs,
{
    /// Create a driver from its clock line, data line and bit-timing delay.
    ///
    /// The caller is responsible for having configured both lines as
    /// outputs; the driver only toggles them.
    pub const fn new(clock: Clk, data: Dat, delay: Dly) -> Self {
        Self { clock, data, delay }
    }

    /// Push one frame onto the bus.
    ///
    /// The first three bytes of `frame` are broadcast once per LED slot;
    /// the driver does not address slots individually. Ends with the latch
    /// hold.
    pub fn transmit(&mut self, frame: &[u8]) -> Result<(), E> {
        for _slot in 0..LEDS {
            for &byte in frame.iter().take(CHANNELS) {
                self.shift_byte(byte)?;
            }
        }
        self.delay.delay_us(LATCH_DURATION_US);
        Ok(())
    }

    /// Clock out one byte, no trailing delay after the last falling edge.
    fn shift_byte(&mut self, byte: u8) -> Result<(), E> {
        let wide = u16::from(byte);
        for bit in 0..8_u16 {
            // Scan runs from index 8 down to 1; index 0 is never inspected.
            if wide & (1 << (8 - bit)) != 0 {
                self.data.set_high()?;
            } else {
                self.data.set_low()?;
            }
            self.delay.delay_us(CLOCK_PERIOD_US);

            self.clock.set_high()?;
            self.delay.delay_us(CLOCK_PERIOD_US);

            self.clock.set_low()?;
        }
        Ok(())
    }

    /// Consume the driver and hand the lines and delay back.
    pub fn release(self) -> (Clk, Dat, Dly) {
        (self.clock, self.data, self.delay)
    }
}

impl<Clk, Dat, Dly, E, const LEDS: usize> ChainOutput for ShiftChain<Clk, Dat, Dly, LEDS>
where
    Clk: OutputPin<Error = E>,
    Dat: OutputPin<Error = E>,
    Dly: DelayNs,
{
    type Error = E;

    fn write(&mut self, color: Rgb) -> Result<(), E> {
        self.transmit(&channel_bytes(color))
    }
}
