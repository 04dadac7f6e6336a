#![no_std]

pub mod animation;
pub mod color;
pub mod driver;
pub mod palette;
pub mod pattern;
pub mod show;

pub use animation::{Animator, STARTUP_FLASHES, STARTUP_HOLD};
pub use driver::{CLOCK_PERIOD_US, LATCH_DURATION_US, ShiftChain};
pub use palette::{PALETTE_SIZE, Palette, RED_TO_GREEN, WARM_TO_GREEN};
pub use pattern::{DrinkDonePulse, OrangePulse, PanicPulse, StepPattern};
pub use show::{PALETTE_FADE_HOLD, PALETTE_FADE_STEPS, Show};

pub use color::Rgb;
pub use embassy_time::Duration;

/// Abstract LED chain output
///
/// Implement this trait to support different bus transports.
/// The animation engine is generic over this trait; [`ShiftChain`]
/// is the bit-banged 2-wire implementation.
pub trait ChainOutput {
    /// Transport error, usually the pin error type
    type Error;

    /// Present one color to every LED slot of the chain
    fn write(&mut self, color: Rgb) -> Result<(), Self::Error>;
}
