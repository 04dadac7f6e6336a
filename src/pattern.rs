//! Time-parametric color functions
//!
//! A pattern maps a discrete step index to a color, with no internal state.
//! The [`crate::Animator::play`] sampler is generic over [`StepPattern`],
//! so closures work as well as the built-in sinusoidal pulses.

use core::f32::consts::FRAC_PI_2;

use libm::{cosf, sinf};

use crate::color::Rgb;

const PANIC_STEP_DIVISOR: f32 = 50.0;
const ORANGE_STEP_DIVISOR: f32 = 30.0;

/// Full swing of a channel driven at amplitude 127 (sinusoids never
/// reach 255).
pub const PULSE_PEAK: u8 = 254;

/// A pure function from step index to color.
///
/// Implementations must be deterministic and safe to call with arbitrary
/// indices; the sampler feeds monotonically increasing ones.
pub trait StepPattern {
    /// Color at the given step since pattern start.
    fn color_at(&self, step: u16) -> Rgb;
}

impl<F> StepPattern for F
where
    F: Fn(u16) -> Rgb,
{
    fn color_at(&self, step: u16) -> Rgb {
        self(step)
    }
}

/// Oscillating red/blue pulse.
///
/// Red follows sin, blue follows cos of the same argument, so the two
/// channels trade places a quarter period apart. Green stays off.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanicPulse;

impl StepPattern for PanicPulse {
    fn color_at(&self, step: u16) -> Rgb {
        let phase = f32::from(step) / PANIC_STEP_DIVISOR;
        Rgb {
            r: level(sinf(phase), 127.0),
            g: 0,
            b: level(cosf(phase), 127.0),
        }
    }
}

/// Breathing orange pulse.
///
/// Red and green share one sinusoid at a 127:64 amplitude ratio, which
/// keeps the hue orange while the brightness swings.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrangePulse;

impl StepPattern for OrangePulse {
    fn color_at(&self, step: u16) -> Rgb {
        let phase = f32::from(step) / ORANGE_STEP_DIVISOR;
        Rgb {
            r: level(sinf(phase), 127.0),
            g: level(sinf(phase), 64.0),
            b: 0,
        }
    }
}

/// Fast green pulse, used as a "ready" signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct DrinkDonePulse;

impl StepPattern for DrinkDonePulse {
    fn color_at(&self, step: u16) -> Rgb {
        let phase = f32::from(step) / FRAC_PI_2;
        Rgb {
            r: 0,
            g: level(sinf(phase), 127.0),
            b: 0,
        }
    }
}

/// Scale a [-1, 1] wave into a channel value.
///
/// The result is bounded by 2 * amplitude, so amplitudes up to 127 can
/// never leave the channel range; the cast truncates.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn level(wave: f32, amplitude: f32) -> u8 {
    ((wave + 1.0) * amplitude) as u8
}
