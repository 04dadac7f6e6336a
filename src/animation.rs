//! Color animation engine
//!
//! Sits between patterns/fades and a [`ChainOutput`], owning the real-time
//! pacing: every emitted color is followed by a blocking hold on the
//! injected delay. Nothing here is async; the engine is a single-threaded
//! control loop building block.

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

use crate::ChainOutput;
use crate::color::{MAGENTA, Rgb, YELLOW};
use crate::pattern::StepPattern;

/// Repetitions of the startup flash pair.
pub const STARTUP_FLASHES: u8 = 3;

/// Hold on each startup color.
pub const STARTUP_HOLD: Duration = Duration::from_millis(200);

/// Animation engine over an abstract chain output.
///
/// Generic over the output so tests can record emitted colors instead of
/// toggling pins, and over the delay so tests run without real waits.
pub struct Animator<O, D> {
    output: O,
    delay: D,
}

impl<O, D> Animator<O, D>
where
    O: ChainOutput,
    D: DelayNs,
{
    /// Create an engine from an output and a pacing delay.
    pub const fn new(output: O, delay: D) -> Self {
        Self { output, delay }
    }

    /// Present one color to the chain.
    pub fn set_color(&mut self, color: Rgb) -> Result<(), O::Error> {
        self.output.write(color)
    }

    /// Convenience wrapper over [`Self::set_color`] for raw channel values.
    pub fn set_rgb(&mut self, red: u8, green: u8, blue: u8) -> Result<(), O::Error> {
        self.set_color(Rgb {
            r: red,
            g: green,
            b: blue,
        })
    }

    /// Sample a pattern at steps `0..count`, holding `hold` after each.
    pub fn play<P>(&mut self, count: u16, hold: Duration, pattern: &P) -> Result<(), O::Error>
    where
        P: StepPattern,
    {
        for step in 0..count {
            self.set_color(pattern.color_at(step))?;
            self.hold(hold);
        }
        Ok(())
    }

    /// Linear per-channel fade from `from` toward `to` in `steps` samples.
    ///
    /// Step 0 is exactly `from`; `to` itself is never emitted. Each channel
    /// advances by `trunc(step * (to - from) / steps)`, truncated toward
    /// zero per sample, so the ramp leans slightly toward `from` on both
    /// rising and falling channels. `steps == 0` emits nothing.
    pub fn fade(
        &mut self,
        steps: u16,
        hold: Duration,
        from: Rgb,
        to: Rgb,
    ) -> Result<(), O::Error> {
        if steps == 0 {
            return Ok(());
        }

        let r_slope = channel_slope(from.r, to.r, steps);
        let g_slope = channel_slope(from.g, to.g, steps);
        let b_slope = channel_slope(from.b, to.b, steps);

        for step in 0..steps {
            let color = Rgb {
                r: channel_at(from.r, r_slope, step),
                g: channel_at(from.g, g_slope, step),
                b: channel_at(from.b, b_slope, step),
            };
            self.set_color(color)?;
            self.hold(hold);
        }
        Ok(())
    }

    /// Fixed boot indicator: flash yellow and magenta three times.
    pub fn startup(&mut self) -> Result<(), O::Error> {
        for _ in 0..STARTUP_FLASHES {
            self.set_color(YELLOW)?;
            self.hold(STARTUP_HOLD);

            self.set_color(MAGENTA)?;
            self.hold(STARTUP_HOLD);
        }
        Ok(())
    }

    /// Block for the given duration on the injected delay.
    #[allow(clippy::cast_possible_truncation)]
    pub fn hold(&mut self, duration: Duration) {
        self.delay.delay_ms(duration.as_millis() as u32);
    }

    /// Get a reference to the output.
    pub const fn output(&self) -> &O {
        &self.output
    }

    /// Get a mutable reference to the output.
    pub const fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}

/// Per-step channel increment for a fade.
fn channel_slope(from: u8, to: u8, steps: u16) -> f32 {
    (f32::from(to) - f32::from(from)) / f32::from(steps)
}

/// Channel value at a fade step.
///
/// `step * slope` is bounded by `to - from`, so the intermediate sum stays
/// inside [0, 255] and the final cast cannot wrap. The float cast truncates
/// toward zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel_at(from: u8, slope: f32, step: u16) -> u8 {
    (i16::from(from) + (f32::from(step) * slope) as i16) as u8
}
