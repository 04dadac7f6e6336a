//! Palette random-walk loop
//!
//! The terminal state of the program: after a one-time startup flash, fade
//! between randomly drawn palette colors forever. Pin configuration and
//! interrupt setup happen in the caller's platform glue before handing the
//! pins to [`crate::ShiftChain`].

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;
use rand_core::RngCore;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::ChainOutput;
use crate::animation::Animator;
use crate::palette::{PALETTE_SIZE, Palette};

/// Samples per palette fade.
pub const PALETTE_FADE_STEPS: u16 = 500;

/// Hold after each fade sample.
pub const PALETTE_FADE_HOLD: Duration = Duration::from_millis(5);

/// Infinite fade show over a fixed palette.
///
/// Holds the current palette index and the RNG driving the walk. One
/// iteration is exposed as [`Self::step`] so the walk is testable without
/// running forever.
pub struct Show<O, D, R> {
    animator: Animator<O, D>,
    palette: Palette,
    rng: R,
    current: usize,
}

impl<O, D, R> Show<O, D, R>
where
    O: ChainOutput,
    D: DelayNs,
    R: RngCore,
{
    /// Create a show; the starting palette index is drawn from `rng`.
    pub fn new(animator: Animator<O, D>, palette: Palette, mut rng: R) -> Self {
        let current = draw_index(&mut rng);
        Self {
            animator,
            palette,
            rng,
            current,
        }
    }

    /// Run the show: startup flash once, then fade forever.
    ///
    /// Returns only if the output reports an error; with infallible pins
    /// this loops until power-off.
    pub fn run(&mut self) -> Result<(), O::Error> {
        self.animator.startup()?;
        loop {
            self.step()?;
        }
    }

    /// One walk iteration: draw the next index and fade to it.
    ///
    /// Candidates equal to the current index are redrawn, so a fade never
    /// starts and ends on the same color.
    pub fn step(&mut self) -> Result<(), O::Error> {
        let mut next = draw_index(&mut self.rng);
        while next == self.current {
            next = draw_index(&mut self.rng);
        }

        #[cfg(feature = "esp32-log")]
        println!("[Show.step] fading {} -> {}", self.current, next);

        self.animator.fade(
            PALETTE_FADE_STEPS,
            PALETTE_FADE_HOLD,
            self.palette[self.current],
            self.palette[next],
        )?;
        self.current = next;
        Ok(())
    }

    /// Palette index the chain currently rests on.
    pub const fn current_index(&self) -> usize {
        self.current
    }

    /// Get a mutable reference to the animation engine.
    pub const fn animator_mut(&mut self) -> &mut Animator<O, D> {
        &mut self.animator
    }
}

/// Uniform palette index from the next RNG word.
#[allow(clippy::cast_possible_truncation)]
fn draw_index<R: RngCore>(rng: &mut R) -> usize {
    (rng.next_u32() % PALETTE_SIZE as u32) as usize
}
