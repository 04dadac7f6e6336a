//! Compiled-in fade palettes
//!
//! A palette is a fixed set of nine colors used as fade endpoints by the
//! random walk in [`crate::show`]. Both gradient variants are provided;
//! neither is mutable at runtime.

use crate::color::Rgb;

/// Number of colors in a palette.
pub const PALETTE_SIZE: usize = 9;

/// Ordered set of fade endpoints.
pub type Palette = [Rgb; PALETTE_SIZE];

/// Warm ember tones sliding into green.
pub const WARM_TO_GREEN: Palette = [
    Rgb { r: 235, g: 35, b: 0 },  // Ember red
    Rgb { r: 235, g: 64, b: 0 },  // Red-orange
    Rgb { r: 255, g: 128, b: 0 }, // Orange
    Rgb { r: 255, g: 192, b: 0 }, // Amber
    Rgb { r: 255, g: 235, b: 0 }, // Yellow
    Rgb { r: 192, g: 235, b: 0 }, // Chartreuse
    Rgb { r: 128, g: 235, b: 0 }, // Yellow-green
    Rgb { r: 64, g: 235, b: 0 },  // Spring green
    Rgb { r: 35, g: 235, b: 0 },  // Green
];

/// Straight red-to-green ramp, evenly spaced.
pub const RED_TO_GREEN: Palette = [
    Rgb { r: 255, g: 0, b: 0 },
    Rgb { r: 224, g: 32, b: 0 },
    Rgb { r: 192, g: 64, b: 0 },
    Rgb { r: 160, g: 96, b: 0 },
    Rgb { r: 128, g: 128, b: 0 },
    Rgb { r: 96, g: 160, b: 0 },
    Rgb { r: 64, g: 192, b: 0 },
    Rgb { r: 32, g: 224, b: 0 },
    Rgb { r: 0, g: 255, b: 0 },
];
