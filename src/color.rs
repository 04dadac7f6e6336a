use smart_leds::RGB8;

pub use smart_leds::colors::{MAGENTA, YELLOW};

pub type Rgb = RGB8;

/// Pack a color into wire order (red, green, blue)
#[inline]
pub const fn channel_bytes(color: Rgb) -> [u8; 3] {
    [color.r, color.g, color.b]
}
