//! Packed ARGB colors.
//!
//! Text and indicator colors are 8-bit per channel and blended one channel at
//! a time, so the color is kept in the packed `0xAARRGGBB` form hosts
//! usually hand over, with accessors for each channel.

/// A non-premultiplied color packed as `0xAARRGGBB`.
///
/// ```
/// use slidetab_ui::Color;
///
/// let color = Color::from_argb(0xFF, 0x88, 0x10, 0x00);
/// assert_eq!(color.to_hex(), 0xFF88_1000);
/// assert_eq!(color.channels(), [0xFF, 0x88, 0x10, 0x00]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub u32);

impl Color {
    // --- Common Colors ---
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color(0x0000_0000);
    /// Opaque black.
    pub const BLACK: Color = Color(0xFF00_0000);
    /// Opaque white.
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    /// Opaque mid gray (`#888888`).
    pub const GRAY: Color = Color(0xFF88_8888);

    /// Creates a color from a packed `0xAARRGGBB` value.
    #[inline]
    pub const fn from_hex(argb: u32) -> Self {
        Self(argb)
    }

    /// Creates a color from four `u8` channels (alpha, red, green, blue).
    #[inline]
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Builds a color from `[alpha, red, green, blue]` channel values,
    /// clamping each one to `0..=255`.
    pub fn from_channels_clamped(channels: [i32; 4]) -> Self {
        let [a, r, g, b] = channels.map(|c| c.clamp(0, 255) as u8);
        Self::from_argb(a, r, g, b)
    }

    /// Returns the packed `0xAARRGGBB` value.
    #[inline]
    pub const fn to_hex(self) -> u32 {
        self.0
    }

    /// Alpha channel.
    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel.
    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Returns the channels as `[alpha, red, green, blue]`.
    #[inline]
    pub const fn channels(self) -> [u8; 4] {
        [self.alpha(), self.red(), self.green(), self.blue()]
    }

    /// Returns `true` when the packed value is zero, which color options use
    /// to mean "not set".
    #[inline]
    pub const fn is_unset(self) -> bool {
        self.0 == 0
    }
}

/// The default color is fully transparent.
impl Default for Color {
    #[inline]
    fn default() -> Self {
        Self::TRANSPARENT
    }
}
