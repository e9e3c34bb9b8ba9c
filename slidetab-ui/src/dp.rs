//! # Density-Independent Pixels (Dp)
//!
//! Lengths in the style configuration are usually given in dp so that a tab
//! strip looks the same physical size on low and high density screens. The
//! conversion to physical pixels goes through the global [`SCALE_FACTOR`],
//! which the host sets once from the display density.
//!
//! ```
//! use slidetab_ui::{Dp, TextSizeUnit};
//!
//! let padding = Dp(10.0);
//! let pixels = padding.to_pixels_f32();
//!
//! // Text sizes are resolved through their configured unit.
//! let size = TextSizeUnit::Px.to_pixels(16.0);
//! assert_eq!(size, 16.0);
//! ```

use std::sync::OnceLock;

use parking_lot::RwLock;

/// Global scale factor for converting between density-independent pixels and
/// physical pixels.
///
/// The scale factor is how many physical pixels correspond to one dp. When it
/// has never been set, conversions use `1.0`.
pub static SCALE_FACTOR: OnceLock<RwLock<f64>> = OnceLock::new();

/// Sets the global scale factor, initializing it on first use.
pub fn set_scale_factor(factor: f64) {
    let lock = SCALE_FACTOR.get_or_init(|| RwLock::new(factor));
    *lock.write() = factor;
}

fn scale_factor() -> f64 {
    SCALE_FACTOR.get().map(|lock| *lock.read()).unwrap_or(1.0)
}

/// Density-independent pixels (dp) for UI scaling.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dp(pub f64);

impl Dp {
    /// A zero length.
    pub const ZERO: Dp = Dp(0.0);

    /// Converts this dp value to physical pixels as an `f32`.
    pub fn to_pixels_f32(&self) -> f32 {
        (self.0 * scale_factor()) as f32
    }
}

/// How configured text sizes are interpreted.
///
/// `Px` sizes ignore the display density; `Dp` sizes follow it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextSizeUnit {
    /// Raw physical pixels.
    Px,
    /// Density-independent pixels.
    #[default]
    Dp,
}

impl TextSizeUnit {
    /// Resolves a configured text size to physical pixels.
    pub fn to_pixels(self, size: f32) -> f32 {
        match self {
            TextSizeUnit::Px => size,
            TextSizeUnit::Dp => Dp(size as f64).to_pixels_f32(),
        }
    }
}
