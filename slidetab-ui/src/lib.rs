//! Shared primitives for the slidetab widgets.
//!
//! This crate does not contain any widget itself. It provides the unit and
//! value types the widget crates exchange with their host:
//!
//! - [`Px`] and [`PxRect`] for physical pixels, as handed to a renderer
//! - [`Dp`] for density-independent lengths, scaled by a global factor
//! - [`TextSizeUnit`] to interpret configured text sizes
//! - [`Color`], a packed ARGB color with per-channel access
//!
//! ```
//! use slidetab_ui::{Color, Dp, Px};
//!
//! let padding = Px::saturating_from_f32(Dp(10.0).to_pixels_f32());
//! let gray = Color::from_hex(0xFF88_8888);
//!
//! assert_eq!(padding, Px(10));
//! assert_eq!(gray.red(), 0x88);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod color;
pub mod dp;
pub mod px;

pub use crate::{
    color::Color,
    dp::{Dp, SCALE_FACTOR, TextSizeUnit, set_scale_factor},
    px::{Px, PxRect},
};
