//! Physical pixel values.
//!
//! Physical pixels map one-to-one onto the rendering surface. Geometry inside
//! the widgets is computed in `f32` and converted to [`Px`] only when a
//! rectangle is handed to the renderer.
//!
//! # Coordinate System
//!
//! - Origin (0, 0) at the top-left corner of the strip
//! - X-axis increases to the right
//! - Y-axis increases downward
//! - Negative coordinates are allowed (scrolled-out content)

/// A physical pixel coordinate value.
///
/// ```
/// use slidetab_ui::Px;
///
/// assert_eq!(Px::saturating_from_f32(100.7), Px(100));
/// assert_eq!(Px::saturating_from_f32(f32::MAX).raw(), i32::MAX);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Px(pub i32);

impl Px {
    /// A constant representing zero pixels.
    pub const ZERO: Self = Self(0);

    /// Returns the raw i32 value.
    pub fn raw(self) -> i32 {
        self.0
    }

    /// Creates a `Px` from an f32 value, truncating toward zero and
    /// saturating at the numeric bounds instead of overflowing. NaN maps to
    /// zero.
    pub fn saturating_from_f32(value: f32) -> Self {
        let clamped_value = value.clamp(i32::MIN as f32, i32::MAX as f32);
        Px(clamped_value as i32)
    }

    /// Saturating integer subtraction.
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Px(self.0.saturating_sub(rhs.0))
    }
}

/// An axis-aligned rectangle in physical pixels, stored as edges.
///
/// `right` and `bottom` are exclusive, matching how canvas backends fill
/// bounds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PxRect {
    /// Left edge.
    pub left: Px,
    /// Top edge.
    pub top: Px,
    /// Right edge (exclusive).
    pub right: Px,
    /// Bottom edge (exclusive).
    pub bottom: Px,
}

impl PxRect {
    /// Creates a rectangle from its four edges.
    pub const fn new(left: Px, top: Px, right: Px, bottom: Px) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Builds a rectangle from `f32` edges, truncating each one the way
    /// integer canvas bounds are produced.
    pub fn from_edges_f32(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left: Px::saturating_from_f32(left),
            top: Px::saturating_from_f32(top),
            right: Px::saturating_from_f32(right),
            bottom: Px::saturating_from_f32(bottom),
        }
    }

    /// Width of the rectangle; negative when the edges are inverted.
    pub fn width(&self) -> Px {
        self.right.saturating_sub(self.left)
    }

    /// Height of the rectangle; negative when the edges are inverted.
    pub fn height(&self) -> Px {
        self.bottom.saturating_sub(self.top)
    }

    /// Returns `true` if the rectangle covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.width() <= Px::ZERO || self.height() <= Px::ZERO
    }
}
