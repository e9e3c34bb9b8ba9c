//! Text measurement supplied by the host's font backend.

/// Measures the advance width of a title rendered at a given text size.
///
/// The strip never owns font or paint state; the host passes whatever its
/// renderer uses. Any `Fn(&str, f32) -> f32` closure works:
///
/// ```
/// use slidetab_components::measure::TextMeasure;
///
/// let monospace = |text: &str, size: f32| text.chars().count() as f32 * size * 0.6;
/// assert_eq!(monospace.measure_width("abc", 10.0), 18.0);
/// ```
pub trait TextMeasure {
    /// Returns the width in pixels of `text` at `size` pixels.
    fn measure_width(&self, text: &str, size: f32) -> f32;
}

impl<F> TextMeasure for F
where
    F: Fn(&str, f32) -> f32,
{
    fn measure_width(&self, text: &str, size: f32) -> f32 {
        self(text, size)
    }
}
