//! Indicator bounds and auto-centering.
//!
//! Everything here is recomputed from scratch each frame from the scroll
//! state, the tab bounds and the style; nothing is cached between frames.
//! Horizontal math runs in `f32` strip coordinates and is only truncated to
//! [`PxRect`] when the indicator is placed for drawing.
use slidetab_ui::PxRect;

use crate::{
    measure::TextMeasure,
    style::{IndicatorGravity, StyleResolver},
    tab::{Span, Tab, TabCollection},
    tracker::ScrollState,
};

/// Visible area of the strip.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Width of the scrolling container.
    pub width: f32,
    /// Height of the strip.
    pub height: f32,
    /// Left padding of the container, in front of the first tab.
    pub padding_left: f32,
}

impl Viewport {
    /// Creates a viewport without padding.
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            padding_left: 0.0,
        }
    }

    /// Returns the viewport with a left padding.
    pub const fn with_padding_left(mut self, padding_left: f32) -> Self {
        self.padding_left = padding_left;
        self
    }
}

/// The tab span moving from `current` toward `neighbor`, without any inset.
pub fn compute_tab_span(current: &Tab, neighbor: Option<&Tab>, fraction: f32) -> Span {
    match neighbor {
        Some(neighbor) => current.bounds().lerp(neighbor.bounds(), fraction),
        None => current.bounds(),
    }
}

fn title_margin(tab: &Tab, text_size: f32, measure: &impl TextMeasure) -> f32 {
    (tab.width() - measure.measure_width(tab.title(), text_size)) / 2.0
}

/// Horizontal extent of the indicator.
///
/// A fixed indicator width wins over everything else and slides from the
/// current tab's center to the neighbor's. Otherwise the indicator follows the
/// tab span, optionally inset so it matches the title's measured width.
pub fn compute_indicator_span(
    current: &Tab,
    neighbor: Option<&Tab>,
    fraction: f32,
    resolver: &StyleResolver<'_>,
    measure: &impl TextMeasure,
) -> Span {
    if let Some(width) = resolver.indicator_width() {
        let mut left = current.bounds().center() - width / 2.0;
        if let Some(neighbor) = neighbor {
            left += fraction * (current.width() / 2.0 + neighbor.width() / 2.0);
        }
        return Span::new(left, left + width);
    }

    let span = compute_tab_span(current, neighbor, fraction);
    if !resolver.indicator_width_equals_title() {
        return span;
    }

    // Titles are measured at the unselected size so the margin does not
    // breathe with the text size blend.
    let text_size = resolver.unselected_size();
    let mut margin = title_margin(current, text_size, measure);
    if let Some(neighbor) = neighbor {
        let neighbor_margin = title_margin(neighbor, text_size, measure);
        margin += fraction * (neighbor_margin - margin);
    }
    span.inset(margin)
}

/// Places an indicator span inside the viewport.
///
/// Horizontal margins and the container padding shift the span; gravity,
/// vertical margin and height decide the vertical edges.
pub fn place_indicator(span: Span, viewport: &Viewport, resolver: &StyleResolver<'_>) -> PxRect {
    let config = resolver.config();
    let height = config.indicator_height.to_pixels_f32();
    let left = viewport.padding_left + config.indicator_margin_left.to_pixels_f32() + span.left;
    let right = viewport.padding_left + span.right - config.indicator_margin_right.to_pixels_f32();

    let (top, bottom) = match config.indicator_gravity {
        IndicatorGravity::Top => {
            let top = config.indicator_margin_top.to_pixels_f32();
            (top, top + height)
        }
        IndicatorGravity::Bottom => {
            let bottom = viewport.height - config.indicator_margin_bottom.to_pixels_f32();
            (bottom - height, bottom)
        }
    };
    PxRect::from_edges_f32(left, top, right, bottom)
}

/// Indicator rectangle for a scroll state, or `None` when the reported page
/// has no tab.
pub fn indicator_rect(
    state: &ScrollState,
    tabs: &TabCollection,
    resolver: &StyleResolver<'_>,
    viewport: &Viewport,
    measure: &impl TextMeasure,
) -> Option<PxRect> {
    let current = tabs.get(state.position)?;
    let neighbor = state
        .position
        .checked_add(1)
        .and_then(|index| tabs.get(index));
    let span = compute_indicator_span(current, neighbor, state.fraction, resolver, measure);
    Some(place_indicator(span, viewport, resolver))
}

/// Scroll offset that keeps the active tab centered.
///
/// The base is the current tab's left edge advanced by the swiped part of its
/// width. Past the very start of the strip the offset is shifted so the
/// interpolated tab span sits in the middle of the viewport.
pub fn compute_auto_center_offset(
    current: &Tab,
    position: usize,
    fraction: f32,
    viewport: &Viewport,
    tab_span_width: f32,
) -> i32 {
    let advance = (fraction * current.width()).trunc();
    let mut offset = current.left() + advance;
    if position > 0 || advance > 0.0 {
        offset -= viewport.width / 2.0 - viewport.padding_left;
        offset += tab_span_width / 2.0;
    }
    offset.clamp(i32::MIN as f32, i32::MAX as f32) as i32
}

/// Emits scroll offsets only when they change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AutoScroller {
    last_emitted: i32,
}

impl AutoScroller {
    /// Creates a scroller assuming the host starts scrolled to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `Some(target)` if the host has to scroll, `None` if it is
    /// already there.
    pub fn update(&mut self, target: i32) -> Option<i32> {
        if target == self.last_emitted {
            return None;
        }
        self.last_emitted = target;
        Some(target)
    }

    /// The offset last sent to the host.
    pub(crate) fn last_emitted(&self) -> i32 {
        self.last_emitted
    }

    /// Forgets the emitted offset.
    pub fn reset(&mut self) {
        self.last_emitted = 0;
    }
}
