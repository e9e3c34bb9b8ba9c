//! Text size and color blending between the selected tab and its neighbor.
use slidetab_ui::Color;

use crate::{
    style::{StyleResolver, TabTextStyle},
    tracker::{ScrollDirection, ScrollState},
};

/// Blended text attributes of the two tabs around the scroll boundary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextBlend {
    /// Size of the selected tab, `None` when sizes do not interpolate.
    pub current_size: Option<f32>,
    /// Size of the neighbor tab, `None` when sizes do not interpolate.
    pub neighbor_size: Option<f32>,
    /// Color of the selected tab.
    pub current_color: Color,
    /// Color of the neighbor tab.
    pub neighbor_color: Color,
}

fn blend_channel(from: u8, to: u8, progress: f32) -> i32 {
    let from = from as f32;
    (from + (to as f32 - from) * progress).round() as i32
}

/// Moves `from` toward `to` by `progress`, channel by channel.
///
/// Channels are blended independently and without premultiplication, then
/// clamped to `0..=255`.
pub fn blend_color(from: Color, to: Color, progress: f32) -> Color {
    let from = from.channels();
    let to = to.channels();
    Color::from_channels_clamped([0, 1, 2, 3].map(|i| blend_channel(from[i], to[i], progress)))
}

/// Computes the blended styles for one tick.
///
/// The selected tab moves from the selected style toward the unselected one
/// while the neighbor moves the other way, both by the direction-adjusted
/// progress.
pub fn compute_text_style(
    direction: ScrollDirection,
    fraction: f32,
    resolver: &StyleResolver<'_>,
) -> TextBlend {
    let progress = direction.progress(fraction);
    let config = resolver.config();

    let (current_size, neighbor_size) = if resolver.sizes_differ() {
        let selected = resolver.selected_size();
        let unselected = resolver.unselected_size();
        let delta = (unselected - selected) * progress;
        (Some(selected + delta), Some(unselected - delta))
    } else {
        (None, None)
    };

    TextBlend {
        current_size,
        neighbor_size,
        current_color: blend_color(
            config.selected_text_color,
            config.unselected_text_color,
            progress,
        ),
        neighbor_color: blend_color(
            config.unselected_text_color,
            config.selected_text_color,
            progress,
        ),
    }
}

/// Resolves the text style of tab `index` for a scroll state.
///
/// Tabs outside the blend get their static style. Bold always follows the
/// selection.
pub fn resolve_tab_style(
    index: usize,
    state: &ScrollState,
    resolver: &StyleResolver<'_>,
) -> TabTextStyle {
    let mut style = resolver.static_style(index == state.current_index);
    let Some(neighbor) = state.blending_neighbor() else {
        return style;
    };

    let blend = compute_text_style(state.direction, state.fraction, resolver);
    if index == state.current_index {
        style.size = blend.current_size.unwrap_or(style.size);
        style.color = blend.current_color;
    } else if index == neighbor {
        style.size = blend.neighbor_size.unwrap_or(style.size);
        style.color = blend.neighbor_color;
    }
    style
}
