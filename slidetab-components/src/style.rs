//! Static style configuration and the resolver the engine reads it through.
//!
//! ## Usage
//!
//! Build a [`StyleConfig`] once with its setters and hand it to the strip:
//!
//! ```
//! use slidetab_components::style::{BoldMode, IndicatorGravity, StyleConfig};
//! use slidetab_ui::{Color, Dp};
//!
//! let style = StyleConfig::default()
//!     .selected_text_size(18.0)
//!     .selected_text_color(Color::from_hex(0xFF22_66DD))
//!     .bold_mode(BoldMode::SelectedOnly)
//!     .indicator_width(Dp(20.0))
//!     .indicator_gravity(IndicatorGravity::Bottom);
//! assert_eq!(style.indicator_width, Some(Dp(20.0)));
//! ```
use derive_setters::Setters;
use slidetab_ui::{Color, Dp, TextSizeUnit};
use smallvec::{SmallVec, smallvec};

use crate::tab::TabWidthMode;

/// Which tabs render their title in bold.
///
/// Bold never interpolates: it flips on selection changes and static
/// redraws only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoldMode {
    /// Only the selected tab is bold.
    SelectedOnly,
    /// Every tab is bold.
    Both,
    /// No tab is bold.
    #[default]
    None,
}

impl BoldMode {
    /// Whether a tab with the given selection state is bold.
    pub fn is_bold(self, selected: bool) -> bool {
        match self {
            BoldMode::SelectedOnly => selected,
            BoldMode::Both => true,
            BoldMode::None => false,
        }
    }
}

/// Vertical edge the indicator sticks to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IndicatorGravity {
    /// Along the top edge, offset by the top margin.
    Top,
    /// Along the bottom edge, offset by the bottom margin.
    #[default]
    Bottom,
}

/// Default values for [`StyleConfig`].
pub struct SlidingTabDefaults;

impl SlidingTabDefaults {
    /// Text size of the selected tab.
    pub const SELECTED_TEXT_SIZE: f32 = 16.0;
    /// Text size of the other tabs.
    pub const UNSELECTED_TEXT_SIZE: f32 = 12.0;
    /// Title color of the selected tab.
    pub const SELECTED_TEXT_COLOR: Color = Color::BLACK;
    /// Title color of the other tabs.
    pub const UNSELECTED_TEXT_COLOR: Color = Color::GRAY;
    /// Solid indicator color.
    pub const INDICATOR_COLOR: Color = Color::BLACK;
    /// Indicator thickness.
    pub const INDICATOR_HEIGHT: Dp = Dp(3.0);
}

/// Static look of the strip. Set at construction, replaced as a whole.
#[derive(Clone, Debug, PartialEq, Setters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StyleConfig {
    /// How tabs share the strip's width.
    pub tab_width_mode: TabWidthMode,
    /// Horizontal padding on each side of a title. Falls back to
    /// [`TabWidthMode::default_padding`].
    #[setters(strip_option)]
    pub tab_padding: Option<Dp>,
    /// Unit the text sizes below are expressed in.
    pub text_size_unit: TextSizeUnit,
    /// Text size of the selected tab.
    pub selected_text_size: f32,
    /// Text size of the other tabs.
    pub unselected_text_size: f32,
    /// Title color of the selected tab.
    pub selected_text_color: Color,
    /// Title color of the other tabs.
    pub unselected_text_color: Color,
    /// Bold policy.
    pub bold_mode: BoldMode,
    /// Fixed indicator width. `None` lets the indicator follow the tab (or
    /// title) width.
    #[setters(strip_option)]
    pub indicator_width: Option<Dp>,
    /// Indicator thickness.
    pub indicator_height: Dp,
    /// Corner radius of the indicator.
    pub indicator_corner_radius: Dp,
    /// Left inset of the indicator.
    pub indicator_margin_left: Dp,
    /// Top offset, used with [`IndicatorGravity::Top`].
    pub indicator_margin_top: Dp,
    /// Right inset of the indicator.
    pub indicator_margin_right: Dp,
    /// Bottom offset, used with [`IndicatorGravity::Bottom`].
    pub indicator_margin_bottom: Dp,
    /// Shrink the indicator to the title's measured width. Defaults to `true`
    /// when no fixed indicator width is set.
    #[setters(strip_option)]
    pub indicator_width_equals_title: Option<bool>,
    /// Solid indicator color, used unless a gradient is configured.
    pub indicator_color: Color,
    /// First gradient stop; the gradient needs both start and end set.
    pub indicator_start_color: Color,
    /// Optional middle gradient stop.
    pub indicator_center_color: Color,
    /// Last gradient stop.
    pub indicator_end_color: Color,
    /// Vertical edge of the indicator.
    pub indicator_gravity: IndicatorGravity,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            tab_width_mode: TabWidthMode::default(),
            tab_padding: None,
            text_size_unit: TextSizeUnit::default(),
            selected_text_size: SlidingTabDefaults::SELECTED_TEXT_SIZE,
            unselected_text_size: SlidingTabDefaults::UNSELECTED_TEXT_SIZE,
            selected_text_color: SlidingTabDefaults::SELECTED_TEXT_COLOR,
            unselected_text_color: SlidingTabDefaults::UNSELECTED_TEXT_COLOR,
            bold_mode: BoldMode::default(),
            indicator_width: None,
            indicator_height: SlidingTabDefaults::INDICATOR_HEIGHT,
            indicator_corner_radius: Dp::ZERO,
            indicator_margin_left: Dp::ZERO,
            indicator_margin_top: Dp::ZERO,
            indicator_margin_right: Dp::ZERO,
            indicator_margin_bottom: Dp::ZERO,
            indicator_width_equals_title: None,
            indicator_color: SlidingTabDefaults::INDICATOR_COLOR,
            indicator_start_color: Color::TRANSPARENT,
            indicator_center_color: Color::TRANSPARENT,
            indicator_end_color: Color::TRANSPARENT,
            indicator_gravity: IndicatorGravity::default(),
        }
    }
}

/// Resolved text attributes of one tab.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TabTextStyle {
    /// Text size in pixels.
    pub size: f32,
    /// Title color.
    pub color: Color,
    /// Whether the title is bold.
    pub bold: bool,
}

/// How the indicator is filled.
#[derive(Clone, Debug, PartialEq)]
pub enum IndicatorPaint {
    /// A single color.
    Solid(Color),
    /// A left-to-right linear gradient with two or three stops.
    Gradient(SmallVec<[Color; 3]>),
}

/// Read-only view over a [`StyleConfig`] with values resolved to pixels.
#[derive(Clone, Copy, Debug)]
pub struct StyleResolver<'a> {
    config: &'a StyleConfig,
}

impl<'a> StyleResolver<'a> {
    /// Wraps a configuration.
    pub fn new(config: &'a StyleConfig) -> Self {
        Self { config }
    }

    /// The underlying configuration.
    pub fn config(&self) -> &'a StyleConfig {
        self.config
    }

    /// Selected text size in pixels.
    pub fn selected_size(&self) -> f32 {
        self.config
            .text_size_unit
            .to_pixels(self.config.selected_text_size)
    }

    /// Unselected text size in pixels.
    pub fn unselected_size(&self) -> f32 {
        self.config
            .text_size_unit
            .to_pixels(self.config.unselected_text_size)
    }

    /// Whether the two sizes differ, i.e. whether sizes interpolate at all.
    pub fn sizes_differ(&self) -> bool {
        self.config.selected_text_size != self.config.unselected_text_size
    }

    /// Fully settled style of a tab.
    pub fn static_style(&self, selected: bool) -> TabTextStyle {
        TabTextStyle {
            size: if selected {
                self.selected_size()
            } else {
                self.unselected_size()
            },
            color: if selected {
                self.config.selected_text_color
            } else {
                self.config.unselected_text_color
            },
            bold: self.config.bold_mode.is_bold(selected),
        }
    }

    /// Horizontal title padding in pixels.
    pub fn tab_padding(&self) -> f32 {
        self.config
            .tab_padding
            .unwrap_or_else(|| self.config.tab_width_mode.default_padding())
            .to_pixels_f32()
    }

    /// Fixed indicator width in pixels, if configured and non-negative.
    pub fn indicator_width(&self) -> Option<f32> {
        self.config
            .indicator_width
            .map(|width| width.to_pixels_f32())
            .filter(|width| *width >= 0.0)
    }

    /// Whether the indicator shrinks to the title width.
    pub fn indicator_width_equals_title(&self) -> bool {
        self.config
            .indicator_width_equals_title
            .unwrap_or(self.indicator_width().is_none())
    }

    /// Indicator fill: a gradient when start and end stops are set, the
    /// solid color otherwise.
    pub fn indicator_paint(&self) -> IndicatorPaint {
        let config = self.config;
        if config.indicator_start_color.is_unset() || config.indicator_end_color.is_unset() {
            return IndicatorPaint::Solid(config.indicator_color);
        }
        if config.indicator_center_color.is_unset() {
            IndicatorPaint::Gradient(smallvec![
                config.indicator_start_color,
                config.indicator_end_color
            ])
        } else {
            IndicatorPaint::Gradient(smallvec![
                config.indicator_start_color,
                config.indicator_center_color,
                config.indicator_end_color
            ])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_policies() {
        assert!(BoldMode::SelectedOnly.is_bold(true));
        assert!(!BoldMode::SelectedOnly.is_bold(false));
        assert!(BoldMode::Both.is_bold(false));
        assert!(!BoldMode::None.is_bold(true));
    }

    #[test]
    fn static_styles_follow_selection() {
        let config = StyleConfig::default().bold_mode(BoldMode::SelectedOnly);
        let resolver = StyleResolver::new(&config);

        let selected = resolver.static_style(true);
        assert_eq!(selected.size, 16.0);
        assert_eq!(selected.color, Color::BLACK);
        assert!(selected.bold);

        let unselected = resolver.static_style(false);
        assert_eq!(unselected.size, 12.0);
        assert_eq!(unselected.color, Color::GRAY);
        assert!(!unselected.bold);
    }

    #[test]
    fn title_width_indicator_defaults_off_when_width_is_fixed() {
        let config = StyleConfig::default();
        assert!(StyleResolver::new(&config).indicator_width_equals_title());

        let config = StyleConfig::default().indicator_width(Dp(20.0));
        let resolver = StyleResolver::new(&config);
        assert_eq!(resolver.indicator_width(), Some(20.0));
        assert!(!resolver.indicator_width_equals_title());

        let config = config.indicator_width_equals_title(true);
        assert!(StyleResolver::new(&config).indicator_width_equals_title());
    }

    #[test]
    fn negative_indicator_width_is_ignored() {
        let config = StyleConfig::default().indicator_width(Dp(-1.0));
        assert_eq!(StyleResolver::new(&config).indicator_width(), None);
    }

    #[test]
    fn padding_defaults_by_width_mode() {
        let config = StyleConfig::default();
        assert_eq!(StyleResolver::new(&config).tab_padding(), 10.0);

        let config = StyleConfig::default().tab_width_mode(TabWidthMode::Equal);
        assert_eq!(StyleResolver::new(&config).tab_padding(), 0.0);

        let config = config.tab_padding(Dp(4.0));
        assert_eq!(StyleResolver::new(&config).tab_padding(), 4.0);
    }

    #[test]
    fn indicator_paint_variants() {
        let config = StyleConfig::default().indicator_start_color(Color::WHITE);
        assert_eq!(
            StyleResolver::new(&config).indicator_paint(),
            IndicatorPaint::Solid(Color::BLACK)
        );

        let config = config.indicator_end_color(Color::GRAY);
        assert_eq!(
            StyleResolver::new(&config).indicator_paint(),
            IndicatorPaint::Gradient(smallvec![Color::WHITE, Color::GRAY])
        );

        let config = config.indicator_center_color(Color::BLACK);
        assert_eq!(
            StyleResolver::new(&config).indicator_paint(),
            IndicatorPaint::Gradient(smallvec![Color::WHITE, Color::BLACK, Color::GRAY])
        );
    }
}
