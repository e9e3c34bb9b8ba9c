//! Tab view-models and the ordered collection the strip lays out.
//!
//! A [`TabCollection`] owns one [`Tab`] per non-empty title together with the
//! container's [`TabWidthMode`]. Horizontal bounds are written once per layout
//! pass, either by the host through [`TabCollection::set_bounds`] or by
//! [`TabCollection::arrange`], and stay fixed until the next pass.
use slidetab_ui::Dp;
use smallvec::SmallVec;
use tracing::warn;

use crate::{error::StripError, measure::TextMeasure};

/// A horizontal extent in strip coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Span {
    /// Left edge.
    pub left: f32,
    /// Right edge.
    pub right: f32,
}

impl Span {
    /// Creates a span from its edges.
    pub const fn new(left: f32, right: f32) -> Self {
        Self { left, right }
    }

    /// Distance between the edges.
    pub fn width(self) -> f32 {
        self.right - self.left
    }

    /// Horizontal center.
    pub fn center(self) -> f32 {
        self.left + self.width() / 2.0
    }

    /// Moves both edges toward `other` by `fraction`.
    pub fn lerp(self, other: Span, fraction: f32) -> Span {
        Span {
            left: self.left + fraction * (other.left - self.left),
            right: self.right + fraction * (other.right - self.right),
        }
    }

    /// Shrinks the span by `margin` on both sides.
    pub fn inset(self, margin: f32) -> Span {
        Span {
            left: self.left + margin,
            right: self.right - margin,
        }
    }
}

/// How the tabs share the strip's width.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TabWidthMode {
    /// Every tab has the same explicit width.
    Fixed(Dp),
    /// The container width is split evenly between the tabs.
    Equal,
    /// Each tab is as wide as its title plus padding; the strip scrolls when
    /// the tabs overflow.
    #[default]
    WrapContent,
}

impl TabWidthMode {
    /// Horizontal title padding used when none is configured.
    pub fn default_padding(self) -> Dp {
        match self {
            TabWidthMode::WrapContent => Dp(10.0),
            TabWidthMode::Fixed(_) | TabWidthMode::Equal => Dp::ZERO,
        }
    }
}

/// A single tab of the strip.
#[derive(Clone, Debug, PartialEq)]
pub struct Tab {
    index: usize,
    page: usize,
    title: String,
    bounds: Span,
}

impl Tab {
    fn new(index: usize, page: usize, title: String) -> Self {
        Self {
            index,
            page,
            title,
            bounds: Span::default(),
        }
    }

    /// Position of the tab inside its collection.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Pager page the tab stands for. Differs from [`index`](Self::index)
    /// once an untitled page has been skipped.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Title shown on the tab.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Horizontal bounds from the last layout pass.
    pub fn bounds(&self) -> Span {
        self.bounds
    }

    /// Left edge.
    pub fn left(&self) -> f32 {
        self.bounds.left
    }

    /// Right edge.
    pub fn right(&self) -> f32 {
        self.bounds.right
    }

    /// Width of the tab.
    pub fn width(&self) -> f32 {
        self.bounds.width()
    }
}

/// The ordered tabs of a strip.
///
/// Indices are always contiguous from zero. Empty titles are dropped while
/// building, so the tab count can be lower than the number of pages; each
/// tab remembers the page it came from and pages stay in ascending order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TabCollection {
    tabs: SmallVec<[Tab; 8]>,
    mode: TabWidthMode,
}

impl TabCollection {
    /// Builds a collection from titles, skipping empty ones.
    pub fn from_titles<I, S>(titles: I, mode: TabWidthMode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_optional_titles(titles.into_iter().map(Some), mode)
    }

    /// Builds a collection from titles that may be missing, as a pager
    /// adapter reports them. Missing and empty titles are skipped.
    pub fn from_optional_titles<I, S>(titles: I, mode: TabWidthMode) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let mut tabs = SmallVec::new();
        for (page, title) in titles.into_iter().enumerate() {
            match title {
                Some(title) if !title.as_ref().is_empty() => {
                    let index = tabs.len();
                    tabs.push(Tab::new(index, page, title.as_ref().to_owned()));
                }
                _ => warn!(page, "page has no title; omitting it from the tab strip"),
            }
        }
        Self { tabs, mode }
    }

    /// Number of tabs.
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Returns `true` if the strip has no tabs.
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Returns the tab at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index)
    }

    /// Index of the tab standing for pager `page`, or `None` when that page
    /// was skipped for lack of a title.
    pub fn tab_for_page(&self, page: usize) -> Option<usize> {
        self.tabs
            .binary_search_by_key(&page, Tab::page)
            .ok()
    }

    /// Iterates the tabs in order.
    pub fn iter(&self) -> impl Iterator<Item = &Tab> {
        self.tabs.iter()
    }

    /// Width mode of the container.
    pub fn mode(&self) -> TabWidthMode {
        self.mode
    }

    /// Changes the width mode. Bounds are kept until the next layout pass.
    pub fn set_mode(&mut self, mode: TabWidthMode) {
        self.mode = mode;
    }

    /// Right edge of the last tab, i.e. the scrollable content width.
    pub fn content_width(&self) -> f32 {
        self.tabs.last().map_or(0.0, Tab::right)
    }

    /// Writes the bounds of one tab, as measured by the host.
    pub fn set_bounds(&mut self, index: usize, left: f32, right: f32) -> Result<(), StripError> {
        let count = self.tabs.len();
        let tab = self
            .tabs
            .get_mut(index)
            .ok_or(StripError::TabIndexOutOfRange { index, count })?;
        tab.bounds = Span::new(left, right);
        Ok(())
    }

    /// Lays the tabs out left to right according to the width mode.
    ///
    /// `padding` is the horizontal padding on each side of a title and
    /// `text_size` the size, in pixels, titles are measured at in
    /// [`TabWidthMode::WrapContent`].
    pub fn arrange(
        &mut self,
        container_width: f32,
        padding: f32,
        text_size: f32,
        measure: &impl TextMeasure,
    ) {
        if self.tabs.is_empty() {
            return;
        }
        let count = self.tabs.len() as f32;
        let mut left = 0.0;
        for tab in &mut self.tabs {
            let width = match self.mode {
                TabWidthMode::Fixed(width) => width.to_pixels_f32(),
                TabWidthMode::Equal => container_width.max(0.0) / count,
                TabWidthMode::WrapContent => {
                    measure.measure_width(&tab.title, text_size) + 2.0 * padding
                }
            };
            tab.bounds = Span::new(left, left + width);
            left += width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measure(text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size / 2.0
    }

    #[test]
    fn empty_titles_are_skipped_and_renumbered() {
        let tabs = TabCollection::from_titles(["Hot", "", "Design"], TabWidthMode::WrapContent);
        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs.get(0).map(Tab::title), Some("Hot"));
        assert_eq!(tabs.get(1).map(Tab::title), Some("Design"));
        assert_eq!(tabs.get(1).map(Tab::index), Some(1));
        assert_eq!(tabs.get(1).map(Tab::page), Some(2));
        assert!(tabs.get(2).is_none());
    }

    #[test]
    fn pages_map_back_to_tabs() {
        let tabs = TabCollection::from_titles(["A", "", "C", "D"], TabWidthMode::WrapContent);
        assert_eq!(tabs.tab_for_page(0), Some(0));
        assert_eq!(tabs.tab_for_page(1), None);
        assert_eq!(tabs.tab_for_page(2), Some(1));
        assert_eq!(tabs.tab_for_page(3), Some(2));
        assert_eq!(tabs.tab_for_page(9), None);
    }

    #[test]
    fn missing_adapter_titles_are_skipped() {
        let titles = vec![None, Some("iOS".to_string()), Some(String::new())];
        let tabs = TabCollection::from_optional_titles(titles, TabWidthMode::Equal);
        assert_eq!(tabs.len(), 1);
        assert_eq!(tabs.get(0).map(Tab::title), Some("iOS"));
    }

    #[test]
    fn arrange_wrap_content_uses_measured_titles() {
        let mut tabs = TabCollection::from_titles(["ab", "abcd"], TabWidthMode::WrapContent);
        tabs.arrange(1000.0, 10.0, 16.0, &measure);

        // 2 chars * 8px + 2 * 10px padding, then 4 chars * 8px + 20px
        assert_eq!(tabs.get(0).map(Tab::bounds), Some(Span::new(0.0, 36.0)));
        assert_eq!(tabs.get(1).map(Tab::bounds), Some(Span::new(36.0, 88.0)));
        assert_eq!(tabs.content_width(), 88.0);
    }

    #[test]
    fn arrange_equal_and_fixed() {
        let mut tabs = TabCollection::from_titles(["a", "b", "c", "d"], TabWidthMode::Equal);
        tabs.arrange(400.0, 0.0, 16.0, &measure);
        assert_eq!(tabs.get(3).map(Tab::bounds), Some(Span::new(300.0, 400.0)));

        tabs.set_mode(TabWidthMode::Fixed(Dp(60.0)));
        tabs.arrange(400.0, 0.0, 16.0, &measure);
        assert_eq!(tabs.get(1).map(Tab::bounds), Some(Span::new(60.0, 120.0)));
        assert_eq!(tabs.content_width(), 240.0);
    }

    #[test]
    fn set_bounds_rejects_unknown_tab() {
        let mut tabs = TabCollection::from_titles(["a"], TabWidthMode::WrapContent);
        assert!(tabs.set_bounds(0, 5.0, 25.0).is_ok());
        assert_eq!(tabs.get(0).map(Tab::width), Some(20.0));
        assert_eq!(
            tabs.set_bounds(3, 0.0, 1.0),
            Err(StripError::TabIndexOutOfRange { index: 3, count: 1 })
        );
    }

    #[test]
    fn span_helpers() {
        let a = Span::new(0.0, 60.0);
        let b = Span::new(60.0, 140.0);
        assert_eq!(a.center(), 30.0);
        assert_eq!(a.lerp(b, 0.5), Span::new(30.0, 100.0));
        assert_eq!(b.inset(10.0), Span::new(70.0, 130.0));
    }
}
