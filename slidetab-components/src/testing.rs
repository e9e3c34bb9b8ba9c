//! Helpers for exercising a strip without a real pager or font backend.
//!
//! Enabled with the `testing` feature.

use crate::pager::PageContainer;

/// Measures text as if every character were half as wide as the text size.
pub fn char_width_measure(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size / 2.0
}

/// An in-memory pager that records navigation requests.
///
/// [`set_current_item`](PageContainer::set_current_item) updates the current
/// item immediately; it does not produce scroll or selection events.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingPager {
    titles: Vec<Option<String>>,
    current: usize,
    has_adapter: bool,
    requests: Vec<(usize, bool)>,
}

impl RecordingPager {
    /// A pager with one page per title.
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_optional_titles(titles.into_iter().map(|title| Some(title.into())))
    }

    /// A pager whose pages may lack titles.
    pub fn from_optional_titles(titles: impl IntoIterator<Item = Option<String>>) -> Self {
        Self {
            titles: titles.into_iter().collect(),
            current: 0,
            has_adapter: true,
            requests: Vec::new(),
        }
    }

    /// A pager that has no adapter yet.
    pub fn without_adapter() -> Self {
        Self::default()
    }

    /// `(index, smooth)` pairs passed to `set_current_item`, oldest first.
    pub fn requests(&self) -> &[(usize, bool)] {
        &self.requests
    }
}

impl PageContainer for RecordingPager {
    fn has_adapter(&self) -> bool {
        self.has_adapter
    }

    fn page_count(&self) -> usize {
        self.titles.len()
    }

    fn page_title(&self, index: usize) -> Option<String> {
        self.titles.get(index).cloned().flatten()
    }

    fn current_item(&self) -> usize {
        self.current
    }

    fn set_current_item(&mut self, index: usize, smooth: bool) {
        self.requests.push((index, smooth));
        self.current = index.min(self.titles.len().saturating_sub(1));
    }
}
