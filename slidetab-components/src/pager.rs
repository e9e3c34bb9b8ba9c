//! Contracts between the tab strip and the pager it follows.
//!
//! The pager is an external collaborator: it owns the pages, reports scroll
//! progress and selection, and accepts navigation requests. The strip only
//! sees it through [`PageContainer`] and receives its notifications through
//! [`PageChangeListener`] (or the equivalent [`PageEvent`] values).

/// Scroll phase reported by the pager.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PagerScrollState {
    /// The pager is at rest.
    #[default]
    Idle,
    /// The user is dragging the pages.
    Dragging,
    /// The pager is animating toward a page.
    Settling,
}

/// The paged view the strip is attached to.
///
/// Implementations must not call back into the strip from
/// [`set_current_item`](Self::set_current_item); the resulting scroll and
/// selection notifications are delivered later by the host.
pub trait PageContainer {
    /// Whether a data source is present. Attaching without one is an error.
    fn has_adapter(&self) -> bool;

    /// Number of pages.
    fn page_count(&self) -> usize;

    /// Title of a page, if it has one.
    fn page_title(&self, index: usize) -> Option<String>;

    /// Currently selected page.
    fn current_item(&self) -> usize;

    /// Moves to `index`, animating when `smooth` is set.
    fn set_current_item(&mut self, index: usize, smooth: bool);
}

/// Receiver of pager notifications.
///
/// Each notification kind is its own capability; implementors override the
/// ones they care about.
pub trait PageChangeListener {
    /// Continuous progress: `position` is the page left of the viewport edge
    /// and `position_offset` the fraction scrolled toward the next page.
    fn on_page_scrolled(
        &mut self,
        _position: usize,
        _position_offset: f32,
        _position_offset_pixels: i32,
    ) {
    }

    /// A page became the selected one.
    fn on_page_selected(&mut self, _position: usize) {}

    /// The pager changed its scroll phase.
    fn on_page_scroll_state_changed(&mut self, _state: PagerScrollState) {}
}

/// A pager notification as a value, for hosts that queue events.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PageEvent {
    /// Continuous scroll progress.
    Scrolled {
        /// Page left of the viewport edge.
        position: usize,
        /// Fraction scrolled toward the next page.
        offset: f32,
        /// The same offset in pager pixels.
        offset_pixels: i32,
    },
    /// Discrete selection.
    Selected(usize),
    /// Scroll phase change.
    ScrollStateChanged(PagerScrollState),
}

impl PageEvent {
    /// Delivers the event to a listener.
    pub fn dispatch<L>(self, listener: &mut L)
    where
        L: PageChangeListener + ?Sized,
    {
        match self {
            PageEvent::Scrolled {
                position,
                offset,
                offset_pixels,
            } => listener.on_page_scrolled(position, offset, offset_pixels),
            PageEvent::Selected(position) => listener.on_page_selected(position),
            PageEvent::ScrollStateChanged(state) => listener.on_page_scroll_state_changed(state),
        }
    }
}

/// Callbacks fired when the user taps a tab.
pub trait OnTabSelectListener {
    /// A tab that was not selected was tapped.
    fn on_first_chose(&mut self, index: usize);

    /// The already selected tab was tapped again.
    fn on_reselect_chose(&mut self, index: usize);
}

/// [`OnTabSelectListener`] built from two closures.
pub struct TabSelectCallbacks<F, R> {
    first: F,
    reselect: R,
}

impl<F, R> TabSelectCallbacks<F, R>
where
    F: FnMut(usize),
    R: FnMut(usize),
{
    /// Creates the listener from the first-selection and reselection
    /// callbacks.
    pub fn new(first: F, reselect: R) -> Self {
        Self { first, reselect }
    }
}

impl<F, R> OnTabSelectListener for TabSelectCallbacks<F, R>
where
    F: FnMut(usize),
    R: FnMut(usize),
{
    fn on_first_chose(&mut self, index: usize) {
        (self.first)(index)
    }

    fn on_reselect_chose(&mut self, index: usize) {
        (self.reselect)(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Log(Vec<String>);

    impl PageChangeListener for Log {
        fn on_page_scrolled(&mut self, position: usize, offset: f32, pixels: i32) {
            self.0.push(format!("scrolled {position} {offset} {pixels}"));
        }

        fn on_page_selected(&mut self, position: usize) {
            self.0.push(format!("selected {position}"));
        }
    }

    #[test]
    fn events_dispatch_to_matching_callbacks() {
        let mut log = Log::default();
        PageEvent::Scrolled {
            position: 1,
            offset: 0.5,
            offset_pixels: 120,
        }
        .dispatch(&mut log);
        PageEvent::Selected(2).dispatch(&mut log);
        // Not overridden by `Log`; falls through to the default no-op.
        PageEvent::ScrollStateChanged(PagerScrollState::Idle).dispatch(&mut log);

        assert_eq!(log.0, vec!["scrolled 1 0.5 120", "selected 2"]);
    }

    #[test]
    fn callbacks_listener_routes_both_kinds() {
        let mut first = Vec::new();
        let mut again = Vec::new();
        {
            let mut listener =
                TabSelectCallbacks::new(|index| first.push(index), |index| again.push(index));
            listener.on_first_chose(3);
            listener.on_reselect_chose(3);
            listener.on_first_chose(1);
        }
        assert_eq!(first, vec![3, 1]);
        assert_eq!(again, vec![3]);
    }
}
