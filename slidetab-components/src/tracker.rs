//! Turns raw pager progress into the state the engine interpolates from.
//!
//! The pager reports `(position, offset)` where `position` is the page left of
//! the viewport edge. Text blending, however, is about the *selected* tab and
//! the tab the user is swiping toward, so the tracker compares the reported
//! page with the selected one to find the neighbor and the direction of
//! travel:
//!
//! - reported page == selected page: swiping toward the next tab
//! - reported page == selected page - 1: swiping toward the previous tab
//!
//! Positions are tab indices. The strip maps pager pages onto tabs before
//! they get here, since untitled pages have no tab.
//!
//! A zero offset is the settlement signal. After a discrete selection the
//! tracker stays settled until the pager comes to rest, so the trailing ticks
//! of the settle animation do not re-blend styles the selection just applied.
use tracing::{debug, trace};

use crate::pager::PagerScrollState;

/// Direction of travel relative to the selected tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    /// Toward the tab after the selected one.
    #[default]
    Next,
    /// Toward the tab before the selected one.
    Prev,
}

impl ScrollDirection {
    /// How far the blend has progressed away from the selected tab.
    ///
    /// Moving forward the pager offset grows from 0; moving backward it
    /// shrinks from 1, so the progress is mirrored.
    pub fn progress(self, fraction: f32) -> f32 {
        match self {
            ScrollDirection::Next => fraction,
            ScrollDirection::Prev => 1.0 - fraction,
        }
    }
}

/// Snapshot produced on every tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollState {
    /// Selected tab.
    pub current_index: usize,
    /// Tab the pager's offset is measured from; drives indicator geometry.
    pub position: usize,
    /// Offset toward `position + 1`, in `[0, 1)`.
    pub fraction: f32,
    /// Tab being blended toward, if any.
    pub neighbor_index: Option<usize>,
    /// Direction of the last genuine scroll.
    pub direction: ScrollDirection,
    /// No interpolation is in progress.
    pub is_settled: bool,
}

impl ScrollState {
    /// A state at rest on `index`.
    pub fn settled(index: usize) -> Self {
        Self {
            current_index: index,
            position: index,
            fraction: 0.0,
            neighbor_index: None,
            direction: ScrollDirection::default(),
            is_settled: true,
        }
    }

    /// The neighbor being blended toward, when text interpolation applies.
    pub fn blending_neighbor(&self) -> Option<usize> {
        if self.is_settled {
            None
        } else {
            self.neighbor_index
        }
    }
}

fn clamp_fraction(fraction: f32) -> f32 {
    if fraction.is_finite() {
        fraction.clamp(0.0, 1.0 - f32::EPSILON)
    } else {
        0.0
    }
}

/// Normalizes pager progress into [`ScrollState`]s.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollProgressTracker {
    tab_count: usize,
    state: ScrollState,
    selection_pending: bool,
}

impl ScrollProgressTracker {
    /// Creates a tracker at rest on `initial_index`.
    pub fn new(tab_count: usize, initial_index: usize) -> Self {
        Self {
            tab_count,
            state: ScrollState::settled(initial_index),
            selection_pending: false,
        }
    }

    /// The last produced state.
    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// Updates the tab count after the strip rebuilt its tabs.
    pub fn set_tab_count(&mut self, tab_count: usize) {
        self.tab_count = tab_count;
        if self
            .state
            .neighbor_index
            .is_some_and(|neighbor| neighbor >= tab_count)
        {
            self.state.neighbor_index = None;
            self.state.is_settled = true;
        }
    }

    /// Forgets all progress and rests on `index`.
    pub fn reset(&mut self, index: usize) {
        self.state = ScrollState::settled(index);
        self.selection_pending = false;
    }

    /// Consumes one progress tick.
    pub fn on_scroll(&mut self, position: usize, fraction: f32, offset_pixels: i32) -> ScrollState {
        let fraction = clamp_fraction(fraction);
        let current = self.state.current_index;
        let mut next = ScrollState {
            current_index: current,
            position,
            fraction,
            neighbor_index: None,
            direction: self.state.direction,
            is_settled: true,
        };

        if fraction == 0.0 {
            self.selection_pending = false;
            self.state = next;
            return next;
        }

        if self.selection_pending {
            trace!(position, offset_pixels, "settling after selection");
            self.state = next;
            return next;
        }

        let (direction, neighbor) = if position == current {
            (ScrollDirection::Next, current.checked_add(1))
        } else if position.checked_add(1) == Some(current) {
            (ScrollDirection::Prev, current.checked_sub(1))
        } else {
            trace!(position, current, "pager is jumping over several pages");
            self.state = next;
            return next;
        };

        if direction != self.state.direction || self.state.is_settled {
            debug!(?direction, current, "tab swipe started");
        }
        next.direction = direction;

        match neighbor.filter(|&index| index < self.tab_count) {
            Some(index) => {
                next.neighbor_index = Some(index);
                next.is_settled = false;
            }
            None => trace!(?direction, current, "no neighbor tab in that direction"),
        }

        self.state = next;
        next
    }

    /// Consumes a discrete selection.
    pub fn on_selected(&mut self, index: usize) {
        debug!(index, "tab selected");
        self.state = ScrollState {
            current_index: index,
            neighbor_index: None,
            is_settled: true,
            ..self.state
        };
        self.selection_pending = true;
    }

    /// Scroll phase changes carry no information the tracker needs.
    pub fn on_scroll_state_changed(&mut self, state: PagerScrollState) {
        trace!(?state, "pager scroll state changed");
    }
}
