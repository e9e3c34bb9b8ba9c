//! The tab strip: ties a pager to the tabs, tracker and geometry.
//!
//! [`TabStrip`] listens to the pager through [`PageChangeListener`], keeps
//! the scroll state current and produces a [`StripFrame`] describing what to
//! draw. It never draws or scrolls by itself; those requests are queued as
//! [`StripCommand`]s for the host to drain after each event.
use std::sync::Arc;

use parking_lot::Mutex;
use slidetab_ui::PxRect;
use smallvec::SmallVec;
use tracing::{debug, info, trace};

use crate::{
    error::StripError,
    geometry::{
        AutoScroller, Viewport, compute_auto_center_offset, compute_tab_span, indicator_rect,
    },
    interpolation::resolve_tab_style,
    measure::TextMeasure,
    pager::{OnTabSelectListener, PageChangeListener, PageContainer, PagerScrollState},
    style::{IndicatorPaint, StyleConfig, StyleResolver, TabTextStyle},
    tab::{Span, TabCollection},
    tracker::{ScrollProgressTracker, ScrollState},
};

/// A request from the strip to its host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StripCommand {
    /// The strip's look changed; call [`TabStrip::frame`] and draw it.
    Redraw,
    /// Scroll the strip's container to this horizontal offset.
    ScrollTo(i32),
}

/// How one tab should be drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct TabVisual {
    /// Tab index.
    pub index: usize,
    /// Pager page the tab stands for.
    pub page: usize,
    /// Title text.
    pub title: String,
    /// Horizontal bounds from the last layout pass.
    pub bounds: Span,
    /// Whether this is the selected tab.
    pub selected: bool,
    /// Resolved text attributes.
    pub style: TabTextStyle,
}

/// How the indicator should be drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct IndicatorDrawable {
    /// Bounds inside the strip.
    pub rect: PxRect,
    /// Fill.
    pub paint: IndicatorPaint,
    /// Corner radius in pixels.
    pub corner_radius: f32,
}

/// Everything the host needs to render the strip for the current state.
#[derive(Clone, Debug, PartialEq)]
pub struct StripFrame {
    /// Tabs in order.
    pub tabs: Vec<TabVisual>,
    /// The indicator, or `None` when there is nothing to draw.
    pub indicator: Option<IndicatorDrawable>,
    /// Horizontal scroll offset last requested from the host.
    pub scroll_x: i32,
}

/// A sliding tab strip following a pager `P`, measuring titles with `M`.
///
/// The pager is shared with the host as `Arc<Mutex<P>>`. The strip locks it
/// only briefly, so the host must not hold the lock while delivering events.
pub struct TabStrip<P, M> {
    pager: Option<Arc<Mutex<P>>>,
    titles: Option<Vec<String>>,
    tabs: TabCollection,
    style: StyleConfig,
    tracker: ScrollProgressTracker,
    scroller: AutoScroller,
    viewport: Viewport,
    measure: M,
    listener: Option<Box<dyn OnTabSelectListener>>,
    commands: SmallVec<[StripCommand; 4]>,
}

impl<P, M> TabStrip<P, M>
where
    P: PageContainer,
    M: TextMeasure,
{
    /// Creates a detached strip with the default style.
    pub fn new(measure: M) -> Self {
        Self::with_style(StyleConfig::default(), measure)
    }

    /// Creates a detached strip with `style`.
    pub fn with_style(style: StyleConfig, measure: M) -> Self {
        Self {
            pager: None,
            titles: None,
            tabs: TabCollection::from_titles(std::iter::empty::<&str>(), style.tab_width_mode),
            style,
            tracker: ScrollProgressTracker::new(0, 0),
            scroller: AutoScroller::new(),
            viewport: Viewport::default(),
            measure,
            listener: None,
            commands: SmallVec::new(),
        }
    }

    /// Attaches the strip to `pager` and builds the tabs.
    ///
    /// Tabs come from the titles given to [`set_titles`](Self::set_titles)
    /// or, failing that, from the pager's page titles. Bounds are left at
    /// zero until [`arrange_tabs`](Self::arrange_tabs) or
    /// [`set_tab_bounds`](Self::set_tab_bounds) runs.
    pub fn attach(&mut self, pager: Arc<Mutex<P>>) -> Result<(), StripError> {
        let current = {
            let pager = pager.lock();
            if !pager.has_adapter() {
                return Err(StripError::MissingAdapter);
            }
            pager.current_item()
        };

        self.pager = Some(pager);
        self.scroller.reset();
        self.notify_data_set_changed()?;
        self.tracker.reset(self.tabs.tab_for_page(current).unwrap_or(0));
        info!(tabs = self.tabs.len(), current, "tab strip attached");
        Ok(())
    }

    /// Detaches from the pager, dropping the tabs and all scroll progress.
    pub fn detach(&mut self) {
        if self.pager.take().is_some() {
            debug!("tab strip detached");
        }
        self.tabs = TabCollection::from_titles(
            std::iter::empty::<&str>(),
            self.style.tab_width_mode,
        );
        self.tracker = ScrollProgressTracker::new(0, 0);
        self.scroller.reset();
        self.request_redraw();
    }

    /// Whether a pager is attached.
    pub fn is_attached(&self) -> bool {
        self.pager.is_some()
    }

    /// Rebuilds the tabs after the titles or the pager's pages changed.
    pub fn notify_data_set_changed(&mut self) -> Result<(), StripError> {
        let pager = self.pager.as_ref().ok_or(StripError::NotAttached)?;
        let mode = self.style.tab_width_mode;
        let tabs = {
            let pager = pager.lock();
            if !pager.has_adapter() {
                return Err(StripError::MissingAdapter);
            }
            match &self.titles {
                Some(titles) => TabCollection::from_titles(titles, mode),
                None => TabCollection::from_optional_titles(
                    (0..pager.page_count()).map(|page| pager.page_title(page)),
                    mode,
                ),
            }
        };

        self.tabs = tabs;
        self.tracker.set_tab_count(self.tabs.len());
        self.request_redraw();
        Ok(())
    }

    /// Uses `titles` instead of the pager's page titles.
    ///
    /// Takes effect immediately when attached, otherwise on the next attach.
    pub fn set_titles<I, S>(&mut self, titles: I) -> Result<(), StripError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.titles = Some(titles.into_iter().map(Into::into).collect());
        if self.is_attached() {
            self.notify_data_set_changed()?;
        }
        Ok(())
    }

    /// Replaces the whole style.
    pub fn set_style(&mut self, style: StyleConfig) {
        self.tabs.set_mode(style.tab_width_mode);
        self.style = style;
        self.request_redraw();
    }

    /// The current style.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Sets the listener for tab taps.
    pub fn set_on_tab_select_listener(&mut self, listener: impl OnTabSelectListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Updates the visible area after the host laid the strip out.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if self.viewport != viewport {
            self.viewport = viewport;
            self.request_redraw();
        }
    }

    /// Writes the bounds of one tab as measured by the host.
    pub fn set_tab_bounds(
        &mut self,
        index: usize,
        left: f32,
        right: f32,
    ) -> Result<(), StripError> {
        self.tabs.set_bounds(index, left, right)?;
        self.request_redraw();
        Ok(())
    }

    /// Lays the tabs out across the viewport width using the style's width
    /// mode. Wrapped titles are measured at the selected text size so a
    /// selected title always fits its tab.
    pub fn arrange_tabs(&mut self) {
        let resolver = StyleResolver::new(&self.style);
        let padding = resolver.tab_padding();
        let text_size = resolver.selected_size();
        self.tabs
            .arrange(self.viewport.width, padding, text_size, &self.measure);
        self.request_redraw();
    }

    /// The tabs.
    pub fn tabs(&self) -> &TabCollection {
        &self.tabs
    }

    /// The selected tab.
    pub fn current_tab(&self) -> usize {
        self.tracker.state().current_index
    }

    /// The scroll state of the last event.
    pub fn scroll_state(&self) -> ScrollState {
        self.tracker.state()
    }

    /// Handles a tap on tab `index`.
    ///
    /// Tapping another tab moves the pager to that tab's page, animating
    /// only between adjacent tabs, then reports a first choice. Tapping the
    /// selected tab reports a reselection. Listeners receive tab indices.
    /// Indices outside the strip are ignored.
    pub fn on_tab_click(&mut self, index: usize) -> Result<(), StripError> {
        let pager = self.pager.as_ref().ok_or(StripError::NotAttached)?;
        let Some(page) = self.tabs.get(index).map(|tab| tab.page()) else {
            trace!(index, count = self.tabs.len(), "tap outside the strip");
            return Ok(());
        };

        let current_item = pager.lock().current_item();
        if current_item != page {
            let smooth = self.tracker.state().current_index.abs_diff(index) == 1;
            debug!(index, page, smooth, "tab tapped");
            pager.lock().set_current_item(page, smooth);
            if let Some(listener) = self.listener.as_mut() {
                listener.on_first_chose(index);
            }
        } else if let Some(listener) = self.listener.as_mut() {
            listener.on_reselect_chose(index);
        }
        Ok(())
    }

    /// Builds the frame for the current state.
    ///
    /// Depends only on the scroll state, tabs, style, viewport and
    /// measurement, so calling it twice without an event in between yields
    /// the same frame.
    pub fn frame(&self) -> StripFrame {
        let resolver = StyleResolver::new(&self.style);
        let state = self.tracker.state();

        let tabs = self
            .tabs
            .iter()
            .map(|tab| TabVisual {
                index: tab.index(),
                page: tab.page(),
                title: tab.title().to_owned(),
                bounds: tab.bounds(),
                selected: tab.index() == state.current_index,
                style: resolve_tab_style(tab.index(), &state, &resolver),
            })
            .collect();

        let rect = indicator_rect(&state, &self.tabs, &resolver, &self.viewport, &self.measure);
        let indicator = rect
            .filter(|rect| !rect.is_empty())
            .map(|rect| IndicatorDrawable {
                rect,
                paint: resolver.indicator_paint(),
                corner_radius: self.style.indicator_corner_radius.to_pixels_f32(),
            });

        StripFrame {
            tabs,
            indicator,
            scroll_x: self.scroller.last_emitted(),
        }
    }

    /// Takes the queued host commands.
    pub fn drain_commands(&mut self) -> SmallVec<[StripCommand; 4]> {
        std::mem::take(&mut self.commands)
    }

    fn request_redraw(&mut self) {
        if !self.commands.contains(&StripCommand::Redraw) {
            self.commands.push(StripCommand::Redraw);
        }
    }

    fn scroll_to_current_tab(&mut self, state: &ScrollState) {
        let Some(current) = self.tabs.get(state.position) else {
            return;
        };
        let neighbor = state
            .position
            .checked_add(1)
            .and_then(|index| self.tabs.get(index));
        let span = compute_tab_span(current, neighbor, state.fraction);
        let target = compute_auto_center_offset(
            current,
            state.position,
            state.fraction,
            &self.viewport,
            span.width(),
        );
        if let Some(x) = self.scroller.update(target) {
            self.commands
                .retain(|command| !matches!(command, StripCommand::ScrollTo(_)));
            self.commands.push(StripCommand::ScrollTo(x));
        }
    }
}

impl<P, M> PageChangeListener for TabStrip<P, M>
where
    P: PageContainer,
    M: TextMeasure,
{
    fn on_page_scrolled(
        &mut self,
        position: usize,
        position_offset: f32,
        position_offset_pixels: i32,
    ) {
        let Some(tab) = self.tabs.tab_for_page(position) else {
            trace!(page = position, "scroll over a page without a tab");
            return;
        };
        let state = self
            .tracker
            .on_scroll(tab, position_offset, position_offset_pixels);
        self.scroll_to_current_tab(&state);
        self.request_redraw();
    }

    fn on_page_selected(&mut self, position: usize) {
        let Some(tab) = self.tabs.tab_for_page(position) else {
            trace!(page = position, "selected a page without a tab");
            return;
        };
        self.tracker.on_selected(tab);
        self.request_redraw();
    }

    fn on_page_scroll_state_changed(&mut self, state: PagerScrollState) {
        self.tracker.on_scroll_state_changed(state);
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use slidetab_ui::{Color, Dp};

    use super::*;
    use crate::{
        pager::{PageEvent, TabSelectCallbacks},
        style::SlidingTabDefaults,
        tab::TabWidthMode,
        testing::{RecordingPager, char_width_measure},
    };

    type Strip = TabStrip<RecordingPager, fn(&str, f32) -> f32>;

    fn strip() -> Strip {
        TabStrip::new(char_width_measure as fn(&str, f32) -> f32)
    }

    /// A strip attached to a three page pager, tabs 60, 80 and 100 wide.
    fn attached() -> (Strip, Arc<Mutex<RecordingPager>>) {
        let pager = Arc::new(Mutex::new(RecordingPager::new(["Hot", "iOS", "Android"])));
        let mut strip = strip();
        strip.attach(pager.clone()).unwrap();
        strip.set_viewport(Viewport::new(100.0, 48.0));
        strip.set_tab_bounds(0, 0.0, 60.0).unwrap();
        strip.set_tab_bounds(1, 60.0, 140.0).unwrap();
        strip.set_tab_bounds(2, 140.0, 240.0).unwrap();
        strip.drain_commands();
        (strip, pager)
    }

    #[test]
    fn attach_requires_an_adapter() {
        let pager = Arc::new(Mutex::new(RecordingPager::without_adapter()));
        let mut strip = strip();
        assert_eq!(strip.attach(pager), Err(StripError::MissingAdapter));
        assert!(!strip.is_attached());
    }

    #[test]
    fn attach_skips_untitled_pages() {
        let pager = Arc::new(Mutex::new(RecordingPager::from_optional_titles(vec![
            Some("Hot".to_string()),
            Some(String::new()),
            None,
            Some("Design".to_string()),
        ])));
        let mut strip = strip();
        strip.attach(pager).unwrap();

        let titles: Vec<_> = strip.tabs().iter().map(|tab| tab.title()).collect();
        assert_eq!(titles, ["Hot", "Design"]);
        assert_eq!(strip.tabs().get(1).map(|tab| tab.index()), Some(1));
    }

    #[test]
    fn untitled_pages_keep_tabs_on_their_own_pages() {
        let pager = Arc::new(Mutex::new(RecordingPager::new(["A", "", "C"])));
        let mut strip = strip();
        strip.attach(pager.clone()).unwrap();
        strip.set_viewport(Viewport::new(100.0, 48.0));
        strip.set_tab_bounds(0, 0.0, 60.0).unwrap();
        strip.set_tab_bounds(1, 60.0, 140.0).unwrap();
        assert_eq!(strip.tabs().len(), 2);

        // tab 1 is "C", which lives on page 2
        strip.on_tab_click(1).unwrap();
        assert_eq!(pager.lock().requests(), [(2, true)]);

        strip.on_page_selected(2);
        strip.on_page_scrolled(2, 0.0, 0);
        let frame = strip.frame();
        assert_eq!(strip.current_tab(), 1);
        assert!(frame.tabs[1].selected);
        assert_eq!(frame.tabs[1].title, "C");
        assert_eq!(frame.tabs[1].page, 2);
        assert!(frame.indicator.is_some());

        // the untitled page has no tab to move to
        strip.on_page_selected(1);
        strip.on_page_scrolled(1, 0.3, 30);
        assert_eq!(strip.scroll_state(), ScrollState::settled(1));

        strip.on_tab_click(1).unwrap();
        assert_eq!(pager.lock().requests(), [(2, true)]);
    }

    #[test]
    fn attach_selects_the_tab_of_the_current_page() {
        let pager = Arc::new(Mutex::new(RecordingPager::new(["A", "", "C"])));
        pager.lock().set_current_item(2, false);
        let mut strip = strip();
        strip.attach(pager).unwrap();
        assert_eq!(strip.current_tab(), 1);
    }

    #[test]
    fn explicit_titles_override_page_titles() {
        let pager = Arc::new(Mutex::new(RecordingPager::new(["a", "b"])));
        let mut strip = strip();
        strip.set_titles(["One", "Two"]).unwrap();
        strip.attach(pager).unwrap();
        assert_eq!(strip.tabs().get(0).map(|tab| tab.title()), Some("One"));

        strip.set_titles(["Only"]).unwrap();
        assert_eq!(strip.tabs().len(), 1);
    }

    #[test]
    fn tap_before_attach_is_an_error() {
        let mut strip = strip();
        assert_eq!(strip.on_tab_click(0), Err(StripError::NotAttached));
    }

    #[test]
    fn taps_move_the_pager_and_notify() {
        let (mut strip, pager) = attached();
        let first = Rc::new(RefCell::new(Vec::new()));
        let again = Rc::new(RefCell::new(Vec::new()));
        {
            let first = first.clone();
            let again = again.clone();
            strip.set_on_tab_select_listener(TabSelectCallbacks::new(
                move |index| first.borrow_mut().push(index),
                move |index| again.borrow_mut().push(index),
            ));
        }

        strip.on_tab_click(1).unwrap();
        strip.on_tab_click(2).unwrap();
        strip.on_tab_click(2).unwrap();
        strip.on_tab_click(7).unwrap();
        strip.on_tab_click(usize::MAX).unwrap();

        // the strip still sits on tab 0, so the jump to 2 is not animated
        assert_eq!(pager.lock().requests(), [(1, true), (2, false)]);
        assert_eq!(*first.borrow(), [1, 2]);
        assert_eq!(*again.borrow(), [2]);
    }

    #[test]
    fn mid_swipe_frame_blends_the_two_tabs() {
        let (mut strip, _pager) = attached();
        strip.on_page_scrolled(0, 0.5, 50);

        let frame = strip.frame();
        assert_eq!(frame.tabs[0].style.size, 14.0);
        assert_eq!(frame.tabs[1].style.size, 14.0);
        assert_eq!(frame.tabs[2].style.size, SlidingTabDefaults::UNSELECTED_TEXT_SIZE);
        assert!(frame.tabs[0].selected);
        // halfway between #FF000000 and #FF888888
        assert_eq!(frame.tabs[0].style.color, Color::from_hex(0xFF44_4444));
        assert_eq!(frame.tabs[1].style.color, Color::from_hex(0xFF44_4444));

        let indicator = frame.indicator.unwrap();
        assert_eq!(indicator.paint, IndicatorPaint::Solid(Color::BLACK));
        assert_eq!(indicator.rect.bottom.raw(), 48);
        assert_eq!(indicator.rect.top.raw(), 45);
    }

    #[test]
    fn selection_then_rest_gives_static_styles() {
        let (mut strip, _pager) = attached();
        for event in [
            PageEvent::ScrollStateChanged(PagerScrollState::Dragging),
            PageEvent::Scrolled {
                position: 0,
                offset: 0.6,
                offset_pixels: 60,
            },
            PageEvent::Selected(1),
            PageEvent::ScrollStateChanged(PagerScrollState::Settling),
            PageEvent::Scrolled {
                position: 0,
                offset: 0.95,
                offset_pixels: 95,
            },
            PageEvent::Scrolled {
                position: 1,
                offset: 0.0,
                offset_pixels: 0,
            },
            PageEvent::ScrollStateChanged(PagerScrollState::Idle),
        ] {
            event.dispatch(&mut strip);
        }

        let config = StyleConfig::default();
        let resolver = StyleResolver::new(&config);
        let frame = strip.frame();
        assert_eq!(strip.current_tab(), 1);
        assert_eq!(frame.tabs[1].style, resolver.static_style(true));
        assert_eq!(frame.tabs[0].style, resolver.static_style(false));
        assert_eq!(frame.tabs[2].style, resolver.static_style(false));
    }

    #[test]
    fn commands_are_coalesced() {
        let (mut strip, _pager) = attached();

        strip.on_page_scrolled(1, 0.0, 0);
        strip.on_page_scrolled(1, 0.0, 0);
        assert_eq!(
            strip.drain_commands().as_slice(),
            [StripCommand::ScrollTo(50), StripCommand::Redraw]
        );

        strip.on_page_scrolled(1, 0.0, 0);
        assert_eq!(strip.drain_commands().as_slice(), [StripCommand::Redraw]);
        assert_eq!(strip.frame().scroll_x, 50);
    }

    #[test]
    fn scroll_far_past_the_tabs_is_ignored() {
        let (mut strip, _pager) = attached();
        strip.on_page_scrolled(usize::MAX, 0.5, 50);
        strip.on_page_selected(usize::MAX);
        assert!(strip.drain_commands().is_empty());
        assert_eq!(strip.scroll_state(), ScrollState::settled(0));
    }

    #[test]
    fn arrange_measures_titles_at_the_selected_size() {
        let pager = Arc::new(Mutex::new(RecordingPager::new(["ab", "abcd"])));
        let mut strip = strip();
        strip.attach(pager).unwrap();
        strip.arrange_tabs();

        // 2 chars at 16px, plus 10dp padding on each side
        assert_eq!(strip.tabs().get(0).map(|tab| tab.width()), Some(36.0));

        strip.set_style(
            StyleConfig::default().tab_width_mode(TabWidthMode::Fixed(Dp(50.0))),
        );
        strip.arrange_tabs();
        assert_eq!(strip.tabs().content_width(), 100.0);
    }

    #[test]
    fn detach_forgets_everything() {
        let (mut strip, _pager) = attached();
        strip.on_page_scrolled(0, 0.4, 40);
        strip.detach();

        assert!(!strip.is_attached());
        assert!(strip.tabs().is_empty());
        assert_eq!(strip.scroll_state(), ScrollState::settled(0));
        let frame = strip.frame();
        assert!(frame.tabs.is_empty());
        assert!(frame.indicator.is_none());
        assert_eq!(frame.scroll_x, 0);
    }
}
