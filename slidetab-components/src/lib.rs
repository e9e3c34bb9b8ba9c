//! A sliding tab strip that follows a pager.
//!
//! The strip keeps an indicator under the active tab, blends the title size
//! and color of the two tabs around a swipe, and keeps the active tab
//! centered in a scrolling container. It is renderer agnostic: the host feeds
//! pager events in, calls [`TabStrip::frame`](strip::TabStrip::frame) and
//! draws the result.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//!
//! use parking_lot::Mutex;
//! use slidetab_components::{
//!     geometry::Viewport,
//!     pager::{PageChangeListener, PageContainer},
//!     strip::TabStrip,
//! };
//!
//! struct Pages {
//!     titles: Vec<&'static str>,
//!     current: usize,
//! }
//!
//! impl PageContainer for Pages {
//!     fn has_adapter(&self) -> bool {
//!         true
//!     }
//!     fn page_count(&self) -> usize {
//!         self.titles.len()
//!     }
//!     fn page_title(&self, index: usize) -> Option<String> {
//!         self.titles.get(index).map(|title| title.to_string())
//!     }
//!     fn current_item(&self) -> usize {
//!         self.current
//!     }
//!     fn set_current_item(&mut self, index: usize, _smooth: bool) {
//!         self.current = index;
//!     }
//! }
//!
//! let pager = Arc::new(Mutex::new(Pages {
//!     titles: vec!["Hot", "iOS", "Android"],
//!     current: 0,
//! }));
//! let measure = |text: &str, size: f32| text.len() as f32 * size * 0.6;
//!
//! let mut strip = TabStrip::new(measure);
//! strip.attach(pager)?;
//! strip.set_viewport(Viewport::new(360.0, 48.0));
//! strip.arrange_tabs();
//!
//! // Halfway between the first and second page.
//! strip.on_page_scrolled(0, 0.5, 180);
//! let frame = strip.frame();
//! assert_eq!(frame.tabs.len(), 3);
//! assert!(frame.indicator.is_some());
//! # Ok::<(), slidetab_components::error::StripError>(())
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod error;
pub mod geometry;
pub mod interpolation;
pub mod measure;
pub mod pager;
pub mod strip;
pub mod style;
pub mod tab;
pub mod tracker;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use crate::{
    error::StripError,
    strip::{StripCommand, StripFrame, TabStrip},
    style::StyleConfig,
};
