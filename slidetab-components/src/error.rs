//! Errors surfaced by the tab strip.
//!
//! Only misuse by the host is reported. Conditions the strip can recover from
//! on its own (a neighbor tab outside the strip during a swipe, a page without
//! a title) are logged and skipped instead.

use thiserror::Error;

/// Errors returned by [`TabStrip`](crate::strip::TabStrip) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StripError {
    /// The page container was attached before it had an adapter, so there is
    /// nothing to build tabs from.
    #[error("page container has no adapter; set one before attaching the tab strip")]
    MissingAdapter,
    /// An operation that talks to the page container ran before `attach`.
    #[error("tab strip is not attached to a page container")]
    NotAttached,
    /// The host addressed a tab the strip does not have.
    #[error("tab index {index} is out of range for {count} tabs")]
    TabIndexOutOfRange {
        /// Requested tab index.
        index: usize,
        /// Number of tabs in the strip.
        count: usize,
    },
}
