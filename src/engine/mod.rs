//! Background search management.
//!
//! [`SearchController`] owns at most one running [`SearchTask`] and hides the
//! thread plumbing: start a search, poll or wait for its outcome, cancel it
//! when the position moves on.

mod controller;

use std::time::Duration;

pub use controller::{SearchController, SearchTask};

/// Depth and time budget for one search task.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SearchConfig {
    pub depth: u32,
    pub budget: Duration,
}

impl SearchConfig {
    #[must_use]
    pub const fn new(depth: u32, budget: Duration) -> Self {
        SearchConfig { depth, budget }
    }

    /// Deeper, slower preset: depth 2 within ten seconds.
    #[must_use]
    pub const fn tight() -> Self {
        SearchConfig::new(2, Duration::from_secs(10))
    }

    /// Shallow, quick preset: depth 1 within three seconds.
    #[must_use]
    pub const fn relaxed() -> Self {
        SearchConfig::new(1, Duration::from_secs(3))
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig::tight()
    }
}
