//! Search task lifecycle.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use parking_lot::Mutex;

use crate::board::search::{self, SearchOutcome};
use crate::board::PositionSnapshot;
use crate::sync::StopFlag;

use super::SearchConfig;

/// One background search over a detached snapshot.
pub struct SearchTask {
    stop: StopFlag,
    outcome: Arc<Mutex<Option<SearchOutcome>>>,
    handle: JoinHandle<()>,
}

impl SearchTask {
    /// Spawn a search thread over `snapshot`.
    pub fn spawn(snapshot: PositionSnapshot, config: SearchConfig) -> Self {
        let stop = StopFlag::new();
        let outcome = Arc::new(Mutex::new(None));
        let thread_stop = stop.clone();
        let thread_outcome = Arc::clone(&outcome);
        let handle = thread::spawn(move || {
            let result =
                search::find_best_move(&snapshot, config.depth, config.budget, &thread_stop);
            *thread_outcome.lock() = Some(result);
        });
        SearchTask {
            stop,
            outcome,
            handle,
        }
    }

    /// Ask the task to stop at its next interrupt check.
    pub fn cancel(&self) {
        self.stop.stop();
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Block until the task ends and return its outcome.
    pub fn wait(self) -> SearchOutcome {
        if self.handle.join().is_err() {
            log::error!("search thread panicked");
            return SearchOutcome::Cancelled;
        }
        self.outcome.lock().take().unwrap_or(SearchOutcome::Cancelled)
    }
}

/// Owner of the single in-flight search.
#[derive(Default)]
pub struct SearchController {
    current: Option<SearchTask>,
}

impl SearchController {
    #[must_use]
    pub fn new() -> Self {
        SearchController { current: None }
    }

    /// Start a new search, cancelling and discarding any previous one.
    pub fn start_search(&mut self, snapshot: PositionSnapshot, config: SearchConfig) {
        self.cancel_current();
        self.current = Some(SearchTask::spawn(snapshot, config));
    }

    /// Cancel the in-flight search, if any, and return how it ended.
    pub fn cancel_current(&mut self) -> Option<SearchOutcome> {
        let task = self.current.take()?;
        task.cancel();
        Some(task.wait())
    }

    /// Block until the current search ends.
    pub fn wait(&mut self) -> Option<SearchOutcome> {
        self.current.take().map(SearchTask::wait)
    }

    #[must_use]
    pub fn is_thinking(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }
}
