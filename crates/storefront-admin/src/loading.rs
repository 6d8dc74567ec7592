//! Global loading indicator driven by an in-flight request counter.
//!
//! The indicator is raised when the first request starts and lowered when the
//! last one finishes, so overlapping requests never hide it early.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::view::Presenter;

pub struct LoadingTracker {
    in_flight: AtomicUsize,
    presenter: Arc<dyn Presenter>,
}

impl LoadingTracker {
    pub fn new(presenter: Arc<dyn Presenter>) -> Self {
        Self {
            in_flight: AtomicUsize::new(0),
            presenter,
        }
    }

    /// Mark one request as started. The returned guard ends it on drop,
    /// including on early returns and errors.
    pub fn begin(&self) -> LoadingGuard<'_> {
        if self.in_flight.fetch_add(1, Ordering::SeqCst) == 0 {
            self.presenter.set_loading(true);
        }
        LoadingGuard { tracker: self }
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }
}

/// RAII guard for one in-flight request.
pub struct LoadingGuard<'a> {
    tracker: &'a LoadingTracker,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if self.tracker.in_flight.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.tracker.presenter.set_loading(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingPresenter;

    #[test]
    fn test_indicator_spans_overlapping_requests() {
        let presenter = Arc::new(RecordingPresenter::default());
        let tracker = LoadingTracker::new(presenter.clone());

        let first = tracker.begin();
        let second = tracker.begin();
        assert_eq!(tracker.in_flight(), 2);

        drop(first);
        assert_eq!(presenter.loading_events(), vec![true]);

        drop(second);
        assert_eq!(presenter.loading_events(), vec![true, false]);
        assert_eq!(tracker.in_flight(), 0);
    }

    #[test]
    fn test_guard_clears_on_early_return() {
        fn failing(tracker: &LoadingTracker) -> Result<(), &'static str> {
            let _loading = tracker.begin();
            Err("boom")
        }

        let presenter = Arc::new(RecordingPresenter::default());
        let tracker = LoadingTracker::new(presenter.clone());

        assert!(failing(&tracker).is_err());
        assert_eq!(presenter.loading_events(), vec![true, false]);
    }
}
