//! Progress reporting and cancellation for a running booklet job
//!
//! The composition loop owns a `ProgressReporter`; any number of observers
//! hold a `ProgressHandle`. Progress is published after every finished sheet
//! and cancellation is only honoured at the same boundary.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::watch;

/// Snapshot of how far a booklet run has got
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    /// Source pages handled so far (placed, failed or skipped)
    pub completed_pages: usize,
    /// Source pages in the selected range
    pub total_pages: usize,
    /// Physical sheets finished
    pub completed_sheets: usize,
    /// Physical sheets in the plan
    pub total_sheets: usize,
}

impl Progress {
    /// Completed fraction in `0.0..=1.0`
    pub fn fraction(&self) -> f32 {
        if self.total_pages == 0 {
            1.0
        } else {
            self.completed_pages as f32 / self.total_pages as f32
        }
    }

    pub fn is_complete(&self) -> bool {
        self.completed_sheets >= self.total_sheets
    }
}

/// Producer side, owned by the composition loop
#[derive(Debug)]
pub struct ProgressReporter {
    tx: watch::Sender<Progress>,
    cancelled: Arc<AtomicBool>,
}

/// Observer side: watch progress and request cancellation
#[derive(Debug, Clone)]
pub struct ProgressHandle {
    rx: watch::Receiver<Progress>,
    cancelled: Arc<AtomicBool>,
}

/// Create a connected reporter/handle pair
pub fn progress_channel() -> (ProgressReporter, ProgressHandle) {
    let (tx, rx) = watch::channel(Progress::default());
    let cancelled = Arc::new(AtomicBool::new(false));
    (
        ProgressReporter {
            tx,
            cancelled: cancelled.clone(),
        },
        ProgressHandle { rx, cancelled },
    )
}

impl ProgressReporter {
    /// A reporter nobody is listening to
    pub fn detached() -> Self {
        progress_channel().0
    }

    /// Publish a new snapshot; never blocks
    pub fn report(&self, progress: Progress) {
        self.tx.send_replace(progress);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

impl ProgressHandle {
    /// The most recent snapshot
    pub fn latest(&self) -> Progress {
        *self.rx.borrow()
    }

    /// Wait for the next snapshot. Returns `None` once the job has finished
    /// and no more updates will arrive.
    pub async fn changed(&mut self) -> Option<Progress> {
        self.rx.changed().await.ok()?;
        Some(*self.rx.borrow_and_update())
    }

    /// Ask the job to stop at the next sheet boundary
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}
