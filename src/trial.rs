//! Timed-trial execution: one fill, one elapsed reading.

use std::hint::black_box;
use std::time::{Duration, Instant};

/// Outcome of a single timed fill.
#[derive(Debug, Clone)]
pub struct TrialResult {
    pub label: &'static str,
    pub elapsed: Duration,
}

impl TrialResult {
    /// Elapsed time in seconds, the unit the report prints.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Time a single fill from allocation to last write.
///
/// The filled collection passes through `black_box` inside the window and
/// is dropped only after the end timestamp, so an optimized build cannot
/// discard the work being measured.
pub fn time_trial<T>(label: &'static str, fill: impl FnOnce() -> T) -> TrialResult {
    let start = Instant::now();
    let rows = black_box(fill());
    let elapsed = start.elapsed();
    drop(rows);
    TrialResult { label, elapsed }
}
