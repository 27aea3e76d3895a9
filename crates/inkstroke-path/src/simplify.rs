//! Distance-threshold point decimation
//!
//! A single greedy pass: the first point is always kept, and every later
//! point is kept only when it lies strictly farther than the tolerance
//! from the last point that was kept. This is a cheap filter for jittery
//! pointer input, not a shape-preserving simplification.
//!
//! The comparison is a plain `distance > tolerance`. A point with a NaN
//! coordinate has a NaN distance, fails the comparison, and is dropped,
//! unless it is the first point.

use inkstroke_core::Point;
use std::fmt;
use tracing::debug;

/// Tolerance used when the caller has no preference
pub const DEFAULT_TOLERANCE: f64 = 1.0;

/// Outcome of one simplification pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimplifyStats {
    /// Number of input points
    pub original_count: usize,
    /// Number of points kept
    pub final_count: usize,
    /// Share of points removed, in percent. NaN for an empty input.
    pub reduction_percent: f64,
}

impl SimplifyStats {
    /// Compute the statistics for a pass that kept `final_count` of
    /// `original_count` points.
    pub fn new(original_count: usize, final_count: usize) -> Self {
        let reduction_percent = if original_count == 0 {
            f64::NAN
        } else {
            (1.0 - final_count as f64 / original_count as f64) * 100.0
        };

        Self {
            original_count,
            final_count,
            reduction_percent,
        }
    }

    /// Number of points dropped
    pub fn removed_count(&self) -> usize {
        self.original_count - self.final_count
    }
}

impl fmt::Display for SimplifyStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Simplified path from {} to {} points ({:.2}%)",
            self.original_count, self.final_count, self.reduction_percent
        )
    }
}

/// Receives the statistics of every simplification pass
pub trait SimplifyObserver: Send + Sync {
    /// Called once per pass, after the output has been computed
    fn on_simplified(&self, stats: &SimplifyStats);
}

impl<F> SimplifyObserver for F
where
    F: Fn(&SimplifyStats) + Send + Sync,
{
    fn on_simplified(&self, stats: &SimplifyStats) {
        self(stats)
    }
}

/// Observer that ignores every report
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SimplifyObserver for NoopObserver {
    fn on_simplified(&self, _stats: &SimplifyStats) {}
}

/// Observer that emits each report as a `debug` event
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SimplifyObserver for TracingObserver {
    fn on_simplified(&self, stats: &SimplifyStats) {
        debug!(
            original = stats.original_count,
            kept = stats.final_count,
            "{}",
            stats
        );
    }
}

/// Drop every point that is within `tolerance` of the last kept point.
///
/// The output is a subsequence of `points` in the original order and is
/// empty only when the input is empty.
pub fn simplify(points: &[Point], tolerance: f64) -> Vec<Point> {
    simplify_observed(points, tolerance, &NoopObserver).0
}

/// [`simplify`], reporting the pass statistics to `observer`.
///
/// Returns the kept points together with the statistics that were
/// reported.
pub fn simplify_observed(
    points: &[Point],
    tolerance: f64,
    observer: &dyn SimplifyObserver,
) -> (Vec<Point>, SimplifyStats) {
    let mut kept: Vec<Point> = Vec::new();
    let mut last: Option<Point> = None;

    for &point in points {
        let keep = match last {
            None => true,
            Some(prev) => point.distance_to(&prev) > tolerance,
        };

        if keep {
            kept.push(point);
            last = Some(point);
        }
    }

    let stats = SimplifyStats::new(points.len(), kept.len());
    observer.on_simplified(&stats);
    (kept, stats)
}
