//! Gesture state machine.
//!
//! One recorder captures one gesture at a time. While drawing it keeps
//! the raw path string exactly as a live renderer would display it; the
//! string is only parsed and simplified when the gesture ends.

use crate::stroke::Stroke;
use inkstroke_core::{validate_tolerance, Point, Result, StrokeStyle};
use inkstroke_path::{
    move_to, parse, push_line_to, simplify_observed, stringify, SimplifyObserver, TracingObserver,
};
use std::fmt;
use tracing::{debug, trace, warn};

/// Tolerance applied to finished gestures unless configured otherwise.
pub const GESTURE_TOLERANCE: f64 = 2.0;

/// Pointer input forwarded by the host toolkit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Pointer pressed on the surface
    Start(Point),
    /// Pointer moved
    Move(Point),
    /// Pointer released
    End,
    /// Pointer left the surface; commits like `End`
    Leave,
}

/// Recorder state
#[derive(Debug, Clone, PartialEq)]
pub enum GestureState {
    /// No gesture in progress
    Idle,
    /// Pointer is down
    Drawing {
        /// Raw path accumulated so far
        path: String,
        /// Number of points in `path`
        samples: usize,
    },
}

/// Accumulates one freehand gesture and commits it as a simplified stroke
pub struct StrokeRecorder {
    state: GestureState,
    tolerance: f64,
    style: StrokeStyle,
    observer: Box<dyn SimplifyObserver>,
}

impl Default for StrokeRecorder {
    fn default() -> Self {
        Self::new(GESTURE_TOLERANCE)
    }
}

impl fmt::Debug for StrokeRecorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrokeRecorder")
            .field("state", &self.state)
            .field("tolerance", &self.tolerance)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

impl StrokeRecorder {
    /// Creates an idle recorder.
    ///
    /// The tolerance is used as given; see [`StrokeRecorder::try_new`] for
    /// a checked constructor.
    pub fn new(tolerance: f64) -> Self {
        Self {
            state: GestureState::Idle,
            tolerance,
            style: StrokeStyle::default(),
            observer: Box::new(TracingObserver),
        }
    }

    /// Creates an idle recorder, rejecting tolerances that are not
    /// positive finite numbers.
    pub fn try_new(tolerance: f64) -> Result<Self> {
        Ok(Self::new(validate_tolerance(tolerance)?))
    }

    /// Sets the style attached to committed strokes.
    pub fn with_style(mut self, style: StrokeStyle) -> Self {
        self.style = style;
        self
    }

    /// Replaces the observer that receives simplification statistics.
    pub fn with_observer(mut self, observer: impl SimplifyObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, GestureState::Drawing { .. })
    }

    /// The raw path of the gesture in progress, for live rendering.
    pub fn pending_path(&self) -> Option<&str> {
        match &self.state {
            GestureState::Drawing { path, .. } => Some(path),
            GestureState::Idle => None,
        }
    }

    /// Dispatches one pointer event. Returns the committed stroke when the
    /// event ends a gesture.
    pub fn handle(&mut self, event: GestureEvent) -> Option<Stroke> {
        match event {
            GestureEvent::Start(at) => {
                self.begin(at);
                None
            }
            GestureEvent::Move(to) => {
                self.extend(to);
                None
            }
            GestureEvent::End | GestureEvent::Leave => self.finish(),
        }
    }

    /// Starts a gesture at `at`.
    ///
    /// An unfinished gesture is discarded without being committed.
    pub fn begin(&mut self, at: Point) {
        if let GestureState::Drawing { samples, .. } = &self.state {
            warn!(
                "Gesture started while drawing, discarding {} unfinished points",
                samples
            );
        }

        trace!("Gesture start at {}", at);
        self.state = GestureState::Drawing {
            path: move_to(at),
            samples: 1,
        };
    }

    /// Appends a point to the gesture in progress. Returns `false` and
    /// does nothing when no gesture is in progress.
    pub fn extend(&mut self, to: Point) -> bool {
        match &mut self.state {
            GestureState::Drawing { path, samples } => {
                push_line_to(path, to);
                *samples += 1;
                true
            }
            GestureState::Idle => false,
        }
    }

    /// Ends the gesture in progress and commits it.
    ///
    /// Returns `None` when no gesture is in progress.
    pub fn finish(&mut self) -> Option<Stroke> {
        let GestureState::Drawing { path, .. } =
            std::mem::replace(&mut self.state, GestureState::Idle)
        else {
            trace!("Gesture end ignored, recorder is idle");
            return None;
        };

        let raw = parse(&path);
        let (simplified, stats) = simplify_observed(&raw, self.tolerance, &*self.observer);
        debug!(
            "Committed stroke with {} of {} points",
            stats.final_count, stats.original_count
        );

        Some(Stroke {
            path: stringify(&simplified),
            style: self.style.clone(),
            stats,
        })
    }

    /// Abandons the gesture in progress, returning its raw path.
    pub fn cancel(&mut self) -> Option<String> {
        match std::mem::replace(&mut self.state, GestureState::Idle) {
            GestureState::Drawing { path, .. } => {
                debug!("Gesture cancelled");
                Some(path)
            }
            GestureState::Idle => None,
        }
    }
}
