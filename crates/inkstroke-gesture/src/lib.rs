//! # Inkstroke Gesture
//!
//! Turns pointer events into committed strokes without depending on any
//! UI toolkit. The host forwards press, drag and release events; the
//! recorder accumulates the raw path while the pointer is down and, on
//! release, thins it and hands back the final path string.
//!
//! ## Architecture
//!
//! ```text
//!            Start(p)               End / Leave
//!   Idle  ─────────────▶  Drawing  ─────────────▶  Idle  ──▶ Stroke
//!                          │    ▲
//!                          └────┘ Move(p)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use inkstroke_core::Point;
//! use inkstroke_gesture::{GestureEvent, StrokeRecorder};
//!
//! let mut recorder = StrokeRecorder::default();
//! recorder.handle(GestureEvent::Start(Point::new(0.0, 0.0)));
//! recorder.handle(GestureEvent::Move(Point::new(1.0, 0.0)));
//! recorder.handle(GestureEvent::Move(Point::new(8.0, 0.0)));
//! let stroke = recorder.handle(GestureEvent::End).unwrap();
//! assert_eq!(stroke.path, "M0 0 L8 0");
//! ```

pub mod recorder;
pub mod stroke;

pub use recorder::{GestureEvent, GestureState, StrokeRecorder, GESTURE_TOLERANCE};
pub use stroke::Stroke;
