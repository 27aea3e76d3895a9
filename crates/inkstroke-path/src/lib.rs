//! # Inkstroke Path
//!
//! Conversion between textual polyline paths and point sequences, and
//! the distance filter that thins a captured stroke before it is
//! committed.
//!
//! ## Path strings
//!
//! A path string is one `M` command followed by any number of `L`
//! commands, each carrying one coordinate pair:
//!
//! ```text
//! M10 20 L15 25 L100 200
//! ```
//!
//! Parsing is lenient: malformed numbers become NaN coordinates instead
//! of errors, and stringifying an empty sequence yields the bare `"M"`.
//!
//! ## Usage
//!
//! ```rust
//! use inkstroke_path::{parse, simplify, stringify};
//!
//! let raw = "M0 0 L0.5 0 L3 0";
//! let points = simplify(&parse(raw), 1.0);
//! assert_eq!(stringify(&points), "M0 0 L3 0");
//! ```

pub mod codec;
pub mod simplify;

pub use codec::{format_coordinate, move_to, parse, parse_coordinate, push_line_to, stringify};
pub use simplify::{
    simplify, simplify_observed, NoopObserver, SimplifyObserver, SimplifyStats, TracingObserver,
    DEFAULT_TOLERANCE,
};

pub use inkstroke_core::Point;
