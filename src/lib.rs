//! Screen pattern search for visual test automation.
//!
//! Locates a small reference image (a [`Pattern`]) inside a freshly captured
//! screenshot: single best-match lookup, exhaustive multi-match extraction
//! with overlap suppression, and deadline-bounded wait helpers
//! (`image_find` / `image_vanish`) built on top.
//!
//! The capture backend is consumed through the [`ScreenCapture`] trait and
//! implemented elsewhere; this crate only searches what it is handed.

pub mod capture;
pub mod diagnostics;
pub mod pattern;
pub mod search;
pub mod settings;

pub use capture::{CaptureError, CaptureResult, CapturedImage, ScreenCapture};
pub use diagnostics::{Diagnostics, LogDiagnostics};
pub use pattern::{COLOR_MATCH_SIMILARITY, MatchMode, Pattern};
pub use search::{ImageSearch, Point, Rectangle, ScoreSurface};
pub use settings::Settings;
