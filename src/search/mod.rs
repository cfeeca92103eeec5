//! Pattern search over screen captures.
//!
//! [`ImageSearch`] is the entry point: single best match, exhaustive
//! multi-match extraction, and the deadline-bounded wait helpers. The
//! correlation primitive itself lives in [`engine`].

pub mod engine;
pub mod geometry;
pub mod searcher;


pub use engine::{SUPPRESSED_SCORE, ScoreSurface};
pub use geometry::{Point, Rectangle};
pub use searcher::ImageSearch;
