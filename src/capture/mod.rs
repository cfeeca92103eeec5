//! Screen capture boundary: the trait the search core consumes and the frame
//! type it searches. Actual capture backends live outside this crate.

pub mod error;
pub mod frame;

pub use error::{CaptureError, CaptureResult};
pub use frame::{CapturedImage, ScreenCapture};
