//! Captured frames and the capture backend trait.

use image::{GrayImage, RgbImage, imageops};

use super::error::CaptureResult;
use crate::search::Rectangle;

/// One freshly captured frame.
///
/// A new instance is acquired for every search attempt; frames are never
/// cached across polling iterations, since a stale frame would defeat the
/// point of polling.
#[derive(Debug, Clone)]
pub struct CapturedImage {
    rgb: RgbImage,
}

impl CapturedImage {
    pub fn new(rgb: RgbImage) -> Self {
        Self { rgb }
    }

    /// Full-color pixel data.
    pub fn color(&self) -> &RgbImage {
        &self.rgb
    }

    /// Single-channel view, converted on demand.
    pub fn gray(&self) -> GrayImage {
        imageops::grayscale(&self.rgb)
    }

    /// (width, height) in pixels.
    pub fn size(&self) -> (u32, u32) {
        self.rgb.dimensions()
    }
}

/// Screen capture backend.
///
/// Implemented outside this crate (and by test doubles within it). A failed
/// capture is recovered inside every search call, never propagated to the
/// caller.
pub trait ScreenCapture {
    /// Capture the given region, or the whole screen when `None`.
    fn capture(&self, region: Option<&Rectangle>) -> CaptureResult<CapturedImage>;

    /// Full screen dimensions in pixels.
    fn screen_size(&self) -> (u32, u32);
}
