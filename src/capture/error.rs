use thiserror::Error;

/// A specialized `Result` type for capture operations.
pub type CaptureResult<T> = Result<T, CaptureError>;

/// The error type reported by screen capture backends.
///
/// Capture failure is an expected runtime condition: every search entry
/// point catches it, logs a warning and degrades to "not found" so polling
/// loops keep running.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("display is unavailable: {reason}")]
    DisplayUnavailable { reason: String },

    #[error("capture of region [{x},{y} {width}x{height}] was denied: {reason}")]
    RegionDenied {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        reason: String,
    },

    #[error("failed to decode captured frame: {source}")]
    FrameDecodeFailed {
        #[from]
        source: image::ImageError,
    },

    #[error("capture backend error: {description}")]
    Backend { description: String },
}
