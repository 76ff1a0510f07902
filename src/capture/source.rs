//! Landmark source trait
//!
//! A landmark source owns the camera and the hand detector. The session
//! loop pulls one frame at a time and asks for the hands in it.

use crate::capture::landmarks::Hand;
use thiserror::Error;

/// Errors that can occur while capturing frames
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Capture device unavailable: {0}")]
    DeviceUnavailable(String),

    #[error("End of stream")]
    EndOfStream,

    #[error("Invalid trace: {0}")]
    InvalidTrace(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for capture operations
pub type CaptureResult<T> = Result<T, CaptureError>;

/// Camera plus hand-landmark detector
pub trait LandmarkSource {
    /// Frame type handed to the display after detection
    type Frame;

    /// Block until the next frame is available
    ///
    /// `CaptureError::EndOfStream` ends a session cleanly; any other error
    /// is fatal.
    fn next_frame(&mut self) -> CaptureResult<Self::Frame>;

    /// Hands detected in `frame`, possibly none
    fn detect_hands(&mut self, frame: &Self::Frame) -> Vec<Hand>;

    /// Release the capture device
    fn release(&mut self) {}
}
