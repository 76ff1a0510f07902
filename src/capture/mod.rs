//! Hand landmark capture
//!
//! This module provides the landmark types the gesture engine consumes and
//! the sources that produce them.

pub mod landmarks;
pub mod replay;
pub mod source;

pub use landmarks::{Hand, Landmark};
pub use replay::{LandmarkTrace, ReplaySource, TraceClock, TraceFrame};
pub use source::{CaptureError, CaptureResult, LandmarkSource};
