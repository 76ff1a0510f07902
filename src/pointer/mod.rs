//! Pointer output
//!
//! The gesture engine never talks to the operating system directly. Every
//! cursor move and button press goes through a `PointerSink`, which keeps
//! OS input injection behind one small seam.

pub mod recording;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use recording::{ActionLog, RecordingSink};

/// Errors reported by a pointer sink
#[derive(Error, Debug)]
pub enum PointerError {
    #[error("Input injection failed: {0}")]
    Injection(String),
}

/// Result type for pointer operations
pub type PointerResult<T> = Result<T, PointerError>;

/// Integer pixel coordinate on the display
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance in pixels
    pub fn distance_to(&self, other: ScreenPoint) -> f64 {
        let dx = f64::from(other.x - self.x);
        let dy = f64::from(other.y - self.y);
        (dx * dx + dy * dy).sqrt()
    }
}

/// Display resolution in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl ScreenSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// One pointer operation, as recorded by sinks that keep a log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PointerAction {
    #[serde(rename_all = "camelCase")]
    Move { x: i32, y: i32, duration_s: f64 },
    MouseDown,
    MouseUp,
    Click,
    DoubleClick,
    RightClick,
    Scroll { amount: i32 },
}

/// OS-level cursor and button control
pub trait PointerSink {
    /// Current cursor position
    fn position(&self) -> ScreenPoint;

    /// Display resolution, fixed for the life of the sink
    fn screen_size(&self) -> ScreenSize;

    /// Move the cursor to `point` over `duration_s` seconds
    fn move_to(&mut self, point: ScreenPoint, duration_s: f64) -> PointerResult<()>;

    fn mouse_down(&mut self) -> PointerResult<()>;

    fn mouse_up(&mut self) -> PointerResult<()>;

    fn click(&mut self) -> PointerResult<()>;

    fn double_click(&mut self) -> PointerResult<()>;

    fn right_click(&mut self) -> PointerResult<()>;

    /// Scroll by a signed amount; positive scrolls up
    fn scroll(&mut self, amount: i32) -> PointerResult<()>;
}
