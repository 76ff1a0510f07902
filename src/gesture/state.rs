//! Mutable gesture state carried from frame to frame

use crate::gesture::edge::EdgeState;

/// Debounce and timing state for the gesture classifier
///
/// Created once per session and passed into the classifier every frame.
/// The click pinch and the outstanding mouse-down share one state machine,
/// so "pinch active" and "dragging" cannot disagree.
#[derive(Debug, Clone, Default)]
pub struct GestureState {
    pub(crate) click: EdgeState,
    /// Time (seconds) of the most recent click engagement
    pub last_click_time: Option<f64>,
    /// Time (seconds) the pinky-thumb pinch was last seen closed
    pub last_right_click_time: Option<f64>,
}

impl GestureState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while the index-thumb pinch is engaged
    pub fn pinch_active(&self) -> bool {
        self.click.is_engaged()
    }

    /// True while a mouse-down is outstanding
    pub fn dragging(&self) -> bool {
        self.click.is_engaged()
    }
}
