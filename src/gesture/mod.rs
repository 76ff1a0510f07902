//! Gesture recognition
//!
//! Turns per-frame hand landmarks into debounced pointer events.

pub mod classifier;
pub mod edge;
pub mod state;

pub use classifier::{GestureClassifier, GestureEvent};
pub use edge::{Edge, EdgeState};
pub use state::GestureState;
