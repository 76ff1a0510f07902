//! Preview overlay
//!
//! Maps gesture events to on-screen labels and defines the display the
//! session loop draws into. Nothing here feeds back into gesture logic.

pub mod headless;

use crate::gesture::GestureEvent;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use headless::HeadlessDisplay;

/// Errors reported by a display
#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("Render error: {0}")]
    Render(String),
}

/// Result type for display operations
pub type DisplayResult<T> = Result<T, DisplayError>;

/// RGB overlay color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Text drawn onto a preview frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    pub position: (i32, i32),
    pub color: Color,
}

/// Overlay label for an event; `DragStart` has none since its click
/// label is already shown on the same frame.
pub fn label_for(event: GestureEvent, origin: (i32, i32)) -> Option<Label> {
    let (text, color) = match event {
        GestureEvent::SingleClick => ("Single Click", Color::CYAN),
        GestureEvent::DoubleClick => ("Double Click", Color::GREEN),
        GestureEvent::DragStart => return None,
        GestureEvent::DragEnd => ("Drag End", Color::RED),
        GestureEvent::ScrollUp => ("Scrolling Up", Color::GREEN),
        GestureEvent::ScrollDown => ("Scrolling Down", Color::CYAN),
        GestureEvent::RightClick => ("Right Click", Color::WHITE),
    };

    Some(Label {
        text: text.to_string(),
        position: origin,
        color,
    })
}

/// Preview window the session loop renders into
pub trait FrameDisplay<F> {
    /// Draw a label onto the frame
    fn annotate(&mut self, frame: &mut F, label: &Label) -> DisplayResult<()>;

    /// Present the frame
    fn show(&mut self, frame: &F) -> DisplayResult<()>;

    /// Key pressed since the last poll, if any
    fn poll_key(&mut self) -> Option<char>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_event_but_drag_start_has_a_label() {
        let events = [
            GestureEvent::SingleClick,
            GestureEvent::DoubleClick,
            GestureEvent::DragEnd,
            GestureEvent::ScrollUp,
            GestureEvent::ScrollDown,
            GestureEvent::RightClick,
        ];
        for event in events {
            let label = label_for(event, (50, 100)).unwrap();
            assert_eq!(label.position, (50, 100));
            assert!(!label.text.is_empty());
        }
        assert!(label_for(GestureEvent::DragStart, (50, 100)).is_none());
    }

    #[test]
    fn test_label_text() {
        assert_eq!(label_for(GestureEvent::DragEnd, (0, 0)).unwrap().text, "Drag End");
        assert_eq!(label_for(GestureEvent::RightClick, (0, 0)).unwrap().color, Color::WHITE);
    }
}
