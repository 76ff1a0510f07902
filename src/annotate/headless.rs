//! Display without a window
//!
//! Logs labels instead of drawing them and reads key presses from the
//! replayed trace.

use super::{DisplayResult, FrameDisplay, Label};
use crate::capture::replay::TraceFrame;

/// `FrameDisplay` for replayed traces
#[derive(Debug, Default)]
pub struct HeadlessDisplay {
    title: String,
    frames_shown: usize,
    pending_key: Option<char>,
}

impl HeadlessDisplay {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn frames_shown(&self) -> usize {
        self.frames_shown
    }
}

impl FrameDisplay<TraceFrame> for HeadlessDisplay {
    fn annotate(&mut self, frame: &mut TraceFrame, label: &Label) -> DisplayResult<()> {
        frame.annotations.push(label.clone());
        Ok(())
    }

    fn show(&mut self, frame: &TraceFrame) -> DisplayResult<()> {
        self.frames_shown += 1;
        for label in &frame.annotations {
            tracing::info!(
                "[{}] t={:.3}s {}",
                self.title,
                frame.timestamp_s,
                label.text
            );
        }
        self.pending_key = frame.key;
        Ok(())
    }

    fn poll_key(&mut self) -> Option<char> {
        self.pending_key.take()
    }
}
