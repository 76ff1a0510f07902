//! Landmark trace playback
//!
//! Replays a recorded JSON trace of hand landmarks as if it came from a
//! live camera. Trace timestamps drive a `TraceClock`, so a replay gives
//! the same gestures every time regardless of how fast it runs.

use crate::annotate::Label;
use crate::capture::landmarks::Hand;
use crate::capture::source::{CaptureError, CaptureResult, LandmarkSource};
use crate::config::DetectionConfig;
use crate::session::Clock;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::collections::VecDeque;
use std::path::Path;
use std::rc::Rc;

/// A recorded landmark stream
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LandmarkTrace {
    pub frames: Vec<TraceFrame>,
}

/// One recorded frame
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceFrame {
    /// Capture time in seconds from the start of the recording
    pub timestamp_s: f64,
    /// Detector output for this frame, before confidence gating
    #[serde(default)]
    pub hands: Vec<Hand>,
    /// Key pressed while this frame was on screen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<char>,
    /// Labels drawn onto the frame during the session
    #[serde(skip)]
    pub annotations: Vec<Label>,
}

impl TraceFrame {
    pub fn new(timestamp_s: f64, hands: Vec<Hand>) -> Self {
        Self {
            timestamp_s,
            hands,
            ..Default::default()
        }
    }
}

/// Clock that reads the timestamp of the frame being replayed
#[derive(Debug, Clone, Default)]
pub struct TraceClock {
    now: Rc<Cell<f64>>,
}

impl Clock for TraceClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

/// `LandmarkSource` over a `LandmarkTrace`
pub struct ReplaySource {
    frames: VecDeque<TraceFrame>,
    detection: DetectionConfig,
    tracking: bool,
    clock: TraceClock,
    released: bool,
}

impl ReplaySource {
    pub fn new(trace: LandmarkTrace, detection: DetectionConfig) -> CaptureResult<Self> {
        if let Some(pair) = trace
            .frames
            .windows(2)
            .find(|w| w[1].timestamp_s < w[0].timestamp_s)
        {
            return Err(CaptureError::InvalidTrace(format!(
                "timestamps go backward ({} -> {})",
                pair[0].timestamp_s, pair[1].timestamp_s
            )));
        }

        tracing::info!("Replay source ready ({} frames)", trace.frames.len());

        Ok(Self {
            frames: trace.frames.into(),
            detection,
            tracking: false,
            clock: TraceClock::default(),
            released: false,
        })
    }

    /// Load a trace from a JSON file
    pub fn open(path: &Path, detection: DetectionConfig) -> CaptureResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let trace: LandmarkTrace = serde_json::from_str(&content)
            .map_err(|e| CaptureError::InvalidTrace(format!("{}: {}", path.display(), e)))?;
        Self::new(trace, detection)
    }

    /// Clock that follows the replayed timestamps
    pub fn clock(&self) -> TraceClock {
        self.clock.clone()
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl LandmarkSource for ReplaySource {
    type Frame = TraceFrame;

    fn next_frame(&mut self) -> CaptureResult<TraceFrame> {
        if self.released {
            return Err(CaptureError::DeviceUnavailable("replay source released".to_string()));
        }

        let frame = self.frames.pop_front().ok_or(CaptureError::EndOfStream)?;
        self.clock.now.set(frame.timestamp_s);
        Ok(frame)
    }

    /// Keep hands above the detection threshold, or above the lower
    /// tracking threshold while a hand was present in the previous frame.
    fn detect_hands(&mut self, frame: &TraceFrame) -> Vec<Hand> {
        let threshold = if self.tracking {
            self.detection.min_tracking_confidence
        } else {
            self.detection.min_detection_confidence
        };

        let (kept, dropped): (Vec<Hand>, Vec<Hand>) = frame
            .hands
            .iter()
            .cloned()
            .partition(|hand| hand.score >= threshold);

        for hand in &dropped {
            tracing::warn!(
                "Dropping hand at t={:.3}s (score {:.2} < {:.2})",
                frame.timestamp_s,
                hand.score,
                threshold
            );
        }

        self.tracking = !kept.is_empty();
        kept
    }

    fn release(&mut self) {
        self.released = true;
        self.frames.clear();
        tracing::info!("Replay source released");
    }
}
