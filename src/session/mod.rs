//! Frame loop
//!
//! One synchronous loop per session: grab a frame, detect hands, run the
//! cursor driver, draw labels, show the frame, poll for the exit key. All
//! gesture state lives in the `AirMouse` passed in, so nothing here is
//! shared across threads.

pub mod clock;

use crate::annotate::{DisplayError, FrameDisplay};
use crate::capture::source::{CaptureError, LandmarkSource};
use crate::config::DisplayConfig;
use crate::controller::AirMouse;
use crate::gesture::GestureEvent;
use crate::pointer::{PointerError, PointerSink, ScreenPoint};
use serde::Serialize;
use thiserror::Error;

pub use clock::{Clock, MonotonicClock};

/// Errors that end a session
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Capture error: {0}")]
    Capture(#[from] CaptureError),

    #[error("Pointer error: {0}")]
    Pointer(#[from] PointerError),

    #[error("Display error: {0}")]
    Display(#[from] DisplayError),
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Why a session ended normally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StopReason {
    ExitKey,
    EndOfStream,
}

/// Events fired in one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameRecord {
    pub index: usize,
    pub timestamp_s: f64,
    pub events: Vec<GestureEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<ScreenPoint>,
}

/// Totals for a finished session
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub frames: usize,
    pub frames_with_hands: usize,
    pub stop_reason: StopReason,
    /// Frames that fired at least one event
    pub records: Vec<FrameRecord>,
}

impl SessionSummary {
    /// All events in firing order
    pub fn events(&self) -> impl Iterator<Item = GestureEvent> + '_ {
        self.records.iter().flat_map(|r| r.events.iter().copied())
    }
}

/// Run the frame loop until the exit key, end of stream, or a fatal error
///
/// The source is released on every exit path.
pub fn run_session<S, D, P, C>(
    source: &mut S,
    display: &mut D,
    air_mouse: &mut AirMouse<P>,
    clock: &C,
    config: &DisplayConfig,
) -> SessionResult<SessionSummary>
where
    S: LandmarkSource,
    D: FrameDisplay<S::Frame>,
    P: PointerSink,
    C: Clock,
{
    tracing::info!("Session started (exit key '{}')", config.exit_key);

    let result = frame_loop(source, display, air_mouse, clock, config);
    source.release();

    match &result {
        Ok(summary) => tracing::info!(
            "Session stopped ({:?}, frames={}, with hands={}, event frames={})",
            summary.stop_reason,
            summary.frames,
            summary.frames_with_hands,
            summary.records.len()
        ),
        Err(e) => tracing::error!("Session failed: {}", e),
    }

    result
}

fn frame_loop<S, D, P, C>(
    source: &mut S,
    display: &mut D,
    air_mouse: &mut AirMouse<P>,
    clock: &C,
    config: &DisplayConfig,
) -> SessionResult<SessionSummary>
where
    S: LandmarkSource,
    D: FrameDisplay<S::Frame>,
    P: PointerSink,
    C: Clock,
{
    let mut frames = 0;
    let mut frames_with_hands = 0;
    let mut records = Vec::new();

    let stop_reason = loop {
        let mut frame = match source.next_frame() {
            Ok(frame) => frame,
            Err(CaptureError::EndOfStream) => break StopReason::EndOfStream,
            Err(e) => return Err(e.into()),
        };

        let hands = source.detect_hands(&frame);
        let now = clock.now();
        let outcome = air_mouse.process_frame(&hands, now)?;

        if !hands.is_empty() {
            frames_with_hands += 1;
        }

        for label in outcome.labels(config.label_origin) {
            display.annotate(&mut frame, &label)?;
        }
        display.show(&frame)?;

        if !outcome.events.is_empty() {
            records.push(FrameRecord {
                index: frames,
                timestamp_s: now,
                events: outcome.events,
                cursor: outcome.cursor,
            });
        }
        frames += 1;

        if display.poll_key() == Some(config.exit_key) {
            break StopReason::ExitKey;
        }
    };

    Ok(SessionSummary {
        frames,
        frames_with_hands,
        stop_reason,
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::HeadlessDisplay;
    use crate::capture::replay::{LandmarkTrace, ReplaySource, TraceFrame};
    use crate::capture::CaptureResult;
    use crate::capture::Hand;
    use crate::config::AirMouseConfig;
    use crate::gesture::classifier::tests::{hand_with, pinch};
    use crate::pointer::{PointerAction, RecordingSink, ScreenSize};

    fn replay(frames: Vec<TraceFrame>) -> (ReplaySource, HeadlessDisplay) {
        let config = AirMouseConfig::default();
        let source = ReplaySource::new(LandmarkTrace { frames }, config.detection).unwrap();
        (source, HeadlessDisplay::new("test"))
    }

    fn frame(t: f64, hands: Vec<Hand>) -> TraceFrame {
        TraceFrame::new(t, hands)
    }

    #[test]
    fn test_replay_click_drag_and_scroll() {
        let config = AirMouseConfig::default();
        let sink = RecordingSink::new(ScreenSize::new(1920, 1080));
        let log = sink.log();
        let mut air_mouse = AirMouse::new(sink, &config);

        let (mut source, mut display) = replay(vec![
            frame(0.000, vec![pinch(0.10)]),
            frame(0.033, vec![pinch(0.03)]),
            frame(0.066, vec![pinch(0.03)]),
            frame(0.100, vec![]),
            frame(0.133, vec![pinch(0.20)]),
            frame(0.166, vec![hand_with(0.4, 0.1, 0.02, 0.4)]),
            frame(0.200, vec![hand_with(0.4, 0.1, 0.02, 0.4)]),
        ]);
        let clock = source.clock();

        let summary = run_session(&mut source, &mut display, &mut air_mouse, &clock, &config.display).unwrap();

        assert_eq!(summary.stop_reason, StopReason::EndOfStream);
        assert_eq!(summary.frames, 7);
        assert_eq!(summary.frames_with_hands, 6);
        assert_eq!(
            summary.events().collect::<Vec<_>>(),
            vec![
                GestureEvent::SingleClick,
                GestureEvent::DragStart,
                GestureEvent::DragEnd,
                GestureEvent::ScrollUp,
                GestureEvent::ScrollUp,
            ]
        );
        assert_eq!(summary.records[0].index, 1);
        assert_eq!(summary.records[0].timestamp_s, 0.033);
        assert_eq!(
            log.buttons(),
            vec![
                PointerAction::Click,
                PointerAction::MouseDown,
                PointerAction::MouseUp,
                PointerAction::Scroll { amount: 50 },
                PointerAction::Scroll { amount: 50 },
            ]
        );
        assert_eq!(display.frames_shown(), 7);
    }

    #[test]
    fn test_exit_key_stops_session() {
        let config = AirMouseConfig::default();
        let mut air_mouse = AirMouse::new(RecordingSink::new(ScreenSize::new(800, 600)), &config);

        let mut quit = frame(0.033, vec![]);
        quit.key = Some('d');
        let mut other = frame(0.0, vec![]);
        other.key = Some('x');

        let (mut source, mut display) = replay(vec![other, quit, frame(0.066, vec![])]);
        let clock = source.clock();

        let summary = run_session(&mut source, &mut display, &mut air_mouse, &clock, &config.display).unwrap();
        assert_eq!(summary.stop_reason, StopReason::ExitKey);
        assert_eq!(summary.frames, 2);
        assert_eq!(source.remaining(), 0);
    }

    struct BrokenCamera {
        released: bool,
    }

    impl LandmarkSource for BrokenCamera {
        type Frame = TraceFrame;

        fn next_frame(&mut self) -> CaptureResult<TraceFrame> {
            Err(CaptureError::DeviceUnavailable("no camera".to_string()))
        }

        fn detect_hands(&mut self, _frame: &TraceFrame) -> Vec<Hand> {
            Vec::new()
        }

        fn release(&mut self) {
            self.released = true;
        }
    }

    #[test]
    fn test_capture_failure_is_fatal_and_releases() {
        let config = AirMouseConfig::default();
        let mut air_mouse = AirMouse::new(RecordingSink::new(ScreenSize::new(800, 600)), &config);
        let mut camera = BrokenCamera { released: false };
        let mut display = HeadlessDisplay::new("test");

        let result = run_session(&mut camera, &mut display, &mut air_mouse, &MonotonicClock::new(), &config.display);

        assert!(matches!(
            result,
            Err(SessionError::Capture(CaptureError::DeviceUnavailable(_)))
        ));
        assert!(camera.released);
        assert_eq!(display.frames_shown(), 0);
    }
}
