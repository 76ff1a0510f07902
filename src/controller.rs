//! Per-frame cursor driver
//!
//! Glues the gesture classifier and the position smoother to a pointer
//! sink. For every hand in a frame, gestures are classified first and the
//! cursor is moved afterwards, so gesture detection never depends on where
//! the cursor ended up.

use crate::annotate::{label_for, Label};
use crate::capture::landmarks::{Hand, Landmark};
use crate::config::AirMouseConfig;
use crate::gesture::{GestureClassifier, GestureEvent, GestureState};
use crate::pointer::{PointerResult, PointerSink, ScreenPoint, ScreenSize};
use crate::processing::PositionSmoother;
use serde::Serialize;

/// What happened during one frame
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameOutcome {
    /// Events in the order they fired
    pub events: Vec<GestureEvent>,
    /// Cursor position after the last move, if any hand was present
    pub cursor: Option<ScreenPoint>,
}

impl FrameOutcome {
    /// Overlay labels for this frame's events
    pub fn labels(&self, origin: (i32, i32)) -> Vec<Label> {
        self.events
            .iter()
            .filter_map(|event| label_for(*event, origin))
            .collect()
    }
}

/// Gesture-driven pointer controller
pub struct AirMouse<P> {
    sink: P,
    classifier: GestureClassifier,
    smoother: PositionSmoother,
    state: GestureState,
    screen: ScreenSize,
    move_duration_s: f64,
}

impl<P: PointerSink> AirMouse<P> {
    pub fn new(sink: P, config: &AirMouseConfig) -> Self {
        let sink_screen = sink.screen_size();
        let screen = ScreenSize::new(
            config.pointer.screen_width.unwrap_or(sink_screen.width),
            config.pointer.screen_height.unwrap_or(sink_screen.height),
        );

        tracing::info!("Cursor driver using {}x{} screen", screen.width, screen.height);

        Self {
            sink,
            classifier: GestureClassifier::new(config.gestures.clone()),
            smoother: PositionSmoother::new(config.smoothing.clone()),
            state: GestureState::new(),
            screen,
            move_duration_s: config.pointer.move_duration_s,
        }
    }

    /// Process every detected hand of one frame
    ///
    /// A frame without hands changes nothing: an ongoing drag stays held
    /// until a later frame shows the pinch released.
    pub fn process_frame(&mut self, hands: &[Hand], now: f64) -> PointerResult<FrameOutcome> {
        let mut outcome = FrameOutcome::default();

        for hand in hands {
            let events = self
                .classifier
                .classify(hand, &mut self.state, now, &mut self.sink)?;
            outcome.events.extend(events);
            outcome.cursor = Some(self.drive_cursor(hand.index_tip())?);
        }

        Ok(outcome)
    }

    fn drive_cursor(&mut self, index_tip: Landmark) -> PointerResult<ScreenPoint> {
        let target = self.to_screen(index_tip);
        let current = self.sink.position();
        let smoothed = self.smoother.smooth_frame(target, current);
        self.sink.move_to(smoothed, self.move_duration_s)?;
        Ok(smoothed)
    }

    /// Map a normalized landmark onto screen pixels
    pub fn to_screen(&self, landmark: Landmark) -> ScreenPoint {
        ScreenPoint::new(
            (landmark.x * f64::from(self.screen.width)) as i32,
            (landmark.y * f64::from(self.screen.height)) as i32,
        )
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn sink(&self) -> &P {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::classifier::tests::pinch;
    use crate::capture::landmarks::INDEX_FINGER_TIP;
    use crate::pointer::{ActionLog, PointerAction, RecordingSink};

    fn setup() -> (AirMouse<RecordingSink>, ActionLog) {
        let sink = RecordingSink::with_position(ScreenSize::new(1000, 1000), ScreenPoint::new(0, 0));
        let log = sink.log();
        (AirMouse::new(sink, &AirMouseConfig::default()), log)
    }

    #[test]
    fn test_no_hand_does_nothing() {
        let (mut air_mouse, log) = setup();
        let outcome = air_mouse.process_frame(&[], 0.0).unwrap();
        assert_eq!(outcome, FrameOutcome::default());
        assert!(log.is_empty());
    }

    #[test]
    fn test_drag_survives_tracking_gap() {
        let (mut air_mouse, _log) = setup();

        let start = air_mouse.process_frame(&[pinch(0.01)], 0.0).unwrap();
        assert_eq!(start.events, vec![GestureEvent::SingleClick, GestureEvent::DragStart]);

        let gap = air_mouse.process_frame(&[], 0.033).unwrap();
        assert!(gap.events.is_empty());
        assert!(air_mouse.state().dragging());

        let end = air_mouse.process_frame(&[pinch(0.2)], 0.066).unwrap();
        assert_eq!(end.events, vec![GestureEvent::DragEnd]);
        assert!(!air_mouse.state().dragging());
    }

    #[test]
    fn test_classifies_before_moving() {
        let (mut air_mouse, log) = setup();
        air_mouse.process_frame(&[pinch(0.01)], 0.0).unwrap();

        let actions = log.snapshot();
        assert_eq!(actions[0], PointerAction::Click);
        assert_eq!(actions[1], PointerAction::MouseDown);
        assert!(matches!(actions[2], PointerAction::Move { .. }));
        assert_eq!(actions.len(), 3);
    }

    #[test]
    fn test_cursor_follows_index_tip() {
        let (mut air_mouse, _log) = setup();
        let mut hand = pinch(0.3);
        hand.landmarks[INDEX_FINGER_TIP] = Landmark::new(0.8, 0.5);
        let target = air_mouse.to_screen(hand.index_tip());
        assert_eq!(target, ScreenPoint::new(800, 500));

        // (0,0) to (800,500) is a fast move: half way on the first frame
        let outcome = air_mouse.process_frame(&[hand], 0.0).unwrap();
        assert_eq!(outcome.cursor, Some(ScreenPoint::new(400, 250)));
        assert_eq!(air_mouse.sink().position(), ScreenPoint::new(400, 250));
    }

    #[test]
    fn test_screen_override() {
        let sink = RecordingSink::new(ScreenSize::new(1000, 1000));
        let mut config = AirMouseConfig::default();
        config.pointer.screen_width = Some(2000);
        let air_mouse = AirMouse::new(sink, &config);

        assert_eq!(
            air_mouse.to_screen(Landmark::new(0.5, 0.5)),
            ScreenPoint::new(1000, 500)
        );
    }

    #[test]
    fn test_labels_skip_drag_start() {
        let outcome = FrameOutcome {
            events: vec![GestureEvent::DoubleClick, GestureEvent::DragStart],
            cursor: None,
        };
        let labels = outcome.labels((50, 100));
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].text, "Double Click");
    }
}
