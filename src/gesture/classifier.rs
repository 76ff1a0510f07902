//! Per-frame gesture classification
//!
//! Three independent checks run against every hand, each keyed on the
//! distance from the thumb tip to another fingertip:
//!
//! - index + thumb: click on the rising edge, held as a drag until release
//! - middle + thumb: scroll up or down every frame, direction picked by the
//!   index tip's height
//! - pinky + thumb: right click, gated by a short cooldown
//!
//! The checks do not arbitrate between each other; one frame can fire
//! events from all three.

use crate::capture::landmarks::{Hand, INDEX_FINGER_TIP, MIDDLE_FINGER_TIP, PINKY_TIP};
use crate::config::GestureConfig;
use crate::gesture::edge::Edge;
use crate::gesture::state::GestureState;
use crate::pointer::{PointerResult, PointerSink};
use serde::{Deserialize, Serialize};

/// A discrete gesture recognised in one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GestureEvent {
    SingleClick,
    DoubleClick,
    DragStart,
    DragEnd,
    ScrollUp,
    ScrollDown,
    RightClick,
}

impl std::fmt::Display for GestureEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GestureEvent::SingleClick => write!(f, "single-click"),
            GestureEvent::DoubleClick => write!(f, "double-click"),
            GestureEvent::DragStart => write!(f, "drag-start"),
            GestureEvent::DragEnd => write!(f, "drag-end"),
            GestureEvent::ScrollUp => write!(f, "scroll-up"),
            GestureEvent::ScrollDown => write!(f, "scroll-down"),
            GestureEvent::RightClick => write!(f, "right-click"),
        }
    }
}

/// Maps landmarks to gesture events and pointer actions
#[derive(Debug, Clone, Default)]
pub struct GestureClassifier {
    config: GestureConfig,
}

impl GestureClassifier {
    pub fn new(config: GestureConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Classify one hand for the frame at `now` (seconds, monotonic)
    ///
    /// Issues the matching pointer calls and returns the fired events in
    /// the order they were issued.
    pub fn classify<P>(
        &self,
        hand: &Hand,
        state: &mut GestureState,
        now: f64,
        sink: &mut P,
    ) -> PointerResult<Vec<GestureEvent>>
    where
        P: PointerSink + ?Sized,
    {
        let mut events = Vec::new();
        self.check_click(hand, state, now, sink, &mut events)?;
        self.check_scroll(hand, sink, &mut events)?;
        self.check_right_click(hand, state, now, sink, &mut events)?;

        for event in &events {
            tracing::debug!("Gesture {} at t={:.3}s", event, now);
        }
        Ok(events)
    }

    fn check_click<P>(
        &self,
        hand: &Hand,
        state: &mut GestureState,
        now: f64,
        sink: &mut P,
        events: &mut Vec<GestureEvent>,
    ) -> PointerResult<()>
    where
        P: PointerSink + ?Sized,
    {
        let pinched = hand.thumb_distance(INDEX_FINGER_TIP) < self.config.click_distance;

        // Committed only once the pointer calls succeed, so a failed call
        // never leaves the drag flag out of step with the button
        let Some((edge, next)) = state.click.next(pinched) else {
            return Ok(());
        };

        match edge {
            Edge::Rising => {
                let within_window = state
                    .last_click_time
                    .is_some_and(|last| now - last < self.config.double_click_window_s);

                if within_window {
                    sink.double_click()?;
                    events.push(GestureEvent::DoubleClick);
                } else {
                    sink.click()?;
                    events.push(GestureEvent::SingleClick);
                }

                sink.mouse_down()?;
                events.push(GestureEvent::DragStart);
                state.last_click_time = Some(now);
            }
            Edge::Falling => {
                sink.mouse_up()?;
                events.push(GestureEvent::DragEnd);
            }
        }

        state.click = next;
        Ok(())
    }

    fn check_scroll<P>(&self, hand: &Hand, sink: &mut P, events: &mut Vec<GestureEvent>) -> PointerResult<()>
    where
        P: PointerSink + ?Sized,
    {
        if hand.thumb_distance(MIDDLE_FINGER_TIP) >= self.config.scroll_pinch_distance {
            return Ok(());
        }

        // Repeats every frame while held
        let y = hand.index_tip().y;
        if y < self.config.scroll_up_below {
            sink.scroll(self.config.scroll_amount)?;
            events.push(GestureEvent::ScrollUp);
        } else if y > self.config.scroll_down_above {
            sink.scroll(-self.config.scroll_amount)?;
            events.push(GestureEvent::ScrollDown);
        }

        Ok(())
    }

    fn check_right_click<P>(
        &self,
        hand: &Hand,
        state: &mut GestureState,
        now: f64,
        sink: &mut P,
        events: &mut Vec<GestureEvent>,
    ) -> PointerResult<()>
    where
        P: PointerSink + ?Sized,
    {
        if hand.thumb_distance(PINKY_TIP) >= self.config.right_click_distance {
            return Ok(());
        }

        let cooled_down = state
            .last_right_click_time
            .map_or(true, |last| now - last > self.config.right_click_cooldown_s);

        if cooled_down {
            sink.right_click()?;
            events.push(GestureEvent::RightClick);
        }

        // Refreshed on every closed frame, fired or not
        state.last_right_click_time = Some(now);
        Ok(())
    }
}
