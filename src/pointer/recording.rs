//! In-memory pointer sink
//!
//! Simulates a cursor on a virtual screen and logs every action. Used for
//! replaying landmark traces and for tests; the log handle stays readable
//! after the sink itself has been moved into a controller.

use super::{PointerAction, PointerResult, PointerSink, ScreenPoint, ScreenSize};
use parking_lot::Mutex as ParkingMutex;
use std::sync::Arc;

/// Shared, cloneable view of the actions a `RecordingSink` performed
#[derive(Debug, Clone, Default)]
pub struct ActionLog {
    actions: Arc<ParkingMutex<Vec<PointerAction>>>,
}

impl ActionLog {
    fn push(&self, action: PointerAction) {
        tracing::debug!("Pointer action: {:?}", action);
        self.actions.lock().push(action);
    }

    /// Copy of all actions recorded so far
    pub fn snapshot(&self) -> Vec<PointerAction> {
        self.actions.lock().clone()
    }

    /// Actions other than cursor moves
    pub fn buttons(&self) -> Vec<PointerAction> {
        self.actions
            .lock()
            .iter()
            .filter(|a| !matches!(a, PointerAction::Move { .. }))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.actions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.lock().is_empty()
    }
}

/// Pointer sink backed by a virtual cursor
pub struct RecordingSink {
    screen: ScreenSize,
    position: ScreenPoint,
    log: ActionLog,
}

impl RecordingSink {
    /// Create a sink with the cursor at the screen centre
    pub fn new(screen: ScreenSize) -> Self {
        let centre = ScreenPoint::new((screen.width / 2) as i32, (screen.height / 2) as i32);
        Self::with_position(screen, centre)
    }

    pub fn with_position(screen: ScreenSize, position: ScreenPoint) -> Self {
        let mut sink = Self {
            screen,
            position,
            log: ActionLog::default(),
        };
        sink.position = sink.clamp(position);
        sink
    }

    /// Handle to the action log
    pub fn log(&self) -> ActionLog {
        self.log.clone()
    }

    fn clamp(&self, point: ScreenPoint) -> ScreenPoint {
        let max_x = self.screen.width.saturating_sub(1) as i32;
        let max_y = self.screen.height.saturating_sub(1) as i32;
        ScreenPoint::new(point.x.clamp(0, max_x), point.y.clamp(0, max_y))
    }
}

impl PointerSink for RecordingSink {
    fn position(&self) -> ScreenPoint {
        self.position
    }

    fn screen_size(&self) -> ScreenSize {
        self.screen
    }

    fn move_to(&mut self, point: ScreenPoint, duration_s: f64) -> PointerResult<()> {
        self.position = self.clamp(point);
        self.log.push(PointerAction::Move {
            x: self.position.x,
            y: self.position.y,
            duration_s,
        });
        Ok(())
    }

    fn mouse_down(&mut self) -> PointerResult<()> {
        self.log.push(PointerAction::MouseDown);
        Ok(())
    }

    fn mouse_up(&mut self) -> PointerResult<()> {
        self.log.push(PointerAction::MouseUp);
        Ok(())
    }

    fn click(&mut self) -> PointerResult<()> {
        self.log.push(PointerAction::Click);
        Ok(())
    }

    fn double_click(&mut self) -> PointerResult<()> {
        self.log.push(PointerAction::DoubleClick);
        Ok(())
    }

    fn right_click(&mut self) -> PointerResult<()> {
        self.log.push(PointerAction::RightClick);
        Ok(())
    }

    fn scroll(&mut self, amount: i32) -> PointerResult<()> {
        self.log.push(PointerAction::Scroll { amount });
        Ok(())
    }
}
