//! Real-time cursor smoothing
//!
//! Turns the raw fingertip target into a stable cursor position in two
//! stages:
//!
//! 1. Adaptive interpolation. The cursor steps toward the target by a factor
//!    chosen from the apparent speed, so a resting hand holds the cursor still
//!    and a fast sweep follows with little lag.
//! 2. Moving average over the last few interpolated points, which removes
//!    the residual frame-to-frame noise of stage 1.

use crate::config::SmoothingConfig;
use crate::pointer::ScreenPoint;
use crate::processing::history::{PointF, PositionHistory};

/// Two-stage position filter
#[derive(Debug, Clone)]
pub struct PositionSmoother {
    config: SmoothingConfig,
    history: PositionHistory,
}

impl PositionSmoother {
    pub fn new(config: SmoothingConfig) -> Self {
        let history = PositionHistory::new(config.history_capacity);
        Self { config, history }
    }

    /// Interpolation factor for a speed in pixels per second
    ///
    /// Tiers are half-open: a speed exactly on a tier's `min_speed` belongs
    /// to that tier.
    pub fn interpolation_factor(&self, speed: f64) -> f64 {
        self.config
            .speed_tiers
            .iter()
            .rev()
            .find(|tier| speed >= tier.min_speed)
            .map(|tier| tier.factor)
            .unwrap_or(self.config.rest_factor)
    }

    /// Smooth one frame using the configured per-frame time budget
    pub fn smooth_frame(&mut self, raw_target: ScreenPoint, current: ScreenPoint) -> ScreenPoint {
        self.smooth(raw_target, current, self.config.frame_budget_s)
    }

    /// Smooth one frame
    ///
    /// `elapsed_s` converts the cursor-to-target distance into a speed; it is
    /// the nominal frame interval, not a measured delta.
    pub fn smooth(&mut self, raw_target: ScreenPoint, current: ScreenPoint, elapsed_s: f64) -> ScreenPoint {
        let distance = current.distance_to(raw_target);
        let speed = distance / elapsed_s;
        let alpha = self.interpolation_factor(speed);

        let interpolated = PointF::new(
            f64::from(current.x) + f64::from(raw_target.x - current.x) * alpha,
            f64::from(current.y) + f64::from(raw_target.y - current.y) * alpha,
        );

        self.history.push(interpolated);
        let mean = self.history.mean().unwrap_or(interpolated);

        // Truncate toward zero
        ScreenPoint::new(mean.x as i32, mean.y as i32)
    }

    pub fn history(&self) -> &PositionHistory {
        &self.history
    }
}

impl Default for PositionSmoother {
    fn default() -> Self {
        Self::new(SmoothingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUDGET: f64 = 0.033;

    #[test]
    fn test_tier_boundaries_are_half_open() {
        let smoother = PositionSmoother::default();

        assert_eq!(smoother.interpolation_factor(0.0), 0.0);
        assert_eq!(smoother.interpolation_factor(2.999), 0.0);
        assert_eq!(smoother.interpolation_factor(3.0), 0.05);
        assert_eq!(smoother.interpolation_factor(4.999), 0.05);
        assert_eq!(smoother.interpolation_factor(5.0), 0.2);
        assert_eq!(smoother.interpolation_factor(49.999), 0.2);
        assert_eq!(smoother.interpolation_factor(50.0), 0.5);
        assert_eq!(smoother.interpolation_factor(10_000.0), 0.5);
    }

    #[test]
    fn test_stationary_hand_holds_cursor() {
        let mut smoother = PositionSmoother::default();
        let cursor = ScreenPoint::new(300, 200);

        // No apparent motion selects the rest factor
        let out = smoother.smooth(ScreenPoint::new(300, 200), cursor, BUDGET);
        assert_eq!(out, cursor);
    }

    #[test]
    fn test_fast_motion_moves_halfway_on_first_frame() {
        let mut smoother = PositionSmoother::default();
        let out = smoother.smooth(ScreenPoint::new(400, 100), ScreenPoint::new(100, 100), BUDGET);
        assert_eq!(out, ScreenPoint::new(250, 100));
    }

    #[test]
    fn test_converges_toward_constant_target() {
        let mut smoother = PositionSmoother::default();
        let target = ScreenPoint::new(400, 100);
        let mut cursor = ScreenPoint::new(100, 100);
        let mut previous_x = cursor.x;

        for _ in 0..60 {
            cursor = smoother.smooth(target, cursor, BUDGET);
            assert!(cursor.x >= previous_x, "cursor moved backward: {} -> {}", previous_x, cursor.x);
            assert_eq!(cursor.y, 100);
            previous_x = cursor.x;
        }

        assert!(target.x - cursor.x <= 1, "cursor {} should settle next to 400", cursor.x);
    }

    #[test]
    fn test_output_is_fixed_once_history_is_uniform() {
        let mut smoother = PositionSmoother::default();
        let target = ScreenPoint::new(640, 360);

        // Seed the history with unrelated positions
        smoother.smooth(ScreenPoint::new(0, 0), ScreenPoint::new(900, 900), BUDGET);
        smoother.smooth(ScreenPoint::new(10, 10), ScreenPoint::new(800, 700), BUDGET);

        // Cursor already on target: stage 1 holds, stage 2 flushes the old points
        let outputs: Vec<ScreenPoint> = (0..8)
            .map(|_| smoother.smooth(target, target, BUDGET))
            .collect();

        for out in &outputs[4..] {
            assert_eq!(*out, target);
        }
        assert_ne!(outputs[0], target);
    }

    #[test]
    fn test_constant_inputs_give_constant_output_after_window() {
        let mut smoother = PositionSmoother::default();
        let target = ScreenPoint::new(500, 500);
        let cursor = ScreenPoint::new(100, 100);

        let outputs: Vec<ScreenPoint> = (0..7).map(|_| smoother.smooth(target, cursor, BUDGET)).collect();
        assert_eq!(outputs[5], outputs[4]);
        assert_eq!(outputs[6], outputs[4]);
        assert_eq!(outputs[4], ScreenPoint::new(300, 300));
    }

    #[test]
    fn test_history_is_bounded() {
        let mut smoother = PositionSmoother::default();
        for i in 0..8 {
            smoother.smooth_frame(ScreenPoint::new(i * 100, 0), ScreenPoint::new(0, 0));
        }
        assert_eq!(smoother.history().len(), 5);
    }
}
