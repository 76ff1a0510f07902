//! Bounded position history for the moving-average stage

use std::collections::VecDeque;

/// Sub-pixel cursor position
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointF {
    pub x: f64,
    pub y: f64,
}

impl PointF {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// FIFO of the most recent positions; the oldest entry is evicted once
/// capacity is reached.
#[derive(Debug, Clone)]
pub struct PositionHistory {
    points: VecDeque<PointF>,
    capacity: usize,
}

impl PositionHistory {
    /// Default number of retained points
    pub const DEFAULT_CAPACITY: usize = 5;

    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, point: PointF) {
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    /// Arithmetic mean of the retained points, `None` when empty
    pub fn mean(&self) -> Option<PointF> {
        if self.points.is_empty() {
            return None;
        }
        let n = self.points.len() as f64;
        let (sx, sy) = self
            .points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Some(PointF::new(sx / n, sy / n))
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Points from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &PointF> {
        self.points.iter()
    }
}

impl Default for PositionHistory {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evicts_oldest_first() {
        let mut history = PositionHistory::default();
        for i in 1..=8 {
            history.push(PointF::new(i as f64, 0.0));
        }

        assert_eq!(history.len(), 5);
        let xs: Vec<f64> = history.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![4.0, 5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn test_mean() {
        let mut history = PositionHistory::new(3);
        assert!(history.mean().is_none());

        history.push(PointF::new(0.0, 10.0));
        history.push(PointF::new(3.0, 20.0));
        assert_eq!(history.mean(), Some(PointF::new(1.5, 15.0)));

        history.push(PointF::new(6.0, 30.0));
        history.push(PointF::new(9.0, 40.0));
        assert_eq!(history.mean(), Some(PointF::new(6.0, 30.0)));
    }

    #[test]
    fn test_zero_capacity_is_raised_to_one() {
        let mut history = PositionHistory::new(0);
        history.push(PointF::new(1.0, 1.0));
        history.push(PointF::new(2.0, 2.0));
        assert_eq!(history.capacity(), 1);
        assert_eq!(history.mean(), Some(PointF::new(2.0, 2.0)));
    }
}
