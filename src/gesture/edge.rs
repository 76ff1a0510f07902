//! Two-state edge detector
//!
//! Each pinch gesture is an `Idle ⇄ Engaged` machine. Feeding it the
//! per-frame guard (is the pinch closed?) yields a transition only on the
//! frame where the guard changes, which is what debounces one-shot events.

/// Current state of a pinch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EdgeState {
    #[default]
    Idle,
    Engaged,
}

/// A state change reported by `EdgeState::update`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Idle → Engaged
    Rising,
    /// Engaged → Idle
    Falling,
}

impl EdgeState {
    /// Transition this frame's guard would cause, without applying it
    pub fn next(&self, engaged: bool) -> Option<(Edge, EdgeState)> {
        match (*self, engaged) {
            (EdgeState::Idle, true) => Some((Edge::Rising, EdgeState::Engaged)),
            (EdgeState::Engaged, false) => Some((Edge::Falling, EdgeState::Idle)),
            _ => None,
        }
    }

    /// Advance with this frame's guard and report the transition, if any
    pub fn update(&mut self, engaged: bool) -> Option<Edge> {
        let (edge, next) = self.next(engaged)?;
        *self = next;
        Some(edge)
    }

    pub fn is_engaged(&self) -> bool {
        matches!(self, EdgeState::Engaged)
    }
}
