//! Per-gesture state and the engine-wide gesture gate.

use swipelist_foundation::VelocityTracker;

use crate::config::SwipeAction;

/// State of one touch sequence, from pointer down to up or cancel.
///
/// The session owns the velocity tracker: dropping the session is the one
/// place the tracker is released.
#[derive(Debug)]
pub(crate) struct GestureSession {
    pub position: usize,
    pub down_x: f32,
    pub swiping: bool,
    pub action: SwipeAction,
    pub tracker: VelocityTracker,
}

impl GestureSession {
    pub fn new(position: usize, down_x: f32, tracker: VelocityTracker) -> Self {
        Self {
            position,
            down_x,
            swiping: false,
            // `None` until the gesture is classified as a swipe.
            action: SwipeAction::None,
            tracker,
        }
    }

    pub fn is_classified(&self) -> bool {
        self.action != SwipeAction::None
    }

    pub fn begin_swipe(&mut self, action: SwipeAction) {
        self.swiping = true;
        self.action = action;
    }
}

/// Whether new gestures are accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub(crate) enum GestureGate {
    #[default]
    Enabled,
    Paused,
    /// Paused until the frame clock reaches this time.
    ResumeAt(u64),
}

impl GestureGate {
    pub fn is_accepting(&self) -> bool {
        matches!(self, GestureGate::Enabled)
    }

    /// Re-enables a timed pause once `frame_time_nanos` reaches its deadline.
    /// Returns true when the gate opened on this call.
    pub fn poll(&mut self, frame_time_nanos: u64) -> bool {
        match *self {
            GestureGate::ResumeAt(deadline) if frame_time_nanos >= deadline => {
                *self = GestureGate::Enabled;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timed_pause_opens_at_deadline() {
        let mut gate = GestureGate::ResumeAt(500);
        assert!(!gate.is_accepting());
        assert!(!gate.poll(499));
        assert!(gate.poll(500));
        assert!(gate.is_accepting());
        assert!(!gate.poll(600));
    }

    #[test]
    fn manual_pause_ignores_frames() {
        let mut gate = GestureGate::Paused;
        assert!(!gate.poll(u64::MAX));
        assert!(!gate.is_accepting());
    }

    #[test]
    fn session_starts_unclassified() {
        let mut session = GestureSession::new(2, 40.0, VelocityTracker::new());
        assert!(!session.swiping);
        assert!(!session.is_classified());
        session.begin_swipe(SwipeAction::Reveal);
        assert!(session.swiping);
        assert!(session.is_classified());
    }
}
