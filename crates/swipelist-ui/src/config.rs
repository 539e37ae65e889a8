//! Per-list swipe configuration.

use std::fmt;

use swipelist_animation::{AnimationSpec, Easing};
use swipelist_foundation::gesture_constants::{
    MAX_FLING_VELOCITY, MIN_FLING_VELOCITY, PAGING_TOUCH_SLOP, SCROLL_SETTLE_DELAY,
    SHORT_ANIMATION_DURATION, TOUCH_SLOP,
};
use web_time::Duration;

/// Identifier of a sub-view inside a row, as understood by the host.
///
/// `ViewId::UNSET` (zero) means the identifier was never provided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ViewId(pub u32);

impl ViewId {
    pub const UNSET: ViewId = ViewId(0);

    pub fn is_set(&self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a horizontal swipe does to a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SwipeAction {
    /// Slide the front view aside to expose the back view.
    #[default]
    Reveal,
    /// Slide the whole row out, fade it, then collapse it.
    Dismiss,
    /// Toggle the row's checked state and snap back.
    Check,
    /// Swiping in this direction does nothing.
    None,
}

/// How a previously open row is closed when another row opens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CrossClose {
    /// Collapse the previous row's height and report it as dismissed.
    #[default]
    Collapse,
    /// Slide the previous row's front view back and report it as closed.
    Slide,
}

/// Swipe behaviour for one list. Set once at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct SwipeConfig {
    pub front_view: ViewId,
    pub back_view: ViewId,
    /// Long-pressing a closed row's front view opens it.
    pub open_on_long_press: bool,
    pub action_left: SwipeAction,
    pub action_right: SwipeAction,
    /// Horizontal travel before a touch becomes a swipe.
    pub touch_slop: f32,
    /// Travel the list itself uses to tell horizontal from vertical motion.
    pub paging_touch_slop: f32,
    pub min_fling_velocity: f32,
    pub max_fling_velocity: f32,
    pub animation_duration: Duration,
    pub easing: Easing,
    /// Width of the front view left visible when a row is open to the left.
    pub left_offset: f32,
    /// Width of the front view left visible when a row is open to the right.
    pub right_offset: f32,
    /// Quiet period after scrolling settles before swipes are accepted again.
    pub scroll_settle_delay: Duration,
    pub cross_close: CrossClose,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            front_view: ViewId::UNSET,
            back_view: ViewId::UNSET,
            open_on_long_press: true,
            action_left: SwipeAction::Reveal,
            action_right: SwipeAction::Reveal,
            touch_slop: TOUCH_SLOP,
            paging_touch_slop: PAGING_TOUCH_SLOP,
            min_fling_velocity: MIN_FLING_VELOCITY,
            max_fling_velocity: MAX_FLING_VELOCITY,
            animation_duration: SHORT_ANIMATION_DURATION,
            easing: Easing::FastOutSlowIn,
            left_offset: 0.0,
            right_offset: 0.0,
            scroll_settle_delay: SCROLL_SETTLE_DELAY,
            cross_close: CrossClose::default(),
        }
    }
}

impl SwipeConfig {
    pub fn new(front_view: ViewId, back_view: ViewId) -> Self {
        Self {
            front_view,
            back_view,
            ..Self::default()
        }
    }

    pub fn with_offsets(mut self, left_offset: f32, right_offset: f32) -> Self {
        self.left_offset = left_offset;
        self.right_offset = right_offset;
        self
    }

    pub fn with_actions(mut self, action_left: SwipeAction, action_right: SwipeAction) -> Self {
        self.action_left = action_left;
        self.action_right = action_right;
        self
    }

    pub fn with_touch_slop(mut self, touch_slop: f32, paging_touch_slop: f32) -> Self {
        self.touch_slop = touch_slop;
        self.paging_touch_slop = paging_touch_slop;
        self
    }

    pub fn with_fling_velocity(mut self, min: f32, max: f32) -> Self {
        self.min_fling_velocity = min;
        self.max_fling_velocity = max;
        self
    }

    pub fn with_animation(mut self, duration: Duration, easing: Easing) -> Self {
        self.animation_duration = duration;
        self.easing = easing;
        self
    }

    pub fn with_open_on_long_press(mut self, open_on_long_press: bool) -> Self {
        self.open_on_long_press = open_on_long_press;
        self
    }

    pub fn with_scroll_settle_delay(mut self, delay: Duration) -> Self {
        self.scroll_settle_delay = delay;
        self
    }

    pub fn with_cross_close(mut self, cross_close: CrossClose) -> Self {
        self.cross_close = cross_close;
        self
    }

    /// Action for a swipe that started toward the right (`true`) or left.
    pub fn action_for(&self, toward_right: bool) -> SwipeAction {
        if toward_right {
            self.action_right
        } else {
            self.action_left
        }
    }

    pub fn animation_spec(&self) -> AnimationSpec {
        AnimationSpec::from_duration(self.animation_duration, self.easing)
    }

    /// Checks the configuration. Hit-testing rows without both view ids is
    /// meaningless, so a list refuses to build from an invalid config.
    pub fn validate(&self) -> Result<(), SwipeConfigError> {
        if !self.front_view.is_set() {
            return Err(SwipeConfigError::MissingFrontView);
        }
        if !self.back_view.is_set() {
            return Err(SwipeConfigError::MissingBackView);
        }
        if self.front_view == self.back_view {
            return Err(SwipeConfigError::SharedViewId(self.front_view));
        }
        for slop in [self.touch_slop, self.paging_touch_slop] {
            if !slop.is_finite() || slop < 0.0 {
                return Err(SwipeConfigError::InvalidSlop(slop));
            }
        }
        let (min, max) = (self.min_fling_velocity, self.max_fling_velocity);
        if !min.is_finite() || !max.is_finite() || min < 0.0 || min > max {
            return Err(SwipeConfigError::InvalidFlingWindow { min, max });
        }
        let (left, right) = (self.left_offset, self.right_offset);
        if !left.is_finite() || !right.is_finite() || left < 0.0 || right < 0.0 {
            return Err(SwipeConfigError::InvalidOffset { left, right });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SwipeConfigError {
    MissingFrontView,
    MissingBackView,
    SharedViewId(ViewId),
    InvalidSlop(f32),
    InvalidFlingWindow { min: f32, max: f32 },
    InvalidOffset { left: f32, right: f32 },
}

impl fmt::Display for SwipeConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwipeConfigError::MissingFrontView => write!(f, "swipe front view id is not set"),
            SwipeConfigError::MissingBackView => write!(f, "swipe back view id is not set"),
            SwipeConfigError::SharedViewId(id) => {
                write!(f, "front and back views share the same id {id}")
            }
            SwipeConfigError::InvalidSlop(slop) => write!(f, "invalid touch slop {slop}"),
            SwipeConfigError::InvalidFlingWindow { min, max } => {
                write!(f, "invalid fling velocity window [{min}, {max}]")
            }
            SwipeConfigError::InvalidOffset { left, right } => {
                write!(f, "invalid open offsets (left {left}, right {right})")
            }
        }
    }
}

impl std::error::Error for SwipeConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> SwipeConfig {
        SwipeConfig::new(ViewId(1), ViewId(2))
    }

    #[test]
    fn defaults_follow_gesture_constants() {
        let config = valid();
        assert_eq!(config.touch_slop, TOUCH_SLOP);
        assert_eq!(config.paging_touch_slop, PAGING_TOUCH_SLOP);
        assert_eq!(config.animation_spec().duration_millis, 200);
        assert!(config.open_on_long_press);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn missing_view_ids_fail_fast() {
        assert_eq!(
            SwipeConfig::default().validate(),
            Err(SwipeConfigError::MissingFrontView)
        );
        assert_eq!(
            SwipeConfig::new(ViewId(1), ViewId::UNSET).validate(),
            Err(SwipeConfigError::MissingBackView)
        );
        assert_eq!(
            SwipeConfig::new(ViewId(3), ViewId(3)).validate(),
            Err(SwipeConfigError::SharedViewId(ViewId(3)))
        );
    }

    #[test]
    fn rejects_inverted_fling_window() {
        let err = valid()
            .with_fling_velocity(500.0, 100.0)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            SwipeConfigError::InvalidFlingWindow {
                min: 500.0,
                max: 100.0
            }
        );
        assert_eq!(err.to_string(), "invalid fling velocity window [500, 100]");
    }

    #[test]
    fn rejects_negative_offsets_and_slop() {
        assert!(matches!(
            valid().with_offsets(-1.0, 0.0).validate(),
            Err(SwipeConfigError::InvalidOffset { .. })
        ));
        assert!(matches!(
            valid().with_touch_slop(f32::NAN, 16.0).validate(),
            Err(SwipeConfigError::InvalidSlop(_))
        ));
    }

    #[test]
    fn action_for_picks_direction() {
        let config = valid().with_actions(SwipeAction::Dismiss, SwipeAction::Check);
        assert_eq!(config.action_for(false), SwipeAction::Dismiss);
        assert_eq!(config.action_for(true), SwipeAction::Check);
    }
}
