//! Input plumbing shared by the swipelist widgets: pointer events, scroll
//! states, gesture thresholds and velocity tracking.

pub mod gesture_constants;
pub mod input;
pub mod scroll_state;
pub mod velocity_tracker;

pub use input::{PointerEvent, PointerEventKind, PointerId};
pub use scroll_state::ScrollState;
pub use swipelist_ui_graphics::{Point, Rect, Size};
pub use velocity_tracker::{Velocity, VelocityTracker, VelocityTracker1D};

pub mod prelude {
    pub use crate::gesture_constants::*;
    pub use crate::input::{PointerEvent, PointerEventKind, PointerId};
    pub use crate::scroll_state::ScrollState;
    pub use crate::velocity_tracker::{Velocity, VelocityTracker};
}
