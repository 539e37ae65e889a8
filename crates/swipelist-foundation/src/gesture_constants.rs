//! Shared gesture constants for consistent touch handling.
//!
//! These values are in logical pixels and follow the platform conventions a
//! list user already expects (Android's `ViewConfiguration` on a baseline
//! density). Widgets copy them into their own configuration so a host can
//! override them per list.

use web_time::Duration;

/// Touch slop in logical pixels.
///
/// Horizontal travel below this distance is treated as finger jitter: the row
/// is not swiped and a tap on it still counts as a click.
pub const TOUCH_SLOP: f32 = 8.0;

/// Slop used by the list itself to decide whether a gesture is a horizontal
/// swipe or a vertical scroll before it intercepts. Twice the touch slop, like
/// paging slop on Android.
pub const PAGING_TOUCH_SLOP: f32 = TOUCH_SLOP * 2.0;

/// Minimum fling velocity in logical pixels per second.
pub const MIN_FLING_VELOCITY: f32 = 50.0;

/// Maximum fling velocity in logical pixels per second.
///
/// Faster releases are treated as tracking noise rather than a fling.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

/// Duration of the short snap animations (open, close, collapse).
pub const SHORT_ANIMATION_DURATION: Duration = Duration::from_millis(200);

/// Delay after the list settles before swipe gestures are accepted again.
/// Guards against residual fling motion being read as a swipe.
pub const SCROLL_SETTLE_DELAY: Duration = Duration::from_millis(500);
