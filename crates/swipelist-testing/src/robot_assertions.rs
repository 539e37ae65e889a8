//! Assertion helpers for swipe robot tests.

use swipelist_ui::SwipeNotification;

/// Assert that a value is within `tolerance` of `expected`.
///
/// Animated values are compared this way because easing curves are
/// evaluated in single precision.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that an optional view property resolved and is close to `expected`.
pub fn assert_property(actual: Option<f32>, expected: f32, msg: &str) {
    match actual {
        Some(value) => assert_approx_eq(value, expected, 0.01, msg),
        None => panic!("{}: view not resolvable (row off-screen?)", msg),
    }
}

/// Assert that `events` contains `expected`.
pub fn assert_notified(events: &[SwipeNotification], expected: &SwipeNotification) {
    assert!(
        events.contains(expected),
        "expected {:?} among {:?}",
        expected,
        events
    );
}

/// Assert that no event in `events` matches `predicate`.
pub fn assert_none_match<F>(events: &[SwipeNotification], predicate: F, msg: &str)
where
    F: Fn(&SwipeNotification) -> bool,
{
    if let Some(found) = events.iter().find(|event| predicate(event)) {
        panic!("{}: unexpected {:?} in {:?}", msg, found, events);
    }
}

/// Number of rows reported open by `is_open` among `positions`.
pub fn count_open(is_open: impl Fn(usize) -> bool, positions: std::ops::Range<usize>) -> usize {
    positions.filter(|&position| is_open(position)).count()
}
