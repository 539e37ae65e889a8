use super::*;
use crate::input::PointerEventKind;

#[test]
fn test_empty_tracker_returns_zero() {
    let tracker = VelocityTracker1D::new();
    assert_eq!(tracker.calculate_velocity(), 0.0);
}

#[test]
fn test_single_point_returns_zero() {
    let mut tracker = VelocityTracker1D::new();
    tracker.add_data_point(0, 100.0);
    assert_eq!(tracker.calculate_velocity(), 0.0);
}

#[test]
fn test_constant_velocity() {
    let mut tracker = VelocityTracker1D::new();
    // Moving at 100 px per 10ms = 10000 px/s
    tracker.add_data_point(0, 0.0);
    tracker.add_data_point(10, 100.0);
    tracker.add_data_point(20, 200.0);
    tracker.add_data_point(30, 300.0);

    let velocity = tracker.calculate_velocity();
    assert!(
        (velocity - 10000.0).abs() < 1000.0,
        "Expected ~10000, got {}",
        velocity
    );
}

#[test]
fn test_reset() {
    let mut tracker = VelocityTracker1D::new();
    tracker.add_data_point(0, 0.0);
    tracker.add_data_point(10, 100.0);

    tracker.reset();

    assert_eq!(tracker.calculate_velocity(), 0.0);
}

#[test]
fn test_negative_velocity() {
    let mut tracker = VelocityTracker1D::new();
    tracker.add_data_point(0, 300.0);
    tracker.add_data_point(10, 200.0);
    tracker.add_data_point(20, 100.0);

    let velocity = tracker.calculate_velocity();
    assert!(velocity < 0.0, "Expected negative velocity, got {}", velocity);
}

#[test]
fn test_velocity_capped() {
    let mut tracker = VelocityTracker1D::new();
    tracker.add_data_point(0, 0.0);
    tracker.add_data_point(1, 10_000.0);

    assert_eq!(tracker.calculate_velocity_with_max(8_000.0), 8_000.0);

    tracker.reset();
    tracker.add_data_point(0, 10_000.0);
    tracker.add_data_point(1, 0.0);

    assert_eq!(tracker.calculate_velocity_with_max(8_000.0), -8_000.0);
}

#[test]
fn test_old_samples_ignored() {
    let mut tracker = VelocityTracker1D::new();
    tracker.add_data_point(0, 0.0);
    tracker.add_data_point(150, 100.0);
    tracker.add_data_point(160, 200.0);
    tracker.add_data_point(170, 300.0);

    let velocity = tracker.calculate_velocity();
    assert!(
        velocity.abs() > 0.0,
        "Should calculate velocity from recent samples"
    );
}

#[test]
fn test_gap_over_stopped_threshold_returns_zero() {
    let mut tracker = VelocityTracker1D::new();
    tracker.add_data_point(0, 0.0);
    tracker.add_data_point(ASSUME_STOPPED_MS + 1, 100.0);

    assert_eq!(tracker.calculate_velocity(), 0.0);
}

#[test]
fn horizontal_drag_is_horizontal() {
    let mut tracker = VelocityTracker::new();
    for step in 0..4 {
        let event = PointerEvent::at(
            PointerEventKind::Move,
            Point::new(100.0 - 20.0 * step as f32, 90.0 + step as f32),
            16 * step,
        );
        tracker.add_movement(&event);
    }
    let velocity = tracker.calculate_velocity();
    assert!(velocity.x < -1_000.0, "got {velocity:?}");
    assert!(velocity.is_horizontal());
}

#[test]
fn release_after_pause_has_no_velocity() {
    let mut tracker = VelocityTracker::new();
    tracker.add_position(0, Point::new(0.0, 0.0));
    tracker.add_position(16, Point::new(40.0, 0.0));
    tracker.add_position(16 + ASSUME_STOPPED_MS + 20, Point::new(41.0, 0.0));
    assert_eq!(tracker.calculate_velocity(), Velocity::ZERO);
    assert!(!Velocity::ZERO.is_horizontal());
}

#[test]
fn reset_clears_both_axes() {
    let mut tracker = VelocityTracker::new();
    tracker.add_position(0, Point::new(0.0, 0.0));
    tracker.add_position(10, Point::new(50.0, 50.0));
    tracker.reset();
    assert_eq!(tracker.calculate_velocity(), Velocity::ZERO);
}
