use super::*;
use crate::animator::{AnimationSet, Animator, ValueAnimation};

const FRAME_NANOS: u64 = 16_666_667;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Prop {
    Translation,
    Alpha,
}

#[test]
fn easing_endpoints_are_fixed() {
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::FastOutSlowIn,
        Easing::LinearOutSlowIn,
        Easing::FastOutLinear,
    ] {
        assert_eq!(easing.transform(0.0), 0.0, "{easing:?} at 0");
        assert_eq!(easing.transform(1.0), 1.0, "{easing:?} at 1");
    }
}

#[test]
fn fast_out_slow_in_leads_linear_at_midpoint() {
    let eased = Easing::FastOutSlowIn.transform(0.5);
    assert!(eased > 0.5, "expected eased progress ahead of linear, got {eased}");
}

#[test]
fn linear_progress_respects_delay() {
    let spec = AnimationSpec::linear(100).with_delay(50);
    assert_eq!(spec.linear_progress(10_000_000), None);
    assert_eq!(spec.linear_progress(50_000_000), Some(0.0));
    assert_eq!(spec.linear_progress(100_000_000), Some(0.5));
    assert_eq!(spec.linear_progress(500_000_000), Some(1.0));
    assert_eq!(spec.total_nanos(), 150_000_000);
}

#[test]
fn from_duration_truncates_to_millis() {
    let spec = AnimationSpec::from_duration(
        web_time::Duration::from_micros(200_900),
        Easing::Linear,
    );
    assert_eq!(spec.duration_millis, 200);
}

#[test]
fn animator_interpolates_and_reports_completion() {
    let mut animator = Animator::new();
    let id = animator.start(
        AnimationSet::new(AnimationSpec::linear(100))
            .with(ValueAnimation::new(Prop::Translation, 0.0, -300.0))
            .with(ValueAnimation::new(Prop::Alpha, 1.0, 0.0)),
    );

    let mut samples: Vec<(Prop, f32)> = Vec::new();
    let mut sink = |target: &Prop, value: f32| samples.push((*target, value));

    // The first frame pins the start time and applies the start values.
    let finished = animator.on_frame(0, &mut sink);
    assert!(finished.is_empty());

    let finished = animator.on_frame(50_000_000, &mut sink);
    assert!(finished.is_empty());

    let finished = animator.on_frame(100_000_000, &mut sink);
    assert_eq!(finished.as_slice(), &[id]);
    assert!(animator.is_idle());

    assert_eq!(
        samples,
        vec![
            (Prop::Translation, 0.0),
            (Prop::Alpha, 1.0),
            (Prop::Translation, -150.0),
            (Prop::Alpha, 0.5),
            (Prop::Translation, -300.0),
            (Prop::Alpha, 0.0),
        ]
    );
}

#[test]
fn completions_follow_start_order() {
    let mut animator = Animator::new();
    let first = animator.start(
        AnimationSet::new(AnimationSpec::linear(32)).with(ValueAnimation::new(1u8, 0.0, 1.0)),
    );
    let second = animator.start(
        AnimationSet::new(AnimationSpec::linear(16)).with(ValueAnimation::new(2u8, 0.0, 1.0)),
    );
    let mut sink = |_: &u8, _: f32| {};

    let mut finished = Vec::new();
    let mut time = 0;
    while !animator.is_idle() {
        finished.extend(animator.on_frame(time, &mut sink));
        time += FRAME_NANOS;
    }
    assert_eq!(finished, vec![second, first]);
}

#[test]
fn finish_now_applies_end_values() {
    let mut animator = Animator::new();
    let id = animator.start(
        AnimationSet::new(AnimationSpec::default()).with(ValueAnimation::new((), 10.0, 20.0)),
    );
    let mut last = None;
    let mut sink = |_: &(), value: f32| last = Some(value);

    assert!(animator.finish_now(id, &mut sink));
    assert!(!animator.finish_now(id, &mut sink));
    assert!(!animator.is_running(id));
    assert_eq!(last, Some(20.0));
}

#[test]
fn cancel_drops_without_applying() {
    let mut animator = Animator::new();
    let id = animator.start(
        AnimationSet::new(AnimationSpec::default()).with(ValueAnimation::new((), 10.0, 20.0)),
    );
    let set = animator.cancel(id).expect("set was running");
    assert_eq!(set.len(), 1);
    assert!(animator.is_idle());
}

#[test]
fn empty_set_finishes_on_first_full_frame() {
    let mut animator: Animator<()> = Animator::new();
    let id = animator.start(AnimationSet::new(AnimationSpec::linear(0)));
    let mut sink = |_: &(), _: f32| {};
    assert!(animator.on_frame(0, &mut sink).is_empty());
    assert_eq!(animator.on_frame(1, &mut sink).as_slice(), &[id]);
}
