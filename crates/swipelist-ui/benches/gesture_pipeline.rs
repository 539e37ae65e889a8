use criterion::{black_box, criterion_group, criterion_main, Criterion};
use swipelist_testing::prelude::*;
use swipelist_ui::{CrossClose, SwipeConfig};

fn robot(cross_close: CrossClose) -> SwipeRobot {
    let config = SwipeConfig::new(FRONT_VIEW, BACK_VIEW).with_cross_close(cross_close);
    SwipeRobot::new(FakeListHost::new(360.0, 50), config).expect("valid config")
}

fn swipe_open_and_close(c: &mut Criterion) {
    let mut robot = robot(CrossClose::Slide);

    c.bench_function("swipe_open_and_close", |b| {
        b.iter(|| {
            robot.swipe(black_box(3), -240.0);
            robot.wait_for_idle();
            robot.swipe(3, 240.0);
            robot.wait_for_idle();
            robot.listener().clear();
        });
    });
}

fn cross_close_collapse(c: &mut Criterion) {
    let mut robot = robot(CrossClose::Collapse);

    c.bench_function("cross_close_collapse", |b| {
        b.iter(|| {
            robot.list_mut().open_row(black_box(2));
            robot.wait_for_idle();
            robot.list_mut().open_row(6);
            robot.wait_for_idle();
            robot.list_mut().close_all_open_rows();
            robot.wait_for_idle();
            robot.listener().clear();
        });
    });
}

criterion_group!(benches, swipe_open_and_close, cross_close_collapse);
criterion_main!(benches);
