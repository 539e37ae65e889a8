//! Testing utilities and harness for swipelist

pub mod fake_host;
pub mod recording_listener;
pub mod robot;
pub mod robot_assertions;

pub use fake_host::FakeListHost;
pub use recording_listener::RecordingListener;
pub use robot::SwipeRobot;

pub mod prelude {
    pub use crate::fake_host::{FakeListHost, BACK_VIEW, FRONT_VIEW};
    pub use crate::recording_listener::RecordingListener;
    pub use crate::robot::SwipeRobot;
    pub use crate::robot_assertions;
}
