//! Robot-style driver for swipe lists.
//!
//! The robot owns a [`SwipeListView`] over a [`FakeListHost`] and a virtual
//! clock. Gestures are sent through the shell's full dispatch path, so
//! interception, engine routing and listener plumbing are all exercised.
//!
//! # Example
//!
//! ```
//! use swipelist_testing::prelude::*;
//! use swipelist_ui::SwipeConfig;
//!
//! let config = SwipeConfig::new(FRONT_VIEW, BACK_VIEW);
//! let mut robot = SwipeRobot::new(FakeListHost::new(300.0, 20), config).unwrap();
//!
//! robot.swipe(3, -200.0);
//! robot.wait_for_idle();
//! assert!(robot.list().is_open(3));
//! ```

use swipelist_foundation::{PointerEvent, PointerEventKind, ScrollState};
use swipelist_ui::{SwipeConfig, SwipeConfigError, SwipeListView, SwipeNotification};
use swipelist_ui_graphics::Point;

use crate::fake_host::FakeListHost;
use crate::recording_listener::RecordingListener;

/// Time between two touch samples or two frames.
pub const FRAME_MS: i64 = 16;

/// How long a finger rests before release in a slow drag. Longer than the
/// velocity tracker's stop window, so the release carries no fling.
pub const PAUSE_MS: i64 = 120;

pub struct SwipeRobot {
    list: SwipeListView<FakeListHost>,
    listener: RecordingListener,
    now_ms: i64,
    pointer: Option<Point>,
}

impl SwipeRobot {
    pub fn new(host: FakeListHost, config: SwipeConfig) -> Result<Self, SwipeConfigError> {
        let mut list = SwipeListView::new(host, config)?;
        let listener = RecordingListener::new();
        list.set_listener(listener.clone());
        Ok(Self {
            list,
            listener,
            now_ms: 0,
            pointer: None,
        })
    }

    pub fn list(&self) -> &SwipeListView<FakeListHost> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut SwipeListView<FakeListHost> {
        &mut self.list
    }

    pub fn host(&self) -> &FakeListHost {
        self.list.host()
    }

    pub fn host_mut(&mut self) -> &mut FakeListHost {
        self.list.host_mut()
    }

    pub fn listener(&self) -> &RecordingListener {
        &self.listener
    }

    /// Listener calls so far, without per-move reports.
    pub fn events(&self) -> Vec<SwipeNotification> {
        self.listener.events()
    }

    /// Listener calls since the last `take_events`, without per-move reports.
    pub fn take_events(&mut self) -> Vec<SwipeNotification> {
        self.listener.take()
    }

    pub fn now_ms(&self) -> i64 {
        self.now_ms
    }

    pub fn now_nanos(&self) -> u64 {
        u64::try_from(self.now_ms).unwrap_or(0) * 1_000_000
    }

    /// Screen point at the middle of `position`'s row.
    ///
    /// # Panics
    ///
    /// When the row is not on screen.
    pub fn row_center(&self, position: usize) -> Point {
        match self.host().row_center(position) {
            Some(point) => point,
            None => panic!("row {position} is not visible"),
        }
    }

    // ------------------------------------------------------------------
    // Raw pointer input
    // ------------------------------------------------------------------

    pub fn press(&mut self, point: Point) -> bool {
        self.pointer = Some(point);
        self.send(PointerEventKind::Down, point)
    }

    pub fn move_to(&mut self, point: Point) -> bool {
        self.now_ms += FRAME_MS;
        self.pointer = Some(point);
        self.send(PointerEventKind::Move, point)
    }

    /// Lifts the finger one sample after the last move, at `point`.
    pub fn release_at(&mut self, point: Point) -> bool {
        self.now_ms += FRAME_MS;
        self.pointer = None;
        self.send(PointerEventKind::Up, point)
    }

    /// Lifts the finger where it is.
    pub fn release(&mut self) -> bool {
        let point = self.current_pointer();
        self.release_at(point)
    }

    /// Holds still long enough for the velocity to decay, then lifts.
    pub fn release_after_pause(&mut self) -> bool {
        self.now_ms += PAUSE_MS;
        self.release()
    }

    pub fn cancel(&mut self) -> bool {
        let point = self.current_pointer();
        self.now_ms += FRAME_MS;
        self.pointer = None;
        self.send(PointerEventKind::Cancel, point)
    }

    fn current_pointer(&self) -> Point {
        self.pointer.unwrap_or(Point::ZERO)
    }

    fn send(&mut self, kind: PointerEventKind, raw: Point) -> bool {
        let origin = self.host().list_origin();
        let event = PointerEvent::new(kind, raw - origin, raw, self.now_ms);
        self.list.dispatch_touch_event(&event)
    }

    // ------------------------------------------------------------------
    // Gestures
    // ------------------------------------------------------------------

    /// Fast horizontal swipe of `dx` over `position`, released mid-motion.
    pub fn swipe(&mut self, position: usize, dx: f32) {
        self.swipe_from(self.row_center(position), dx);
    }

    pub fn swipe_from(&mut self, start: Point, dx: f32) {
        const STEPS: usize = 5;
        self.press(start);
        for step in 1..STEPS {
            let x = start.x + dx * step as f32 / STEPS as f32;
            self.move_to(Point::new(x, start.y));
        }
        self.release_at(Point::new(start.x + dx, start.y));
    }

    /// Slow horizontal drag of `dx` over `position`: the finger stops before
    /// it lifts, so only the distance decides the outcome.
    pub fn drag(&mut self, position: usize, dx: f32) {
        const STEPS: usize = 8;
        let start = self.row_center(position);
        self.press(start);
        for step in 1..=STEPS {
            let x = start.x + dx * step as f32 / STEPS as f32;
            self.move_to(Point::new(x, start.y));
        }
        self.release_after_pause();
    }

    /// Vertical drag of `dy` starting on `position`, as when scrolling.
    pub fn vertical_drag(&mut self, position: usize, dy: f32) {
        const STEPS: usize = 5;
        let start = self.row_center(position);
        self.press(start);
        for step in 1..=STEPS {
            let y = start.y + dy * step as f32 / STEPS as f32;
            self.move_to(Point::new(start.x, y));
        }
        self.release();
    }

    /// Press and release on `position` with a little horizontal jitter, then
    /// deliver the front view click the host would send if it still accepts
    /// clicks.
    pub fn tap(&mut self, position: usize, jitter: f32) {
        let start = self.row_center(position);
        self.press(start);
        self.move_to(Point::new(start.x + jitter, start.y));
        self.release();
        if self.host().is_front_clickable(position) {
            self.list.on_front_view_clicked();
        }
    }

    /// Press on `position` and report a long click on its front view.
    pub fn long_press(&mut self, position: usize) {
        let start = self.row_center(position);
        self.press(start);
        self.now_ms += 500;
        self.list.on_front_view_long_clicked();
        self.release();
    }

    // ------------------------------------------------------------------
    // Time and scrolling
    // ------------------------------------------------------------------

    /// Runs `count` frames, each followed by a paint pass.
    pub fn advance_frames(&mut self, count: usize) {
        for _ in 0..count {
            self.now_ms += FRAME_MS;
            let now = self.now_nanos();
            self.list.on_frame(now);
            self.list.on_paint();
        }
    }

    pub fn advance_time_ms(&mut self, millis: i64) {
        let frames = (millis + FRAME_MS - 1) / FRAME_MS;
        self.advance_frames(usize::try_from(frames).unwrap_or(0));
    }

    /// Pumps frames until nothing is animating or waiting.
    pub fn wait_for_idle(&mut self) {
        for _ in 0..500 {
            self.advance_frames(1);
            if !self.list.has_pending_work() {
                break;
            }
        }
    }

    pub fn scroll_state(&mut self, state: ScrollState) {
        let now = self.now_nanos();
        self.list.on_scroll_state_changed(state, now);
    }

    /// A complete host scroll: drag, fling, settle, and the list scrolled so
    /// `first` is on top.
    pub fn scroll_to(&mut self, first: usize) {
        self.scroll_state(ScrollState::Dragging);
        self.advance_frames(2);
        self.scroll_state(ScrollState::Flinging);
        self.host_mut().scroll_to(first);
        self.advance_frames(2);
        self.scroll_state(ScrollState::Idle);
    }
}

impl std::fmt::Debug for SwipeRobot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeRobot")
            .field("list", &self.list)
            .field("now_ms", &self.now_ms)
            .finish()
    }
}
