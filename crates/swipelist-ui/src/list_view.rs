//! The list shell: interception, event routing and listener plumbing.

use log::trace;
use swipelist_foundation::{PointerEvent, PointerEventKind, ScrollState};
use swipelist_ui_graphics::Point;

use crate::config::{SwipeConfig, SwipeConfigError};
use crate::host::{ListHost, NodeId, RowPart};
use crate::listener::{SwipeListViewListener, SwipeNotification};
use crate::touch_engine::{EngineOutput, SwipeTouchEngine};

/// How the list currently reads the finger's motion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TouchState {
    #[default]
    Rest,
    /// Horizontal travel passed the paging slop; the engine owns the gesture.
    ScrollingX,
    /// Vertical travel passed the paging slop; the list scrolls natively.
    ScrollingY,
}

/// A vertically scrolling list whose rows can be swiped.
///
/// The shell owns the host list and the engine. Touch events go through
/// [`on_intercept_touch_event`](Self::on_intercept_touch_event) first, which
/// decides whether the list steals the gesture for vertical scrolling;
/// [`dispatch_touch_event`](Self::dispatch_touch_event) does both steps for
/// hosts that deliver events in one place.
pub struct SwipeListView<H: ListHost> {
    host: H,
    engine: SwipeTouchEngine,
    listener: Option<Box<dyn SwipeListViewListener>>,
    touch_state: TouchState,
    last_motion: Point,
}

impl<H: ListHost> SwipeListView<H> {
    pub fn new(host: H, config: SwipeConfig) -> Result<Self, SwipeConfigError> {
        let engine = SwipeTouchEngine::new(config)?;
        Ok(Self {
            host,
            engine,
            listener: None,
            touch_state: TouchState::Rest,
            last_motion: Point::ZERO,
        })
    }

    pub fn set_listener(&mut self, listener: impl SwipeListViewListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn engine(&self) -> &SwipeTouchEngine {
        &self.engine
    }

    pub fn touch_state(&self) -> TouchState {
        self.touch_state
    }

    // ------------------------------------------------------------------
    // Touch routing
    // ------------------------------------------------------------------

    /// Decides whether the list takes over the gesture. Returns true when the
    /// list intercepts (vertical scroll).
    ///
    /// Down and up always reach the engine from here, as does every event of
    /// a horizontal gesture.
    pub fn on_intercept_touch_event(&mut self, event: &PointerEvent) -> bool {
        if self.touch_state == TouchState::ScrollingX {
            return self.on_touch_event(event);
        }

        match event.kind {
            PointerEventKind::Move => {
                self.check_in_moving(event.position);
                self.touch_state == TouchState::ScrollingY
            }
            PointerEventKind::Down => {
                self.on_touch_event(event);
                self.touch_state = TouchState::Rest;
                self.last_motion = event.position;
                false
            }
            PointerEventKind::Cancel => {
                self.touch_state = TouchState::Rest;
                false
            }
            PointerEventKind::Up => {
                self.on_touch_event(event);
                self.touch_state == TouchState::ScrollingY
            }
        }
    }

    /// Feeds one event to the engine. Returns true when it was consumed.
    pub fn on_touch_event(&mut self, event: &PointerEvent) -> bool {
        let consumed = self.engine.on_touch(&mut self.host, event);
        self.flush();
        consumed
    }

    /// Runs interception and then delivers the event to the engine if
    /// interception did not already.
    pub fn dispatch_touch_event(&mut self, event: &PointerEvent) -> bool {
        let routed = self.touch_state == TouchState::ScrollingX
            || matches!(event.kind, PointerEventKind::Down | PointerEventKind::Up);
        let intercepted = self.on_intercept_touch_event(event);
        if routed {
            return intercepted;
        }
        self.on_touch_event(event) || intercepted
    }

    fn check_in_moving(&mut self, position: Point) {
        let slop = self.engine.config().paging_touch_slop;
        let x_moved = (position.x - self.last_motion.x).abs().trunc() > slop;
        let y_moved = (position.y - self.last_motion.y).abs().trunc() > slop;

        if x_moved {
            self.touch_state = TouchState::ScrollingX;
            self.last_motion = position;
        }
        if y_moved {
            self.touch_state = TouchState::ScrollingY;
            self.last_motion = position;
        }
        trace!("touch state {:?}", self.touch_state);
    }

    /// Returns the list to [`TouchState::Rest`].
    pub fn reset_scrolling(&mut self) {
        self.touch_state = TouchState::Rest;
    }

    // ------------------------------------------------------------------
    // Host notifications
    // ------------------------------------------------------------------

    pub fn on_scroll_state_changed(&mut self, state: ScrollState, now_nanos: u64) {
        self.engine
            .on_scroll_state_changed(&mut self.host, state, now_nanos);
        self.flush();
    }

    pub fn on_frame(&mut self, frame_time_nanos: u64) {
        self.engine.on_frame(&mut self.host, frame_time_nanos);
        self.flush();
    }

    /// Call after the host painted a frame.
    pub fn on_paint(&mut self) {
        self.engine.on_paint(&mut self.host);
        self.flush();
    }

    pub fn has_pending_work(&self) -> bool {
        self.engine.has_pending_work()
    }

    pub fn on_front_view_clicked(&mut self) {
        self.engine.on_front_view_clicked();
        self.flush();
    }

    pub fn on_back_view_clicked(&mut self) {
        self.engine.on_back_view_clicked();
        self.flush();
    }

    pub fn on_front_view_long_clicked(&mut self) {
        self.engine.on_front_view_long_clicked(&mut self.host);
        self.flush();
    }

    // ------------------------------------------------------------------
    // Public operations
    // ------------------------------------------------------------------

    pub fn open_row(&mut self, position: usize) {
        self.engine.open_row(&mut self.host, position);
        self.flush();
    }

    pub fn open_row_toward(&mut self, position: usize, toward_right: bool) {
        self.engine
            .open_row_toward(&mut self.host, position, toward_right);
        self.flush();
    }

    pub fn close_row(&mut self, position: usize) {
        self.engine.close_row(&mut self.host, position);
        self.flush();
    }

    pub fn close_all_open_rows(&mut self) {
        self.engine.close_all_open_rows(&mut self.host);
        self.flush();
    }

    pub fn is_list_currently_moving(&self) -> bool {
        self.engine.is_list_moving()
    }

    pub fn set_gesture_handling_enabled(&mut self, enabled: bool) {
        self.engine.set_enabled(enabled);
    }

    /// Call after the adapter's data set changed.
    pub fn reset_after_data_change(&mut self) {
        self.engine.reset_items();
        self.dispatch(SwipeNotification::ListChanged);
    }

    pub fn find_front_view(&self, position: usize) -> Option<NodeId> {
        let front = self.engine.config().front_view;
        self.host.find_view(position, RowPart::Child(front))
    }

    pub fn is_open(&self, position: usize) -> bool {
        self.engine.is_open(position)
    }

    pub fn was_swiped_left(&self, position: usize) -> bool {
        self.engine.was_swiped_left(position)
    }

    pub fn was_swiped_right(&self, position: usize) -> bool {
        self.engine.was_swiped_right(position)
    }

    pub fn is_checked(&self, position: usize) -> bool {
        self.engine.is_checked(position)
    }

    fn flush(&mut self) {
        for output in self.engine.drain_outputs() {
            match output {
                EngineOutput::ResetScrolling => self.reset_scrolling(),
                EngineOutput::Notify(notification) => self.dispatch(notification),
            }
        }
    }

    fn dispatch(&mut self, notification: SwipeNotification) {
        if let Some(listener) = self.listener.as_deref_mut() {
            notification.dispatch(listener);
        }
    }
}

impl<H: ListHost + std::fmt::Debug> std::fmt::Debug for SwipeListView<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeListView")
            .field("host", &self.host)
            .field("engine", &self.engine)
            .field("touch_state", &self.touch_state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewId;
    use crate::stub_host::StubHost;

    fn list() -> SwipeListView<StubHost> {
        SwipeListView::new(StubHost::new(10), SwipeConfig::new(ViewId(1), ViewId(2)))
            .expect("valid config")
    }

    fn event(kind: PointerEventKind, x: f32, y: f32, time_ms: i64) -> PointerEvent {
        PointerEvent::at(kind, Point::new(x, y), time_ms)
    }

    #[test]
    fn invalid_config_is_rejected() {
        let result = SwipeListView::new(StubHost::new(3), SwipeConfig::default());
        assert!(matches!(result, Err(SwipeConfigError::MissingFrontView)));
    }

    #[test]
    fn down_never_intercepts() {
        let mut list = list();
        assert!(!list.on_intercept_touch_event(&event(PointerEventKind::Down, 50.0, 30.0, 0)));
        assert_eq!(list.touch_state(), TouchState::Rest);
    }

    #[test]
    fn vertical_motion_intercepts() {
        let mut list = list();
        list.on_intercept_touch_event(&event(PointerEventKind::Down, 50.0, 30.0, 0));
        assert!(!list.on_intercept_touch_event(&event(PointerEventKind::Move, 50.0, 40.0, 16)));
        assert!(list.on_intercept_touch_event(&event(PointerEventKind::Move, 52.0, 60.0, 32)));
        assert_eq!(list.touch_state(), TouchState::ScrollingY);
    }

    #[test]
    fn vertical_wins_when_both_axes_pass_slop() {
        let mut list = list();
        list.on_intercept_touch_event(&event(PointerEventKind::Down, 50.0, 30.0, 0));
        assert!(list.on_intercept_touch_event(&event(PointerEventKind::Move, 80.0, 60.0, 16)));
        assert_eq!(list.touch_state(), TouchState::ScrollingY);
    }

    #[test]
    fn horizontal_motion_hands_gesture_to_engine() {
        let mut list = list();
        list.on_intercept_touch_event(&event(PointerEventKind::Down, 50.0, 30.0, 0));
        assert!(!list.on_intercept_touch_event(&event(PointerEventKind::Move, 80.0, 32.0, 16)));
        assert_eq!(list.touch_state(), TouchState::ScrollingX);
    }

    #[test]
    fn cancel_returns_to_rest() {
        let mut list = list();
        list.on_intercept_touch_event(&event(PointerEventKind::Down, 50.0, 30.0, 0));
        list.on_intercept_touch_event(&event(PointerEventKind::Move, 50.0, 80.0, 16));
        assert_eq!(list.touch_state(), TouchState::ScrollingY);
        assert!(!list.on_intercept_touch_event(&event(PointerEventKind::Cancel, 50.0, 80.0, 32)));
        assert_eq!(list.touch_state(), TouchState::Rest);
    }

    #[test]
    fn find_front_view_resolves_visible_rows_only() {
        let list = list();
        assert!(list.find_front_view(2).is_some());
        assert!(list.find_front_view(42).is_none());
    }
}
