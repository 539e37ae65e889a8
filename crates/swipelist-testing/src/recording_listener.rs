use std::cell::RefCell;
use std::rc::Rc;

use swipelist_ui::{SwipeAction, SwipeListViewListener, SwipeNotification};

/// Listener that records every callback as a [`SwipeNotification`].
///
/// Clones share one log, so a test keeps a clone while the list owns the
/// other.
#[derive(Clone, Debug, Default)]
pub struct RecordingListener {
    log: Rc<RefCell<Vec<SwipeNotification>>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, `Move` reports included.
    pub fn all(&self) -> Vec<SwipeNotification> {
        self.log.borrow().clone()
    }

    /// Everything recorded so far except the per-move reports.
    pub fn events(&self) -> Vec<SwipeNotification> {
        self.log
            .borrow()
            .iter()
            .filter(|notification| !notification.is_move())
            .cloned()
            .collect()
    }

    /// Like [`events`](Self::events), clearing the log.
    pub fn take(&self) -> Vec<SwipeNotification> {
        let events = self.events();
        self.log.borrow_mut().clear();
        events
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }

    fn record(&self, notification: SwipeNotification) {
        self.log.borrow_mut().push(notification);
    }
}

impl SwipeListViewListener for RecordingListener {
    fn on_dismiss(&mut self, reverse_sorted_positions: &[usize]) {
        self.record(SwipeNotification::Dismiss {
            positions: reverse_sorted_positions.iter().copied().collect(),
        });
    }

    fn on_start_open(&mut self, position: usize, action: SwipeAction, toward_right: bool) {
        self.record(SwipeNotification::StartOpen {
            position,
            action,
            toward_right,
        });
    }

    fn on_start_close(&mut self, position: usize, toward_right: bool) {
        self.record(SwipeNotification::StartClose {
            position,
            toward_right,
        });
    }

    fn on_click_front_view(&mut self, position: usize) {
        self.record(SwipeNotification::ClickFrontView { position });
    }

    fn on_click_back_view(&mut self, position: usize) {
        self.record(SwipeNotification::ClickBackView { position });
    }

    fn on_opened(&mut self, position: usize, toward_right: bool) {
        self.record(SwipeNotification::Opened {
            position,
            toward_right,
        });
    }

    fn on_closed(&mut self, position: usize, from_right: bool) {
        self.record(SwipeNotification::Closed {
            position,
            from_right,
        });
    }

    fn on_list_changed(&mut self) {
        self.record(SwipeNotification::ListChanged);
    }

    fn on_move(&mut self, position: usize, x: f32) {
        self.record(SwipeNotification::Move { position, x });
    }

    fn on_choice_changed(&mut self, position: usize, checked: bool) {
        self.record(SwipeNotification::ChoiceChanged { position, checked });
    }
}
