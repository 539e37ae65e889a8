use smallvec::SmallVec;

use crate::config::SwipeAction;

/// Application callbacks. Every method defaults to doing nothing.
pub trait SwipeListViewListener {
    /// Rows were collapsed and should be removed from the data set.
    /// Positions are sorted in descending order.
    fn on_dismiss(&mut self, _reverse_sorted_positions: &[usize]) {}

    fn on_start_open(&mut self, _position: usize, _action: SwipeAction, _toward_right: bool) {}

    fn on_start_close(&mut self, _position: usize, _toward_right: bool) {}

    fn on_click_front_view(&mut self, _position: usize) {}

    fn on_click_back_view(&mut self, _position: usize) {}

    fn on_opened(&mut self, _position: usize, _toward_right: bool) {}

    fn on_closed(&mut self, _position: usize, _from_right: bool) {}

    fn on_list_changed(&mut self) {}

    /// The row under the finger moved to horizontal offset `x`.
    fn on_move(&mut self, _position: usize, _x: f32) {}

    /// A check swipe toggled the row.
    fn on_choice_changed(&mut self, _position: usize, _checked: bool) {}
}

/// A listener call queued by the engine.
#[derive(Clone, Debug, PartialEq)]
pub enum SwipeNotification {
    Dismiss {
        positions: SmallVec<[usize; 1]>,
    },
    StartOpen {
        position: usize,
        action: SwipeAction,
        toward_right: bool,
    },
    StartClose {
        position: usize,
        toward_right: bool,
    },
    ClickFrontView {
        position: usize,
    },
    ClickBackView {
        position: usize,
    },
    Opened {
        position: usize,
        toward_right: bool,
    },
    Closed {
        position: usize,
        from_right: bool,
    },
    ListChanged,
    Move {
        position: usize,
        x: f32,
    },
    ChoiceChanged {
        position: usize,
        checked: bool,
    },
}

impl SwipeNotification {
    pub fn dispatch(&self, listener: &mut dyn SwipeListViewListener) {
        match self {
            SwipeNotification::Dismiss { positions } => listener.on_dismiss(positions),
            SwipeNotification::StartOpen {
                position,
                action,
                toward_right,
            } => listener.on_start_open(*position, *action, *toward_right),
            SwipeNotification::StartClose {
                position,
                toward_right,
            } => listener.on_start_close(*position, *toward_right),
            SwipeNotification::ClickFrontView { position } => {
                listener.on_click_front_view(*position)
            }
            SwipeNotification::ClickBackView { position } => listener.on_click_back_view(*position),
            SwipeNotification::Opened {
                position,
                toward_right,
            } => listener.on_opened(*position, *toward_right),
            SwipeNotification::Closed {
                position,
                from_right,
            } => listener.on_closed(*position, *from_right),
            SwipeNotification::ListChanged => listener.on_list_changed(),
            SwipeNotification::Move { position, x } => listener.on_move(*position, *x),
            SwipeNotification::ChoiceChanged { position, checked } => {
                listener.on_choice_changed(*position, *checked)
            }
        }
    }

    /// True for the per-frame `Move` reports.
    pub fn is_move(&self) -> bool {
        matches!(self, SwipeNotification::Move { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[derive(Default)]
    struct Counting {
        opened: Vec<(usize, bool)>,
        dismissed: Vec<usize>,
        list_changed: usize,
    }

    impl SwipeListViewListener for Counting {
        fn on_opened(&mut self, position: usize, toward_right: bool) {
            self.opened.push((position, toward_right));
        }

        fn on_dismiss(&mut self, reverse_sorted_positions: &[usize]) {
            self.dismissed.extend_from_slice(reverse_sorted_positions);
        }

        fn on_list_changed(&mut self) {
            self.list_changed += 1;
        }
    }

    #[test]
    fn dispatch_routes_to_matching_callback() {
        let mut listener = Counting::default();
        SwipeNotification::Opened {
            position: 3,
            toward_right: false,
        }
        .dispatch(&mut listener);
        SwipeNotification::Dismiss {
            positions: smallvec![7],
        }
        .dispatch(&mut listener);
        SwipeNotification::ListChanged.dispatch(&mut listener);
        // Callbacks the listener does not override are no-ops.
        SwipeNotification::Move {
            position: 3,
            x: 12.0,
        }
        .dispatch(&mut listener);

        assert_eq!(listener.opened, vec![(3, false)]);
        assert_eq!(listener.dismissed, vec![7]);
        assert_eq!(listener.list_changed, 1);
    }
}
