/// Which way a row was swiped open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SwipeDirection {
    /// The row is at rest.
    #[default]
    None,
    Left,
    Right,
}

/// The row a gesture or animation acted upon.
///
/// Freshly created states are always closed. The engine keeps at most one of
/// these as the tracked row and replaces it on every open/close transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RowState {
    position: usize,
    direction: SwipeDirection,
}

impl RowState {
    pub fn new(position: usize) -> Self {
        Self {
            position,
            direction: SwipeDirection::None,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn direction(&self) -> SwipeDirection {
        self.direction
    }

    pub fn swipe_right(&mut self) {
        self.direction = SwipeDirection::Right;
    }

    pub fn swipe_left(&mut self) {
        self.direction = SwipeDirection::Left;
    }

    /// Opens toward the right when `right`, toward the left otherwise.
    pub fn swipe(&mut self, right: bool) {
        if right {
            self.swipe_right();
        } else {
            self.swipe_left();
        }
    }

    pub fn close(&mut self) {
        self.direction = SwipeDirection::None;
    }

    pub fn is_open(&self) -> bool {
        self.direction != SwipeDirection::None
    }

    pub fn was_swiped_right(&self) -> bool {
        self.direction == SwipeDirection::Right
    }

    pub fn was_swiped_left(&self) -> bool {
        self.direction == SwipeDirection::Left
    }

    /// Renumbers the row after a row above it was removed.
    pub fn shift_down(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    /// Copy of this state with the direction reset.
    pub fn closed(mut self) -> Self {
        self.close();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rows_are_closed() {
        let row = RowState::new(4);
        assert_eq!(row.position(), 4);
        assert_eq!(row.direction(), SwipeDirection::None);
        assert!(!row.is_open());
    }

    #[test]
    fn transitions_set_direction() {
        let mut row = RowState::new(1);
        row.swipe_right();
        assert!(row.is_open());
        assert!(row.was_swiped_right());
        assert!(!row.was_swiped_left());

        row.swipe_left();
        assert!(row.was_swiped_left());

        row.close();
        assert!(!row.is_open());
        assert!(!row.was_swiped_left());
    }

    #[test]
    fn swipe_picks_side() {
        let mut row = RowState::new(0);
        row.swipe(true);
        assert_eq!(row.direction(), SwipeDirection::Right);
        row.swipe(false);
        assert_eq!(row.direction(), SwipeDirection::Left);
        assert_eq!(row.closed().direction(), SwipeDirection::None);
    }

    #[test]
    fn shift_down_keeps_direction_and_saturates() {
        let mut row = RowState::new(1);
        row.swipe_left();
        row.shift_down();
        assert_eq!(row.position(), 0);
        assert!(row.was_swiped_left());
        row.shift_down();
        assert_eq!(row.position(), 0);
    }
}
