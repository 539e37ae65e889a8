use swipelist_ui_graphics::Point;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// A raw touch sample delivered by the host.
///
/// `position` is relative to the list widget, `raw_position` is in screen
/// coordinates. Swipe displacement is measured on the raw position so it
/// stays stable while the row under the finger is translated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    pub raw_position: Point,
    /// Event time in milliseconds on the host's uptime clock.
    pub time_ms: i64,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, raw_position: Point, time_ms: i64) -> Self {
        Self {
            id: 0,
            kind,
            position,
            raw_position,
            time_ms,
        }
    }

    /// Event whose local and raw positions coincide (list placed at the
    /// screen origin).
    pub fn at(kind: PointerEventKind, position: Point, time_ms: i64) -> Self {
        Self::new(kind, position, position, time_ms)
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    /// Copy of this event turned into a cancel, used to abort a gesture the
    /// host list already started tracking.
    pub fn to_cancel(&self) -> Self {
        Self {
            kind: PointerEventKind::Cancel,
            ..*self
        }
    }

    pub fn kind(&self) -> PointerEventKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_copy_keeps_coordinates_and_time() {
        let event = PointerEvent::new(
            PointerEventKind::Move,
            Point::new(10.0, 20.0),
            Point::new(110.0, 220.0),
            42,
        )
        .with_id(3);
        let cancel = event.to_cancel();
        assert_eq!(cancel.kind(), PointerEventKind::Cancel);
        assert_eq!(cancel.position, event.position);
        assert_eq!(cancel.raw_position, event.raw_position);
        assert_eq!(cancel.time_ms, 42);
        assert_eq!(cancel.id, 3);
    }
}
