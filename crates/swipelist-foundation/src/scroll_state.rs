/// Scroll state reported by the host list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ScrollState {
    /// The list is at rest.
    #[default]
    Idle,
    /// The user is dragging the list vertically.
    Dragging,
    /// The list is coasting after a vertical fling.
    Flinging,
}

impl ScrollState {
    /// True while the list content is moving under the finger or by inertia.
    pub fn is_moving(&self) -> bool {
        !matches!(self, ScrollState::Idle)
    }
}
