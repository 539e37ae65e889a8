//! The narrow interface the swipe engine needs from the host list.

use swipelist_foundation::PointerEvent;
use swipelist_ui_graphics::Rect;

use crate::config::ViewId;

/// Host handle for a view inside the list.
pub type NodeId = u64;

/// Part of a row the engine manipulates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RowPart {
    /// The row's outermost view (the list child itself).
    Container,
    /// A descendant of the row looked up by id (front or back view).
    Child(ViewId),
}

/// Numeric view properties the engine reads and animates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewProperty {
    TranslationX,
    Alpha,
    Height,
}

/// Host list collaborator.
///
/// Rows are recycled by the host, so the engine never keeps a [`NodeId`]
/// across calls: every operation resolves the view again through
/// [`ListHost::find_view`]. Only rows that are currently visible can be
/// resolved; asking for a row scrolled off-screen returns `None` and the
/// engine skips the write.
pub trait ListHost {
    /// Bounds of the list in screen coordinates.
    fn list_bounds(&self) -> Rect;

    /// Adapter position of the first visible child.
    fn first_visible_position(&self) -> usize;

    fn visible_child_count(&self) -> usize;

    /// Hit rectangle of the `index`-th visible child, relative to the list.
    fn child_hit_rect(&self, index: usize) -> Rect;

    /// Whether the adapter allows interaction with the row at `position`.
    fn is_row_enabled(&self, position: usize) -> bool {
        let _ = position;
        true
    }

    /// Resolves a part of the row at `position`, or `None` when the row is
    /// not visible or has no such part.
    fn find_view(&self, position: usize, part: RowPart) -> Option<NodeId>;

    fn view_property(&self, node: NodeId, property: ViewProperty) -> f32;

    fn set_view_property(&mut self, node: NodeId, property: ViewProperty, value: f32);

    fn set_clickable(&mut self, node: NodeId, clickable: bool, long_clickable: bool);

    /// Stops (or resumes) the host's own interception of touch events for
    /// the rest of the current gesture.
    fn request_disallow_intercept_touch(&mut self, disallow: bool);

    /// Delivers a synthetic cancel to the host's native scroll handling so
    /// it abandons any scroll it started for this gesture.
    fn dispatch_native_cancel(&mut self, event: &PointerEvent);
}
