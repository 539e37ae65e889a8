//! In-memory list host.
//!
//! Rows are laid out top to bottom at a fixed height. Only a window of rows
//! is bound to child views at any time, and views are recycled the way a
//! real list recycles them: node ids belong to child slots, not positions,
//! so scrolling rebinds a slot (and whatever properties it carries) to a new
//! position.

use std::collections::{HashMap, HashSet};

use swipelist_foundation::PointerEvent;
use swipelist_ui::{ListHost, NodeId, RowPart, ViewId, ViewProperty};
use swipelist_ui_graphics::{Point, Rect};

pub const FRONT_VIEW: ViewId = ViewId(1);
pub const BACK_VIEW: ViewId = ViewId(2);

const PART_BITS: u64 = 2;

#[derive(Debug)]
pub struct FakeListHost {
    origin: Point,
    width: f32,
    row_height: f32,
    row_count: usize,
    viewport_rows: usize,
    first_visible: usize,
    disabled: HashSet<usize>,
    properties: HashMap<(NodeId, ViewProperty), f32>,
    clickable: HashMap<NodeId, (bool, bool)>,
    disallow_intercept: bool,
    native_cancels: Vec<PointerEvent>,
}

impl FakeListHost {
    /// A list of `row_count` rows at the screen origin, `width` wide with
    /// 60px rows and room for ten of them.
    pub fn new(width: f32, row_count: usize) -> Self {
        Self {
            origin: Point::ZERO,
            width,
            row_height: 60.0,
            row_count,
            viewport_rows: 10,
            first_visible: 0,
            disabled: HashSet::new(),
            properties: HashMap::new(),
            clickable: HashMap::new(),
            disallow_intercept: false,
            native_cancels: Vec::new(),
        }
    }

    /// Places the list at `origin` in screen coordinates.
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_row_height(mut self, row_height: f32) -> Self {
        self.row_height = row_height;
        self
    }

    pub fn with_viewport_rows(mut self, viewport_rows: usize) -> Self {
        self.viewport_rows = viewport_rows;
        self
    }

    pub fn list_origin(&self) -> Point {
        self.origin
    }

    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Screen coordinates of the middle of `position`'s row.
    ///
    /// Returns `None` when the row is not on screen.
    pub fn row_center(&self, position: usize) -> Option<Point> {
        let index = self.slot(position)?;
        let rect = self.child_hit_rect(index);
        Some(Point::new(
            self.origin.x + rect.x + rect.width / 2.0,
            self.origin.y + rect.y + rect.height / 2.0,
        ))
    }

    /// Scrolls so that `first` is the first visible row.
    pub fn scroll_to(&mut self, first: usize) {
        self.first_visible = first.min(self.row_count.saturating_sub(1));
    }

    pub fn set_row_enabled(&mut self, position: usize, enabled: bool) {
        if enabled {
            self.disabled.remove(&position);
        } else {
            self.disabled.insert(position);
        }
    }

    /// Removes a row from the data set, as an adapter does after a dismiss.
    pub fn remove_row(&mut self) {
        self.row_count = self.row_count.saturating_sub(1);
    }

    pub fn front_translation(&self, position: usize) -> Option<f32> {
        self.property(position, RowPart::Child(FRONT_VIEW), ViewProperty::TranslationX)
    }

    pub fn back_alpha(&self, position: usize) -> Option<f32> {
        self.property(position, RowPart::Child(BACK_VIEW), ViewProperty::Alpha)
    }

    pub fn container_translation(&self, position: usize) -> Option<f32> {
        self.property(position, RowPart::Container, ViewProperty::TranslationX)
    }

    pub fn container_alpha(&self, position: usize) -> Option<f32> {
        self.property(position, RowPart::Container, ViewProperty::Alpha)
    }

    pub fn container_height(&self, position: usize) -> Option<f32> {
        self.property(position, RowPart::Container, ViewProperty::Height)
    }

    /// Whether the row's front view accepts clicks. Views never touched by
    /// the engine are clickable.
    pub fn is_front_clickable(&self, position: usize) -> bool {
        self.find_view(position, RowPart::Child(FRONT_VIEW))
            .and_then(|node| self.clickable.get(&node))
            .map_or(true, |&(clickable, _)| clickable)
    }

    pub fn is_intercept_disallowed(&self) -> bool {
        self.disallow_intercept
    }

    pub fn native_cancels(&self) -> &[PointerEvent] {
        &self.native_cancels
    }

    fn property(&self, position: usize, part: RowPart, property: ViewProperty) -> Option<f32> {
        self.find_view(position, part)
            .map(|node| self.view_property(node, property))
    }

    fn visible_range(&self) -> std::ops::Range<usize> {
        let end = (self.first_visible + self.viewport_rows).min(self.row_count);
        self.first_visible..end
    }

    fn slot(&self, position: usize) -> Option<usize> {
        self.visible_range()
            .contains(&position)
            .then(|| position - self.first_visible)
    }
}

impl ListHost for FakeListHost {
    fn list_bounds(&self) -> Rect {
        Rect::new(
            self.origin.x,
            self.origin.y,
            self.width,
            self.row_height * self.viewport_rows as f32,
        )
    }

    fn first_visible_position(&self) -> usize {
        self.first_visible
    }

    fn visible_child_count(&self) -> usize {
        self.visible_range().len()
    }

    fn child_hit_rect(&self, index: usize) -> Rect {
        Rect::new(0.0, self.row_height * index as f32, self.width, self.row_height)
    }

    fn is_row_enabled(&self, position: usize) -> bool {
        !self.disabled.contains(&position)
    }

    fn find_view(&self, position: usize, part: RowPart) -> Option<NodeId> {
        let slot = self.slot(position)? as NodeId;
        let code = match part {
            RowPart::Container => 0,
            RowPart::Child(id) if id == FRONT_VIEW => 1,
            RowPart::Child(id) if id == BACK_VIEW => 2,
            RowPart::Child(_) => return None,
        };
        Some((slot << PART_BITS) | code)
    }

    fn view_property(&self, node: NodeId, property: ViewProperty) -> f32 {
        match self.properties.get(&(node, property)) {
            Some(value) => *value,
            None => match property {
                ViewProperty::TranslationX => 0.0,
                ViewProperty::Alpha => 1.0,
                ViewProperty::Height => self.row_height,
            },
        }
    }

    fn set_view_property(&mut self, node: NodeId, property: ViewProperty, value: f32) {
        log::trace!("node {} {:?} = {}", node, property, value);
        self.properties.insert((node, property), value);
    }

    fn set_clickable(&mut self, node: NodeId, clickable: bool, long_clickable: bool) {
        self.clickable.insert(node, (clickable, long_clickable));
    }

    fn request_disallow_intercept_touch(&mut self, disallow: bool) {
        self.disallow_intercept = disallow;
    }

    fn dispatch_native_cancel(&mut self, event: &PointerEvent) {
        self.native_cancels.push(*event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_visible_rows_resolve() {
        let mut host = FakeListHost::new(300.0, 30).with_viewport_rows(5);
        assert!(host.find_view(4, RowPart::Container).is_some());
        assert!(host.find_view(5, RowPart::Container).is_none());

        host.scroll_to(10);
        assert!(host.find_view(4, RowPart::Container).is_none());
        assert_eq!(
            host.find_view(10, RowPart::Container),
            FakeListHost::new(300.0, 30).find_view(0, RowPart::Container)
        );
    }

    #[test]
    fn row_center_is_in_screen_coordinates() {
        let host = FakeListHost::new(300.0, 5).with_origin(Point::new(0.0, 100.0));
        assert_eq!(host.row_center(1), Some(Point::new(150.0, 190.0)));
        assert_eq!(host.row_center(7), None);
    }

    #[test]
    fn unknown_child_ids_do_not_resolve() {
        let host = FakeListHost::new(300.0, 5);
        assert!(host.find_view(0, RowPart::Child(ViewId(9))).is_none());
    }
}
