//! Minimal in-crate `ListHost` for unit tests: a 300px wide list of 60px
//! rows at the screen origin, every row visible, front view id 1 and back
//! view id 2.

use std::collections::HashMap;

use swipelist_foundation::PointerEvent;
use swipelist_ui_graphics::Rect;

use crate::config::ViewId;
use crate::host::{ListHost, NodeId, RowPart, ViewProperty};

pub(crate) const WIDTH: f32 = 300.0;
pub(crate) const ROW_HEIGHT: f32 = 60.0;

#[derive(Debug, Default)]
pub(crate) struct StubHost {
    rows: usize,
    hidden: Vec<usize>,
    properties: HashMap<(NodeId, ViewProperty), f32>,
    clickable: HashMap<NodeId, bool>,
    pub disallow_intercept: bool,
    pub native_cancels: usize,
}

impl StubHost {
    pub fn new(rows: usize) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    /// Makes `position` unresolvable, as if it scrolled off-screen.
    pub fn hide(&mut self, position: usize) {
        self.hidden.push(position);
    }

    fn node(position: usize, part: RowPart) -> Option<NodeId> {
        let code = match part {
            RowPart::Container => 0,
            RowPart::Child(ViewId(1)) => 1,
            RowPart::Child(ViewId(2)) => 2,
            RowPart::Child(_) => return None,
        };
        Some(position as NodeId * 4 + code)
    }

    pub fn get(&self, position: usize, part: RowPart, property: ViewProperty) -> f32 {
        Self::node(position, part).map_or(f32::NAN, |node| self.view_property(node, property))
    }

    pub fn front_x(&self, position: usize) -> f32 {
        self.get(position, RowPart::Child(ViewId(1)), ViewProperty::TranslationX)
    }

    pub fn back_alpha(&self, position: usize) -> f32 {
        self.get(position, RowPart::Child(ViewId(2)), ViewProperty::Alpha)
    }

    pub fn is_front_clickable(&self, position: usize) -> bool {
        Self::node(position, RowPart::Child(ViewId(1)))
            .and_then(|node| self.clickable.get(&node).copied())
            .unwrap_or(true)
    }
}

impl ListHost for StubHost {
    fn list_bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, WIDTH, ROW_HEIGHT * self.rows as f32)
    }

    fn first_visible_position(&self) -> usize {
        0
    }

    fn visible_child_count(&self) -> usize {
        self.rows
    }

    fn child_hit_rect(&self, index: usize) -> Rect {
        Rect::new(0.0, ROW_HEIGHT * index as f32, WIDTH, ROW_HEIGHT)
    }

    fn find_view(&self, position: usize, part: RowPart) -> Option<NodeId> {
        if position >= self.rows || self.hidden.contains(&position) {
            return None;
        }
        Self::node(position, part)
    }

    fn view_property(&self, node: NodeId, property: ViewProperty) -> f32 {
        self.properties
            .get(&(node, property))
            .copied()
            .unwrap_or(match property {
                ViewProperty::TranslationX => 0.0,
                ViewProperty::Alpha => 1.0,
                ViewProperty::Height => ROW_HEIGHT,
            })
    }

    fn set_view_property(&mut self, node: NodeId, property: ViewProperty, value: f32) {
        self.properties.insert((node, property), value);
    }

    fn set_clickable(&mut self, node: NodeId, clickable: bool, _long_clickable: bool) {
        self.clickable.insert(node, clickable);
    }

    fn request_disallow_intercept_touch(&mut self, disallow: bool) {
        self.disallow_intercept = disallow;
    }

    fn dispatch_native_cancel(&mut self, _event: &PointerEvent) {
        self.native_cancels += 1;
    }
}
