//! Swipeable rows for a vertically scrolling list.
//!
//! [`SwipeListView`] wraps a host list (anything implementing [`ListHost`]),
//! forwards touch and scroll events to the [`SwipeTouchEngine`], and reports
//! what happened to rows through a [`SwipeListViewListener`].

mod config;
mod deferred_paint;
mod host;
mod list_view;
mod listener;
mod row_state;
mod touch_engine;

#[cfg(test)]
#[path = "tests/stub_host.rs"]
pub(crate) mod stub_host;

pub use config::{CrossClose, SwipeAction, SwipeConfig, SwipeConfigError, ViewId};
pub use deferred_paint::DeferredPaintCallback;
pub use host::{ListHost, NodeId, RowPart, ViewProperty};
pub use list_view::{SwipeListView, TouchState};
pub use listener::{SwipeListViewListener, SwipeNotification};
pub use row_state::{RowState, SwipeDirection};
pub use touch_engine::{EngineOutput, GesturePhase, SwipeTouchEngine, COLLAPSED_ROW_HEIGHT};

pub use swipelist_foundation::{PointerEvent, PointerEventKind, ScrollState};
pub use swipelist_ui_graphics::{Point, Rect, Size};

pub mod prelude {
    pub use crate::config::{CrossClose, SwipeAction, SwipeConfig, ViewId};
    pub use crate::host::{ListHost, RowPart, ViewProperty};
    pub use crate::list_view::SwipeListView;
    pub use crate::listener::{SwipeListViewListener, SwipeNotification};
    pub use crate::row_state::{RowState, SwipeDirection};
    pub use swipelist_foundation::{PointerEvent, PointerEventKind, ScrollState};
    pub use swipelist_ui_graphics::{Point, Rect};
}
