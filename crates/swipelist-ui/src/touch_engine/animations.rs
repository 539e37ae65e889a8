//! Row animation sessions.
//!
//! Each animation the engine starts is paired with a [`RowAnimation`] that
//! records what must happen when it completes. Completion arrives as an
//! [`AnimationId`] from the animator; the engine then moves the session from
//! `Animating` to `Committing` and finally `Done`.

use log::trace;
use swipelist_animation::{AnimationId, PropertySink};

use crate::host::{ListHost, RowPart, ViewProperty};
use crate::row_state::RowState;

/// A view property of a row, addressed by position so it is re-resolved on
/// every frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct AnimatedProperty {
    pub position: usize,
    pub part: RowPart,
    pub property: ViewProperty,
}

impl AnimatedProperty {
    pub fn new(position: usize, part: RowPart, property: ViewProperty) -> Self {
        Self {
            position,
            part,
            property,
        }
    }
}

/// Reads a row property, `None` when the row is not visible.
pub(crate) fn read_property(host: &dyn ListHost, target: &AnimatedProperty) -> Option<f32> {
    host.find_view(target.position, target.part)
        .map(|node| host.view_property(node, target.property))
}

/// Writes a row property if the row is still visible.
pub(crate) fn write_property(
    host: &mut dyn ListHost,
    target: &AnimatedProperty,
    value: f32,
) -> bool {
    match host.find_view(target.position, target.part) {
        Some(node) => {
            host.set_view_property(node, target.property, value);
            true
        }
        None => {
            trace!(
                "row {} not visible, skipped {:?} = {}",
                target.position,
                target.property,
                value
            );
            false
        }
    }
}

/// Applies animator output to the host.
pub(crate) struct HostSink<'a> {
    host: &'a mut dyn ListHost,
}

impl<'a> HostSink<'a> {
    pub fn new(host: &'a mut dyn ListHost) -> Self {
        Self { host }
    }
}

impl PropertySink<AnimatedProperty> for HostSink<'_> {
    fn apply(&mut self, target: &AnimatedProperty, value: f32) {
        write_property(self.host, target, value);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AnimationPhase {
    Animating,
    /// Finished animating, waiting on a deferred step (the post-paint
    /// restore of a collapsed row).
    Committing,
    Done,
}

/// Restore work for a collapsed row, run after the next paint.
///
/// The replacement row is read from the collapse session when the fixup
/// runs, since a later cross-close may hand one to a collapse in flight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct CollapseFixup {
    pub id: AnimationId,
    pub dismissed: RowState,
    pub original_height: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum RowAnimationKind {
    /// Front view snapping open, closed, or back to where it was.
    Reveal {
        swap: bool,
        swap_right: bool,
        item: RowState,
        other_open: Option<RowState>,
    },
    /// Row height collapsing before the row is reported dismissed.
    Collapse {
        dismissed: RowState,
        replacement: Option<usize>,
        original_height: f32,
    },
    /// Whole row sliding out (or back) for the dismiss action.
    DismissSlide {
        swap: bool,
        item: RowState,
        other_open: Option<RowState>,
    },
    /// Front view returning to rest after a check swipe.
    CheckReturn { swap: bool, position: usize },
    /// A previously open row sliding closed because another row opened.
    SlideClose { row: RowState },
    /// A cancelled swipe returning to its resting translation.
    Revert { position: usize },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct RowAnimation {
    pub id: AnimationId,
    pub phase: AnimationPhase,
    pub kind: RowAnimationKind,
}

impl RowAnimation {
    pub fn new(id: AnimationId, kind: RowAnimationKind) -> Self {
        Self {
            id,
            phase: AnimationPhase::Animating,
            kind,
        }
    }

    /// Mutable access to the replacement of a collapse of `position` that
    /// has not finished its post-paint restore.
    pub fn pending_collapse_of(&mut self, position: usize) -> Option<&mut Option<usize>> {
        if self.phase == AnimationPhase::Done {
            return None;
        }
        match &mut self.kind {
            RowAnimationKind::Collapse {
                dismissed,
                replacement,
                ..
            } if dismissed.position() == position => Some(replacement),
            _ => None,
        }
    }

    /// Whether completing this animation changes what row `position` shows
    /// or how it is tracked.
    pub fn touches(&self, position: usize) -> bool {
        match self.kind {
            // A committing reveal or dismiss also closes the other open row.
            RowAnimationKind::Reveal {
                item, other_open, ..
            }
            | RowAnimationKind::DismissSlide {
                item, other_open, ..
            } => {
                item.position() == position
                    || other_open.is_some_and(|row| row.position() == position)
            }
            RowAnimationKind::Collapse {
                dismissed,
                replacement,
                ..
            } => dismissed.position() == position || replacement == Some(position),
            RowAnimationKind::CheckReturn { position: p, .. }
            | RowAnimationKind::Revert { position: p } => p == position,
            RowAnimationKind::SlideClose { row } => row.position() == position,
        }
    }
}
