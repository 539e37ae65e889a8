//! Touch state machine and animation sequencing for swipeable rows.
//!
//! A gesture goes `Idle → Tracking → Swiping → Settling → Idle`. Touch-down
//! starts tracking the row under the finger; once horizontal travel passes
//! the slop while horizontal velocity dominates, the gesture becomes a swipe
//! and the host list is told to stop scrolling. Release decides between
//! committing (open/close, dismiss, check) and snapping back, and the
//! resulting animation's completion is processed on a later frame.
//!
//! At most one row is tracked as open. Opening a different row closes the
//! previous one, either by collapsing it ([`CrossClose::Collapse`]) or by
//! sliding it shut ([`CrossClose::Slide`]).

mod animations;
mod session;

use std::collections::BTreeSet;

use log::{debug, trace, warn};
use smallvec::smallvec;
use swipelist_animation::{AnimationId, AnimationSet, Animator, ValueAnimation};
use swipelist_foundation::{PointerEvent, PointerEventKind, ScrollState, Velocity, VelocityTracker};

use crate::config::{CrossClose, SwipeAction, SwipeConfig, SwipeConfigError};
use crate::deferred_paint::DeferredPaintCallback;
use crate::host::{ListHost, RowPart, ViewProperty};
use crate::listener::SwipeNotification;
use crate::row_state::{RowState, SwipeDirection};

use animations::{
    read_property, write_property, AnimatedProperty, AnimationPhase, CollapseFixup, HostSink,
    RowAnimation, RowAnimationKind,
};
use session::{GestureGate, GestureSession};

/// Height a row container collapses to before it is reported dismissed.
pub const COLLAPSED_ROW_HEIGHT: f32 = 1.0;

/// Something the engine asks of the list shell.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineOutput {
    /// Forward to the application listener.
    Notify(SwipeNotification),
    /// Return the shell's horizontal/vertical scroll guard to rest.
    ResetScrolling,
}

/// Where the current touch sequence is in the swipe state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    Tracking,
    Swiping,
    /// No finger down, a row animation is still running or committing.
    Settling,
}

/// The swipe gesture engine.
///
/// Single-threaded: touch events, scroll-state changes, frames and paint
/// notifications all arrive on the UI thread, and animation completions are
/// processed from [`on_frame`](Self::on_frame) interleaved with new touches.
pub struct SwipeTouchEngine {
    config: SwipeConfig,
    /// Application switch, independent of the scroll gate.
    handling_enabled: bool,
    gate: GestureGate,
    list_moving: bool,
    view_width: f32,
    /// The last row acted upon; open iff its direction is not `None`.
    tracked: Option<RowState>,
    session: Option<GestureSession>,
    /// Row of the last touch-down, for click callbacks that arrive after up.
    down_position: Option<usize>,
    checked: BTreeSet<usize>,
    animator: Animator<AnimatedProperty>,
    row_animations: Vec<RowAnimation>,
    deferred: DeferredPaintCallback<CollapseFixup>,
    outputs: Vec<EngineOutput>,
}

impl std::fmt::Debug for SwipeTouchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeTouchEngine")
            .field("handling_enabled", &self.handling_enabled)
            .field("gate", &self.gate)
            .field("list_moving", &self.list_moving)
            .field("view_width", &self.view_width)
            .field("tracked", &self.tracked)
            .field("phase", &self.gesture_phase())
            .field("animations", &self.row_animations.len())
            .finish()
    }
}

impl SwipeTouchEngine {
    pub fn new(config: SwipeConfig) -> Result<Self, SwipeConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            handling_enabled: true,
            gate: GestureGate::Enabled,
            list_moving: false,
            // 1 rather than 0 so alpha math never divides by zero.
            view_width: 1.0,
            tracked: None,
            session: None,
            down_position: None,
            checked: BTreeSet::new(),
            animator: Animator::new(),
            row_animations: Vec::new(),
            deferred: DeferredPaintCallback::new(),
            outputs: Vec::new(),
        })
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn is_open(&self, position: usize) -> bool {
        self.tracked
            .is_some_and(|row| row.position() == position && row.is_open())
    }

    pub fn was_swiped_right(&self, position: usize) -> bool {
        self.tracked
            .is_some_and(|row| row.position() == position && row.was_swiped_right())
    }

    pub fn was_swiped_left(&self, position: usize) -> bool {
        self.tracked
            .is_some_and(|row| row.position() == position && row.was_swiped_left())
    }

    /// The open row, if any.
    pub fn open_row_state(&self) -> Option<RowState> {
        self.tracked.filter(RowState::is_open)
    }

    pub fn is_checked(&self, position: usize) -> bool {
        self.checked.contains(&position)
    }

    pub fn checked_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.checked.iter().copied()
    }

    pub fn is_list_moving(&self) -> bool {
        self.list_moving
    }

    /// Whether a touch-down would start a gesture: handling is switched on
    /// and no scroll is pausing it.
    pub fn is_enabled(&self) -> bool {
        self.handling_enabled && self.gate.is_accepting()
    }

    pub fn view_width(&self) -> f32 {
        self.view_width
    }

    pub fn gesture_phase(&self) -> GesturePhase {
        match &self.session {
            Some(session) if session.swiping => GesturePhase::Swiping,
            Some(_) => GesturePhase::Tracking,
            None if !self.row_animations.is_empty() => GesturePhase::Settling,
            None => GesturePhase::Idle,
        }
    }

    /// True while frames or a paint are needed to make progress.
    pub fn has_pending_work(&self) -> bool {
        !self.animator.is_idle()
            || self.deferred.is_pending()
            || matches!(self.gate, GestureGate::ResumeAt(_))
    }

    pub fn drain_outputs(&mut self) -> Vec<EngineOutput> {
        std::mem::take(&mut self.outputs)
    }

    // ------------------------------------------------------------------
    // Control
    // ------------------------------------------------------------------

    /// Switches gesture handling on or off. Scroll-state changes pause and
    /// resume gestures on their own but never undo a switch-off.
    pub fn set_enabled(&mut self, enabled: bool) {
        debug!("gesture handling {}", if enabled { "enabled" } else { "disabled" });
        self.handling_enabled = enabled;
    }

    /// Forgets per-position state that a data-set change invalidated.
    pub fn reset_items(&mut self) {
        if !self.checked.is_empty() {
            debug!("data set changed, clearing {} checked rows", self.checked.len());
            self.checked.clear();
        }
    }

    pub fn on_scroll_state_changed(
        &mut self,
        host: &mut dyn ListHost,
        state: ScrollState,
        now_nanos: u64,
    ) {
        match state {
            ScrollState::Dragging => {
                self.gate = GestureGate::Paused;
                self.list_moving = true;
                self.collapse_open_row(host);
            }
            ScrollState::Flinging => {
                self.gate = GestureGate::Paused;
                self.list_moving = true;
            }
            ScrollState::Idle => {
                self.list_moving = false;
                self.outputs.push(EngineOutput::ResetScrolling);
                let delay = u64::try_from(self.config.scroll_settle_delay.as_nanos())
                    .unwrap_or(u64::MAX);
                self.gate = GestureGate::ResumeAt(now_nanos.saturating_add(delay));
            }
        }
        trace!("scroll state {:?}, gate {:?}", state, self.gate);
    }

    /// Advances animations and processes the ones that completed.
    pub fn on_frame(&mut self, host: &mut dyn ListHost, frame_time_nanos: u64) {
        if self.gate.poll(frame_time_nanos) {
            debug!("swipe gestures re-enabled after scroll settled");
        }
        let finished = {
            let mut sink = HostSink::new(&mut *host);
            self.animator.on_frame(frame_time_nanos, &mut sink)
        };
        for id in finished {
            self.complete_animation(host, id);
        }
    }

    /// Runs the restore steps that wait for a paint pass.
    pub fn on_paint(&mut self, host: &mut dyn ListHost) {
        for fixup in self.deferred.on_draw() {
            self.apply_collapse_fixup(host, fixup);
        }
        self.row_animations
            .retain(|animation| animation.phase != AnimationPhase::Done);
    }

    // ------------------------------------------------------------------
    // Public row operations
    // ------------------------------------------------------------------

    /// Opens `position` toward the left, if it is not already open.
    pub fn open_row(&mut self, host: &mut dyn ListHost, position: usize) {
        self.open_row_toward(host, position, false);
    }

    pub fn open_row_toward(
        &mut self,
        host: &mut dyn ListHost,
        position: usize,
        toward_right: bool,
    ) {
        self.refresh_view_width(host);
        self.settle_row(host, position);
        if self.is_open(position) {
            return;
        }
        self.animate_reveal(host, true, toward_right, RowState::new(position));
    }

    /// Closes `position` if it is the open row. Closing a closed row is a
    /// no-op and reports nothing.
    pub fn close_row(&mut self, host: &mut dyn ListHost, position: usize) {
        self.refresh_view_width(host);
        self.settle_row(host, position);
        let Some(row) = self.open_row_state().filter(|row| row.position() == position) else {
            return;
        };
        self.animate_reveal(host, true, row.was_swiped_right(), row);
    }

    pub fn close_all_open_rows(&mut self, host: &mut dyn ListHost) {
        if let Some(row) = self.open_row_state() {
            self.close_row(host, row.position());
        }
    }

    /// Collapses the open row, reporting it dismissed.
    pub fn collapse_open_row(&mut self, host: &mut dyn ListHost) {
        let Some(row) = self.open_row_state() else {
            return;
        };
        self.refresh_view_width(host);
        self.animate_collapse(host, row, None);
    }

    pub fn on_front_view_clicked(&mut self) {
        if let Some(position) = self.down_position {
            self.notify(SwipeNotification::ClickFrontView { position });
        }
    }

    pub fn on_back_view_clicked(&mut self) {
        if let Some(position) = self.down_position {
            self.notify(SwipeNotification::ClickBackView { position });
        }
    }

    pub fn on_front_view_long_clicked(&mut self, host: &mut dyn ListHost) {
        if !self.config.open_on_long_press {
            return;
        }
        if let Some(position) = self.down_position {
            self.open_row(host, position);
        }
    }

    // ------------------------------------------------------------------
    // Touch handling
    // ------------------------------------------------------------------

    /// Processes one touch event. Returns true when the engine consumed it.
    pub fn on_touch(&mut self, host: &mut dyn ListHost, event: &PointerEvent) -> bool {
        match event.kind {
            PointerEventKind::Down => self.on_down(host, event),
            PointerEventKind::Move => self.on_move(host, event),
            PointerEventKind::Up => self.on_up(host, event),
            PointerEventKind::Cancel => self.on_cancel(host),
        }
    }

    fn on_down(&mut self, host: &mut dyn ListHost, event: &PointerEvent) -> bool {
        if !self.is_enabled() {
            trace!("touch-down ignored, gestures paused");
            return false;
        }
        self.refresh_view_width(host);

        if let Some(previous) = self.session.take() {
            debug!("discarding unfinished gesture on row {}", previous.position);
        }

        let Some(position) = self.hit_test(host, event) else {
            trace!("touch-down hit no enabled row");
            return false;
        };

        self.settle_row(host, position);

        let open = self.is_open(position);
        if let Some(front) = host.find_view(position, self.front_part()) {
            host.set_clickable(front, !open, !open);
        }

        let mut tracker = VelocityTracker::new();
        tracker.add_movement(event);
        self.session = Some(GestureSession::new(position, event.raw_position.x, tracker));
        self.down_position = Some(position);
        trace!("tracking row {} (open: {})", position, open);
        true
    }

    fn on_move(&mut self, host: &mut dyn ListHost, event: &PointerEvent) -> bool {
        if !self.is_enabled() {
            return false;
        }
        let (position, down_x, velocity, classified) = {
            let Some(session) = self.session.as_mut() else {
                return false;
            };
            session.tracker.add_movement(event);
            (
                session.position,
                session.down_x,
                session.tracker.calculate_velocity(),
                session.is_classified(),
            )
        };

        let mut delta_x = event.raw_position.x - down_x;

        if !classified && delta_x.abs() > self.config.touch_slop && velocity.is_horizontal() {
            self.begin_swipe(host, event, position, delta_x > 0.0);
        }

        let Some(action) = self
            .session
            .as_ref()
            .filter(|session| session.swiping)
            .map(|session| session.action)
        else {
            return false;
        };

        if let Some(offset) = self.open_offset(position) {
            delta_x += offset;
        }
        self.move_row(host, position, action, delta_x);
        true
    }

    fn begin_swipe(
        &mut self,
        host: &mut dyn ListHost,
        event: &PointerEvent,
        position: usize,
        toward_right: bool,
    ) {
        let open = self.is_open(position);
        let action = if open {
            SwipeAction::Reveal
        } else {
            self.config.action_for(toward_right)
        };
        if action == SwipeAction::None {
            return;
        }
        if let Some(session) = self.session.as_mut() {
            session.begin_swipe(action);
        }
        debug!(
            "row {} swiping {} ({:?})",
            position,
            if toward_right { "right" } else { "left" },
            action
        );

        if open {
            self.notify(SwipeNotification::StartClose {
                position,
                toward_right,
            });
        } else {
            self.notify(SwipeNotification::StartOpen {
                position,
                action,
                toward_right,
            });
        }
        host.request_disallow_intercept_touch(true);
        host.dispatch_native_cancel(&event.to_cancel());
    }

    fn on_up(&mut self, host: &mut dyn ListHost, event: &PointerEvent) -> bool {
        // Taking the session releases its velocity tracker on every path.
        let Some(mut session) = self.session.take() else {
            return false;
        };
        if !session.swiping {
            return false;
        }

        session.tracker.add_movement(event);
        let velocity = session.tracker.calculate_velocity();
        let delta_x = event.raw_position.x - session.down_x;
        let position = session.position;
        let action = session.action;
        drop(session);

        let (swap, swap_right) = self.decide_release(position, delta_x, velocity);
        debug!(
            "row {} released: dx {:.1}, vx {:.1}, swap {} toward {}",
            position,
            delta_x,
            velocity.x,
            swap,
            if swap_right { "right" } else { "left" }
        );

        let was_open = self.is_open(position);
        self.choose_animation(host, action, position, swap, swap_right);

        let open_after = if action == SwipeAction::Reveal {
            was_open != swap
        } else {
            was_open
        };
        if let Some(front) = host.find_view(position, self.front_part()) {
            host.set_clickable(front, !open_after, !open_after);
        }

        self.down_position = None;
        host.request_disallow_intercept_touch(false);
        true
    }

    fn on_cancel(&mut self, host: &mut dyn ListHost) -> bool {
        let Some(session) = self.session.take() else {
            return false;
        };
        trace!("gesture on row {} cancelled", session.position);
        if !session.swiping {
            return false;
        }
        self.animate_revert(host, session.position, session.action);
        host.request_disallow_intercept_touch(false);
        true
    }

    /// Swap/direction decision for a released swipe.
    ///
    /// A fling inside the velocity window wins, except that flinging further
    /// in the direction a row is already open keeps it open. Without a fling,
    /// travelling past half the row width commits.
    fn decide_release(&self, position: usize, delta_x: f32, velocity: Velocity) -> (bool, bool) {
        let velocity_x = velocity.x.abs();
        let in_window = self.config.min_fling_velocity <= velocity_x
            && velocity_x <= self.config.max_fling_velocity;

        if in_window && velocity.y.abs() < velocity_x {
            let swap_right = velocity.x > 0.0;
            let swap = match self.open_direction(position) {
                SwipeDirection::Right => !swap_right,
                SwipeDirection::Left => swap_right,
                SwipeDirection::None => self.config.action_for(swap_right) != SwipeAction::None,
            };
            (swap, swap_right)
        } else if delta_x.abs() > self.view_width / 2.0 {
            (true, delta_x > 0.0)
        } else {
            (false, false)
        }
    }

    fn choose_animation(
        &mut self,
        host: &mut dyn ListHost,
        action: SwipeAction,
        position: usize,
        swap: bool,
        swap_right: bool,
    ) {
        let item = self
            .tracked
            .filter(|row| row.position() == position)
            .unwrap_or_else(|| RowState::new(position));
        match action {
            SwipeAction::Reveal => self.animate_reveal(host, swap, swap_right, item),
            SwipeAction::Dismiss => self.animate_dismiss(host, swap, swap_right, item),
            SwipeAction::Check => self.animate_check_return(host, swap, position),
            SwipeAction::None => {}
        }
    }

    /// Applies the live translation for a swipe in progress.
    fn move_row(
        &mut self,
        host: &mut dyn ListHost,
        position: usize,
        action: SwipeAction,
        delta_x: f32,
    ) {
        self.notify(SwipeNotification::Move {
            position,
            x: delta_x,
        });
        if action == SwipeAction::Dismiss {
            let container = RowPart::Container;
            let alpha = self.fade_alpha(delta_x);
            write_property(
                host,
                &AnimatedProperty::new(position, container, ViewProperty::TranslationX),
                delta_x,
            );
            write_property(
                host,
                &AnimatedProperty::new(position, container, ViewProperty::Alpha),
                alpha,
            );
            return;
        }
        if let Some(other) = self.other_open_row(position) {
            let alpha = self.fade_alpha(delta_x);
            write_property(
                host,
                &AnimatedProperty::new(other.position(), self.back_part(), ViewProperty::Alpha),
                alpha,
            );
        }
        write_property(
            host,
            &AnimatedProperty::new(position, self.front_part(), ViewProperty::TranslationX),
            delta_x,
        );
    }

    fn hit_test(&self, host: &dyn ListHost, event: &PointerEvent) -> Option<usize> {
        let local = event.raw_position - host.list_bounds().origin();
        let first = host.first_visible_position();
        (0..host.visible_child_count())
            .find(|&index| {
                host.child_hit_rect(index).contains(local.x, local.y)
                    && host.is_row_enabled(first + index)
            })
            .map(|index| first + index)
    }

    fn refresh_view_width(&mut self, host: &dyn ListHost) {
        let width = host.list_bounds().width;
        if width >= 2.0 {
            self.view_width = width;
        }
    }

    // ------------------------------------------------------------------
    // Geometry
    // ------------------------------------------------------------------

    /// Front-view translation of a fully open row.
    fn open_translation(&self, toward_right: bool) -> f32 {
        if toward_right {
            self.view_width - self.config.right_offset
        } else {
            -self.view_width + self.config.left_offset
        }
    }

    /// Translation an open row rests at, `None` when the row is closed.
    fn open_offset(&self, position: usize) -> Option<f32> {
        match self.open_direction(position) {
            SwipeDirection::Right => Some(self.open_translation(true)),
            SwipeDirection::Left => Some(self.open_translation(false)),
            SwipeDirection::None => None,
        }
    }

    fn open_direction(&self, position: usize) -> SwipeDirection {
        self.tracked
            .filter(|row| row.position() == position)
            .map_or(SwipeDirection::None, |row| row.direction())
    }

    /// Where the front view of `position` should come to rest.
    ///
    /// An open row that is not swapping stays fully open; a closed row that
    /// is swapping opens fully toward `swap_right`; everything else returns
    /// to 0.
    pub fn swipe_translation_target(&self, swap: bool, swap_right: bool, position: usize) -> f32 {
        if self.is_open(position) {
            if swap {
                0.0
            } else {
                self.open_offset(position).unwrap_or(0.0)
            }
        } else if swap {
            self.open_translation(swap_right)
        } else {
            0.0
        }
    }

    /// Back-view opacity of a row being closed by another row moving `delta_x`.
    pub fn fade_alpha(&self, delta_x: f32) -> f32 {
        (1.0 - 2.0 * delta_x.abs() / self.view_width).clamp(0.0, 1.0)
    }

    fn other_open_row(&self, position: usize) -> Option<RowState> {
        self.open_row_state().filter(|row| row.position() != position)
    }

    fn front_part(&self) -> RowPart {
        RowPart::Child(self.config.front_view)
    }

    fn back_part(&self) -> RowPart {
        RowPart::Child(self.config.back_view)
    }

    fn notify(&mut self, notification: SwipeNotification) {
        self.outputs.push(EngineOutput::Notify(notification));
    }

    // ------------------------------------------------------------------
    // Animations
    // ------------------------------------------------------------------

    fn start_animation(&mut self, set: AnimationSet<AnimatedProperty>, kind: RowAnimationKind) {
        let id = self.animator.start(set);
        self.row_animations.push(RowAnimation::new(id, kind));
    }

    fn new_set(&self) -> AnimationSet<AnimatedProperty> {
        AnimationSet::new(self.config.animation_spec())
    }

    /// Adds a fade of the other open row's back view toward `alpha`.
    fn push_other_fade(
        &self,
        host: &dyn ListHost,
        set: &mut AnimationSet<AnimatedProperty>,
        other: Option<RowState>,
        alpha: f32,
    ) {
        let Some(other) = other else {
            return;
        };
        let target = AnimatedProperty::new(other.position(), self.back_part(), ViewProperty::Alpha);
        if let Some(current) = read_property(host, &target) {
            set.push(ValueAnimation::new(target, current, alpha));
        }
    }

    fn animate_reveal(
        &mut self,
        host: &mut dyn ListHost,
        swap: bool,
        swap_right: bool,
        item: RowState,
    ) {
        let position = item.position();
        let front = AnimatedProperty::new(position, self.front_part(), ViewProperty::TranslationX);
        let Some(from) = read_property(host, &front) else {
            warn!("cannot animate row {}: not visible", position);
            return;
        };
        let target = self.swipe_translation_target(swap, swap_right, position);

        let mut set = self.new_set().with(ValueAnimation::new(front, from, target));
        let other_open = self.other_open_row(position);
        self.push_other_fade(host, &mut set, other_open, self.fade_alpha(target));

        self.start_animation(
            set,
            RowAnimationKind::Reveal {
                swap,
                swap_right,
                item,
                other_open,
            },
        );
    }

    /// Collapses `dismissed`'s container; `replacement` is the row that
    /// takes over as the tracked row and may need renumbering.
    ///
    /// A row is dismissed once. If it is already collapsing, a replacement
    /// is handed to that collapse instead of starting another one.
    fn animate_collapse(
        &mut self,
        host: &mut dyn ListHost,
        dismissed: RowState,
        replacement: Option<usize>,
    ) {
        let position = dismissed.position();
        if let Some(pending) = self
            .row_animations
            .iter_mut()
            .find_map(|animation| animation.pending_collapse_of(position))
        {
            if replacement.is_some() {
                *pending = replacement;
            }
            debug!("row {} already collapsing, replacement {:?}", position, pending);
            return;
        }

        let height = AnimatedProperty::new(position, RowPart::Container, ViewProperty::Height);
        let Some(original_height) = read_property(host, &height) else {
            warn!("cannot collapse row {}: not visible", position);
            return;
        };
        let set = self
            .new_set()
            .with(ValueAnimation::new(height, original_height, COLLAPSED_ROW_HEIGHT));
        self.start_animation(
            set,
            RowAnimationKind::Collapse {
                dismissed,
                replacement,
                original_height,
            },
        );
    }

    fn animate_dismiss(
        &mut self,
        host: &mut dyn ListHost,
        swap: bool,
        swap_right: bool,
        item: RowState,
    ) {
        let position = item.position();
        let translation =
            AnimatedProperty::new(position, RowPart::Container, ViewProperty::TranslationX);
        let alpha = AnimatedProperty::new(position, RowPart::Container, ViewProperty::Alpha);
        let (Some(from_x), Some(from_alpha)) =
            (read_property(host, &translation), read_property(host, &alpha))
        else {
            warn!("cannot dismiss row {}: not visible", position);
            return;
        };
        let (to_x, to_alpha) = if swap {
            (if swap_right { self.view_width } else { -self.view_width }, 0.0)
        } else {
            (0.0, 1.0)
        };
        let set = self
            .new_set()
            .with(ValueAnimation::new(translation, from_x, to_x))
            .with(ValueAnimation::new(alpha, from_alpha, to_alpha));
        let other_open = self.other_open_row(position);
        self.start_animation(
            set,
            RowAnimationKind::DismissSlide {
                swap,
                item,
                other_open,
            },
        );
    }

    fn animate_check_return(&mut self, host: &mut dyn ListHost, swap: bool, position: usize) {
        let front = AnimatedProperty::new(position, self.front_part(), ViewProperty::TranslationX);
        let Some(from) = read_property(host, &front) else {
            warn!("cannot animate row {}: not visible", position);
            return;
        };
        let mut set = self.new_set().with(ValueAnimation::new(front, from, 0.0));
        let other_open = self.other_open_row(position);
        self.push_other_fade(host, &mut set, other_open, 1.0);
        self.start_animation(set, RowAnimationKind::CheckReturn { swap, position });
    }

    fn animate_slide_close(&mut self, host: &mut dyn ListHost, row: RowState) {
        let position = row.position();
        let front = AnimatedProperty::new(position, self.front_part(), ViewProperty::TranslationX);
        let Some(from) = read_property(host, &front) else {
            // Off-screen rows still close; there is just nothing to animate.
            self.notify(SwipeNotification::Closed {
                position,
                from_right: row.was_swiped_right(),
            });
            return;
        };
        let mut set = self.new_set().with(ValueAnimation::new(front, from, 0.0));
        self.push_other_fade(host, &mut set, Some(row), 1.0);
        self.start_animation(set, RowAnimationKind::SlideClose { row });
    }

    fn animate_revert(&mut self, host: &mut dyn ListHost, position: usize, action: SwipeAction) {
        let (part, target) = if action == SwipeAction::Dismiss {
            (RowPart::Container, 0.0)
        } else {
            let target = self.open_offset(position).unwrap_or(0.0);
            (self.front_part(), target)
        };
        let translation = AnimatedProperty::new(position, part, ViewProperty::TranslationX);
        let Some(from) = read_property(host, &translation) else {
            return;
        };
        let mut set = self.new_set().with(ValueAnimation::new(translation, from, target));
        if action == SwipeAction::Dismiss {
            let alpha = AnimatedProperty::new(position, RowPart::Container, ViewProperty::Alpha);
            if let Some(current) = read_property(host, &alpha) {
                set.push(ValueAnimation::new(alpha, current, 1.0));
            }
        } else {
            let other_open = self.other_open_row(position);
            self.push_other_fade(host, &mut set, other_open, 1.0);
        }
        self.start_animation(set, RowAnimationKind::Revert { position });
    }

    /// Closes `other` because `opened` just became the open row.
    fn cross_close(&mut self, host: &mut dyn ListHost, other: RowState, opened: usize) {
        match self.config.cross_close {
            CrossClose::Collapse => self.animate_collapse(host, other, Some(opened)),
            CrossClose::Slide => self.animate_slide_close(host, other),
        }
    }

    /// Finishes every animation that affects `position` right away, so a new
    /// gesture or request starts from committed state.
    fn settle_row(&mut self, host: &mut dyn ListHost, position: usize) {
        while let Some(id) = self
            .row_animations
            .iter()
            .find(|animation| {
                animation.phase == AnimationPhase::Animating && animation.touches(position)
            })
            .map(|animation| animation.id)
        {
            debug!("settling in-flight animation {} on row {}", id.raw(), position);
            {
                let mut sink = HostSink::new(&mut *host);
                self.animator.finish_now(id, &mut sink);
            }
            self.complete_animation(host, id);
        }
        if self.deferred.is_pending() {
            self.on_paint(host);
        }
    }

    fn complete_animation(&mut self, host: &mut dyn ListHost, id: AnimationId) {
        let Some(index) = self
            .row_animations
            .iter()
            .position(|animation| {
                animation.id == id && animation.phase == AnimationPhase::Animating
            })
        else {
            return;
        };
        let kind = self.row_animations[index].kind;
        self.row_animations[index].phase = AnimationPhase::Committing;

        let mut awaiting_paint = false;
        match kind {
            RowAnimationKind::Reveal {
                swap,
                swap_right,
                item,
                other_open,
            } => {
                self.outputs.push(EngineOutput::ResetScrolling);
                if swap {
                    self.commit_reveal(host, swap_right, item, other_open);
                }
            }
            RowAnimationKind::Collapse {
                dismissed,
                original_height,
                ..
            } => {
                self.notify(SwipeNotification::Dismiss {
                    positions: smallvec![dismissed.position()],
                });
                self.deferred.pre_draw(CollapseFixup {
                    id,
                    dismissed,
                    original_height,
                });
                awaiting_paint = true;
            }
            RowAnimationKind::DismissSlide {
                swap,
                item,
                other_open,
            } => {
                self.outputs.push(EngineOutput::ResetScrolling);
                if swap {
                    let replacement = other_open.map(|row| row.position());
                    self.animate_collapse(host, item.closed(), replacement);
                }
            }
            RowAnimationKind::CheckReturn { swap, position } => {
                self.outputs.push(EngineOutput::ResetScrolling);
                if swap {
                    let checked = if self.checked.remove(&position) {
                        false
                    } else {
                        self.checked.insert(position);
                        true
                    };
                    self.notify(SwipeNotification::ChoiceChanged { position, checked });
                }
            }
            RowAnimationKind::SlideClose { row } => {
                self.notify(SwipeNotification::Closed {
                    position: row.position(),
                    from_right: row.was_swiped_right(),
                });
            }
            RowAnimationKind::Revert { .. } => {
                self.outputs.push(EngineOutput::ResetScrolling);
            }
        }

        if !awaiting_paint {
            if let Some(animation) = self.row_animations.iter_mut().find(|a| a.id == id) {
                animation.phase = AnimationPhase::Done;
            }
            self.row_animations
                .retain(|animation| animation.phase != AnimationPhase::Done);
        }
    }

    /// Toggles the row a committing reveal acted on and replaces the tracked
    /// row with it.
    fn commit_reveal(
        &mut self,
        host: &mut dyn ListHost,
        swap_right: bool,
        item: RowState,
        other_open: Option<RowState>,
    ) {
        let position = item.position();
        // Prefer the tracked record: it may have been updated while the
        // animation ran.
        let mut item = self
            .tracked
            .filter(|row| row.position() == position)
            .unwrap_or(item);

        if item.is_open() {
            debug!("row {} closed", position);
            self.notify(SwipeNotification::Closed {
                position,
                from_right: item.was_swiped_right(),
            });
            item.close();
        } else {
            debug!("row {} opened", position);
            self.notify(SwipeNotification::Opened {
                position,
                toward_right: swap_right,
            });
            item.swipe(swap_right);
        }

        if let Some(other) = other_open {
            if other.position() != position && self.is_open(other.position()) {
                self.cross_close(host, other, position);
            }
        }
        // A row that just closed never displaces a different open row.
        if !item.is_open() && self.open_row_state().is_some_and(|row| row.position() != position) {
            trace!("row {} closed, keeping the tracked open row", position);
            return;
        }
        self.tracked = Some(item);
    }

    fn apply_collapse_fixup(&mut self, host: &mut dyn ListHost, fixup: CollapseFixup) {
        let dismissed = fixup.dismissed.position();
        let container = |property| AnimatedProperty::new(dismissed, RowPart::Container, property);

        write_property(host, &container(ViewProperty::Height), fixup.original_height);
        write_property(host, &container(ViewProperty::TranslationX), 0.0);
        write_property(host, &container(ViewProperty::Alpha), 1.0);
        write_property(
            host,
            &AnimatedProperty::new(dismissed, self.back_part(), ViewProperty::Alpha),
            1.0,
        );
        write_property(
            host,
            &AnimatedProperty::new(dismissed, self.front_part(), ViewProperty::TranslationX),
            0.0,
        );

        if let Some(row) = self.tracked.filter(|row| row.position() == dismissed) {
            self.tracked = Some(row.closed());
        }

        let replacement = self
            .row_animations
            .iter_mut()
            .find(|animation| animation.id == fixup.id)
            .and_then(|animation| animation.pending_collapse_of(dismissed))
            .and_then(|replacement| *replacement);
        if let Some(replacement) = replacement {
            if replacement > dismissed {
                self.shift_replacement(host, replacement);
            } else {
                trace!(
                    "replacement row {} precedes dismissed row {}, no shift",
                    replacement,
                    dismissed
                );
            }
        }

        if let Some(animation) = self.row_animations.iter_mut().find(|a| a.id == fixup.id) {
            animation.phase = AnimationPhase::Done;
        }
    }

    /// The row at `replacement` moves up one slot once the row above it is
    /// removed: renumber the tracked row and carry its front offset along.
    fn shift_replacement(&mut self, host: &mut dyn ListHost, replacement: usize) {
        let shifted = replacement - 1;
        let from =
            AnimatedProperty::new(replacement, self.front_part(), ViewProperty::TranslationX);
        let to = AnimatedProperty::new(shifted, self.front_part(), ViewProperty::TranslationX);
        if let Some(open_x) = read_property(host, &from) {
            write_property(host, &from, 0.0);
            write_property(host, &to, open_x);
        }
        if let Some(mut row) = self.tracked.filter(|row| row.position() == replacement) {
            row.shift_down();
            self.tracked = Some(row);
            debug!("tracked row renumbered {} -> {}", replacement, shifted);
        }
    }
}

#[cfg(test)]
#[path = "../tests/touch_engine_tests.rs"]
mod tests;
