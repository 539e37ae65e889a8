//! Parallel property animations driven by frame time.
//!
//! An [`AnimationSet`] bundles numeric property animations that share one
//! spec and finish together. The [`Animator`] owns every running set, advances
//! them on each frame and reports which sets completed, so callers can react
//! to completion as an event instead of registering nested callbacks.

use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::animation::{AnimationSpec, Lerp};

/// Receives interpolated values for animation targets.
///
/// `K` identifies what is being animated (a view property, a field, ...).
/// The sink decides how to apply the value and may ignore targets that no
/// longer exist.
pub trait PropertySink<K> {
    fn apply(&mut self, target: &K, value: f32);
}

impl<K, F> PropertySink<K> for F
where
    F: FnMut(&K, f32),
{
    fn apply(&mut self, target: &K, value: f32) {
        self(target, value)
    }
}

/// Identifies a running [`AnimationSet`] inside an [`Animator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationId(u64);

impl AnimationId {
    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// A single numeric property moving from `from` to `to`.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueAnimation<K> {
    pub target: K,
    pub from: f32,
    pub to: f32,
}

impl<K> ValueAnimation<K> {
    pub fn new(target: K, from: f32, to: f32) -> Self {
        Self { target, from, to }
    }

    /// Value at an eased progress fraction.
    pub fn value_at(&self, progress: f32) -> f32 {
        self.from.lerp(&self.to, progress)
    }
}

/// Animations played together under one spec.
#[derive(Clone, Debug)]
pub struct AnimationSet<K> {
    spec: AnimationSpec,
    animations: SmallVec<[ValueAnimation<K>; 2]>,
    start_time_nanos: Option<u64>,
}

impl<K> AnimationSet<K> {
    pub fn new(spec: AnimationSpec) -> Self {
        Self {
            spec,
            animations: SmallVec::new(),
            start_time_nanos: None,
        }
    }

    /// Adds an animation that runs in parallel with the others in the set.
    pub fn with(mut self, animation: ValueAnimation<K>) -> Self {
        self.animations.push(animation);
        self
    }

    pub fn push(&mut self, animation: ValueAnimation<K>) {
        self.animations.push(animation);
    }

    pub fn spec(&self) -> AnimationSpec {
        self.spec
    }

    pub fn animations(&self) -> &[ValueAnimation<K>] {
        &self.animations
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    /// Applies the values for `frame_time_nanos` and returns true once the
    /// set reached its end values.
    fn advance(&mut self, frame_time_nanos: u64, sink: &mut dyn PropertySink<K>) -> bool {
        let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);

        let Some(linear_progress) = self.spec.linear_progress(elapsed_nanos) else {
            return false;
        };

        if linear_progress >= 1.0 {
            self.apply_end(sink);
            return true;
        }

        let progress = self.spec.easing.transform(linear_progress);
        for animation in &self.animations {
            sink.apply(&animation.target, animation.value_at(progress));
        }
        false
    }

    fn apply_end(&self, sink: &mut dyn PropertySink<K>) {
        for animation in &self.animations {
            sink.apply(&animation.target, animation.to);
        }
    }
}

/// Owns every running [`AnimationSet`].
///
/// Sets are advanced in the order they were started, and completions are
/// reported in that same order.
#[derive(Debug)]
pub struct Animator<K> {
    running: IndexMap<AnimationId, AnimationSet<K>>,
    next_id: u64,
}

impl<K> Default for Animator<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Animator<K> {
    pub fn new() -> Self {
        Self {
            running: IndexMap::new(),
            next_id: 1,
        }
    }

    /// Starts a set. Its first values are applied on the next frame.
    pub fn start(&mut self, set: AnimationSet<K>) -> AnimationId {
        let id = AnimationId(self.next_id);
        self.next_id += 1;
        log::trace!(
            "animation {} started ({} properties, {}ms)",
            id.0,
            set.len(),
            set.spec.duration_millis
        );
        self.running.insert(id, set);
        id
    }

    pub fn is_running(&self, id: AnimationId) -> bool {
        self.running.contains_key(&id)
    }

    pub fn is_idle(&self) -> bool {
        self.running.is_empty()
    }

    pub fn len(&self) -> usize {
        self.running.len()
    }

    pub fn is_empty(&self) -> bool {
        self.running.is_empty()
    }

    pub fn get(&self, id: AnimationId) -> Option<&AnimationSet<K>> {
        self.running.get(&id)
    }

    /// Advances every running set to `frame_time_nanos` and returns the ids
    /// of the sets that finished on this frame.
    pub fn on_frame(
        &mut self,
        frame_time_nanos: u64,
        sink: &mut dyn PropertySink<K>,
    ) -> SmallVec<[AnimationId; 4]> {
        let mut finished: SmallVec<[AnimationId; 4]> = SmallVec::new();
        for (id, set) in self.running.iter_mut() {
            if set.advance(frame_time_nanos, sink) {
                finished.push(*id);
            }
        }
        for id in &finished {
            self.running.shift_remove(id);
            log::trace!("animation {} finished", id.0);
        }
        finished
    }

    /// Jumps a running set to its end values and removes it.
    ///
    /// Returns false if `id` is not running.
    pub fn finish_now(&mut self, id: AnimationId, sink: &mut dyn PropertySink<K>) -> bool {
        match self.running.shift_remove(&id) {
            Some(set) => {
                set.apply_end(sink);
                log::trace!("animation {} finished early", id.0);
                true
            }
            None => false,
        }
    }

    /// Removes a running set without applying any further values.
    pub fn cancel(&mut self, id: AnimationId) -> Option<AnimationSet<K>> {
        self.running.shift_remove(&id)
    }
}
