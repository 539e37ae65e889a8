//! Animation system for swipelist
//!
//! This crate provides tween specs, easing curves and an [`Animator`] that
//! runs sets of numeric property animations in parallel, driven by frame time.

pub mod animation;
pub mod animator;

pub use animation::*;
pub use animator::{AnimationId, AnimationSet, Animator, PropertySink, ValueAnimation};

pub mod prelude {
    pub use crate::animation::{AnimationSpec, Easing, Lerp};
    pub use crate::animator::{AnimationId, AnimationSet, Animator, PropertySink, ValueAnimation};
}
