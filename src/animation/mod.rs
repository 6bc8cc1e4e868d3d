//! Keyframed values, easing curves, springs and the named preset catalogue.

pub mod anim;
pub mod ease;
pub mod preset;
pub mod spring;
