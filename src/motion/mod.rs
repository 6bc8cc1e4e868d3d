//! Headless model of the browser-side motion: reveal and hover toggles, snap
//! scrolling, and stagger scheduling.

pub mod scroll;
pub mod session;
pub mod stagger;
pub mod state;
