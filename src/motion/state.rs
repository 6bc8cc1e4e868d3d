//! Per-element two-state toggles.
//!
//! Reveal state follows the intersection ratio, hover state follows the
//! pointer. The two signals are independent.

use crate::{
    animation::preset::{Preset, PresetKind, VisualState},
    foundation::core::{Rect, intersection_ratio},
    page::section::ViewportTrigger,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HoverState {
    #[default]
    Rest,
    Hover,
}

/// Reveal state of one trigger root.
#[derive(Clone, Debug)]
pub struct RevealToggle {
    trigger: ViewportTrigger,
    state: RevealState,
    revealed: u32,
}

impl RevealToggle {
    pub fn new(trigger: ViewportTrigger) -> Self {
        Self {
            trigger,
            state: RevealState::Hidden,
            revealed: 0,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Number of hidden-to-visible transitions so far.
    pub fn reveal_count(&self) -> u32 {
        self.revealed
    }

    /// Feed a new intersection ratio; returns the new state if it changed.
    pub fn observe(&mut self, ratio: f64) -> Option<RevealState> {
        let in_view = ratio > 0.0 && ratio >= self.trigger.amount;
        let next = match (self.state, in_view) {
            (RevealState::Hidden, true) => RevealState::Visible,
            // `once` roots stay revealed after the first crossing.
            (RevealState::Visible, false) if !self.trigger.once => RevealState::Hidden,
            _ => return None,
        };
        if next == RevealState::Visible {
            self.revealed += 1;
        }
        self.state = next;
        Some(next)
    }

    /// Observe `target` against the viewport rectangle, shrunk by the root margin.
    pub fn observe_rect(&mut self, target: Rect, viewport: Rect) -> Option<RevealState> {
        let m = self.trigger.margin_px;
        let root = viewport.inflate(m, m);
        let ratio = if root.width() > 0.0 && root.height() > 0.0 {
            intersection_ratio(target, root)
        } else {
            0.0
        };
        self.observe(ratio)
    }
}

/// Pointer state of one element carrying a hover preset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverToggle {
    hovered: bool,
    pressed: bool,
}

impl HoverToggle {
    pub fn state(&self) -> HoverState {
        if self.hovered {
            HoverState::Hover
        } else {
            HoverState::Rest
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn pointer_enter(&mut self) {
        self.hovered = true;
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = false;
        self.pressed = false;
    }

    pub fn press(&mut self) {
        self.pressed = true;
    }

    pub fn release(&mut self) {
        self.pressed = false;
    }

    /// Target visual state for `preset` under the current pointer signals.
    pub fn target(&self, preset: &Preset) -> VisualState {
        debug_assert_eq!(preset.kind, PresetKind::Hover);
        match (&preset.pressed, self.pressed, self.hovered) {
            (Some(p), true, _) => p.clone(),
            (_, _, true) => preset.to.clone(),
            _ => preset.from.clone(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/state.rs"]
mod tests;
