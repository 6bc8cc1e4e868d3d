//! Static stagger orchestration.
//!
//! A reveal element inherits its start offset from its nearest motion ancestor:
//! `offset(child_i) = offset(parent) + parent.child_delay(i)`, where `i` counts
//! the parent's direct motion descendants in document order. Reveal roots
//! (elements carrying their own trigger) restart at zero. Loop and hover
//! presets take no part.

use crate::{
    animation::preset::{PresetKind, PresetName, Transition},
    foundation::core::Millis,
    page::{
        node::{Element, Node},
        section::is_reveal_root,
    },
};

/// Inline custom property carrying the computed start offset.
pub const DELAY_VAR: &str = "--motion-delay";

/// One scheduled reveal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaggerSlot {
    pub preset: PresetName,
    /// Start offset relative to the enclosing reveal root's trigger.
    pub delay: Millis,
    /// Nesting depth among motion elements; reveal roots are depth 0.
    pub depth: usize,
}

struct Orchestrator {
    transition: Transition,
    offset: Millis,
    depth: usize,
    next_index: usize,
}

impl Orchestrator {
    fn next_offset(&mut self) -> Millis {
        let delay = self.transition.child_delay(self.next_index);
        self.next_index += 1;
        self.offset.saturating_add(delay)
    }
}

fn reveal_preset(e: &Element) -> Option<PresetName> {
    let name: PresetName = e.get_attr("data-motion")?.parse().ok()?;
    (name.preset().kind == PresetKind::Reveal).then_some(name)
}

fn own_delay(e: &Element) -> Millis {
    e.get_attr("data-delay")
        .and_then(|d| d.parse().ok())
        .map(Millis)
        .unwrap_or(Millis::ZERO)
}

fn visit<F>(e: &mut Element, parent: &mut Option<Orchestrator>, f: &mut F)
where
    F: FnMut(&mut Element, StaggerSlot),
{
    let Some(name) = reveal_preset(e) else {
        for child in e.children.iter_mut().filter_map(Node::as_element_mut) {
            visit(child, parent, f);
        }
        return;
    };

    let preset = name.preset();
    let (base, depth) = match parent.as_mut() {
        Some(p) if !is_reveal_root(e) => (p.next_offset(), p.depth + 1),
        _ => (Millis::ZERO, 0),
    };
    let start = base
        .saturating_add(own_delay(e))
        .saturating_add(preset.transition.delay);

    f(
        e,
        StaggerSlot {
            preset: name,
            delay: start,
            depth,
        },
    );

    let mut me = Some(Orchestrator {
        transition: preset.transition,
        offset: start,
        depth,
        next_index: 0,
    });
    for child in e.children.iter_mut().filter_map(Node::as_element_mut) {
        visit(child, &mut me, f);
    }
}

/// Every reveal in `root`, in document order, with its computed offset.
pub fn schedule(root: &Element) -> Vec<StaggerSlot> {
    let mut scratch = root.clone();
    let mut out = Vec::new();
    visit(&mut scratch, &mut None, &mut |_, slot| out.push(slot));
    out
}

/// Write each non-zero offset into the element's inline style.
#[tracing::instrument(skip(root))]
pub fn apply(root: &mut Element) -> usize {
    let mut staggered = 0usize;
    visit(root, &mut None, &mut |e, slot| {
        if slot.delay > Millis::ZERO {
            e.push_style(DELAY_VAR, slot.delay.css());
            staggered += 1;
        }
    });
    tracing::debug!(staggered, "stagger offsets applied");
    staggered
}

#[cfg(test)]
#[path = "../../tests/unit/motion/stagger.rs"]
mod tests;
