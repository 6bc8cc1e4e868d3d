use super::*;
use crate::page::{
    node::el,
    section::{ViewportTrigger, reveal_on_mount},
};

fn container(items: usize) -> Element {
    ViewportTrigger::new(0.3).apply(
        el("ul")
            .motion(PresetName::StaggerContainer)
            .children((0..items).map(|_| el("li").motion(PresetName::StaggerItem))),
    )
}

#[test]
fn children_start_at_delay_plus_index_times_stagger() {
    let slots = schedule(&container(4));
    let delays: Vec<u64> = slots.iter().map(|s| s.delay.0).collect();
    assert_eq!(delays, [0, 200, 300, 400, 500]);
    assert_eq!(slots[0].depth, 0);
    assert!(slots[1..].iter().all(|s| s.depth == 1));
}

#[test]
fn fast_container_uses_its_own_timing() {
    let root = el("div")
        .motion(PresetName::StaggerContainerFast)
        .children((0..3).map(|_| el("span").motion(PresetName::PopIn)));
    let delays: Vec<u64> = schedule(&root).iter().map(|s| s.delay.0).collect();
    assert_eq!(delays, [0, 100, 150, 200]);
}

#[test]
fn plain_wrappers_are_transparent_and_offsets_accumulate() {
    let inner = el("div")
        .motion(PresetName::StaggerContainer)
        .child(el("p").motion(PresetName::FadeInUp));
    let root = el("section").motion(PresetName::StaggerContainer).child(
        el("div")
            .child(el("h2").motion(PresetName::FadeInUp))
            .child(inner),
    );
    let delays: Vec<u64> = schedule(&root).iter().map(|s| s.delay.0).collect();
    // h2 is child 0, inner child 1 at 300, its paragraph at 300 + 200
    assert_eq!(delays, [0, 200, 300, 500]);
}

#[test]
fn nested_roots_restart_at_zero() {
    let root = el("div")
        .motion(PresetName::StaggerContainer)
        .child(el("h2").motion(PresetName::FadeInUp))
        .child(container(1));
    let delays: Vec<u64> = schedule(&root).iter().map(|s| s.delay.0).collect();
    assert_eq!(delays, [0, 200, 0, 200]);
}

#[test]
fn hover_and_loop_presets_are_ignored() {
    let root = el("div")
        .motion(PresetName::StaggerContainer)
        .child(el("span").motion(PresetName::Pulse))
        .child(el("a").hover(PresetName::ButtonHover))
        .child(el("p").motion(PresetName::FadeInUp));
    let slots = schedule(&root);
    assert_eq!(slots.len(), 2);
    assert_eq!(slots[1].delay, Millis(200));
}

#[test]
fn explicit_delay_adds_to_the_inherited_offset() {
    let hint = reveal_on_mount(el("div").motion(PresetName::HeaderReveal).delay(Millis(1500)));
    assert_eq!(schedule(&hint)[0].delay, Millis(1500));
}

#[test]
fn apply_writes_only_non_zero_offsets() {
    let mut root = container(2);
    assert_eq!(apply(&mut root), 2);
    assert_eq!(root.get_attr("style"), None);
    let styles: Vec<_> = root
        .element_children()
        .map(|e| e.get_attr("style").unwrap_or_default().to_owned())
        .collect();
    assert_eq!(styles, ["--motion-delay: 200ms;", "--motion-delay: 300ms;"]);
}
