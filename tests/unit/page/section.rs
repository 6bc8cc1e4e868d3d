use super::*;

#[test]
fn variant_gradients_come_from_the_accent_table() {
    assert_eq!(
        SectionVariant::Cyber.gradient(),
        "linear-gradient(to bottom, rgba(0, 255, 157, 0.051), transparent, transparent)"
    );
    assert!(SectionVariant::Dev.gradient().contains("rgba(0, 212, 255, 0.051)"));
    assert_eq!(SectionVariant::Default.accent(), None);
    assert_eq!(SectionVariant::default(), SectionVariant::Default);
}

#[test]
fn frame_wraps_children_in_reveal_content() {
    let section = SectionFrame::new("cyber-skills", SectionVariant::Cyber)
        .child(el("h2").text("Skills"))
        .render()
        .unwrap();

    assert_eq!(section.tag, "section");
    assert_eq!(section.get_attr("id"), Some("cyber-skills"));
    assert!(section.has_class("section--cyber"));

    let parts: Vec<_> = section.element_children().collect();
    assert_eq!(parts.len(), 2);
    assert!(parts[0].has_class("section__tint"));

    let content = parts[1];
    assert_eq!(content.get_attr("data-motion"), Some("sectionReveal"));
    assert_eq!(
        ViewportTrigger::from_element(content),
        Some(ViewportTrigger::section())
    );
    assert_eq!(content.text_content(), "Skills");
}

#[test]
fn blank_ids_are_rejected() {
    assert!(SectionFrame::new("  ", SectionVariant::Dev).render().is_err());
    assert!(SectionFrame::new("two words", SectionVariant::Dev).render().is_err());
}

#[test]
fn trigger_amount_must_be_a_fraction() {
    assert!(ViewportTrigger::new(0.0).validate().is_err());
    assert!(ViewportTrigger::new(1.2).validate().is_err());
    ViewportTrigger::new(1.0).validate().unwrap();

    let mut frame = SectionFrame::new("x", SectionVariant::Default);
    frame.reveal.amount = 0.0;
    assert!(frame.render().is_err());
}

#[test]
fn trigger_attributes_roundtrip() {
    let t = ViewportTrigger {
        amount: 0.2,
        once: true,
        margin_px: 0.0,
    };
    let e = t.apply(el("div"));
    assert_eq!(e.get_attr("data-reveal-margin"), None);
    assert_eq!(ViewportTrigger::from_element(&e), Some(t));
}

#[test]
fn mount_roots_are_reveal_roots() {
    let e = reveal_on_mount(el("div"));
    assert!(is_mount_root(&e));
    assert!(is_reveal_root(&e));
    assert!(is_reveal_root(&ViewportTrigger::new(0.5).apply(el("div"))));
    assert!(!is_reveal_root(&el("div")));
}
