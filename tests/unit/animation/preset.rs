use super::*;

#[test]
fn catalogue_is_valid_and_complete() {
    let presets = catalogue();
    assert_eq!(presets.len(), PresetName::ALL.len());
    for p in &presets {
        p.validate().unwrap_or_else(|e| panic!("{}: {e}", p.name));
    }
}

#[test]
fn fade_in_up_matches_reveal_values() {
    let p = PresetName::FadeInUp.preset();
    assert_eq!(p.kind.state_names(), ("hidden", "visible"));
    assert_eq!(p.from, VisualState::default().opacity(0.0).y(60.0));
    assert_eq!(p.to, VisualState::default().opacity(1.0).y(0.0));
    assert_eq!(p.transition.duration, Millis(600));
    assert_eq!(p.transition.ease, Ease::EaseOut);
}

#[test]
fn sampling_runs_from_hidden_to_visible() {
    let p = PresetName::FadeInUp.preset();
    assert_eq!(p.sample(Millis(0)).unwrap(), p.from);
    let mid = p.sample(Millis(300)).unwrap();
    let o = mid.opacity.unwrap();
    assert!(o > 0.5 && o < 1.0, "ease-out is past half at the midpoint: {o}");
    assert_eq!(p.sample(Millis(600)).unwrap(), p.to);
    assert_eq!(p.sample(Millis(5000)).unwrap(), p.to);
}

#[test]
fn delayed_transition_holds_initial_state() {
    let mut p = PresetName::ScaleIn.preset();
    p.transition.delay = Millis(200);
    assert_eq!(p.sample(Millis(150)).unwrap(), p.from);
    assert_eq!(p.sample(Millis(700)).unwrap(), p.to);
    assert_eq!(p.transition.total(), Millis(700));
}

#[test]
fn stagger_containers_propagate_child_delays_in_order() {
    let t = PresetName::StaggerContainer.preset().transition;
    assert!(t.is_orchestrating());
    let delays: Vec<_> = (0..4).map(|i| t.child_delay(i)).collect();
    assert_eq!(delays, vec![Millis(200), Millis(300), Millis(400), Millis(500)]);

    let fast = PresetName::StaggerContainerFast.preset().transition;
    assert_eq!(fast.child_delay(2), Millis(200));

    let item = PresetName::StaggerItem.preset().transition;
    assert!(!item.is_orchestrating());
    assert_eq!(item.child_delay(3), Millis::ZERO);
}

#[test]
fn pop_in_uses_spring_timing() {
    let p = PresetName::PopIn.preset();
    let spring = p.transition.spring.expect("popIn is a spring");
    assert_eq!(spring, Spring::new(300.0, 20.0));
    assert!(p.transition.css_timing().starts_with("linear("));

    let settled = p.sample(p.transition.total()).unwrap();
    assert!((settled.scale.unwrap() - 1.0).abs() <= 0.005);
}

#[test]
fn pulse_loops_through_peak() {
    let p = PresetName::Pulse.preset();
    assert_eq!(p.kind, PresetKind::Loop);
    assert_eq!(p.sample(Millis(1000)).unwrap().scale, Some(1.05));
    assert_eq!(p.sample(Millis(3000)).unwrap().scale, Some(1.05));
}

#[test]
fn hint_reveal_rises_twenty_pixels() {
    let p = PresetName::HintReveal.preset();
    assert_eq!(p.kind, PresetKind::Reveal);
    assert_eq!(p.from, VisualState::default().opacity(0.0).y(20.0));
    assert_eq!(p.to, VisualState::default().opacity(1.0).y(0.0));
    assert_eq!(p.transition.duration, Millis(600));
}

#[test]
fn scroll_wheel_dims_and_drops_at_midpoint() {
    let p = PresetName::ScrollWheel.preset();
    assert_eq!(p.kind, PresetKind::Loop);
    assert!(p.transition.repeat_forever);
    let mid = p.sample(Millis(750)).unwrap();
    assert_eq!(mid.opacity, Some(0.3));
    assert_eq!(mid.y, Some(4.0));
    assert_eq!(p.sample(Millis(1500)).unwrap().opacity, Some(1.0));
}

#[test]
fn only_card_overlays_follow_hover_groups() {
    let grouped: Vec<_> = PresetName::ALL
        .into_iter()
        .filter(|n| n.preset().group)
        .collect();
    assert_eq!(grouped, [PresetName::CardHover, PresetName::GlowHover]);
    assert!(!PresetName::IconHover.preset().group);
    assert!(!PresetName::ButtonHover.preset().group);
}

#[test]
fn hover_presets_carry_pressed_state_only_when_declared() {
    let button = PresetName::ButtonHover.preset();
    assert_eq!(button.kind.state_names(), ("rest", "hover"));
    assert_eq!(button.pressed, Some(VisualState::default().scale(0.98)));
    assert!(PresetName::CardHover.preset().pressed.is_none());
}

#[test]
fn validate_rejects_bad_states() {
    let mut p = PresetName::FadeInUp.preset();
    p.to.opacity = Some(1.5);
    assert!(p.validate().is_err());

    let mut p = PresetName::FadeInUp.preset();
    p.transition.duration = Millis(0);
    assert!(p.validate().is_err());

    let mut p = PresetName::FadeInUp.preset();
    p.transition.repeat_forever = true;
    assert!(p.validate().is_err());

    let mut p = PresetName::FadeInUp.preset();
    p.pressed = Some(VisualState::default().scale(0.9));
    assert!(p.validate().is_err());

    let mut p = PresetName::FadeInUp.preset();
    p.group = true;
    assert!(p.validate().is_err());
}

#[test]
fn css_declarations_are_ordered() {
    let s = VisualState::default()
        .opacity(0.0)
        .y(20.0)
        .scale(0.95)
        .box_shadow(30.0, palette::CYBER.with_alpha(0.15));
    let decls = s.css_declarations();
    let names: Vec<_> = decls.iter().map(|(k, _)| *k).collect();
    assert_eq!(names, vec!["opacity", "transform", "box-shadow"]);
    assert_eq!(decls[1].1, "translate(0px, 20px) scale(0.95)");
}

#[test]
fn preset_names_serialize_camel_case() {
    assert_eq!(
        serde_json::to_string(&PresetName::StaggerContainerFast).unwrap(),
        "\"staggerContainerFast\""
    );
    for name in PresetName::ALL {
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, format!("\"{}\"", name.as_str()));
    }
}

#[test]
fn names_parse_back_from_their_identifier() {
    for name in PresetName::ALL {
        assert_eq!(name.as_str().parse::<PresetName>().unwrap(), name);
    }
    assert!("bounce".parse::<PresetName>().is_err());
}
