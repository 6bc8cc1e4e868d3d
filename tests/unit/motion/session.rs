use super::*;
use crate::{content::data, page::site::compose};

fn session() -> ScrollSession {
    let site = compose(&data::builtin()).unwrap();
    ScrollSession::new(&site, Viewport::default()).unwrap()
}

#[test]
fn load_reveals_only_the_hero() {
    let s = session();
    assert_eq!(s.current_section(), "hero");
    assert_eq!(s.events().len(), 1);
    assert_eq!(s.events()[0].section, "hero");
    assert_eq!(s.events()[0].state, RevealState::Visible);
    assert_eq!(s.state("contact"), Some(RevealState::Hidden));
}

#[test]
fn each_gesture_swaps_one_section() {
    let mut s = session();
    let events = s.scroll(5_000.0).to_vec();
    assert_eq!(s.offset(), 900.0);
    assert_eq!(s.current_section(), "cyber-skills");
    let changes: Vec<_> = events.iter().map(|e| (e.section.as_str(), e.state)).collect();
    assert_eq!(
        changes,
        [
            ("hero", RevealState::Hidden),
            ("cyber-skills", RevealState::Visible)
        ]
    );
    assert!(events.iter().all(|e| e.step == 1));
}

#[test]
fn returning_to_a_section_replays_its_reveal() {
    let mut s = session();
    s.scroll(900.0);
    s.scroll(-900.0);
    assert_eq!(s.current_section(), "hero");
    assert_eq!(s.reveal_count("hero"), Some(2));
    assert_eq!(s.reveal_count("cyber-skills"), Some(1));
}

#[test]
fn tiny_gestures_cause_no_events() {
    let mut s = session();
    assert!(s.scroll(100.0).is_empty());
    assert!(s.scroll(-3_000.0).is_empty());
}

#[test]
fn anchors_jump_directly() {
    let mut s = session();
    let events = s.jump_to("contact").unwrap().to_vec();
    assert_eq!(events.len(), 2);
    assert_eq!(s.offset(), 5.0 * 900.0);
    assert!(s.jump_to("nowhere").is_err());
}

#[test]
fn members_count_scheduled_reveals() {
    let s = session();
    // section frame, hero column and its four children, two buttons, scroll hint
    assert_eq!(s.events()[0].members, 9);
}
