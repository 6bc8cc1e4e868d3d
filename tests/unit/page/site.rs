use super::*;
use crate::{content::data, page::node::Node};

#[test]
fn sections_follow_page_order() {
    let site = compose(&data::builtin()).unwrap();
    assert_eq!(site.section_ids(), SECTION_ORDER);
    assert!(site.root.has_class("scroll-container"));
    assert!(site.section("contact").is_some());
    assert!(site.section("about").is_none());
}

#[test]
fn composition_writes_stagger_offsets() {
    let site = compose(&data::builtin()).unwrap();
    let hero = Node::from(site.section("hero").unwrap().clone());
    let buttons = hero.find_all(|e| e.has_class("button"));
    let styles: Vec<_> = buttons.iter().filter_map(|b| b.get_attr("style")).collect();
    // hero column children at 200/300/400/500, action row children 200/300 later
    assert_eq!(styles, ["--motion-delay: 700ms;", "--motion-delay: 800ms;"]);
}

#[test]
fn invalid_content_is_rejected_before_composition() {
    let mut content = data::builtin();
    content.profile.email = "nobody".to_owned();
    assert!(compose(&content).is_err());
}

#[test]
fn composition_is_deterministic() {
    let a = compose(&data::builtin()).unwrap();
    let b = compose(&data::builtin()).unwrap();
    assert_eq!(a, b);
}
