use super::*;
use crate::page::section::{SectionFrame, SectionVariant};

fn section(id: &str) -> Element {
    SectionFrame::new(id, SectionVariant::Default).render().unwrap()
}

#[test]
fn sections_stay_mounted_in_order() {
    let main = ScrollContainer::new()
        .section(section("a"))
        .section(section("b"))
        .render()
        .unwrap();
    assert_eq!(main.tag, "main");
    let ids: Vec<_> = main
        .element_children()
        .filter_map(|e| e.get_attr("id"))
        .collect();
    assert_eq!(ids, ["a", "b"]);
}

#[test]
fn empty_or_duplicate_sections_are_rejected() {
    assert!(ScrollContainer::new().render().is_err());
    let dup = ScrollContainer::new().section(section("a")).section(section("a"));
    assert_eq!(dup.len(), 2);
    assert!(dup.render().is_err());
}
