use super::*;
use crate::{content::data, page::node::Node};

#[test]
fn kind_badge_is_a_function_of_the_tag() {
    let tool = kind_badge(CyberProjectKind::Tool);
    assert_eq!(tool.text_content(), "Tool");
    assert_eq!(tool.get_attr("data-kind"), Some("tool"));
    assert_eq!(tool, kind_badge(CyberProjectKind::Tool));

    let full = kind_badge(DevProjectKind::Fullstack);
    assert_eq!(full.text_content(), "Full Stack");
    assert!(full.get_attr("style").unwrap().contains("--badge-fg: #00ff9d;"));
}

#[test]
fn skill_card_shows_name_and_level() {
    let card = skill_card(&SkillEntry::leveled("Nmap", SkillLevel::Proficient));
    assert!(card.has_class("hover-group"));
    assert_eq!(card.get_attr("data-motion"), Some("staggerItem"));
    assert_eq!(card.text_content(), "Nmapproficient");

    let node = Node::from(card);
    let glow = node.find(|e| e.has_class("skill-card__glow")).unwrap();
    assert_eq!(glow.get_attr("data-hover"), Some("glowHover"));
}

#[test]
fn empty_category_renders_header_and_empty_list() {
    let category = SkillCategory {
        name: "Empty".to_owned(),
        icon: "∅".to_owned(),
        accent: None,
        skills: Vec::new(),
    };
    let node = Node::from(category_card(&category, SectionVariant::Cyber, |s, _| skill_card(s)));

    let header = node.find(|e| e.has_class("category__name")).unwrap();
    assert_eq!(header.text_content(), "Empty");
    let list = node.find(|e| e.has_class("category__list")).unwrap();
    assert!(list.children.is_empty());
}

#[test]
fn chips_take_the_category_accent() {
    let category = &data::dev_skills()[2];
    let node = Node::from(category_card(category, SectionVariant::Dev, skill_chip));
    let chips = node.find_all(|e| e.has_class("skill-chip"));
    assert_eq!(chips.len(), category.skills.len());
    for chip in chips {
        assert!(chip.get_attr("style").unwrap().contains("--accent: #ff9d00;"));
        assert_eq!(chip.get_attr("data-hover"), Some("chipHover"));
    }
}

#[test]
fn report_links_use_the_document_icon() {
    let projects = data::cyber_projects();
    let report = Node::from(cyber_project_card(&projects[2]));
    assert!(report.find(|e| e.has_class("icon--file-text")).is_some());
    assert!(report.find(|e| e.has_class("icon--external-link")).is_none());

    let writeup = Node::from(cyber_project_card(&projects[0]));
    let links = writeup.find_all(|e| e.tag == "a");
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].get_attr("aria-label"), Some("GitHub"));
}

#[test]
fn cyber_cards_show_every_tag_dev_cards_three() {
    let cyber = &data::cyber_projects()[0];
    let node = Node::from(cyber_project_card(cyber));
    assert_eq!(node.find_all(|e| e.has_class("tag")).len(), 4);

    let dev = &data::dev_projects()[0];
    let node = Node::from(dev_project_card(dev, 0));
    let tags: Vec<_> = node
        .find_all(|e| e.has_class("tag"))
        .into_iter()
        .map(|e| e.text_content())
        .collect();
    assert_eq!(tags, ["React", "TypeScript", "Tailwind"]);
}

#[test]
fn dev_banner_alternates_with_index_parity() {
    let dev = &data::dev_projects()[1];
    let banner = |i| {
        let node = Node::from(dev_project_card(dev, i));
        node.find(|e| e.has_class("project__banner")).unwrap().clone()
    };
    assert_eq!(banner(0).get_attr("data-parity"), Some("even"));
    assert_eq!(banner(1).get_attr("data-parity"), Some("odd"));
    assert_ne!(banner(0).get_attr("style"), banner(1).get_attr("style"));
    assert_eq!(banner(0).get_attr("style"), banner(2).get_attr("style"));
    assert_eq!(banner(0).text_content(), "🚀");
}

#[test]
fn social_card_opens_in_a_new_context() {
    let github = &data::social_links()[0];
    let card = social_card(github);
    assert_eq!(card.tag, "a");
    assert_eq!(card.get_attr("href"), Some("https://github.com/mouadboudhar"));
    assert_eq!(card.get_attr("target"), Some("_blank"));
    assert_eq!(card.get_attr("rel"), Some("noopener noreferrer"));
    assert_eq!(card.text_content(), "GitHub@mouadboudhar");
}

#[test]
fn tag_list_limit_larger_than_tags_is_fine() {
    let tags = vec!["a".to_owned()];
    assert_eq!(tag_list(&tags, Some(3)).children.len(), 1);
    assert_eq!(tag_list(&tags, Some(0)).children.len(), 0);
}
