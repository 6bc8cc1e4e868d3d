use super::*;
use crate::{content::data, page::node::Node};

#[test]
fn hero_carries_profile_and_scroll_hint() {
    let profile = data::profile();
    let hero = Node::from(hero(&profile).unwrap());

    let text = hero.text_content();
    assert!(text.contains("guest@portfolio"));
    assert!(text.contains("Mouad Boudhar"));
    assert!(text.contains("Cybersecurity Pentester & Full Stack Developer"));

    let hint = hero.find(|e| e.has_class("scroll-hint")).unwrap();
    assert_eq!(hint.get_attr("data-reveal-on"), Some("mount"));
    assert_eq!(hint.get_attr("data-delay"), Some("1500"));
    assert_eq!(hint.get_attr("data-motion"), Some("hintReveal"));
    let wheel = hero.find(|e| e.has_class("scroll-hint__wheel")).unwrap();
    assert_eq!(wheel.get_attr("data-motion"), Some("scrollWheel"));

    let hrefs: Vec<_> = hero
        .find_all(|e| e.has_class("button"))
        .into_iter()
        .filter_map(|e| e.get_attr("href"))
        .collect();
    assert_eq!(hrefs, ["#cyber-skills", "#contact"]);
}

#[test]
fn skill_sections_render_every_category_in_order() {
    let content = data::builtin();

    let cyber = Node::from(cyber_skills(&content).unwrap());
    let names: Vec<_> = cyber
        .find_all(|e| e.has_class("category"))
        .into_iter()
        .filter_map(|e| e.get_attr("data-category"))
        .collect();
    let expected: Vec<_> = content.cyber_skills.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, expected);
    assert_eq!(cyber.find_all(|e| e.has_class("skill-card")).len(), 16);

    let dev = Node::from(dev_skills(&content).unwrap());
    assert_eq!(dev.find_all(|e| e.has_class("category")).len(), 5);
    assert_eq!(dev.find_all(|e| e.has_class("skill-chip")).len(), 30);
    assert!(dev.text_content().contains("\"description\": \"Full Stack Developer Toolkit\""));
}

#[test]
fn project_sections_keep_declaration_order() {
    let content = data::builtin();
    let titles = |section: Element| -> Vec<String> {
        Node::from(section)
            .find_all(|e| e.has_class("project__title"))
            .into_iter()
            .map(|e| e.text_content())
            .collect()
    };

    let cyber: Vec<_> = content.cyber_projects.iter().map(|p| p.title.clone()).collect();
    assert_eq!(titles(cyber_projects(&content).unwrap()), cyber);

    let dev: Vec<_> = content.dev_projects.iter().map(|p| p.title.clone()).collect();
    assert_eq!(titles(dev_projects(&content).unwrap()), dev);
}

#[test]
fn contact_has_one_mailto_and_every_social_link() {
    let content = data::builtin();
    let contact = Node::from(contact(&content).unwrap());

    let mailtos = contact.find_all(|e| {
        e.get_attr("href")
            .is_some_and(|h| h.starts_with("mailto:"))
    });
    assert_eq!(mailtos.len(), 1);
    assert_eq!(mailtos[0].get_attr("href"), Some("mailto:mouadboudhar4@gmail.com"));

    let socials: Vec<_> = contact
        .find_all(|e| e.has_class("social-card"))
        .into_iter()
        .filter_map(|e| e.get_attr("href"))
        .collect();
    let urls: Vec<_> = content.social.iter().map(|s| s.url.as_str()).collect();
    assert_eq!(socials, urls);

    assert!(contact.text_content().contains("2025 Mouad Boudhar."));
}

#[test]
fn sections_use_their_zone_variant() {
    let content = data::builtin();
    assert!(cyber_skills(&content).unwrap().has_class("section--cyber"));
    assert!(dev_projects(&content).unwrap().has_class("section--dev"));
    assert!(contact(&content).unwrap().has_class("section--default"));
    assert!(hero(&content.profile).unwrap().has_class("section--overflow"));
}
