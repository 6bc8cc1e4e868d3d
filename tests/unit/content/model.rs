use super::*;
use crate::content::data;

#[test]
fn builtin_content_validates() {
    data::builtin().validate().unwrap();
}

#[test]
fn badge_label_is_a_function_of_the_tag() {
    assert_eq!(CyberProjectKind::Tool.label(), "Tool");
    assert_eq!(CyberProjectKind::Ctf.label(), "CTF");
    assert_eq!(DevProjectKind::Fullstack.label(), "Full Stack");
    assert_eq!(DevProjectKind::Api.label(), "API");
    assert_eq!(CyberProjectKind::Tool.color(), palette::CYBER);
    assert_eq!(DevProjectKind::Web.color(), palette::DEV);
}

#[test]
fn empty_names_are_rejected() {
    let mut content = data::builtin();
    content.cyber_skills[1].skills[2].name = "  ".to_owned();
    let err = content.validate().unwrap_err().to_string();
    assert!(err.contains("cyber_skills[1].skills[2]"), "{err}");

    let mut content = data::builtin();
    content.dev_projects[0].title.clear();
    assert!(content.validate().is_err());

    let mut content = data::builtin();
    content.social[3].platform.clear();
    assert!(content.validate().is_err());
}

#[test]
fn security_skills_require_a_level() {
    let mut content = data::builtin();
    content.cyber_skills[0].skills[0].level = None;
    assert!(content.validate().is_err());

    let mut content = data::builtin();
    content.dev_skills[0].skills[0].level = Some(SkillLevel::Learning);
    content.validate().unwrap();
}

#[test]
fn email_must_be_an_address() {
    let mut content = data::builtin();
    content.profile.email = "nobody".to_owned();
    assert!(content.validate().is_err());
}

#[test]
fn empty_category_is_valid() {
    let mut content = data::builtin();
    content.dev_skills[2].skills.clear();
    content.validate().unwrap();
}

#[test]
fn unknown_tags_fail_deserialization() {
    let json = r#"{"title":"x","description":"y","kind":"exploit","tags":[]}"#;
    assert!(serde_json::from_str::<ProjectEntry<CyberProjectKind>>(json).is_err());

    let json = r#"{"title":"x","description":"y","kind":"fullstack","tags":["a"]}"#;
    let p: ProjectEntry<DevProjectKind> = serde_json::from_str(json).unwrap();
    assert_eq!(p.kind, DevProjectKind::Fullstack);
    assert!(p.link.is_none() && p.repo.is_none());
}

#[test]
fn json_roundtrip_preserves_order() {
    let content = data::builtin();
    let s = content.to_json_pretty().unwrap();
    let de = Content::from_json_str(&s).unwrap();
    assert_eq!(de, content);
}

#[test]
fn profile_helpers() {
    let p = data::profile();
    assert_eq!(p.full_name(), "Mouad Boudhar");
    assert_eq!(p.mailto(), "mailto:mouadboudhar4@gmail.com");
}
