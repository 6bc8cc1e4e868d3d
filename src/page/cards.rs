//! Pure renderers from one content entry to a markup subtree.
//!
//! Hover presets that should react to the whole card sit on an overlay inside
//! a `.hover-group` element, so hovering anywhere on the card drives them.

use crate::{
    animation::preset::PresetName,
    content::model::{
        CyberProjectKind, DevProjectKind, Icon, ProjectEntry, ProjectKind, SkillCategory,
        SkillEntry, SkillLevel, SocialLink,
    },
    foundation::color::{Rgba8, palette},
    page::{
        node::{Element, el},
        section::{SectionVariant, ViewportTrigger},
    },
};

/// Development project cards only show this many tags.
pub const DEV_CARD_TAG_LIMIT: usize = 3;

/// Visible fraction at which a skill or social list starts its stagger.
pub const LIST_REVEAL_AMOUNT: f64 = 0.3;

/// Icon placeholder; artwork is supplied by the stylesheet.
pub fn icon(icon: Icon) -> Element {
    el("span")
        .class("icon")
        .class(&format!("icon--{}", icon.slug()))
        .attr("aria-hidden", "true")
}

fn badge(class: &str, label: &str, color: Rgba8) -> Element {
    el("span")
        .class("badge")
        .class(class)
        .style("--badge-fg", color.css())
        .style("--badge-bg", color.with_alpha(0.2).css())
        .style("--badge-border", color.with_alpha(0.3).css())
        .text(label)
}

pub fn level_badge(level: SkillLevel) -> Element {
    badge("badge--level", level.label(), level.color()).attr("data-level", level.label())
}

/// Project type badge; label and colour depend only on `kind`.
pub fn kind_badge<K: ProjectKind>(kind: K) -> Element {
    badge("badge--kind", kind.label(), kind.color()).attr("data-kind", kind.slug())
}

/// Security skill row: name plus level badge, glowing on hover.
pub fn skill_card(skill: &SkillEntry) -> Element {
    let card = el("div")
        .class("skill-card hover-group")
        .motion(PresetName::StaggerItem)
        .child(
            el("div")
                .class("skill-card__glow")
                .attr("aria-hidden", "true")
                .hover(PresetName::GlowHover),
        )
        .child(el("span").class("skill-card__name").text(&skill.name));
    match skill.level {
        Some(level) => card.child(level_badge(level)),
        None => card,
    }
}

/// Development skill chip; its border takes `accent` on hover.
pub fn skill_chip(skill: &SkillEntry, accent: Rgba8) -> Element {
    el("div")
        .class("skill-chip")
        .motion(PresetName::PopIn)
        .hover(PresetName::ChipHover)
        .style("--accent", accent.css())
        .child(el("div").class("skill-chip__glow").attr("aria-hidden", "true"))
        .child(el("span").class("skill-chip__name").text(&skill.name))
}

/// Category header plus its entry list. An empty category renders an empty list.
pub fn category_card<F>(category: &SkillCategory, variant: SectionVariant, entry: F) -> Element
where
    F: Fn(&SkillEntry, Rgba8) -> Element,
{
    let accent = category
        .accent
        .unwrap_or_else(|| variant.accent_or_default());

    let header = el("div")
        .class("category__header")
        .child(el("span").class("category__icon").text(&category.icon))
        .child(el("h3").class("category__name").text(&category.name))
        .child(
            el("div")
                .class("category__rule")
                .attr("aria-hidden", "true")
                .style("--accent", accent.with_alpha(0.3).css()),
        );

    let list = ViewportTrigger::new(LIST_REVEAL_AMOUNT).apply(
        el("div")
            .class("category__list")
            .class(&format!("category__list--{}", variant.slug()))
            .motion(PresetName::StaggerContainer)
            .children(category.skills.iter().map(|s| entry(s, accent))),
    );

    el("div")
        .class("category")
        .motion(PresetName::FadeInUp)
        .attr("data-category", &category.name)
        .child(header)
        .child(list)
}

fn icon_link(href: &str, glyph: Icon) -> Element {
    el("a")
        .class("icon-link")
        .attr("href", href)
        .attr("aria-label", glyph.label())
        .hover(PresetName::IconHover)
        .child(icon(glyph))
}

/// Tag pills, optionally truncated to the first `limit`.
pub fn tag_list(tags: &[String], limit: Option<usize>) -> Element {
    let shown = limit.unwrap_or(tags.len()).min(tags.len());
    el("div")
        .class("tags")
        .children(tags[..shown].iter().map(|t| el("span").class("tag").text(t)))
}

fn project_actions<K: ProjectKind>(project: &ProjectEntry<K>, link_icon: Icon) -> Element {
    let mut actions = el("div").class("project__actions");
    if let Some(repo) = &project.repo {
        actions = actions.child(icon_link(repo, Icon::Github));
    }
    if let Some(link) = &project.link {
        actions = actions.child(icon_link(link, link_icon));
    }
    actions
}

/// Full security project card with every tag.
pub fn cyber_project_card(project: &ProjectEntry<CyberProjectKind>) -> Element {
    let link_icon = match project.kind {
        CyberProjectKind::Report => Icon::FileText,
        _ => Icon::ExternalLink,
    };

    let body = el("div")
        .class("project__body")
        .child(
            el("div")
                .class("project__header")
                .child(kind_badge(project.kind))
                .child(project_actions(project, link_icon)),
        )
        .child(el("h3").class("project__title").text(&project.title))
        .child(el("p").class("project__description").text(&project.description))
        .child(tag_list(&project.tags, None));

    el("article")
        .class("project project--cyber hover-group")
        .motion(PresetName::StaggerItem)
        .attr("data-kind", project.kind.slug())
        .child(
            el("div")
                .class("project__glow")
                .attr("aria-hidden", "true")
                .hover(PresetName::CardHover),
        )
        .child(body)
        .child(el("div").class("project__corner").attr("aria-hidden", "true"))
}

/// Compact development project card. The header gradient alternates with
/// the parity of `index`.
pub fn dev_project_card(project: &ProjectEntry<DevProjectKind>, index: usize) -> Element {
    let (from, to) = if index % 2 == 0 {
        (palette::DEV, palette::CYBER)
    } else {
        (palette::CYBER, palette::DEV)
    };

    let header = el("div")
        .class("project__banner")
        .attr("data-parity", if index % 2 == 0 { "even" } else { "odd" })
        .style(
            "background",
            format!(
                "linear-gradient(to bottom right, {}, {}, {})",
                from.with_alpha(0.1).css(),
                palette::SURFACE.css(),
                to.with_alpha(0.05).css()
            ),
        )
        .child(el("span").class("project__glyph").text(project.kind.glyph()))
        .child(project_actions(project, Icon::ExternalLink));

    let body = el("div")
        .class("project__body")
        .child(
            el("div")
                .class("project__header")
                .child(el("h3").class("project__title").text(&project.title))
                .child(kind_badge(project.kind)),
        )
        .child(el("p").class("project__description").text(&project.description))
        .child(tag_list(&project.tags, Some(DEV_CARD_TAG_LIMIT)));

    el("article")
        .class("project project--dev hover-group")
        .motion(PresetName::StaggerItem)
        .attr("data-kind", project.kind.slug())
        .child(
            el("div")
                .class("project__glow")
                .attr("aria-hidden", "true")
                .hover(PresetName::CardHover),
        )
        .child(header)
        .child(body)
}

/// Social link card opening in a new browsing context.
pub fn social_card(link: &SocialLink) -> Element {
    el("a")
        .class("social-card")
        .attr("href", &link.url)
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
        .motion(PresetName::PopIn)
        .hover(PresetName::ButtonHover)
        .style("--accent", link.color.css())
        .child(el("div").class("social-card__glow").attr("aria-hidden", "true"))
        .child(el("div").class("social-card__icon").child(icon(link.icon)))
        .child(el("span").class("social-card__platform").text(&link.platform))
        .child(el("span").class("social-card__handle").text(&link.handle))
}

#[cfg(test)]
#[path = "../../tests/unit/page/cards.rs"]
mod tests;
