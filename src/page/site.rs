use crate::{
    content::model::Content,
    foundation::error::FolioResult,
    motion::stagger,
    page::{node::Element, scroll::ScrollContainer, sections},
};

/// Section ids in page order.
pub const SECTION_ORDER: [&str; 6] = [
    "hero",
    "cyber-skills",
    "cyber-projects",
    "dev-skills",
    "dev-projects",
    "contact",
];

/// The composed page: a scroll container holding every section.
#[derive(Clone, Debug, PartialEq)]
pub struct Site {
    pub root: Element,
}

impl Site {
    pub fn sections(&self) -> impl Iterator<Item = &Element> {
        self.root.element_children()
    }

    pub fn section_ids(&self) -> Vec<&str> {
        self.sections().filter_map(|s| s.get_attr("id")).collect()
    }

    pub fn section(&self, id: &str) -> Option<&Element> {
        self.sections().find(|s| s.get_attr("id") == Some(id))
    }
}

/// Compose the full page from `content`.
#[tracing::instrument(skip(content))]
pub fn compose(content: &Content) -> FolioResult<Site> {
    content.validate()?;

    let mut root = ScrollContainer::new()
        .section(sections::hero(&content.profile)?)
        .section(sections::cyber_skills(content)?)
        .section(sections::cyber_projects(content)?)
        .section(sections::dev_skills(content)?)
        .section(sections::dev_projects(content)?)
        .section(sections::contact(content)?)
        .render()?;

    let staggered = stagger::apply(&mut root);
    tracing::debug!(sections = SECTION_ORDER.len(), staggered, "site composed");
    Ok(Site { root })
}

#[cfg(test)]
#[path = "../../tests/unit/page/site.rs"]
mod tests;
