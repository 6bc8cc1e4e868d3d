use crate::{
    foundation::error::{FolioError, FolioResult},
    page::node::{Element, el},
};

/// The single scrollable region: vertical, mandatory snap at every section
/// start, all sections mounted.
#[derive(Clone, Debug, Default)]
pub struct ScrollContainer {
    sections: Vec<Element>,
}

impl ScrollContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(mut self, section: Element) -> Self {
        self.sections.push(section);
        self
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn render(self) -> FolioResult<Element> {
        if self.sections.is_empty() {
            return Err(FolioError::composition("scroll container has no sections"));
        }
        let mut seen = std::collections::HashSet::new();
        for s in &self.sections {
            let id = s.get_attr("id").unwrap_or_default();
            if !seen.insert(id.to_owned()) {
                return Err(FolioError::composition(format!(
                    "duplicate section id '{id}'"
                )));
            }
        }

        Ok(el("main")
            .class("scroll-container")
            .attr("data-snap", "y mandatory")
            .children(self.sections))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/scroll.rs"]
mod tests;
