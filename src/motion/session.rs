use crate::{
    foundation::{
        core::{Rect, Viewport},
        error::{FolioError, FolioResult},
    },
    motion::{
        scroll::SnapScroller,
        state::{RevealState, RevealToggle},
        stagger,
    },
    page::{section::ViewportTrigger, site::Site},
};

/// A section's reveal toggling, as observed after a scroll settles.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RevealEvent {
    /// Gesture number; 0 is the initial page load.
    pub step: usize,
    pub section: String,
    pub state: RevealState,
    /// Resting scroll offset when the change was observed.
    pub offset: f64,
    /// Reveal animations scheduled under the section.
    pub members: usize,
}

#[derive(Clone, Debug)]
struct SectionWatch {
    id: String,
    toggle: RevealToggle,
    members: usize,
}

/// Drives the snap scroller over a composed site and tracks every section's
/// reveal toggle.
#[derive(Clone, Debug)]
pub struct ScrollSession {
    scroller: SnapScroller,
    sections: Vec<SectionWatch>,
    step: usize,
    events: Vec<RevealEvent>,
}

impl ScrollSession {
    pub fn new(site: &Site, viewport: Viewport) -> FolioResult<Self> {
        let mut sections = Vec::new();
        for section in site.sections() {
            let id = section.get_attr("id").unwrap_or_default().to_owned();
            let trigger = section
                .element_children()
                .find_map(ViewportTrigger::from_element)
                .ok_or_else(|| {
                    FolioError::composition(format!("section '{id}' has no reveal trigger"))
                })?;
            sections.push(SectionWatch {
                id,
                toggle: RevealToggle::new(trigger),
                members: stagger::schedule(section).len(),
            });
        }

        let mut session = Self {
            scroller: SnapScroller::new(viewport, sections.len())?,
            sections,
            step: 0,
            events: Vec::new(),
        };
        session.observe();
        Ok(session)
    }

    pub fn offset(&self) -> f64 {
        self.scroller.offset()
    }

    /// Id of the section aligned with the viewport.
    pub fn current_section(&self) -> &str {
        &self.sections[self.scroller.index()].id
    }

    pub fn events(&self) -> &[RevealEvent] {
        &self.events
    }

    pub fn state(&self, id: &str) -> Option<RevealState> {
        self.watch(id).map(|w| w.toggle.state())
    }

    pub fn reveal_count(&self, id: &str) -> Option<u32> {
        self.watch(id).map(|w| w.toggle.reveal_count())
    }

    fn watch(&self, id: &str) -> Option<&SectionWatch> {
        self.sections.iter().find(|w| w.id == id)
    }

    /// Apply one scroll gesture; returns the events it caused.
    pub fn scroll(&mut self, delta: f64) -> &[RevealEvent] {
        self.step += 1;
        let offset = self.scroller.gesture(delta);
        tracing::debug!(step = self.step, delta, offset, "gesture settled");
        self.observe()
    }

    /// Follow an in-page anchor to the section `id`.
    pub fn jump_to(&mut self, id: &str) -> FolioResult<&[RevealEvent]> {
        let index = self
            .sections
            .iter()
            .position(|w| w.id == id)
            .ok_or_else(|| FolioError::validation(format!("no section '{id}'")))?;
        self.step += 1;
        self.scroller.scroll_to(index)?;
        Ok(self.observe())
    }

    fn observe(&mut self) -> &[RevealEvent] {
        let viewport = self.scroller.viewport();
        let view = viewport.rect_at(self.scroller.offset());
        let width = f64::from(viewport.width);
        let start = self.events.len();

        for (i, watch) in self.sections.iter_mut().enumerate() {
            let top = self.scroller.snap_point(i);
            let rect = Rect::new(0.0, top, width, top + f64::from(viewport.height));
            if let Some(state) = watch.toggle.observe_rect(rect, view) {
                tracing::info!(section = %watch.id, ?state, "reveal toggled");
                self.events.push(RevealEvent {
                    step: self.step,
                    section: watch.id.clone(),
                    state,
                    offset: self.scroller.offset(),
                    members: watch.members,
                });
            }
        }
        &self.events[start..]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/session.rs"]
mod tests;
