use crate::foundation::{
    core::Viewport,
    error::{FolioError, FolioResult},
};

/// Headless model of the mandatory, one-section-per-gesture snap container.
///
/// Every section is exactly one viewport tall, so snap point `i` sits at
/// `i * viewport.height`. A gesture projects the resting offset by its
/// displacement, picks the nearest snap point, then clamps the move to one
/// section and to the ends of the page.
#[derive(Clone, Debug, PartialEq)]
pub struct SnapScroller {
    viewport: Viewport,
    sections: usize,
    index: usize,
}

impl SnapScroller {
    pub fn new(viewport: Viewport, sections: usize) -> FolioResult<Self> {
        if sections == 0 {
            return Err(FolioError::composition(
                "scroll container needs at least one section",
            ));
        }
        Ok(Self {
            viewport,
            sections,
            index: 0,
        })
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn sections(&self) -> usize {
        self.sections
    }

    /// Index of the section currently aligned with the viewport top.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Resting scroll offset in pixels.
    pub fn offset(&self) -> f64 {
        self.snap_point(self.index)
    }

    pub fn snap_point(&self, index: usize) -> f64 {
        index as f64 * f64::from(self.viewport.height)
    }

    pub fn snap_points(&self) -> Vec<f64> {
        (0..self.sections).map(|i| self.snap_point(i)).collect()
    }

    /// Settle a gesture of `delta` pixels (positive scrolls down) and return the
    /// new resting offset. The magnitude only matters up to the half-viewport
    /// needed to leave the current snap area.
    pub fn gesture(&mut self, delta: f64) -> f64 {
        if !delta.is_finite() {
            return self.offset();
        }
        let height = f64::from(self.viewport.height);
        let projected = self.offset() + delta;
        let nearest = (projected / height).round();

        let current = self.index as f64;
        let last = (self.sections - 1) as f64;
        let target = nearest.clamp(current - 1.0, current + 1.0).clamp(0.0, last);

        self.index = target as usize;
        self.offset()
    }

    /// Jump straight to a section, as an in-page anchor link does.
    pub fn scroll_to(&mut self, index: usize) -> FolioResult<f64> {
        if index >= self.sections {
            return Err(FolioError::validation(format!(
                "section index {index} out of range (0..{})",
                self.sections
            )));
        }
        self.index = index;
        Ok(self.offset())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/scroll.rs"]
mod tests;
