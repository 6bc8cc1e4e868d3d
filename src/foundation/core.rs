use crate::foundation::error::{FolioError, FolioResult};

pub use kurbo::Rect;

/// Time offset in whole milliseconds.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Millis(pub u64);

impl Millis {
    pub const ZERO: Self = Self(0);

    pub fn from_secs_f64(secs: f64) -> Self {
        Self((secs * 1000.0).round().max(0.0) as u64)
    }

    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / 1000.0
    }

    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// CSS time literal (`600ms`).
    pub fn css(self) -> String {
        format!("{}ms", self.0)
    }
}

/// Browser viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> FolioResult<Self> {
        if width == 0 || height == 0 {
            return Err(FolioError::validation("viewport width/height must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Rectangle covered by the viewport when scrolled to `offset_y`.
    pub fn rect_at(self, offset_y: f64) -> Rect {
        Rect::new(
            0.0,
            offset_y,
            f64::from(self.width),
            offset_y + f64::from(self.height),
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1440,
            height: 900,
        }
    }
}

/// Fraction of `target`'s area that lies inside `root`, in `[0, 1]`.
pub fn intersection_ratio(target: Rect, root: Rect) -> f64 {
    let area = target.area();
    if area <= 0.0 {
        return 0.0;
    }
    let overlap = target.intersect(root);
    (overlap.area() / area).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
