/// Easing curves. The `Ease*` keywords match the CSS cubic-bezier keywords; the
/// polynomial curves are evaluated exactly and emitted as their usual bezier fits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Ease {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn | Self::EaseOut | Self::EaseInOut => {
                let [x1, y1, x2, y2] = self.bezier();
                CubicBezier { x1, y1, x2, y2 }.solve(t)
            }
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }

    /// Control points `[x1, y1, x2, y2]` of the equivalent CSS cubic-bezier.
    pub fn bezier(self) -> [f64; 4] {
        match self {
            Self::Linear => [0.0, 0.0, 1.0, 1.0],
            Self::EaseIn => [0.42, 0.0, 1.0, 1.0],
            Self::EaseOut => [0.0, 0.0, 0.58, 1.0],
            Self::EaseInOut => [0.42, 0.0, 0.58, 1.0],
            Self::InQuad => [0.11, 0.0, 0.5, 0.0],
            Self::OutQuad => [0.5, 1.0, 0.89, 1.0],
            Self::InOutQuad => [0.45, 0.0, 0.55, 1.0],
            Self::InCubic => [0.32, 0.0, 0.67, 0.0],
            Self::OutCubic => [0.33, 1.0, 0.68, 1.0],
            Self::InOutCubic => [0.65, 0.0, 0.35, 1.0],
        }
    }

    /// CSS `<easing-function>` value.
    pub fn css(self) -> String {
        match self {
            Self::Linear => "linear".to_owned(),
            Self::EaseIn => "ease-in".to_owned(),
            Self::EaseOut => "ease-out".to_owned(),
            Self::EaseInOut => "ease-in-out".to_owned(),
            _ => {
                let [x1, y1, x2, y2] = self.bezier();
                format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    fn coord(t: f64, p1: f64, p2: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
    }

    fn coord_slope(t: f64, p1: f64, p2: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * p1 + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
    }

    /// y for a given x, inverting x(t) with Newton steps and a bisection fallback.
    fn solve(self, x: f64) -> f64 {
        const EPS: f64 = 1e-7;

        let mut t = x;
        for _ in 0..8 {
            let err = Self::coord(t, self.x1, self.x2) - x;
            if err.abs() < EPS {
                return Self::coord(t, self.y1, self.y2);
            }
            let slope = Self::coord_slope(t, self.x1, self.x2);
            if slope.abs() < 1e-6 {
                break;
            }
            t -= err / slope;
        }

        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        for _ in 0..64 {
            let cur = Self::coord(t, self.x1, self.x2);
            if (cur - x).abs() < EPS {
                break;
            }
            if cur < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) * 0.5;
        }
        Self::coord(t, self.y1, self.y2)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
