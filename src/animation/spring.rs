use crate::foundation::{
    core::Millis,
    error::{FolioError, FolioResult},
};

/// Damped harmonic oscillator driving a tween from 0 to 1 with zero initial velocity.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    #[serde(default = "default_mass")]
    pub mass: f64,
}

fn default_mass() -> f64 {
    1.0
}

/// Distance from the target under which the spring counts as settled.
const REST_DELTA: f64 = 0.005;
/// Upper bound on simulated settle time.
const MAX_SETTLE: Millis = Millis(10_000);

impl Spring {
    pub fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
        }
    }

    pub fn validate(&self) -> FolioResult<()> {
        if !self.stiffness.is_finite() || self.stiffness <= 0.0 {
            return Err(FolioError::animation("spring stiffness must be > 0"));
        }
        if !self.damping.is_finite() || self.damping < 0.0 {
            return Err(FolioError::animation("spring damping must be >= 0"));
        }
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(FolioError::animation("spring mass must be > 0"));
        }
        Ok(())
    }

    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Progress at `t` seconds; overshoots 1 when underdamped.
    pub fn position(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        let w0 = (self.stiffness / self.mass).sqrt();
        let zeta = self.damping_ratio();

        if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * w0 * t).exp();
            1.0 - envelope * ((wd * t).cos() + (zeta * w0 / wd) * (wd * t).sin())
        } else if zeta == 1.0 {
            1.0 - (-w0 * t).exp() * (1.0 + w0 * t)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - root);
            let r2 = -w0 * (zeta + root);
            1.0 - (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
        }
    }

    /// First millisecond after which the spring stays within the rest band.
    pub fn settle_time(&self) -> Millis {
        let mut last_outside = 0u64;
        for ms in 0..=MAX_SETTLE.0 {
            let x = self.position(ms as f64 / 1000.0);
            if (1.0 - x).abs() > REST_DELTA {
                last_outside = ms;
            }
        }
        Millis(last_outside + 1)
    }

    /// CSS `linear()` easing approximating the spring over its settle time.
    pub fn css_linear(&self, points: usize) -> String {
        let points = points.max(2);
        let settle = self.settle_time().as_secs_f64();
        let stops = (0..points)
            .map(|i| {
                let t = settle * (i as f64) / ((points - 1) as f64);
                let x = if i + 1 == points {
                    1.0
                } else {
                    self.position(t)
                };
                format!("{}", (x * 10_000.0).round() / 10_000.0)
            })
            .collect::<Vec<_>>();
        format!("linear({})", stops.join(", "))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
