use crate::{
    animation::ease::Ease,
    foundation::{
        color::Rgba8,
        core::Millis,
        error::{FolioError, FolioResult},
    },
};

#[derive(Clone, Copy, Debug)]
pub struct SampleCtx {
    pub local: Millis, // time since the animation was triggered
}

impl SampleCtx {
    pub fn at(local: Millis) -> Self {
        Self { local }
    }
}

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Rgba8 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
            a: lerp_u8(a.a, b.a, t),
        }
    }
}

impl<T: Lerp + Clone> Lerp for Option<T> {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        match (a, b) {
            (Some(a), Some(b)) => Some(T::lerp(a, b, t)),
            (None, b) => b.clone(),
            (a, None) => a.clone(),
        }
    }
}

/// Keyframed value over time, optionally wrapped in timing expressions.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum Anim<T> {
    Keyframes(Keyframes<T>),
    Expr(Expr<T>),
}

impl<T> Anim<T>
where
    T: Lerp + Clone,
{
    /// Evenly spaced keys over `duration`, as a motion keyframe array (`[1, 1.05, 1]`).
    pub fn sequence(values: Vec<T>, duration: Millis, ease: Ease) -> FolioResult<Self> {
        if values.is_empty() {
            return Err(FolioError::animation("keyframe sequence must be non-empty"));
        }
        let last = (values.len() - 1).max(1) as u64;
        let keys = values
            .into_iter()
            .enumerate()
            .map(|(i, value)| Keyframe {
                at: Millis(duration.0 * i as u64 / last),
                value,
                ease,
            })
            .collect();
        Ok(Self::Keyframes(Keyframes {
            keys,
            mode: InterpMode::Linear,
            default: None,
        }))
    }

    pub fn sample(&self, ctx: SampleCtx) -> FolioResult<T> {
        match self {
            Self::Keyframes(kf) => kf.sample(ctx),
            Self::Expr(expr) => expr.sample(ctx),
        }
    }

    pub fn validate(&self) -> FolioResult<()> {
        match self {
            Self::Keyframes(kf) => kf.validate(),
            Self::Expr(expr) => expr.validate(),
        }
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Keyframes<T> {
    pub keys: Vec<Keyframe<T>>, // sorted by time
    pub mode: InterpMode,
    pub default: Option<T>, // value when no keys exist
}

impl<T> Keyframes<T>
where
    T: Lerp + Clone,
{
    pub fn validate(&self) -> FolioResult<()> {
        if self.keys.is_empty() && self.default.is_none() {
            return Err(FolioError::animation(
                "Keyframes must have at least one key or a default value",
            ));
        }
        if !self.keys.windows(2).all(|w| w[0].at <= w[1].at) {
            return Err(FolioError::animation("Keyframes keys must be sorted by time"));
        }
        Ok(())
    }

    pub fn sample(&self, ctx: SampleCtx) -> FolioResult<T> {
        if self.keys.is_empty() {
            return self
                .default
                .clone()
                .ok_or_else(|| FolioError::animation("Keyframes has no keys and no default"));
        }

        let now = ctx.local;
        let idx = self.keys.partition_point(|k| k.at <= now);

        if idx == 0 {
            return Ok(self.keys[0].value.clone());
        }
        if idx >= self.keys.len() {
            return Ok(self.keys[self.keys.len() - 1].value.clone());
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let denom = b.at.0.saturating_sub(a.at.0);
        if denom == 0 {
            return Ok(a.value.clone());
        }

        let t = ((now.0 - a.at.0) as f64) / (denom as f64);
        let te = a.ease.apply(t);
        match self.mode {
            InterpMode::Hold => Ok(a.value.clone()),
            InterpMode::Linear => Ok(T::lerp(&a.value, &b.value, te)),
        }
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Keyframe<T> {
    pub at: Millis,
    pub value: T,
    pub ease: Ease, // ease applied toward next key
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub enum InterpMode {
    Hold,
    Linear,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum Expr<T> {
    Delay {
        inner: Box<Anim<T>>,
        by: Millis,
    },
    Loop {
        inner: Box<Anim<T>>,
        period: Millis,
        mode: LoopMode,
    },
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub enum LoopMode {
    Repeat,
    PingPong,
}

impl<T> Expr<T>
where
    T: Lerp + Clone,
{
    pub fn validate(&self) -> FolioResult<()> {
        match self {
            Self::Delay { inner, by: _ } => inner.validate(),
            Self::Loop { inner, period, .. } => {
                if period.0 == 0 {
                    return Err(FolioError::animation("Loop period must be > 0"));
                }
                inner.validate()
            }
        }
    }

    pub fn sample(&self, ctx: SampleCtx) -> FolioResult<T> {
        match self {
            Self::Delay { inner, by } => inner.sample(SampleCtx::at(ctx.local.saturating_sub(*by))),
            Self::Loop {
                inner,
                period,
                mode,
            } => {
                if period.0 == 0 {
                    return Err(FolioError::animation("Loop period must be > 0"));
                }
                let t = ctx.local.0;
                let mapped = match mode {
                    LoopMode::Repeat => t % period.0,
                    LoopMode::PingPong => {
                        let cycle = 2 * period.0;
                        let pos = t % cycle;
                        if pos <= period.0 { pos } else { cycle - pos }
                    }
                };
                inner.sample(SampleCtx::at(Millis(mapped)))
            }
        }
    }
}

pub fn delay<T>(inner: Anim<T>, by: Millis) -> Anim<T> {
    Anim::Expr(Expr::Delay {
        inner: Box::new(inner),
        by,
    })
}

pub fn loop_<T>(inner: Anim<T>, period: Millis, mode: LoopMode) -> Anim<T> {
    Anim::Expr(Expr::Loop {
        inner: Box::new(inner),
        period,
        mode,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
