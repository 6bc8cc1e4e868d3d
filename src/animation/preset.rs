use crate::{
    animation::{
        anim::{Anim, Lerp, LoopMode, SampleCtx, delay, loop_},
        ease::Ease,
        spring::Spring,
    },
    foundation::{
        color::{Rgba8, palette},
        core::Millis,
        error::{FolioError, FolioResult},
    },
};

/// Zero-offset box shadow (`0 0 <blur>px <color>`).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Shadow {
    pub blur: f64,
    pub color: Rgba8,
}

impl Shadow {
    pub fn css(self) -> String {
        format!("0 0 {}px {}", self.blur, self.color.css())
    }
}

impl Lerp for Shadow {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            blur: f64::lerp(&a.blur, &b.blur, t),
            color: Rgba8::lerp(&a.color, &b.color, t),
        }
    }
}

/// Animatable properties of one element. Absent properties are left untouched.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisualState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    /// Width as a percentage of the parent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width_pct: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<Shadow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Rgba8>,
}

impl VisualState {
    pub fn opacity(mut self, v: f64) -> Self {
        self.opacity = Some(v);
        self
    }

    pub fn x(mut self, v: f64) -> Self {
        self.x = Some(v);
        self
    }

    pub fn y(mut self, v: f64) -> Self {
        self.y = Some(v);
        self
    }

    pub fn scale(mut self, v: f64) -> Self {
        self.scale = Some(v);
        self
    }

    pub fn width_pct(mut self, v: f64) -> Self {
        self.width_pct = Some(v);
        self
    }

    pub fn box_shadow(mut self, blur: f64, color: Rgba8) -> Self {
        self.box_shadow = Some(Shadow { blur, color });
        self
    }

    pub fn border_color(mut self, c: Rgba8) -> Self {
        self.border_color = Some(c);
        self
    }

    pub fn has_transform(&self) -> bool {
        self.x.is_some() || self.y.is_some() || self.scale.is_some()
    }

    /// CSS `transform` value, or `None` when no transform property is set.
    pub fn css_transform(&self) -> Option<String> {
        if !self.has_transform() {
            return None;
        }
        let mut parts = Vec::new();
        if self.x.is_some() || self.y.is_some() {
            parts.push(format!(
                "translate({}px, {}px)",
                self.x.unwrap_or(0.0),
                self.y.unwrap_or(0.0)
            ));
        }
        if let Some(s) = self.scale {
            parts.push(format!("scale({s})"));
        }
        Some(parts.join(" "))
    }

    /// CSS declarations (`property: value`) in a stable order.
    pub fn css_declarations(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        if let Some(o) = self.opacity {
            out.push(("opacity", format!("{o}")));
        }
        if let Some(t) = self.css_transform() {
            out.push(("transform", t));
        }
        if let Some(w) = self.width_pct {
            out.push(("width", format!("{w}%")));
        }
        if let Some(s) = self.box_shadow {
            out.push(("box-shadow", s.css()));
        }
        if let Some(c) = self.border_color {
            out.push(("border-color", c.css()));
        }
        out
    }

    fn validate(&self, preset: &str) -> FolioResult<()> {
        if let Some(o) = self.opacity {
            if !(0.0..=1.0).contains(&o) {
                return Err(FolioError::animation(format!(
                    "preset '{preset}': opacity must be in [0, 1]"
                )));
            }
        }
        if let Some(s) = self.scale {
            if s.is_nan() || s < 0.0 {
                return Err(FolioError::animation(format!(
                    "preset '{preset}': scale must be >= 0"
                )));
            }
        }
        if let Some(w) = self.width_pct {
            if !(0.0..=100.0).contains(&w) {
                return Err(FolioError::animation(format!(
                    "preset '{preset}': width must be in [0, 100] percent"
                )));
            }
        }
        Ok(())
    }
}

impl Lerp for VisualState {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            opacity: Option::lerp(&a.opacity, &b.opacity, t),
            x: Option::lerp(&a.x, &b.x, t),
            y: Option::lerp(&a.y, &b.y, t),
            scale: Option::lerp(&a.scale, &b.scale, t),
            width_pct: Option::lerp(&a.width_pct, &b.width_pct, t),
            box_shadow: Option::lerp(&a.box_shadow, &b.box_shadow, t),
            border_color: Option::lerp(&a.border_color, &b.border_color, t),
        }
    }
}

/// Timing of the move into the target state.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transition {
    pub duration: Millis,
    pub ease: Ease,
    #[serde(default)]
    pub delay: Millis,
    /// Physics timing; replaces `duration`/`ease` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spring: Option<Spring>,
    /// Offset between successive children's entrances.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stagger_children: Option<Millis>,
    /// Offset before the first child's entrance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_children: Option<Millis>,
    #[serde(default)]
    pub repeat_forever: bool,
}

impl Transition {
    pub fn tween(duration: Millis, ease: Ease) -> Self {
        Self {
            duration,
            ease,
            delay: Millis::ZERO,
            spring: None,
            stagger_children: None,
            delay_children: None,
            repeat_forever: false,
        }
    }

    pub fn spring(spring: Spring) -> Self {
        Self {
            spring: Some(spring),
            ..Self::tween(spring.settle_time(), Ease::Linear)
        }
    }

    pub fn stagger(mut self, stagger: Millis, delay_children: Millis) -> Self {
        self.stagger_children = Some(stagger);
        self.delay_children = Some(delay_children);
        self
    }

    pub fn repeat_forever(mut self) -> Self {
        self.repeat_forever = true;
        self
    }

    pub fn is_orchestrating(&self) -> bool {
        self.stagger_children.is_some() || self.delay_children.is_some()
    }

    /// Start offset of child `index` relative to this element's trigger.
    pub fn child_delay(&self, index: usize) -> Millis {
        let base = self.delay_children.unwrap_or(Millis::ZERO);
        let step = self.stagger_children.unwrap_or(Millis::ZERO);
        base.saturating_add(Millis(step.0.saturating_mul(index as u64)))
    }

    /// Time from trigger until the element is at rest, excluding repeats.
    pub fn total(&self) -> Millis {
        let run = match self.spring {
            Some(s) => s.settle_time(),
            None => self.duration,
        };
        self.delay.saturating_add(run)
    }

    /// CSS timing function for this transition.
    pub fn css_timing(&self) -> String {
        match self.spring {
            Some(s) => s.css_linear(24),
            None => self.ease.css(),
        }
    }
}

/// Which pair of named states a preset toggles between.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresetKind {
    /// Driven by viewport intersection.
    Reveal,
    /// Driven by the pointer.
    Hover,
    /// Runs continuously once mounted.
    Loop,
}

impl PresetKind {
    pub fn state_names(self) -> (&'static str, &'static str) {
        match self {
            Self::Reveal => ("hidden", "visible"),
            Self::Hover => ("rest", "hover"),
            Self::Loop => ("rest", "pulse"),
        }
    }
}

/// Catalogue keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PresetName {
    FadeInUp,
    FadeInDown,
    FadeInLeft,
    FadeInRight,
    ScaleIn,
    StaggerContainer,
    StaggerContainerFast,
    StaggerItem,
    PopIn,
    CardHover,
    GlowHover,
    GlitchText,
    Typewriter,
    Pulse,
    SectionReveal,
    HeaderReveal,
    ScrollHint,
    HintReveal,
    ScrollWheel,
    ButtonHover,
    IconHover,
    ChipHover,
}

impl PresetName {
    pub const ALL: [PresetName; 22] = [
        Self::FadeInUp,
        Self::FadeInDown,
        Self::FadeInLeft,
        Self::FadeInRight,
        Self::ScaleIn,
        Self::StaggerContainer,
        Self::StaggerContainerFast,
        Self::StaggerItem,
        Self::PopIn,
        Self::CardHover,
        Self::GlowHover,
        Self::GlitchText,
        Self::Typewriter,
        Self::Pulse,
        Self::SectionReveal,
        Self::HeaderReveal,
        Self::ScrollHint,
        Self::HintReveal,
        Self::ScrollWheel,
        Self::ButtonHover,
        Self::IconHover,
        Self::ChipHover,
    ];

    /// Stable identifier, also used for CSS class and keyframe names.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FadeInUp => "fadeInUp",
            Self::FadeInDown => "fadeInDown",
            Self::FadeInLeft => "fadeInLeft",
            Self::FadeInRight => "fadeInRight",
            Self::ScaleIn => "scaleIn",
            Self::StaggerContainer => "staggerContainer",
            Self::StaggerContainerFast => "staggerContainerFast",
            Self::StaggerItem => "staggerItem",
            Self::PopIn => "popIn",
            Self::CardHover => "cardHover",
            Self::GlowHover => "glowHover",
            Self::GlitchText => "glitchText",
            Self::Typewriter => "typewriter",
            Self::Pulse => "pulse",
            Self::SectionReveal => "sectionReveal",
            Self::HeaderReveal => "headerReveal",
            Self::ScrollHint => "scrollHint",
            Self::HintReveal => "hintReveal",
            Self::ScrollWheel => "scrollWheel",
            Self::ButtonHover => "buttonHover",
            Self::IconHover => "iconHover",
            Self::ChipHover => "chipHover",
        }
    }

    pub fn preset(self) -> Preset {
        let ms = Millis;
        let reveal = |from: VisualState, to: VisualState, transition: Transition| Preset {
            name: self,
            kind: PresetKind::Reveal,
            from,
            through: Vec::new(),
            to,
            pressed: None,
            group: false,
            transition,
        };
        let hover = |to: VisualState, pressed: Option<f64>, transition: Transition| Preset {
            name: self,
            kind: PresetKind::Hover,
            from: VisualState::default().scale(1.0),
            through: Vec::new(),
            to,
            pressed: pressed.map(|s| VisualState::default().scale(s)),
            group: false,
            transition,
        };
        let fade = |from: VisualState, duration: u64| {
            reveal(
                from.opacity(0.0),
                VisualState::default().opacity(1.0),
                Transition::tween(ms(duration), Ease::EaseOut),
            )
        };

        match self {
            Self::FadeInUp => zeroed(fade(VisualState::default().y(60.0), 600)),
            Self::FadeInDown => zeroed(fade(VisualState::default().y(-40.0), 500)),
            Self::FadeInLeft => zeroed(fade(VisualState::default().x(-60.0), 600)),
            Self::FadeInRight => zeroed(fade(VisualState::default().x(60.0), 600)),
            Self::ScaleIn => zeroed(fade(VisualState::default().scale(0.8), 500)),
            Self::StaggerContainer => reveal(
                VisualState::default().opacity(0.0),
                VisualState::default().opacity(1.0),
                Transition::tween(ms(300), Ease::EaseOut).stagger(ms(100), ms(200)),
            ),
            Self::StaggerContainerFast => reveal(
                VisualState::default().opacity(0.0),
                VisualState::default().opacity(1.0),
                Transition::tween(ms(300), Ease::EaseOut).stagger(ms(50), ms(100)),
            ),
            Self::StaggerItem => zeroed(fade(VisualState::default().y(20.0).scale(0.95), 400)),
            Self::PopIn => reveal(
                VisualState::default().opacity(0.0).scale(0.0),
                VisualState::default().opacity(1.0).scale(1.0),
                Transition::spring(Spring::new(300.0, 20.0)),
            ),
            Self::CardHover => Preset {
                name: self,
                kind: PresetKind::Hover,
                from: VisualState::default()
                    .scale(1.0)
                    .box_shadow(0.0, palette::CYBER.with_alpha(0.0)),
                through: Vec::new(),
                to: VisualState::default()
                    .scale(1.03)
                    .box_shadow(30.0, palette::CYBER.with_alpha(0.15)),
                pressed: None,
                group: true,
                transition: Transition::tween(ms(300), Ease::EaseOut),
            },
            Self::GlowHover => Preset {
                name: self,
                kind: PresetKind::Hover,
                from: VisualState::default()
                    .box_shadow(0.0, palette::CYBER.with_alpha(0.0))
                    .border_color(palette::BORDER),
                through: Vec::new(),
                to: VisualState::default()
                    .box_shadow(25.0, palette::CYBER.with_alpha(0.2))
                    .border_color(palette::CYBER.with_alpha(0.5)),
                pressed: None,
                group: true,
                transition: Transition::tween(ms(300), Ease::EaseOut),
            },
            Self::GlitchText => zeroed(fade(VisualState::default().x(-20.0), 300)),
            Self::Typewriter => reveal(
                VisualState::default().width_pct(0.0),
                VisualState::default().width_pct(100.0),
                Transition::tween(ms(1500), Ease::Linear),
            ),
            Self::Pulse => Preset {
                name: self,
                kind: PresetKind::Loop,
                from: VisualState::default().scale(1.0),
                through: vec![VisualState::default().scale(1.05)],
                to: VisualState::default().scale(1.0),
                pressed: None,
                group: false,
                transition: Transition::tween(ms(2000), Ease::EaseInOut).repeat_forever(),
            },
            Self::SectionReveal => zeroed(fade(VisualState::default().y(40.0), 600)),
            Self::HeaderReveal => zeroed(fade(VisualState::default().y(30.0), 600)),
            Self::ScrollHint => Preset {
                name: self,
                kind: PresetKind::Loop,
                from: VisualState::default().y(0.0),
                through: vec![VisualState::default().y(8.0)],
                to: VisualState::default().y(0.0),
                pressed: None,
                group: false,
                transition: Transition::tween(ms(1500), Ease::EaseInOut).repeat_forever(),
            },
            Self::HintReveal => zeroed(fade(VisualState::default().y(20.0), 600)),
            Self::ScrollWheel => Preset {
                name: self,
                kind: PresetKind::Loop,
                from: VisualState::default().opacity(1.0).y(0.0),
                through: vec![VisualState::default().opacity(0.3).y(4.0)],
                to: VisualState::default().opacity(1.0).y(0.0),
                pressed: None,
                group: false,
                transition: Transition::tween(ms(1500), Ease::EaseInOut).repeat_forever(),
            },
            Self::ButtonHover => hover(
                VisualState::default().scale(1.05),
                Some(0.98),
                Transition::tween(ms(300), Ease::EaseOut),
            ),
            Self::IconHover => hover(
                VisualState::default().scale(1.2),
                Some(0.9),
                Transition::tween(ms(200), Ease::EaseOut),
            ),
            Self::ChipHover => hover(
                VisualState::default().scale(1.05),
                None,
                Transition::tween(ms(200), Ease::EaseOut),
            ),
        }
    }
}

/// Give the target state an explicit zero for every offset the initial state moves.
fn zeroed(mut p: Preset) -> Preset {
    if p.from.x.is_some() {
        p.to.x = Some(0.0);
    }
    if p.from.y.is_some() {
        p.to.y = Some(0.0);
    }
    if p.from.scale.is_some() {
        p.to.scale = Some(1.0);
    }
    p
}

impl std::str::FromStr for PresetName {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|n| n.as_str() == s)
            .ok_or_else(|| FolioError::animation(format!("unknown preset '{s}'")))
    }
}

impl std::fmt::Display for PresetName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named two-state animation: initial state, target state, and how to get there.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Preset {
    pub name: PresetName,
    pub kind: PresetKind,
    pub from: VisualState,
    /// Intermediate keyframes, evenly spaced between `from` and `to`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub through: Vec<VisualState>,
    pub to: VisualState,
    /// State while the pointer is pressed (hover presets only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressed: Option<VisualState>,
    /// Hover overlay that also follows its nearest `.hover-group` ancestor.
    /// Other hover presets react only to their own pointer.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub group: bool,
    pub transition: Transition,
}

impl Preset {
    pub fn validate(&self) -> FolioResult<()> {
        let name = self.name.as_str();
        self.from.validate(name)?;
        self.to.validate(name)?;
        for s in &self.through {
            s.validate(name)?;
        }
        if let Some(p) = &self.pressed {
            if self.kind != PresetKind::Hover {
                return Err(FolioError::animation(format!(
                    "preset '{name}': only hover presets may define a pressed state"
                )));
            }
            p.validate(name)?;
        }
        match self.transition.spring {
            Some(s) => s.validate()?,
            None => {
                if self.transition.duration.0 == 0 {
                    return Err(FolioError::animation(format!(
                        "preset '{name}': tween duration must be > 0"
                    )));
                }
            }
        }
        if self.group && self.kind != PresetKind::Hover {
            return Err(FolioError::animation(format!(
                "preset '{name}': only hover presets may follow a hover group"
            )));
        }
        if self.transition.repeat_forever && self.kind != PresetKind::Loop {
            return Err(FolioError::animation(format!(
                "preset '{name}': only loop presets may repeat"
            )));
        }
        Ok(())
    }

    /// All keyframe states in order: `from`, `through...`, `to`.
    pub fn frames(&self) -> Vec<VisualState> {
        let mut frames = Vec::with_capacity(self.through.len() + 2);
        frames.push(self.from.clone());
        frames.extend(self.through.iter().cloned());
        frames.push(self.to.clone());
        frames
    }

    /// Visual state `elapsed` after the trigger.
    pub fn sample(&self, elapsed: Millis) -> FolioResult<VisualState> {
        if let Some(spring) = self.transition.spring {
            if elapsed < self.transition.delay {
                return Ok(self.from.clone());
            }
            let local = elapsed.saturating_sub(self.transition.delay);
            let progress = spring.position(local.as_secs_f64());
            return Ok(VisualState::lerp(&self.from, &self.to, progress));
        }

        let mut anim = Anim::sequence(self.frames(), self.transition.duration, self.transition.ease)?;
        if self.transition.repeat_forever {
            anim = loop_(anim, self.transition.duration, LoopMode::Repeat);
        }
        delay(anim, self.transition.delay).sample(SampleCtx::at(elapsed))
    }
}

/// The full preset table in catalogue order.
pub fn catalogue() -> Vec<Preset> {
    PresetName::ALL.iter().map(|n| n.preset()).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/preset.rs"]
mod tests;
