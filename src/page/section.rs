use crate::{
    animation::preset::PresetName,
    foundation::{
        color::{Rgba8, palette},
        error::{FolioError, FolioResult},
    },
    page::node::{Element, Node, el},
};

/// Thematic accent of a section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionVariant {
    Cyber,
    Dev,
    #[default]
    Default,
}

impl SectionVariant {
    pub const ALL: [SectionVariant; 3] = [Self::Cyber, Self::Dev, Self::Default];

    pub fn slug(self) -> &'static str {
        match self {
            Self::Cyber => "cyber",
            Self::Dev => "dev",
            Self::Default => "default",
        }
    }

    /// Zone accent colour; `Default` has none.
    pub fn accent(self) -> Option<Rgba8> {
        match self {
            Self::Cyber => Some(palette::CYBER),
            Self::Dev => Some(palette::DEV),
            Self::Default => None,
        }
    }

    /// Accent used by cards and prompts, defaulting to the security green.
    pub fn accent_or_default(self) -> Rgba8 {
        self.accent().unwrap_or(palette::CYBER)
    }

    /// Top-down background tint behind the section content.
    pub fn gradient(self) -> String {
        match self.accent() {
            Some(c) => format!(
                "linear-gradient(to bottom, {}, transparent, transparent)",
                c.with_alpha(0.05).css()
            ),
            None => "linear-gradient(to bottom, transparent, transparent)".to_owned(),
        }
    }
}

/// When an element counts as "in view" for its reveal animation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewportTrigger {
    /// Visible fraction required, in `(0, 1]`.
    pub amount: f64,
    /// Reveal only on the first crossing.
    pub once: bool,
    /// Root margin in pixels; negative values shrink the viewport.
    pub margin_px: f64,
}

impl ViewportTrigger {
    pub fn new(amount: f64) -> Self {
        Self {
            amount,
            once: false,
            margin_px: 0.0,
        }
    }

    /// The trigger every section frame uses.
    pub fn section() -> Self {
        Self {
            margin_px: -100.0,
            ..Self::new(0.3)
        }
    }

    pub fn validate(&self) -> FolioResult<()> {
        if !(self.amount > 0.0 && self.amount <= 1.0) {
            return Err(FolioError::validation(
                "viewport trigger amount must be in (0, 1]",
            ));
        }
        Ok(())
    }

    /// Mark `e` as a reveal root observed with these settings.
    pub fn apply(&self, e: Element) -> Element {
        let e = e.attr("data-reveal", format!("{}", self.amount));
        let e = if self.margin_px != 0.0 {
            e.attr("data-reveal-margin", format!("{}", self.margin_px))
        } else {
            e
        };
        if self.once {
            e.attr("data-reveal-once", "true")
        } else {
            e
        }
    }

    /// Read back the settings written by [`ViewportTrigger::apply`].
    pub fn from_element(e: &Element) -> Option<Self> {
        let amount = e.get_attr("data-reveal")?.parse().ok()?;
        let margin_px = e
            .get_attr("data-reveal-margin")
            .and_then(|m| m.parse().ok())
            .unwrap_or(0.0);
        Some(Self {
            amount,
            once: e.get_attr("data-reveal-once") == Some("true"),
            margin_px,
        })
    }
}

/// Reveal `e` as soon as the page loads instead of on intersection.
pub fn reveal_on_mount(e: Element) -> Element {
    e.attr("data-reveal-on", "mount")
}

pub fn is_mount_root(e: &Element) -> bool {
    e.get_attr("data-reveal-on") == Some("mount")
}

/// Whether `e` starts its own reveal rather than inheriting one.
pub fn is_reveal_root(e: &Element) -> bool {
    is_mount_root(e) || e.get_attr("data-reveal").is_some()
}

/// Full-viewport wrapper shared by every section.
#[derive(Clone, Debug)]
pub struct SectionFrame {
    pub id: String,
    pub variant: SectionVariant,
    pub reveal: ViewportTrigger,
    /// Let decorations (the hero scroll hint) escape the frame.
    pub overflow_visible: bool,
    pub children: Vec<Node>,
}

impl SectionFrame {
    pub fn new(id: impl Into<String>, variant: SectionVariant) -> Self {
        Self {
            id: id.into(),
            variant,
            reveal: ViewportTrigger::section(),
            overflow_visible: false,
            children: Vec::new(),
        }
    }

    pub fn overflow_visible(mut self) -> Self {
        self.overflow_visible = true;
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn render(self) -> FolioResult<Element> {
        let id = self.id.trim();
        if id.is_empty() || id.contains(char::is_whitespace) {
            return Err(FolioError::composition(format!(
                "section id '{}' must be a non-empty token",
                self.id
            )));
        }
        self.reveal.validate()?;

        let mut section = el("section")
            .attr("id", id)
            .class("section")
            .class(&format!("section--{}", self.variant.slug()))
            .attr("data-variant", self.variant.slug());
        if self.overflow_visible {
            section = section.class("section--overflow");
        }

        let tint = el("div").class("section__tint").attr("aria-hidden", "true");
        let content = self.reveal.apply(
            el("div")
                .class("section__content")
                .motion(PresetName::SectionReveal)
                .children(self.children),
        );

        Ok(section.child(tint).child(content))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/section.rs"]
mod tests;
