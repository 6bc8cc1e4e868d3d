//! Stylesheet generation.
//!
//! Layout and component rules are static; section tints and every motion
//! rule are derived from [`SectionVariant`] and the preset catalogue, so the
//! browser plays exactly what [`Preset::sample`] models.

use std::fmt::Write as _;

use crate::{
    animation::preset::{Preset, PresetKind, VisualState, catalogue},
    foundation::{color::palette, error::FolioResult},
    motion::stagger::DELAY_VAR,
    page::section::SectionVariant,
};

/// Class `motion.js` puts on `<html>` once it is observing. Hidden states are
/// scoped to it so the page stays readable without scripts.
pub const READY_CLASS: &str = "motion-ready";
/// Class toggled on reveal roots and their members while in view.
pub const VISIBLE_CLASS: &str = "is-visible";

/// Ordered CSS rule writer.
#[derive(Default)]
pub struct Stylesheet {
    out: String,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule<'a, I>(&mut self, selector: &str, decls: I) -> &mut Self
    where
        I: IntoIterator<Item = (&'a str, String)>,
    {
        let _ = writeln!(self.out, "{selector} {{");
        for (prop, value) in decls {
            let _ = writeln!(self.out, "  {prop}: {value};");
        }
        self.out.push_str("}\n");
        self
    }

    pub fn keyframes(
        &mut self,
        name: &str,
        stops: &[(f64, Vec<(&'static str, String)>)],
    ) -> &mut Self {
        let _ = writeln!(self.out, "@keyframes {name} {{");
        for (pct, decls) in stops {
            let _ = writeln!(self.out, "  {}% {{", fmt_pct(*pct));
            for (prop, value) in decls {
                let _ = writeln!(self.out, "    {prop}: {value};");
            }
            self.out.push_str("  }\n");
        }
        self.out.push_str("}\n");
        self
    }

    pub fn raw(&mut self, css: &str) -> &mut Self {
        self.out.push_str(css);
        if !css.ends_with('\n') {
            self.out.push('\n');
        }
        self
    }

    pub fn finish(self) -> String {
        self.out
    }
}

fn fmt_pct(p: f64) -> String {
    let rounded = (p * 100.0).round() / 100.0;
    format!("{rounded}")
}

fn decl(prop: &'static str, value: impl Into<String>) -> (&'static str, String) {
    (prop, value.into())
}

const BASE: &str = r#"*, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }
html, body { height: 100%; }
body {
  font-family: "JetBrains Mono", "Fira Code", ui-monospace, SFMono-Regular, Menlo, monospace;
  color: #e5e7eb;
  -webkit-font-smoothing: antialiased;
}
a { color: inherit; text-decoration: none; }
h1, h2, h3 { color: #ffffff; letter-spacing: -0.01em; }
.muted { color: #4b5563; }
.cursor { margin-left: 0.1em; animation: cursor-blink 1s steps(2, start) infinite; }
@keyframes cursor-blink { to { visibility: hidden; } }
"#;

const COMPONENTS: &str = r#".grid { display: grid; gap: 2rem; width: 100%; max-width: 64rem; }
.grid--compact { gap: 1rem; max-width: 56rem; }
@media (min-width: 768px) {
  .grid--2 { grid-template-columns: repeat(2, minmax(0, 1fr)); }
  .grid--3 { grid-template-columns: repeat(3, minmax(0, 1fr)); }
}
.section-header { width: 100%; max-width: 64rem; margin-bottom: 3rem; }
.section-header--center { text-align: center; }
.section-header__caption, .terminal__caption { color: #6b7280; font-size: 0.875rem; }
.terminal__bar { display: inline-flex; align-items: center; gap: 0.5rem; padding: 0.5rem 1rem; background: var(--surface); border: 1px solid var(--border); border-radius: 0.5rem 0.5rem 0 0; }
.terminal__dot { width: 0.75rem; height: 0.75rem; border-radius: 9999px; }
.terminal__dot--red { background: var(--traffic-red); }
.terminal__dot--yellow { background: var(--traffic-yellow); }
.terminal__dot--green { background: var(--traffic-green); }
.terminal__file { margin-left: 0.5rem; font-size: 0.75rem; color: #6b7280; }
.terminal__body { padding: 1.5rem; background: var(--panel); border: 1px solid var(--border); border-top: 0; border-radius: 0 0.5rem 0.5rem 0.5rem; }
.terminal__title, .command__line { display: flex; align-items: center; gap: 0.5rem; }
.accent-cyber { color: var(--cyber); }
.accent-dev { color: var(--dev); }
.category__header { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 1rem; }
.category__icon { font-size: 1.5rem; }
.category__rule { flex: 1; height: 1px; background: linear-gradient(to right, var(--accent), transparent); }
.category__list { display: grid; gap: 0.5rem; }
.category__list--dev { display: flex; flex-wrap: wrap; }
.skill-card, .skill-chip, .project, .social-card { position: relative; overflow: hidden; background: var(--surface); border: 1px solid var(--border); }
.skill-card { display: flex; align-items: center; justify-content: space-between; padding: 0.75rem 1rem; border-radius: 0.5rem; }
.skill-card__glow, .project__glow { position: absolute; inset: 0; border-radius: inherit; pointer-events: none; }
.skill-chip { padding: 0.5rem 1rem; border-radius: 0.5rem; font-size: 0.875rem; }
.skill-chip__glow, .social-card__glow { position: absolute; inset: 0; opacity: 0; transition: opacity 300ms; background: radial-gradient(circle at center, var(--accent), transparent 70%); pointer-events: none; }
.skill-chip:hover, .social-card:hover { border-color: var(--accent); }
.skill-chip:hover .skill-chip__glow, .social-card:hover .social-card__glow { opacity: 0.1; }
.badge { padding: 0.125rem 0.5rem; border-radius: 0.25rem; font-size: 0.625rem; color: var(--badge-fg); background: var(--badge-bg); border: 1px solid var(--badge-border); }
.badge--kind { padding: 0.25rem 0.75rem; border-radius: 9999px; font-size: 0.75rem; }
.project { border-radius: 0.75rem; cursor: pointer; }
.project__body { position: relative; z-index: 1; padding: 1.5rem; }
.project--dev .project__body { padding: 1rem; }
.project__header { display: flex; align-items: flex-start; justify-content: space-between; margin-bottom: 1rem; }
.project__actions { display: flex; gap: 0.5rem; }
.project__title { font-size: 1.125rem; margin-bottom: 0.5rem; transition: color 300ms; }
.project--cyber:hover .project__title { color: var(--cyber); }
.project--dev:hover .project__title { color: var(--dev); }
.project__description { color: #9ca3af; font-size: 0.875rem; line-height: 1.6; margin-bottom: 1rem; }
.project--dev .project__description { font-size: 0.6875rem; display: -webkit-box; -webkit-line-clamp: 2; -webkit-box-orient: vertical; overflow: hidden; }
.project__banner { display: flex; align-items: center; justify-content: space-between; height: 4rem; padding: 0 1rem; border-bottom: 1px solid var(--border); }
.project__glyph { font-size: 1.5rem; opacity: 0.5; }
.project__corner { position: absolute; top: 0; right: 0; width: 4rem; height: 4rem; opacity: 0; transition: opacity 300ms; background: linear-gradient(to bottom left, rgba(0, 255, 157, 0.1), transparent); }
.project:hover .project__corner { opacity: 1; }
.tags { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.tag { padding: 0.25rem 0.5rem; font-size: 0.75rem; color: #6b7280; background: var(--background); border-radius: 0.25rem; }
.icon-link { display: inline-flex; color: #6b7280; transition: color 300ms; }
.icon-link:hover { color: var(--cyber); }
.project--dev .icon-link:hover { color: var(--dev); }
.icon { display: inline-block; width: 1.125rem; height: 1.125rem; border: 1.5px solid currentColor; border-radius: 0.25rem; }
.hero { text-align: center; max-width: 56rem; }
.hero__prompt { margin-bottom: 1.5rem; font-size: 0.875rem; color: #6b7280; }
.hero__command { margin-left: 0.5rem; }
.hero__name { font-size: clamp(2.25rem, 6vw, 4.5rem); margin-bottom: 1rem; }
.gradient-text { background: linear-gradient(to right, var(--cyber), var(--dev)); -webkit-background-clip: text; background-clip: text; color: transparent; }
.hero__headline { display: flex; align-items: center; justify-content: center; gap: 0.5rem; margin-bottom: 2rem; color: #9ca3af; font-size: 1.125rem; }
.status-dot { width: 0.5rem; height: 0.5rem; border-radius: 9999px; background: var(--cyber); }
.hero__actions { display: flex; flex-wrap: wrap; justify-content: center; gap: 1rem; }
.button { display: inline-flex; align-items: center; gap: 0.75rem; padding: 0.75rem 1.5rem; border-radius: 0.5rem; font-size: 0.875rem; }
.button--primary { color: var(--cyber); background: rgba(0, 255, 157, 0.1); border: 1px solid rgba(0, 255, 157, 0.3); }
.button--primary:hover { background: rgba(0, 255, 157, 0.2); border-color: var(--cyber); }
.button--ghost { color: #d1d5db; background: var(--surface); border: 1px solid var(--border); }
.button--ghost:hover { color: #ffffff; border-color: rgba(156, 163, 175, 0.6); }
.button--solid { color: var(--background); background: var(--cyber); font-weight: 600; margin-bottom: 3rem; }
.button--solid:hover { box-shadow: 0 0 30px rgba(0, 255, 157, 0.3); }
.scroll-hint { position: absolute; bottom: 2.5rem; left: 50%; margin-left: -2.5rem; width: 5rem; display: flex; flex-direction: column; align-items: center; gap: 0.5rem; z-index: 20; font-size: 0.75rem; color: #6b7280; }
.scroll-hint__mouse { width: 1.25rem; height: 2rem; border: 2px solid rgba(0, 255, 157, 0.5); border-radius: 9999px; display: flex; justify-content: center; padding-top: 0.25rem; }
.scroll-hint__wheel { width: 0.25rem; height: 0.5rem; border-radius: 9999px; background: var(--cyber); }
.contact { text-align: center; max-width: 48rem; padding: 0 0.5rem; }
.contact__title { font-size: clamp(1.5rem, 4vw, 3rem); margin-bottom: 1rem; }
.contact__pitch { color: #9ca3af; font-size: 0.875rem; margin: 0 auto 2rem; max-width: 36rem; }
.contact__hint, .contact__footer { color: #4b5563; font-size: 0.75rem; }
.contact__hint { margin-bottom: 1.5rem; }
.social-grid { display: grid; grid-template-columns: repeat(2, minmax(0, 1fr)); gap: 1rem; max-width: 42rem; margin: 0 auto; }
@media (min-width: 768px) { .social-grid { grid-template-columns: repeat(4, minmax(0, 1fr)); } }
.social-card { display: flex; flex-direction: column; align-items: center; padding: 1.5rem; border-radius: 0.75rem; transition: border-color 300ms; }
.social-card__icon { color: #9ca3af; margin-bottom: 0.75rem; }
.social-card:hover .social-card__icon { color: var(--accent); }
.social-card__platform { font-size: 0.875rem; font-weight: 600; color: #ffffff; }
.social-card__handle { font-size: 0.75rem; color: #6b7280; max-width: 100%; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }
.contact__footer { margin-top: 4rem; padding-top: 2rem; border-top: 1px solid var(--border); }
.separator { margin: 0 0.5rem; }
.contact__credits { margin-top: 0.5rem; color: #374151; }
"#;

const REDUCED_MOTION: &str = r#"@media (prefers-reduced-motion: reduce) {
  .scroll-container { scroll-behavior: auto; }
  [data-motion], [data-hover] { animation: none !important; transition: none !important; }
  .motion-ready [data-motion] { opacity: 1 !important; transform: none !important; }
}
"#;

fn root_vars() -> Vec<(&'static str, String)> {
    vec![
        decl("--cyber", palette::CYBER.css()),
        decl("--dev", palette::DEV.css()),
        decl("--background", palette::BACKGROUND.css()),
        decl("--panel", palette::PANEL.css()),
        decl("--surface", palette::SURFACE.css()),
        decl("--border", palette::BORDER.css()),
        decl("--traffic-red", palette::TRAFFIC_RED.css()),
        decl("--traffic-yellow", palette::TRAFFIC_YELLOW.css()),
        decl("--traffic-green", palette::TRAFFIC_GREEN.css()),
    ]
}

fn layout(sheet: &mut Stylesheet) {
    sheet.rule(
        ".scroll-container",
        [
            decl("position", "relative"),
            decl("height", "100vh"),
            decl("width", "100%"),
            decl("overflow-x", "hidden"),
            decl("overflow-y", "scroll"),
            decl("scroll-snap-type", "y mandatory"),
            decl("scroll-behavior", "smooth"),
            decl("background", "var(--background)"),
        ],
    );
    sheet.rule(
        ".section",
        [
            decl("position", "relative"),
            decl("height", "100vh"),
            decl("width", "100%"),
            decl("display", "flex"),
            decl("flex-direction", "column"),
            decl("align-items", "center"),
            decl("justify-content", "center"),
            decl("padding", "clamp(1.5rem, 4vw, 3rem) clamp(1rem, 6vw, 6rem)"),
            decl("overflow-x", "hidden"),
            decl("overflow-y", "auto"),
            decl("scroll-snap-align", "start"),
            decl("scroll-snap-stop", "always"),
        ],
    );
    sheet.rule(".section--overflow", [decl("overflow", "visible")]);
    sheet.rule(
        ".section__tint",
        [
            decl("position", "absolute"),
            decl("inset", "0"),
            decl("pointer-events", "none"),
        ],
    );
    sheet.rule(
        ".section__content",
        [
            decl("position", "relative"),
            decl("z-index", "10"),
            decl("width", "100%"),
            decl("height", "100%"),
            decl("display", "flex"),
            decl("flex-direction", "column"),
            decl("align-items", "center"),
            decl("justify-content", "center"),
        ],
    );
    for variant in SectionVariant::ALL {
        sheet.rule(
            &format!(".section--{} > .section__tint", variant.slug()),
            [decl("background", variant.gradient())],
        );
    }
}

fn motion_selector(preset: &Preset) -> String {
    format!("[data-motion=\"{}\"]", preset.name)
}

fn hover_selector(preset: &Preset) -> String {
    format!("[data-hover=\"{}\"]", preset.name)
}

/// Keyframe stops at evenly spaced percentages.
fn stops(frames: &[VisualState]) -> Vec<(f64, Vec<(&'static str, String)>)> {
    let last = frames.len().saturating_sub(1).max(1) as f64;
    frames
        .iter()
        .enumerate()
        .map(|(i, f)| (i as f64 / last * 100.0, f.css_declarations()))
        .collect()
}

fn animation(preset: &Preset, tail: &str) -> String {
    let t = &preset.transition;
    let duration = match t.spring {
        Some(s) => s.settle_time(),
        None => t.duration,
    };
    format!(
        "{} {} {} {tail}",
        preset.name,
        duration.css(),
        t.css_timing()
    )
}

fn reveal_rules(sheet: &mut Stylesheet, preset: &Preset) {
    let sel = motion_selector(preset);
    sheet.keyframes(preset.name.as_str(), &stops(&preset.frames()));
    sheet.rule(
        &format!(".{READY_CLASS} {sel}:not(.{VISIBLE_CLASS})"),
        preset.from.css_declarations(),
    );
    let mut visible = preset.to.css_declarations();
    visible.push(decl(
        "animation",
        animation(preset, &format!("var({DELAY_VAR}, 0ms) backwards")),
    ));
    sheet.rule(&format!("{sel}.{VISIBLE_CLASS}"), visible);
}

fn loop_rules(sheet: &mut Stylesheet, preset: &Preset) {
    sheet.keyframes(preset.name.as_str(), &stops(&preset.frames()));
    sheet.rule(
        &motion_selector(preset),
        [decl("animation", animation(preset, "infinite"))],
    );
}

fn hover_rules(sheet: &mut Stylesheet, preset: &Preset) {
    let sel = hover_selector(preset);
    let t = &preset.transition;

    let mut props: Vec<&'static str> = Vec::new();
    for state in [Some(&preset.from), Some(&preset.to), preset.pressed.as_ref()]
        .into_iter()
        .flatten()
    {
        for (p, _) in state.css_declarations() {
            if !props.contains(&p) {
                props.push(p);
            }
        }
    }
    let transition = props
        .iter()
        .map(|p| format!("{p} {} {}", t.duration.css(), t.css_timing()))
        .collect::<Vec<_>>()
        .join(", ");

    sheet.rule(&sel, [decl("transition", transition)]);
    let hovered = if preset.group {
        format!("{sel}:hover, .hover-group:hover {sel}")
    } else {
        format!("{sel}:hover")
    };
    sheet.rule(&hovered, preset.to.css_declarations());
    if let Some(pressed) = &preset.pressed {
        sheet.rule(&format!("{sel}:active"), pressed.css_declarations());
    }
}

/// Build `site.css`.
#[tracing::instrument]
pub fn stylesheet() -> FolioResult<String> {
    let presets = catalogue();
    for p in &presets {
        p.validate()?;
    }

    let mut sheet = Stylesheet::new();
    sheet.rule(":root", root_vars());
    sheet.raw(BASE);
    sheet.rule("body", [decl("background", "var(--background)")]);
    layout(&mut sheet);
    sheet.raw(COMPONENTS);

    // Hover rules come last so they win over the settled reveal state.
    for p in presets.iter().filter(|p| p.kind == PresetKind::Reveal) {
        reveal_rules(&mut sheet, p);
    }
    for p in presets.iter().filter(|p| p.kind == PresetKind::Loop) {
        loop_rules(&mut sheet, p);
    }
    for p in presets.iter().filter(|p| p.kind == PresetKind::Hover) {
        hover_rules(&mut sheet, p);
    }
    sheet.raw(REDUCED_MOTION);

    let css = sheet.finish();
    tracing::debug!(bytes = css.len(), presets = presets.len(), "stylesheet generated");
    Ok(css)
}

#[cfg(test)]
#[path = "../../tests/unit/render/css.rs"]
mod tests;
