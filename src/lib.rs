//! termfolio renders a single-page, scroll-snapped personal portfolio as a
//! static site.
//!
//! # Pipeline overview
//!
//! 1. **Content**: typed tables ([`Content`]), built in or loaded from JSON.
//! 2. **Compose**: `Content -> Site`, a markup tree of full-viewport sections
//!    decorated with animation presets and precomputed stagger offsets.
//! 3. **Render**: `Site -> SiteBundle` (`index.html`, `site.css`, `motion.js`,
//!    `manifest.json`).
//!
//! The browser side (viewport-triggered reveals, one-section snapping, hover
//! states) is also modelled headlessly in [`motion`], so its behaviour can be
//! exercised without a browser.
//!
//! Builds are deterministic: the same content and options produce the same bytes.
#![forbid(unsafe_code)]

pub mod animation;
pub mod build;
pub mod content;
pub mod foundation;
pub mod motion;
pub mod page;
pub mod render;

pub use animation::anim::{Anim, InterpMode, Keyframe, Keyframes, Lerp, LoopMode, SampleCtx};
pub use animation::ease::Ease;
pub use animation::preset::{
    Preset, PresetKind, PresetName, Shadow, Transition, VisualState, catalogue,
};
pub use animation::spring::Spring;
pub use build::opts::BuildOpts;
pub use build::pipeline::{BundleFile, Manifest, ManifestEntry, SiteBundle, build_site, sha256_hex};
pub use content::data::builtin as builtin_content;
pub use content::model::{
    Content, CyberProjectKind, DevProjectKind, Icon, Profile, ProjectEntry, ProjectKind,
    SkillCategory, SkillEntry, SkillLevel, SocialLink,
};
pub use foundation::color::Rgba8;
pub use foundation::core::{Millis, Rect, Viewport};
pub use foundation::error::{FolioError, FolioResult};
pub use motion::scroll::SnapScroller;
pub use motion::session::{RevealEvent, ScrollSession};
pub use motion::state::{HoverState, HoverToggle, RevealState, RevealToggle};
pub use page::node::{Element, Node};
pub use page::section::{SectionFrame, SectionVariant, ViewportTrigger};
pub use page::site::{SECTION_ORDER, Site, compose};
