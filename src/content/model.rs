use std::path::Path;

use crate::foundation::{
    color::{Rgba8, palette},
    error::{FolioError, FolioResult},
};

/// Self-assessed proficiency shown on security skill cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    Learning,
    Intermediate,
    Proficient,
}

impl SkillLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Learning => "learning",
            Self::Intermediate => "intermediate",
            Self::Proficient => "proficient",
        }
    }

    pub fn color(self) -> Rgba8 {
        match self {
            Self::Learning => palette::YELLOW,
            Self::Intermediate => palette::BLUE,
            Self::Proficient => palette::CYBER,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SkillEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<SkillLevel>,
}

impl SkillEntry {
    pub fn leveled(name: impl Into<String>, level: SkillLevel) -> Self {
        Self {
            name: name.into(),
            level: Some(level),
        }
    }

    pub fn plain(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub icon: String,
    /// Per-category accent (development zone); falls back to the zone accent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<Rgba8>,
    pub skills: Vec<SkillEntry>,
}

/// Category tag of a project, fixed per zone. Badge label and colour are pure
/// functions of the tag.
pub trait ProjectKind: Copy + std::fmt::Debug {
    /// Stable lowercase identifier (`ctf`, `fullstack`, ...).
    fn slug(self) -> &'static str;
    /// Badge text.
    fn label(self) -> &'static str;
    /// Badge colour.
    fn color(self) -> Rgba8;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CyberProjectKind {
    Ctf,
    Report,
    Tool,
    Writeup,
}

impl ProjectKind for CyberProjectKind {
    fn slug(self) -> &'static str {
        match self {
            Self::Ctf => "ctf",
            Self::Report => "report",
            Self::Tool => "tool",
            Self::Writeup => "writeup",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Ctf => "CTF",
            Self::Report => "Report",
            Self::Tool => "Tool",
            Self::Writeup => "Writeup",
        }
    }

    fn color(self) -> Rgba8 {
        match self {
            Self::Ctf => palette::PURPLE,
            Self::Report => palette::BLUE,
            Self::Tool => palette::CYBER,
            Self::Writeup => palette::ORANGE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DevProjectKind {
    Web,
    App,
    Api,
    Fullstack,
}

impl DevProjectKind {
    /// Header glyph on the compact development card.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Web => "🌐",
            Self::App => "📱",
            Self::Api => "⚡",
            Self::Fullstack => "🚀",
        }
    }
}

impl ProjectKind for DevProjectKind {
    fn slug(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::App => "app",
            Self::Api => "api",
            Self::Fullstack => "fullstack",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Web => "Web",
            Self::App => "App",
            Self::Api => "API",
            Self::Fullstack => "Full Stack",
        }
    }

    fn color(self) -> Rgba8 {
        match self {
            Self::Web => palette::DEV,
            Self::App => palette::PURPLE,
            Self::Api => palette::ORANGE,
            Self::Fullstack => palette::CYBER,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProjectEntry<K> {
    pub title: String,
    pub description: String,
    pub kind: K,
    pub tags: Vec<String>,
    /// External link (live demo, report).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Source repository link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
}

/// Glyph set used by cards and buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Github,
    Linkedin,
    Twitter,
    Bluesky,
    Mail,
    Send,
    ExternalLink,
    FileText,
}

impl Icon {
    pub fn slug(self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Linkedin => "linkedin",
            Self::Twitter => "twitter",
            Self::Bluesky => "bluesky",
            Self::Mail => "mail",
            Self::Send => "send",
            Self::ExternalLink => "external-link",
            Self::FileText => "file-text",
        }
    }

    /// Accessible name for icon-only links.
    pub fn label(self) -> &'static str {
        match self {
            Self::Github => "GitHub",
            Self::Linkedin => "LinkedIn",
            Self::Twitter => "Twitter",
            Self::Bluesky => "Bluesky",
            Self::Mail => "Email",
            Self::Send => "Send",
            Self::ExternalLink => "Open link",
            Self::FileText => "Open document",
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub icon: Icon,
    pub url: String,
    pub color: Rgba8,
    pub handle: String,
}

/// Owner details shown in the hero, section taglines, contact block and footer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub headline: String,
    pub email: String,
    /// `user@host` shown in the hero prompt.
    pub prompt: String,
    pub cyber_tagline: String,
    pub dev_tagline: String,
    pub copyright_year: u16,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Every table the page is rendered from.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Content {
    pub profile: Profile,
    pub cyber_skills: Vec<SkillCategory>,
    pub cyber_projects: Vec<ProjectEntry<CyberProjectKind>>,
    pub dev_skills: Vec<SkillCategory>,
    pub dev_projects: Vec<ProjectEntry<DevProjectKind>>,
    pub social: Vec<SocialLink>,
}

impl Content {
    pub fn from_json_str(s: &str) -> FolioResult<Self> {
        let content: Self = serde_json::from_str(s)?;
        content.validate()?;
        Ok(content)
    }

    pub fn from_path(path: &Path) -> FolioResult<Self> {
        let s = std::fs::read_to_string(path).map_err(|e| {
            FolioError::Other(anyhow::Error::new(e).context(format!(
                "read content '{}'",
                path.display()
            )))
        })?;
        Self::from_json_str(&s)
    }

    pub fn to_json_pretty(&self) -> FolioResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> FolioResult<()> {
        let p = &self.profile;
        non_empty("profile first_name", &p.first_name)?;
        non_empty("profile last_name", &p.last_name)?;
        non_empty("profile headline", &p.headline)?;
        non_empty("profile prompt", &p.prompt)?;
        if !p.email.contains('@') || p.email.trim() != p.email {
            return Err(FolioError::validation(format!(
                "profile email '{}' is not an address",
                p.email
            )));
        }

        validate_categories("cyber_skills", &self.cyber_skills, true)?;
        validate_categories("dev_skills", &self.dev_skills, false)?;
        validate_projects("cyber_projects", &self.cyber_projects)?;
        validate_projects("dev_projects", &self.dev_projects)?;

        for (i, s) in self.social.iter().enumerate() {
            non_empty(&format!("social[{i}] platform"), &s.platform)?;
            non_empty(&format!("social[{i}] handle"), &s.handle)?;
            non_empty(&format!("social[{i}] url"), &s.url)?;
        }
        Ok(())
    }
}

fn non_empty(what: &str, value: &str) -> FolioResult<()> {
    if value.trim().is_empty() {
        return Err(FolioError::validation(format!("{what} must be non-empty")));
    }
    Ok(())
}

fn validate_categories(
    table: &str,
    categories: &[SkillCategory],
    require_level: bool,
) -> FolioResult<()> {
    for (ci, cat) in categories.iter().enumerate() {
        non_empty(&format!("{table}[{ci}] name"), &cat.name)?;
        for (si, skill) in cat.skills.iter().enumerate() {
            non_empty(&format!("{table}[{ci}].skills[{si}] name"), &skill.name)?;
            if require_level && skill.level.is_none() {
                return Err(FolioError::validation(format!(
                    "{table}[{ci}].skills[{si}] '{}' must declare a level",
                    skill.name
                )));
            }
        }
    }
    Ok(())
}

fn validate_projects<K: ProjectKind>(table: &str, projects: &[ProjectEntry<K>]) -> FolioResult<()> {
    for (i, project) in projects.iter().enumerate() {
        non_empty(&format!("{table}[{i}] title"), &project.title)?;
        for link in [&project.link, &project.repo].into_iter().flatten() {
            non_empty(&format!("{table}[{i}] link"), link)?;
        }
        if project.tags.iter().any(|t| t.trim().is_empty()) {
            return Err(FolioError::validation(format!(
                "{table}[{i}] '{}' has an empty tag",
                project.title
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/content/model.rs"]
mod tests;
