use crate::{
    content::model::Profile,
    foundation::error::{FolioError, FolioResult},
};

/// Options for [`crate::build_site`]. Every field has a default, so a partial
/// JSON object is a valid configuration.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BuildOpts {
    /// Document title; defaults to `"<full name> | Portfolio"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub lang: String,
    /// Embed the stylesheet and script in `index.html` instead of linking them.
    pub inline_assets: bool,
    pub html_file: String,
    pub css_file: String,
    pub js_file: String,
    pub manifest_file: String,
}

impl Default for BuildOpts {
    fn default() -> Self {
        Self {
            title: None,
            lang: "en".to_owned(),
            inline_assets: false,
            html_file: "index.html".to_owned(),
            css_file: "site.css".to_owned(),
            js_file: "motion.js".to_owned(),
            manifest_file: "manifest.json".to_owned(),
        }
    }
}

impl BuildOpts {
    pub fn title_for(&self, profile: &Profile) -> String {
        match &self.title {
            Some(t) => t.clone(),
            None => format!("{} | Portfolio", profile.full_name()),
        }
    }

    pub fn validate(&self) -> FolioResult<()> {
        if self.lang.trim().is_empty() {
            return Err(FolioError::validation("build lang must be non-empty"));
        }
        let names = [
            &self.html_file,
            &self.css_file,
            &self.js_file,
            &self.manifest_file,
        ];
        for name in names {
            if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
                return Err(FolioError::validation(format!(
                    "output file name '{name}' must be a plain file name"
                )));
            }
        }
        for (i, a) in names.iter().enumerate() {
            if names[i + 1..].contains(a) {
                return Err(FolioError::validation(format!(
                    "output file name '{a}' is used twice"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/build/opts.rs"]
mod tests;
