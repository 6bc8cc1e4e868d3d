use std::path::Path;

use anyhow::Context as _;
use sha2::Digest as _;

use crate::{
    build::opts::BuildOpts,
    content::model::Content,
    foundation::error::FolioResult,
    page::site::compose,
    render::{
        css::stylesheet,
        html::{Assets, Head, document},
        script::motion_script,
    },
};

/// One generated output file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BundleFile {
    pub path: String,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ManifestEntry {
    pub path: String,
    pub bytes: u64,
    pub sha256: String,
}

/// Listing of every other file in the bundle.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Manifest {
    pub files: Vec<ManifestEntry>,
}

impl Manifest {
    fn of(files: &[BundleFile]) -> Self {
        Self {
            files: files
                .iter()
                .map(|f| ManifestEntry {
                    path: f.path.clone(),
                    bytes: f.bytes.len() as u64,
                    sha256: sha256_hex(&f.bytes),
                })
                .collect(),
        }
    }
}

/// The complete static site, in write order. The manifest is always last.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteBundle {
    pub files: Vec<BundleFile>,
    pub manifest: Manifest,
}

impl SiteBundle {
    pub fn get(&self, path: &str) -> Option<&BundleFile> {
        self.files.iter().find(|f| f.path == path)
    }

    /// Write every file into `dir`, creating it if needed.
    #[tracing::instrument(skip(self), fields(files = self.files.len()))]
    pub fn write_to(&self, dir: &Path) -> FolioResult<()> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("create output dir '{}'", dir.display()))?;
        for f in &self.files {
            let path = dir.join(&f.path);
            std::fs::write(&path, &f.bytes)
                .with_context(|| format!("write '{}'", path.display()))?;
            tracing::debug!(path = %path.display(), bytes = f.bytes.len(), "wrote");
        }
        Ok(())
    }
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}

/// Compose `content` and render it to an in-memory bundle.
#[tracing::instrument(skip(content, opts), fields(inline = opts.inline_assets))]
pub fn build_site(content: &Content, opts: &BuildOpts) -> FolioResult<SiteBundle> {
    opts.validate()?;
    let site = compose(content)?;
    let css = stylesheet()?;
    let js = motion_script();

    let title = opts.title_for(&content.profile);
    let head = Head {
        title: &title,
        lang: &opts.lang,
        description: &content.profile.headline,
    };

    let mut files = Vec::new();
    if opts.inline_assets {
        let html = document(&site, head, Assets::Inline { css: &css, js: &js });
        files.push(BundleFile {
            path: opts.html_file.clone(),
            bytes: html.into_bytes(),
        });
    } else {
        let html = document(
            &site,
            head,
            Assets::Linked {
                stylesheet: &opts.css_file,
                script: &opts.js_file,
            },
        );
        files.push(BundleFile {
            path: opts.html_file.clone(),
            bytes: html.into_bytes(),
        });
        files.push(BundleFile {
            path: opts.css_file.clone(),
            bytes: css.into_bytes(),
        });
        files.push(BundleFile {
            path: opts.js_file.clone(),
            bytes: js.into_bytes(),
        });
    }

    let manifest = Manifest::of(&files);
    let mut manifest_json = serde_json::to_string_pretty(&manifest)?;
    manifest_json.push('\n');
    files.push(BundleFile {
        path: opts.manifest_file.clone(),
        bytes: manifest_json.into_bytes(),
    });

    tracing::info!(files = files.len(), "site built");
    Ok(SiteBundle { files, manifest })
}

#[cfg(test)]
#[path = "../../tests/unit/build/pipeline.rs"]
mod tests;
