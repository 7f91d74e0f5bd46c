//! Static build: one HTML entry per locale plus shared, fingerprinted assets.
//!
//! Output layout:
//!
//! ```text
//! <out>/index.html              redirect to the canonical locale
//! <out>/<code>/index.html       one entry per locale
//! <out>/assets/site-<hash>.css  stylesheet, hash = SHA-256 prefix
//! <out>/manifest.json           entries, assets, generation time
//! ```

use crate::config::SiteDetails;
use crate::i18n::{CatalogValidator, Locale, LocaleCatalog};
use crate::render::{self, LinkStyle, PageContext};
use crate::view_state::ViewState;
use chrono::{DateTime, Utc};
use maud::{html, DOCTYPE};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

const HASH_LENGTH: usize = 8;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize build manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("Catalog validation failed with {0} error(s)")]
    Validation(usize),
}

/// One page to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildEntry {
    pub locale: Locale,
}

impl BuildEntry {
    /// Path of the entry relative to the output directory.
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(self.locale.code()).join("index.html")
    }
}

/// What to build and where.
#[derive(Debug, Clone)]
pub struct BuildPlan {
    pub out_dir: PathBuf,
    pub entries: Vec<BuildEntry>,
    /// Fail the build when the catalog validator reports errors.
    pub strict: bool,
}

impl BuildPlan {
    /// One entry per locale, in registry order.
    pub fn from_registry(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            entries: Locale::all()
                .into_iter()
                .map(|locale| BuildEntry { locale })
                .collect(),
            strict: false,
        }
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Files written by a build, relative to the output directory.
#[derive(Debug, Clone)]
pub struct BuildOutput {
    pub entries: Vec<PathBuf>,
    pub assets: Vec<String>,
    pub manifest: PathBuf,
}

#[derive(Debug, Serialize)]
struct Manifest<'a> {
    generated_at: DateTime<Utc>,
    canonical: &'a str,
    entries: Vec<ManifestEntry<'a>>,
    assets: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ManifestEntry<'a> {
    locale: &'a str,
    path: String,
    title: &'a str,
}

/// `assets/[name]-[hash].[ext]`
pub fn asset_file_name(name: &str, content: &str, ext: &str) -> String {
    format!("assets/{}-{}.{}", name, fingerprint(content), ext)
}

/// First hex characters of the SHA-256 of `content`.
pub fn fingerprint(content: &str) -> String {
    let digest = hex::encode(Sha256::digest(content.as_bytes()));
    digest[..HASH_LENGTH].to_string()
}

/// Render every entry of `plan` to disk.
pub fn build_site(
    plan: &BuildPlan,
    catalog: &LocaleCatalog,
    site: &SiteDetails,
) -> Result<BuildOutput, BuildError> {
    let report = CatalogValidator::validate(catalog);
    for warning in &report.warnings {
        warn!("Catalog: {}", warning);
    }
    for error in &report.errors {
        warn!("Catalog error: {}", error);
    }
    if plan.strict && report.has_errors() {
        return Err(BuildError::Validation(report.errors.len()));
    }

    let css = render::stylesheet();
    let stylesheet = asset_file_name("site", css, "css");
    write_file(&plan.out_dir.join(&stylesheet), css)?;
    info!("Wrote {}", stylesheet);

    // Entries live one directory below the output root.
    let stylesheet_href = format!("../{}", stylesheet);
    let mut entries = Vec::with_capacity(plan.entries.len());
    let mut manifest_entries = Vec::with_capacity(plan.entries.len());

    for entry in &plan.entries {
        let ctx = PageContext {
            catalog,
            locale: entry.locale,
            view: ViewState::default(),
            links: LinkStyle::Static,
            stylesheet_href: &stylesheet_href,
            site,
        };
        let page = render::render_page(&ctx).into_string();

        let relative = entry.output_path();
        write_file(&plan.out_dir.join(&relative), &page)?;
        info!("Wrote {} ({} bytes)", relative.display(), page.len());

        manifest_entries.push(ManifestEntry {
            locale: entry.locale.code(),
            path: relative.to_string_lossy().replace('\\', "/"),
            title: catalog.t(entry.locale, "meta.title"),
        });
        entries.push(relative);
    }

    let canonical = Locale::canonical();
    write_file(&plan.out_dir.join("index.html"), &redirect_page(canonical))?;

    let assets = vec![stylesheet];
    let manifest = Manifest {
        generated_at: Utc::now(),
        canonical: canonical.code(),
        entries: manifest_entries,
        assets: assets.clone(),
    };
    let manifest_path = PathBuf::from("manifest.json");
    write_file(
        &plan.out_dir.join(&manifest_path),
        &serde_json::to_string_pretty(&manifest)?,
    )?;

    info!(
        "Built {} locale entries into {}",
        entries.len(),
        plan.out_dir.display()
    );

    Ok(BuildOutput {
        entries,
        assets,
        manifest: manifest_path,
    })
}

fn redirect_page(target: Locale) -> String {
    let href = format!("{}/index.html", target.code());
    html! {
        (DOCTYPE)
        html lang=(target.code()) {
            head {
                meta charset="utf-8";
                meta http-equiv="refresh" content=(format!("0; url={}", href));
                link rel="canonical" href=(href);
            }
            body {
                a href=(href) { (target.native_name()) }
            }
        }
    }
    .into_string()
}

fn write_file(path: &Path, content: &str) -> Result<(), BuildError> {
    let io_error = |source| BuildError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_error)?;
    }
    std::fs::write(path, content).map_err(io_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_has_entry_per_locale() {
        let plan = BuildPlan::from_registry("dist");
        let paths: Vec<_> = plan.entries.iter().map(BuildEntry::output_path).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("zh-CN/index.html"),
                PathBuf::from("en/index.html"),
                PathBuf::from("ja/index.html"),
            ]
        );
        assert!(!plan.strict);
    }

    #[test]
    fn test_fingerprint_is_stable_and_short() {
        let first = fingerprint("body{}");
        assert_eq!(first.len(), HASH_LENGTH);
        assert_eq!(first, fingerprint("body{}"));
        assert_ne!(first, fingerprint("body{color:red}"));
    }

    #[test]
    fn test_asset_file_name_pattern() {
        let name = asset_file_name("site", "body{}", "css");
        assert!(name.starts_with("assets/site-"));
        assert!(name.ends_with(".css"));
        assert_eq!(name.len(), "assets/site-.css".len() + HASH_LENGTH);
    }

    #[test]
    fn test_redirect_targets_canonical() {
        let page = redirect_page(Locale::canonical());
        assert!(page.contains(r#"content="0; url=zh-CN/index.html""#));
    }

    #[test]
    fn test_strict_build_fails_on_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = LocaleCatalog::from_sources(&[
            ("zh-CN", r#"{"nav": {"home": "首页"}}"#),
            ("en", "{}"),
            ("ja", r#"{"nav": {"home": "ホーム"}}"#),
        ])
        .unwrap();

        let plan = BuildPlan::from_registry(dir.path()).strict(true);
        let result = build_site(&plan, &catalog, &SiteDetails::default());

        assert!(matches!(result, Err(BuildError::Validation(1))));
        assert!(!dir.path().join("en/index.html").exists());
    }

    #[test]
    fn test_lenient_build_renders_missing_keys_empty() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = LocaleCatalog::from_sources(&[
            ("zh-CN", r#"{"nav": {"home": "首页"}}"#),
            ("en", "{}"),
            ("ja", r#"{"nav": {"home": "ホーム"}}"#),
        ])
        .unwrap();

        let plan = BuildPlan::from_registry(dir.path());
        let output = build_site(&plan, &catalog, &SiteDetails::default()).expect("builds");

        assert_eq!(output.entries.len(), 3);
        assert!(catalog.metrics().misses() > 0);
    }

    #[test]
    fn test_write_failure_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "file, not a directory").unwrap();

        let plan = BuildPlan::from_registry(&blocker);
        let catalog = LocaleCatalog::embedded().unwrap();
        let error = build_site(&plan, &catalog, &SiteDetails::default()).unwrap_err();

        assert!(matches!(error, BuildError::Io { .. }));
        assert!(error.to_string().contains("blocker"));
    }
}
