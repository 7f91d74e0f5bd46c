use crate::i18n::LocaleCatalog;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

pub const DEFAULT_HERO_IMAGE: &str = "https://images.pexels.com/photos/161758/governor-s-mansion-montgomery-alabama-grand-staircase-161758.jpeg?auto=compress&cs=tinysrgb&w=1600";

/// Brand details that are configuration rather than translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteDetails {
    pub phone: String,
    pub email: String,
    pub hero_image_url: String,
    pub copyright_year: String,
}

impl Default for SiteDetails {
    fn default() -> Self {
        Self {
            phone: "13901189015".to_string(),
            email: "tanzozhuangzhe@126.com".to_string(),
            hero_image_url: DEFAULT_HERO_IMAGE.to_string(),
            copyright_year: "2024".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    // Static build
    pub out_dir: PathBuf,
    pub locales_dir: Option<PathBuf>,

    // Preview server
    pub host: String,
    pub port: u16,

    // Content
    pub site: SiteDetails,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = SiteDetails::default();

        Ok(Self {
            out_dir: std::env::var("SITE_OUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("dist")),
            locales_dir: std::env::var("SITE_LOCALES_DIR").ok().map(PathBuf::from),

            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: match std::env::var("PORT") {
                Ok(value) => value
                    .parse()
                    .with_context(|| format!("PORT must be a port number, got '{}'", value))?,
                Err(_) => 8080,
            },

            site: SiteDetails {
                phone: std::env::var("SITE_PHONE").unwrap_or(defaults.phone),
                email: std::env::var("SITE_EMAIL").unwrap_or(defaults.email),
                hero_image_url: std::env::var("SITE_HERO_IMAGE").unwrap_or(defaults.hero_image_url),
                copyright_year: std::env::var("SITE_COPYRIGHT_YEAR")
                    .unwrap_or(defaults.copyright_year),
            },
        })
    }

    /// Load the catalog from `locales_dir` when set, otherwise the
    /// catalogs compiled into the binary.
    pub fn load_catalog(&self) -> Result<LocaleCatalog> {
        match &self.locales_dir {
            Some(dir) => {
                info!("Loading catalogs from {}", dir.display());
                LocaleCatalog::from_dir(dir)
            }
            None => LocaleCatalog::embedded(),
        }
    }

    /// Address the preview server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
