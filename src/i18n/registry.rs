//! Locale registry: the closed set of locales the site is published in.
//!
//! Pages are only ever rendered for a locale found here, the static build
//! emits one entry per locale, and catalogs are validated against the
//! canonical one.

use std::sync::OnceLock;

/// A supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// BCP 47 locale code, used in URLs, directory names and `lang`
    pub code: &'static str,

    /// Name shown in the language switcher (e.g., "简体中文")
    pub native_name: &'static str,

    /// Reference locale for validation and the site root redirect
    pub is_canonical: bool,
}

pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Codes are matched exactly; "zh-cn" is not "zh-CN".
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// All locales, in switcher and build order.
    pub fn list(&self) -> &[LocaleConfig] {
        &self.locales
    }

    /// # Panics
    /// Panics if zero or several canonical locales are defined (this
    /// indicates a configuration error in `default_locales`).
    pub fn canonical(&self) -> &LocaleConfig {
        let mut canonical = self.locales.iter().filter(|locale| locale.is_canonical);

        match (canonical.next(), canonical.next()) {
            (Some(locale), None) => locale,
            (None, _) => panic!("No canonical locale found in registry"),
            (Some(_), Some(_)) => panic!("Multiple canonical locales found in registry"),
        }
    }
}

/// Simplified Chinese is the site's original language.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "zh-CN",
            native_name: "简体中文",
            is_canonical: true,
        },
        LocaleConfig {
            code: "en",
            native_name: "English",
            is_canonical: false,
        },
        LocaleConfig {
            code: "ja",
            native_name: "日本語",
            is_canonical: false,
        },
    ]
}
