//! Locale catalog: every user-facing string of the site, per locale.
//!
//! Catalog sources are nested JSON objects. They are flattened on load so
//! that `{"nav": {"home": "首页"}}` is looked up as `nav.home`. Lookups are
//! flat: a key missing from a locale renders as the empty string, it is
//! never resolved through another locale.

use crate::i18n::{CatalogMetrics, Locale};
use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::{debug, warn};

const EMBEDDED_SOURCES: &[(&str, &str)] = &[
    ("zh-CN", include_str!("../../locales/zh-CN.json")),
    ("en", include_str!("../../locales/en.json")),
    ("ja", include_str!("../../locales/ja.json")),
];

/// Read-only mapping from locale to dotted key to display string.
#[derive(Debug)]
pub struct LocaleCatalog {
    strings: HashMap<Locale, BTreeMap<String, String>>,
    metrics: CatalogMetrics,
}

impl LocaleCatalog {
    /// Load the catalogs compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_sources(EMBEDDED_SOURCES)
    }

    /// Load `<dir>/<code>.json` for every registered locale.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let mut sources = Vec::new();
        for locale in Locale::all() {
            let path = dir.join(format!("{}.json", locale.code()));
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read catalog {}", path.display()))?;
            sources.push((locale.code(), content));
        }

        let borrowed: Vec<(&str, &str)> = sources
            .iter()
            .map(|(code, content)| (*code, content.as_str()))
            .collect();
        Self::from_sources(&borrowed)
    }

    /// Parse raw `(locale code, JSON)` pairs.
    pub fn from_sources(sources: &[(&str, &str)]) -> Result<Self> {
        let mut strings = HashMap::new();

        for (code, json) in sources {
            let locale = Locale::from_code(code)?;
            let value: Value = serde_json::from_str(json)
                .with_context(|| format!("Catalog for '{}' is not valid JSON", code))?;

            let mut flat = BTreeMap::new();
            flatten(locale, "", &value, &mut flat)?;
            debug!("Loaded {} strings for locale {}", flat.len(), locale);

            strings.insert(locale, flat);
        }

        Ok(Self {
            strings,
            metrics: CatalogMetrics::new(),
        })
    }

    /// Look up a string without recording metrics or logging.
    pub fn lookup(&self, locale: Locale, key: &str) -> Option<&str> {
        self.strings
            .get(&locale)
            .and_then(|strings| strings.get(key))
            .map(String::as_str)
    }

    /// Translate a key, degrading to the empty string when it is missing.
    pub fn t(&self, locale: Locale, key: &str) -> &str {
        match self.lookup(locale, key) {
            Some(value) => {
                self.metrics.record_hit();
                value
            }
            None => {
                self.metrics.record_miss();
                warn!("Missing translation key '{}' for locale {}", key, locale);
                ""
            }
        }
    }

    /// Translate a key and substitute `{name}` placeholders.
    pub fn format(&self, locale: Locale, key: &str, args: &[(&str, &str)]) -> String {
        let mut text = self.t(locale, key).to_string();
        for (name, value) in args {
            text = text.replace(&format!("{{{}}}", name), value);
        }
        text
    }

    /// All keys defined for a locale, sorted.
    pub fn keys(&self, locale: Locale) -> Vec<&str> {
        self.strings
            .get(&locale)
            .map(|strings| strings.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Locales this catalog has strings for, in registry order.
    pub fn locales(&self) -> Vec<Locale> {
        Locale::all()
            .into_iter()
            .filter(|locale| self.strings.contains_key(locale))
            .collect()
    }

    pub fn metrics(&self) -> &CatalogMetrics {
        &self.metrics
    }
}

fn flatten(
    locale: Locale,
    prefix: &str,
    value: &Value,
    out: &mut BTreeMap<String, String>,
) -> Result<()> {
    match value {
        Value::Object(map) => {
            for (name, child) in map {
                let key = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{}.{}", prefix, name)
                };
                flatten(locale, &key, child, out)?;
            }
            Ok(())
        }
        Value::String(text) if !prefix.is_empty() => {
            out.insert(prefix.to_string(), text.clone());
            Ok(())
        }
        _ if prefix.is_empty() => bail!("Catalog for '{}' must be a JSON object", locale),
        _ => bail!(
            "Catalog for '{}' has a non-string value at '{}'",
            locale,
            prefix
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LocaleCatalog {
        LocaleCatalog::from_sources(&[
            ("zh-CN", r#"{"nav": {"home": "首页"}, "footer": {"phone": "电话: {phone}"}}"#),
            ("en", r#"{"nav": {"home": "Home"}}"#),
        ])
        .expect("valid sources")
    }

    #[test]
    fn test_embedded_catalog_loads_all_locales() {
        let catalog = LocaleCatalog::embedded().expect("embedded catalogs parse");
        assert_eq!(catalog.locales(), vec![Locale::ZH_CN, Locale::EN, Locale::JA]);
    }

    #[test]
    fn test_embedded_nav_labels() {
        let catalog = LocaleCatalog::embedded().unwrap();
        assert_eq!(catalog.t(Locale::ZH_CN, "nav.home"), "首页");
        assert_eq!(catalog.t(Locale::EN, "nav.careers"), "Careers");
        assert_eq!(catalog.t(Locale::JA, "nav.contact"), "お問い合わせ");
    }

    #[test]
    fn test_flatten_produces_dotted_keys() {
        let catalog = sample();
        assert_eq!(catalog.keys(Locale::ZH_CN), vec!["footer.phone", "nav.home"]);
    }

    #[test]
    fn test_lookup_missing_locale() {
        let catalog = sample();
        assert_eq!(catalog.lookup(Locale::JA, "nav.home"), None);
        assert!(catalog.keys(Locale::JA).is_empty());
    }

    #[test]
    fn test_missing_key_degrades_to_empty() {
        let catalog = sample();
        assert_eq!(catalog.t(Locale::EN, "footer.phone"), "");
        assert_eq!(catalog.metrics().misses(), 1);
    }

    #[test]
    fn test_no_fallback_to_canonical() {
        let catalog = sample();
        assert!(catalog.lookup(Locale::ZH_CN, "footer.phone").is_some());
        assert_eq!(catalog.lookup(Locale::EN, "footer.phone"), None);
    }

    #[test]
    fn test_hits_are_counted() {
        let catalog = sample();
        catalog.t(Locale::ZH_CN, "nav.home");
        catalog.t(Locale::EN, "nav.home");
        assert_eq!(catalog.metrics().lookups(), 2);
        assert_eq!(catalog.metrics().misses(), 0);
    }

    #[test]
    fn test_format_substitutes_placeholders() {
        let catalog = sample();
        let text = catalog.format(Locale::ZH_CN, "footer.phone", &[("phone", "13901189015")]);
        assert_eq!(text, "电话: 13901189015");
    }

    #[test]
    fn test_non_string_leaf_rejected() {
        let result = LocaleCatalog::from_sources(&[("en", r#"{"nav": {"home": 1}}"#)]);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("nav.home"));
    }

    #[test]
    fn test_top_level_must_be_object() {
        assert!(LocaleCatalog::from_sources(&[("en", r#""just a string""#)]).is_err());
    }

    #[test]
    fn test_unknown_locale_rejected() {
        assert!(LocaleCatalog::from_sources(&[("fr", "{}")]).is_err());
    }

    #[test]
    fn test_invalid_json_rejected() {
        let result = LocaleCatalog::from_sources(&[("en", "{not json")]);
        assert!(result.unwrap_err().to_string().contains("not valid JSON"));
    }

    #[test]
    fn test_from_dir_reads_every_locale() {
        let dir = tempfile::tempdir().unwrap();
        for code in ["zh-CN", "en", "ja"] {
            std::fs::write(
                dir.path().join(format!("{}.json", code)),
                format!(r#"{{"brand": {{"name": "TANZO-{}"}}}}"#, code),
            )
            .unwrap();
        }

        let catalog = LocaleCatalog::from_dir(dir.path()).expect("directory loads");
        assert_eq!(catalog.t(Locale::JA, "brand.name"), "TANZO-ja");
    }

    #[test]
    fn test_from_dir_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = LocaleCatalog::from_dir(dir.path());
        assert!(result.unwrap_err().to_string().contains("zh-CN.json"));
    }
}
