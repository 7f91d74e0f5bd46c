//! Locale type: validated handle on a registry entry.

use crate::i18n::{LocaleConfig, LocaleRegistry};
use anyhow::{Context, Result};
use std::fmt;

/// A validated locale.
///
/// Only registered codes can be turned into a `Locale`, so rendering code
/// never has to handle an unknown locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    code: &'static str,
}

impl Locale {
    pub const ZH_CN: Locale = Locale { code: "zh-CN" };
    pub const EN: Locale = Locale { code: "en" };
    pub const JA: Locale = Locale { code: "ja" };

    pub fn from_code(code: &str) -> Result<Locale> {
        let config = LocaleRegistry::get()
            .get_by_code(code)
            .with_context(|| format!("Unknown locale code: '{}'", code))?;
        Ok(Locale { code: config.code })
    }

    /// The canonical locale (the site's original language).
    pub fn canonical() -> Locale {
        Locale {
            code: LocaleRegistry::get().canonical().code,
        }
    }

    /// Every locale in registry order.
    pub fn all() -> Vec<Locale> {
        LocaleRegistry::get()
            .list()
            .iter()
            .map(|config| Locale { code: config.code })
            .collect()
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// # Panics
    /// Panics if the code is not in the registry, which cannot happen for a
    /// `Locale` built through `from_code` or the constants.
    fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be valid")
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}
