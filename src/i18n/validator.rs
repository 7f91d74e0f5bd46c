//! Catalog consistency validation.
//!
//! Every locale is compared against the canonical one: keys must line up
//! and each string must use the same `{placeholder}` names, otherwise a
//! footer line renders with a literal `{phone}` or an empty gap.

use crate::i18n::{Locale, LocaleCatalog};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Keys the canonical locale defines but another locale lacks
    pub errors: Vec<String>,

    /// Extra keys, placeholder mismatches and empty strings
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for catalog consistency across locales.
pub struct CatalogValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl CatalogValidator {
    /// Validate every locale of `catalog` against the canonical locale.
    pub fn validate(catalog: &LocaleCatalog) -> ValidationReport {
        let mut report = ValidationReport::new();
        let canonical = Locale::canonical();
        let reference: BTreeSet<&str> = catalog.keys(canonical).into_iter().collect();

        for locale in Locale::all() {
            let keys: BTreeSet<&str> = catalog.keys(locale).into_iter().collect();

            for key in &keys {
                if catalog.lookup(locale, key).is_some_and(str::is_empty) {
                    report
                        .warnings
                        .push(format!("Empty string for '{}' in {}", key, locale));
                }
            }

            if locale == canonical {
                continue;
            }

            for missing in reference.difference(&keys) {
                report
                    .errors
                    .push(format!("Missing key '{}' in {}", missing, locale));
            }

            for extra in keys.difference(&reference) {
                report.warnings.push(format!(
                    "Key '{}' in {} is not defined for {}",
                    extra, locale, canonical
                ));
            }

            for key in reference.intersection(&keys) {
                let expected =
                    Self::extract_placeholders(catalog.lookup(canonical, key).unwrap_or(""));
                let found = Self::extract_placeholders(catalog.lookup(locale, key).unwrap_or(""));
                if expected != found {
                    report.warnings.push(format!(
                        "Placeholder mismatch for '{}' in {}: expected {:?}, found {:?}",
                        key, locale, expected, found
                    ));
                }
            }
        }

        report
    }

    /// Extract the distinct `{name}` placeholders of a string.
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex = PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{([a-z_]+)\}").unwrap());

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}
