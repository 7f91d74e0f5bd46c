//! Internationalization (i18n) for the site.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the supported locales
//! - `locale`: Validated `Locale` handle
//! - `catalog`: Per-locale string tables, looked up by dotted key
//! - `validator`: Cross-locale key and placeholder consistency
//! - `metrics`: Lookup and missing-key counters
//!
//! # Example
//!
//! ```rust,ignore
//! use tanzo_site::i18n::{Locale, LocaleCatalog};
//!
//! let catalog = LocaleCatalog::embedded()?;
//! let label = catalog.t(Locale::from_code("ja")?, "nav.home");
//! ```

mod catalog;
mod locale;
mod metrics;
mod registry;
mod validator;

pub use catalog::LocaleCatalog;
pub use locale::Locale;
pub use metrics::{CatalogMetrics, MetricsReport};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use validator::{CatalogValidator, ValidationReport};
