//! TANZO marketing site: locale catalogs, page rendering, static build and
//! preview server.

pub mod bundle;
pub mod config;
pub mod i18n;
pub mod navigation;
pub mod render;
pub mod server;
pub mod view_state;
