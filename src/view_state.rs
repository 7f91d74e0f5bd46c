//! Ephemeral page state: menu visibility, highlighted item, active locale.
//!
//! Every mutation is total. Inputs come from links the renderer produced
//! out of the same static lists, so there is nothing to reject; the one
//! exceptions are `ViewState::from_query` and `LocaleStore::switch_to_code`,
//! which see whatever a browser sends.

use crate::i18n::Locale;
use crate::navigation::{self, NavigationItem};
use anyhow::Result;
use serde::Deserialize;
use tracing::debug;

/// UI flags of one page view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub is_mobile_menu_open: bool,
    pub active_menu_item: &'static str,
    pub is_language_menu_open: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            is_mobile_menu_open: false,
            active_menu_item: navigation::default_item().key,
            is_language_menu_open: false,
        }
    }
}

/// Query parameters carrying a `ViewState` between preview requests.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewQuery {
    pub active: Option<String>,
    pub menu: Option<bool>,
    pub lang_menu: Option<bool>,
}

impl ViewState {
    pub fn toggle_mobile_menu(&mut self) {
        self.is_mobile_menu_open = !self.is_mobile_menu_open;
    }

    /// Highlight `item` and close the mobile overlay.
    pub fn select_item(&mut self, item: &'static NavigationItem) {
        self.active_menu_item = item.key;
        self.is_mobile_menu_open = false;
    }

    pub fn toggle_language_menu(&mut self) {
        self.is_language_menu_open = !self.is_language_menu_open;
    }

    pub fn close_language_menu(&mut self) {
        self.is_language_menu_open = false;
    }

    pub fn is_active(&self, item: &NavigationItem) -> bool {
        self.active_menu_item == item.key
    }

    /// Copy of this state with `change` applied; used to build the link
    /// behind each clickable element.
    pub fn after(&self, change: impl FnOnce(&mut ViewState)) -> ViewState {
        let mut next = *self;
        change(&mut next);
        next
    }

    /// Encode as a query string, emitting only non-default fields.
    ///
    /// Returns an empty string for the default state, otherwise a string
    /// starting with `?`.
    pub fn to_query(&self) -> String {
        let mut params = Vec::new();
        if self.active_menu_item != navigation::default_item().key {
            params.push(format!("active={}", self.active_menu_item));
        }
        if self.is_mobile_menu_open {
            params.push("menu=true".to_string());
        }
        if self.is_language_menu_open {
            params.push("lang_menu=true".to_string());
        }

        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }

    /// Decode a preview request's query parameters.
    pub fn from_query(query: &ViewQuery) -> ViewState {
        let defaults = ViewState::default();
        let active_menu_item = match query.active.as_deref() {
            None => defaults.active_menu_item,
            Some(key) => match navigation::find(key) {
                Some(item) => item.key,
                None => {
                    debug!("Ignoring unknown navigation key '{}'", key);
                    defaults.active_menu_item
                }
            },
        };

        ViewState {
            is_mobile_menu_open: query.menu.unwrap_or(false),
            active_menu_item,
            is_language_menu_open: query.lang_menu.unwrap_or(false),
        }
    }
}

/// Holder of the active locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleStore {
    active: Locale,
}

impl LocaleStore {
    pub fn new(active: Locale) -> Self {
        Self { active }
    }

    pub fn active(&self) -> Locale {
        self.active
    }

    /// Make `locale` active. Returns `false` when it already was.
    pub fn switch(&mut self, locale: Locale) -> bool {
        if self.active == locale {
            return false;
        }
        debug!("Switching locale {} -> {}", self.active, locale);
        self.active = locale;
        true
    }

    /// Switch to the locale named by `code`, leaving the store untouched
    /// when the code is not registered.
    pub fn switch_to_code(&mut self, code: &str) -> Result<bool> {
        let locale = Locale::from_code(code)?;
        Ok(self.switch(locale))
    }
}

impl Default for LocaleStore {
    fn default() -> Self {
        Self::new(Locale::canonical())
    }
}
