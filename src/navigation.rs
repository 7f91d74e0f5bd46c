//! Site navigation: the fixed, ordered list of page sections.
//!
//! The same list feeds the desktop sidebar and the mobile overlay. Labels
//! are not stored here; they are looked up under `nav.<key>`.

/// A navigation entry pointing at a section anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationItem {
    /// Stable identifier, also the catalog key suffix (e.g., "projects")
    pub key: &'static str,

    /// In-page anchor (e.g., "#projects")
    pub href: &'static str,
}

impl NavigationItem {
    /// Catalog key of the item's label.
    pub fn label_key(&self) -> String {
        format!("nav.{}", self.key)
    }
}

const NAVIGATION_ITEMS: [NavigationItem; 7] = [
    NavigationItem { key: "home", href: "#home" },
    NavigationItem { key: "projects", href: "#projects" },
    NavigationItem { key: "services", href: "#services" },
    NavigationItem { key: "news", href: "#news" },
    NavigationItem { key: "about", href: "#about" },
    NavigationItem { key: "contact", href: "#contact" },
    NavigationItem { key: "careers", href: "#careers" },
];

/// Keys of the footer's quick links, in display order.
pub const QUICK_LINK_KEYS: [&str; 3] = ["about", "services", "contact"];

/// All navigation items in display order.
pub fn items() -> &'static [NavigationItem] {
    &NAVIGATION_ITEMS
}

/// Find an item by key.
pub fn find(key: &str) -> Option<&'static NavigationItem> {
    NAVIGATION_ITEMS.iter().find(|item| item.key == key)
}

/// The item highlighted when a page first loads.
pub fn default_item() -> &'static NavigationItem {
    &NAVIGATION_ITEMS[0]
}

/// Footer quick links, resolved against the navigation list.
pub fn quick_links() -> impl Iterator<Item = &'static NavigationItem> {
    QUICK_LINK_KEYS.iter().filter_map(|key| find(key))
}
