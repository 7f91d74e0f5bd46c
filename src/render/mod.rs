//! HTML rendering of the site.
//!
//! The page is plain server-rendered markup. Each clickable element is a
//! link whose target encodes the state after the click, so the same
//! markup works with or without the preview server:
//!
//! - `LinkStyle::Stateful` links to `/<locale>/?<view state>` and only
//!   renders the mobile overlay and language options when they are open.
//! - `LinkStyle::Static` links to anchors and sibling locale directories;
//!   the overlay and options are always present and shown with `:target`,
//!   and the highlighted navigation item follows the targeted section
//!   anchor through the stylesheet instead of an `active` class.

mod layout;
mod nav;
mod sections;
mod styles;

pub use styles::stylesheet;

use crate::config::SiteDetails;
use crate::i18n::{Locale, LocaleCatalog};
use crate::navigation::NavigationItem;
use crate::view_state::ViewState;
use maud::Markup;

pub(crate) const MOBILE_OVERLAY_ID: &str = "mobile-menu";

/// Body class of static pages, scoping the `:target` highlight rules.
pub(crate) const STATIC_NAV_CLASS: &str = "static-nav";

/// How interactive elements link to the state after a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStyle {
    Stateful,
    Static,
}

/// Everything needed to render one page.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub catalog: &'a LocaleCatalog,
    pub locale: Locale,
    pub view: ViewState,
    pub links: LinkStyle,
    pub stylesheet_href: &'a str,
    pub site: &'a SiteDetails,
}

impl<'a> PageContext<'a> {
    pub(crate) fn t(&self, key: &str) -> &'a str {
        self.catalog.t(self.locale, key)
    }

    fn stateful_href(&self, locale: Locale, next: ViewState) -> String {
        format!("/{}/{}", locale.code(), next.to_query())
    }

    /// Whether `item` carries the `active` class. Static pages leave this
    /// to the stylesheet since the item changes without a new page.
    pub(crate) fn is_active(&self, item: &NavigationItem) -> bool {
        match self.links {
            LinkStyle::Stateful => self.view.is_active(item),
            LinkStyle::Static => false,
        }
    }

    pub(crate) fn nav_href(&self, item: &'static NavigationItem) -> String {
        match self.links {
            LinkStyle::Stateful => {
                let next = self.view.after(|view| view.select_item(item));
                format!("{}{}", self.stateful_href(self.locale, next), item.href)
            }
            LinkStyle::Static => item.href.to_string(),
        }
    }

    /// Target of the hamburger button in the mobile bar.
    pub(crate) fn menu_open_href(&self) -> String {
        match self.links {
            LinkStyle::Stateful => {
                self.stateful_href(self.locale, self.view.after(ViewState::toggle_mobile_menu))
            }
            LinkStyle::Static => format!("#{}", MOBILE_OVERLAY_ID),
        }
    }

    /// Target of the close button inside the overlay.
    pub(crate) fn menu_close_href(&self) -> String {
        match self.links {
            LinkStyle::Stateful => {
                self.stateful_href(self.locale, self.view.after(ViewState::toggle_mobile_menu))
            }
            LinkStyle::Static => "#".to_string(),
        }
    }

    pub(crate) fn language_toggle_href(&self, options_id: &str) -> String {
        match self.links {
            LinkStyle::Stateful => {
                self.stateful_href(self.locale, self.view.after(ViewState::toggle_language_menu))
            }
            LinkStyle::Static => format!("#{}", options_id),
        }
    }

    /// Target of the close link inside the language options. Stateful
    /// pages close them through the toggle itself.
    pub(crate) fn language_close_href(&self) -> Option<&'static str> {
        match self.links {
            LinkStyle::Stateful => None,
            LinkStyle::Static => Some("#"),
        }
    }

    pub(crate) fn locale_href(&self, target: Locale) -> String {
        match self.links {
            LinkStyle::Stateful => {
                self.stateful_href(target, self.view.after(ViewState::close_language_menu))
            }
            LinkStyle::Static => format!("../{}/index.html", target.code()),
        }
    }

    pub(crate) fn shows_mobile_overlay(&self) -> bool {
        match self.links {
            LinkStyle::Stateful => self.view.is_mobile_menu_open,
            LinkStyle::Static => true,
        }
    }

    pub(crate) fn shows_language_options(&self) -> bool {
        match self.links {
            LinkStyle::Stateful => self.view.is_language_menu_open,
            LinkStyle::Static => true,
        }
    }
}

/// Render the full HTML document.
pub fn render_page(ctx: &PageContext<'_>) -> Markup {
    layout::document(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation;

    fn render(locale: Locale, view: ViewState, links: LinkStyle) -> String {
        let catalog = LocaleCatalog::embedded().unwrap();
        let site = SiteDetails::default();
        let ctx = PageContext {
            catalog: &catalog,
            locale,
            view,
            links,
            stylesheet_href: "/assets/site.css",
            site: &site,
        };
        render_page(&ctx).into_string()
    }

    fn nav_entries(html: &str) -> Vec<&str> {
        html.split("data-nav=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .collect()
    }

    #[test]
    fn test_document_shell() {
        let html = render(Locale::EN, ViewState::default(), LinkStyle::Stateful);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="en">"#));
        assert!(html.contains(r#"href="/assets/site.css""#));
        assert!(html.contains("<title>TANZO Naqu Costume Experience Space</title>"));
    }

    #[test]
    fn test_closed_overlay_renders_desktop_nav_only() {
        let html = render(Locale::ZH_CN, ViewState::default(), LinkStyle::Stateful);
        let keys: Vec<_> = navigation::items().iter().map(|item| item.key).collect();
        assert_eq!(nav_entries(&html), keys);
        assert!(!html.contains(r#"id="mobile-menu""#));
    }

    #[test]
    fn test_open_overlay_renders_nav_twice_in_order() {
        let view = ViewState::default().after(ViewState::toggle_mobile_menu);
        let html = render(Locale::JA, view, LinkStyle::Stateful);
        let keys: Vec<_> = navigation::items().iter().map(|item| item.key).collect();

        let entries = nav_entries(&html);
        assert_eq!(entries.len(), 14);
        assert_eq!(&entries[..7], keys.as_slice());
        assert_eq!(&entries[7..], keys.as_slice());
        assert!(html.contains(r#"id="mobile-menu""#));
    }

    #[test]
    fn test_active_item_is_marked() {
        let view = ViewState {
            active_menu_item: "news",
            ..ViewState::default()
        };
        let html = render(Locale::EN, view, LinkStyle::Stateful);
        assert!(html.contains(r#"class="menu-item active" data-nav="news""#));
        assert!(html.contains(r#"class="menu-item" data-nav="home""#));
        assert_eq!(html.matches(r#"aria-current="page""#).count(), 1);
    }

    #[test]
    fn test_nav_link_closes_overlay() {
        let view = ViewState::default().after(ViewState::toggle_mobile_menu);
        let html = render(Locale::EN, view, LinkStyle::Stateful);
        assert!(html.contains(r#"href="/en/?active=projects#projects""#));
        assert!(!html.contains("active=projects&amp;menu=true"));
    }

    #[test]
    fn test_menu_button_toggles() {
        let closed = render(Locale::EN, ViewState::default(), LinkStyle::Stateful);
        assert!(closed.contains(r#"href="/en/?menu=true""#));

        let open = render(
            Locale::EN,
            ViewState::default().after(ViewState::toggle_mobile_menu),
            LinkStyle::Stateful,
        );
        assert!(open.contains(r#"href="/en/""#));
    }

    #[test]
    fn test_language_options_hidden_until_open() {
        let closed = render(Locale::EN, ViewState::default(), LinkStyle::Stateful);
        assert!(!closed.contains("language-option"));

        let view = ViewState::default().after(ViewState::toggle_language_menu);
        let open = render(Locale::EN, view, LinkStyle::Stateful);
        assert!(open.contains("日本語"));
        assert!(open.contains(r#"href="/ja/""#));
    }

    #[test]
    fn test_locale_link_keeps_active_item() {
        let view = ViewState {
            active_menu_item: "careers",
            is_language_menu_open: true,
            ..ViewState::default()
        };
        let html = render(Locale::EN, view, LinkStyle::Stateful);
        assert!(html.contains(r#"href="/zh-CN/?active=careers""#));
    }

    #[test]
    fn test_locale_strings_substituted() {
        let zh = render(Locale::ZH_CN, ViewState::default(), LinkStyle::Stateful);
        let en = render(Locale::EN, ViewState::default(), LinkStyle::Stateful);

        assert!(zh.contains("项目展示"));
        assert!(zh.contains("电话: 13901189015"));
        assert!(en.contains("Projects"));
        assert!(en.contains("Email: tanzozhuangzhe@126.com"));
        assert!(!en.contains("项目展示"));
    }

    #[test]
    fn test_same_locale_renders_identical_text() {
        let first = render(Locale::JA, ViewState::default(), LinkStyle::Static);
        let second = render(Locale::JA, ViewState::default(), LinkStyle::Static);
        assert_eq!(first, second);
    }

    #[test]
    fn test_static_links() {
        let html = render(Locale::ZH_CN, ViewState::default(), LinkStyle::Static);
        assert!(html.contains(r##"href="#mobile-menu""##));
        assert!(html.contains(r#"href="../en/index.html""#));
        assert!(html.contains(r##"href="#services""##));
        assert!(!html.contains("?active="));
        assert_eq!(nav_entries(&html).len(), 14);
    }

    #[test]
    fn test_static_nav_targets_exist_for_every_item() {
        let html = render(Locale::EN, ViewState::default(), LinkStyle::Static);
        for item in navigation::items() {
            assert!(html.contains(&format!(r#"href="{}""#, item.href)));
            assert_eq!(html.matches(&format!(r#"id="{}""#, item.key)).count(), 1);
        }
        assert!(html.contains(r#"<body class="static-nav">"#));
    }

    #[test]
    fn test_static_highlight_left_to_stylesheet() {
        let view = ViewState {
            active_menu_item: "news",
            ..ViewState::default()
        };
        let html = render(Locale::JA, view, LinkStyle::Static);
        assert!(!html.contains("menu-item active"));
        assert!(!html.contains("mobile-item active"));
        assert!(!html.contains("aria-current"));
    }

    #[test]
    fn test_stateful_body_has_no_static_class() {
        let html = render(Locale::EN, ViewState::default(), LinkStyle::Stateful);
        assert!(html.contains("<body>"));
        assert!(html.contains(r#"class="menu-item active" data-nav="home""#));
    }

    #[test]
    fn test_static_language_options_can_be_closed() {
        let html = render(Locale::ZH_CN, ViewState::default(), LinkStyle::Static);
        assert_eq!(html.matches(r##"<a class="language-close" href="#">关闭</a>"##).count(), 2);
        assert!(html.contains(r##"href="#language-menu""##));
        assert!(html.contains(r##"href="#language-menu-mobile""##));
    }

    #[test]
    fn test_stateful_language_options_close_through_toggle() {
        let view = ViewState::default().after(ViewState::toggle_language_menu);
        let html = render(Locale::EN, view, LinkStyle::Stateful);
        assert!(!html.contains("language-close"));
        assert!(html.contains(r#"class="language-toggle" href="/en/""#));
    }

    #[test]
    fn test_footer_and_hero() {
        let html = render(Locale::ZH_CN, ViewState::default(), LinkStyle::Static);
        assert!(html.contains("Naqu costume experience space"));
        assert!(html.contains("那曲服饰馆 / 那曲品牌体验"));
        assert!(html.contains("© 2024 TANZO SPACE DESIGN."));
        assert!(html.contains("governor-s-mansion"));
    }
}
