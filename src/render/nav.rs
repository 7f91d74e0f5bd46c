//! Desktop sidebar, mobile bar with its overlay, and the language switcher.

use super::{PageContext, MOBILE_OVERLAY_ID};
use crate::i18n::Locale;
use crate::navigation;
use maud::{html, Markup, PreEscaped};

const MENU_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"><line x1="4" x2="20" y1="12" y2="12"/><line x1="4" x2="20" y1="6" y2="6"/><line x1="4" x2="20" y1="18" y2="18"/></svg>"#;

const CLOSE_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"><path d="M18 6 6 18"/><path d="m6 6 12 12"/></svg>"#;

pub(super) fn sidebar(ctx: &PageContext<'_>) -> Markup {
    html! {
        nav.sidebar {
            h1.brand { (ctx.t("brand.name")) }
            ul.sidebar-nav {
                @for item in navigation::items() {
                    @let active = ctx.is_active(item);
                    li {
                        a.menu-item.active[active]
                            data-nav=(item.key)
                            href=(ctx.nav_href(item))
                            aria-current=[active.then_some("page")] {
                            (ctx.t(&item.label_key()))
                        }
                    }
                }
            }
            (language_switcher(ctx, "language-menu"))
        }
    }
}

pub(super) fn mobile_bar(ctx: &PageContext<'_>) -> Markup {
    // The overlay's close button and the bar's open button point to the
    // same toggled state in stateful mode.
    html! {
        nav.mobile-bar {
            div.mobile-bar-header {
                h1.brand { (ctx.t("brand.name")) }
                (language_switcher(ctx, "language-menu-mobile"))
                @let label = if ctx.view.is_mobile_menu_open { "menu.close" } else { "menu.open" };
                a.icon-button href=(ctx.menu_open_href()) aria-label=(ctx.t(label)) {
                    @if ctx.view.is_mobile_menu_open {
                        (PreEscaped(CLOSE_ICON))
                    } @else {
                        (PreEscaped(MENU_ICON))
                    }
                }
            }
            @if ctx.shows_mobile_overlay() {
                (mobile_overlay(ctx))
            }
        }
    }
}

fn mobile_overlay(ctx: &PageContext<'_>) -> Markup {
    html! {
        div.mobile-overlay.open[ctx.view.is_mobile_menu_open] id=(MOBILE_OVERLAY_ID) {
            div.mobile-bar-header {
                h1.brand { (ctx.t("brand.name")) }
                a.icon-button href=(ctx.menu_close_href()) aria-label=(ctx.t("menu.close")) {
                    (PreEscaped(CLOSE_ICON))
                }
            }
            ul.mobile-nav {
                @for item in navigation::items() {
                    li {
                        a.mobile-item.active[ctx.is_active(item)]
                            data-nav=(item.key)
                            href=(ctx.nav_href(item)) {
                            (ctx.t(&item.label_key()))
                        }
                    }
                }
            }
            div.mobile-contact {
                p { (ctx.site.phone) }
                p { (ctx.site.email) }
            }
        }
    }
}

fn language_switcher(ctx: &PageContext<'_>, options_id: &str) -> Markup {
    html! {
        div.language-switcher {
            a.language-toggle
                href=(ctx.language_toggle_href(options_id))
                aria-label=(ctx.t("language.label")) {
                (ctx.t("language.label")) " · " (ctx.locale.native_name())
            }
            @if ctx.shows_language_options() {
                ul.language-options.open[ctx.view.is_language_menu_open] id=(options_id) {
                    @for locale in Locale::all() {
                        li {
                            a.language-option.active[locale == ctx.locale]
                                href=(ctx.locale_href(locale))
                                hreflang=(locale.code())
                                lang=(locale.code()) {
                                (locale.native_name())
                            }
                        }
                    }
                    @if let Some(href) = ctx.language_close_href() {
                        li {
                            a.language-close href=(href) { (ctx.t("language.close")) }
                        }
                    }
                }
            }
        }
    }
}
