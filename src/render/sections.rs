use super::PageContext;
use crate::navigation;
use maud::{html, Markup};

pub(super) fn hero(ctx: &PageContext<'_>) -> Markup {
    let background = format!("background-image: url('{}')", ctx.site.hero_image_url);

    html! {
        section.hero.nav-anchor id=(navigation::default_item().key) {
            div.hero-background style=(background) {
                div.hero-shade {}
            }
            div.hero-content {
                h1.hero-title { (ctx.t("hero.title")) }
                p.hero-subtitle { (ctx.t("hero.subtitle")) }
            }
            div.scroll-indicator aria-hidden="true" {
                span {}
            }
        }
    }
}

/// Link targets for every navigation item other than the hero.
pub(super) fn anchors() -> Markup {
    let default_key = navigation::default_item().key;

    html! {
        @for item in navigation::items().iter().filter(|item| item.key != default_key) {
            span.nav-anchor id=(item.key) {}
        }
    }
}

pub(super) fn footer(ctx: &PageContext<'_>) -> Markup {
    let site = ctx.site;
    let phone = ctx
        .catalog
        .format(ctx.locale, "footer.phone", &[("phone", site.phone.as_str())]);
    let email = ctx
        .catalog
        .format(ctx.locale, "footer.email", &[("email", site.email.as_str())]);
    let copyright = ctx.catalog.format(
        ctx.locale,
        "footer.copyright",
        &[("year", site.copyright_year.as_str())],
    );

    html! {
        footer.footer {
            div.footer-inner {
                div.footer-grid {
                    div {
                        h3 { (ctx.t("brand.name")) }
                        p { (ctx.t("footer.tagline")) }
                    }
                    div {
                        h4 { (ctx.t("footer.contact_heading")) }
                        p { (phone) }
                        p { (email) }
                    }
                    div {
                        h4 { (ctx.t("footer.links_heading")) }
                        ul {
                            @for item in navigation::quick_links() {
                                li {
                                    a href=(item.href) { (ctx.t(&item.label_key())) }
                                }
                            }
                        }
                    }
                }
                div.footer-bottom {
                    p { (copyright) }
                }
            }
        }
    }
}
