use super::{nav, sections, LinkStyle, PageContext, STATIC_NAV_CLASS};
use maud::{html, Markup, DOCTYPE};

pub(super) fn document(ctx: &PageContext<'_>) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(ctx.locale.code()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (ctx.t("meta.title")) }
                meta name="description" content=(ctx.t("meta.description"));
                link rel="stylesheet" href=(ctx.stylesheet_href);
            }
            body class=[(ctx.links == LinkStyle::Static).then_some(STATIC_NAV_CLASS)] {
                (nav::sidebar(ctx))
                (nav::mobile_bar(ctx))
                main {
                    (sections::hero(ctx))
                    (sections::anchors())
                    (sections::footer(ctx))
                }
            }
        }
    }
}
