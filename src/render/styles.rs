//! Site stylesheet.
//!
//! Served at `/assets/site.css` by the preview server and written as a
//! fingerprinted asset by the static build. The fixed rules are followed
//! by per-item rules that highlight the navigation item whose section
//! anchor is the current `:target` on static pages.

use super::STATIC_NAV_CLASS;
use crate::navigation;
use std::sync::OnceLock;

const SITE_CSS: &str = r#"*,*::before,*::after{box-sizing:border-box}
html,body{margin:0;padding:0}
body{min-height:100vh;background:#fff;color:#1f2937;font-family:-apple-system,BlinkMacSystemFont,"Segoe UI","PingFang SC","Hiragino Sans","Microsoft YaHei",sans-serif;line-height:1.5}
a{color:inherit;text-decoration:none}
ul{list-style:none;margin:0;padding:0}
h1,h3,h4,p{margin:0}
.brand{font-weight:700;letter-spacing:.1em;color:#1f2937}

.sidebar{display:none}
.sidebar .brand{font-size:1.5rem;padding:1.5rem}
.sidebar-nav{flex:1;padding:0 1rem}
.sidebar-nav li+li{margin-top:.5rem}

.menu-item{display:block;position:relative;padding:.75rem 1rem;border-radius:.5rem;transition:all .6s cubic-bezier(.215,.61,.355,1) 0s;text-indent:0}
.menu-item::before{content:'';position:absolute;left:0;top:50%;transform:translateY(-50%);height:1px;width:0;background-color:#01ae81;transition:all .6s cubic-bezier(.215,.61,.355,1) 0s}
.menu-item:hover::before,.menu-item.active::before{width:32px}
.menu-item:hover,.menu-item.active{text-indent:40px;color:#01ae81}

.mobile-bar{background:#fff;box-shadow:0 1px 6px rgba(0,0,0,.06)}
.mobile-bar-header{display:flex;align-items:center;justify-content:space-between;padding:1rem}
.mobile-bar .brand{font-size:1.25rem}
.icon-button{display:inline-flex;padding:.5rem;border-radius:.5rem;transition:background-color .2s}
.icon-button:hover{background:#f3f4f6}

.mobile-overlay{display:none;position:fixed;inset:0;background:rgba(255,255,255,.95);z-index:50}
.mobile-overlay.open,.mobile-overlay:target{display:block}
.mobile-overlay .mobile-bar-header{border-bottom:1px solid #e5e7eb}
.mobile-nav{padding:1.5rem 1rem}
.mobile-nav li+li{margin-top:1rem}
.mobile-item{display:block;padding:1rem;border-radius:.5rem;font-size:1.125rem;color:#4b5563;transition:all .2s}
.mobile-item:hover,.mobile-item.active{background:#01ae81;color:#fff}
.mobile-contact{position:absolute;bottom:0;left:0;right:0;padding:1.5rem;border-top:1px solid #e5e7eb;color:#4b5563}
.mobile-contact p+p{margin-top:.25rem}

.language-switcher{position:relative;padding:1rem 1.5rem}
.mobile-bar .language-switcher{padding:0}
.language-toggle{font-size:.875rem;color:#4b5563}
.language-toggle:hover{color:#01ae81}
.language-options{display:none;position:absolute;bottom:100%;left:1.5rem;min-width:8rem;background:#fff;border:1px solid #e5e7eb;border-radius:.5rem;box-shadow:0 4px 12px rgba(0,0,0,.08);z-index:60}
.mobile-bar .language-options{bottom:auto;top:100%;left:auto;right:0}
.language-options.open,.language-options:target{display:block}
.language-option{display:block;padding:.5rem 1rem;font-size:.875rem}
.language-option:hover,.language-option.active{color:#01ae81}
.language-close{display:block;padding:.5rem 1rem;font-size:.75rem;color:#9ca3af;border-top:1px solid #e5e7eb}
.language-close:hover{color:#01ae81}
.nav-anchor:not(.hero){display:block;height:0}

.hero{position:relative;min-height:100vh;display:flex;align-items:center;justify-content:center;overflow:hidden}
.hero-background{position:absolute;inset:0;background-size:cover;background-position:center;background-repeat:no-repeat}
.hero-shade{position:absolute;inset:0;background:rgba(0,0,0,.4)}
.hero-content{position:relative;z-index:10;text-align:center;color:#fff;padding:0 1rem}
.hero-title{font-size:2.25rem;font-weight:700;letter-spacing:.025em;margin-bottom:1rem}
.hero-subtitle{font-size:1.125rem;margin-bottom:2rem;opacity:.9}
.scroll-indicator{position:absolute;bottom:2rem;left:50%;transform:translateX(-50%);opacity:.6}
.scroll-indicator span{display:block;width:.25rem;height:2rem;margin:0 auto;border-radius:9999px;background:#fff;animation:bounce 1s infinite}
@keyframes bounce{0%,100%{transform:translateY(-25%)}50%{transform:none}}

.footer{background:#f9fafb;padding:3rem 1.5rem}
.footer-inner{max-width:56rem;margin:0 auto}
.footer-grid{display:grid;gap:2rem}
.footer h3{font-size:1.25rem;font-weight:700;margin-bottom:1rem}
.footer h4{font-size:1.125rem;font-weight:600;margin-bottom:1rem}
.footer p,.footer a{color:#4b5563}
.footer li+li{margin-top:.5rem}
.footer a:hover{color:#01ae81}
.footer-bottom{border-top:1px solid #e5e7eb;margin-top:2rem;padding-top:2rem;text-align:center;color:#4b5563}

@media (min-width:768px){
.hero-title{font-size:3rem}
.hero-subtitle{font-size:1.25rem}
.footer-grid{grid-template-columns:repeat(3,1fr)}
}
@media (min-width:1024px){
.sidebar{display:flex;flex-direction:column;position:fixed;left:0;top:0;height:100%;width:16rem;background:#fff;z-index:50;border-right:1px solid #f8f8f8;box-shadow:0 1px 6px rgba(0,0,0,.06)}
.mobile-bar{display:none}
main{margin-left:16rem}
.hero-title{font-size:3.75rem}
.hero-subtitle{font-size:1.5rem}
.footer{padding:3rem}
}
"#;

static STYLESHEET: OnceLock<String> = OnceLock::new();

/// The site stylesheet.
pub fn stylesheet() -> &'static str {
    STYLESHEET.get_or_init(|| {
        let mut css = String::from(SITE_CSS);
        let default_key = navigation::default_item().key;
        css.push_str(&highlight_rules(
            &format!("body.{}:not(:has(.nav-anchor:target))", STATIC_NAV_CLASS),
            default_key,
        ));
        for item in navigation::items() {
            css.push_str(&highlight_rules(
                &format!("body.{}:has(#{}:target)", STATIC_NAV_CLASS, item.key),
                item.key,
            ));
        }
        css
    })
}

/// Same look as `.menu-item.active` and `.mobile-item.active`, applied to
/// the item `key` when `scope` matches.
fn highlight_rules(scope: &str, key: &str) -> String {
    let menu_item = format!(r#"{} .menu-item[data-nav="{}"]"#, scope, key);
    let mobile_item = format!(r#"{} .mobile-item[data-nav="{}"]"#, scope, key);
    format!(
        "{menu_item}{{text-indent:40px;color:#01ae81}}\n\
         {menu_item}::before{{width:32px}}\n\
         {mobile_item}{{background:#01ae81;color:#fff}}\n"
    )
}
