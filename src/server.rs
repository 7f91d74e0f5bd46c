//! Preview server: renders the site per request.
//!
//! View state lives in the query string (`?active=news&menu=true`) and the
//! locale in the path, so the server keeps nothing between requests. Each
//! request starts from a fresh `LocaleStore` and switches it to the path's
//! locale.

use crate::config::Config;
use crate::i18n::{Locale, LocaleCatalog, MetricsReport};
use crate::render::{self, LinkStyle, PageContext};
use crate::view_state::{LocaleStore, ViewQuery, ViewState};
use anyhow::{Context, Result};
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

pub const STYLESHEET_PATH: &str = "/assets/site.css";

/// Shared, read-only server state.
pub struct AppState {
    pub config: Config,
    pub catalog: LocaleCatalog,
}

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    locales: Vec<&'static str>,
    metrics: MetricsReport,
}

/// Build the preview router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root_redirect))
        .route("/healthz", get(health))
        .route(STYLESHEET_PATH, get(stylesheet))
        .route("/:locale", get(locale_page))
        .route("/:locale/", get(locale_page))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind to the configured address and serve until Ctrl-C.
pub async fn serve(state: Arc<AppState>) -> Result<()> {
    let address = state.config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!("Preview server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Preview server failed")?;

    info!("Preview server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown requested");
    }
}

async fn root_redirect() -> Redirect {
    Redirect::temporary(&format!("/{}/", Locale::canonical().code()))
}

async fn health(State(state): State<Arc<AppState>>) -> Json<Health> {
    Json(Health {
        status: "ok",
        locales: state.catalog.locales().iter().map(Locale::code).collect(),
        metrics: state.catalog.metrics().report(),
    })
}

async fn stylesheet() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        render::stylesheet(),
    )
}

async fn locale_page(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
    Query(query): Query<ViewQuery>,
) -> Response {
    let mut store = LocaleStore::default();
    if let Err(e) = store.switch_to_code(&code) {
        debug!("{}", e);
        return (StatusCode::NOT_FOUND, Html(not_found_page(&code))).into_response();
    }

    let ctx = PageContext {
        catalog: &state.catalog,
        locale: store.active(),
        view: ViewState::from_query(&query),
        links: LinkStyle::Stateful,
        stylesheet_href: STYLESHEET_PATH,
        site: &state.config.site,
    };

    Html(render::render_page(&ctx).into_string()).into_response()
}

fn not_found_page(code: &str) -> String {
    maud::html! {
        (maud::DOCTYPE)
        html {
            head { meta charset="utf-8"; title { "404" } }
            body {
                p { "Unknown locale: " (code) }
                ul {
                    @for locale in Locale::all() {
                        li { a href=(format!("/{}/", locale.code())) { (locale.native_name()) } }
                    }
                }
            }
        }
    }
    .into_string()
}
