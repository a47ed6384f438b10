//! HTTP request handlers: health check and the application pages.

use axum::extract::State;
use axum::http::Uri;
use axum::response::Html;

use etsview_core::route::{Route, mount_app};
use etsview_core::view::PageMount;

use crate::layout;
use crate::state::AppState;

const APP_TITLE: &str = "ETS Tables";

// ============================================================
// Health
// ============================================================

pub(crate) async fn handle_health() -> &'static str {
    "ok"
}

// ============================================================
// Pages
// ============================================================

/// Route the request path once, render the selected screen, wrap it in the shell.
///
/// Backend failures are part of the rendered page, so this always answers 200.
pub(crate) async fn serve_page(State(state): AppState, uri: Uri) -> Html<String> {
    let mut root = PageMount::new();
    let route = mount_app(Some(&mut root), uri.path(), state.api.as_ref()).await;

    let title = match route {
        Some(Route::TableContents(name)) => format!("{} - {}", name, APP_TITLE),
        _ => APP_TITLE.to_owned(),
    };
    Html(layout::page(&title, root.into_markup()).into_string())
}
