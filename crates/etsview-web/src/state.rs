//! Shared application state.

use std::sync::Arc;

use axum::extract::State;
use etsview_core::api::HttpTablesApi;

#[derive(Clone)]
pub(crate) struct WebState {
    pub(crate) api: Arc<HttpTablesApi>,
}

impl WebState {
    pub(crate) fn new(backend_url: &str) -> Self {
        Self {
            api: Arc::new(HttpTablesApi::new(backend_url)),
        }
    }
}

pub(crate) type AppState = State<WebState>;
