//! HTTP implementation of [`TablesApi`] on top of `reqwest`.

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::{ApiError, ApiFailure, TableContents, TablesApi, TablesList};

/// Backend client. Cheap to clone; clones share one connection pool.
///
/// No timeout and no retry: a hung backend keeps the request pending.
#[derive(Clone, Debug)]
pub struct HttpTablesApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTablesApi {
    /// Creates a client for the backend at `base_url` (e.g. `http://127.0.0.1:15692`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        }
    }

    pub fn tables_list_url(&self) -> String {
        format!("{}/api/v1/tables/list", self.base_url)
    }

    pub fn table_contents_url(&self, name: &str) -> String {
        format!(
            "{}/api/v1/tables/{}/contents",
            self.base_url,
            urlencoding::encode(name)
        )
    }

    /// Transport errors keep the URL in the log only; the message ends up on the page.
    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        debug!(%url, "backend request");
        let resp = self.client.get(&url).send().await.map_err(|e| {
            warn!(%url, error = %e, "backend request failed");
            ApiError::Transport(e.without_url().to_string())
        })?;

        let status = resp.status();
        let body = resp.bytes().await.map_err(|e| {
            warn!(%url, error = %e, "backend response body failed");
            ApiError::Transport(e.without_url().to_string())
        })?;

        if !status.is_success() {
            let failure: ApiFailure = serde_json::from_slice(&body)?;
            warn!(%url, status = status.as_u16(), error = %failure.error, "backend returned an error");
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: failure.error,
            });
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

impl TablesApi for HttpTablesApi {
    async fn fetch_tables_list(&self) -> Result<TablesList, ApiError> {
        self.get_json(self.tables_list_url()).await
    }

    async fn fetch_table_contents(&self, name: &str) -> Result<TableContents, ApiError> {
        self.get_json(self.table_contents_url(name)).await
    }
}
