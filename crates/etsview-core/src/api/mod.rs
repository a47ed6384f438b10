//! Backend API: transport records, the fetch abstraction, and its errors.
//!
//! Renderers are written against [`TablesApi`]; the `client` feature provides
//! [`HttpTablesApi`], which talks to a real backend over HTTP/JSON.

#[cfg(feature = "client")]
pub mod client;
pub mod types;

use std::future::Future;

#[cfg(feature = "client")]
pub use client::HttpTablesApi;
pub use types::{
    ApiFailure, Protection, TableContents, TableEntry, TableSummary, TableType, TablesList,
};

/// Message shown when a failure carries no text of its own.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Error type for backend fetches.
#[derive(Debug)]
pub enum ApiError {
    /// Request could not be sent or the connection failed.
    Transport(String),
    /// Backend answered non-2xx with an `{error}` body.
    Api { status: u16, message: String },
    /// Body was not the expected JSON.
    Decode(String),
}

impl ApiError {
    /// Human-readable message for the error panel.
    ///
    /// For [`ApiError::Api`] this is the backend's `error` text verbatim.
    pub fn message(&self) -> &str {
        let msg = match self {
            ApiError::Transport(msg) | ApiError::Decode(msg) => msg,
            ApiError::Api { message, .. } => message,
        };
        if msg.is_empty() { UNKNOWN_ERROR } else { msg }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "request failed: {}", msg),
            ApiError::Api { status, message } => write!(f, "HTTP {}: {}", status, message),
            ApiError::Decode(msg) => write!(f, "decode error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

/// Source of table introspection data.
///
/// One call is one request: implementations must not retry or cache.
pub trait TablesApi {
    fn fetch_tables_list(&self) -> impl Future<Output = Result<TablesList, ApiError>> + Send;

    fn fetch_table_contents(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<TableContents, ApiError>> + Send;
}
