//! etsview-core — client library for browsing ETS tables.
//!
//! Provides:
//! - `fmt` — escaping and number/byte formatting
//! - `api` — backend transport records and the `TablesApi` abstraction
//! - `view` — list and contents screens (state, maud templates, render drivers)
//! - `route` — one-shot path routing and the `mount_app` entry point
//!
//! With `client` feature (default):
//! - `api::HttpTablesApi` — reqwest-backed backend client

pub mod api;
pub mod fmt;
pub mod route;
pub mod view;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
