//! One-shot path routing and the application entry point.

use tracing::debug;

use crate::api::TablesApi;
use crate::view::{Mount, render_table_contents, render_tables_list};

const TABLE_PREFIX: &str = "/tables/";

/// Screen selected by the request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    TablesList,
    TableContents(String),
}

impl Route {
    /// `/tables/<name>` (name percent-decoded) selects the contents screen;
    /// every other path falls back to the list.
    ///
    /// A name that does not decode to UTF-8 is used verbatim.
    pub fn from_path(path: &str) -> Self {
        match path.strip_prefix(TABLE_PREFIX) {
            Some(raw) if !raw.is_empty() => {
                let name = urlencoding::decode(raw)
                    .map(|s| s.into_owned())
                    .unwrap_or_else(|_| raw.to_owned());
                Route::TableContents(name)
            }
            _ => Route::TablesList,
        }
    }
}

/// Link target for a table's contents screen, name percent-encoded.
pub fn table_path(name: &str) -> String {
    format!("{}{}", TABLE_PREFIX, urlencoding::encode(name))
}

/// Route `path` once and render the selected screen into `root`.
///
/// A missing root means the page does not belong to this application:
/// nothing is fetched and `None` is returned.
pub async fn mount_app<M, A>(root: Option<&mut M>, path: &str, api: &A) -> Option<Route>
where
    M: Mount,
    A: TablesApi,
{
    let Some(mount) = root else {
        debug!(path, "no application root, skipping");
        return None;
    };

    let route = Route::from_path(path);
    debug!(path, ?route, "routing");
    match &route {
        Route::TablesList => render_tables_list(mount, api).await,
        Route::TableContents(name) => render_table_contents(mount, api, name).await,
    }
    Some(route)
}
