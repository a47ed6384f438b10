//! "All tables" screen.

use maud::{Markup, html};
use tracing::debug;

use super::{Mount, ViewState, error_alert, loading};
use crate::api::{TableSummary, TablesApi, TablesList};
use crate::fmt::{Escaped, format_bytes, format_count};
use crate::route::table_path;

/// Render the tables list into `mount`: Loading, then the list or an error.
///
/// Performs exactly one fetch. Any failure ends in the error panel.
pub async fn render_tables_list<M, A>(mount: &mut M, api: &A)
where
    M: Mount,
    A: TablesApi,
{
    mount.replace(render(&ViewState::Loading));
    let state = ViewState::from_result(api.fetch_tables_list().await);
    if let ViewState::Ready(ref list) = state {
        debug!(rows = list.tables.len(), total = list.total, "tables list loaded");
    }
    mount.replace(render(&state));
}

/// Pure state-to-markup mapping for the list screen.
pub fn render(state: &ViewState<TablesList>) -> Markup {
    match state {
        ViewState::Loading => loading(),
        ViewState::Ready(list) => ready(list),
        ViewState::Failed(message) => error_alert(message),
    }
}

fn ready(list: &TablesList) -> Markup {
    html! {
        div class="d-flex justify-content-between align-items-center mb-3" {
            h2 { "ETS Tables" }
            span class="badge bg-secondary" { (list.total) " tables" }
        }
        div class="table-responsive" {
            table class="table table-striped table-hover" {
                thead class="table-dark" {
                    tr {
                        th { "Name" }
                        th { "Type" }
                        th class="text-end" { "Objects" }
                        th class="text-end" { "Memory" }
                        th { "Owner" }
                        th { "Protection" }
                    }
                }
                tbody {
                    @for table in &list.tables {
                        (row(table))
                    }
                }
            }
        }
    }
}

fn row(table: &TableSummary) -> Markup {
    html! {
        tr {
            td {
                a href=(table_path(&table.name)) class="table-link" { (Escaped(&table.name)) }
            }
            td { (Escaped(table.table_type.as_str())) }
            td class="text-end" { (format_count(table.size)) }
            td class="text-end" { (format_bytes(table.memory_bytes)) }
            td { (Escaped(&table.owner)) }
            td { (Escaped(table.protection.as_str())) }
        }
    }
}
