//! Single table contents screen.

use maud::{Markup, html};
use tracing::debug;

use super::{Mount, ViewState, error_alert, loading};
use crate::api::{TableContents, TableEntry, TablesApi};
use crate::fmt::Escaped;

pub const EMPTY_TABLE_NOTICE: &str = "This table is empty.";

/// Render the contents of `table_name` into `mount`.
pub async fn render_table_contents<M, A>(mount: &mut M, api: &A, table_name: &str)
where
    M: Mount,
    A: TablesApi,
{
    mount.replace(render(table_name, &ViewState::Loading));
    let state = ViewState::from_result(api.fetch_table_contents(table_name).await);
    if let ViewState::Ready(ref contents) = state {
        debug!(table = table_name, entries = contents.entries.len(), "table contents loaded");
    }
    mount.replace(render(table_name, &state));
}

/// Pure state-to-markup mapping. Entries are opaque text, never markup.
pub fn render(table_name: &str, state: &ViewState<TableContents>) -> Markup {
    match state {
        ViewState::Loading => loading(),
        ViewState::Ready(contents) => ready(table_name, contents),
        ViewState::Failed(message) => html! {
            (breadcrumb(table_name))
            (error_alert(message))
        },
    }
}

fn breadcrumb(table_name: &str) -> Markup {
    html! {
        nav aria-label="breadcrumb" class="mb-3" {
            ol class="breadcrumb" {
                li class="breadcrumb-item" { a href="/" { "Tables" } }
                li class="breadcrumb-item active" aria-current="page" { (Escaped(table_name)) }
            }
        }
    }
}

fn ready(table_name: &str, contents: &TableContents) -> Markup {
    html! {
        (breadcrumb(table_name))
        div class="d-flex justify-content-between align-items-center mb-3" {
            h2 { "Table: " (Escaped(table_name)) }
            span class="badge bg-secondary" { (contents.total) " entries" }
        }
        @if contents.entries.is_empty() {
            div class="alert alert-info" { (EMPTY_TABLE_NOTICE) }
        } @else {
            div class="table-responsive" {
                table class="table table-striped table-hover" {
                    thead class="table-dark" {
                        tr {
                            th class="text-end" style="width: 60px;" { "#" }
                            th { "Entry" }
                        }
                    }
                    tbody {
                        @for entry in &contents.entries {
                            (row(entry))
                        }
                    }
                }
            }
        }
    }
}

fn row(entry: &TableEntry) -> Markup {
    html! {
        tr {
            td class="text-end" style="width: 60px;" { (entry.index) }
            td class="entry-text" { (Escaped(&entry.entry)) }
        }
    }
}
