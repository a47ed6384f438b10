//! Page shell around the application root.

use etsview_core::fmt::Escaped;
use maud::{DOCTYPE, Markup, PreEscaped, html};

const STYLESHEET: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

const INLINE_CSS: &str = "\
.loading { display: flex; justify-content: center; padding: 3rem; }
.entry-text { font-family: monospace; white-space: pre-wrap; word-break: break-all; }
.table-link { text-decoration: none; }";

/// Full HTML document with `app` mounted into `<div id="app">`.
pub(crate) fn page(title: &str, app: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (Escaped(title)) }
                link rel="stylesheet" href=(STYLESHEET);
                style { (PreEscaped(INLINE_CSS)) }
            }
            body {
                main class="container py-4" {
                    div id="app" { (app) }
                }
            }
        }
    }
}
