//! View renderers for the two screens.
//!
//! Each screen is a pure `ViewState -> Markup` mapping plus an async driver
//! that owns the effectful part: write Loading, fetch once, write the outcome.

pub mod table_contents;
pub mod tables_list;

use maud::{Markup, PreEscaped, html};

use crate::api::{ApiError, UNKNOWN_ERROR};
use crate::fmt::Escaped;

pub use table_contents::render_table_contents;
pub use tables_list::render_tables_list;

/// Render state of one screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> ViewState<T> {
    /// Collapse a fetch outcome into a terminal state.
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => ViewState::Ready(data),
            Err(e) => ViewState::Failed(e.message().to_owned()),
        }
    }
}

/// Page-root container. Every write replaces the previous content entirely.
pub trait Mount {
    fn replace(&mut self, markup: Markup);
}

/// Mount that keeps only the latest write.
#[derive(Debug)]
pub struct PageMount {
    content: Markup,
    writes: usize,
}

impl Default for PageMount {
    fn default() -> Self {
        Self {
            content: PreEscaped(String::new()),
            writes: 0,
        }
    }
}

impl PageMount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &Markup {
        &self.content
    }

    /// Number of state transitions written so far.
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn into_markup(self) -> Markup {
        self.content
    }
}

impl Mount for PageMount {
    fn replace(&mut self, markup: Markup) {
        self.content = markup;
        self.writes += 1;
    }
}

pub(crate) fn loading() -> Markup {
    html! {
        div class="loading" {
            div class="spinner-border text-primary" role="status" {
                span class="visually-hidden" { "Loading..." }
            }
        }
    }
}

pub(crate) fn error_alert(message: &str) -> Markup {
    let message = if message.is_empty() {
        UNKNOWN_ERROR
    } else {
        message
    };
    html! {
        div class="alert alert-danger" role="alert" {
            strong { "Error:" } " " (Escaped(message))
        }
    }
}
