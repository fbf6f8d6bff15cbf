//! CLI command implementations

mod browse;
mod list;
mod request;

pub use browse::browse;
pub use list::list;
pub use request::request;

use anyhow::Result;
use bookshelf_core::{BookListView, RequestError};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Mount `view`, showing a spinner while the request is in flight
async fn mount_with_spinner(view: &mut BookListView) -> Result<(), RequestError> {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(bookshelf_core::render::LOADING_INDICATOR);
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = view.mount().await;
    spinner.finish_and_clear();
    outcome
}

/// Exit with the fetch error once the view has been printed
fn fetch_result(outcome: Result<(), RequestError>) -> Result<()> {
    outcome.map_err(|e| anyhow::Error::new(e).context("Failed to fetch books"))
}
