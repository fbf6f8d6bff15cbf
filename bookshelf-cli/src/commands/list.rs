//! List command implementation

use super::{fetch_result, mount_with_spinner};
use anyhow::Result;
use bookshelf_core::render::{render_notification, render_view};
use bookshelf_core::{BookListView, ClientConfig, RequestHook};

/// Fetch the books and print them, optionally filtered
pub async fn list(config: ClientConfig, search: Option<&str>, json: bool) -> Result<()> {
    let mut view = BookListView::new(RequestHook::new(config));
    let outcome = mount_with_spinner(&mut view).await;

    if let Some(term) = search {
        view.set_search(term);
    }

    if json {
        if outcome.is_ok() {
            println!("{}", serde_json::to_string_pretty(view.filtered())?);
        } else if let Some(notification) = view.snapshot().notification {
            eprintln!("{}", render_notification(&notification));
        }
    } else {
        println!("{}", render_view(&view.snapshot()));
    }

    fetch_result(outcome)
}
