//! Browse command implementation

use super::{fetch_result, mount_with_spinner};
use anyhow::Result;
use bookshelf_core::render::render_view;
use bookshelf_core::{BookListView, ClientConfig, RequestHook};
use tokio::io::{AsyncBufReadExt, BufReader};

const QUIT: &str = ":q";

/// Fetch the books once, then re-filter for every line read from stdin
pub async fn browse(config: ClientConfig) -> Result<()> {
    let mut view = BookListView::new(RequestHook::new(config));
    let outcome = mount_with_spinner(&mut view).await;
    println!("{}", render_view(&view.snapshot()));
    fetch_result(outcome)?;

    eprintln!("Type to filter by name, author or genre; {} to quit.", QUIT);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let term = line.strip_suffix('\r').unwrap_or(&line);
        if term == QUIT {
            break;
        }

        view.sync();
        view.set_search(term);
        tracing::debug!(search = term, matches = view.filtered().len(), "filtered");
        println!("{}", render_view(&view.snapshot()));
    }

    Ok(())
}
