//! Plain-text rendering of the book list view

use crate::types::{Book, Notification, MAX_STARS};
use crate::view::{ViewPhase, ViewSnapshot};

pub const LOADING_INDICATOR: &str = "Loading books...";
pub const LEARN_MORE: &str = "[Learn More]";

const FILLED_STAR: char = '★';
const EMPTY_STAR: char = '☆';

/// Read-only star indicator, e.g. `★★★☆☆`
pub fn render_stars(filled: u8) -> String {
    let filled = filled.min(MAX_STARS);
    std::iter::repeat(FILLED_STAR)
        .take(filled as usize)
        .chain(std::iter::repeat(EMPTY_STAR).take((MAX_STARS - filled) as usize))
        .collect()
}

/// One-line banner for a notification
pub fn render_notification(notification: &Notification) -> String {
    match notification.severity {
        Some(severity) => format!("[{}] {}", severity, notification.message),
        None => notification.message.clone(),
    }
}

/// A self-contained card: cover, genre tags, title, author, rating
pub fn render_card(book: &Book) -> String {
    let cover = if book.img.is_empty() {
        "(no cover)"
    } else {
        book.img.as_str()
    };

    let mut lines = vec![format!("#{}", book.id), format!("  cover: {}", cover)];
    if !book.genres.is_empty() {
        let tags: Vec<String> = book.genres.iter().map(|g| format!("[{}]", g)).collect();
        lines.push(format!("  {}", tags.join(" ")));
    }
    lines.push(format!("  {}", book.name));
    lines.push(format!("  {}", book.author));
    lines.push(format!(
        "  {}  {}",
        render_stars(book.star_count()),
        LEARN_MORE
    ));

    lines.join("\n")
}

/// The whole view: notification banner, then either the loading indicator
/// or the cards
pub fn render_view(view: &ViewSnapshot) -> String {
    let mut sections = Vec::new();

    if let Some(notification) = &view.notification {
        sections.push(render_notification(notification));
    }

    if view.loading {
        sections.push(LOADING_INDICATOR.to_string());
        return sections.join("\n\n");
    }

    if view.books.is_empty() {
        match view.phase {
            ViewPhase::Failed | ViewPhase::Idle => {}
            _ if view.search.is_empty() => sections.push("No books found.".to_string()),
            _ => sections.push(format!("No books match \"{}\".", view.search)),
        }
    } else {
        sections.extend(view.books.iter().map(render_card));
    }

    if !view.search.is_empty() && !view.books.is_empty() {
        sections.push(format!(
            "{} of {} books match \"{}\"",
            view.books.len(),
            view.total,
            view.search
        ));
    }

    sections.join("\n\n")
}
