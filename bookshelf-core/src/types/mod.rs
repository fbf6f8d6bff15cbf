//! Core types shared by the request hook and the book list view

mod book;
mod notification;

pub use book::{Book, BookId, MAX_STARS};
pub use notification::{Notification, Severity, SUCCESS_MESSAGE};
