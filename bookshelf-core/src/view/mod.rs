//! Book list view state

mod book_list;

pub use book_list::{BookListView, ViewPhase, ViewSnapshot, BOOKS_PATH};
