//! Bookshelf Core Library
//!
//! This crate provides the types and client logic for browsing a remote book
//! collection. A [`RequestHook`] wraps an HTTP transport with loading,
//! payload and notification state; a [`BookListView`] uses it to fetch the
//! books once and filter them locally as the search input changes.

pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod render;
pub mod types;
pub mod view;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::{ApiRequest, Method, RequestHook, RequestState, ReqwestTransport, Transport};
pub use config::ClientConfig;
pub use error::{ConfigError, RequestError};
pub use filter::{filter_books, SearchTerm};
pub use types::{Book, BookId, Notification, Severity};
pub use view::{BookListView, ViewPhase, ViewSnapshot};
