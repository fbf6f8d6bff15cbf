//! Book list view: fetch once, keep a master list, filter locally

use crate::client::{RequestHook, RequestState};
use crate::error::RequestError;
use crate::filter::SearchTerm;
use crate::types::{Book, Notification};
use serde::Serialize;
use tokio::sync::watch;
use tracing::debug;

/// Path of the book collection, relative to the base address
pub const BOOKS_PATH: &str = "books";

/// Where a view is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewPhase {
    /// Nothing requested yet
    Idle,
    /// The book request is in flight
    Loading,
    /// The full master list is shown
    Loaded,
    /// A search term narrows the master list
    Filtered,
    /// The fetch failed before any list was loaded
    Failed,
}

/// Everything needed to draw the view once
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSnapshot {
    pub phase: ViewPhase,
    pub loading: bool,
    /// Only present while visible
    pub notification: Option<Notification>,
    pub search: String,
    pub total: usize,
    pub books: Vec<Book>,
}

/// A book list bound to one request hook.
///
/// The master list is replaced wholesale whenever the hook publishes a new
/// payload. The filtered list is always the master list narrowed by the
/// current search term.
pub struct BookListView {
    hook: RequestHook<Vec<Book>>,
    updates: watch::Receiver<RequestState<Vec<Book>>>,
    master: Vec<Book>,
    filtered: Vec<Book>,
    search: String,
    term: SearchTerm,
    attempted: bool,
    loaded: bool,
}

impl BookListView {
    pub fn new(hook: RequestHook<Vec<Book>>) -> Self {
        let updates = hook.subscribe();
        Self {
            hook,
            updates,
            master: Vec::new(),
            filtered: Vec::new(),
            search: String::new(),
            term: SearchTerm::default(),
            attempted: false,
            loaded: false,
        }
    }

    /// Fetch the book list unless one is already loaded
    pub async fn mount(&mut self) -> Result<(), RequestError> {
        if !self.master.is_empty() {
            debug!(books = self.master.len(), "books already loaded, skipping fetch");
            return Ok(());
        }

        self.attempted = true;
        let outcome = self.hook.get(BOOKS_PATH, true).await;
        self.sync();
        outcome.map(|_| ())
    }

    /// Pick up a payload the hook published since the last call.
    ///
    /// Returns true when the master list was replaced.
    pub fn sync(&mut self) -> bool {
        if !self.updates.has_changed().unwrap_or(false) {
            return false;
        }

        let payload = self.updates.borrow_and_update().payload.clone();
        match payload {
            Some(books) if !self.loaded || books != self.master => {
                debug!(books = books.len(), "replacing master list");
                self.master = books;
                self.loaded = true;
                self.refilter();
                true
            }
            _ => false,
        }
    }

    /// Change the search input and recompute the filtered list
    pub fn set_search(&mut self, input: &str) {
        self.search = input.to_string();
        self.term = SearchTerm::new(input);
        self.refilter();
    }

    fn refilter(&mut self) {
        self.filtered = self.term.filter(&self.master);
    }

    pub fn phase(&self) -> ViewPhase {
        if self.hook.loading() {
            ViewPhase::Loading
        } else if self.loaded && self.term.is_empty() {
            ViewPhase::Loaded
        } else if self.loaded {
            ViewPhase::Filtered
        } else if self.attempted {
            ViewPhase::Failed
        } else {
            ViewPhase::Idle
        }
    }

    pub fn hook(&self) -> &RequestHook<Vec<Book>> {
        &self.hook
    }

    pub fn master(&self) -> &[Book] {
        &self.master
    }

    pub fn filtered(&self) -> &[Book] {
        &self.filtered
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        let state = self.hook.state();
        let loading = state.loading();
        ViewSnapshot {
            phase: self.phase(),
            loading,
            notification: Some(state.notification).filter(|n| n.visible),
            search: self.search.clone(),
            total: self.master.len(),
            books: self.filtered.clone(),
        }
    }
}
