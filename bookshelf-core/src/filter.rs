//! Client-side search over a book list
//!
//! A book matches when the lowercased search term is a substring of its
//! lowercased name, author, or any genre label. The empty term matches
//! every book.

use crate::types::Book;

/// A lowercased search term, ready to test books against
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(term: &str) -> Self {
        Self(term.to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `book` satisfies this term
    pub fn matches(&self, book: &Book) -> bool {
        if self.0.is_empty() {
            return true;
        }

        book.name.to_lowercase().contains(&self.0)
            || book.author.to_lowercase().contains(&self.0)
            || book
                .genres
                .iter()
                .any(|g| g.to_lowercase().contains(&self.0))
    }

    /// Books matching this term, in their original order
    pub fn filter(&self, books: &[Book]) -> Vec<Book> {
        books.iter().filter(|b| self.matches(b)).cloned().collect()
    }
}

/// Books from `books` matching `term`, in their original order
pub fn filter_books(books: &[Book], term: &str) -> Vec<Book> {
    SearchTerm::new(term).filter(books)
}
