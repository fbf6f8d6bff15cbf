//! The book record served by the books endpoint

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Highest rating a book can display
pub const MAX_STARS: u8 = 5;

/// Stable identifier supplied by the server.
///
/// Servers hand out either strings or integers; both are held as text so
/// cards and lookups are always keyed the same way.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for BookId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Integer(i64),
            Unsigned(u64),
            Float(f64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => BookId(s),
            RawId::Integer(n) => BookId(n.to_string()),
            RawId::Unsigned(n) => BookId(n.to_string()),
            RawId::Float(n) => BookId(n.to_string()),
        })
    }
}

/// A single book as returned by `GET /books`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    /// Unique identifier, used as the rendering key
    pub id: BookId,

    /// Display title
    pub name: String,

    pub author: String,

    /// Cover image URL or path
    #[serde(default)]
    pub img: String,

    /// Genre labels in display order
    #[serde(default)]
    pub genres: Vec<String>,

    /// Read-only rating value; missing or null reads as 0
    #[serde(default, deserialize_with = "nullable_stars")]
    pub stars: f64,
}

fn nullable_stars<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

impl Book {
    /// Create a book with no cover, genres or rating
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            id: BookId::new(id),
            name: name.into(),
            author: author.into(),
            img: String::new(),
            genres: Vec::new(),
            stars: 0.0,
        }
    }

    /// Add a genre label
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genres.push(genre.into());
        self
    }

    /// Set the rating value
    pub fn with_stars(mut self, stars: f64) -> Self {
        self.stars = stars;
        self
    }

    /// Set the cover image
    pub fn with_img(mut self, img: impl Into<String>) -> Self {
        self.img = img.into();
        self
    }

    /// Number of filled stars to display, 0 through [`MAX_STARS`]
    pub fn star_count(&self) -> u8 {
        if !self.stars.is_finite() {
            return 0;
        }
        self.stars.round().clamp(0.0, MAX_STARS as f64) as u8
    }
}
