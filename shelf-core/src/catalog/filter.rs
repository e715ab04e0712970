//! Search query normalization and the visible-set computation

use std::fmt;

use crate::book::{Book, CategoryFilter};

/// A normalized search query (trimmed, lowercased)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    pub fn new(text: &str) -> Self {
        Query(text.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Case-insensitive substring match against title or author
    pub fn matches(&self, book: &Book) -> bool {
        self.is_empty()
            || book.title.to_lowercase().contains(&self.0)
            || book.author.to_lowercase().contains(&self.0)
    }
}

impl From<&str> for Query {
    fn from(text: &str) -> Self {
        Query::new(text)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compute the visible set.
///
/// A book is visible when it passes the category filter and the query
/// matches its title or author. Input order is preserved.
pub fn recompute<'a, I>(books: I, query: &Query, filter: &CategoryFilter) -> Vec<&'a Book>
where
    I: IntoIterator<Item = &'a Book>,
{
    books
        .into_iter()
        .filter(|book| filter.matches(&book.category) && query.matches(book))
        .collect()
}
