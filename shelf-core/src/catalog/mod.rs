//! Shelf Catalog - the fixed book collection and its filter
//!
//! # Overview
//!
//! The catalog is loaded once from a [`BookSource`](crate::source::BookSource)
//! and never changes afterwards. Browsing is a pure function of the
//! catalog, the search query, and the category filter:
//!
//! ```text
//! BookSource ──load──▶ Catalog (immutable, insertion order)
//!                          │
//!        Query ──────────▶ recompute() ──▶ visible set ──▶ Renderer
//!        CategoryFilter ──▶
//! ```

mod filter;

pub use filter::{recompute, Query};

use std::collections::HashMap;

use crate::book::{Book, BookId, Category};
use crate::error::{Result, ShelfError};
use crate::source::BookSource;

/// The full, ordered book collection
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(books: Vec<Book>) -> Result<Self> {
        let mut seen: HashMap<BookId, usize> = HashMap::with_capacity(books.len());
        for (idx, book) in books.iter().enumerate() {
            if let Some(&first) = seen.get(&book.id) {
                return Err(ShelfError::DuplicateId {
                    id: book.id,
                    first: books[first].title.clone(),
                    second: book.title.clone(),
                });
            }
            seen.insert(book.id, idx);
        }

        Ok(Self { books })
    }

    /// Load the catalog from a book source
    pub fn load(source: &dyn BookSource) -> Result<Self> {
        let books = source.load()?;
        let catalog = Self::new(books)?;

        let unknown = catalog
            .books
            .iter()
            .filter(|b| !b.category.is_known())
            .count();
        if unknown > 0 {
            tracing::warn!(
                count = unknown,
                "Some books have categories outside the known set; they only appear under All"
            );
        }

        tracing::info!(
            source = %source.describe(),
            books = catalog.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    /// All books in insertion order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Find a book by id
    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Number of books in each known category, in chip order
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::KNOWN
            .iter()
            .map(|category| {
                let count = self
                    .books
                    .iter()
                    .filter(|b| &b.category == category)
                    .count();
                (category.clone(), count)
            })
            .collect()
    }
}
