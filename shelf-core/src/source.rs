//! Book sources - where the initial collection comes from
//!
//! The catalog never writes back to a source. [`SeedSource`] is the
//! built-in collection; [`FileSource`] reads a YAML or JSON book list so a
//! different collection can be browsed without touching filtering or
//! rendering.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::book::{Book, Category};
use crate::error::{Result, ShelfError};

/// Provides the initial book collection
pub trait BookSource {
    /// Load every book, in display order
    fn load(&self) -> Result<Vec<Book>>;

    /// Short description for logs
    fn describe(&self) -> String;
}

/// The built-in catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedSource;

impl BookSource for SeedSource {
    fn load(&self) -> Result<Vec<Book>> {
        Ok(SEED_BOOKS.clone())
    }

    fn describe(&self) -> String {
        "built-in catalog".to_string()
    }
}

static SEED_BOOKS: Lazy<Vec<Book>> = Lazy::new(|| {
    vec![
        Book::new(
            1,
            "Stone Butch Blues",
            "Leslie Feinberg",
            Category::Fiction,
            "A working-class butch comes of age in the bars and factories of 1960s Buffalo.",
        ),
        Book::new(
            2,
            "Stonewall: The Riots That Sparked the Gay Revolution",
            "David Carter",
            Category::History,
            "A detailed reconstruction of the June 1969 uprising at the Stonewall Inn.",
        ),
        Book::new(
            3,
            "Giovanni's Room",
            "James Baldwin",
            Category::Fiction,
            "An American in Paris is torn between his fiancée and an Italian bartender.",
        ),
        Book::new(
            4,
            "Zami: A New Spelling of My Name",
            "Audre Lorde",
            Category::Biography,
            "Lorde's biomythography of growing up in Harlem and finding love among women.",
        ),
        Book::new(
            5,
            "Fun Home: A Family Tragicomic",
            "Alison Bechdel",
            Category::GraphicNovel,
            "A daughter reckons with her closeted father and her own coming out.",
        ),
        Book::new(
            6,
            "Redefining Realness",
            "Janet Mock",
            Category::Memoir,
            "A trans woman's account of growing up in Honolulu and building her own path.",
        ),
        Book::new(
            7,
            "And the Band Played On",
            "Randy Shilts",
            Category::History,
            "The early years of the AIDS epidemic and the institutions that failed to respond.",
        ),
        Book::new(
            8,
            "Crush",
            "Richard Siken",
            Category::Poetry,
            "Poems of desire, violence, and longing between men.",
        ),
        Book::new(
            9,
            "Aristotle and Dante Discover the Secrets of the Universe",
            "Benjamin Alire Sáenz",
            Category::YoungAdult,
            "Two Mexican-American teenagers in 1987 El Paso build a friendship that becomes more.",
        ),
        Book::new(
            10,
            "The Secret Diaries of Miss Anne Lister",
            "Anne Lister",
            Category::Biography,
            "Coded diary entries of a Yorkshire landowner who lived openly with the woman she loved.",
        ),
        Book::new(
            11,
            "Gay Revolution: The Story of the Struggle",
            "Lillian Faderman",
            Category::Nonfiction,
            "A history of the LGBTQ civil rights movement from the 1950s onward.",
        ),
        Book::new(
            12,
            "The Price of Salt",
            "Patricia Highsmith",
            Category::Fiction,
            "A young set designer and an older woman fall in love in 1950s New York.",
        ),
        Book::new(
            13,
            "Gender Queer",
            "Maia Kobabe",
            Category::GraphicNovel,
            "An illustrated memoir about identity, adolescence, and coming out as nonbinary.",
        ),
        Book::new(
            14,
            "The Mayor of Castro Street",
            "Randy Shilts",
            Category::Biography,
            "The life and assassination of Harvey Milk.",
        ),
    ]
});

/// A book list stored on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

/// Accepts either a bare list or `{ books: [...] }`
#[derive(Deserialize)]
#[serde(untagged)]
enum BookList {
    Bare(Vec<Book>),
    Wrapped { books: Vec<Book> },
}

impl BookList {
    fn into_books(self) -> Vec<Book> {
        match self {
            BookList::Bare(books) | BookList::Wrapped { books } => books,
        }
    }
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse_error(&self, message: impl ToString) -> ShelfError {
        ShelfError::Parse {
            path: self.path.clone(),
            message: message.to_string(),
        }
    }
}

impl BookSource for FileSource {
    fn load(&self) -> Result<Vec<Book>> {
        let extension = self
            .path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        // Check the format before touching the disk
        let is_json = match extension.as_deref() {
            Some("json") => true,
            Some("yml") | Some("yaml") => false,
            _ => {
                return Err(ShelfError::UnsupportedFormat {
                    path: self.path.clone(),
                })
            }
        };

        let content = std::fs::read_to_string(&self.path).map_err(|source| ShelfError::Io {
            path: self.path.clone(),
            source,
        })?;

        let list: BookList = if is_json {
            serde_json::from_str(&content).map_err(|e| self.parse_error(e))?
        } else {
            serde_yaml_ng::from_str(&content).map_err(|e| self.parse_error(e))?
        };

        let books = list.into_books();
        tracing::debug!(path = %self.path.display(), count = books.len(), "Read book list");
        Ok(books)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique() {
        let books = SeedSource.load().unwrap();
        let ids: HashSet<_> = books.iter().map(|b| b.id).collect();
        assert_eq!(ids.len(), books.len());
    }

    #[test]
    fn test_seed_uses_only_known_categories() {
        let books = SeedSource.load().unwrap();
        assert!(books.iter().all(|b| b.category.is_known()));
        for category in Category::KNOWN {
            assert!(
                books.iter().any(|b| b.category == category),
                "no seed book in {category}"
            );
        }
    }

    #[test]
    fn test_file_source_rejects_unknown_extension() {
        let err = FileSource::new("books.csv").load().unwrap_err();
        assert!(matches!(err, ShelfError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_file_source_missing_file() {
        let err = FileSource::new("/definitely/not/here.yml").load().unwrap_err();
        assert!(matches!(err, ShelfError::Io { .. }));
    }
}
