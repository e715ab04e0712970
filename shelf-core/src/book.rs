//! Book records and the fixed category set

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a book within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub u32);

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A book in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub category: Category,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
}

impl Book {
    /// Create a book without a cover image
    pub fn new(
        id: u32,
        title: impl Into<String>,
        author: impl Into<String>,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: BookId(id),
            title: title.into(),
            author: author.into(),
            category,
            description: description.into(),
            cover_url: None,
        }
    }

    /// Attach a cover image reference
    pub fn with_cover(mut self, url: impl Into<String>) -> Self {
        self.cover_url = Some(url.into());
        self
    }
}

/// Classification tag on a book
///
/// Serialized as its display label. Labels outside the known set are kept
/// as [`Category::Other`]; those books show up under "All" but never match
/// a category filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Fiction,
    History,
    Biography,
    Memoir,
    Poetry,
    Nonfiction,
    YoungAdult,
    GraphicNovel,
    Other(String),
}

impl Category {
    /// Every known category, in chip display order
    pub const KNOWN: [Category; 8] = [
        Category::Fiction,
        Category::History,
        Category::Biography,
        Category::Memoir,
        Category::Poetry,
        Category::Nonfiction,
        Category::YoungAdult,
        Category::GraphicNovel,
    ];

    /// Human-readable label
    pub fn label(&self) -> &str {
        match self {
            Category::Fiction => "Fiction",
            Category::History => "History",
            Category::Biography => "Biography",
            Category::Memoir => "Memoir",
            Category::Poetry => "Poetry",
            Category::Nonfiction => "Nonfiction",
            Category::YoungAdult => "Young Adult",
            Category::GraphicNovel => "Graphic Novel",
            Category::Other(name) => name,
        }
    }

    /// URL-safe slug (lowercase, dash separated)
    pub fn slug(&self) -> String {
        self.label()
            .trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Look up a known category by label or slug (case-insensitive)
    pub fn from_name(name: &str) -> Option<Category> {
        let wanted = name.trim().to_lowercase();
        if wanted.is_empty() {
            return None;
        }

        Self::KNOWN
            .iter()
            .find(|c| c.label().to_lowercase() == wanted || c.slug() == wanted)
            .cloned()
    }

    /// Whether this is one of the fixed categories
    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Other(_))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        Category::from_name(&name).unwrap_or(Category::Other(name))
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.label().to_string()
    }
}

/// The category selector of the catalog view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Sentinel label for the unfiltered view
    pub const ALL_LABEL: &'static str = "All";

    /// Parse a selector value, `None` when it names no known category
    ///
    /// Empty input and "All" both parse to [`CategoryFilter::All`].
    pub fn try_parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(Self::ALL_LABEL) {
            return Some(CategoryFilter::All);
        }
        Category::from_name(trimmed).map(CategoryFilter::Only)
    }

    /// Parse a selector value, falling back to `All` on anything unrecognized
    pub fn parse(value: &str) -> Self {
        Self::try_parse(value).unwrap_or_else(|| {
            tracing::debug!(value = value.trim(), "Unknown category filter, showing all books");
            CategoryFilter::All
        })
    }

    /// Collapse a filter on an unknown category to `All`
    pub fn normalized(self) -> Self {
        match self {
            CategoryFilter::Only(category) => CategoryFilter::from(category),
            CategoryFilter::All => CategoryFilter::All,
        }
    }

    /// Whether a book passes this filter
    ///
    /// A filter on an unknown category behaves like `All`.
    pub fn matches(&self, category: &Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => !selected.is_known() || selected == category,
        }
    }

    /// Label shown on the active chip
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => Self::ALL_LABEL,
            CategoryFilter::Only(category) => category.label(),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        if category.is_known() {
            CategoryFilter::Only(category)
        } else {
            CategoryFilter::All
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_lookup_by_label_and_slug() {
        assert_eq!(Category::from_name("History"), Some(Category::History));
        assert_eq!(Category::from_name("young adult"), Some(Category::YoungAdult));
        assert_eq!(Category::from_name("graphic-novel"), Some(Category::GraphicNovel));
        assert_eq!(Category::from_name("  POETRY "), Some(Category::Poetry));
        assert_eq!(Category::from_name("Zines"), None);
        assert_eq!(Category::from_name(""), None);
    }

    #[test]
    fn test_filter_parse_fails_open() {
        assert_eq!(CategoryFilter::parse("All"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(""), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("NotARealCategory"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("memoir"),
            CategoryFilter::Only(Category::Memoir)
        );
    }

    #[test]
    fn test_try_parse_reports_unknown_values() {
        assert_eq!(CategoryFilter::try_parse(" all "), Some(CategoryFilter::All));
        assert_eq!(CategoryFilter::try_parse(""), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::try_parse("young-adult"),
            Some(CategoryFilter::Only(Category::YoungAdult))
        );
        assert_eq!(CategoryFilter::try_parse("NotARealCategory"), None);
    }

    #[test]
    fn test_filter_on_unknown_category_acts_as_all() {
        let bogus = CategoryFilter::Only(Category::Other("NotARealCategory".to_string()));
        assert!(bogus.matches(&Category::Fiction));
        assert!(bogus.matches(&Category::Other("Zines".to_string())));
        assert_eq!(bogus.normalized(), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::Only(Category::Poetry).normalized(),
            CategoryFilter::Only(Category::Poetry)
        );
    }

    #[test]
    fn test_unknown_category_never_matches_a_chip() {
        let zines = Category::Other("Zines".to_string());
        assert!(CategoryFilter::All.matches(&zines));
        for known in Category::KNOWN {
            assert!(!CategoryFilter::Only(known).matches(&zines));
        }
        assert_eq!(CategoryFilter::from(zines), CategoryFilter::All);
    }

    #[test]
    fn test_book_deserializes_unknown_category() {
        let json = r#"{"id": 7, "title": "T", "author": "A", "category": "Zines"}"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.category, Category::Other("Zines".to_string()));
        assert_eq!(book.description, "");
        assert!(book.cover_url.is_none());
    }

    #[test]
    fn test_book_serializes_camel_case() {
        let book = Book::new(1, "Aristotle and Dante", "Benjamin Alire Sáenz", Category::YoungAdult, "")
            .with_cover("covers/aristotle.jpg");
        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(value["coverUrl"], "covers/aristotle.jpg");
        assert_eq!(value["category"], "Young Adult");
        assert_eq!(value["id"], 1);
    }
}
