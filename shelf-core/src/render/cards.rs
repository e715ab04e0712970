//! Keyed card tracking
//!
//! Presentation layers that keep live cards (a DOM, a widget list) should
//! add and remove only the cards whose books entered or left the visible
//! set. [`CardSet`] keeps the ids on screen and reports the difference
//! on every render.

use std::collections::HashSet;

use super::Renderer;
use crate::book::BookId;
use crate::view::VisibleSet;

/// Changes between two consecutive renders
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardPatch {
    /// Newly visible, in display order
    pub added: Vec<BookId>,
    /// No longer visible, in their previous display order
    pub removed: Vec<BookId>,
    /// Visible before and after, in display order
    pub kept: Vec<BookId>,
    /// Nothing is visible after this render
    pub empty_state: bool,
}

impl CardPatch {
    pub fn is_noop(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Renderer that tracks which cards are on screen
#[derive(Debug, Default)]
pub struct CardSet {
    on_screen: Vec<BookId>,
    last_patch: CardPatch,
    renders: usize,
}

impl CardSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids of the cards currently shown, in display order
    pub fn on_screen(&self) -> &[BookId] {
        &self.on_screen
    }

    pub fn last_patch(&self) -> &CardPatch {
        &self.last_patch
    }

    /// How many renders have been applied
    pub fn render_count(&self) -> usize {
        self.renders
    }
}

impl Renderer for CardSet {
    fn render(&mut self, visible: &VisibleSet<'_>) {
        let next = visible.ids();
        let before: HashSet<BookId> = self.on_screen.iter().copied().collect();
        let after: HashSet<BookId> = next.iter().copied().collect();

        let patch = CardPatch {
            added: next.iter().filter(|id| !before.contains(*id)).copied().collect(),
            removed: self
                .on_screen
                .iter()
                .filter(|id| !after.contains(*id))
                .copied()
                .collect(),
            kept: next.iter().filter(|id| before.contains(*id)).copied().collect(),
            empty_state: next.is_empty(),
        };

        tracing::trace!(
            added = patch.added.len(),
            removed = patch.removed.len(),
            kept = patch.kept.len(),
            "Applied card patch"
        );

        self.on_screen = next;
        self.last_patch = patch;
        self.renders += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::{Book, Category, CategoryFilter};
    use crate::catalog::{recompute, Query};
    use pretty_assertions::assert_eq;

    fn books() -> Vec<Book> {
        vec![
            Book::new(1, "Stone Butch Blues", "Feinberg", Category::Fiction, ""),
            Book::new(2, "Stonewall", "Carter", Category::History, ""),
            Book::new(3, "Crush", "Siken", Category::Poetry, ""),
        ]
    }

    fn render(cards: &mut CardSet, books: &[Book], query: &str) {
        let query = Query::new(query);
        let filter = CategoryFilter::All;
        let visible = VisibleSet::new(recompute(books, &query, &filter), &query, &filter, books.len());
        cards.render(&visible);
    }

    #[test]
    fn test_first_render_adds_everything() {
        let books = books();
        let mut cards = CardSet::new();
        render(&mut cards, &books, "");

        let ids: Vec<BookId> = books.iter().map(|b| b.id).collect();
        assert_eq!(cards.last_patch().added, ids);
        assert!(cards.last_patch().removed.is_empty());
        assert_eq!(cards.on_screen(), ids.as_slice());
    }

    #[test]
    fn test_narrowing_and_widening() {
        let books = books();
        let mut cards = CardSet::new();
        render(&mut cards, &books, "");
        render(&mut cards, &books, "stone");

        assert_eq!(cards.last_patch().removed, vec![BookId(3)]);
        assert_eq!(cards.last_patch().kept, vec![BookId(1), BookId(2)]);

        render(&mut cards, &books, "");
        assert_eq!(cards.last_patch().added, vec![BookId(3)]);
        assert_eq!(cards.render_count(), 3);
    }

    #[test]
    fn test_no_results_sets_empty_state() {
        let books = books();
        let mut cards = CardSet::new();
        render(&mut cards, &books, "");
        render(&mut cards, &books, "zzz");

        let patch = cards.last_patch();
        assert!(patch.empty_state);
        assert_eq!(patch.removed.len(), 3);
        assert!(cards.on_screen().is_empty());
    }

    #[test]
    fn test_repeat_render_is_noop() {
        let books = books();
        let mut cards = CardSet::new();
        render(&mut cards, &books, "carter");
        render(&mut cards, &books, "CARTER");
        assert!(cards.last_patch().is_noop());
    }
}
