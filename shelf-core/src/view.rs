//! Catalog view - owned browsing state
//!
//! The view owns the catalog, the current query, and the selected
//! category. Every change recomputes the visible set and hands it to the
//! view's [`Renderer`] before returning, so callers driving the view from
//! input events always see a rendered result.

use crate::book::{Book, BookId, CategoryFilter};
use crate::catalog::{recompute, Catalog, Query};
use crate::render::Renderer;

/// The books currently matching the active filters, in display order
#[derive(Debug, Clone)]
pub struct VisibleSet<'a> {
    books: Vec<&'a Book>,
    query: &'a Query,
    filter: &'a CategoryFilter,
    total: usize,
}

impl<'a> VisibleSet<'a> {
    pub fn new(
        books: Vec<&'a Book>,
        query: &'a Query,
        filter: &'a CategoryFilter,
        total: usize,
    ) -> Self {
        Self {
            books,
            query,
            filter,
            total,
        }
    }

    pub fn books(&self) -> &[&'a Book] {
        &self.books
    }

    pub fn ids(&self) -> Vec<BookId> {
        self.books.iter().map(|b| b.id).collect()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn query(&self) -> &Query {
        self.query
    }

    pub fn filter(&self) -> &CategoryFilter {
        self.filter
    }

    /// Size of the whole catalog
    pub fn total(&self) -> usize {
        self.total
    }

    /// Message shown when nothing matches
    pub fn empty_state_message(&self) -> String {
        match (self.query.is_empty(), self.filter) {
            (true, CategoryFilter::All) => "The catalog is empty.".to_string(),
            (true, filter) => format!("No books in {filter} yet."),
            (false, filter) => format!("No books match \"{}\" in {filter}.", self.query),
        }
    }

    /// One-line summary such as `3 of 14 books`
    pub fn summary(&self) -> String {
        let noun = if self.total == 1 { "book" } else { "books" };
        format!("{} of {} {noun}", self.books.len(), self.total)
    }
}

/// Browsing state bound to a renderer
pub struct CatalogView<R: Renderer> {
    catalog: Catalog,
    query: Query,
    selected: CategoryFilter,
    visible: Vec<BookId>,
    renderer: R,
}

impl<R: Renderer> CatalogView<R> {
    /// Create the view and render the initial "All" listing
    pub fn new(catalog: Catalog, renderer: R) -> Self {
        let mut view = Self {
            catalog,
            query: Query::default(),
            selected: CategoryFilter::All,
            visible: Vec::new(),
            renderer,
        };
        view.refresh();
        view
    }

    /// Update the search text and re-render
    pub fn set_query(&mut self, text: &str) {
        let query = Query::new(text);
        tracing::trace!(query = %query, "set_query");
        self.query = query;
        self.refresh();
    }

    /// Update the category from a raw selector value and re-render
    ///
    /// Unrecognized values select "All".
    pub fn set_category(&mut self, value: &str) {
        self.select_category(CategoryFilter::parse(value));
    }

    /// Update the category from an already parsed filter and re-render
    ///
    /// A filter on an unknown category is stored as "All".
    pub fn select_category(&mut self, filter: CategoryFilter) {
        let filter = filter.normalized();
        tracing::trace!(category = %filter, "select_category");
        self.selected = filter;
        self.refresh();
    }

    /// Compute the visible set for the current state without rendering
    pub fn recompute(&self) -> VisibleSet<'_> {
        VisibleSet::new(
            recompute(self.catalog.books(), &self.query, &self.selected),
            &self.query,
            &self.selected,
            self.catalog.len(),
        )
    }

    /// Recompute and render the current state
    pub fn refresh(&mut self) {
        let books = recompute(self.catalog.books(), &self.query, &self.selected);
        self.visible = books.iter().map(|b| b.id).collect();

        let visible = VisibleSet::new(books, &self.query, &self.selected, self.catalog.len());
        tracing::debug!(
            query = %self.query,
            category = %self.selected,
            visible = visible.len(),
            "Rendering catalog view"
        );
        self.renderer.render(&visible);
    }

    /// Ids of the books shown by the last render
    pub fn visible(&self) -> &[BookId] {
        &self.visible
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn selected_category(&self) -> &CategoryFilter {
        &self.selected
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::Category;
    use crate::render::{CardSet, TextRenderer};
    use pretty_assertions::assert_eq;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Book::new(1, "Stone Butch Blues", "Feinberg", Category::Fiction, ""),
            Book::new(2, "Stonewall", "Carter", Category::History, ""),
        ])
        .unwrap()
    }

    /// Records every visible set it is asked to render
    #[derive(Default)]
    struct Recorder {
        renders: Vec<(Vec<u32>, bool)>,
    }

    impl Renderer for Recorder {
        fn render(&mut self, visible: &VisibleSet<'_>) {
            self.renders
                .push((visible.ids().iter().map(|id| id.0).collect(), visible.is_empty()));
        }
    }

    #[test]
    fn test_initial_render_shows_all() {
        let view = CatalogView::new(catalog(), Recorder::default());
        assert_eq!(view.renderer().renders, vec![(vec![1, 2], false)]);
        assert_eq!(view.selected_category(), &CategoryFilter::All);
        assert!(view.query().is_empty());
    }

    #[test]
    fn test_every_change_renders() {
        let mut view = CatalogView::new(catalog(), Recorder::default());
        view.set_query("  STONE ");
        view.set_category("History");
        view.set_query("zzz");
        view.set_category("NotARealCategory");

        assert_eq!(view.query().as_str(), "zzz");
        assert_eq!(view.selected_category(), &CategoryFilter::All);
        assert_eq!(
            view.into_renderer().renders,
            vec![
                (vec![1, 2], false),
                (vec![1, 2], false),
                (vec![2], false),
                (vec![], true),
                (vec![], true),
            ]
        );
    }

    #[test]
    fn test_select_unknown_category_shows_all() {
        let mut view = CatalogView::new(catalog(), TextRenderer::new());
        view.select_category(CategoryFilter::Only(Category::Other(
            "NotARealCategory".to_string(),
        )));

        assert_eq!(view.selected_category(), &CategoryFilter::All);
        assert_eq!(view.visible(), &[BookId(1), BookId(2)]);
        assert!(!view.renderer().output().contains("No books in"));
    }

    #[test]
    fn test_recompute_matches_last_render() {
        let mut view = CatalogView::new(catalog(), Recorder::default());
        view.set_query("carter");
        assert_eq!(view.recompute().ids(), view.visible().to_vec());
    }

    #[test]
    fn test_empty_state_messages() {
        let mut view = CatalogView::new(catalog(), TextRenderer::new());
        view.set_query("zzz");
        assert!(view.renderer().output().contains("No books match \"zzz\" in All."));

        view.set_query("");
        view.select_category(CategoryFilter::Only(Category::Poetry));
        assert!(view.renderer().output().contains("No books in Poetry yet."));
    }

    #[test]
    fn test_card_set_tracks_changes() {
        let mut view = CatalogView::new(catalog(), CardSet::new());
        view.set_category("history");

        let patch = view.renderer().last_patch();
        assert_eq!(patch.removed, vec![BookId(1)]);
        assert_eq!(patch.kept, vec![BookId(2)]);
        assert!(patch.added.is_empty());
    }

    #[test]
    fn test_summary() {
        let mut view = CatalogView::new(catalog(), Recorder::default());
        view.set_query("stonewall");
        assert_eq!(view.recompute().summary(), "1 of 2 books");
    }
}
