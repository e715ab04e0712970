//! Plain text rendering

use std::fmt::Write;

use super::Renderer;
use crate::view::VisibleSet;

/// Renders the visible set as numbered lines
#[derive(Debug, Default)]
pub struct TextRenderer {
    output: String,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text produced by the last render
    pub fn output(&self) -> &str {
        &self.output
    }
}

impl Renderer for TextRenderer {
    fn render(&mut self, visible: &VisibleSet<'_>) {
        self.output.clear();

        if visible.is_empty() {
            let _ = writeln!(self.output, "{}", visible.empty_state_message());
            return;
        }

        for (i, book) in visible.books().iter().enumerate() {
            let _ = writeln!(
                self.output,
                "{:>3}. {} by {} [{}]",
                i + 1,
                book.title,
                book.author,
                book.category
            );
        }
        let _ = writeln!(self.output, "({})", visible.summary());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::{Book, Category, CategoryFilter};
    use crate::catalog::Query;

    #[test]
    fn test_lines() {
        let books = vec![Book::new(1, "Crush", "Richard Siken", Category::Poetry, "")];
        let query = Query::default();
        let filter = CategoryFilter::Only(Category::Poetry);
        let visible = VisibleSet::new(books.iter().collect(), &query, &filter, 5);

        let mut renderer = TextRenderer::new();
        renderer.render(&visible);
        assert_eq!(
            renderer.output(),
            "  1. Crush by Richard Siken [Poetry]\n(1 of 5 books)\n"
        );
    }
}
