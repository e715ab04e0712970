//! Terminal table rendering of the visible set

use shelf_core::render::Renderer;
use shelf_core::VisibleSet;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

/// Maximum description width before truncation
const DESCRIPTION_WIDTH: usize = 50;

/// Table row for search results
#[derive(Tabled)]
struct BookRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Author")]
    author: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Renders books as a rounded table, or the empty-state message
#[derive(Debug, Default)]
pub struct TableRenderer {
    output: String,
    empty: bool,
}

impl TableRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    /// Whether the last render showed the empty state
    pub fn is_empty_state(&self) -> bool {
        self.empty
    }
}

impl Renderer for TableRenderer {
    fn render(&mut self, visible: &VisibleSet<'_>) {
        self.empty = visible.is_empty();
        if self.empty {
            self.output = visible.empty_state_message();
            return;
        }

        let rows: Vec<BookRow> = visible
            .books()
            .iter()
            .map(|book| BookRow {
                id: book.id.0,
                title: book.title.clone(),
                author: book.author.clone(),
                category: book.category.to_string(),
                description: truncate(&book.description, DESCRIPTION_WIDTH),
            })
            .collect();

        let table = Table::new(&rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()))
            .to_string();

        self.output = format!("{table}\n{}", visible.summary());
    }
}

/// Truncate on a char boundary, marking the cut with `...`
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept.trim_end())
}
