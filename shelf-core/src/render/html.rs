//! HTML card rendering

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use std::fmt::Write;

use super::Renderer;
use crate::book::Book;
use crate::view::VisibleSet;

/// Render a single book card
pub fn render_card(book: &Book) -> String {
    let mut html = String::new();
    let _ = writeln!(
        html,
        r#"<li class="card" data-id="{}" data-category="{}">"#,
        book.id,
        attr(&book.category.slug())
    );

    if let Some(cover) = &book.cover_url {
        let _ = writeln!(
            html,
            r#"  <img class="cover" src="{}" alt="Cover of {}" loading="lazy">"#,
            attr(cover),
            attr(&book.title)
        );
    }

    let _ = writeln!(html, r#"  <div class="card-body">"#);
    let _ = writeln!(
        html,
        r#"    <span class="badge">{}</span>"#,
        text(book.category.label())
    );
    let _ = writeln!(html, r#"    <h3 class="title">{}</h3>"#, text(&book.title));
    let _ = writeln!(html, r#"    <p class="author">{}</p>"#, text(&book.author));
    if !book.description.is_empty() {
        let _ = writeln!(
            html,
            r#"    <p class="description">{}</p>"#,
            text(&book.description)
        );
    }
    let _ = writeln!(html, "  </div>");
    html.push_str("</li>\n");
    html
}

/// Render the card list, or the empty-state block when nothing matches
pub fn render_card_list(visible: &VisibleSet<'_>) -> String {
    if visible.is_empty() {
        return format!(
            "<p class=\"empty-state\" role=\"status\">{}</p>\n",
            text(&visible.empty_state_message())
        );
    }

    let mut html = String::from("<ul class=\"cards\">\n");
    for book in visible.books() {
        html.push_str(&render_card(book));
    }
    html.push_str("</ul>\n");
    html
}

/// Keeps the most recent card-list fragment
#[derive(Debug, Default)]
pub struct HtmlRenderer {
    fragment: String,
    summary: String,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The `<ul>` or empty-state fragment from the last render
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Result count line from the last render
    pub fn summary(&self) -> &str {
        &self.summary
    }
}

impl Renderer for HtmlRenderer {
    fn render(&mut self, visible: &VisibleSet<'_>) {
        self.fragment = render_card_list(visible);
        self.summary = visible.summary();
    }
}
