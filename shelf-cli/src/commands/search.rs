use anyhow::Result;
use shelf_core::{Catalog, CatalogView, CategoryFilter};
use tracing::warn;

use crate::table::TableRenderer;

/// Rendered result of a search
#[derive(Debug)]
pub struct SearchReport {
    pub output: String,
    pub matches: usize,
    pub empty_state: bool,
    /// Empty-state message for stderr when `output` is JSON
    pub notice: Option<String>,
}

/// Run one search through a catalog view
pub fn search_report(catalog: Catalog, query: &str, category: &str, json: bool) -> Result<SearchReport> {
    let filter = CategoryFilter::try_parse(category).unwrap_or_else(|| {
        warn!("Unknown category '{}', showing all categories", category.trim());
        CategoryFilter::All
    });

    let mut view = CatalogView::new(catalog, TableRenderer::new());
    view.select_category(filter);
    view.set_query(query);

    let visible = view.recompute();
    let matches = visible.len();

    let (output, notice) = if json {
        let notice = visible.is_empty().then(|| visible.empty_state_message());
        (serde_json::to_string_pretty(visible.books())?, notice)
    } else {
        (view.renderer().output().to_string(), None)
    };

    Ok(SearchReport {
        output,
        matches,
        empty_state: view.renderer().is_empty_state(),
        notice,
    })
}
