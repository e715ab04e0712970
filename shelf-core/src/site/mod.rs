//! Static site generation
//!
//! Writes the catalog as plain files a static file server can deliver
//! unmodified:
//!
//! ```text
//! <out>/
//!     index.html            ← every book, "All" chip active
//!     category/<slug>.html  ← one page per known category
//!     books.json            ← the catalog as data
//!     schema.sql            ← reference table layout (never executed)
//! ```

mod page;

pub use page::{render_page, PageContext};

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::book::{Book, Category, CategoryFilter};
use crate::catalog::Catalog;
use crate::render::HtmlRenderer;
use crate::view::CatalogView;

/// Reference schema for a future `books` table.
///
/// Documentation only; no code path reads or writes a database.
pub const SCHEMA_SQL: &str = r#"-- Reference schema for the Shelf catalog.
-- Not connected to any database; kept alongside the site as documentation.

CREATE TABLE IF NOT EXISTS books (
    id          INTEGER PRIMARY KEY,
    title       TEXT NOT NULL,
    author      TEXT NOT NULL,
    category    TEXT NOT NULL CHECK (category IN (
                    'Fiction', 'History', 'Biography', 'Memoir',
                    'Poetry', 'Nonfiction', 'Young Adult', 'Graphic Novel'
                )),
    description TEXT NOT NULL DEFAULT '',
    cover_url   TEXT
);

CREATE INDEX IF NOT EXISTS idx_books_category ON books (category);
"#;

/// Files written by a build
#[derive(Debug, Clone, Default)]
pub struct SiteReport {
    pub out_dir: PathBuf,
    pub files: Vec<PathBuf>,
}

#[derive(Serialize)]
struct BooksDocument<'a> {
    generated: String,
    books: &'a [Book],
}

/// Builds the static catalog site
pub struct SiteBuilder {
    view: CatalogView<HtmlRenderer>,
    title: String,
}

impl SiteBuilder {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            view: CatalogView::new(catalog, HtmlRenderer::new()),
            title: "Queer Shelf".to_string(),
        }
    }

    /// Set the page title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Write every page and data file under `out_dir`
    pub fn build(mut self, out_dir: &Path) -> Result<SiteReport> {
        let mut report = SiteReport {
            out_dir: out_dir.to_path_buf(),
            files: Vec::new(),
        };

        let category_dir = out_dir.join("category");
        std::fs::create_dir_all(&category_dir).with_context(|| {
            format!("Failed to create output directory: {}", category_dir.display())
        })?;

        let index = self.render_filter(CategoryFilter::All, "");
        write_file(&out_dir.join("index.html"), &index, &mut report)?;

        for category in Category::KNOWN {
            let slug = category.slug();
            let page = self.render_filter(CategoryFilter::Only(category), "../");
            write_file(&category_dir.join(format!("{slug}.html")), &page, &mut report)?;
        }

        let document = BooksDocument {
            generated: chrono::Utc::now().to_rfc3339(),
            books: self.view.catalog().books(),
        };
        let json = serde_json::to_string_pretty(&document).context("Failed to serialize books")?;
        write_file(&out_dir.join("books.json"), &json, &mut report)?;

        write_file(&out_dir.join("schema.sql"), SCHEMA_SQL, &mut report)?;

        tracing::info!(
            out_dir = %out_dir.display(),
            files = report.files.len(),
            "Built static site"
        );
        Ok(report)
    }

    fn render_filter(&mut self, filter: CategoryFilter, root: &str) -> String {
        self.view.select_category(filter);

        let counts = self.view.catalog().category_counts();
        let renderer = self.view.renderer();

        render_page(&PageContext {
            title: &self.title,
            root,
            active: self.view.selected_category(),
            counts: &counts,
            total: self.view.catalog().len(),
            summary: renderer.summary(),
            cards: renderer.fragment(),
        })
    }
}

fn write_file(path: &Path, content: &str, report: &mut SiteReport) -> Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::debug!("Wrote {}", path.display());
    report.files.push(path.to_path_buf());
    Ok(())
}

