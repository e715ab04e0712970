use anyhow::Result;
use shelf_core::Catalog;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Filter value")]
    slug: String,
    #[tabled(rename = "Books")]
    count: usize,
}

/// Table (or JSON) of known categories and how many books each holds
pub fn categories_report(catalog: &Catalog, json: bool) -> Result<String> {
    let counts = catalog.category_counts();

    if json {
        let value: Vec<serde_json::Value> = counts
            .iter()
            .map(|(category, count)| {
                serde_json::json!({
                    "name": category.label(),
                    "slug": category.slug(),
                    "count": count,
                })
            })
            .collect();
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    let rows: Vec<CategoryRow> = counts
        .into_iter()
        .map(|(category, count)| CategoryRow {
            slug: category.slug(),
            name: category.label().to_string(),
            count,
        })
        .collect();

    Ok(format!(
        "{}\n{} books in total",
        Table::new(&rows).with(Style::rounded()),
        catalog.len()
    ))
}
