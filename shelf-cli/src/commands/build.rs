use anyhow::Result;
use shelf_core::site::SiteBuilder;
use shelf_core::Catalog;
use std::path::Path;

/// Write the static site and print what was produced
pub fn execute_build(catalog: Catalog, title: &str, out_dir: &Path) -> Result<()> {
    let books = catalog.len();
    let report = SiteBuilder::new(catalog).title(title).build(out_dir)?;

    println!(
        "Built {} page(s) for {} book(s) in {}",
        report
            .files
            .iter()
            .filter(|p| p.extension().is_some_and(|e| e == "html"))
            .count(),
        books,
        out_dir.display()
    );
    println!();
    println!("Preview it with:");
    println!("  shelf serve --dir {}", out_dir.display());
    Ok(())
}
