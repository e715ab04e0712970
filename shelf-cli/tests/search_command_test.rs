//! Search and categories output over small catalogs

use pretty_assertions::assert_eq;
use shelf_cli::commands::{categories_report, load_catalog, search_report};
use shelf_core::config::ShelfConfig;
use shelf_core::{Book, Catalog, Category};
use std::fs;
use tempfile::TempDir;

fn stone_catalog() -> Catalog {
    Catalog::new(vec![
        Book::new(1, "Stone Butch Blues", "Feinberg", Category::Fiction, ""),
        Book::new(2, "Stonewall", "Carter", Category::History, ""),
    ])
    .unwrap()
}

#[test]
fn test_search_all_categories() {
    let report = search_report(stone_catalog(), "stone", "All", false).unwrap();
    assert_eq!(report.matches, 2);
    assert!(!report.empty_state);
    assert!(report.output.contains("Stone Butch Blues"));
    assert!(report.output.contains("Stonewall"));
    assert!(report.output.contains("2 of 2 books"));
}

#[test]
fn test_search_one_category_as_json() {
    let report = search_report(stone_catalog(), "stone", "history", true).unwrap();
    let books: Vec<Book> = serde_json::from_str(&report.output).unwrap();

    assert_eq!(books.len(), 1);
    assert_eq!(books[0].id.0, 2);
}

#[test]
fn test_json_search_without_matches_carries_notice() {
    let report = search_report(stone_catalog(), "zzz", "History", true).unwrap();
    assert_eq!(report.matches, 0);
    assert!(report.empty_state);
    assert_eq!(report.output, "[]");
    assert_eq!(
        report.notice.as_deref(),
        Some("No books match \"zzz\" in History.")
    );

    let found = search_report(stone_catalog(), "stone", "All", true).unwrap();
    assert!(found.notice.is_none());
}

#[test]
fn test_search_without_matches_shows_empty_state() {
    let report = search_report(stone_catalog(), "zzz", "All", false).unwrap();
    assert_eq!(report.matches, 0);
    assert!(report.empty_state);
    assert_eq!(report.output, "No books match \"zzz\" in All.");
}

#[test]
fn test_unknown_category_searches_everything() {
    let report = search_report(stone_catalog(), "", "NotARealCategory", false).unwrap();
    assert_eq!(report.matches, 2);
    assert!(report.notice.is_none());

    let padded = search_report(stone_catalog(), "stone", "  history ", false).unwrap();
    assert_eq!(padded.matches, 1);
}

#[test]
fn test_categories_report_counts() {
    let json = categories_report(&stone_catalog(), true).unwrap();
    let rows: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();

    assert_eq!(rows.len(), Category::KNOWN.len());
    assert_eq!(rows[0]["name"], "Fiction");
    assert_eq!(rows[0]["count"], 1);
    assert_eq!(rows[6]["slug"], "young-adult");

    let table = categories_report(&stone_catalog(), false).unwrap();
    assert!(table.contains("2 books in total"));
}

#[test]
fn test_source_flag_overrides_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("books.yml");
    fs::write(
        &path,
        "- { id: 5, title: Crush, author: Richard Siken, category: Poetry }\n",
    )
    .unwrap();

    let catalog = load_catalog(&ShelfConfig::default(), Some(&path)).unwrap();
    assert_eq!(catalog.len(), 1);

    let seeded = load_catalog(&ShelfConfig::default(), None).unwrap();
    assert!(seeded.len() > 1);
}
