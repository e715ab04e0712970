//! Shelf core library exports

pub mod book;
pub mod catalog;
pub mod config;
pub mod error;
pub mod render;
pub mod site;
pub mod source;
pub mod view;

pub use book::{Book, BookId, Category, CategoryFilter};
pub use catalog::{recompute, Catalog, Query};
pub use error::{Result, ShelfError};
pub use source::{BookSource, FileSource, SeedSource};
pub use view::{CatalogView, VisibleSet};
