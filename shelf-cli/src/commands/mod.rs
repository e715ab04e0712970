//! Shelf CLI commands

mod build;
mod categories;
mod search;

pub use build::execute_build;
pub use categories::categories_report;
pub use search::{search_report, SearchReport};

use anyhow::{Context, Result};
use clap::Subcommand;
use std::path::{Path, PathBuf};

use shelf_core::config::ShelfConfig;
use shelf_core::{Catalog, FileSource};

use crate::server::{self, ServeOptions};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search books by title or author
    Search {
        /// Search text (case-insensitive; matches title or author)
        query: Option<String>,

        /// Only show one category (unknown values show every category)
        #[clap(long, short, default_value = "All")]
        category: String,

        /// Output results as JSON
        #[clap(long)]
        json: bool,

        /// Book list file to browse instead of the configured source
        #[clap(long)]
        source: Option<PathBuf>,
    },

    /// List categories with book counts
    Categories {
        /// Output as JSON
        #[clap(long)]
        json: bool,

        /// Book list file to browse instead of the configured source
        #[clap(long)]
        source: Option<PathBuf>,
    },

    /// Write the static catalog site
    Build {
        /// Output directory (defaults to site.outDir from config)
        #[clap(long, short)]
        out: Option<PathBuf>,

        /// Book list file to publish instead of the configured source
        #[clap(long)]
        source: Option<PathBuf>,
    },

    /// Serve a directory over HTTP for local development
    Serve {
        /// Directory to serve (defaults to the site output directory)
        #[clap(long)]
        dir: Option<PathBuf>,

        /// Address to bind
        #[clap(long)]
        host: Option<String>,

        /// Port to listen on
        #[clap(long, short)]
        port: Option<u16>,

        /// Let browsers cache responses
        #[clap(long)]
        allow_cache: bool,
    },

    /// Browse the catalog interactively
    #[cfg(feature = "tui")]
    Browse {
        /// Book list file to browse instead of the configured source
        #[clap(long)]
        source: Option<PathBuf>,
    },
}

impl Command {
    pub async fn execute(self, config: ShelfConfig) -> Result<()> {
        match self {
            Command::Search {
                query,
                category,
                json,
                source,
            } => {
                let catalog = load_catalog(&config, source.as_deref())?;
                let report = search_report(catalog, query.as_deref().unwrap_or(""), &category, json)?;
                if let Some(notice) = &report.notice {
                    eprintln!("{notice}");
                }
                println!("{}", report.output);
                Ok(())
            }
            Command::Categories { json, source } => {
                let catalog = load_catalog(&config, source.as_deref())?;
                println!("{}", categories_report(&catalog, json)?);
                Ok(())
            }
            Command::Build { out, source } => {
                let catalog = load_catalog(&config, source.as_deref())?;
                let out_dir = out.unwrap_or_else(|| config.site.out_dir.clone());
                execute_build(catalog, &config.site.title, &out_dir)
            }
            Command::Serve {
                dir,
                host,
                port,
                allow_cache,
            } => {
                let options = ServeOptions {
                    root: dir.unwrap_or_else(|| config.serve_root().to_path_buf()),
                    host: host.unwrap_or_else(|| config.server.host.clone()),
                    port: port.unwrap_or(config.server.port),
                    no_cache: config.server.no_cache && !allow_cache,
                };
                server::serve(options).await
            }
            #[cfg(feature = "tui")]
            Command::Browse { source } => {
                let catalog = load_catalog(&config, source.as_deref())?;
                crate::tui::run(catalog).await
            }
        }
    }
}

/// Load the catalog from `--source` if given, else from config
pub fn load_catalog(config: &ShelfConfig, source: Option<&Path>) -> Result<Catalog> {
    let catalog = match source {
        Some(path) => Catalog::load(&FileSource::new(path)),
        None => Catalog::load(config.book_source().as_ref()),
    };
    catalog.context("Could not load the book catalog")
}
