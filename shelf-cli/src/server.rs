//! Development file server
//!
//! Serves a directory exactly as it is on disk. No dynamic routes: an
//! existing file is a 200, anything else a 404. With `no_cache` every
//! response tells browsers (and preview iframes) not to cache.

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue};
use axum::Router;
use std::path::{Path, PathBuf};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub const CACHE_CONTROL_VALUE: &str = "no-cache, no-store, must-revalidate";

/// Server settings resolved from config and flags
#[derive(Debug, Clone)]
pub struct ServeOptions {
    pub root: PathBuf,
    pub host: String,
    pub port: u16,
    pub no_cache: bool,
}

impl ServeOptions {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Build the static file router for `root`
pub fn router(root: &Path, no_cache: bool) -> Router {
    let files = ServeDir::new(root).append_index_html_on_directories(true);
    let mut app = Router::new().fallback_service(files);

    if no_cache {
        app = app
            .layer(SetResponseHeaderLayer::overriding(
                header::CACHE_CONTROL,
                HeaderValue::from_static(CACHE_CONTROL_VALUE),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                header::PRAGMA,
                HeaderValue::from_static("no-cache"),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                header::EXPIRES,
                HeaderValue::from_static("0"),
            ));
    }

    app.layer(TraceLayer::new_for_http())
}

/// Bind and serve until Ctrl+C
pub async fn serve(options: ServeOptions) -> Result<()> {
    if !options.root.is_dir() {
        anyhow::bail!(
            "Nothing to serve: {} is not a directory.\n\nBuild the site first:\n  shelf build --out {}",
            options.root.display(),
            options.root.display()
        );
    }

    let addr = options.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(root = %options.root.display(), no_cache = options.no_cache, "Starting file server");
    println!("Serving at http://{addr}");

    axum::serve(listener, router(&options.root, options.no_cache))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("File server failed")?;

    info!("File server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}
