//! Shelf configuration (shelf.yml)
//!
//! Resolution order:
//! 1. Explicit path (`--config`), which must exist
//! 2. `./shelf.yml` in the working directory
//! 3. `shelf.yml` in the platform config directory
//! 4. Built-in defaults
//!
//! Environment variables override whatever was loaded:
//! `SHELF_HOST`, `SHELF_PORT`, `SHELF_SITE_DIR`, `SHELF_SOURCE`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::ShelfError;
use crate::source::{BookSource, FileSource, SeedSource};

/// Config file name looked up in the working and config directories
pub const CONFIG_FILE: &str = "shelf.yml";

/// Default bind host for the development server
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default port for the development server
pub const DEFAULT_PORT: u16 = 5000;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShelfConfig {
    /// Book list to browse instead of the built-in catalog
    pub source: Option<PathBuf>,

    pub server: ServerConfig,

    pub site: SiteConfig,
}

/// Development server settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory to serve; defaults to the site output directory
    pub root: Option<PathBuf>,
    /// Send no-cache headers on every response
    pub no_cache: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            root: None,
            no_cache: true,
        }
    }
}

/// Static site settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub out_dir: PathBuf,
    pub title: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("site"),
            title: "Queer Shelf".to_string(),
        }
    }
}

impl ShelfConfig {
    /// Load configuration following the resolution order, then apply env overrides
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match Self::discover(explicit)? {
            Some(path) => Self::load_from_path(&path)?,
            None => {
                debug!("No {} found, using defaults", CONFIG_FILE);
                Self::default()
            }
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Find the config file to use, if any
    pub fn discover(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if !path.exists() {
                anyhow::bail!("Config file does not exist: {}", path.display());
            }
            return Ok(Some(path.to_path_buf()));
        }

        let local = PathBuf::from(CONFIG_FILE);
        if local.exists() {
            return Ok(Some(local));
        }

        if let Some(dir) = Self::config_dir() {
            let global = dir.join(CONFIG_FILE);
            if global.exists() {
                return Ok(Some(global));
            }
        }

        Ok(None)
    }

    /// Parse a config file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let config: ShelfConfig = serde_yaml_ng::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Platform config directory for shelf
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("org", "shelf", "shelf")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Apply overrides from a variable lookup
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("SHELF_HOST") {
            debug!("SHELF_HOST override: {}", host);
            self.server.host = host;
        }

        if let Some(port) = lookup("SHELF_PORT") {
            self.server.port = port.trim().parse().map_err(|_| {
                ShelfError::Config(format!("SHELF_PORT must be a port number (got: {port})"))
            })?;
            debug!("SHELF_PORT override: {}", self.server.port);
        }

        if let Some(dir) = lookup("SHELF_SITE_DIR") {
            debug!("SHELF_SITE_DIR override: {}", dir);
            self.site.out_dir = PathBuf::from(dir);
        }

        if let Some(source) = lookup("SHELF_SOURCE") {
            debug!("SHELF_SOURCE override: {}", source);
            self.source = Some(PathBuf::from(source));
        }

        Ok(())
    }

    /// The book source this configuration selects
    pub fn book_source(&self) -> Box<dyn BookSource> {
        match &self.source {
            Some(path) => Box::new(FileSource::new(path)),
            None => Box::new(SeedSource),
        }
    }

    /// Directory the development server should serve
    pub fn serve_root(&self) -> &Path {
        self.server.root.as_deref().unwrap_or(&self.site.out_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = ShelfConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert!(config.server.no_cache);
        assert_eq!(config.serve_root(), Path::new("site"));
        assert_eq!(config.book_source().describe(), "built-in catalog");
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: ShelfConfig = serde_yaml_ng::from_str(
            r#"
server:
  port: 8080
site:
  title: My Shelf
"#,
        )
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, DEFAULT_HOST);
        assert_eq!(config.site.title, "My Shelf");
        assert_eq!(config.site.out_dir, PathBuf::from("site"));
        assert!(config.source.is_none());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("SHELF_HOST", "127.0.0.1"),
            ("SHELF_PORT", "9000"),
            ("SHELF_SITE_DIR", "public"),
            ("SHELF_SOURCE", "books.yml"),
        ]
        .into_iter()
        .collect();

        let mut config = ShelfConfig::default();
        config
            .apply_env(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.site.out_dir, PathBuf::from("public"));
        assert_eq!(config.source, Some(PathBuf::from("books.yml")));
        assert_eq!(config.serve_root(), Path::new("public"));
    }

    #[test]
    fn test_bad_port_is_rejected() {
        let mut config = ShelfConfig::default();
        let err = config
            .apply_env(|key| (key == "SHELF_PORT").then(|| "eighty".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("SHELF_PORT"));
    }

    #[test]
    fn test_explicit_missing_path_errors() {
        let err = ShelfConfig::discover(Some(Path::new("/no/such/shelf.yml"))).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
