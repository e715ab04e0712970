//! Config file loading with process environment overrides

use serial_test::serial;
use shelf_core::config::ShelfConfig;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const VARS: [&str; 4] = ["SHELF_HOST", "SHELF_PORT", "SHELF_SITE_DIR", "SHELF_SOURCE"];

fn clear_env() {
    for var in VARS {
        std::env::remove_var(var);
    }
}

fn write_config(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("shelf.yml");
    fs::write(
        &path,
        r#"
source: books.yml
server:
  host: 127.0.0.1
  port: 8000
site:
  outDir: public
  title: Rainbow Reads
"#,
    )
    .unwrap();
    path
}

#[test]
#[serial]
fn test_explicit_config_file() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir);

    let config = ShelfConfig::load(Some(&path)).unwrap();
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8000);
    assert_eq!(config.site.out_dir, PathBuf::from("public"));
    assert_eq!(config.site.title, "Rainbow Reads");
    assert_eq!(config.source, Some(PathBuf::from("books.yml")));
}

#[test]
#[serial]
fn test_env_beats_file() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir);

    std::env::set_var("SHELF_PORT", "5050");
    std::env::set_var("SHELF_SITE_DIR", "dist");
    let config = ShelfConfig::load(Some(&path));
    clear_env();

    let config = config.unwrap();
    assert_eq!(config.server.port, 5050);
    assert_eq!(config.site.out_dir, PathBuf::from("dist"));
    assert_eq!(config.server.host, "127.0.0.1");
}

#[test]
#[serial]
fn test_invalid_env_port() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir);

    std::env::set_var("SHELF_PORT", "99999");
    let result = ShelfConfig::load(Some(&path));
    clear_env();

    assert!(result.is_err());
}
