//! Shelf - a browsable catalog of LGBTQ+ books
//!
//! Search from the terminal, build the static catalog site, and serve it
//! locally.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use shelf_cli::commands::Command;
use shelf_cli::logging::{initialize_tracing, LogLevel};
use shelf_core::config::ShelfConfig;

#[derive(Parser, Debug)]
#[clap(
    name = "shelf",
    about = "Browse, search, and publish a catalog of LGBTQ+ books",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Set log level
    #[clap(long, default_value = "info", global = true)]
    log_level: LogLevel,

    /// Emit logs as JSON on stderr
    #[clap(long, global = true)]
    log_json: bool,

    /// Path to shelf.yml (defaults to ./shelf.yml, then the user config dir)
    #[clap(long, global = true)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The TUI owns the terminal, so it logs to a file instead
    #[cfg(feature = "tui")]
    let interactive = matches!(cli.command, Command::Browse { .. });
    #[cfg(not(feature = "tui"))]
    let interactive = false;

    if interactive {
        #[cfg(feature = "tui")]
        shelf_cli::logging::initialize_file_tracing(
            cli.log_level,
            &std::env::temp_dir().join("shelf-browse.log"),
        )?;
    } else {
        initialize_tracing(cli.log_level, cli.log_json);
    }

    let config = ShelfConfig::load(cli.config.as_deref())?;
    tracing::debug!(?config, "Resolved configuration");

    cli.command.execute(config).await
}
