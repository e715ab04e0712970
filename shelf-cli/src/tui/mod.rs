/// Terminal User Interface for browsing the catalog
pub mod app;
pub mod events;
pub mod screen;
pub mod state;
pub mod theme;

use anyhow::Result;
use shelf_core::Catalog;

/// Run the interactive browser until the user quits
pub async fn run(catalog: Catalog) -> Result<()> {
    let app = app::App::new(catalog);
    app.run().await
}
