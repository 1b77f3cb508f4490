//! Products API wiring

use axum::Router;
use domain_inventory::{handlers, InventoryService, ListingView, MongoProductRepository};

use crate::state::AppState;

/// Create the products router
pub fn router(state: &AppState) -> eyre::Result<Router> {
    let repository = MongoProductRepository::new(&state.db);
    let service = InventoryService::new(repository);
    let view = ListingView::new()?;

    Ok(handlers::router(service, view))
}

/// Initialize product indexes
pub async fn init_indexes(state: &AppState) -> eyre::Result<()> {
    let repository = MongoProductRepository::new(&state.db);
    repository.init_indexes().await?;
    Ok(())
}
