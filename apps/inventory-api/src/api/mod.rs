//! API routes module
//!
//! Defines the HTTP surface: product routes, the root redirect, and the
//! readiness endpoint.

pub mod health;
pub mod products;

use axum::{response::Redirect, routing::get, Router};

use crate::state::AppState;

/// Create all API routes at the root of the HTTP surface
pub fn routes(state: &AppState) -> eyre::Result<Router> {
    let router = Router::new()
        .merge(products::router(state)?)
        .merge(health::router(state.clone()))
        .route("/", get(|| async { Redirect::to("/products") }));

    Ok(router)
}
