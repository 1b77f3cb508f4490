//! Shared application state.

use mongodb::{Client, Database};

/// State handed to every request handler.
///
/// Cloning is cheap: the MongoDB client shares one connection pool
/// across all clones.
#[derive(Clone)]
pub struct AppState {
    /// Configuration loaded at startup
    pub config: crate::config::Config,
    /// MongoDB client
    pub mongo_client: Client,
    /// Handle to the configured database
    pub db: Database,
}
