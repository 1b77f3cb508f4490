//! Inventory Domain
//!
//! A complete domain implementation for managing inventory products
//! backed by MongoDB.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints (+ the listing view)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business rules: uniqueness, validation, sort/filter
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Product entity, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_inventory::{handlers, InventoryService, ListingView, MongoProductRepository};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("mydatabase");
//!
//! let repository = MongoProductRepository::new(&db);
//! let service = InventoryService::new(repository);
//! let view = ListingView::new()?;
//!
//! let router = handlers::router(service, view);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;
pub mod views;

// Re-export commonly used types
pub use error::{InventoryError, InventoryResult};
pub use handlers::ApiDoc;
pub use models::{Product, ProductFields, ProductInput, ProductTotals};
pub use mongodb::MongoProductRepository;
pub use repository::ProductRepository;
pub use service::InventoryService;
pub use views::ListingView;
