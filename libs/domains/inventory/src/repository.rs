use async_trait::async_trait;
use uuid::Uuid;

use crate::error::InventoryResult;
use crate::models::{Product, ProductFields, ProductTotals};

/// Repository trait for Product persistence
///
/// The data-access contract the handling layer requires. Implementations
/// can use different storage backends (MongoDB in production, in-memory
/// doubles in tests).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every product in natural storage order
    async fn find_all(&self) -> InventoryResult<Vec<Product>>;

    /// Look up a product by exact name
    async fn find_by_name(&self, name: &str) -> InventoryResult<Option<Product>>;

    /// Look up a product by id
    async fn find_by_id(&self, id: Uuid) -> InventoryResult<Option<Product>>;

    /// Persist a new product, assigning its id
    async fn insert(&self, fields: ProductFields) -> InventoryResult<Product>;

    /// Replace the writable fields of an existing product
    async fn update(&self, id: Uuid, fields: ProductFields) -> InventoryResult<Product>;

    /// Delete a product by id
    async fn delete(&self, id: Uuid) -> InventoryResult<()>;

    /// Per-product inventory value, computed by the storage layer
    async fn totals(&self) -> InventoryResult<Vec<ProductTotals>>;
}
