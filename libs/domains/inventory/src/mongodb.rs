//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, to_bson, Bson, Document},
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, Database, IndexModel,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{InventoryError, InventoryResult};
use crate::models::{Product, ProductFields, ProductTotals};
use crate::repository::ProductRepository;

/// Server error code for a unique-index violation
const DUPLICATE_KEY: i32 = 11000;

/// MongoDB implementation of the ProductRepository
pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    /// Create a new MongoProductRepository
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<Product>("products");
        Self { collection }
    }

    /// Create a new MongoProductRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Product>(collection_name);
        Self { collection }
    }

    /// Initialize indexes.
    ///
    /// The unique name index is the storage-layer arbiter of the
    /// name-uniqueness invariant; the service's find-then-insert check
    /// only produces the friendlier error message.
    pub async fn init_indexes(&self) -> InventoryResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("idx_name_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(index).await?;
        tracing::info!("Product indexes created successfully");
        Ok(())
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Product> {
        &self.collection
    }

    fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
        matches!(
            err.kind.as_ref(),
            ErrorKind::Write(WriteFailure::WriteError(write_err))
                if write_err.code == DUPLICATE_KEY
        )
    }

    /// Aggregation pipeline for the inventory value report: one row per
    /// product with `totalValue = price × quantity`, id and raw price
    /// projected out.
    fn totals_pipeline() -> Vec<Document> {
        vec![doc! {
            "$project": {
                "_id": 0,
                "name": 1,
                "quantity": 1,
                "totalValue": { "$multiply": ["$price", "$quantity"] },
            }
        }]
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> InventoryResult<Vec<Product>> {
        // No sort option: listing preserves natural storage order.
        let cursor = self.collection.find(doc! {}).await?;
        let products: Vec<Product> = cursor.try_collect().await?;

        Ok(products)
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> InventoryResult<Option<Product>> {
        let filter = doc! { "name": name };
        let product = self.collection.find_one(filter).await?;
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> InventoryResult<Option<Product>> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let product = self.collection.find_one(filter).await?;
        Ok(product)
    }

    #[instrument(skip(self, fields), fields(product_name = %fields.name))]
    async fn insert(&self, fields: ProductFields) -> InventoryResult<Product> {
        let product = Product::new(fields);

        self.collection.insert_one(&product).await.map_err(|e| {
            if Self::is_duplicate_key(&e) {
                InventoryError::Conflict(product.name.clone())
            } else {
                InventoryError::from(e)
            }
        })?;

        tracing::info!(product_id = %product.id, "Product created");
        Ok(product)
    }

    #[instrument(skip(self, fields))]
    async fn update(&self, id: Uuid, fields: ProductFields) -> InventoryResult<Product> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let existing = self
            .collection
            .find_one(filter.clone())
            .await?
            .ok_or(InventoryError::NotFound(id))?;

        let mut updated = existing;
        updated.apply_fields(fields);

        self.collection
            .replace_one(filter, &updated)
            .await
            .map_err(|e| {
                if Self::is_duplicate_key(&e) {
                    InventoryError::Conflict(updated.name.clone())
                } else {
                    InventoryError::from(e)
                }
            })?;

        tracing::info!(product_id = %id, "Product updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> InventoryResult<()> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let result = self.collection.delete_one(filter).await?;

        if result.deleted_count == 0 {
            return Err(InventoryError::NotFound(id));
        }

        tracing::info!(product_id = %id, "Product deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn totals(&self) -> InventoryResult<Vec<ProductTotals>> {
        let cursor = self
            .collection
            .aggregate(Self::totals_pipeline())
            .with_type::<ProductTotals>()
            .await?;
        let totals: Vec<ProductTotals> = cursor.try_collect().await?;

        Ok(totals)
    }
}
