//! Inventory service - business rules over the repository

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{InventoryError, InventoryResult};
use crate::models::{Product, ProductFields, ProductInput, ProductTotals};
use crate::repository::ProductRepository;

/// Inventory service providing the business logic operations
///
/// The service validates input, enforces the name-uniqueness pre-check,
/// and applies the in-memory sort/filter rules; everything durable goes
/// through the repository.
pub struct InventoryService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> InventoryService<R> {
    /// Create a new InventoryService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Every product, in natural storage order
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> InventoryResult<Vec<Product>> {
        self.repository.find_all().await
    }

    /// Create a new product
    ///
    /// Checks for an existing product with the same name before
    /// inserting. Two concurrent creations can both pass this check;
    /// the repository's unique index settles the race.
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: ProductInput) -> InventoryResult<Product> {
        let fields = validate_input(input)?;

        if self
            .repository
            .find_by_name(&fields.name)
            .await
            .map_err(client_fault)?
            .is_some()
        {
            return Err(InventoryError::Conflict(fields.name));
        }

        self.repository.insert(fields).await.map_err(client_fault)
    }

    /// Replace an existing product's fields
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: Uuid, input: ProductInput) -> InventoryResult<Product> {
        let fields = validate_input(input)?;
        self.repository
            .update(id, fields)
            .await
            .map_err(client_fault)
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: Uuid) -> InventoryResult<()> {
        self.repository.delete(id).await
    }

    /// Every product, reordered in memory by the requested key
    #[instrument(skip(self))]
    pub async fn list_sorted(&self, sort_by: &str) -> InventoryResult<Vec<Product>> {
        let mut products = self.repository.find_all().await?;
        sort_products(&mut products, sort_by);
        Ok(products)
    }

    /// Products with `price <= max_price`, in storage order
    ///
    /// The bound is truncated to a whole number before comparing, so a
    /// request for `12.9` filters at `12`.
    #[instrument(skip(self))]
    pub async fn list_filtered(&self, max_price: f64) -> InventoryResult<Vec<Product>> {
        let max = max_price as i64;
        let mut products = self.repository.find_all().await?;
        products.retain(|p| p.price <= max as f64);
        Ok(products)
    }

    /// Per-product inventory value report
    #[instrument(skip(self))]
    pub async fn report(&self) -> InventoryResult<Vec<ProductTotals>> {
        self.repository.totals().await
    }
}

impl<R: ProductRepository> Clone for InventoryService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

/// Validate a request body and unwrap the required fields.
fn validate_input(input: ProductInput) -> InventoryResult<ProductFields> {
    input
        .validate()
        .map_err(|e| InventoryError::Invalid(e.to_string()))?;

    let ProductInput {
        name,
        price,
        description,
        quantity,
        unit,
    } = input;

    let price = price
        .ok_or_else(|| InventoryError::Invalid("missing required field: price".to_string()))?;
    let quantity = quantity
        .ok_or_else(|| InventoryError::Invalid("missing required field: quantity".to_string()))?;

    Ok(ProductFields {
        name,
        price,
        description,
        quantity,
        unit,
    })
}

/// Creation and update report persistence faults as client errors (400);
/// delete and the read paths keep them as server faults (500).
fn client_fault(err: InventoryError) -> InventoryError {
    match err {
        InventoryError::Database(msg) => InventoryError::Invalid(msg),
        other => other,
    }
}

/// Reorder in place by a client-chosen key. Unknown keys leave the
/// storage order untouched. Sorts are stable, so ties keep their
/// relative order.
fn sort_products(products: &mut [Product], sort_by: &str) {
    match sort_by {
        "name" => products.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
        "price" => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        "quantity" => products.sort_by_key(|p| p.quantity),
        _ => {}
    }
}
