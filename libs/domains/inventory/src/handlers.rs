//! HTTP handlers for the inventory API

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    routing::{get, post, put},
    Json, Router,
};
use axum_helpers::{ErrorResponse, UuidPath, ValidatedForm};
use serde::Deserialize;
use utoipa::{OpenApi, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::error::{InventoryError, InventoryResult};
use crate::models::{Product, ProductInput, ProductTotals};
use crate::repository::ProductRepository;
use crate::service::InventoryService;
use crate::views::ListingView;

/// OpenAPI documentation for the inventory API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        update_product,
        delete_product,
        sort_products,
        filter_by_price,
        report,
    ),
    components(schemas(
        Product,
        ProductInput,
        ProductTotals,
        SortRequest,
        PriceFilterRequest,
        ErrorResponse
    )),
    tags(
        (name = "Products", description = "Inventory management endpoints")
    )
)]
pub struct ApiDoc;

/// Shared state for the product routes
pub struct ProductsState<R: ProductRepository> {
    pub service: InventoryService<R>,
    pub view: ListingView,
}

impl<R: ProductRepository> Clone for ProductsState<R> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            view: self.view.clone(),
        }
    }
}

/// Create the inventory router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(
    service: InventoryService<R>,
    view: ListingView,
) -> Router {
    let state = ProductsState { service, view };

    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            put(update_product).delete(delete_product),
        )
        .route("/sortP", post(sort_products))
        .route("/filterByPrice", post(filter_by_price))
        .route("/report", get(report))
        .with_state(state)
}

/// Sort request body
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SortRequest {
    /// Field to sort by: name, price, or quantity
    #[serde(rename = "sortBy", default)]
    pub sort_by: String,
}

/// Price filter request body
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PriceFilterRequest {
    /// Upper price bound; fractional input is truncated
    #[serde(rename = "maxPrice")]
    pub max_price: f64,
}

/// Render every product in storage order
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    responses(
        (status = 200, description = "HTML product listing", content_type = "text/html"),
        (status = 500, description = "Persistence failure", body = ErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(state): State<ProductsState<R>>,
) -> InventoryResult<Html<String>> {
    let products = state.service.list_products().await?;
    let page = state.view.render(&products)?;
    Ok(Html(page))
}

/// Create a product and redirect to the listing
#[utoipa::path(
    post,
    path = "/products",
    tag = "Products",
    request_body(content = ProductInput, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Created; redirects to /products"),
        (status = 400, description = "Validation failure or duplicate name", body = ErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(state): State<ProductsState<R>>,
    ValidatedForm(input): ValidatedForm<ProductInput>,
) -> InventoryResult<Redirect> {
    state.service.create_product(input).await?;
    Ok(Redirect::to("/products"))
}

/// Replace a product's fields and redirect to the listing
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body(content = ProductInput, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Updated; redirects to /products"),
        (status = 400, description = "Validation failure or malformed id", body = ErrorResponse),
        (status = 404, description = "No product with that id", body = ErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(state): State<ProductsState<R>>,
    UuidPath(id): UuidPath,
    ValidatedForm(input): ValidatedForm<ProductInput>,
) -> InventoryResult<Redirect> {
    state.service.update_product(id, input).await?;
    Ok(Redirect::to("/products"))
}

/// Delete a product and redirect to the listing
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 303, description = "Deleted; redirects to /products"),
        (status = 404, description = "No product with that id", body = ErrorResponse),
        (status = 500, description = "Persistence failure or malformed id", body = ErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(state): State<ProductsState<R>>,
    Path(id): Path<String>,
) -> InventoryResult<Redirect> {
    // Unlike update, a malformed id on the delete path is a server
    // fault: everything but a missing target maps to 500 here.
    let id = id
        .parse::<Uuid>()
        .map_err(|e| InventoryError::Internal(format!("invalid product id '{}': {}", id, e)))?;

    state.service.delete_product(id).await?;
    Ok(Redirect::to("/products"))
}

/// Render the listing reordered by the requested key
#[utoipa::path(
    post,
    path = "/sortP",
    tag = "Products",
    request_body(content = SortRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "HTML product listing, reordered", content_type = "text/html"),
        (status = 500, description = "Persistence failure", body = ErrorResponse)
    )
)]
async fn sort_products<R: ProductRepository>(
    State(state): State<ProductsState<R>>,
    ValidatedForm(request): ValidatedForm<SortRequest>,
) -> InventoryResult<Html<String>> {
    let products = state.service.list_sorted(&request.sort_by).await?;
    let page = state.view.render(&products)?;
    Ok(Html(page))
}

/// Render the listing filtered to products at or under the price bound
#[utoipa::path(
    post,
    path = "/filterByPrice",
    tag = "Products",
    request_body(content = PriceFilterRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "HTML product listing, filtered", content_type = "text/html"),
        (status = 500, description = "Persistence failure", body = ErrorResponse)
    )
)]
async fn filter_by_price<R: ProductRepository>(
    State(state): State<ProductsState<R>>,
    ValidatedForm(request): ValidatedForm<PriceFilterRequest>,
) -> InventoryResult<Html<String>> {
    let products = state.service.list_filtered(request.max_price).await?;
    let page = state.view.render(&products)?;
    Ok(Html(page))
}

/// Per-product inventory value report
#[utoipa::path(
    get,
    path = "/report",
    tag = "Products",
    responses(
        (status = 200, description = "Report rows", body = Vec<ProductTotals>),
        (status = 500, description = "Aggregation failure", body = ErrorResponse)
    )
)]
async fn report<R: ProductRepository>(
    State(state): State<ProductsState<R>>,
) -> InventoryResult<Json<Vec<ProductTotals>>> {
    let totals = state.service.report().await?;
    Ok(Json(totals))
}
