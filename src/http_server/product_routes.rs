//! Product HTTP Routes
//!
//! CRUD endpoints for the `/products` resource.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::{debug, error};

use crate::model::{Product, ProductPayload, ValidationError};
use crate::service::ProductService;

use super::errors::{ApiError, ApiResult};

/// Body returned after a successful delete
pub const DELETED_MESSAGE: &str = "Product deleted successfully";
/// Body returned by the existence check when the product is present
pub const EXISTS_MESSAGE: &str = "Product exists";
/// Body returned by the existence check when the product is absent
pub const NOT_FOUND_MESSAGE: &str = "Product not found";

// ==================
// Shared State
// ==================

/// Product state shared across handlers
pub struct ProductState {
    pub service: ProductService,
}

impl ProductState {
    pub fn new(service: ProductService) -> Self {
        Self { service }
    }
}

type SharedState = Arc<ProductState>;

// ==================
// Request Types
// ==================

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub name: Option<String>,
}

// ==================
// Product Routes
// ==================

/// Create product routes, to be nested under `/products`
pub fn product_routes(state: Arc<ProductState>) -> Router {
    Router::new()
        .route("/", get(list_products_handler).post(create_product_handler))
        .route("/search", get(search_products_handler))
        .route("/ordered-by-quantity", get(ordered_by_quantity_handler))
        .route("/exists/:id", get(exists_handler))
        .route(
            "/:id",
            get(get_product_handler)
                .put(update_product_handler)
                .delete(delete_product_handler),
        )
        .with_state(state)
}

fn rejected(operation: &str, err: impl Into<ApiError>) -> ApiError {
    let err = err.into();
    debug!(operation, error = %err, "request rejected");
    err
}

/// Unwrap a product id from the path, rejecting anything that is not an `i64`
fn path_id(operation: &str, path: Result<Path<i64>, PathRejection>) -> ApiResult<i64> {
    path.map(|Path(id)| id).map_err(|e| rejected(operation, e))
}

async fn list_products_handler(State(state): State<SharedState>) -> ApiResult<Json<Vec<Product>>> {
    let products = state.service.get_all_products().map_err(|e| {
        error!(error = %e, "list products failed");
        ApiError::from(e)
    })?;
    Ok(Json(products))
}

async fn create_product_handler(
    State(state): State<SharedState>,
    body: Result<Json<ProductPayload>, JsonRejection>,
) -> ApiResult<Json<Product>> {
    let Json(payload) = body.map_err(|e| rejected("create", e))?;
    payload.validated_name().map_err(|e| rejected("create", e))?;

    let product = state
        .service
        .save_product(payload.into_new_product())
        .map_err(|e| {
            error!(error = %e, "create product failed");
            ApiError::from(e)
        })?;
    Ok(Json(product))
}

async fn get_product_handler(
    State(state): State<SharedState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Product>> {
    let id = path_id("get", path)?;
    if !state.service.exists_by_id(id) {
        return Err(ApiError::NotFound);
    }

    let product = state.service.get_product_by_id(id).map_err(|e| {
        error!(id, error = %e, "get product failed");
        ApiError::from(e)
    })?;
    // Deleted between the existence check and the read
    product.map(Json).ok_or(ApiError::NotFound)
}

async fn search_products_handler(
    State(state): State<SharedState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Product>>> {
    let Query(query) = query.map_err(|e| rejected("search", e))?;
    let name = match query.name.as_deref() {
        Some(name) if !name.trim().is_empty() => name,
        _ => return Err(rejected("search", ValidationError::BlankSearchTerm)),
    };

    let products = state.service.find_by_name_containing(name).map_err(|e| {
        error!(name, error = %e, "search products failed");
        ApiError::from(e)
    })?;
    Ok(Json(products))
}

async fn update_product_handler(
    State(state): State<SharedState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<ProductPayload>, JsonRejection>,
) -> ApiResult<Json<Product>> {
    let id = path_id("update", path)?;
    let Json(payload) = body.map_err(|e| rejected("update", e))?;
    payload.validated_name().map_err(|e| rejected("update", e))?;
    payload.check_id(id).map_err(|e| rejected("update", e))?;

    if !state.service.exists_by_id(id) {
        return Err(ApiError::NotFound);
    }

    let updated = state.service.update_product(id, &payload).map_err(|e| {
        error!(id, error = %e, "update product failed");
        ApiError::from(e)
    })?;
    updated.map(Json).ok_or(ApiError::NotFound)
}

async fn delete_product_handler(
    State(state): State<SharedState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<(StatusCode, &'static str)> {
    let id = path_id("delete", path)?;
    if !state.service.exists_by_id(id) {
        return Err(ApiError::NotFound);
    }

    match state.service.delete_product(id) {
        Ok(true) => Ok((StatusCode::OK, DELETED_MESSAGE)),
        Ok(false) => {
            error!(id, "delete product found nothing to delete");
            Err(ApiError::DeleteFailed)
        }
        Err(e) => {
            error!(id, error = %e, "delete product failed");
            Err(ApiError::DeleteFailed)
        }
    }
}

async fn exists_handler(
    State(state): State<SharedState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<(StatusCode, &'static str)> {
    let id = path_id("exists", path)?;
    let message = if state.service.exists_by_id(id) {
        EXISTS_MESSAGE
    } else {
        NOT_FOUND_MESSAGE
    };
    Ok((StatusCode::OK, message))
}

async fn ordered_by_quantity_handler(
    State(state): State<SharedState>,
) -> ApiResult<Json<Vec<Product>>> {
    let products = state
        .service
        .get_products_ordered_by_quantity()
        .map_err(|e| {
            error!(error = %e, "list products ordered by quantity failed");
            ApiError::from(e)
        })?;
    Ok(Json(products))
}
