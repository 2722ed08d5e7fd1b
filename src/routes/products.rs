//! Product CRUD endpoints.
//!
//! Each handler is a thin adapter: extract the path id and/or JSON body,
//! call exactly one store operation, serialize the result. A missing
//! record under a well-formed id is a `null` body with status 200, not an
//! error; update/delete of a missing id is a zero-count summary.

use crate::error::{ApiError, ApiResult};
use crate::model::{DeleteSummary, NewProduct, Product, ProductPatch, UpdateSummary};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::Json;

/// Create a new product
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "products",
    request_body = NewProduct,
    responses(
        (status = 200, description = "Product created", body = Product),
        (status = 400, description = "Missing or empty required field"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> ApiResult<Json<Product>> {
    // Deserialize by hand so a missing field surfaces as a validation
    // error in the standard envelope rather than a framework rejection.
    let input: NewProduct =
        serde_json::from_value(body).map_err(|err| ApiError::Validation(err.to_string()))?;
    input.validate().map_err(ApiError::Validation)?;

    let product = state.store.create(input).await?;
    Ok(Json(product))
}

/// List all products
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "products",
    responses(
        (status = 200, description = "All products, in storage-defined order", body = [Product]),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list_products(State(state): State<AppState>) -> ApiResult<Json<Vec<Product>>> {
    let products = state.store.list_all().await?;
    Ok(Json(products))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "products",
    params(("id" = String, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product, or null when no record matches", body = Option<Product>),
        (status = 400, description = "Malformed id"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Option<Product>>> {
    let product = state.store.get_by_id(&id).await?;
    Ok(Json(product))
}

/// Update a product. Fields absent from the body keep their stored values.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "products",
    params(("id" = String, Path, description = "Product id")),
    request_body = ProductPatch,
    responses(
        (status = 200, description = "Update summary", body = UpdateSummary),
        (status = 400, description = "Malformed id"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ProductPatch>,
) -> ApiResult<Json<UpdateSummary>> {
    let summary = state.store.update(&id, patch).await?;
    Ok(Json(summary))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "products",
    params(("id" = String, Path, description = "Product id")),
    responses(
        (status = 200, description = "Delete summary", body = DeleteSummary),
        (status = 400, description = "Malformed id"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteSummary>> {
    let summary = state.store.delete(&id).await?;
    Ok(Json(summary))
}
