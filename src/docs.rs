//! OpenAPI document assembly.
//!
//! The interactive UI is served at `/api-doc`, the document itself at
//! `/api-doc/openapi.json`.

use crate::model::{DeleteSummary, NewProduct, Product, ProductPatch, UpdateSummary};
use crate::routes::products;
use utoipa::OpenApi;

/// Generated OpenAPI specification for the product API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product API",
        description = "CRUD HTTP service for a product catalog backed by MongoDB"
    ),
    paths(
        products::create_product,
        products::list_products,
        products::get_product,
        products::update_product,
        products::delete_product,
    ),
    components(schemas(Product, NewProduct, ProductPatch, UpdateSummary, DeleteSummary)),
    tags((name = "products", description = "Product catalog CRUD"))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_all_operations() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();

        let collection = &doc["paths"]["/api/users"];
        assert!(collection["post"].is_object());
        assert!(collection["get"].is_object());

        let item = &doc["paths"]["/api/users/{id}"];
        assert!(item["get"].is_object());
        assert!(item["put"].is_object());
        assert!(item["delete"].is_object());
    }
}
