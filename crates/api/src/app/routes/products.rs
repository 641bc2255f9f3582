use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use vibe_catalog::SortOrder;
use vibe_core::DomainError;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// Default page size when the client sends no `limit`.
const DEFAULT_LIMIT: u32 = 10;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/categories/all", get(list_categories))
        .route("/category/:category", get(list_by_category))
        .route("/:id", get(get_product))
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ProductsQuery>,
) -> axum::response::Response {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    let sort = query
        .sort
        .as_deref()
        .and_then(|s| s.parse::<SortOrder>().ok())
        .unwrap_or_default();

    match services.catalog.list_products(limit, sort).await {
        Ok(products) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "count": products.len(),
                "data": products,
            })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(DomainError::from(e)),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: u64 = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "Invalid product ID"),
    };

    match services.catalog.product(id).await {
        Ok(product) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "data": product,
            })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(DomainError::from(e)),
    }
}

pub async fn list_by_category(
    Extension(services): Extension<Arc<AppServices>>,
    Path(category): Path<String>,
) -> axum::response::Response {
    match services.catalog.products_in_category(&category).await {
        Ok(products) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "category": category,
                "count": products.len(),
                "data": products,
            })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(DomainError::from(e)),
    }
}

pub async fn list_categories(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.catalog.categories().await {
        Ok(categories) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "count": categories.len(),
                "data": categories,
            })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(DomainError::from(e)),
    }
}
