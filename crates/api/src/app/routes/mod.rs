use axum::http::{StatusCode, Uri};
use axum::Router;

use crate::app::errors;

pub mod cart;
pub mod checkout;
pub mod products;
pub mod system;

/// All `/api` routes, one sub-router per domain area.
pub fn router() -> Router {
    Router::new()
        .nest("/api/products", products::router())
        .nest("/api/cart", cart::router())
        .nest("/api/checkout", checkout::router())
}

/// Fallback for anything outside the routing table.
pub async fn route_not_found(uri: Uri) -> axum::response::Response {
    errors::json_error(
        StatusCode::NOT_FOUND,
        format!("Route not found - {}", uri.path()),
    )
}
