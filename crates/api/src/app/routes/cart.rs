use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};

use vibe_cart::AddOutcome;
use vibe_core::{LineItemId, SessionId};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(add_to_cart))
        .route("/clear/:session_id", delete(clear_cart))
        .route(
            "/:id",
            get(get_cart).put(update_cart_item).delete(remove_cart_item),
        )
}

pub async fn add_to_cart(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::AddCartItemRequest>,
) -> axum::response::Response {
    let Some(product_id) = body.product_id else {
        return errors::json_error(StatusCode::BAD_REQUEST, "Product ID is required");
    };
    let session_id = match SessionId::new(body.session_id.unwrap_or_default()) {
        Ok(s) => s,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let Some(qty) = dto::quantity(body.qty.unwrap_or(1)) else {
        return errors::json_error(StatusCode::BAD_REQUEST, "Quantity must be at least 1");
    };

    match services.cart.add_item(&session_id, product_id, qty).await {
        Ok(AddOutcome::Created(item)) => (
            StatusCode::CREATED,
            Json(serde_json::json!({
                "success": true,
                "message": "Item added to cart successfully",
                "data": dto::line_item_to_json(&item),
            })),
        )
            .into_response(),
        Ok(AddOutcome::Updated(item)) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "message": "Cart item quantity updated",
                "data": dto::line_item_to_json(&item),
            })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// `GET /api/cart/:id` — the path segment is the *session* token here;
/// the item routes below reuse the same slot for a line item id.
pub async fn get_cart(
    Extension(services): Extension<Arc<AppServices>>,
    Path(session_id): Path<String>,
) -> axum::response::Response {
    let session_id = match SessionId::new(session_id) {
        Ok(s) => s,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let (items, summary) = services.cart.get_cart(&session_id);
    let items: Vec<serde_json::Value> = items.iter().map(dto::line_item_to_json).collect();

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "count": items.len(),
            "data": items,
            "summary": summary,
        })),
    )
        .into_response()
}

pub async fn update_cart_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateCartItemRequest>,
) -> axum::response::Response {
    let id: LineItemId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "Invalid cart item ID"),
    };
    let session_id = match SessionId::new(body.session_id.unwrap_or_default()) {
        Ok(s) => s,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let Some(qty) = body.qty.and_then(dto::quantity) else {
        return errors::json_error(StatusCode::BAD_REQUEST, "Quantity must be at least 1");
    };

    match services.cart.update_item(&id, &session_id, qty) {
        Ok(item) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "message": "Cart item updated successfully",
                "data": dto::line_item_to_json(&item),
            })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn remove_cart_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Option<Json<dto::DeleteCartItemRequest>>,
) -> axum::response::Response {
    let id: LineItemId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "Invalid cart item ID"),
    };
    let session_token = body.and_then(|Json(b)| b.session_id).unwrap_or_default();
    let session_id = match SessionId::new(session_token) {
        Ok(s) => s,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.cart.remove_item(&id, &session_id) {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "message": "Cart item removed successfully",
                "data": { "id": id.to_string() },
            })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn clear_cart(
    Extension(services): Extension<Arc<AppServices>>,
    Path(session_id): Path<String>,
) -> axum::response::Response {
    let session_id = match SessionId::new(session_id) {
        Ok(s) => s,
        Err(e) => return errors::domain_error_to_response(e),
    };

    services.cart.clear_cart(&session_id);
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "message": "Cart cleared successfully",
        })),
    )
        .into_response()
}
