use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(process_checkout))
        .route("/receipts", get(list_receipts))
        .route("/receipt/:receipt_number", get(get_receipt))
        .route("/receipts/email/:email", get(list_receipts_by_email))
}

pub async fn process_checkout(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CheckoutRequest>,
) -> axum::response::Response {
    let (Some(name), Some(email)) = (body.name, body.email) else {
        return errors::json_error(StatusCode::BAD_REQUEST, "Name and email are required");
    };
    let order: Vec<_> = body
        .cart_items
        .unwrap_or_default()
        .into_iter()
        .map(dto::CheckoutItemRequest::into_order_item)
        .collect();

    match services.checkout.process_checkout(&name, &email, order) {
        Ok(receipt) => (
            StatusCode::CREATED,
            Json(serde_json::json!({
                "success": true,
                "message": "Checkout successful",
                "receipt": dto::receipt_to_json(&receipt),
            })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_receipts(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ReceiptsQuery>,
) -> axum::response::Response {
    let receipts = services
        .checkout
        .receipts(query.email.as_deref(), query.limit);
    let receipts: Vec<serde_json::Value> = receipts.iter().map(dto::receipt_to_json).collect();

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "count": receipts.len(),
            "data": receipts,
        })),
    )
        .into_response()
}

pub async fn get_receipt(
    Extension(services): Extension<Arc<AppServices>>,
    Path(receipt_number): Path<String>,
) -> axum::response::Response {
    match services.checkout.receipt_by_number(&receipt_number) {
        Ok(receipt) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "data": dto::receipt_to_json(&receipt),
            })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_receipts_by_email(
    Extension(services): Extension<Arc<AppServices>>,
    Path(email): Path<String>,
) -> axum::response::Response {
    match services.checkout.receipts_by_email(&email) {
        Ok(receipts) => {
            let receipts: Vec<serde_json::Value> =
                receipts.iter().map(dto::receipt_to_json).collect();
            (
                StatusCode::OK,
                Json(serde_json::json!({
                    "success": true,
                    "count": receipts.len(),
                    "data": receipts,
                })),
            )
                .into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}
