//! Request DTOs and JSON mapping helpers.
//!
//! Request bodies use camelCase field names to match the browser client;
//! domain types stay snake_case internally. Optional fields let handlers
//! report a missing field as a 400 instead of a generic decode failure.

use serde::Deserialize;
use serde_json::json;

use vibe_cart::CartLineItem;
use vibe_checkout::{OrderItem, Receipt};

#[derive(Debug, Deserialize)]
pub struct ProductsQuery {
    pub limit: Option<u32>,
    pub sort: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCartItemRequest {
    pub product_id: Option<u64>,
    pub qty: Option<i64>,
    pub session_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartItemRequest {
    pub qty: Option<i64>,
    pub session_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCartItemRequest {
    pub session_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub cart_items: Option<Vec<CheckoutItemRequest>>,
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutItemRequest {
    pub product_id: u64,
    pub title: String,
    pub price: f64,
    pub qty: u32,
}

impl CheckoutItemRequest {
    pub fn into_order_item(self) -> OrderItem {
        OrderItem {
            product_id: self.product_id,
            title: self.title,
            price: self.price,
            qty: self.qty,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReceiptsQuery {
    pub email: Option<String>,
    pub limit: Option<usize>,
}

/// Quantities arrive as signed JSON numbers; anything below 1 is `None`
/// (the caller reports the validation error), anything above `u32::MAX`
/// saturates.
pub fn quantity(qty: i64) -> Option<u32> {
    if qty < 1 {
        return None;
    }
    Some(u32::try_from(qty).unwrap_or(u32::MAX))
}

pub fn line_item_to_json(item: &CartLineItem) -> serde_json::Value {
    json!({
        "_id": item.id.to_string(),
        "sessionId": item.session_id.as_str(),
        "productId": item.product_id,
        "title": item.title,
        "price": item.price,
        "image": item.image,
        "category": item.category,
        "qty": item.qty,
        "subtotal": item.subtotal,
        "createdAt": item.created_at.to_rfc3339(),
    })
}

/// Public projection of a receipt; internal fields (payment method) stay
/// server-side.
pub fn receipt_to_json(receipt: &Receipt) -> serde_json::Value {
    let items: Vec<serde_json::Value> = receipt
        .items
        .iter()
        .map(|item| {
            json!({
                "productId": item.product_id,
                "title": item.title,
                "price": item.price,
                "qty": item.qty,
                "subtotal": item.subtotal,
            })
        })
        .collect();

    json!({
        "receiptNumber": receipt.receipt_number,
        "name": receipt.name,
        "email": receipt.email.as_str(),
        "items": items,
        "subtotal": receipt.subtotal,
        "tax": receipt.tax,
        "total": receipt.total,
        "status": receipt.status,
        "timestamp": receipt.created_at.to_rfc3339(),
    })
}
