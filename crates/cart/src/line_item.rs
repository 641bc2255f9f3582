use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vibe_catalog::CatalogProduct;
use vibe_core::{LineItemId, SessionId};

/// One product entry in a session's cart.
///
/// `subtotal` is derived (`price * qty`) and recomputed by every mutator;
/// it is never accepted from the outside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: LineItemId,
    pub session_id: SessionId,
    pub product_id: u64,
    pub title: String,
    pub price: f64,
    pub image: String,
    pub category: String,
    pub qty: u32,
    pub subtotal: f64,
    pub created_at: DateTime<Utc>,
}

impl CartLineItem {
    /// Create a line item from catalog metadata. The caller guarantees
    /// `qty >= 1` (validated at the service boundary).
    pub fn new(session_id: SessionId, product: &CatalogProduct, qty: u32) -> Self {
        Self {
            id: LineItemId::new(),
            session_id,
            product_id: product.id,
            title: product.title.clone(),
            price: product.price,
            image: product.image.clone(),
            category: product.category.clone(),
            qty,
            subtotal: product.price * f64::from(qty),
            created_at: Utc::now(),
        }
    }

    /// Merge a repeated add into this line. Quantities are client-supplied,
    /// so the sum saturates rather than overflowing past `u32::MAX`.
    pub fn add_qty(&mut self, qty: u32) {
        self.qty = self.qty.saturating_add(qty);
        self.recompute_subtotal();
    }

    /// Overwrite the quantity (update operation).
    pub fn set_qty(&mut self, qty: u32) {
        self.qty = qty;
        self.recompute_subtotal();
    }

    fn recompute_subtotal(&mut self) {
        self.subtotal = self.price * f64::from(self.qty);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> CatalogProduct {
        CatalogProduct {
            id: 7,
            title: "Lamp".to_string(),
            price: 19.99,
            description: String::new(),
            category: "home".to_string(),
            image: "https://img.example/lamp.png".to_string(),
            rating: None,
        }
    }

    fn session() -> SessionId {
        SessionId::new("sess_test").unwrap()
    }

    #[test]
    fn new_line_item_derives_subtotal() {
        let item = CartLineItem::new(session(), &product(), 3);
        assert_eq!(item.qty, 3);
        assert_eq!(item.subtotal, 19.99 * 3.0);
    }

    #[test]
    fn subtotal_tracks_quantity_mutations() {
        let mut item = CartLineItem::new(session(), &product(), 1);
        item.add_qty(2);
        assert_eq!(item.qty, 3);
        assert_eq!(item.subtotal, 19.99 * 3.0);

        item.set_qty(1);
        assert_eq!(item.qty, 1);
        assert_eq!(item.subtotal, 19.99);
    }

    #[test]
    fn merging_saturates_instead_of_wrapping() {
        let mut item = CartLineItem::new(session(), &product(), u32::MAX);
        item.add_qty(1);
        assert_eq!(item.qty, u32::MAX);

        item.add_qty(u32::MAX);
        assert_eq!(item.qty, u32::MAX);
    }
}
