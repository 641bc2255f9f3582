//! Cart operations: add (merge-by-product), read with totals, update,
//! remove, clear.

use std::sync::Arc;

use vibe_catalog::CatalogApi;
use vibe_core::{DomainError, DomainResult, LineItemId, SessionId};

use crate::line_item::CartLineItem;
use crate::store::CartStore;
use crate::summary::CartSummary;

/// Whether an add merged into an existing line or created a new one.
/// The HTTP layer maps this to 200 vs 201.
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    Updated(CartLineItem),
    Created(CartLineItem),
}

impl AddOutcome {
    pub fn item(&self) -> &CartLineItem {
        match self {
            AddOutcome::Updated(item) | AddOutcome::Created(item) => item,
        }
    }
}

/// Cart use cases over the store seam and the catalog gateway.
#[derive(Clone)]
pub struct CartService {
    catalog: Arc<dyn CatalogApi>,
    store: Arc<dyn CartStore>,
}

impl CartService {
    pub fn new(catalog: Arc<dyn CatalogApi>, store: Arc<dyn CartStore>) -> Self {
        Self { catalog, store }
    }

    /// Add `qty` of a product to a session's cart.
    ///
    /// A repeated add merges into the existing line; a first add resolves
    /// product metadata through the catalog. A store-level duplicate on
    /// insert means a concurrent add won the race, so the losing side
    /// retries as a merge.
    pub async fn add_item(
        &self,
        session_id: &SessionId,
        product_id: u64,
        qty: u32,
    ) -> DomainResult<AddOutcome> {
        if qty < 1 {
            return Err(DomainError::validation("Quantity must be at least 1"));
        }

        if let Some(mut existing) = self.store.find_by_product(session_id, product_id) {
            existing.add_qty(qty);
            self.store.update(existing.clone());
            return Ok(AddOutcome::Updated(existing));
        }

        let product = self.catalog.product(product_id).await?;
        let item = CartLineItem::new(session_id.clone(), &product, qty);

        match self.store.insert(item.clone()) {
            Ok(()) => Ok(AddOutcome::Created(item)),
            Err(dup) => {
                // Lost an insert race; fold into the winner's line.
                tracing::debug!(product_id = dup.product_id, "duplicate insert, merging");
                let mut existing = self
                    .store
                    .find_by_product(session_id, product_id)
                    .ok_or_else(|| {
                        DomainError::conflict("Cart item changed concurrently, please retry")
                    })?;
                existing.add_qty(qty);
                self.store.update(existing.clone());
                Ok(AddOutcome::Updated(existing))
            }
        }
    }

    /// All line items for a session, newest first, plus computed totals.
    pub fn get_cart(&self, session_id: &SessionId) -> (Vec<CartLineItem>, CartSummary) {
        let mut items = self.store.list(session_id);
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        let summary = CartSummary::of(&items);
        (items, summary)
    }

    /// Overwrite a line's quantity. Cross-session ids are NotFound.
    pub fn update_item(
        &self,
        id: &LineItemId,
        session_id: &SessionId,
        qty: u32,
    ) -> DomainResult<CartLineItem> {
        if qty < 1 {
            return Err(DomainError::validation("Quantity must be at least 1"));
        }
        let mut item = self.owned_item(id, session_id)?;
        item.set_qty(qty);
        self.store.update(item.clone());
        Ok(item)
    }

    /// Delete a line. Cross-session ids are NotFound.
    pub fn remove_item(&self, id: &LineItemId, session_id: &SessionId) -> DomainResult<()> {
        self.owned_item(id, session_id)?;
        self.store.remove(id, session_id);
        Ok(())
    }

    /// Delete everything in a session's cart. Idempotent.
    pub fn clear_cart(&self, session_id: &SessionId) {
        self.store.clear_session(session_id);
    }

    fn owned_item(&self, id: &LineItemId, session_id: &SessionId) -> DomainResult<CartLineItem> {
        self.store.find_owned(id, session_id).ok_or_else(|| {
            DomainError::not_found("Cart item not found or does not belong to this session")
        })
    }
}
