//! Document-store seam for cart line items.
//!
//! The store is keyed by `(session, product)` with a uniqueness constraint
//! over that pair; cart deduplication under concurrent adds relies on the
//! store rejecting the losing insert.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use thiserror::Error;

use vibe_core::{LineItemId, SessionId};

use crate::line_item::CartLineItem;

/// Insert rejected by the `(session, product)` uniqueness constraint.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("cart already holds product {product_id} for this session")]
pub struct DuplicateLineItem {
    pub product_id: u64,
}

/// Session-isolated persistence for cart line items.
pub trait CartStore: Send + Sync {
    /// Look up a session's line for a product, if any.
    fn find_by_product(&self, session_id: &SessionId, product_id: u64) -> Option<CartLineItem>;

    /// Look up a line by id **within** a session. A hit under another
    /// session is treated as absent (ownership check).
    fn find_owned(&self, id: &LineItemId, session_id: &SessionId) -> Option<CartLineItem>;

    /// Insert a new line; fails if the `(session, product)` slot is taken.
    fn insert(&self, item: CartLineItem) -> Result<(), DuplicateLineItem>;

    /// Overwrite an existing line (same id, same slot).
    fn update(&self, item: CartLineItem);

    /// All lines for a session, in unspecified order.
    fn list(&self, session_id: &SessionId) -> Vec<CartLineItem>;

    /// Delete a line by id within a session; `false` if absent/not owned.
    fn remove(&self, id: &LineItemId, session_id: &SessionId) -> bool;

    /// Delete every line for a session. Idempotent.
    fn clear_session(&self, session_id: &SessionId);

    /// Delete every line for **all** sessions (checkout behavior).
    fn clear_all(&self);
}

impl<S> CartStore for Arc<S>
where
    S: CartStore + ?Sized,
{
    fn find_by_product(&self, session_id: &SessionId, product_id: u64) -> Option<CartLineItem> {
        (**self).find_by_product(session_id, product_id)
    }

    fn find_owned(&self, id: &LineItemId, session_id: &SessionId) -> Option<CartLineItem> {
        (**self).find_owned(id, session_id)
    }

    fn insert(&self, item: CartLineItem) -> Result<(), DuplicateLineItem> {
        (**self).insert(item)
    }

    fn update(&self, item: CartLineItem) {
        (**self).update(item)
    }

    fn list(&self, session_id: &SessionId) -> Vec<CartLineItem> {
        (**self).list(session_id)
    }

    fn remove(&self, id: &LineItemId, session_id: &SessionId) -> bool {
        (**self).remove(id, session_id)
    }

    fn clear_session(&self, session_id: &SessionId) {
        (**self).clear_session(session_id)
    }

    fn clear_all(&self) {
        (**self).clear_all()
    }
}

/// In-memory cart store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryCartStore {
    inner: RwLock<HashMap<(SessionId, u64), CartLineItem>>,
}

impl InMemoryCartStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStore for InMemoryCartStore {
    fn find_by_product(&self, session_id: &SessionId, product_id: u64) -> Option<CartLineItem> {
        let map = self.inner.read().ok()?;
        map.get(&(session_id.clone(), product_id)).cloned()
    }

    fn find_owned(&self, id: &LineItemId, session_id: &SessionId) -> Option<CartLineItem> {
        let map = self.inner.read().ok()?;
        map.values()
            .find(|item| item.id == *id && item.session_id == *session_id)
            .cloned()
    }

    fn insert(&self, item: CartLineItem) -> Result<(), DuplicateLineItem> {
        let mut map = self
            .inner
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let key = (item.session_id.clone(), item.product_id);
        if map.contains_key(&key) {
            return Err(DuplicateLineItem {
                product_id: item.product_id,
            });
        }
        map.insert(key, item);
        Ok(())
    }

    fn update(&self, item: CartLineItem) {
        if let Ok(mut map) = self.inner.write() {
            map.insert((item.session_id.clone(), item.product_id), item);
        }
    }

    fn list(&self, session_id: &SessionId) -> Vec<CartLineItem> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };
        map.values()
            .filter(|item| item.session_id == *session_id)
            .cloned()
            .collect()
    }

    fn remove(&self, id: &LineItemId, session_id: &SessionId) -> bool {
        let Ok(mut map) = self.inner.write() else {
            return false;
        };
        let key = map
            .iter()
            .find(|(_, item)| item.id == *id && item.session_id == *session_id)
            .map(|(k, _)| k.clone());
        match key {
            Some(k) => map.remove(&k).is_some(),
            None => false,
        }
    }

    fn clear_session(&self, session_id: &SessionId) {
        if let Ok(mut map) = self.inner.write() {
            map.retain(|(s, _), _| s != session_id);
        }
    }

    fn clear_all(&self) {
        if let Ok(mut map) = self.inner.write() {
            map.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vibe_catalog::CatalogProduct;

    fn product(id: u64) -> CatalogProduct {
        CatalogProduct {
            id,
            title: format!("Product {id}"),
            price: 1.0,
            description: String::new(),
            category: "test".to_string(),
            image: String::new(),
            rating: None,
        }
    }

    fn session(token: &str) -> SessionId {
        SessionId::new(token).unwrap()
    }

    #[test]
    fn insert_enforces_session_product_uniqueness() {
        let store = InMemoryCartStore::new();
        let s = session("a");
        store
            .insert(CartLineItem::new(s.clone(), &product(1), 1))
            .unwrap();

        let err = store
            .insert(CartLineItem::new(s.clone(), &product(1), 2))
            .unwrap_err();
        assert_eq!(err.product_id, 1);

        // Same product under a different session is a different slot.
        store
            .insert(CartLineItem::new(session("b"), &product(1), 1))
            .unwrap();
    }

    #[test]
    fn find_owned_is_session_scoped() {
        let store = InMemoryCartStore::new();
        let a = session("a");
        let item = CartLineItem::new(a.clone(), &product(1), 1);
        let id = item.id;
        store.insert(item).unwrap();

        assert!(store.find_owned(&id, &a).is_some());
        assert!(store.find_owned(&id, &session("b")).is_none());
    }

    #[test]
    fn remove_refuses_foreign_session() {
        let store = InMemoryCartStore::new();
        let a = session("a");
        let item = CartLineItem::new(a.clone(), &product(1), 1);
        let id = item.id;
        store.insert(item).unwrap();

        assert!(!store.remove(&id, &session("b")));
        assert_eq!(store.list(&a).len(), 1);
        assert!(store.remove(&id, &a));
        assert!(store.list(&a).is_empty());
    }

    #[test]
    fn clear_session_leaves_other_sessions_alone() {
        let store = InMemoryCartStore::new();
        let a = session("a");
        let b = session("b");
        store.insert(CartLineItem::new(a.clone(), &product(1), 1)).unwrap();
        store.insert(CartLineItem::new(b.clone(), &product(2), 1)).unwrap();

        store.clear_session(&a);
        store.clear_session(&a); // idempotent
        assert!(store.list(&a).is_empty());
        assert_eq!(store.list(&b).len(), 1);

        store.clear_all();
        assert!(store.list(&b).is_empty());
    }
}
