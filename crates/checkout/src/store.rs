//! Append-only receipt persistence.

use std::sync::{Arc, RwLock};

use thiserror::Error;

use crate::receipt::Receipt;

/// Insert rejected by the receipt-number uniqueness constraint.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("receipt number {receipt_number} already exists")]
pub struct DuplicateReceiptNumber {
    pub receipt_number: String,
}

/// Receipt persistence: inserts and reads only, no update or delete.
pub trait ReceiptStore: Send + Sync {
    /// Append a receipt; fails if the receipt number is already taken.
    fn insert(&self, receipt: Receipt) -> Result<(), DuplicateReceiptNumber>;

    /// Exact receipt-number lookup.
    fn by_number(&self, receipt_number: &str) -> Option<Receipt>;

    /// Newest-first listing, optionally filtered by exact (lower-cased)
    /// email, capped at `limit`.
    fn list(&self, email: Option<&str>, limit: usize) -> Vec<Receipt>;

    /// Newest-first listing for one email; empty vec when none match.
    fn by_email(&self, email: &str) -> Vec<Receipt>;
}

impl<S> ReceiptStore for Arc<S>
where
    S: ReceiptStore + ?Sized,
{
    fn insert(&self, receipt: Receipt) -> Result<(), DuplicateReceiptNumber> {
        (**self).insert(receipt)
    }

    fn by_number(&self, receipt_number: &str) -> Option<Receipt> {
        (**self).by_number(receipt_number)
    }

    fn list(&self, email: Option<&str>, limit: usize) -> Vec<Receipt> {
        (**self).list(email, limit)
    }

    fn by_email(&self, email: &str) -> Vec<Receipt> {
        (**self).by_email(email)
    }
}

/// In-memory receipt store for tests/dev. Append order doubles as the
/// recency order, newest last internally.
#[derive(Debug, Default)]
pub struct InMemoryReceiptStore {
    inner: RwLock<Vec<Receipt>>,
}

impl InMemoryReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReceiptStore for InMemoryReceiptStore {
    fn insert(&self, receipt: Receipt) -> Result<(), DuplicateReceiptNumber> {
        let mut receipts = self
            .inner
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if receipts
            .iter()
            .any(|r| r.receipt_number == receipt.receipt_number)
        {
            return Err(DuplicateReceiptNumber {
                receipt_number: receipt.receipt_number,
            });
        }
        receipts.push(receipt);
        Ok(())
    }

    fn by_number(&self, receipt_number: &str) -> Option<Receipt> {
        let receipts = self.inner.read().ok()?;
        receipts
            .iter()
            .find(|r| r.receipt_number == receipt_number)
            .cloned()
    }

    fn list(&self, email: Option<&str>, limit: usize) -> Vec<Receipt> {
        let receipts = match self.inner.read() {
            Ok(r) => r,
            Err(_) => return vec![],
        };
        receipts
            .iter()
            .rev()
            .filter(|r| email.is_none_or(|e| r.email.as_str() == e))
            .take(limit)
            .cloned()
            .collect()
    }

    fn by_email(&self, email: &str) -> Vec<Receipt> {
        let receipts = match self.inner.read() {
            Ok(r) => r,
            Err(_) => return vec![],
        };
        receipts
            .iter()
            .rev()
            .filter(|r| r.email.as_str() == email)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::receipt::{OrderItem, Receipt};
    use vibe_core::Email;

    fn receipt(email: &str) -> Receipt {
        Receipt::create(
            "Buyer".to_string(),
            Email::parse(email).unwrap(),
            vec![OrderItem {
                product_id: 1,
                title: "Shirt".to_string(),
                price: 10.0,
                qty: 1,
            }],
        )
    }

    #[test]
    fn duplicate_receipt_number_is_rejected() {
        let store = InMemoryReceiptStore::new();
        let mut a = receipt("a@example.com");
        a.receipt_number = "RCP-1-1".to_string();
        let mut b = receipt("b@example.com");
        b.receipt_number = "RCP-1-1".to_string();

        store.insert(a).unwrap();
        let err = store.insert(b).unwrap_err();
        assert_eq!(err.receipt_number, "RCP-1-1");
    }

    #[test]
    fn list_is_newest_first_and_capped() {
        let store = InMemoryReceiptStore::new();
        for i in 0..5 {
            let mut r = receipt("a@example.com");
            r.receipt_number = format!("RCP-{i}-0");
            store.insert(r).unwrap();
        }

        let listed = store.list(None, 3);
        assert_eq!(listed.len(), 3);
        assert_eq!(listed[0].receipt_number, "RCP-4-0");
        assert_eq!(listed[2].receipt_number, "RCP-2-0");
    }

    #[test]
    fn email_filter_matches_exactly() {
        let store = InMemoryReceiptStore::new();
        store.insert(receipt("a@example.com")).unwrap();
        store.insert(receipt("b@example.com")).unwrap();

        assert_eq!(store.list(Some("a@example.com"), 10).len(), 1);
        assert_eq!(store.by_email("b@example.com").len(), 1);
        assert!(store.by_email("c@example.com").is_empty());
    }
}
