//! Checkout processing and receipt queries.

use std::sync::Arc;

use vibe_cart::CartStore;
use vibe_core::{DomainError, DomainResult, Email};

use crate::receipt::{OrderItem, Receipt};
use crate::store::ReceiptStore;

/// Default cap for receipt listings.
pub const DEFAULT_RECEIPT_LIMIT: usize = 10;

#[derive(Clone)]
pub struct CheckoutService {
    receipts: Arc<dyn ReceiptStore>,
    carts: Arc<dyn CartStore>,
}

impl CheckoutService {
    pub fn new(receipts: Arc<dyn ReceiptStore>, carts: Arc<dyn CartStore>) -> Self {
        Self { receipts, carts }
    }

    /// Validate the order, persist an immutable receipt, clear carts.
    ///
    /// Cart clearing is deliberately global (every session), reproducing
    /// the system's documented checkout behavior.
    pub fn process_checkout(
        &self,
        name: &str,
        email: &str,
        order: Vec<OrderItem>,
    ) -> DomainResult<Receipt> {
        let name = name.trim();
        if name.is_empty() || email.trim().is_empty() {
            return Err(DomainError::validation("Name and email are required"));
        }
        let email = Email::parse(email)?;

        if order.is_empty() {
            return Err(DomainError::validation(
                "Cart is empty. Please add items before checkout.",
            ));
        }

        let receipt = Receipt::create(name.to_string(), email, order);
        self.receipts.insert(receipt.clone()).map_err(|dup| {
            tracing::warn!(receipt_number = %dup.receipt_number, "receipt number collision");
            DomainError::conflict("Receipt number already exists, please retry checkout")
        })?;

        self.carts.clear_all();
        tracing::info!(receipt_number = %receipt.receipt_number, total = receipt.total, "checkout completed");

        Ok(receipt)
    }

    /// Order history, newest first, optionally filtered by email.
    pub fn receipts(&self, email: Option<&str>, limit: Option<usize>) -> Vec<Receipt> {
        let limit = limit.unwrap_or(DEFAULT_RECEIPT_LIMIT);
        let email = email.map(str::to_lowercase);
        self.receipts.list(email.as_deref(), limit)
    }

    /// Exact lookup by receipt number.
    pub fn receipt_by_number(&self, receipt_number: &str) -> DomainResult<Receipt> {
        self.receipts
            .by_number(receipt_number)
            .ok_or_else(|| DomainError::not_found("Receipt not found"))
    }

    /// All receipts for an email, newest first. Zero matches is NotFound,
    /// not an empty list - that is the documented contract.
    pub fn receipts_by_email(&self, email: &str) -> DomainResult<Vec<Receipt>> {
        let receipts = self.receipts.by_email(&email.to_lowercase());
        if receipts.is_empty() {
            return Err(DomainError::not_found("No receipts found for this email"));
        }
        Ok(receipts)
    }
}
