use serde::Serialize;

use vibe_core::round2;

use crate::line_item::CartLineItem;

/// Tax rate applied at cart summary and checkout time.
pub const TAX_RATE: f64 = 0.10;

/// Totals computed on every cart read; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CartSummary {
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

impl CartSummary {
    pub fn of(items: &[CartLineItem]) -> Self {
        // Round subtotal and tax first so the reported figures always
        // reconcile: total is the sum of what the client actually sees.
        let subtotal = round2(items.iter().map(|i| i.subtotal).sum());
        let tax = round2(subtotal * TAX_RATE);
        let total = round2(subtotal + tax);
        Self { subtotal, tax, total }
    }

    pub fn empty() -> Self {
        Self {
            subtotal: 0.0,
            tax: 0.0,
            total: 0.0,
        }
    }
}
