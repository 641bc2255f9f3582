//! `vibe-checkout` — checkout processing and the receipt store.
//!
//! Checkout is a mock record-creation step: validate contact info and the
//! item list, compute totals, persist an immutable receipt, clear carts.
//! Receipts are append-only and never mutated by the application.

pub mod receipt;
pub mod service;
pub mod store;

pub use receipt::{OrderItem, Receipt, ReceiptItem, ReceiptStatus};
pub use service::CheckoutService;
pub use store::{DuplicateReceiptNumber, InMemoryReceiptStore, ReceiptStore};
