//! `vibe-cart` — session-scoped shopping carts.
//!
//! One line item per `(session, product)` pair; repeated adds merge into
//! the existing line. Totals are computed on read, never stored.

pub mod line_item;
pub mod service;
pub mod store;
pub mod summary;

pub use line_item::CartLineItem;
pub use service::{AddOutcome, CartService};
pub use store::{CartStore, DuplicateLineItem, InMemoryCartStore};
pub use summary::CartSummary;
