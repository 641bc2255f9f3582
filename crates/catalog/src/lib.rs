//! `vibe-catalog` — gateway to the external product catalog.
//!
//! The catalog is a read-only third-party HTTP API; this crate owns the
//! outbound client plus the trait seam the rest of the system codes
//! against, so tests can swap in a fixture catalog.

pub mod error;
pub mod gateway;
pub mod http;
pub mod in_memory;
pub mod product;

pub use error::CatalogError;
pub use gateway::{CatalogApi, SortOrder};
pub use http::HttpCatalog;
pub use in_memory::InMemoryCatalog;
pub use product::{CatalogProduct, ProductRating};
