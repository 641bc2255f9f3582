//! Service wiring shared by every handler.

use std::sync::Arc;

use vibe_cart::{CartService, CartStore, InMemoryCartStore};
use vibe_catalog::{CatalogApi, HttpCatalog};
use vibe_checkout::{CheckoutService, InMemoryReceiptStore, ReceiptStore};

/// Default upstream catalog when `CATALOG_BASE_URL` is unset.
pub const DEFAULT_CATALOG_BASE_URL: &str = "https://fakestoreapi.com";

/// The application's use-case services, injected into handlers via
/// `Extension<Arc<AppServices>>`.
pub struct AppServices {
    pub catalog: Arc<dyn CatalogApi>,
    pub cart: CartService,
    pub checkout: CheckoutService,
}

impl AppServices {
    /// Wire services over explicit stores and catalog. Tests use this
    /// with in-memory fixtures; production goes through [`from_env`].
    ///
    /// [`from_env`]: AppServices::from_env
    pub fn new(
        catalog: Arc<dyn CatalogApi>,
        cart_store: Arc<dyn CartStore>,
        receipt_store: Arc<dyn ReceiptStore>,
    ) -> Self {
        let cart = CartService::new(catalog.clone(), cart_store.clone());
        let checkout = CheckoutService::new(receipt_store, cart_store);
        Self {
            catalog,
            cart,
            checkout,
        }
    }

    /// Production wiring: HTTP catalog client plus in-memory stores.
    pub fn from_env() -> Self {
        let base_url = std::env::var("CATALOG_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_CATALOG_BASE_URL.to_string());
        tracing::info!(catalog = %base_url, "wiring services");

        Self::new(
            Arc::new(HttpCatalog::new(base_url)),
            Arc::new(InMemoryCartStore::new()),
            Arc::new(InMemoryReceiptStore::new()),
        )
    }
}
