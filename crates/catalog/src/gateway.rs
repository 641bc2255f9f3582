//! The catalog trait seam.

use core::str::FromStr;

use async_trait::async_trait;

use crate::error::CatalogError;
use crate::product::CatalogProduct;

/// Listing order for catalog queries (the upstream sorts by product id).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = ();

    /// Unknown values fall back to ascending, matching the upstream's
    /// tolerance for a garbage `sort` query parameter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "desc" => Ok(SortOrder::Desc),
            _ => Ok(SortOrder::Asc),
        }
    }
}

/// Read access to the external product catalog.
///
/// Implemented by [`crate::HttpCatalog`] for production and
/// [`crate::InMemoryCatalog`] for tests.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// List up to `limit` products in the given order.
    async fn list_products(
        &self,
        limit: u32,
        sort: SortOrder,
    ) -> Result<Vec<CatalogProduct>, CatalogError>;

    /// Fetch a single product by upstream id.
    async fn product(&self, id: u64) -> Result<CatalogProduct, CatalogError>;

    /// List all products in a category.
    async fn products_in_category(
        &self,
        category: &str,
    ) -> Result<Vec<CatalogProduct>, CatalogError>;

    /// List all known category names.
    async fn categories(&self) -> Result<Vec<String>, CatalogError>;
}

#[async_trait]
impl<T> CatalogApi for std::sync::Arc<T>
where
    T: CatalogApi + ?Sized,
{
    async fn list_products(
        &self,
        limit: u32,
        sort: SortOrder,
    ) -> Result<Vec<CatalogProduct>, CatalogError> {
        (**self).list_products(limit, sort).await
    }

    async fn product(&self, id: u64) -> Result<CatalogProduct, CatalogError> {
        (**self).product(id).await
    }

    async fn products_in_category(
        &self,
        category: &str,
    ) -> Result<Vec<CatalogProduct>, CatalogError> {
        (**self).products_in_category(category).await
    }

    async fn categories(&self) -> Result<Vec<String>, CatalogError> {
        (**self).categories().await
    }
}
