//! In-memory catalog for tests/dev.

use async_trait::async_trait;

use crate::error::CatalogError;
use crate::gateway::{CatalogApi, SortOrder};
use crate::product::CatalogProduct;

/// Fixture catalog serving a fixed product list, with the same
/// empty-result and missing-id behavior as the real upstream.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    products: Vec<CatalogProduct>,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<CatalogProduct>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl CatalogApi for InMemoryCatalog {
    async fn list_products(
        &self,
        limit: u32,
        sort: SortOrder,
    ) -> Result<Vec<CatalogProduct>, CatalogError> {
        let mut products = self.products.clone();
        products.sort_by_key(|p| p.id);
        if sort == SortOrder::Desc {
            products.reverse();
        }
        products.truncate(limit as usize);
        if products.is_empty() {
            return Err(CatalogError::NotFound("No products found".to_string()));
        }
        Ok(products)
    }

    async fn product(&self, id: u64) -> Result<CatalogProduct, CatalogError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(format!("Product with ID {id} not found")))
    }

    async fn products_in_category(
        &self,
        category: &str,
    ) -> Result<Vec<CatalogProduct>, CatalogError> {
        let products: Vec<CatalogProduct> = self
            .products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect();
        if products.is_empty() {
            return Err(CatalogError::NotFound(format!(
                "No products found in category: {category}"
            )));
        }
        Ok(products)
    }

    async fn categories(&self) -> Result<Vec<String>, CatalogError> {
        let mut categories: Vec<String> =
            self.products.iter().map(|p| p.category.clone()).collect();
        categories.sort();
        categories.dedup();
        Ok(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> InMemoryCatalog {
        InMemoryCatalog::new(vec![
            CatalogProduct {
                id: 2,
                title: "Mug".to_string(),
                price: 5.50,
                description: String::new(),
                category: "kitchen".to_string(),
                image: "https://img.example/mug.png".to_string(),
                rating: None,
            },
            CatalogProduct {
                id: 1,
                title: "Shirt".to_string(),
                price: 10.00,
                description: String::new(),
                category: "clothing".to_string(),
                image: "https://img.example/shirt.png".to_string(),
                rating: None,
            },
        ])
    }

    #[tokio::test]
    async fn list_sorts_by_id_and_respects_limit() {
        let catalog = fixture();
        let asc = catalog.list_products(10, SortOrder::Asc).await.unwrap();
        assert_eq!(asc.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);

        let desc = catalog.list_products(1, SortOrder::Desc).await.unwrap();
        assert_eq!(desc.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2]);
    }

    #[tokio::test]
    async fn missing_product_is_not_found() {
        let err = fixture().product(99).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[tokio::test]
    async fn empty_category_is_not_found() {
        let err = fixture().products_in_category("toys").await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(msg) if msg.contains("toys")));
    }

    #[tokio::test]
    async fn categories_are_deduplicated() {
        let cats = fixture().categories().await.unwrap();
        assert_eq!(cats, vec!["clothing".to_string(), "kitchen".to_string()]);
    }
}
