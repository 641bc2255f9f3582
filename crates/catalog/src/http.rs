//! reqwest-backed catalog client.

use crate::error::CatalogError;
use crate::gateway::{CatalogApi, SortOrder};
use crate::product::CatalogProduct;

use async_trait::async_trait;

/// HTTP client for a FakeStore-compatible catalog API.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// One GET round-trip with the shared status mapping: connection
    /// failures and non-404 error statuses become `Upstream`, a 404
    /// becomes `NotFound` with the caller's message. Body handling is
    /// left to the caller.
    async fn send_checked(
        &self,
        url: &str,
        not_found_msg: &str,
    ) -> Result<reqwest::Response, CatalogError> {
        let resp = self.client.get(url).send().await.map_err(|e| {
            tracing::warn!(url = %url, error = %e, "catalog request failed");
            CatalogError::Upstream("Failed to reach product catalog".to_string())
        })?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(not_found_msg.to_string()));
        }
        if !status.is_success() {
            tracing::warn!(url = %url, status = %status, "catalog returned error status");
            return Err(CatalogError::Upstream(
                "Failed to fetch products from external API".to_string(),
            ));
        }
        Ok(resp)
    }

    /// GET + parse for the list endpoints; a body that does not parse is
    /// an upstream failure, not a missing resource.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: String,
        not_found_msg: &str,
    ) -> Result<T, CatalogError> {
        let resp = self.send_checked(&url, not_found_msg).await?;
        resp.json::<T>().await.map_err(|e| {
            tracing::warn!(url = %url, error = %e, "catalog response did not parse");
            CatalogError::Upstream(
                "Failed to fetch products from external API".to_string(),
            )
        })
    }
}

#[async_trait]
impl CatalogApi for HttpCatalog {
    async fn list_products(
        &self,
        limit: u32,
        sort: SortOrder,
    ) -> Result<Vec<CatalogProduct>, CatalogError> {
        let url = format!(
            "{}/products?limit={}&sort={}",
            self.base_url,
            limit,
            sort.as_str()
        );
        let products: Vec<CatalogProduct> =
            self.get_json(url, "No products found").await?;
        if products.is_empty() {
            return Err(CatalogError::NotFound("No products found".to_string()));
        }
        Ok(products)
    }

    async fn product(&self, id: u64) -> Result<CatalogProduct, CatalogError> {
        let url = format!("{}/products/{}", self.base_url, id);
        let msg = format!("Product with ID {id} not found");
        let resp = self.send_checked(&url, &msg).await?;
        // The upstream answers 200 with an empty body for unknown ids, so
        // only here does a parse failure mean "no such product".
        resp.json::<CatalogProduct>()
            .await
            .map_err(|_| CatalogError::NotFound(msg))
    }

    async fn products_in_category(
        &self,
        category: &str,
    ) -> Result<Vec<CatalogProduct>, CatalogError> {
        let url = format!("{}/products/category/{}", self.base_url, category);
        let msg = format!("No products found in category: {category}");
        let products: Vec<CatalogProduct> = self.get_json(url, &msg).await?;
        if products.is_empty() {
            return Err(CatalogError::NotFound(msg));
        }
        Ok(products)
    }

    async fn categories(&self) -> Result<Vec<String>, CatalogError> {
        let url = format!("{}/products/categories", self.base_url);
        self.get_json(url, "No categories found").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let catalog = HttpCatalog::new("https://fakestoreapi.com/");
        assert_eq!(catalog.base_url, "https://fakestoreapi.com");
    }

    /// Minimal loopback server answering every request with the same
    /// canned 200 body.
    async fn stub_upstream(body: &'static str) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            loop {
                let (mut sock, _) = match listener.accept().await {
                    Ok(conn) => conn,
                    Err(_) => return,
                };
                let mut buf = [0u8; 2048];
                let _ = sock.read(&mut buf).await;
                let resp = format!(
                    "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = sock.write_all(resp.as_bytes()).await;
            }
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn garbled_list_body_is_an_upstream_failure() {
        let base = stub_upstream("<html>maintenance</html>").await;
        let catalog = HttpCatalog::new(base);

        let err = catalog.list_products(10, SortOrder::Asc).await.unwrap_err();
        assert!(matches!(err, CatalogError::Upstream(_)));

        let err = catalog.categories().await.unwrap_err();
        assert!(matches!(err, CatalogError::Upstream(_)));
    }

    #[tokio::test]
    async fn empty_product_body_is_not_found() {
        let base = stub_upstream("").await;
        let catalog = HttpCatalog::new(base);

        let err = catalog.product(9999).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(msg) if msg.contains("9999")));
    }
}
