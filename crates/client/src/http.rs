//! reqwest-backed products API client.

use reqwest::{Response, Url};
use serde::de::DeserializeOwned;

use prodcat_products::{Product, ProductId};

use crate::api::{DeleteResponse, ProductApi, ProductList, ProductMutation};
use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};

/// HTTP client for the products API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpProductApi {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpProductApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: &ClientConfig) -> Self {
        Self {
            client,
            base_url: config.base_url().clone(),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL with `segments` appended, each percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn read<T: DeserializeOwned>(resp: Response) -> ApiResult<T> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::api(status.as_u16(), body));
        }

        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

fn network(e: reqwest::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

impl ProductApi for HttpProductApi {
    async fn list_products(&self) -> ApiResult<Vec<Product>> {
        let url = self.endpoint(&["products"]);
        tracing::debug!(%url, "listing products");

        let resp = self.client.get(url).send().await.map_err(network)?;
        let list: ProductList = Self::read(resp).await?;
        Ok(list.data)
    }

    async fn verify_id(&self, id: &ProductId) -> ApiResult<bool> {
        let url = self.endpoint(&["products", "verification", id.as_str()]);
        tracing::debug!(%url, "verifying product id");

        let resp = self.client.get(url).send().await.map_err(network)?;
        Self::read(resp).await
    }

    async fn create_product(&self, product: &Product) -> ApiResult<ProductMutation> {
        let url = self.endpoint(&["products"]);
        tracing::debug!(%url, id = %product.id, "creating product");

        let resp = self
            .client
            .post(url)
            .json(product)
            .send()
            .await
            .map_err(network)?;
        Self::read(resp).await
    }

    async fn update_product(&self, product: &Product) -> ApiResult<ProductMutation> {
        let url = self.endpoint(&["products", product.id.as_str()]);
        tracing::debug!(%url, id = %product.id, "updating product");

        let resp = self
            .client
            .put(url)
            .json(product)
            .send()
            .await
            .map_err(network)?;
        Self::read(resp).await
    }

    async fn delete_product(&self, id: &ProductId) -> ApiResult<DeleteResponse> {
        let url = self.endpoint(&["products", id.as_str()]);
        tracing::debug!(%url, "deleting product");

        let resp = self.client.delete(url).send().await.map_err(network)?;
        Self::read(resp).await
    }
}
