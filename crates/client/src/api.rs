//! The products API surface consumed by the front-end.

use std::future::Future;

use serde::{Deserialize, Serialize};

use prodcat_products::{Product, ProductId};

use crate::error::ApiResult;

/// `GET /products` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductList {
    pub data: Vec<Product>,
}

/// `POST /products` and `PUT /products/:id` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductMutation {
    pub message: String,
    pub data: Product,
}

/// `DELETE /products/:id` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// Products backend.
///
/// Futures are not required to be `Send`: in the browser they run on the
/// single-threaded event loop.
pub trait ProductApi {
    /// `GET /products`
    fn list_products(&self) -> impl Future<Output = ApiResult<Vec<Product>>>;

    /// `GET /products/verification/:id`: `true` when the id is taken.
    fn verify_id(&self, id: &ProductId) -> impl Future<Output = ApiResult<bool>>;

    /// `POST /products`
    fn create_product(&self, product: &Product) -> impl Future<Output = ApiResult<ProductMutation>>;

    /// `PUT /products/:id`, id taken from `product`.
    fn update_product(&self, product: &Product) -> impl Future<Output = ApiResult<ProductMutation>>;

    /// `DELETE /products/:id`
    fn delete_product(&self, id: &ProductId) -> impl Future<Output = ApiResult<DeleteResponse>>;
}
