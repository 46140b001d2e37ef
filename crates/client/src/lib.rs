//! `prodcat-client`
//!
//! **Responsibility:** talk to the products REST API.
//!
//! - [`ProductApi`]: the five calls the front-end needs
//! - [`HttpProductApi`]: reqwest-backed implementation (native and wasm32)
//! - [`InMemoryProductApi`]: tests/dev double with failure injection
//!
//! No retries, no caching, no timeouts beyond the HTTP client's defaults.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod in_memory;

pub use api::{DeleteResponse, ProductApi, ProductList, ProductMutation};
pub use config::{API_URL_ENV, ClientConfig, DEFAULT_API_URL};
pub use error::{ApiError, ApiResult};
pub use http::HttpProductApi;
pub use in_memory::{InMemoryProductApi, Operation};
