//! In-memory products backend for tests/dev.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use prodcat_core::Entity;
use prodcat_products::{Product, ProductId};

use crate::api::{DeleteResponse, ProductApi, ProductMutation};
use crate::error::{ApiError, ApiResult};

/// One kind of backend call, for failure injection and call counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Verify,
    Create,
    Update,
    Delete,
}

#[derive(Debug, Default)]
struct State {
    products: Vec<Product>,
    failing: HashSet<Operation>,
    calls: HashMap<Operation, usize>,
}

/// Products backend held in memory.
///
/// Mirrors the real backend's status codes (400 on duplicate create, 404 on
/// unknown id). Clones share state, so a test can keep a handle while the
/// code under test owns another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductApi {
    state: Arc<Mutex<State>>,
}

impl InMemoryProductApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let api = Self::new();
        if let Ok(mut state) = api.state.lock() {
            state.products = products.into_iter().collect();
        }
        api
    }

    /// Make every subsequent `op` call fail until [`recover`](Self::recover).
    pub fn fail(&self, op: Operation) {
        if let Ok(mut state) = self.state.lock() {
            state.failing.insert(op);
        }
    }

    pub fn recover(&self, op: Operation) {
        if let Ok(mut state) = self.state.lock() {
            state.failing.remove(&op);
        }
    }

    /// Snapshot of the stored products.
    pub fn products(&self) -> Vec<Product> {
        self.state
            .lock()
            .map(|s| s.products.clone())
            .unwrap_or_default()
    }

    /// How many times `op` was called (including injected failures).
    pub fn calls(&self, op: Operation) -> usize {
        self.state
            .lock()
            .map(|s| s.calls.get(&op).copied().unwrap_or(0))
            .unwrap_or(0)
    }

    fn begin(&self, op: Operation) -> ApiResult<MutexGuard<'_, State>> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| ApiError::Unavailable("lock poisoned".to_string()))?;

        *state.calls.entry(op).or_default() += 1;

        if state.failing.contains(&op) {
            return Err(ApiError::Unavailable(format!("{op:?} failure injected")));
        }
        Ok(state)
    }
}

impl State {
    fn position(&self, id: &ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id() == id)
    }
}

impl ProductApi for InMemoryProductApi {
    async fn list_products(&self) -> ApiResult<Vec<Product>> {
        let state = self.begin(Operation::List)?;
        Ok(state.products.clone())
    }

    async fn verify_id(&self, id: &ProductId) -> ApiResult<bool> {
        let state = self.begin(Operation::Verify)?;
        Ok(state.position(id).is_some())
    }

    async fn create_product(&self, product: &Product) -> ApiResult<ProductMutation> {
        let mut state = self.begin(Operation::Create)?;
        if state.position(&product.id).is_some() {
            return Err(ApiError::api(
                400,
                format!("Duplicate identifier found in the database: {}", product.id),
            ));
        }

        state.products.push(product.clone());
        Ok(ProductMutation {
            message: "Product added successfully".to_string(),
            data: product.clone(),
        })
    }

    async fn update_product(&self, product: &Product) -> ApiResult<ProductMutation> {
        let mut state = self.begin(Operation::Update)?;
        let idx = state
            .position(&product.id)
            .ok_or_else(|| ApiError::api(404, "Not product found with that identifier"))?;

        state.products[idx] = product.clone();
        Ok(ProductMutation {
            message: "Product updated successfully".to_string(),
            data: product.clone(),
        })
    }

    async fn delete_product(&self, id: &ProductId) -> ApiResult<DeleteResponse> {
        let mut state = self.begin(Operation::Delete)?;
        let idx = state
            .position(id)
            .ok_or_else(|| ApiError::api(404, "Not product found with that identifier"))?;

        state.products.remove(idx);
        Ok(DeleteResponse {
            message: "Product removed successfully".to_string(),
        })
    }
}
