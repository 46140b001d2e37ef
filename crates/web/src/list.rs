//! Product list view state: search, pagination, delete confirmation, loading.

use std::time::Duration;

use prodcat_client::{ApiError, ApiResult, DeleteResponse, ProductApi};
use prodcat_core::Entity;
use prodcat_products::{Product, ProductId};

use crate::dialog::ConfirmDialog;

/// Page sizes offered in the selector.
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 20];

pub const DEFAULT_PAGE_SIZE: usize = 5;

/// The loading skeleton stays up at least this long after a successful load.
pub const LOADING_MIN_DISPLAY: Duration = Duration::from_secs(1);

/// Shown when nothing survives the search filter.
pub const EMPTY_STATE_MESSAGE: &str = "No se encontraron productos";

/// Result of a bulk load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Products stored. The caller hides the loading indicator (via
    /// [`ProductListState::finish_loading`]) once `hide_loading_after` elapses.
    Loaded {
        count: usize,
        hide_loading_after: Duration,
    },
    /// Nothing stored; the loading indicator is already cleared.
    Failed(ApiError),
}

/// Result of confirming the delete dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The dialog was not open.
    NothingPending,
    Deleted(ProductId),
    /// Backend refused; list and dialog untouched.
    Failed(ApiError),
}

/// State behind the product list page.
///
/// Filtered and paginated rows are derived on every read, never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductListState {
    products: Vec<Product>,
    search_term: String,
    page_size: usize,
    current_page: usize,
    delete_dialog: ConfirmDialog<Product>,
    loading: bool,
    deleting: bool,
}

impl ProductListState {
    /// Empty list, loading indicator on (the initial fetch is implied).
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            search_term: String::new(),
            page_size: DEFAULT_PAGE_SIZE,
            current_page: 1,
            delete_dialog: ConfirmDialog::new(),
            loading: true,
            deleting: false,
        }
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products,
            loading: false,
            ..Self::new()
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    // --- search & pagination -------------------------------------------------

    /// New search term; back to the first page.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
    }

    /// New page size (at least 1); back to the first page.
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.current_page = 1;
    }

    /// Products whose name or description contains the search term,
    /// ignoring case. Everything when the term is empty.
    pub fn filtered(&self) -> Vec<&Product> {
        let needle = self.search_term.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.matches_search(&needle))
            .collect()
    }

    pub fn total_results(&self) -> usize {
        self.filtered().len()
    }

    /// Number of pages for the filtered set; never less than 1.
    pub fn page_count(&self) -> usize {
        self.total_results().div_ceil(self.page_size).max(1)
    }

    /// Rows of the current page: `(page-1)*size .. page*size` of the filtered set.
    pub fn visible(&self) -> Vec<&Product> {
        let start = (self.current_page - 1) * self.page_size;
        self.filtered()
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .collect()
    }

    /// Jump to `page`, clamped to `1..=page_count`.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.page_count());
    }

    pub fn next_page(&mut self) {
        self.set_page(self.current_page + 1);
    }

    pub fn previous_page(&mut self) {
        self.set_page(self.current_page.saturating_sub(1));
    }

    pub fn empty_state_message(&self) -> Option<&'static str> {
        (self.total_results() == 0).then_some(EMPTY_STATE_MESSAGE)
    }

    // --- bulk load -----------------------------------------------------------

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    pub fn apply_load(&mut self, result: ApiResult<Vec<Product>>) -> LoadOutcome {
        match result {
            Ok(products) => {
                let count = products.len();
                self.products = products;
                self.set_page(self.current_page);
                tracing::info!(count, "products loaded");
                LoadOutcome::Loaded {
                    count,
                    hide_loading_after: LOADING_MIN_DISPLAY,
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load products");
                self.loading = false;
                LoadOutcome::Failed(err)
            }
        }
    }

    pub fn finish_loading(&mut self) {
        self.loading = false;
    }

    /// Fetch every product. On success the loading indicator stays on; the
    /// caller clears it after the returned delay.
    pub async fn load(&mut self, api: &impl ProductApi) -> LoadOutcome {
        self.begin_load();
        let result = api.list_products().await;
        self.apply_load(result)
    }

    // --- delete --------------------------------------------------------------

    /// Open the confirmation dialog for `product`.
    pub fn confirm_delete(&mut self, product: Product) {
        self.delete_dialog.open(product);
    }

    pub fn cancel_delete(&mut self) {
        self.delete_dialog.cancel();
    }

    /// Product the confirmation dialog is asking about.
    pub fn pending_delete(&self) -> Option<&Product> {
        self.delete_dialog.subject()
    }

    /// Mark the pending delete as in flight and hand back the id to send.
    pub fn begin_delete(&mut self) -> Option<ProductId> {
        let id = self.delete_dialog.subject()?.id().clone();
        self.deleting = true;
        Some(id)
    }

    pub fn apply_delete(&mut self, id: &ProductId, result: ApiResult<DeleteResponse>) -> DeleteOutcome {
        self.deleting = false;
        match result {
            Ok(resp) => {
                self.products.retain(|p| p.id() != id);
                if self.delete_dialog.subject().is_some_and(|p| p.id() == id) {
                    self.delete_dialog.cancel();
                }
                self.set_page(self.current_page);
                tracing::info!(%id, message = %resp.message, "product deleted");
                DeleteOutcome::Deleted(id.clone())
            }
            Err(err) => {
                tracing::error!(%id, error = %err, "failed to delete product");
                DeleteOutcome::Failed(err)
            }
        }
    }

    /// Delete whatever the confirmation dialog is asking about.
    pub async fn execute_delete(&mut self, api: &impl ProductApi) -> DeleteOutcome {
        let Some(id) = self.begin_delete() else {
            return DeleteOutcome::NothingPending;
        };
        let result = api.delete_product(&id).await;
        self.apply_delete(&id, result)
    }
}

impl Default for ProductListState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use prodcat_client::{InMemoryProductApi, Operation};
    use prodcat_products::ReleaseSchedule;

    fn product(id: &str, name: &str, description: &str) -> Product {
        Product::new(
            ProductId::parse(id).unwrap(),
            name,
            description,
            "logo.png",
            ReleaseSchedule::from_release(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap()).unwrap(),
        )
    }

    fn catalog(n: usize) -> Vec<Product> {
        (0..n)
            .map(|i| product(&format!("id-{i:03}"), &format!("Producto {i}"), "Cuenta de ahorro"))
            .collect()
    }

    fn ids(rows: &[&Product]) -> Vec<String> {
        rows.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn search_matches_name_or_description_case_insensitively() {
        let mut state = ProductListState::with_products(vec![
            product("tcv", "Tarjeta Visa", "Crédito internacional"),
            product("aho", "Cuenta Ahorro", "Ahorro programado"),
            product("hip", "Hipoteca", "Crédito de VIVIENDA"),
        ]);

        state.set_search_term("CRÉDITO");
        assert_eq!(ids(&state.filtered()), vec!["tcv", "hip"]);

        state.set_search_term("vivienda");
        assert_eq!(ids(&state.filtered()), vec!["hip"]);
    }

    #[test]
    fn empty_term_matches_everything() {
        let mut state = ProductListState::with_products(catalog(3));
        state.set_search_term("");
        assert_eq!(state.total_results(), 3);
        assert_eq!(state.empty_state_message(), None);
    }

    #[test]
    fn unmatched_term_yields_empty_state() {
        let mut state = ProductListState::with_products(catalog(3));
        state.set_search_term("no existe");

        assert!(state.filtered().is_empty());
        assert!(state.visible().is_empty());
        assert_eq!(state.empty_state_message(), Some(EMPTY_STATE_MESSAGE));
    }

    #[test]
    fn searching_resets_to_first_page() {
        let mut state = ProductListState::with_products(catalog(12));
        state.set_page(3);
        assert_eq!(state.current_page(), 3);

        state.set_search_term("producto");
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn page_size_change_resets_page_and_limits_rows() {
        let mut state = ProductListState::with_products(catalog(7));
        state.next_page();
        assert_eq!(state.current_page(), 2);

        state.set_page_size(10);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.visible().len(), 7);

        state.set_page_size(5);
        assert_eq!(state.visible().len(), 5);
    }

    #[test]
    fn pages_slice_the_filtered_set() {
        let mut state = ProductListState::with_products(catalog(12));
        assert_eq!(state.page_count(), 3);

        state.set_page(3);
        assert_eq!(ids(&state.visible()), vec!["id-010", "id-011"]);

        state.previous_page();
        assert_eq!(ids(&state.visible()).first().map(String::as_str), Some("id-005"));
    }

    #[test]
    fn page_navigation_is_clamped() {
        let mut state = ProductListState::with_products(catalog(4));
        state.set_page(99);
        assert_eq!(state.current_page(), 1);
        state.previous_page();
        assert_eq!(state.current_page(), 1);

        state.set_page_size(0);
        assert_eq!(state.page_size(), 1);
    }

    #[test]
    fn empty_catalog_still_has_one_page() {
        let state = ProductListState::with_products(Vec::new());
        assert_eq!(state.page_count(), 1);
        assert!(state.visible().is_empty());
    }

    #[tokio::test]
    async fn load_stores_products_and_keeps_indicator_for_min_delay() {
        let api = InMemoryProductApi::with_products(catalog(2));
        let mut state = ProductListState::new();
        assert!(state.is_loading());

        let outcome = state.load(&api).await;

        assert_eq!(
            outcome,
            LoadOutcome::Loaded {
                count: 2,
                hide_loading_after: LOADING_MIN_DISPLAY
            }
        );
        assert_eq!(state.products().len(), 2);
        assert!(state.is_loading());

        state.finish_loading();
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn failed_load_clears_indicator_immediately() {
        let api = InMemoryProductApi::new();
        api.fail(Operation::List);
        let mut state = ProductListState::new();

        let outcome = state.load(&api).await;

        assert!(matches!(outcome, LoadOutcome::Failed(_)));
        assert!(!state.is_loading());
        assert!(state.products().is_empty());
    }

    #[test]
    fn confirm_and_cancel_delete() {
        let mut state = ProductListState::with_products(catalog(2));
        let target = state.products()[1].clone();

        state.confirm_delete(target.clone());
        assert_eq!(state.pending_delete(), Some(&target));

        state.cancel_delete();
        assert_eq!(state.pending_delete(), None);
        assert_eq!(state.products().len(), 2);
    }

    #[tokio::test]
    async fn delete_success_removes_row_and_clears_confirmation() {
        let products = catalog(3);
        let api = InMemoryProductApi::with_products(products.clone());
        let mut state = ProductListState::with_products(products.clone());

        state.confirm_delete(products[1].clone());
        let outcome = state.execute_delete(&api).await;

        assert_eq!(outcome, DeleteOutcome::Deleted(products[1].id.clone()));
        assert_eq!(ids(&state.visible()), vec!["id-000", "id-002"]);
        assert_eq!(state.pending_delete(), None);
        assert!(!state.is_deleting());
        assert_eq!(api.products().len(), 2);
    }

    #[tokio::test]
    async fn delete_failure_leaves_list_unchanged() {
        let products = catalog(3);
        let api = InMemoryProductApi::with_products(products.clone());
        api.fail(Operation::Delete);
        let mut state = ProductListState::with_products(products.clone());

        state.confirm_delete(products[0].clone());
        let outcome = state.execute_delete(&api).await;

        assert!(matches!(outcome, DeleteOutcome::Failed(_)));
        assert_eq!(state.products(), products.as_slice());
        assert_eq!(state.pending_delete(), Some(&products[0]));
        assert!(!state.is_deleting());
    }

    #[tokio::test]
    async fn confirming_without_pending_product_is_a_no_op() {
        let api = InMemoryProductApi::with_products(catalog(1));
        let mut state = ProductListState::with_products(catalog(1));

        assert_eq!(state.execute_delete(&api).await, DeleteOutcome::NothingPending);
        assert_eq!(api.calls(Operation::Delete), 0);
    }

    #[tokio::test]
    async fn deleting_last_row_of_last_page_steps_back() {
        let products = catalog(6);
        let api = InMemoryProductApi::with_products(products.clone());
        let mut state = ProductListState::with_products(products.clone());
        state.set_page(2);

        state.confirm_delete(products[5].clone());
        state.execute_delete(&api).await;

        assert_eq!(state.current_page(), 1);
        assert_eq!(state.visible().len(), 5);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: after a page-size change, page 1 shows min(size, filtered).
            #[test]
            fn visible_rows_after_page_size_change(
                n in 0usize..40,
                size in prop::sample::select(PAGE_SIZE_OPTIONS.to_vec()),
                start_page in 1usize..5,
            ) {
                let mut state = ProductListState::with_products(catalog(n));
                state.set_page(start_page);
                state.set_page_size(size);

                prop_assert_eq!(state.current_page(), 1);
                prop_assert_eq!(state.visible().len(), size.min(state.total_results()));
            }
        }
    }
}
