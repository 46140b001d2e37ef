//! Backend failures must surface as ERROR events, not just as return values.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::NaiveDate;
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{Layer, Registry};

use prodcat_client::{InMemoryProductApi, Operation};
use prodcat_products::{Product, ProductId, ReleaseSchedule};
use prodcat_web::{DeleteOutcome, LoadOutcome, ProductFormState, ProductListState, SubmitError};

/// Counts ERROR events seen by the thread-local subscriber.
#[derive(Clone, Default)]
struct ErrorCounter(Arc<AtomicUsize>);

impl ErrorCounter {
    fn install(&self) -> DefaultGuard {
        tracing::subscriber::set_default(Registry::default().with(self.clone()))
    }

    fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for ErrorCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn product(id: &str) -> Product {
    Product::new(
        ProductId::parse(id).unwrap(),
        "Cuenta de ahorro",
        "Cuenta de ahorro con rendimiento mensual",
        "ahorro.png",
        ReleaseSchedule::from_release(ymd(2030, 1, 1)).unwrap(),
    )
}

#[tokio::test]
async fn failed_delete_logs_one_error() {
    let errors = ErrorCounter::default();
    let _guard = errors.install();

    let products = vec![product("aho"), product("tcv")];
    let api = InMemoryProductApi::with_products(products.clone());
    api.fail(Operation::Delete);
    let mut state = ProductListState::with_products(products.clone());

    state.confirm_delete(products[0].clone());
    let outcome = state.execute_delete(&api).await;

    assert!(matches!(outcome, DeleteOutcome::Failed(_)));
    assert_eq!(state.products(), products.as_slice());
    assert_eq!(errors.count(), 1);
}

#[tokio::test]
async fn successful_delete_logs_no_error() {
    let errors = ErrorCounter::default();
    let _guard = errors.install();

    let products = vec![product("aho")];
    let api = InMemoryProductApi::with_products(products.clone());
    let mut state = ProductListState::with_products(products.clone());

    state.confirm_delete(products[0].clone());
    let outcome = state.execute_delete(&api).await;

    assert!(matches!(outcome, DeleteOutcome::Deleted(_)));
    assert_eq!(errors.count(), 0);
}

#[tokio::test]
async fn failed_submit_logs_one_error() {
    let errors = ErrorCounter::default();
    let _guard = errors.install();

    let api = InMemoryProductApi::new();
    api.fail(Operation::Create);
    let mut form = ProductFormState::new_create();
    form.set_id("nuevo");
    form.set_name("Producto nuevo");
    form.set_description("Descripción suficientemente larga");
    form.set_logo("nuevo.png");
    form.set_date_release("2025-01-01");

    let err = form.submit(&api, ymd(2025, 1, 1)).await.unwrap_err();

    assert!(matches!(err, SubmitError::Api(_)));
    assert!(api.products().is_empty());
    assert_eq!(errors.count(), 1);
}

#[tokio::test]
async fn failed_load_logs_one_error() {
    let errors = ErrorCounter::default();
    let _guard = errors.install();

    let api = InMemoryProductApi::new();
    api.fail(Operation::List);
    let mut state = ProductListState::new();

    let outcome = state.load(&api).await;

    assert!(matches!(outcome, LoadOutcome::Failed(_)));
    assert!(!state.is_loading());
    assert_eq!(errors.count(), 1);
}
