//! `prodcat-web`
//!
//! **Responsibility:** the product catalog front-end.
//!
//! The view state lives in plain structs so it can be driven and tested
//! without a browser:
//! - [`ProductListState`]: search, pagination, delete flow, loading indicator
//! - [`ProductFormState`]: edit buffer, validation, review date, id check, submit
//! - [`ConfirmDialog`] and [`ActionsMenu`]: small reusable overlays
//!
//! On wasm32 the `frontend` module wraps them in a Leptos app.

pub mod dialog;
pub mod form;
pub mod list;
pub mod menu;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use dialog::ConfirmDialog;
pub use form::{
    FormErrors, FormMode, IdCheckStatus, ProductDraft, ProductFormState, SubmitError,
    SubmitRequest,
};
pub use list::{DeleteOutcome, LoadOutcome, ProductListState};
pub use menu::{ActionsMenu, MenuAction};
