//! Product form state: edit buffer, validation, review date, id check, submit.
//!
//! Async work is split into `begin_*` / `apply_*` pairs so a UI can await the
//! API call without holding a borrow of the state. The `async fn` wrappers
//! compose the pair for everyone else.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use thiserror::Error;

use prodcat_client::{ApiError, ApiResult, ProductApi, ProductMutation};
use prodcat_core::{Entity, Field, FieldError, FieldResult, format_date, parse_wire_date};
use prodcat_products::{
    Product, ProductId, ReleaseSchedule, validate_description, validate_id, validate_logo,
    validate_name, validate_release_date, validate_revision_date,
};

pub const CREATE_TITLE: &str = "Formulario de Registro";
pub const EDIT_TITLE: &str = "Formulario de Edición";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    /// Editing an existing product; its id cannot change.
    Edit(ProductId),
}

/// Raw text of every form control, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub id: String,
    pub name: String,
    pub description: String,
    pub logo: String,
    pub date_release: String,
    pub date_revision: String,
}

impl ProductDraft {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            logo: product.logo.clone(),
            date_release: format_date(product.date_release),
            date_revision: format_date(product.date_revision),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Id => &self.id,
            Field::Name => &self.name,
            Field::Description => &self.description,
            Field::Logo => &self.logo,
            Field::DateRelease => &self.date_release,
            Field::DateRevision => &self.date_revision,
        }
    }
}

/// Where the identifier uniqueness check stands for the current id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdCheckStatus {
    /// Not run for the current value (or not applicable: edit mode).
    Unchecked,
    Pending,
    Available,
    Taken,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum IdCheck {
    Unchecked,
    Pending(String),
    Checked { id: String, exists: bool },
}

/// Per-field validation failures, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<Field, FieldError>);

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.0.iter().map(|(f, e)| (*f, *e))
    }

    fn single(field: Field, err: FieldError) -> Self {
        let mut errors = Self::default();
        errors.0.insert(field, err);
        errors
    }
}

impl core::fmt::Display for FormErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, (field, err)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {err}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// Nothing was sent.
    #[error("form is invalid: {0}")]
    Invalid(FormErrors),

    /// A previous submit is still waiting for the backend.
    #[error("a submission is already in progress")]
    InFlight,

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// A validated product, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRequest {
    Create(Product),
    Update(Product),
}

impl SubmitRequest {
    pub fn product(&self) -> &Product {
        match self {
            SubmitRequest::Create(p) | SubmitRequest::Update(p) => p,
        }
    }

    pub async fn send(&self, api: &impl ProductApi) -> ApiResult<ProductMutation> {
        match self {
            SubmitRequest::Create(p) => api.create_product(p).await,
            SubmitRequest::Update(p) => api.update_product(p).await,
        }
    }
}

/// State behind the create/edit product page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFormState {
    mode: FormMode,
    draft: ProductDraft,
    id_check: IdCheck,
    submitting: bool,
}

impl ProductFormState {
    pub fn new_create() -> Self {
        Self {
            mode: FormMode::Create,
            draft: ProductDraft::default(),
            id_check: IdCheck::Unchecked,
            submitting: false,
        }
    }

    /// Edit form for `id`; fields stay empty until [`load`](Self::load).
    pub fn new_edit(id: ProductId) -> Self {
        let draft = ProductDraft {
            id: id.to_string(),
            ..ProductDraft::default()
        };
        Self {
            mode: FormMode::Edit(id),
            draft,
            id_check: IdCheck::Unchecked,
            submitting: false,
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit() { EDIT_TITLE } else { CREATE_TITLE }
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    // --- field edits ---------------------------------------------------------

    /// Ignored in edit mode. Invalidates any previous id check.
    pub fn set_id(&mut self, value: impl Into<String>) {
        if self.is_edit() {
            return;
        }
        self.draft.id = value.into();
        self.id_check = IdCheck::Unchecked;
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.draft.name = value.into();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.draft.description = value.into();
    }

    pub fn set_logo(&mut self, value: impl Into<String>) {
        self.draft.logo = value.into();
    }

    /// Store the release date and re-derive the review date from it.
    ///
    /// A cleared or unparseable release date leaves the review date as is.
    pub fn set_date_release(&mut self, value: impl Into<String>) {
        self.draft.date_release = value.into();
        if let Some(schedule) =
            parse_wire_date(&self.draft.date_release).and_then(ReleaseSchedule::from_release)
        {
            self.draft.date_revision = format_date(schedule.revision());
        }
    }

    // --- validation ----------------------------------------------------------

    pub fn field_error(&self, field: Field, today: NaiveDate) -> Option<FieldError> {
        let d = &self.draft;
        let result = match field {
            Field::Id => self.id_result(),
            Field::Name => validate_name(&d.name),
            Field::Description => validate_description(&d.description),
            Field::Logo => validate_logo(&d.logo),
            Field::DateRelease => validate_release_date(&d.date_release, today).map(|_| ()),
            Field::DateRevision => validate_revision_date(&d.date_revision).map(|_| ()),
        };
        result.err()
    }

    pub fn errors(&self, today: NaiveDate) -> FormErrors {
        let mut errors = FormErrors::default();
        for field in Field::ALL {
            if let Some(err) = self.field_error(field, today) {
                errors.0.insert(field, err);
            }
        }
        errors
    }

    pub fn is_valid(&self, today: NaiveDate) -> bool {
        self.errors(today).is_empty() && self.id_check_status() != IdCheckStatus::Pending
    }

    fn id_result(&self) -> FieldResult {
        if self.is_edit() {
            return Ok(());
        }
        validate_id(&self.draft.id)?;
        if self.id_check_status() == IdCheckStatus::Taken {
            return Err(FieldError::AlreadyExists);
        }
        Ok(())
    }

    // --- identifier uniqueness -----------------------------------------------

    pub fn id_check_status(&self) -> IdCheckStatus {
        match &self.id_check {
            IdCheck::Unchecked => IdCheckStatus::Unchecked,
            IdCheck::Pending(id) if *id == self.draft.id => IdCheckStatus::Pending,
            IdCheck::Checked { id, exists } if *id == self.draft.id => {
                if *exists {
                    IdCheckStatus::Taken
                } else {
                    IdCheckStatus::Available
                }
            }
            _ => IdCheckStatus::Unchecked,
        }
    }

    /// Start a uniqueness check if one is due and returns the id to verify.
    ///
    /// Nothing to do in edit mode, when the id fails its length rule, or when
    /// the current value was already checked.
    pub fn begin_id_check(&mut self) -> Option<ProductId> {
        if self.is_edit() {
            return None;
        }
        let id = ProductId::parse(&self.draft.id).ok()?;
        if matches!(
            self.id_check_status(),
            IdCheckStatus::Available | IdCheckStatus::Taken
        ) {
            return None;
        }
        self.id_check = IdCheck::Pending(self.draft.id.clone());
        Some(id)
    }

    /// Record a uniqueness answer for `id`.
    ///
    /// Transport errors count as "not taken". Answers for an id that is no
    /// longer the current value are dropped.
    pub fn apply_id_check(&mut self, id: &ProductId, result: ApiResult<bool>) {
        let current = matches!(&self.id_check, IdCheck::Pending(p) if p == id.as_str())
            && self.draft.id == id.as_str();
        if !current {
            tracing::debug!(%id, "discarding stale id check");
            return;
        }

        let exists = result.unwrap_or_else(|err| {
            tracing::warn!(%id, error = %err, "id verification failed; accepting id");
            false
        });
        self.id_check = IdCheck::Checked {
            id: self.draft.id.clone(),
            exists,
        };
    }

    /// Run the uniqueness check for the current id if one is due.
    pub async fn check_id(&mut self, api: &impl ProductApi) {
        if let Some(id) = self.begin_id_check() {
            let result = api.verify_id(&id).await;
            self.apply_id_check(&id, result);
        }
    }

    // --- submit --------------------------------------------------------------

    /// Validate everything and build the request to send.
    ///
    /// An id whose uniqueness check is still out is not accepted.
    pub fn prepare_submit(&self, today: NaiveDate) -> Result<SubmitRequest, FormErrors> {
        let errors = self.errors(today);
        if !errors.is_empty() {
            return Err(errors);
        }
        if self.id_check_status() == IdCheckStatus::Pending {
            return Err(FormErrors::single(Field::Id, FieldError::VerificationPending));
        }

        let d = &self.draft;
        let schedule = validate_release_date(&d.date_release, today)
            .ok()
            .and_then(ReleaseSchedule::from_release)
            .ok_or_else(|| FormErrors::single(Field::DateRevision, FieldError::InvalidDate))?;

        let request = match &self.mode {
            FormMode::Create => {
                let id = ProductId::parse(&d.id).map_err(|e| FormErrors::single(Field::Id, e))?;
                SubmitRequest::Create(Product::new(id, &d.name, &d.description, &d.logo, schedule))
            }
            FormMode::Edit(id) => SubmitRequest::Update(Product::new(
                id.clone(),
                &d.name,
                &d.description,
                &d.logo,
                schedule,
            )),
        };
        Ok(request)
    }

    /// Validate and mark the form as submitting.
    ///
    /// Rejected while an earlier submit has not been applied.
    pub fn begin_submit(&mut self, today: NaiveDate) -> Result<SubmitRequest, SubmitError> {
        if self.submitting {
            return Err(SubmitError::InFlight);
        }
        let request = self.prepare_submit(today).map_err(SubmitError::Invalid)?;
        self.submitting = true;
        Ok(request)
    }

    /// Record the backend's answer. `Ok` means "navigate back to the list".
    pub fn apply_submit(&mut self, result: ApiResult<ProductMutation>) -> Result<Product, SubmitError> {
        self.submitting = false;
        match result {
            Ok(resp) => {
                tracing::info!(id = %resp.data.id(), message = %resp.message, "product saved");
                Ok(resp.data)
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to save product");
                Err(SubmitError::Api(err))
            }
        }
    }

    /// Check the id if due, validate, send create/update.
    ///
    /// Invalid forms send nothing.
    pub async fn submit(&mut self, api: &impl ProductApi, today: NaiveDate) -> Result<Product, SubmitError> {
        self.check_id(api).await;
        let request = self.begin_submit(today)?;
        let result = request.send(api).await;
        self.apply_submit(result)
    }

    // --- edit-mode load / reset ----------------------------------------------

    /// Patch the form from a bulk listing. Returns whether the product was found.
    ///
    /// Only meaningful in edit mode; a miss or a transport error leaves the
    /// form untouched.
    pub fn apply_loaded(&mut self, result: ApiResult<Vec<Product>>) -> bool {
        let FormMode::Edit(id) = &self.mode else {
            return false;
        };
        match result {
            Ok(products) => match products.iter().find(|p| p.id() == id) {
                Some(product) => {
                    self.draft = ProductDraft::from_product(product);
                    true
                }
                None => {
                    tracing::warn!(%id, "product not found in listing");
                    false
                }
            },
            Err(err) => {
                tracing::error!(%id, error = %err, "failed to load product");
                false
            }
        }
    }

    /// Edit mode: fetch the listing and patch the form from it.
    pub async fn load(&mut self, api: &impl ProductApi) -> bool {
        if !self.is_edit() {
            return false;
        }
        let result = api.list_products().await;
        self.apply_loaded(result)
    }

    /// Empty every field and forget the id check.
    pub fn clear(&mut self) {
        if let FormMode::Edit(id) = &self.mode {
            self.draft = ProductDraft {
                id: id.to_string(),
                ..ProductDraft::default()
            };
        } else {
            self.draft = ProductDraft::default();
        }
        self.id_check = IdCheck::Unchecked;
    }

    /// Edit mode reloads the stored product; create mode clears the form.
    pub async fn reset(&mut self, api: &impl ProductApi) {
        if self.is_edit() {
            self.load(api).await;
        } else {
            self.clear();
        }
    }
}
