//! Products domain module.
//!
//! The catalog `Product`, its wire format, and the field validation table the
//! form enforces. Deterministic domain logic only (no IO, no HTTP, no UI).

pub mod product;
pub mod validation;

pub use product::{Product, ProductId, ReleaseSchedule};
pub use validation::{
    DESCRIPTION_LEN, ID_LEN, LengthRule, NAME_LEN, validate_description, validate_id,
    validate_logo, validate_name, validate_release_date, validate_revision_date,
};
