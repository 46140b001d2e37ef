//! `prodcat-core`: shared building blocks for the product catalog client.
//!
//! Pure primitives only: the form error model, calendar helpers and the small
//! traits the domain types implement. No IO, no HTTP, no UI.

pub mod date;
pub mod entity;
pub mod error;
pub mod value_object;

pub use date::{add_one_year, format_date, parse_wire_date, today_local};
pub use entity::Entity;
pub use error::{Field, FieldError, FieldResult};
pub use value_object::ValueObject;
