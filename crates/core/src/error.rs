//! Form error model.

use thiserror::Error;

/// Result of validating a single field.
pub type FieldResult = Result<(), FieldError>;

/// Editable fields of the product form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Id,
    Name,
    Description,
    Logo,
    DateRelease,
    DateRevision,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Id,
        Field::Name,
        Field::Description,
        Field::Logo,
        Field::DateRelease,
        Field::DateRevision,
    ];

    /// Wire / form-control name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::Description => "description",
            Field::Logo => "logo",
            Field::DateRelease => "date_release",
            Field::DateRevision => "date_revision",
        }
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a field value was rejected.
///
/// A field reports at most one of these at a time. An empty value only ever
/// reports [`FieldError::Required`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("this field is required")]
    Required,

    #[error("must be at least {min} characters")]
    TooShort { min: usize },

    #[error("must be at most {max} characters")]
    TooLong { max: usize },

    /// The identifier is already taken on the backend.
    #[error("identifier already exists")]
    AlreadyExists,

    /// Release date is before today.
    #[error("date must be today or later")]
    DateInPast,

    #[error("not a valid date")]
    InvalidDate,

    /// The identifier uniqueness check has not answered yet.
    #[error("identifier verification in progress")]
    VerificationPending,
}

impl FieldError {
    pub fn too_short(min: usize) -> Self {
        Self::TooShort { min }
    }

    pub fn too_long(max: usize) -> Self {
        Self::TooLong { max }
    }
}
