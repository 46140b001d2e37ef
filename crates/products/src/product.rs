use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use prodcat_core::{Entity, FieldError, ValueObject, add_one_year};

use crate::validation::validate_id;

/// Product identifier, chosen by the user at creation and immutable after.
///
/// Deserialization trusts the backend; [`ProductId::parse`] applies the
/// form's length rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn parse(raw: &str) -> Result<Self, FieldError> {
        validate_id(raw)?;
        Ok(Self(raw.to_string()))
    }

    /// Wrap an id the backend already issued (route params, lookups).
    /// No length check.
    pub fn existing(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl core::str::FromStr for ProductId {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Release date together with the review date derived from it.
///
/// The review date is never set on its own: it is always one calendar year
/// after the release date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseSchedule {
    release: NaiveDate,
    revision: NaiveDate,
}

impl ReleaseSchedule {
    /// Returns `None` when the release date has no successor year.
    pub fn from_release(release: NaiveDate) -> Option<Self> {
        let revision = add_one_year(release)?;
        Some(Self { release, revision })
    }

    pub fn release(&self) -> NaiveDate {
        self.release
    }

    pub fn revision(&self) -> NaiveDate {
        self.revision
    }
}

impl ValueObject for ReleaseSchedule {}

/// A financial catalog entry as exchanged with the products API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub logo: String,
    #[serde(with = "wire_date")]
    pub date_release: NaiveDate,
    #[serde(with = "wire_date")]
    pub date_revision: NaiveDate,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        logo: impl Into<String>,
        schedule: ReleaseSchedule,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            logo: logo.into(),
            date_release: schedule.release(),
            date_revision: schedule.revision(),
        }
    }

    /// Case-insensitive substring match on name or description.
    ///
    /// `needle` must already be lowercased; an empty needle matches.
    pub fn matches_search(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// `YYYY-MM-DD` out; `YYYY-MM-DD` or ISO date-time in.
mod wire_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    use prodcat_core::{format_date, parse_wire_date};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_wire_date(&raw).ok_or_else(|| D::Error::custom(format!("invalid date: {raw:?}")))
    }
}
