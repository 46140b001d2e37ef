//! Field validation table for the product form.
//!
//! Every validator is synchronous and pure. The identifier uniqueness check
//! needs the backend and lives with the form state, not here.

use chrono::NaiveDate;

use prodcat_core::{FieldError, FieldResult, parse_wire_date};

/// Inclusive character-count bounds for a required text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRule {
    pub min: usize,
    pub max: usize,
}

impl LengthRule {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn check(&self, value: &str) -> FieldResult {
        if value.is_empty() {
            return Err(FieldError::Required);
        }
        let len = value.chars().count();
        if len < self.min {
            return Err(FieldError::too_short(self.min));
        }
        if len > self.max {
            return Err(FieldError::too_long(self.max));
        }
        Ok(())
    }
}

pub const ID_LEN: LengthRule = LengthRule::new(3, 10);
pub const NAME_LEN: LengthRule = LengthRule::new(5, 100);
pub const DESCRIPTION_LEN: LengthRule = LengthRule::new(10, 200);

pub fn validate_id(value: &str) -> FieldResult {
    ID_LEN.check(value)
}

pub fn validate_name(value: &str) -> FieldResult {
    NAME_LEN.check(value)
}

pub fn validate_description(value: &str) -> FieldResult {
    DESCRIPTION_LEN.check(value)
}

pub fn validate_logo(value: &str) -> FieldResult {
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    Ok(())
}

/// Release date must parse and must not be before `today`.
pub fn validate_release_date(value: &str, today: NaiveDate) -> Result<NaiveDate, FieldError> {
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    let date = parse_wire_date(value).ok_or(FieldError::InvalidDate)?;
    if date < today {
        return Err(FieldError::DateInPast);
    }
    Ok(date)
}

/// The review date is system-derived; it only has to be present and parse.
pub fn validate_revision_date(value: &str) -> Result<NaiveDate, FieldError> {
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    parse_wire_date(value).ok_or(FieldError::InvalidDate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn name_needs_five_characters() {
        assert_eq!(validate_name("abc"), Err(FieldError::too_short(5)));
        assert_eq!(validate_name("Nombre Largo"), Ok(()));
    }

    #[test]
    fn empty_values_only_report_required() {
        assert_eq!(validate_id(""), Err(FieldError::Required));
        assert_eq!(validate_name(""), Err(FieldError::Required));
        assert_eq!(validate_description(""), Err(FieldError::Required));
        assert_eq!(validate_logo(""), Err(FieldError::Required));
        assert_eq!(validate_release_date("", ymd(2025, 1, 1)), Err(FieldError::Required));
        assert_eq!(validate_revision_date(""), Err(FieldError::Required));
    }

    #[test]
    fn id_bounds_are_inclusive() {
        assert_eq!(validate_id("abc"), Ok(()));
        assert_eq!(validate_id("abcdefghij"), Ok(()));
        assert_eq!(validate_id("abcdefghijk"), Err(FieldError::too_long(10)));
    }

    #[test]
    fn description_bounds() {
        assert_eq!(validate_description("Desc..."), Err(FieldError::too_short(10)));
        assert_eq!(validate_description("Desc muy larga"), Ok(()));
        assert_eq!(
            validate_description(&"x".repeat(201)),
            Err(FieldError::too_long(200))
        );
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        // 5 chars, 10 bytes
        assert_eq!(validate_name("ñññññ"), Ok(()));
        assert_eq!(validate_id("ñ".repeat(10).as_str()), Ok(()));
    }

    #[test]
    fn release_date_today_or_later() {
        let today = ymd(2026, 10, 15);
        assert_eq!(validate_release_date("2026-10-15", today), Ok(today));
        assert_eq!(validate_release_date("2027-01-01", today), Ok(ymd(2027, 1, 1)));
        assert_eq!(
            validate_release_date("2026-10-14", today),
            Err(FieldError::DateInPast)
        );
    }

    #[test]
    fn release_date_ignores_time_of_day() {
        let today = ymd(2026, 10, 15);
        assert_eq!(
            validate_release_date("2026-10-15T23:59:59Z", today),
            Ok(today)
        );
    }

    #[test]
    fn release_date_must_parse() {
        assert_eq!(
            validate_release_date("15/10/2026", ymd(2026, 10, 15)),
            Err(FieldError::InvalidDate)
        );
        assert_eq!(validate_revision_date("nope"), Err(FieldError::InvalidDate));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: names shorter than 5 characters are rejected.
            #[test]
            fn short_names_are_invalid(name in "[A-Za-z ]{1,4}") {
                prop_assert_eq!(validate_name(&name), Err(FieldError::too_short(5)));
            }

            /// Property: any name of 5 to 100 characters is accepted.
            #[test]
            fn bounded_names_are_valid(name in "[A-Za-z0-9 ]{5,100}") {
                prop_assert_eq!(validate_name(&name), Ok(()));
            }

            /// Property: ids outside 3..=10 are rejected, inside accepted.
            #[test]
            fn id_length_rule(id in "[a-z0-9-]{1,20}") {
                let len = id.chars().count();
                prop_assert_eq!(validate_id(&id).is_ok(), (3..=10).contains(&len));
            }
        }
    }
}
