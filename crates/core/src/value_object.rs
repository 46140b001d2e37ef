//! Value object trait: equality by value, not identity.
//!
//! Value objects have no identity of their own. Two instances holding the same
//! values are interchangeable, and "changing" one means building a new one.
//!
//! ```ignore
//! #[derive(Debug, Clone, PartialEq, Eq)]
//! struct ReleaseSchedule {
//!     release: NaiveDate,
//!     revision: NaiveDate,
//! }
//!
//! impl ValueObject for ReleaseSchedule {}
//! ```

/// Marker trait for value objects.
///
/// Requires `Clone` (values are copied, not shared), `PartialEq` (compared by
/// attributes) and `Debug` (shows up in logs and assertions).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
