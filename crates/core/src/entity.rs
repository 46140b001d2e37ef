//! Entity trait: identity that survives edits.

/// Something that can be found again by its identifier after its other
/// attributes change (list removal, edit-mode lookup).
pub trait Entity {
    /// Identifier type.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
