//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// An entity keeps its identity while its value changes. Asking "is this the
/// same thing?" must go through the id, never through structural equality:
/// two values of the same entity can disagree on every other field.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;

    /// Whether two values denote the same entity, independent of field state.
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
