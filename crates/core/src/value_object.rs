//! Value object trait: equality by value, not identity.

/// Marker trait for immutable domain values.
///
/// A value object has no identity - two instances with equal attributes are
/// interchangeable, and "modifying" one means constructing a new value. In
/// this workspace `Rating` and `Review` are value objects, while `Product`
/// is an entity whose id outlives any particular value of it.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
