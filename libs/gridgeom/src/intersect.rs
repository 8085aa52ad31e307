//! Intersections of geometric objects.

/// Trait for calculating the intersection with another geometric object.
pub trait Intersect<T: ?Sized> {
    /// The type of the output shape representing the intersection.
    type Output;
    /// Calculates the region this shape shares with `other`.
    ///
    /// Returns [`None`] if there is no such region, or if the region
    /// cannot be represented by [`Self::Output`].
    fn intersect(&self, other: &T) -> Option<Self::Output>;
}
